use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::path::Path;

use crate::{Error, Result};

/// Read a local image and inline it as a `data:` URL.
pub fn image_data_url(path: &Path) -> Result<String> {
    let mime = mime_for(path).ok_or_else(|| {
        Error::InvalidInput(format!(
            "{} is not a supported image (png, jpg, gif, webp, svg)",
            path.display()
        ))
    })?;
    let bytes = std::fs::read(path)?;
    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}

/// An `--image` argument is either already a URL or a local file.
pub fn resolve_image(value: &str) -> Result<String> {
    let value = value.trim();
    if value.starts_with("http://") || value.starts_with("https://") || value.starts_with("data:") {
        return Ok(value.to_string());
    }
    image_data_url(Path::new(value))
}

fn mime_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}
