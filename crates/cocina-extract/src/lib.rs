// Recipe extraction from web pages
// Either delegates to a remote extraction service or fetches and parses the page locally

mod client;
mod error;
mod markup;
mod page;

use cocina_types::ExtractedRecipe;
use std::time::Duration;
use url::Url;

pub use client::{PageExtractor, ServiceClient, decode_response};
pub use error::{Error, Result};
pub use page::{decode_entities, parse_page};

/// Desktop browser User-Agent sent with page fetches.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/117 Safari/537.36";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Turns a recipe URL into whatever structured data can be recovered.
pub trait Extractor {
    fn extract(&self, url: &str) -> Result<ExtractedRecipe>;
}

impl<T: Extractor + ?Sized> Extractor for Box<T> {
    fn extract(&self, url: &str) -> Result<ExtractedRecipe> {
        (**self).extract(url)
    }
}

/// Service client when an endpoint is configured, local parser otherwise.
pub fn extractor_for(endpoint: Option<&str>, timeout: Duration) -> Box<dyn Extractor> {
    match endpoint.map(str::trim).filter(|e| !e.is_empty()) {
        Some(endpoint) => Box::new(ServiceClient::new(endpoint, timeout)),
        None => Box::new(PageExtractor::new(timeout)),
    }
}

/// Parse a user-supplied recipe URL, accepting only http and https.
pub fn parse_target(url: &str) -> Result<Url> {
    let parsed = Url::parse(url.trim())?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(Error::InvalidUrl(format!(
            "unsupported scheme '{}' in {}",
            other,
            url.trim()
        ))),
    }
}

/// Host of a recipe URL, used as the default `source` of imported recipes.
pub fn source_host(url: &str) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;
    let host = parsed.host_str()?;
    Some(host.strip_prefix("www.").unwrap_or(host).to_string())
}
