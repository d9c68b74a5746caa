use std::collections::HashSet;

/// Trim and case-fold tags, dropping empties and repeats while keeping order.
pub fn normalize_tags<S: AsRef<str>>(tags: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    tags.iter()
        .map(|tag| tag.as_ref().trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .filter(|tag| seen.insert(tag.clone()))
        .collect()
}

/// Split multi-line form text into trimmed, non-empty lines.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a comma-separated tag list and normalize it.
pub fn split_tags(text: &str) -> Vec<String> {
    let parts: Vec<&str> = text.split(',').collect();
    normalize_tags(&parts)
}

/// Current wall-clock time in epoch milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
