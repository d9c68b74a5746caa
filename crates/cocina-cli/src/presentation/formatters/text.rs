use owo_colors::OwoColorize;

pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// Truncate, then left-align in exactly `width` characters.
pub fn fit(text: &str, width: usize) -> String {
    let text = truncate(&single_line(text), width);
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}

/// Collapse newlines and runs of whitespace into single spaces.
pub fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}

/// ANSI styling that turns itself off for pipes and `NO_COLOR`.
#[derive(Debug, Clone, Copy)]
pub struct Paint {
    enabled: bool,
}

impl Paint {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn bold(&self, text: &str) -> String {
        if self.enabled {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn dim(&self, text: &str) -> String {
        if self.enabled {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn accent(&self, text: &str) -> String {
        if self.enabled {
            text.cyan().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn warn(&self, text: &str) -> String {
        if self.enabled {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("jalapeño", 20), "jalapeño");
        assert_eq!(truncate("jalapeño poppers", 10), "jalapeñ...");
    }

    #[test]
    fn test_fit_pads_and_flattens() {
        assert_eq!(fit("a\nb", 5), "a b  ");
        assert_eq!(fit("abcdefgh", 6), "abc...");
    }

    #[test]
    fn test_paint_disabled_is_plain() {
        let paint = Paint::new(false);
        assert_eq!(paint.bold("x"), "x");
        assert_eq!(paint.accent("x"), "x");
    }
}
