use cocina_extract::{Extractor, parse_target, source_host};
use cocina_types::{ExtractedRecipe, Recipe, RecipeDraft};
use tracing::{info, warn};

use crate::{Error, Result};

/// Draft for a URL import after extraction was attempted.
#[derive(Debug, Clone)]
pub struct ImportDraft {
    pub draft: RecipeDraft,
    pub extracted: Option<ExtractedRecipe>,
    /// Why extraction failed, when it did. The draft is still usable.
    pub warning: Option<String>,
}

/// Result of importing a URL into a collection.
#[derive(Debug, Clone)]
pub struct ImportOutcome {
    pub recipe: Recipe,
    pub extracted: Option<ExtractedRecipe>,
    pub warning: Option<String>,
}

/// Run extraction for `url` and fold the result into `draft`.
///
/// Extraction failures leave the draft as typed and are reported through
/// `warning`. The URL is always recorded and the page host fills an empty
/// source. A blank title falls back to the URL so the card is never empty.
pub fn prepare_import(url: &str, draft: RecipeDraft, extractor: &dyn Extractor) -> Result<ImportDraft> {
    let target = parse_target(url).map_err(|e| Error::InvalidInput(e.to_string()))?;
    let url = url.trim();

    let mut draft = draft;
    let (extracted, warning) = match extractor.extract(url) {
        Ok(extracted) => {
            info!(url, has_body = extracted.has_body(), "extracted recipe");
            draft.apply_extraction(&extracted);
            (Some(extracted), None)
        }
        Err(err) => {
            warn!(url, error = %err, "extraction failed, keeping draft as entered");
            (None, Some(err.to_string()))
        }
    };

    draft.url = url.to_string();
    if draft.source.trim().is_empty()
        && let Some(host) = source_host(target.as_str())
    {
        draft.source = host;
    }
    if draft.title.trim().is_empty() {
        draft.title = url.to_string();
    }

    Ok(ImportDraft {
        draft,
        extracted,
        warning,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cocina_extract::Error as ExtractError;

    struct Fixed(ExtractedRecipe);

    impl Extractor for Fixed {
        fn extract(&self, _url: &str) -> cocina_extract::Result<ExtractedRecipe> {
            Ok(self.0.clone())
        }
    }

    struct Failing;

    impl Extractor for Failing {
        fn extract(&self, _url: &str) -> cocina_extract::Result<ExtractedRecipe> {
            Err(ExtractError::Transport("connection refused".to_string()))
        }
    }

    #[test]
    fn test_successful_extraction_fills_draft() -> Result<()> {
        let extractor = Fixed(ExtractedRecipe {
            title: Some("Migas".to_string()),
            steps: Some(vec!["Soak the bread".to_string()]),
            ..ExtractedRecipe::default()
        });
        let draft = RecipeDraft::default().with_tags_text("breakfast");

        let prepared = prepare_import("https://www.example.com/migas", draft, &extractor)?;
        assert!(prepared.warning.is_none());
        assert_eq!(prepared.draft.title, "Migas");
        assert_eq!(prepared.draft.source, "example.com");
        assert_eq!(prepared.draft.url, "https://www.example.com/migas");
        assert_eq!(prepared.draft.tags, vec!["breakfast"]);
        Ok(())
    }

    #[test]
    fn test_failure_is_a_warning() -> Result<()> {
        let draft = RecipeDraft::default().with_source("Grandma");
        let prepared = prepare_import("https://example.com/x", draft, &Failing)?;

        assert!(prepared.extracted.is_none());
        assert!(prepared.warning.unwrap().contains("connection refused"));
        assert_eq!(prepared.draft.source, "Grandma");
        assert_eq!(prepared.draft.title, "https://example.com/x");
        Ok(())
    }

    #[test]
    fn test_non_http_url_is_rejected() {
        let result = prepare_import("javascript:alert(1)", RecipeDraft::default(), &Failing);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }
}
