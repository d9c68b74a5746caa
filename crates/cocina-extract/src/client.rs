use cocina_types::ExtractedRecipe;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::debug;

use crate::page::parse_page;
use crate::{BROWSER_USER_AGENT, Error, Extractor, Result, parse_target};

/// Client for a remote extraction service.
///
/// The service receives `{"url": ...}` and answers with whatever subset of
/// title, ingredients, steps, image and links it managed to scrape.
pub struct ServiceClient {
    agent: ureq::Agent,
    endpoint: String,
}

impl ServiceClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            agent: agent(timeout),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Extractor for ServiceClient {
    fn extract(&self, url: &str) -> Result<ExtractedRecipe> {
        let target = parse_target(url)?;
        debug!(endpoint = %self.endpoint, url = %target, "requesting extraction");

        let response = self
            .agent
            .post(&self.endpoint)
            .set("content-type", "application/json")
            .send_json(json!({ "url": url.trim() }))?;

        let body: Value = response
            .into_json()
            .map_err(|e| Error::InvalidResponse(e.to_string()))?;
        decode_response(body)
    }
}

/// Decode a service response one field at a time.
///
/// A missing or mistyped field is skipped; only a body that is not a JSON
/// object is an error.
pub fn decode_response(body: Value) -> Result<ExtractedRecipe> {
    let Value::Object(map) = body else {
        return Err(Error::InvalidResponse(
            "expected a JSON object".to_string(),
        ));
    };

    Ok(ExtractedRecipe {
        title: map.get("title").and_then(non_empty_text),
        ingredients: map.get("ingredients").and_then(text_list),
        steps: map.get("steps").and_then(text_list),
        image: map.get("image").and_then(non_empty_text),
        links: map.get("links").and_then(text_list).unwrap_or_default(),
    })
}

fn non_empty_text(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn text_list(value: &Value) -> Option<Vec<String>> {
    let items = value.as_array()?;
    Some(items.iter().filter_map(non_empty_text).collect())
}

/// Fetches the page itself and parses it locally.
pub struct PageExtractor {
    agent: ureq::Agent,
}

impl PageExtractor {
    pub fn new(timeout: Duration) -> Self {
        Self {
            agent: agent(timeout),
        }
    }

    /// GET the page body with a desktop browser user agent.
    pub fn fetch(&self, url: &str) -> Result<String> {
        let target = parse_target(url)?;
        debug!(url = %target, "fetching page");
        let response = self.agent.get(target.as_str()).call()?;
        Ok(response.into_string()?)
    }
}

impl Extractor for PageExtractor {
    fn extract(&self, url: &str) -> Result<ExtractedRecipe> {
        let html = self.fetch(url)?;
        Ok(parse_page(&html))
    }
}

fn agent(timeout: Duration) -> ureq::Agent {
    ureq::AgentBuilder::new()
        .timeout_connect(timeout)
        .timeout_read(timeout)
        .timeout_write(timeout)
        .user_agent(BROWSER_USER_AGENT)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_skips_malformed_fields() {
        let body = json!({
            "title": "  Pisto  ",
            "ingredients": "not a list",
            "steps": ["Chop", 3, "", "Stew"],
            "image": 12,
            "links": ["https://example.com/a"]
        });

        let extracted = decode_response(body).unwrap();
        assert_eq!(extracted.title.as_deref(), Some("Pisto"));
        assert_eq!(extracted.ingredients, None);
        assert_eq!(extracted.steps, Some(vec!["Chop".to_string(), "Stew".to_string()]));
        assert_eq!(extracted.image, None);
        assert_eq!(extracted.links, vec!["https://example.com/a"]);
    }

    #[test]
    fn test_decode_rejects_non_object() {
        let err = decode_response(json!(["title"])).unwrap_err();
        assert!(matches!(err, Error::InvalidResponse(_)));
    }

    #[test]
    fn test_empty_object_is_empty_extraction() {
        let extracted = decode_response(json!({})).unwrap();
        assert!(extracted.is_empty());
        assert!(extracted.links.is_empty());
    }

    #[test]
    fn test_rejects_non_http_url_before_any_request() {
        let client = ServiceClient::new("http://127.0.0.1:9/extract", Duration::from_secs(1));
        let err = client.extract("ftp://example.com/recipe").unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }
}
