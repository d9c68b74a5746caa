use cocina_types::ExtractedRecipe;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

use crate::markup;

static SCRIPT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script\b([^>]*)>(.*?)</script\s*>").unwrap());

static H1_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<h1\b[^>]*>(.*?)</h1\s*>").unwrap());

static TITLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title\b[^>]*>(.*?)</title\s*>").unwrap());

static HREF_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<a\b[^>]*?\bhref\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap()
});

static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").unwrap());

static WHITESPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Pull whatever recipe data a page exposes.
///
/// Structured `ld+json` Recipe metadata is preferred. Without it, ingredients
/// and steps come from marked page containers (steps last from the first
/// ordered list) and the title from the first heading or the document title.
/// Links are every absolute `href`.
pub fn parse_page(html: &str) -> ExtractedRecipe {
    let mut result = ExtractedRecipe::default();

    for block in ld_json_blocks(html) {
        let Ok(data) = serde_json::from_str::<Value>(block.trim()) else {
            continue;
        };
        if let Some(recipe) = find_recipe(&data) {
            apply_recipe_entry(recipe, &mut result);
        }
        if result.has_body() {
            break;
        }
    }

    if result.title.as_deref().is_none_or(|t| t.trim().is_empty()) {
        result.title = heading_title(html);
    }
    if result.ingredients.is_none() {
        result.ingredients = Some(markup::ingredient_items(html)).filter(|i| !i.is_empty());
    }
    if result.steps.is_none() {
        result.steps = Some(markup::step_items(html)).filter(|s| !s.is_empty());
    }

    result.links = links(html);
    result
}

fn ld_json_blocks(html: &str) -> impl Iterator<Item = &str> {
    SCRIPT_REGEX.captures_iter(html).filter_map(|caps| {
        let attrs = caps.get(1)?.as_str().to_ascii_lowercase();
        if attrs.contains("ld+json") {
            caps.get(2).map(|m| m.as_str())
        } else {
            None
        }
    })
}

/// First object typed `Recipe`, looking through top-level lists and `@graph`.
fn find_recipe(data: &Value) -> Option<&Value> {
    match data {
        Value::Array(entries) => entries.iter().find_map(find_recipe),
        Value::Object(map) => {
            if is_recipe(data) {
                return Some(data);
            }
            map.get("@graph").and_then(find_recipe)
        }
        _ => None,
    }
}

fn is_recipe(entry: &Value) -> bool {
    match entry.get("@type") {
        Some(Value::String(kind)) => kind == "Recipe",
        Some(Value::Array(kinds)) => kinds.iter().any(|k| k.as_str() == Some("Recipe")),
        _ => false,
    }
}

fn apply_recipe_entry(entry: &Value, result: &mut ExtractedRecipe) {
    if result.title.is_none()
        && let Some(name) = entry.get("name").and_then(Value::as_str)
    {
        let name = clean_text(name);
        if !name.is_empty() {
            result.title = Some(name);
        }
    }

    if let Some(Value::Array(items)) = entry.get("recipeIngredient") {
        let ingredients: Vec<String> = items
            .iter()
            .filter_map(Value::as_str)
            .map(clean_text)
            .filter(|line| !line.is_empty())
            .collect();
        if !ingredients.is_empty() {
            result.ingredients = Some(ingredients);
        }
    }

    if let Some(instructions) = entry.get("recipeInstructions") {
        let mut steps = Vec::new();
        collect_steps(instructions, &mut steps);
        if !steps.is_empty() {
            result.steps = Some(steps);
        }
    }

    if result.image.is_none() {
        result.image = entry.get("image").and_then(image_url);
    }
}

fn collect_steps(value: &Value, steps: &mut Vec<String>) {
    match value {
        Value::String(text) => steps.extend(
            text.lines()
                .map(clean_text)
                .filter(|line| !line.is_empty()),
        ),
        Value::Array(items) => {
            for item in items {
                match item {
                    Value::String(text) => {
                        let text = clean_text(text);
                        if !text.is_empty() {
                            steps.push(text);
                        }
                    }
                    Value::Object(_) => collect_step_object(item, steps),
                    _ => {}
                }
            }
        }
        Value::Object(_) => collect_step_object(value, steps),
        _ => {}
    }
}

// HowToSection nests its steps; HowToStep carries `text`.
fn collect_step_object(item: &Value, steps: &mut Vec<String>) {
    if let Some(nested) = item.get("itemListElement") {
        collect_steps(nested, steps);
    } else if let Some(text) = item.get("text").and_then(Value::as_str) {
        let text = clean_text(text);
        if !text.is_empty() {
            steps.push(text);
        }
    }
}

fn image_url(value: &Value) -> Option<String> {
    match value {
        Value::String(url) => Some(url.trim().to_string()).filter(|u| !u.is_empty()),
        Value::Array(items) => items.iter().find_map(image_url),
        Value::Object(map) => map.get("url").and_then(image_url),
        _ => None,
    }
}

fn heading_title(html: &str) -> Option<String> {
    [&*H1_REGEX, &*TITLE_REGEX].into_iter().find_map(|re| {
        let inner = re.captures(html)?.get(1)?.as_str();
        let text = clean_text(&TAG_REGEX.replace_all(inner, ""));
        (!text.is_empty()).then_some(text)
    })
}

fn links(html: &str) -> Vec<String> {
    HREF_REGEX
        .captures_iter(html)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| decode_entities(m.as_str().trim()))
        .filter(|href| href.starts_with("http"))
        .collect()
}

pub(crate) fn clean_text(text: &str) -> String {
    let decoded = decode_entities(text);
    WHITESPACE_REGEX
        .replace_all(decoded.trim(), " ")
        .into_owned()
}

/// Decode the handful of entities pages commonly leave in titles and hrefs.
pub fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#039;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_entities_does_not_double_decode() {
        assert_eq!(decode_entities("Mac &amp; cheese"), "Mac & cheese");
        assert_eq!(decode_entities("&amp;lt;"), "&lt;");
        assert_eq!(decode_entities("&quot;Pan&quot; &#39;n&#39;"), "\"Pan\" 'n'");
    }

    #[test]
    fn test_type_array_counts_as_recipe() {
        let data: Value = serde_json::json!({"@type": ["Recipe", "NewsArticle"], "name": "x"});
        assert!(is_recipe(&data));
        assert!(!is_recipe(&serde_json::json!({"@type": "WebPage"})));
    }

    #[test]
    fn test_instruction_shapes() {
        let mut steps = Vec::new();
        collect_steps(
            &serde_json::json!([
                "Chop onions",
                {"@type": "HowToStep", "text": " Fry them "},
                {"@type": "HowToSection", "itemListElement": [{"text": "Serve"}]},
                42
            ]),
            &mut steps,
        );
        assert_eq!(steps, vec!["Chop onions", "Fry them", "Serve"]);

        let mut steps = Vec::new();
        collect_steps(&serde_json::json!("Boil\n\n  Drain  \n"), &mut steps);
        assert_eq!(steps, vec!["Boil", "Drain"]);
    }

    #[test]
    fn test_image_shapes() {
        assert_eq!(
            image_url(&serde_json::json!(["", "https://a/1.jpg"])).as_deref(),
            Some("https://a/1.jpg")
        );
        assert_eq!(
            image_url(&serde_json::json!({"@type": "ImageObject", "url": "https://a/2.jpg"})).as_deref(),
            Some("https://a/2.jpg")
        );
        assert_eq!(image_url(&serde_json::json!(null)), None);
    }

    #[test]
    fn test_links_keep_apostrophes_in_double_quoted_hrefs() {
        let html = r#"<a href="https://example.com/grandma's-flan">x</a><a href='https://example.com/"q"'>y</a>"#;
        assert_eq!(
            links(html),
            vec!["https://example.com/grandma's-flan", "https://example.com/\"q\""]
        );
    }

    #[test]
    fn test_title_falls_back_to_document_title() {
        let html = "<html><head><title>Gazpacho &amp; more</title></head><body></body></html>";
        let extracted = parse_page(html);
        assert_eq!(extracted.title.as_deref(), Some("Gazpacho & more"));
    }
}
