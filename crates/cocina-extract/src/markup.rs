use regex::Regex;
use std::sync::LazyLock;

static TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<(/?)([a-zA-Z][a-zA-Z0-9-]*)\b([^>]*)>").unwrap());

static ATTR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\b([a-z][a-z0-9_:-]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#).unwrap()
});

// Blocks whose text is never page content.
static SKIPPED_BLOCK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<!--.*?-->|<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>")
        .unwrap()
});

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

const INGREDIENT_MARKERS: &[&str] = &["ingredient"];
const STEP_MARKERS: &[&str] = &["instruction", "direction", "step"];
const USER_CONTENT_MARKERS: &[&str] = &["comment", "review"];

/// One opening tag with the byte range of its content.
#[derive(Debug)]
struct Element<'a> {
    name: String,
    attrs: &'a str,
    start: usize,
    content: (usize, usize),
    /// Attributes of the enclosing element, if any.
    parent_attrs: Option<&'a str>,
}

impl Element<'_> {
    fn attr(&self, name: &str) -> Option<String> {
        attr_value(self.attrs, name)
    }

    fn class_or_id_contains(&self, markers: &[&str]) -> bool {
        ["class", "id"].into_iter().any(|name| {
            self.attr(name)
                .is_some_and(|value| contains_any(&value.to_lowercase(), markers))
        })
    }
}

/// Opening tags in document order, each with its content range and parent.
///
/// Tolerant of sloppy markup: an element never closed runs to the end of its
/// parent, and a stray closing tag is ignored.
fn elements(html: &str) -> Vec<Element<'_>> {
    let mut elements: Vec<Element<'_>> = Vec::new();
    // Indices into `elements` of the currently open tags.
    let mut open: Vec<usize> = Vec::new();

    for caps in TOKEN_REGEX.captures_iter(html) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(2)) else {
            continue;
        };
        let name = name.as_str().to_ascii_lowercase();
        let closing = caps.get(1).is_some_and(|m| !m.as_str().is_empty());
        let attrs = caps.get(3).map_or("", |m| m.as_str());

        if closing {
            let Some(depth) = open.iter().rposition(|&i| elements[i].name == name) else {
                continue;
            };
            for index in open.drain(depth..) {
                elements[index].content.1 = whole.start();
            }
            continue;
        }

        if let Some(depth) = implied_close(&elements, &open, &name) {
            for index in open.drain(depth..) {
                elements[index].content.1 = whole.start();
            }
        }

        let parent_attrs = open.last().map(|&i| elements[i].attrs);
        let void = VOID_ELEMENTS.contains(&name.as_str()) || attrs.trim_end().ends_with('/');
        elements.push(Element {
            name,
            attrs,
            start: whole.start(),
            content: (whole.end(), if void { whole.end() } else { html.len() }),
            parent_attrs,
        });
        if !void {
            open.push(elements.len() - 1);
        }
    }

    elements
}

/// Position in `open` of an `li` or `p` that a new sibling ends implicitly.
fn implied_close(elements: &[Element<'_>], open: &[usize], name: &str) -> Option<usize> {
    match name {
        "li" => {
            let depth = open
                .iter()
                .rposition(|&i| matches!(elements[i].name.as_str(), "li" | "ul" | "ol"))?;
            (elements[open[depth]].name == "li").then_some(depth)
        }
        "p" => {
            let &top = open.last()?;
            (elements[top].name == "p").then_some(open.len() - 1)
        }
        _ => None,
    }
}

/// Ingredient lines from `li`/`p` items of containers marked as ingredients.
pub fn ingredient_items(html: &str) -> Vec<String> {
    container_items(&content_only(html), INGREDIENT_MARKERS)
}

/// Step lines from containers marked as instructions, else from the first
/// ordered list outside a comment or review block.
pub fn step_items(html: &str) -> Vec<String> {
    let html = content_only(html);
    let steps = container_items(&html, STEP_MARKERS);
    if !steps.is_empty() {
        return steps;
    }
    first_ordered_list(&html)
}

fn content_only(html: &str) -> String {
    SKIPPED_BLOCK_REGEX.replace_all(html, " ").into_owned()
}

fn container_items(html: &str, markers: &[&str]) -> Vec<String> {
    let elements = elements(html);
    let mut items = Vec::new();
    // A container nested in one already taken would repeat its items.
    let mut taken_until = 0;

    for (index, element) in elements.iter().enumerate() {
        if element.start < taken_until
            || !element.class_or_id_contains(markers)
            || element.class_or_id_contains(USER_CONTENT_MARKERS)
        {
            continue;
        }

        items.extend(item_texts(html, &elements, index, &["li", "p"]));
        taken_until = element.content.1;
    }

    items
}

fn first_ordered_list(html: &str) -> Vec<String> {
    let elements = elements(html);

    for (index, element) in elements.iter().enumerate() {
        if element.name != "ol" {
            continue;
        }
        let parent_class = element
            .parent_attrs
            .and_then(|attrs| attr_value(attrs, "class"))
            .unwrap_or_default()
            .to_lowercase();
        if contains_any(&parent_class, USER_CONTENT_MARKERS) {
            continue;
        }

        let steps = item_texts(html, &elements, index, &["li"]);
        if !steps.is_empty() {
            return steps;
        }
    }

    Vec::new()
}

/// Text of every descendant of `elements[index]` named one of `names`.
fn item_texts(html: &str, elements: &[Element<'_>], index: usize, names: &[&str]) -> Vec<String> {
    let (start, end) = elements[index].content;
    elements[index + 1..]
        .iter()
        .take_while(|child| child.start < end)
        .filter(|child| child.start >= start && names.contains(&child.name.as_str()))
        .map(|child| text_of(&html[child.content.0..child.content.1]))
        .filter(|text| !text.is_empty())
        .collect()
}

/// Visible text with tags turned into spaces.
fn text_of(fragment: &str) -> String {
    crate::page::clean_text(&TOKEN_REGEX.replace_all(fragment, " "))
}

fn attr_value(attrs: &str, name: &str) -> Option<String> {
    ATTR_REGEX.captures_iter(attrs).find_map(|caps| {
        if !caps.get(1)?.as_str().eq_ignore_ascii_case(name) {
            return None;
        }
        (2..=4)
            .find_map(|group| caps.get(group))
            .map(|m| m.as_str().to_string())
    })
}

fn contains_any(haystack: &str, markers: &[&str]) -> bool {
    markers.iter().any(|marker| haystack.contains(marker))
}
