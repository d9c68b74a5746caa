use serde::{Deserialize, Serialize};

/// Fields recovered from a recipe web page.
///
/// Every field is optional: extraction is best effort and a page that yields
/// only a title is still a useful result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedRecipe {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<String>,
}

impl ExtractedRecipe {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.ingredients.is_none()
            && self.steps.is_none()
            && self.image.is_none()
    }

    pub fn has_body(&self) -> bool {
        self.ingredients.as_ref().is_some_and(|i| !i.is_empty())
            || self.steps.as_ref().is_some_and(|s| !s.is_empty())
    }
}
