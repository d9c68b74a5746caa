use serde::{Deserialize, Serialize};

use super::extraction::ExtractedRecipe;
use super::recipe::Recipe;
use crate::{normalize_tags, split_lines, split_tags};

/// Editable fields of a recipe, as collected by the add/edit forms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeDraft {
    pub title: String,
    pub source: String,
    pub date: String,
    pub url: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub tags: Vec<String>,
    pub image: Option<String>,
}

impl RecipeDraft {
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            title: recipe.title.clone(),
            source: recipe.source.clone(),
            date: recipe.date.clone(),
            url: recipe.url.clone(),
            ingredients: recipe.ingredients.clone(),
            steps: recipe.steps.clone(),
            tags: recipe.tags.clone(),
            image: recipe.image.clone(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Newline-separated form text; blank lines are dropped.
    pub fn with_ingredients_text(mut self, text: &str) -> Self {
        self.ingredients = split_lines(text);
        self
    }

    pub fn with_steps_text(mut self, text: &str) -> Self {
        self.steps = split_lines(text);
        self
    }

    /// Comma-separated form text.
    pub fn with_tags_text(mut self, text: &str) -> Self {
        self.tags = split_tags(text);
        self
    }

    pub fn with_image(mut self, image: Option<String>) -> Self {
        self.image = image;
        self
    }

    /// Populate the draft from an extraction result.
    ///
    /// A field is only overwritten when the extraction produced a non-empty
    /// value for it; everything else in the draft is left as typed.
    pub fn apply_extraction(&mut self, extracted: &ExtractedRecipe) {
        if let Some(title) = extracted.title.as_deref().map(str::trim)
            && !title.is_empty()
        {
            self.title = title.to_string();
        }
        if let Some(ingredients) = &extracted.ingredients
            && !ingredients.is_empty()
        {
            self.ingredients = ingredients.clone();
        }
        if let Some(steps) = &extracted.steps
            && !steps.is_empty()
        {
            self.steps = steps.clone();
        }
        if let Some(image) = &extracted.image
            && !image.is_empty()
        {
            self.image = Some(image.clone());
        }
    }

    /// Copy the draft onto a record, leaving identity and creation time alone.
    pub fn write_to(&self, recipe: &mut Recipe) {
        recipe.title = self.title.trim().to_string();
        recipe.source = self.source.trim().to_string();
        recipe.date = self.date.trim().to_string();
        recipe.url = self.url.trim().to_string();
        recipe.ingredients = self.ingredients.clone();
        recipe.steps = self.steps.clone();
        recipe.tags = normalize_tags(&self.tags);
        recipe.image = self.image.clone().filter(|i| !i.is_empty());
    }
}
