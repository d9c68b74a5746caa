use std::fmt;

use crate::presentation::formatters::{Paint, join_tags};
use crate::presentation::view_models::recipe::SaveAction;
use crate::presentation::view_models::{
    EditHandoffViewModel, RecipeSavedViewModel, RecipeViewModel, ViewOptions,
};

// --------------------------------------------------------
// Recipe Detail View
// --------------------------------------------------------

pub struct RecipeDetailView<'a> {
    data: &'a RecipeViewModel,
    options: ViewOptions,
}

impl<'a> RecipeDetailView<'a> {
    pub fn new(data: &'a RecipeViewModel, options: ViewOptions) -> Self {
        Self { data, options }
    }
}

impl fmt::Display for RecipeDetailView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let paint = Paint::new(self.options.color);
        let data = self.data;

        let title = if data.title.trim().is_empty() {
            "(untitled)"
        } else {
            data.title.trim()
        };
        match data.display_id {
            Some(display_id) => writeln!(f, "{} {}", paint.accent(&format!("#{}", display_id)), paint.bold(title))?,
            None => writeln!(f, "{}", paint.bold(title))?,
        }

        let fields = [
            ("id", data.storage_id.as_str()),
            ("added", data.date_added.as_str()),
            ("source", data.source.as_str()),
            ("date", data.date.as_str()),
            ("url", data.url.as_str()),
        ];
        for (label, value) in fields {
            if !value.is_empty() {
                writeln!(f, "  {:<7} {}", paint.dim(label), value)?;
            }
        }
        if !data.tags.is_empty() {
            writeln!(f, "  {:<7} {}", paint.dim("tags"), join_tags(&data.tags))?;
        }
        if data.has_image {
            writeln!(f, "  {:<7} yes", paint.dim("image"))?;
        }

        if !data.ingredients.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", paint.bold("Ingredients"))?;
            for item in &data.ingredients {
                writeln!(f, "  • {}", item)?;
            }
        }

        if !data.steps.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", paint.bold("Steps"))?;
            for (i, step) in data.steps.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, step)?;
            }
        }

        Ok(())
    }
}

// --------------------------------------------------------
// Recipe Saved View
// --------------------------------------------------------

pub struct RecipeSavedView<'a> {
    data: &'a RecipeSavedViewModel,
    options: ViewOptions,
}

impl<'a> RecipeSavedView<'a> {
    pub fn new(data: &'a RecipeSavedViewModel, options: ViewOptions) -> Self {
        Self { data, options }
    }
}

impl fmt::Display for RecipeSavedView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let paint = Paint::new(self.options.color);
        let verb = match self.data.action {
            SaveAction::Added => "Added",
            SaveAction::Imported => "Imported",
            SaveAction::Updated => "Updated",
        };
        writeln!(
            f,
            "{} \"{}\" ({})",
            verb, self.data.recipe.title, self.data.recipe.storage_id
        )?;
        if let Some(warning) = &self.data.warning {
            writeln!(f, "{} {}", paint.warn("Extraction failed:"), warning)?;
        }
        writeln!(f)?;
        write!(f, "{}", RecipeDetailView::new(&self.data.recipe, self.options))
    }
}

// --------------------------------------------------------
// Edit Handoff View
// --------------------------------------------------------

pub struct EditHandoffView<'a> {
    data: &'a EditHandoffViewModel,
    options: ViewOptions,
}

impl<'a> EditHandoffView<'a> {
    pub fn new(data: &'a EditHandoffViewModel, options: ViewOptions) -> Self {
        Self { data, options }
    }
}

impl fmt::Display for EditHandoffView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let paint = Paint::new(self.options.color);
        let data = self.data;
        writeln!(
            f,
            "{} #{} ({})",
            paint.bold("Editing"),
            data.display_id,
            data.storage_id
        )?;

        let fields = [
            ("title", &data.title),
            ("source", &data.source),
            ("date", &data.date),
            ("url", &data.url),
            ("tags", &data.tags),
            ("ingredients", &data.ingredients),
            ("steps", &data.steps),
        ];
        for (label, value) in fields {
            if value.contains('\n') {
                writeln!(f, "  {}:", paint.dim(label))?;
                for line in value.lines() {
                    writeln!(f, "    {}", line)?;
                }
            } else {
                writeln!(f, "  {:<12} {}", paint.dim(&format!("{}:", label)), value)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_numbers_steps() {
        let data = RecipeViewModel {
            storage_id: "1700000000000".to_string(),
            display_id: Some(1),
            date_added: "2023-11-14".to_string(),
            title: "Tortilla".to_string(),
            source: String::new(),
            date: String::new(),
            url: String::new(),
            ingredients: vec!["eggs".to_string(), "potatoes".to_string()],
            steps: vec!["Fry".to_string(), "Flip".to_string()],
            tags: Vec::new(),
            has_image: false,
        };

        let text = RecipeDetailView::new(&data, ViewOptions::default()).to_string();
        assert!(text.starts_with("#1 Tortilla\n"));
        assert!(text.contains("  • potatoes\n"));
        assert!(text.contains("  2. Flip\n"));
        assert!(!text.contains("source"));
    }
}
