use super::enums::{ColumnArg, ModeArg, OrderArg};
use clap::{Args, Subcommand};
use cocina_types::{RecipeDraft, ViewField};
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Add a recipe by hand")]
    Add {
        #[arg(long)]
        title: String,

        #[command(flatten)]
        fields: RecipeFieldArgs,
    },

    #[command(about = "Import a recipe from a web page")]
    Import {
        url: String,

        #[arg(long, help = "Comma-separated tags")]
        tags: Option<String>,

        #[arg(long, help = "Override the source (default: the page host)")]
        source: Option<String>,
    },

    #[command(about = "Show one page of the collection")]
    List(ListArgs),

    #[command(about = "Browse the collection interactively (commands on stdin)")]
    Browse {
        #[arg(long, help = "Resume a browsing session by id")]
        session: Option<String>,

        #[arg(long)]
        page_size: Option<usize>,
    },

    #[command(about = "Show a recipe in full")]
    Show { storage_id: String },

    #[command(about = "Edit a recipe's fields")]
    Edit {
        storage_id: String,

        #[arg(long)]
        title: Option<String>,

        #[command(flatten)]
        fields: RecipeFieldArgs,
    },

    #[command(about = "Delete a recipe")]
    Delete { storage_id: String },

    #[command(about = "Export the collection as CSV")]
    Export {
        #[arg(long, short, help = "Write to a file instead of stdout")]
        output: Option<PathBuf>,
    },

    #[command(about = "Inspect or create the config file")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Show the effective configuration")]
    Show,

    #[command(about = "Write a config file with the current settings")]
    Init {
        #[arg(long, help = "Overwrite an existing config file")]
        force: bool,

        #[arg(long)]
        default_user: Option<String>,

        #[arg(long)]
        page_size: Option<usize>,

        #[arg(long, help = "Extraction service endpoint")]
        endpoint: Option<String>,
    },
}

/// Editable recipe fields shared by `add` and `edit`.
#[derive(Debug, Clone, Default, Args)]
pub struct RecipeFieldArgs {
    #[arg(long)]
    pub source: Option<String>,

    #[arg(long, help = "Free-text date, e.g. 2024-03-01")]
    pub date: Option<String>,

    #[arg(long)]
    pub url: Option<String>,

    #[arg(long, help = "One ingredient per line")]
    pub ingredients: Option<String>,

    #[arg(long, help = "One step per line")]
    pub steps: Option<String>,

    #[arg(long, help = "Comma-separated tags")]
    pub tags: Option<String>,

    #[arg(long, help = "Image file to embed, or an image URL")]
    pub image: Option<String>,
}

impl RecipeFieldArgs {
    pub fn is_empty(&self) -> bool {
        [
            &self.source,
            &self.date,
            &self.url,
            &self.ingredients,
            &self.steps,
            &self.tags,
            &self.image,
        ]
        .iter()
        .all(|field| field.is_none())
    }

    /// Overlay the fields that were given onto `draft`. The image is resolved
    /// separately since it may need a file read.
    pub fn apply_to(&self, mut draft: RecipeDraft) -> RecipeDraft {
        if let Some(source) = &self.source {
            draft = draft.with_source(source.as_str());
        }
        if let Some(date) = &self.date {
            draft = draft.with_date(date.as_str());
        }
        if let Some(url) = &self.url {
            draft = draft.with_url(url.as_str());
        }
        if let Some(ingredients) = &self.ingredients {
            draft = draft.with_ingredients_text(ingredients);
        }
        if let Some(steps) = &self.steps {
            draft = draft.with_steps_text(steps);
        }
        if let Some(tags) = &self.tags {
            draft = draft.with_tags_text(tags);
        }
        draft
    }
}

#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    #[arg(long, default_value = "1")]
    pub page: usize,

    #[arg(long)]
    pub sort: Option<ColumnArg>,

    #[arg(long)]
    pub order: Option<OrderArg>,

    #[arg(long)]
    pub filter_id: Option<String>,

    #[arg(long)]
    pub filter_date: Option<String>,

    #[arg(long)]
    pub filter_name: Option<String>,

    #[arg(long)]
    pub filter_source: Option<String>,

    #[arg(long)]
    pub filter_tags: Option<String>,

    #[arg(long)]
    pub mode: Option<ModeArg>,

    #[arg(long)]
    pub page_size: Option<usize>,
}

impl ListArgs {
    pub fn filters(&self) -> Vec<(ViewField, &str)> {
        [
            (ViewField::Id, &self.filter_id),
            (ViewField::DateAdded, &self.filter_date),
            (ViewField::Name, &self.filter_name),
            (ViewField::Source, &self.filter_source),
            (ViewField::Tags, &self.filter_tags),
        ]
        .into_iter()
        .filter_map(|(field, query)| query.as_deref().map(|q| (field, q)))
        .collect()
    }
}
