use std::fmt;

use cocina_types::ViewField;

use crate::presentation::formatters::{Paint, fit, join_tags, single_line, truncate};
use crate::presentation::view_models::{CollectionPageViewModel, RecipeRowViewModel, ViewOptions};

const ID_WIDTH: usize = 5;
const DATE_WIDTH: usize = 12;
const SOURCE_WIDTH: usize = 18;
const GAP: &str = "  ";

// --------------------------------------------------------
// Shared header / footer
// --------------------------------------------------------

fn column_label(field: ViewField) -> &'static str {
    match field {
        ViewField::Id => "ID",
        ViewField::DateAdded => "DATE ADDED",
        ViewField::Name => "NAME",
        ViewField::Source => "SOURCE",
        ViewField::Tags => "TAGS",
    }
}

fn write_header(f: &mut fmt::Formatter<'_>, data: &CollectionPageViewModel, paint: Paint) -> fmt::Result {
    writeln!(
        f,
        "{} {}",
        paint.bold(&format!("{}'s recipes", data.user)),
        paint.dim(&format!(
            "({} of {}, sorted by {} {})",
            data.total_items,
            data.collection_size,
            column_label(data.sort.column).to_lowercase(),
            data.sort.direction.indicator()
        ))
    )?;

    if !data.filters.is_empty() {
        let active: Vec<String> = data
            .filters
            .iter()
            .map(|(field, query)| format!("{} ~ \"{}\"", field, query))
            .collect();
        writeln!(f, "{} {}", paint.dim("Filters:"), active.join(", "))?;
    }
    writeln!(f)
}

fn write_empty(f: &mut fmt::Formatter<'_>, data: &CollectionPageViewModel) -> fmt::Result {
    if data.collection_size == 0 {
        writeln!(f, "No recipes yet. Add one with `cocina add` or `cocina import`.")
    } else {
        writeln!(f, "No recipes match the current filters.")
    }
}

fn write_footer(f: &mut fmt::Formatter<'_>, data: &CollectionPageViewModel, paint: Paint) -> fmt::Result {
    writeln!(f)?;
    writeln!(
        f,
        "{}",
        paint.dim(&format!(
            "Page {}/{} · {} per page",
            data.page, data.total_pages, data.page_size
        ))
    )
}

// --------------------------------------------------------
// Card View
// --------------------------------------------------------

pub struct CardView<'a> {
    data: &'a CollectionPageViewModel,
    options: ViewOptions,
}

impl<'a> CardView<'a> {
    pub fn new(data: &'a CollectionPageViewModel, options: ViewOptions) -> Self {
        Self { data, options }
    }

    fn write_card(&self, f: &mut fmt::Formatter<'_>, row: &RecipeRowViewModel, paint: Paint) -> fmt::Result {
        let width = self.options.width.max(40);
        let title = if row.name.is_empty() {
            "(untitled)".to_string()
        } else {
            truncate(&single_line(&row.name), width.saturating_sub(20))
        };

        writeln!(
            f,
            "{} {}  {}",
            paint.accent(&format!("#{}", row.display_id)),
            paint.bold(&title),
            paint.dim(&row.date_added)
        )?;

        let mut details = Vec::new();
        if !row.source.is_empty() {
            details.push(format!("from {}", single_line(&row.source)));
        }
        details.push(format!(
            "{} ingredient(s), {} step(s)",
            row.ingredient_count, row.step_count
        ));
        if row.has_image {
            details.push("image".to_string());
        }
        writeln!(f, "    {}", truncate(&details.join(" · "), width.saturating_sub(4)))?;

        if !row.tags.is_empty() {
            writeln!(f, "    {}", paint.dim(&format!("tags: {}", join_tags(&row.tags))))?;
        }
        writeln!(f, "    {}", paint.dim(&format!("id {}", row.storage_id)))
    }
}

impl fmt::Display for CardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let paint = Paint::new(self.options.color);
        write_header(f, self.data, paint)?;

        if self.data.rows.is_empty() {
            write_empty(f, self.data)?;
        }
        for (i, row) in self.data.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            self.write_card(f, row, paint)?;
        }

        write_footer(f, self.data, paint)
    }
}

// --------------------------------------------------------
// Table View
// --------------------------------------------------------

pub struct TableView<'a> {
    data: &'a CollectionPageViewModel,
    options: ViewOptions,
}

impl<'a> TableView<'a> {
    pub fn new(data: &'a CollectionPageViewModel, options: ViewOptions) -> Self {
        Self { data, options }
    }

    /// Widths of the flexible name and tags columns.
    fn flexible_widths(&self) -> (usize, usize) {
        let fixed = ID_WIDTH + DATE_WIDTH + SOURCE_WIDTH + GAP.len() * 4;
        let remaining = self.options.width.saturating_sub(fixed).max(24);
        let name = remaining * 3 / 5;
        (name, remaining - name)
    }

    fn header_cell(&self, field: ViewField) -> String {
        let label = column_label(field);
        if self.data.sort.column == field {
            format!("{} {}", label, self.data.sort.direction.indicator())
        } else {
            label.to_string()
        }
    }
}

impl fmt::Display for TableView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let paint = Paint::new(self.options.color);
        write_header(f, self.data, paint)?;

        if self.data.rows.is_empty() {
            write_empty(f, self.data)?;
            return write_footer(f, self.data, paint);
        }

        let (name_width, tags_width) = self.flexible_widths();
        let header = [
            fit(&self.header_cell(ViewField::Id), ID_WIDTH),
            fit(&self.header_cell(ViewField::DateAdded), DATE_WIDTH),
            fit(&self.header_cell(ViewField::Name), name_width),
            fit(&self.header_cell(ViewField::Source), SOURCE_WIDTH),
            self.header_cell(ViewField::Tags),
        ]
        .join(GAP);
        writeln!(f, "{}", paint.bold(header.trim_end()))?;
        writeln!(
            f,
            "{}",
            paint.dim(&"-".repeat(ID_WIDTH + DATE_WIDTH + name_width + SOURCE_WIDTH + tags_width + GAP.len() * 4))
        )?;

        for row in &self.data.rows {
            let line = [
                fit(&row.display_id.to_string(), ID_WIDTH),
                fit(&row.date_added, DATE_WIDTH),
                fit(&row.name, name_width),
                fit(&row.source, SOURCE_WIDTH),
                truncate(&join_tags(&row.tags), tags_width),
            ]
            .join(GAP);
            writeln!(f, "{}", line.trim_end())?;
        }

        write_footer(f, self.data, paint)
    }
}
