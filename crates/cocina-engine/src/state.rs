use cocina_types::{PresentationMode, SortDirection, ViewField};
use serde::{Deserialize, Serialize};

use crate::filter::Filters;
use crate::paginator::DEFAULT_PAGE_SIZE;
use crate::sort::SortSpec;

/// Session-local view settings.
///
/// Transitions return a new value instead of mutating in place; the render
/// pipeline clamps `current_page` against the data it sees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub mode: PresentationMode,
    pub sort: SortSpec,
    pub current_page: usize,
    pub page_size: usize,
    pub filters: Filters,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            mode: PresentationMode::default(),
            sort: SortSpec::default(),
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            filters: Filters::default(),
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch renderer. Always lands on the first page; filters and sort stay.
    pub fn with_mode(&self, mode: PresentationMode) -> Self {
        Self {
            mode,
            current_page: 1,
            ..self.clone()
        }
    }

    /// Change one column's query. The result set changes, so go back to page 1.
    pub fn with_filter(&self, field: ViewField, query: &str) -> Self {
        let mut next = self.clone();
        next.filters.set(field, query);
        next.current_page = 1;
        next
    }

    pub fn with_filters(&self, filters: Filters) -> Self {
        Self {
            filters,
            current_page: 1,
            ..self.clone()
        }
    }

    /// Header-click sort: flips on the active column, ascending on a new one.
    pub fn with_sort_toggled(&self, column: ViewField) -> Self {
        Self {
            sort: self.sort.toggled(column),
            ..self.clone()
        }
    }

    pub fn with_sort(&self, column: ViewField, direction: SortDirection) -> Self {
        Self {
            sort: SortSpec::new(column, direction),
            ..self.clone()
        }
    }

    pub fn with_page(&self, page: usize) -> Self {
        Self {
            current_page: page.max(1),
            ..self.clone()
        }
    }

    pub fn next_page(&self) -> Self {
        self.with_page(self.current_page.saturating_add(1))
    }

    pub fn prev_page(&self) -> Self {
        self.with_page(self.current_page.saturating_sub(1))
    }

    pub fn with_page_size(&self, page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            ..self.clone()
        }
    }

    /// Same state with `current_page` forced into `[1, total_pages]`.
    pub fn clamped(&self, total_pages: usize) -> Self {
        Self {
            current_page: self.current_page.clamp(1, total_pages.max(1)),
            ..self.clone()
        }
    }
}
