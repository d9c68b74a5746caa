use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Navigation state of one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub total_items: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub page_size: usize,
}

impl PageInfo {
    pub fn new(total_items: usize, requested_page: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total_items.div_ceil(page_size).max(1);
        Self {
            total_items,
            total_pages,
            current_page: requested_page.clamp(1, total_pages),
            page_size,
        }
    }

    /// Zero-based offset of the first item on the current page.
    pub fn offset(&self) -> usize {
        (self.current_page - 1) * self.page_size
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// One-based positions of the first and last item shown, if any.
    pub fn item_range(&self) -> Option<(usize, usize)> {
        if self.total_items == 0 {
            return None;
        }
        let first = self.offset() + 1;
        let last = (self.offset() + self.page_size).min(self.total_items);
        Some((first, last))
    }
}

/// Slice `items` to the requested page, clamping the page into range.
pub fn paginate<T>(items: &[T], requested_page: usize, page_size: usize) -> (PageInfo, &[T]) {
    let info = PageInfo::new(items.len(), requested_page, page_size);
    let start = info.offset().min(items.len());
    let end = (start + info.page_size).min(items.len());
    (info, &items[start..end])
}
