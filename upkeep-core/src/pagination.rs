//! Pagination record

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// 1-based. Never below 1.
    pub current_page: u32,
    /// Never 0.
    pub page_size: u32,
    pub total_items: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            page_size: 10,
            total_items: 0,
        }
    }
}

impl Pagination {
    /// `ceil(total_items / page_size)`; 0 when there are no items.
    pub fn total_pages(&self) -> u64 {
        self.total_items.div_ceil(u64::from(self.page_size.max(1)))
    }

    /// False at `u32::MAX` even when more pages exist, so `next_page` never
    /// wraps.
    pub fn has_next(&self) -> bool {
        self.current_page < u32::MAX && u64::from(self.current_page) < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Direct jump. Only the lower bound is enforced; callers own the upper one.
    pub fn set_page(&mut self, page: u32) {
        self.current_page = page.max(1);
    }

    pub fn set_page_size(&mut self, size: u32) {
        self.page_size = size.max(1);
        self.current_page = 1;
    }

    pub fn set_total_items(&mut self, total: u64) {
        self.total_items = total;
    }

    pub fn next_page(&mut self) -> bool {
        if self.has_next() {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    pub fn previous_page(&mut self) -> bool {
        if self.has_previous() {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }
}
