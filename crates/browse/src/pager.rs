//! Page Navigator.
//!
//! One state variable: the 1-based current page. The valid upper bound
//! (`total_pages`) is recomputed by the engine on every render and passed
//! in, never stored here.

/// Tracks the current page and clamps transitions to the valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    current_page: usize,
    items_per_page: usize,
}

impl Pager {
    /// `items_per_page` must be positive (programmer error otherwise).
    pub fn new(items_per_page: usize) -> Self {
        assert!(items_per_page > 0, "items_per_page must be positive");
        Self {
            current_page: 1,
            items_per_page,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Accept the transition only if `1 <= page <= total_pages`; anything
    /// else is a silent no-op. Returns whether the transition was accepted
    /// so the caller can run its scroll-to-top side effect.
    pub fn go_to_page(&mut self, page: usize, total_pages: usize) -> bool {
        if page < 1 || page > total_pages {
            return false;
        }
        if page != self.current_page {
            tracing::debug!(from = self.current_page, to = page, "page transition");
        }
        self.current_page = page;
        true
    }

    /// Unconditional jump back to page 1. Called whenever any input that
    /// changes the filtered/sorted result set changes value.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }
}
