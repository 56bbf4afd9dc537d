//! Page bounds for list endpoints.
//!
//! The API reports `total_pages`, but refuses to serve anything past page
//! 500. Every navigation decision goes through [`PageBounds`] so the current
//! page stays inside `[1, min(total_pages, 500)]`.

/// Hard cap on the page number the external API will serve
pub const MAX_PAGES: u32 = 500;

/// Navigation limits derived from the most recent fetch.
///
/// ## Invariant
/// `last_page()` is always in `[1, MAX_PAGES]`, so every page produced by
/// `prev`, `next` or `clamp` is a page the API will answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBounds {
    total_pages: u32,
}

impl PageBounds {
    /// Bounds for a reported page count. Zero is treated as one.
    pub fn new(total_pages: u32) -> Self {
        Self {
            total_pages: total_pages.max(1),
        }
    }

    /// Page count as reported by the API (at least 1)
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// The highest reachable page, which is also the total shown to the user
    pub fn last_page(&self) -> u32 {
        self.total_pages.min(MAX_PAGES)
    }

    pub fn can_go_prev(&self, page: u32) -> bool {
        page > 1
    }

    /// False on the last reported page and on the API's page cap
    pub fn can_go_next(&self, page: u32) -> bool {
        page < self.last_page()
    }

    /// `max(1, page - 1)`
    pub fn prev(&self, page: u32) -> u32 {
        page.saturating_sub(1).max(1)
    }

    /// `min(last_page, page + 1)`
    pub fn next(&self, page: u32) -> u32 {
        page.saturating_add(1).min(self.last_page())
    }

    /// Pull an arbitrary page number back inside the bounds
    pub fn clamp(&self, page: u32) -> u32 {
        page.clamp(1, self.last_page())
    }
}

impl Default for PageBounds {
    fn default() -> Self {
        Self::new(1)
    }
}
