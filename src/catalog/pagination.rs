//! Pagination Module
//!
//! Fixed-size display pages over an already fetched result list.

use serde::Serialize;

/// Items shown per display page
pub const ITEMS_PER_SCREEN: usize = 10;

// == Page ==
/// One display page of a result list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number after clamping
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl<T> Page<T> {
    /// Cuts page `page` out of `items`.
    ///
    /// The requested page is clamped into `[1, max(total_pages, 1)]`.
    pub fn of(items: Vec<T>, page: usize, per_page: usize) -> Self {
        let per_page = per_page.max(1);
        let total_items = items.len();
        let total_pages = total_items.div_ceil(per_page);
        let page = page.clamp(1, total_pages.max(1));

        let start = (page - 1) * per_page;
        let items: Vec<T> = items.into_iter().skip(start).take(per_page).collect();

        Self {
            items,
            page,
            total_pages,
            total_items,
            has_previous: page > 1,
            has_next: page < total_pages,
        }
    }
}
