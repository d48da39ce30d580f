//! Session facade: the surface a presentation layer drives.
//!
//! There is no reactive subscription anywhere in this core. The
//! presentation layer forwards every keystroke/selection into the setters
//! below, then calls [`BrowseSession::view`] to recompute the visible page.
//! The session enforces the ordering contract: any mutation that changes
//! the filtered/sorted result set resets the page to 1 before the next
//! recompute can observe it.

use storefront_catalog::Catalog;

use crate::engine::{SortMode, View, compute_view};
use crate::filter::{FilterState, FilterValues};
use crate::pager::Pager;

/// One catalog-browsing session.
///
/// Owns the catalog, the filter store, the sort mode and the pager.
/// Single-threaded and synchronous: exactly one logical actor drives
/// sequential transitions, so every mutation here is atomic with respect
/// to every [`BrowseSession::view`] call.
#[derive(Debug, Clone)]
pub struct BrowseSession {
    catalog: Catalog,
    filters: FilterState,
    sort_mode: SortMode,
    pager: Pager,
}

impl BrowseSession {
    pub fn new(catalog: Catalog, items_per_page: usize) -> Self {
        Self {
            catalog,
            filters: FilterState::new(),
            sort_mode: SortMode::Default,
            pager: Pager::new(items_per_page),
        }
    }

    /// Session that renders the empty state until the one-shot catalog
    /// load completes; attach the result with
    /// [`BrowseSession::replace_catalog`].
    pub fn before_load(items_per_page: usize) -> Self {
        Self::new(Catalog::empty(), items_per_page)
    }

    /// Attach a (newly loaded) catalog. The result set changes wholesale,
    /// so the page resets.
    pub fn replace_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        self.pager.reset();
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    pub fn current_page(&self) -> usize {
        self.pager.current_page()
    }

    pub fn items_per_page(&self) -> usize {
        self.pager.items_per_page()
    }

    // Draft edits are invisible to the engine, so none of these touch the
    // pager.

    pub fn set_draft_search_query(&mut self, query: impl Into<String>) {
        self.filters.set_draft_search_query(query);
    }

    pub fn set_draft_category(&mut self, category: impl Into<String>) {
        self.filters.set_draft_category(category);
    }

    pub fn set_draft_min_price(&mut self, price: Option<f64>) {
        self.filters.set_draft_min_price(price);
    }

    pub fn set_draft_max_price(&mut self, price: Option<f64>) {
        self.filters.set_draft_max_price(price);
    }

    pub fn set_draft_min_price_text(&mut self, raw: &str) {
        self.filters.set_draft_min_price_text(raw);
    }

    pub fn set_draft_max_price_text(&mut self, raw: &str) {
        self.filters.set_draft_max_price_text(raw);
    }

    pub fn set_draft_keyword(&mut self, keyword: impl Into<String>) {
        self.filters.set_draft_keyword(keyword);
    }

    /// Live search affects results immediately, so a changed term resets
    /// the page.
    pub fn set_live_search_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if self.filters.live_search_query() != query {
            self.filters.set_live_search_query(query);
            self.pager.reset();
        }
    }

    pub fn set_sort_mode(&mut self, sort_mode: SortMode) {
        if self.sort_mode != sort_mode {
            self.sort_mode = sort_mode;
            self.pager.reset();
        }
    }

    /// Commit the draft tuple. The page resets only when the applied tuple
    /// actually changes value, so re-applying unchanged drafts is a full
    /// no-op.
    pub fn apply_filters(&mut self) {
        let before = self.filters.applied().clone();
        self.filters.apply_filters();
        if *self.filters.applied() != before {
            self.pager.reset();
        }
    }

    /// Clear every draft, applied and live field. Resets the page when the
    /// visible result set was constrained by any of them.
    pub fn reset_all_filters(&mut self) {
        let changed = *self.filters.applied() != FilterValues::default()
            || !self.filters.live_search_query().is_empty();
        self.filters.reset_all_filters();
        if changed {
            self.pager.reset();
        }
    }

    /// Instant category apply; see
    /// [`FilterState::select_category_and_apply`] for the snapshot caveat.
    pub fn select_category_and_apply(&mut self, category: impl Into<String>) {
        let before = self.filters.applied().clone();
        self.filters.select_category_and_apply(category);
        if *self.filters.applied() != before {
            self.pager.reset();
        }
    }

    /// Explicit page navigation. Out-of-range requests are silently
    /// ignored; returns whether the transition happened (the presentation
    /// layer scrolls to top on acceptance).
    pub fn go_to_page(&mut self, page: usize) -> bool {
        let total_pages = self.view().total_pages;
        self.pager.go_to_page(page, total_pages)
    }

    /// The explicit recompute call: derive the current page from the
    /// committed inputs. Reads one consistent applied tuple; there is no
    /// way to observe a half-committed snapshot.
    pub fn view(&self) -> View {
        compute_view(
            self.catalog.products(),
            self.filters.applied(),
            self.filters.live_search_query(),
            self.sort_mode,
            self.pager.current_page(),
            self.pager.items_per_page(),
        )
    }
}
