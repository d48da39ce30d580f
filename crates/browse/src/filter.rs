//! Filter State Store.
//!
//! Two parallel tuples of filter values — the draft the user edits and the
//! applied snapshot the engine reads — plus a separate live search term that
//! bypasses the commit step. All transitions are pure, deterministic and
//! infallible: the only "failure" is a non-numeric price entry, which is
//! silently normalized to unset.

use serde::{Deserialize, Serialize};

/// One tuple of filter values.
///
/// The store keeps two of these; [`crate::engine::compute_view`] only ever
/// reads an applied one. Empty text and `None` prices mean "no constraint".
/// No cross-field validation is performed: `min_price > max_price` is
/// permitted and simply matches nothing downstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterValues {
    pub search_query: String,
    pub category: String,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub keyword: String,
}

/// Draft/applied/live filter state for one session.
///
/// Draft edits have no effect on results until [`FilterState::apply_filters`]
/// snapshots them into the applied tuple. The live search term is a single
/// variable with a single writer; it is never part of the draft/applied pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    draft: FilterValues,
    applied: FilterValues,
    live_search_query: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &FilterValues {
        &self.draft
    }

    /// The snapshot taken by the most recent commit (defaults if none yet).
    pub fn applied(&self) -> &FilterValues {
        &self.applied
    }

    pub fn live_search_query(&self) -> &str {
        &self.live_search_query
    }

    pub fn set_draft_search_query(&mut self, query: impl Into<String>) {
        self.draft.search_query = query.into();
    }

    pub fn set_draft_category(&mut self, category: impl Into<String>) {
        self.draft.category = category.into();
    }

    /// Non-finite input resolves to unset rather than propagating NaN.
    pub fn set_draft_min_price(&mut self, price: Option<f64>) {
        self.draft.min_price = coerce_price(price);
    }

    /// See [`FilterState::set_draft_min_price`].
    pub fn set_draft_max_price(&mut self, price: Option<f64>) {
        self.draft.max_price = coerce_price(price);
    }

    /// Free-text variant: anything that does not parse as a number unsets
    /// the bound.
    pub fn set_draft_min_price_text(&mut self, raw: &str) {
        self.draft.min_price = parse_price(raw);
    }

    /// See [`FilterState::set_draft_min_price_text`].
    pub fn set_draft_max_price_text(&mut self, raw: &str) {
        self.draft.max_price = parse_price(raw);
    }

    pub fn set_draft_keyword(&mut self, keyword: impl Into<String>) {
        self.draft.keyword = keyword.into();
    }

    /// Always effective immediately; no commit step.
    pub fn set_live_search_query(&mut self, query: impl Into<String>) {
        self.live_search_query = query.into();
    }

    /// Snapshot every draft field into the applied tuple.
    ///
    /// A single struct assignment: no reader can observe a half-copied
    /// commit.
    pub fn apply_filters(&mut self) {
        self.applied = self.draft.clone();
        tracing::debug!(applied = ?self.applied, "filters applied");
    }

    /// Clear every draft, applied and live field to its empty default.
    pub fn reset_all_filters(&mut self) {
        *self = Self::default();
        tracing::debug!("filters reset");
    }

    /// Set the draft category and commit immediately.
    ///
    /// Category selection is the one instant-apply input. The commit is the
    /// same full snapshot as [`FilterState::apply_filters`], so any other
    /// pending draft edits are committed alongside the category.
    pub fn select_category_and_apply(&mut self, category: impl Into<String>) {
        self.draft.category = category.into();
        self.apply_filters();
    }
}

fn coerce_price(price: Option<f64>) -> Option<f64> {
    price.filter(|p| p.is_finite())
}

fn parse_price(raw: &str) -> Option<f64> {
    coerce_price(raw.trim().parse::<f64>().ok())
}
