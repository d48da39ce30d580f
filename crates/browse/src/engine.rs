//! Filtering/Sorting/Pagination Engine.
//!
//! [`compute_view`] is a pure function from `{catalog, applied filters,
//! live term, sort mode, page}` to one page of products plus pagination
//! metadata. It performs no IO and never fails at runtime.

use serde::{Deserialize, Serialize};
use storefront_catalog::Product;

use crate::filter::FilterValues;

/// Display-only sort selection. Not part of the filter commit cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Catalog order, untouched.
    #[default]
    Default,
    /// Ascending by price.
    Cheap,
    /// Descending by price.
    Expensive,
    /// Descending by rating.
    Popular,
}

/// One page of results plus pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    /// The requested page slice, possibly empty.
    pub page_items: Vec<Product>,
    /// Size of the whole filtered set.
    pub total_count: usize,
    /// `ceil(total_count / items_per_page)`; 0 when nothing matched.
    pub total_pages: usize,
}

/// Derive the visible page from the catalog and the committed inputs.
///
/// All predicates are independent conjunctions. The live search term layers
/// on top of the applied tuple instead of replacing it, so instant narrowing
/// never discards the last commit. Text matching is case-insensitive
/// substring containment on trimmed needles; category matching is full
/// (trimmed, case-insensitive) equality.
///
/// Sorting is stable: catalog order breaks ties. An out-of-range `page`
/// yields an empty slice, never an error; clamping proper is the pager's
/// job.
///
/// `items_per_page` must be positive (programmer error otherwise).
pub fn compute_view(
    catalog: &[Product],
    applied: &FilterValues,
    live_search_query: &str,
    sort_mode: SortMode,
    page: usize,
    items_per_page: usize,
) -> View {
    assert!(items_per_page > 0, "items_per_page must be positive");

    let category = normalized(&applied.category);
    let search = normalized(&applied.search_query);
    let keyword = normalized(&applied.keyword);
    let live = normalized(live_search_query);
    let min_price = applied.min_price.filter(|p| p.is_finite());
    let max_price = applied.max_price.filter(|p| p.is_finite());

    let mut filtered: Vec<&Product> = catalog
        .iter()
        .filter(|p| {
            category
                .as_deref()
                .is_none_or(|wanted| p.category.trim().to_lowercase() == wanted)
        })
        .filter(|p| min_price.is_none_or(|min| p.price >= min))
        .filter(|p| max_price.is_none_or(|max| p.price <= max))
        .filter(|p| search.as_deref().is_none_or(|q| title_or_category_contains(p, q)))
        .filter(|p| keyword.as_deref().is_none_or(|k| keyword_matches(p, k)))
        .filter(|p| live.as_deref().is_none_or(|q| title_or_category_contains(p, q)))
        .collect();

    match sort_mode {
        SortMode::Default => {}
        SortMode::Cheap => filtered.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortMode::Expensive => filtered.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortMode::Popular => filtered.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }

    let total_count = filtered.len();
    let total_pages = total_count.div_ceil(items_per_page);

    let start = (page.max(1) - 1).saturating_mul(items_per_page);
    let page_items = if start < total_count {
        let end = (start + items_per_page).min(total_count);
        filtered[start..end].iter().map(|&p| p.clone()).collect()
    } else {
        Vec::new()
    };

    View {
        page_items,
        total_count,
        total_pages,
    }
}

/// Trimmed, lower-cased needle; `None` when nothing remains.
fn normalized(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

fn title_or_category_contains(product: &Product, needle: &str) -> bool {
    product.title.to_lowercase().contains(needle)
        || product.category.to_lowercase().contains(needle)
}

/// Keyword matching additionally looks at the description, when present.
fn keyword_matches(product: &Product, keyword: &str) -> bool {
    title_or_category_contains(product, keyword)
        || product
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(keyword))
}
