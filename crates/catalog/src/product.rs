use serde::{Deserialize, Serialize};

/// Product identifier. Supplied by the catalog dataset, unique within one
/// load (enforced by the source, see [`crate::source::Catalog`]).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl ProductId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// One catalog record. Immutable after load.
///
/// `description` is optional and participates only in keyword matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub image: String,
    /// Non-negative, finite (validated at load).
    pub price: f64,
    /// Finite (validated at load); typically 0..=5.
    pub rating: f64,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
