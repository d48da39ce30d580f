//! Catalog Source: one read at session startup.
//!
//! A session never starts on a partially valid catalog: any schema
//! violation aborts the load. Until the load completes, callers should use
//! [`Catalog::empty`] and render the empty state.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

use crate::product::{Product, ProductId};

/// Result type for catalog loading.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog load failure. Always fatal.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog document could not be read.
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid JSON, or a required field is missing.
    #[error("malformed catalog document: {0}")]
    Parse(#[from] serde_json::Error),

    /// A record carries a value the wire format cannot rule out
    /// (negative or non-finite price, non-finite rating).
    #[error("product {id}: {reason}")]
    Schema { id: ProductId, reason: String },

    /// Two records share an id.
    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),
}

impl CatalogError {
    fn schema(id: ProductId, reason: impl Into<String>) -> Self {
        Self::Schema {
            id,
            reason: reason.into(),
        }
    }
}

/// Wire shape of the catalog feed: either `{"products": [...]}` or a bare
/// array of records.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Wrapped { products: Vec<Product> },
    Bare(Vec<Product>),
}

impl CatalogDocument {
    fn into_products(self) -> Vec<Product> {
        match self {
            CatalogDocument::Wrapped { products } => products,
            CatalogDocument::Bare(products) => products,
        }
    }
}

/// The immutable, ordered product sequence for one session.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<String>,
    loaded_at: DateTime<Utc>,
}

impl Catalog {
    /// Pre-load placeholder: an empty sequence, rendered as the empty
    /// state until the real catalog arrives.
    pub fn empty() -> Self {
        Self {
            products: Vec::new(),
            categories: Vec::new(),
            loaded_at: Utc::now(),
        }
    }

    /// Build a catalog from already-deserialized records, enforcing the
    /// constraints the wire format cannot express.
    pub fn from_products(products: Vec<Product>) -> CatalogResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !product.price.is_finite() || product.price < 0.0 {
                return Err(CatalogError::schema(
                    product.id,
                    format!("price must be a non-negative finite number, got {}", product.price),
                ));
            }
            if !product.rating.is_finite() {
                return Err(CatalogError::schema(
                    product.id,
                    format!("rating must be finite, got {}", product.rating),
                ));
            }
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }

        let categories = unique_categories(&products);
        tracing::info!(
            products = products.len(),
            categories = categories.len(),
            "catalog loaded"
        );

        Ok(Self {
            products,
            categories,
            loaded_at: Utc::now(),
        })
    }

    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::from_products(document.into_products())
    }

    pub fn from_reader(reader: impl std::io::Read) -> CatalogResult<Self> {
        let document: CatalogDocument = serde_json::from_reader(reader)?;
        Self::from_products(document.into_products())
    }

    pub fn from_path(path: impl AsRef<std::path::Path>) -> CatalogResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// The full sequence, in load order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Unique category labels, in first-seen order. This is what a
    /// category picker renders.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

fn unique_categories(products: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    products
        .iter()
        .filter(|p| seen.insert(p.category.clone()))
        .map(|p| p.category.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, title: &str, price: f64, rating: f64, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.to_string(),
            image: format!("img/{id}.png"),
            price,
            rating,
            category: category.to_string(),
            description: None,
        }
    }

    #[test]
    fn loads_wrapped_document() {
        let json = r#"{
            "products": [
                {"id": 1, "title": "Red Shoe", "image": "img/1.png", "price": 20, "rating": 4, "category": "shoes"},
                {"id": 2, "title": "Blue Hat", "image": "img/2.png", "price": 50, "rating": 3, "category": "hats"}
            ]
        }"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.products()[0].title, "Red Shoe");
    }

    #[test]
    fn loads_bare_array_document() {
        let json = r#"[
            {"id": 7, "title": "Watch", "image": "img/7.png", "price": 120, "rating": 4.5, "category": "accessories"}
        ]"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(ProductId::new(7)).unwrap().title, "Watch");
    }

    #[test]
    fn missing_field_is_a_parse_error() {
        let json = r#"{"products": [{"id": 1, "title": "Red Shoe", "image": "img/1.png", "rating": 4, "category": "shoes"}]}"#;
        let err = Catalog::from_json_str(json).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn negative_price_is_a_schema_error() {
        let err = Catalog::from_products(vec![product(1, "Shoe", -1.0, 4.0, "shoes")]).unwrap_err();
        match err {
            CatalogError::Schema { id, .. } => assert_eq!(id, ProductId::new(1)),
            other => panic!("expected Schema error, got {other:?}"),
        }
    }

    #[test]
    fn non_finite_values_are_schema_errors() {
        let err = Catalog::from_products(vec![product(1, "Shoe", f64::NAN, 4.0, "shoes")]).unwrap_err();
        assert!(matches!(err, CatalogError::Schema { .. }));

        let err = Catalog::from_products(vec![product(1, "Shoe", 20.0, f64::INFINITY, "shoes")]).unwrap_err();
        assert!(matches!(err, CatalogError::Schema { .. }));
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let err = Catalog::from_products(vec![
            product(1, "Shoe", 20.0, 4.0, "shoes"),
            product(1, "Hat", 50.0, 3.0, "hats"),
        ])
        .unwrap_err();
        match err {
            CatalogError::DuplicateId(id) => assert_eq!(id, ProductId::new(1)),
            other => panic!("expected DuplicateId error, got {other:?}"),
        }
    }

    #[test]
    fn categories_are_unique_in_first_seen_order() {
        let catalog = Catalog::from_products(vec![
            product(1, "Shoe", 20.0, 4.0, "shoes"),
            product(2, "Hat", 50.0, 3.0, "hats"),
            product(3, "Boot", 80.0, 4.5, "shoes"),
            product(4, "Cap", 15.0, 3.5, "hats"),
        ])
        .unwrap();
        assert_eq!(catalog.categories(), &["shoes".to_string(), "hats".to_string()]);
    }

    #[test]
    fn empty_catalog_has_no_products_or_categories() {
        let catalog = Catalog::empty();
        assert!(catalog.is_empty());
        assert!(catalog.categories().is_empty());
        assert_eq!(catalog.get(ProductId::new(1)), None);
    }

    #[test]
    fn load_order_is_preserved() {
        let catalog = Catalog::from_products(vec![
            product(3, "C", 3.0, 1.0, "a"),
            product(1, "A", 1.0, 1.0, "a"),
            product(2, "B", 2.0, 1.0, "a"),
        ])
        .unwrap();
        let ids: Vec<u64> = catalog.products().iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}
