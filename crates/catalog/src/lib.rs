//! `storefront-catalog` — immutable product catalog for a browsing session.
//!
//! This crate is the **data side** only: the `Product` record and the
//! one-shot Catalog Source load. Filtering, sorting and pagination live in
//! `storefront-browse`.

pub mod product;
pub mod source;

pub use product::{Product, ProductId};
pub use source::{Catalog, CatalogError, CatalogResult};
