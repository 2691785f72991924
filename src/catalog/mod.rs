//! Product catalog data source
//!
//! Fetches products and categories from two REST endpoints, tracks
//! loading/error status and derives a category-filtered product list.

mod client;
mod error;
mod source;
mod state;
mod types;

pub use client::{CatalogApi, HttpCatalogApi};
pub use error::Resource;
pub use source::{CatalogEvent, CatalogSource};
pub use state::CatalogState;
pub use types::{Product, ALL_CATEGORIES};

#[cfg(test)]
pub(crate) use error::FetchError;
#[cfg(test)]
pub(crate) use source::tests::{sample_product, FakeApi};
#[cfg(test)]
pub(crate) use source::CatalogUpdate;
