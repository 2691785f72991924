use serde::Deserialize;

/// Selector value meaning "no category filter"
pub const ALL_CATEGORIES: &str = "all";

/// Category label as returned by the categories endpoint
pub type Category = String;

/// A single product from the products endpoint
///
/// Extra fields in the payload (e.g. `rating`) are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub description: String,
    #[serde(default)]
    pub image: String,
    pub category: Category,
}
