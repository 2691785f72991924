use super::error::FetchError;
use super::types::{Category, Product, ALL_CATEGORIES};

/// Catalog contents plus loading/error annotation
///
/// `filtered_products` is always the subsequence of `products` matching the
/// last applied category filter.
#[derive(Debug, Clone)]
pub struct CatalogState {
    products: Vec<Product>,
    filtered_products: Vec<Product>,
    categories: Vec<Category>,
    loading: bool,
    error: Option<String>,
}

impl CatalogState {
    /// Initial state: nothing fetched yet, products fetch pending
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            filtered_products: Vec::new(),
            categories: Vec::new(),
            loading: true,
            error: None,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn filtered_products(&self) -> &[Product] {
        &self.filtered_products
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn begin_products_fetch(&mut self) {
        self.loading = true;
    }

    /// Apply the outcome of the products fetch. Always clears `loading`.
    pub fn settle_products(&mut self, result: Result<Vec<Product>, FetchError>) {
        match result {
            Ok(products) => {
                self.filtered_products = products.clone();
                self.products = products;
            }
            Err(err) => self.error = Some(err.to_string()),
        }
        self.loading = false;
    }

    /// Apply the outcome of the categories fetch. Never touches `loading`.
    pub fn settle_categories(&mut self, result: Result<Vec<Category>, FetchError>) {
        match result {
            Ok(categories) => self.categories = categories,
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    /// Recompute the filtered list from the full product list
    ///
    /// `"all"` resets to every product; any other value keeps products whose
    /// category matches exactly, in original order.
    pub fn filter_by_category(&mut self, category: &str) {
        self.filtered_products = if category == ALL_CATEGORIES {
            self.products.clone()
        } else {
            self.products
                .iter()
                .filter(|product| product.category == category)
                .cloned()
                .collect()
        };
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}
