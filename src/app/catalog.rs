//! Catalog data source lifecycle and category selection for the App

use std::sync::Arc;

use crate::catalog::CatalogSource;

use super::App;

impl App {
    /// Replace the data source with a fresh one
    ///
    /// The old source is dropped first, which cancels its fetches; anything it
    /// already queued is discarded by id when it arrives.
    pub(super) fn reload_catalog(&mut self) {
        let previous = self.catalog.id();
        self.catalog = CatalogSource::initialize(Arc::clone(&self.api), self.message_tx.clone());
        self.catalog_view.reset();
        self.status_bar.clear_loaded();

        tracing::info!(
            previous,
            current = self.catalog.id(),
            "Catalog reloaded"
        );
    }

    pub(super) fn select_highlighted_category(&mut self) {
        self.catalog_view.select_highlighted(&mut self.catalog);
    }

    pub(super) fn select_category_at(&mut self, x: u16, y: u16) {
        if self.catalog_view.select_at(x, y, &mut self.catalog) {
            tracing::debug!(
                category = %self.catalog_view.selected_category(),
                "Category selected by click"
            );
        }
    }
}
