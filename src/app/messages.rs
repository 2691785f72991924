//! Message types and handling for async communication
//!
//! This module defines the AppMessage enum and the handle_message implementation.

use crate::catalog::{CatalogEvent, Resource};

use super::App;

/// Async message types for communication between tasks and the app
#[derive(Debug)]
pub enum AppMessage {
    /// A catalog fetch settled
    Catalog(CatalogEvent),
}

impl From<CatalogEvent> for AppMessage {
    fn from(event: CatalogEvent) -> Self {
        AppMessage::Catalog(event)
    }
}

impl App {
    pub(super) fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::Catalog(event) => {
                let source = event.source;
                let resource = event.update.resource();
                let failure = event
                    .update
                    .error()
                    .map(|err| (err.kind(), err.to_string()));

                if !self.catalog.apply(event) {
                    tracing::debug!(
                        source,
                        current = self.catalog.id(),
                        resource = resource.as_str(),
                        "Discarded result from a replaced catalog source"
                    );
                    return;
                }

                match failure {
                    Some((kind, error)) => tracing::warn!(
                        resource = resource.as_str(),
                        kind,
                        error = %error,
                        "Catalog fetch failed"
                    ),
                    None => tracing::info!(resource = resource.as_str(), "Catalog fetch succeeded"),
                }

                if resource == Resource::Products {
                    self.status_bar.mark_loaded();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{settle, test_app};
    use crate::catalog::{sample_product, CatalogEvent, CatalogUpdate, FakeApi};
    use reqwest::StatusCode;

    #[tokio::test]
    async fn test_fetch_results_reach_state() {
        let mut app = test_app(FakeApi::ok(vec![sample_product()], vec!["cat1"]));
        settle(&mut app).await;

        let state = app.catalog.state();
        assert!(!state.is_loading());
        assert_eq!(state.products().len(), 1);
        assert_eq!(state.categories(), ["cat1"]);
    }

    #[tokio::test]
    async fn test_categories_failure_sets_error() {
        let mut app = test_app(FakeApi {
            products: Ok(vec![sample_product()]),
            categories: Err(StatusCode::NOT_FOUND),
            gate: None,
        });
        settle(&mut app).await;

        let state = app.catalog.state();
        assert!(!state.is_loading());
        assert_eq!(state.error(), Some("Failed to fetch the categories"));
        assert_eq!(state.products().len(), 1);
    }

    #[tokio::test]
    async fn test_message_for_unknown_source_is_ignored() {
        let mut app = test_app(FakeApi::ok(vec![], vec![]));
        let stale = CatalogEvent {
            source: app.catalog.id() + 1000,
            update: CatalogUpdate::Products(Ok(vec![sample_product()])),
        };

        app.handle_message(stale.into());
        assert!(app.catalog.state().is_loading());
        assert!(app.catalog.state().products().is_empty());
    }
}
