//! Catalog data source lifecycle
//!
//! A `CatalogSource` issues the products and categories fetches once, when it
//! is created, and accepts their results as `CatalogEvent`s. Each instance owns
//! a cancellation token; dropping the instance cancels fetches still in
//! flight, and events carrying another instance's id are ignored.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use super::client::CatalogApi;
use super::error::{FetchError, Resource};
use super::state::CatalogState;
use super::types::{Category, Product};

/// Identifies one data-source instance
pub type SourceId = u64;

static NEXT_SOURCE_ID: AtomicU64 = AtomicU64::new(1);

/// Result of one settled fetch
#[derive(Debug)]
pub enum CatalogUpdate {
    Products(Result<Vec<Product>, FetchError>),
    Categories(Result<Vec<Category>, FetchError>),
}

impl CatalogUpdate {
    pub fn resource(&self) -> Resource {
        match self {
            CatalogUpdate::Products(_) => Resource::Products,
            CatalogUpdate::Categories(_) => Resource::Categories,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            CatalogUpdate::Products(result) => result.as_ref().err(),
            CatalogUpdate::Categories(result) => result.as_ref().err(),
        }
    }
}

/// Settled fetch tagged with the instance that issued it
#[derive(Debug)]
pub struct CatalogEvent {
    pub source: SourceId,
    pub update: CatalogUpdate,
}

pub struct CatalogSource {
    id: SourceId,
    state: CatalogState,
    cancel_token: CancellationToken,
}

impl CatalogSource {
    /// Create a source and start both fetches
    ///
    /// Results are delivered on `tx` and must be handed back through
    /// [`CatalogSource::apply`]. Must be called inside a tokio runtime.
    pub fn initialize<M>(api: Arc<dyn CatalogApi>, tx: mpsc::Sender<M>) -> Self
    where
        M: From<CatalogEvent> + Send + 'static,
    {
        let mut source = Self {
            id: NEXT_SOURCE_ID.fetch_add(1, Ordering::Relaxed),
            state: CatalogState::new(),
            cancel_token: CancellationToken::new(),
        };

        tracing::info!(source = source.id, "Catalog source initialized");

        source.state.begin_products_fetch();
        source.spawn_fetch(Resource::Products, Arc::clone(&api), tx.clone());
        source.spawn_fetch(Resource::Categories, api, tx);

        source
    }

    pub fn id(&self) -> SourceId {
        self.id
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    /// Apply a settled fetch. Returns false when the event belongs to
    /// another (torn-down) instance and was discarded.
    pub fn apply(&mut self, event: CatalogEvent) -> bool {
        if event.source != self.id || self.cancel_token.is_cancelled() {
            return false;
        }

        match event.update {
            CatalogUpdate::Products(result) => self.state.settle_products(result),
            CatalogUpdate::Categories(result) => self.state.settle_categories(result),
        }
        true
    }

    pub fn filter_by_category(&mut self, category: &str) {
        self.state.filter_by_category(category);
        tracing::debug!(
            category = %category,
            matched = self.state.filtered_products().len(),
            "Category filter applied"
        );
    }

    fn spawn_fetch<M>(&self, resource: Resource, api: Arc<dyn CatalogApi>, tx: mpsc::Sender<M>)
    where
        M: From<CatalogEvent> + Send + 'static,
    {
        let source = self.id;
        let token = self.cancel_token.clone();

        tokio::spawn(async move {
            let update = tokio::select! {
                _ = token.cancelled() => {
                    tracing::debug!(source, resource = resource.as_str(), "Fetch cancelled");
                    return;
                }
                update = fetch(api.as_ref(), resource) => update,
            };

            if token.is_cancelled() {
                return;
            }

            let _ = tx.send(CatalogEvent { source, update }.into()).await;
        });
    }
}

impl Drop for CatalogSource {
    fn drop(&mut self) {
        self.cancel_token.cancel();
    }
}

async fn fetch(api: &dyn CatalogApi, resource: Resource) -> CatalogUpdate {
    match resource {
        Resource::Products => CatalogUpdate::Products(api.fetch_products().await),
        Resource::Categories => CatalogUpdate::Categories(api.fetch_categories().await),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::catalog::ALL_CATEGORIES;
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use std::time::Duration;
    use tokio::sync::Notify;

    /// Canned catalog API; when `gate` is set, fetches wait until notified
    pub(crate) struct FakeApi {
        pub products: Result<Vec<Product>, StatusCode>,
        pub categories: Result<Vec<Category>, StatusCode>,
        pub gate: Option<Arc<Notify>>,
    }

    impl FakeApi {
        pub(crate) fn ok(products: Vec<Product>, categories: Vec<&str>) -> Self {
            Self {
                products: Ok(products),
                categories: Ok(categories.into_iter().map(String::from).collect()),
                gate: None,
            }
        }

        async fn wait(&self) {
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
        }
    }

    #[async_trait]
    impl CatalogApi for FakeApi {
        async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
            self.wait().await;
            self.products.clone().map_err(|status| FetchError::Status {
                resource: Resource::Products,
                status,
            })
        }

        async fn fetch_categories(&self) -> Result<Vec<Category>, FetchError> {
            self.wait().await;
            self.categories.clone().map_err(|status| FetchError::Status {
                resource: Resource::Categories,
                status,
            })
        }
    }

    pub(crate) fn sample_product() -> Product {
        Product {
            id: 1,
            title: "A".to_string(),
            price: 9.99,
            description: "x".repeat(150),
            image: "https://img.example/a.png".to_string(),
            category: "cat1".to_string(),
        }
    }

    async fn drain(source: &mut CatalogSource, rx: &mut mpsc::Receiver<CatalogEvent>) {
        for _ in 0..2 {
            let event = tokio::time::timeout(Duration::from_secs(2), rx.recv())
                .await
                .expect("fetch did not settle")
                .expect("channel closed");
            assert!(source.apply(event));
        }
    }

    #[tokio::test]
    async fn test_initialize_loads_products_and_categories() {
        let api = Arc::new(FakeApi::ok(vec![sample_product()], vec!["cat1", "cat2"]));
        let (tx, mut rx) = mpsc::channel::<CatalogEvent>(8);

        let mut source = CatalogSource::initialize(api, tx);
        assert!(source.state().is_loading());

        drain(&mut source, &mut rx).await;

        let state = source.state();
        assert!(!state.is_loading());
        assert!(state.error().is_none());
        assert_eq!(state.categories(), ["cat1", "cat2"]);
        assert_eq!(state.filtered_products().len(), 1);
    }

    #[tokio::test]
    async fn test_products_http_500() {
        let api = Arc::new(FakeApi {
            products: Err(StatusCode::INTERNAL_SERVER_ERROR),
            categories: Ok(vec![]),
            gate: None,
        });
        let (tx, mut rx) = mpsc::channel::<CatalogEvent>(8);

        let mut source = CatalogSource::initialize(api, tx);
        assert!(source.state().is_loading());

        drain(&mut source, &mut rx).await;

        assert!(!source.state().is_loading());
        assert_eq!(source.state().error(), Some("Failed to fetch products"));
        assert!(source.state().filtered_products().is_empty());
    }

    #[tokio::test]
    async fn test_filter_after_load() {
        let mut other = sample_product();
        other.id = 2;
        other.category = "cat2".to_string();
        let api = Arc::new(FakeApi::ok(
            vec![sample_product(), other],
            vec!["cat1", "cat2"],
        ));
        let (tx, mut rx) = mpsc::channel::<CatalogEvent>(8);

        let mut source = CatalogSource::initialize(api, tx);
        drain(&mut source, &mut rx).await;

        source.filter_by_category("cat2");
        assert_eq!(source.state().filtered_products().len(), 1);
        assert_eq!(source.state().filtered_products()[0].id, 2);

        source.filter_by_category(ALL_CATEGORIES);
        assert_eq!(source.state().filtered_products().len(), 2);
    }

    #[tokio::test]
    async fn test_events_from_other_source_are_discarded() {
        let api: Arc<dyn CatalogApi> =
            Arc::new(FakeApi::ok(vec![sample_product()], vec!["cat1"]));
        let (tx, mut rx) = mpsc::channel::<CatalogEvent>(8);

        let first = CatalogSource::initialize(Arc::clone(&api), tx.clone());
        let first_id = first.id();
        let mut second = CatalogSource::initialize(api, tx);
        assert_ne!(first_id, second.id());

        let stale = CatalogEvent {
            source: first_id,
            update: CatalogUpdate::Products(Ok(vec![])),
        };
        assert!(!second.apply(stale));
        assert!(second.state().is_loading());

        drop(first);
        while let Ok(Some(event)) =
            tokio::time::timeout(Duration::from_millis(500), rx.recv()).await
        {
            let from_second = event.source == second.id();
            assert_eq!(second.apply(event), from_second);
        }
        assert_eq!(second.state().products().len(), 1);
    }

    #[tokio::test]
    async fn test_drop_cancels_pending_fetches() {
        let gate = Arc::new(Notify::new());
        let api = Arc::new(FakeApi {
            products: Ok(vec![sample_product()]),
            categories: Ok(vec!["cat1".to_string()]),
            gate: Some(Arc::clone(&gate)),
        });
        let (tx, mut rx) = mpsc::channel::<CatalogEvent>(8);

        let source = CatalogSource::initialize(api, tx);
        drop(source);
        gate.notify_waiters();

        // Both tasks exit without sending; the channel closes once they drop tx
        let next = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("tasks did not exit");
        assert!(next.is_none());
    }
}
