//! HTTP transport for the catalog endpoints

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::error::{FetchError, Resource};
use super::types::{Category, Product};
use crate::config::Config;

/// Read-only access to the catalog endpoints
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError>;

    async fn fetch_categories(&self) -> Result<Vec<Category>, FetchError>;
}

/// `CatalogApi` backed by a reqwest client
pub struct HttpCatalogApi {
    client: reqwest::Client,
    products_url: String,
    categories_url: String,
}

impl HttpCatalogApi {
    pub fn new(
        products_url: impl Into<String>,
        categories_url: impl Into<String>,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            products_url: products_url.into(),
            categories_url: categories_url.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.endpoints.products.clone(),
            config.endpoints.categories.clone(),
            config.http.timeout(),
            &config.http.user_agent,
        )
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        resource: Resource,
    ) -> Result<T, FetchError> {
        tracing::debug!(resource = resource.as_str(), url = %url, "GET");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { resource, status });
        }

        let body = response.bytes().await?;
        let parsed = serde_json::from_slice(&body)?;

        tracing::debug!(
            resource = resource.as_str(),
            bytes = body.len(),
            "Response parsed"
        );
        Ok(parsed)
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogApi {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        self.get_json(&self.products_url, Resource::Products).await
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, FetchError> {
        self.get_json(&self.categories_url, Resource::Categories)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve a single canned HTTP response and return the base URL
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = vec![0u8; 4096];
                let _ = socket.read(&mut buf).await;
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        format!("http://{}", addr)
    }

    fn api(products_url: String, categories_url: String) -> HttpCatalogApi {
        HttpCatalogApi::new(
            products_url,
            categories_url,
            Duration::from_secs(5),
            "storefront-test",
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_fetch_products_success() {
        let base = serve_once(
            "200 OK",
            r#"[{"id":1,"title":"A","price":9.99,"description":"x","category":"cat1","image":"http://img/1.png"}]"#,
        )
        .await;
        let api = api(format!("{}/products", base), String::new());

        let products = api.fetch_products().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].title, "A");
        assert_eq!(products[0].image, "http://img/1.png");
    }

    #[tokio::test]
    async fn test_fetch_products_server_error() {
        let base = serve_once("500 Internal Server Error", "oops").await;
        let api = api(format!("{}/products", base), String::new());

        let err = api.fetch_products().await.unwrap_err();
        assert!(matches!(
            err,
            FetchError::Status {
                resource: Resource::Products,
                ..
            }
        ));
        assert_eq!(err.to_string(), "Failed to fetch products");
    }

    #[tokio::test]
    async fn test_fetch_categories_not_found() {
        let base = serve_once("404 Not Found", "").await;
        let api = api(String::new(), format!("{}/products/categories", base));

        let err = api.fetch_categories().await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch the categories");
    }

    #[tokio::test]
    async fn test_fetch_categories_success() {
        let base = serve_once("200 OK", r#"["cat1","cat2"]"#).await;
        let api = api(String::new(), format!("{}/products/categories", base));

        let categories = api.fetch_categories().await.unwrap();
        assert_eq!(categories, vec!["cat1".to_string(), "cat2".to_string()]);
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let base = serve_once("200 OK", r#"{"not":"an array"}"#).await;
        let api = api(format!("{}/products", base), String::new());

        let err = api.fetch_products().await.unwrap_err();
        assert_eq!(err.kind(), "parse");
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let api = api(format!("http://{}/products", addr), String::new());
        let err = api.fetch_products().await.unwrap_err();
        assert_eq!(err.kind(), "network");
        assert!(!err.to_string().is_empty());
    }
}
