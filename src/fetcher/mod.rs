use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use thiserror::Error;

use crate::domain::product::{ProductId, ProductPayload};
use crate::models::config::ClientConfig;

pub mod http;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Network failure, non-success status or undecodable body, exactly as
    /// reported by the HTTP client.
    #[error(transparent)]
    Request(#[from] reqwest::Error),
    #[error("failed to build http client: {0}")]
    Build(String),
}

pub type FetchResult<T> = Result<T, FetchError>;

/// Source of product payloads.
#[async_trait]
pub trait ProductFetcher: Send + Sync {
    /// Fetches a single product by identifier.
    ///
    /// Failures are logged once and returned unchanged; no retry or
    /// fallback happens here.
    async fn fetch_product_by_id(&self, id: &ProductId) -> FetchResult<ProductPayload>;
}

/// Builds a [`reqwest::Client`] from the proxy, timeout and header settings
/// of `config`. Anything not configured keeps the reqwest default.
pub fn build_reqwest_client(config: &ClientConfig) -> FetchResult<reqwest::Client> {
    let mut builder = reqwest::Client::builder();

    if !config.system_proxy {
        builder = builder.no_proxy();
    }

    if let Some(proxy) = &config.proxy {
        let proxy = reqwest::Proxy::all(proxy).map_err(|e| FetchError::Build(e.to_string()))?;
        builder = builder.proxy(proxy);
    }

    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    if !config.headers.is_empty() {
        let mut headers = HeaderMap::new();
        for (name, value) in &config.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| FetchError::Build(format!("header {name}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| FetchError::Build(format!("header {name}: {e}")))?;
            headers.insert(name, value);
        }
        builder = builder.default_headers(headers);
    }

    builder.build().map_err(|e| FetchError::Build(e.to_string()))
}
