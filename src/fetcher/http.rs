use async_trait::async_trait;
use url::Url;

use crate::PRODUCTS_PATH;
use crate::domain::product::{ProductId, ProductPayload};
use crate::fetcher::{FetchError, FetchResult, ProductFetcher, build_reqwest_client};
use crate::models::config::ClientConfig;

/// Fetches products from `<base_url>/api/products/{id}` over HTTP.
///
/// Holds no mutable state, so a single instance can be shared between tasks.
/// Concurrent calls are independent requests over the same client.
pub struct HttpProductFetcher {
    base_url: Url,
    client: reqwest::Client,
}

impl HttpProductFetcher {
    /// Creates a fetcher with a client built from `config`.
    pub fn new(config: &ClientConfig) -> FetchResult<Self> {
        Self::with_client(build_reqwest_client(config)?, &config.base_url)
    }

    /// Creates a fetcher around an existing, possibly shared, client.
    ///
    /// `base_url` is treated as a directory: `http://host/proxy` and
    /// `http://host/proxy/` both resolve products under `/proxy/api/products/`.
    pub fn with_client(client: reqwest::Client, base_url: &str) -> FetchResult<Self> {
        let mut base_url = Url::parse(base_url).map_err(|e| FetchError::Build(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::Build(format!("{base_url} cannot be a base url")));
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves the product URL. The identifier is inserted verbatim; only
    /// the percent-encoding done by URL parsing applies.
    pub fn product_url(&self, id: &ProductId) -> FetchResult<Url> {
        self.base_url
            .join(&format!("{PRODUCTS_PATH}/{id}"))
            .map_err(|e| FetchError::Build(e.to_string()))
    }

    async fn get_product(&self, id: &ProductId) -> FetchResult<ProductPayload> {
        let url = self.product_url(id)?;
        log::debug!("GET {url}");

        let payload = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<ProductPayload>()
            .await?;

        Ok(payload)
    }
}

#[async_trait]
impl ProductFetcher for HttpProductFetcher {
    async fn fetch_product_by_id(&self, id: &ProductId) -> FetchResult<ProductPayload> {
        let result = self.get_product(id).await;
        if let Err(e) = &result {
            log::error!("Error fetching product {id}: {e}");
        }
        result
    }
}
