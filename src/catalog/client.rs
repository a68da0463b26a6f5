//! HTTP Transport
//!
//! `reqwest` client for the catalog API. On wasm32 it runs on `fetch`.

use async_trait::async_trait;
use reqwest::header::ACCEPT;

use super::{Endpoint, Transport};
use crate::error::{CatalogError, CatalogResult};

pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn get(&self, endpoint: Endpoint) -> CatalogResult<String> {
        let url = self.url(endpoint);
        log::info!("Fetching {} from {}", endpoint, url);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();
        log::info!("{} response status: {}", endpoint, status.as_u16());
        if !status.is_success() {
            return Err(CatalogError::Network(format!("HTTP error! status: {}", status.as_u16())));
        }

        response.text().await.map_err(|e| CatalogError::Network(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let transport = HttpTransport::new("https://api.example.com/api/");
        assert_eq!(transport.url(Endpoint::Categories), "https://api.example.com/api/categories");
        assert_eq!(transport.url(Endpoint::ProductDetail(4)), "https://api.example.com/api/plant/4");
    }
}
