//! HTTP client for talking to the document store

use crate::config::OutgoingSettings;
use crate::error::SearchError;
use anyhow::Result;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// HTTP client wrapper bound to one store base URL
#[derive(Clone)]
pub struct StoreClient {
    client: Client,
    base_url: Url,
}

/// Raw response from the store
#[derive(Debug)]
pub struct StoreResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
    /// Response URL (after redirects)
    pub url: String,
}

impl StoreResponse {
    /// Parse the body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> std::result::Result<T, SearchError> {
        serde_json::from_str(&self.text).map_err(|e| SearchError::Malformed(e.to_string()))
    }

    /// Check if the response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl StoreClient {
    /// Create a client for a base URL with default settings
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_settings(base_url, &OutgoingSettings::default())
    }

    /// Create a client for a base URL with custom outgoing settings
    pub fn with_settings(base_url: &str, settings: &OutgoingSettings) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("store base URL cannot be a base: {}", base_url);
        }

        let mut headers = reqwest::header::HeaderMap::new();
        for (key, value) in &settings.extra_headers {
            let name = reqwest::header::HeaderName::try_from(key.as_str())?;
            headers.insert(name, value.parse()?);
        }

        let mut builder = Client::builder()
            .timeout(Duration::from_secs_f64(settings.request_timeout))
            .pool_max_idle_per_host(settings.pool_maxsize)
            .default_headers(headers)
            .gzip(true);

        if !settings.verify_ssl {
            builder = builder.danger_accept_invalid_certs(true);
        }

        if let Some(ref proxy_url) = settings.proxies.all {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        } else {
            if let Some(ref http) = settings.proxies.http {
                builder = builder.proxy(reqwest::Proxy::http(http)?);
            }
            if let Some(ref https) = settings.proxies.https {
                builder = builder.proxy(reqwest::Proxy::https(https)?);
            }
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    /// The base URL this client talks to
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// POST a JSON body to a path under the base URL
    pub async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> std::result::Result<StoreResponse, SearchError> {
        let url = self.base_url.join(path)?;

        let response = self
            .client
            .post(url)
            .header("Accept", "application/json")
            .json(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let url = response.url().to_string();
        let text = response.text().await?;

        Ok(StoreResponse { status, text, url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = StoreClient::new("https://es.openml.org/");
        assert!(client.is_ok());
    }

    #[test]
    fn test_rejects_non_base_url() {
        let client = StoreClient::new("mailto:openml@example.org");
        assert!(client.is_err());
    }
}
