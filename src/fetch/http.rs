use crate::prelude::*;
use reqwest::Client;
use serde_json::Value;
use std::{future::Future, time::Duration};
use url::Url;

/// Source of the raw country payload. One call, one JSON document or one error.
pub trait DataFetcher {
    fn fetch(&self) -> impl Future<Output = Result<Value>> + Send;

    /// Where the payload comes from, if there is such a thing.
    fn source(&self) -> Option<&Url> {
        None
    }
}

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    url: Url,
}

impl HttpFetcher {
    pub fn new(url: Url, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(HttpFetcher { client, url })
    }

    pub fn with_client(client: Client, url: Url) -> Self {
        HttpFetcher { client, url }
    }
}

impl DataFetcher for HttpFetcher {
    async fn fetch(&self) -> Result<Value> {
        let response = self.client.get(self.url.clone()).send().await.map_err(|e| {
            tracing::error!("Request to {} failed: {}", self.url, e);
            CountryError::Transport(e)
        })?;

        if !response.status().is_success() {
            tracing::error!("Non-success response from {}: {}", self.url, response.status());
            return Err(CountryError::HttpStatus {
                status: response.status(),
                url: self.url.to_string(),
            });
        }

        let text = response.text().await?;
        match serde_json::from_str(&text) {
            Ok(payload) => Ok(payload),
            Err(e) => {
                tracing::error!("Failed to parse response from {} as JSON: {}", self.url, e);
                Err(e.into())
            }
        }
    }

    fn source(&self) -> Option<&Url> {
        Some(&self.url)
    }
}
