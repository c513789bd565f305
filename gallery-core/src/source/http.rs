//! Static HTTP host source

use super::{AssetSource, SourceResult};
use crate::error::SourceError;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use url::Url;

/// Source backed by a static web host (GitHub Pages, a CDN, ...)
pub struct HttpSource {
    base: Url,
    client: Client,
}

impl HttpSource {
    /// Create a source rooted at `base`, which should end with `/`
    pub fn new(base: Url, timeout: Option<Duration>) -> SourceResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self { base, client })
    }

    fn url(&self, path: &str) -> SourceResult<Url> {
        if path.starts_with('/') || path.split('/').any(|c| c == "..") {
            return Err(SourceError::InvalidPath(path.to_string()));
        }
        self.base
            .join(path)
            .map_err(|e| SourceError::InvalidPath(format!("{}: {}", path, e)))
    }
}

#[async_trait]
impl AssetSource for HttpSource {
    async fn read(&self, path: &str) -> SourceResult<Vec<u8>> {
        let url = self.url(path)?;
        tracing::debug!("GET {}", url);

        let response = self.client.get(url.clone()).send().await?;
        match response.status() {
            status if status.is_success() => Ok(response.bytes().await?.to_vec()),
            StatusCode::NOT_FOUND => Err(SourceError::NotFound(url.to_string())),
            status => Err(SourceError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            }),
        }
    }

    async fn exists(&self, path: &str) -> SourceResult<bool> {
        let url = self.url(path)?;
        tracing::trace!("HEAD {}", url);

        let response = self.client.head(url).send().await?;
        Ok(response.status().is_success())
    }

    fn locate(&self, path: &str) -> String {
        self.url(path)
            .map(String::from)
            .unwrap_or_else(|_| format!("{}{}", self.base, path))
    }
}
