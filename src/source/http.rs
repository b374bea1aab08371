//! Static file server source.

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::error::Result;
use crate::models::{ArticleDocument, ArticleKey, HttpConfig};
use crate::source::ArticleSource;
use crate::utils;
use crate::utils::http::create_async_client;

/// Reads documents from `{base_url}/articles/<cat>/article_<seq>.json`.
#[derive(Clone)]
pub struct HttpSource {
    base: Url,
    client: Client,
}

impl HttpSource {
    /// Create a source rooted at `base_url` with a client built from `config`.
    pub fn new(base_url: &str, config: &HttpConfig) -> Result<Self> {
        Ok(Self {
            base: utils::base_url(base_url)?,
            client: create_async_client(config)?,
        })
    }

    /// Create a source sharing an existing client.
    pub fn with_client(base_url: &str, client: Client) -> Result<Self> {
        Ok(Self {
            base: utils::base_url(base_url)?,
            client,
        })
    }
}

#[async_trait]
impl ArticleSource for HttpSource {
    async fn fetch(&self, key: &ArticleKey) -> Result<Option<ArticleDocument>> {
        let url = self.base.join(&key.resource_path())?;

        let response = match self.client.get(url.clone()).send().await {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                log::debug!("Timed out fetching {}", url);
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let status = response.status();
        if !status.is_success() {
            log::debug!("{} -> {}", url, status);
            return Ok(None);
        }

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) if e.is_timeout() => {
                log::debug!("Timed out reading {}", url);
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Some(serde_json::from_slice(&body)?))
    }

    fn describe(&self) -> String {
        self.base.to_string()
    }
}
