//! Document sources backing discovery and resolution.
//!
//! The HTTP and local sources serve the same layout:
//!
//! ```text
//! {root}/
//! └── articles/
//!     ├── 0026/
//!     │   ├── article_001.json
//!     │   └── article_002.json
//!     └── 0014/
//!         └── article_001.json
//! ```
//!
//! A fetch distinguishes three outcomes: the document (`Ok(Some)`), no such
//! document (`Ok(None)`), and a failure to find out (`Err`).

pub mod http;
pub mod local;
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{AppError, Result};
use crate::models::{ArticleDocument, ArticleKey, Config};

// Re-export for convenience
pub use http::HttpSource;
pub use local::LocalSource;
pub use memory::MemorySource;

/// Trait for article document backends.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Fetch the document for `key`.
    ///
    /// Missing documents, non-success statuses and timeouts are `Ok(None)`.
    async fn fetch(&self, key: &ArticleKey) -> Result<Option<ArticleDocument>>;

    /// Human-readable location, for log lines.
    fn describe(&self) -> String;
}

/// Build the source selected by `config.source`.
pub fn from_config(config: &Config) -> Result<Arc<dyn ArticleSource>> {
    match (&config.source.base_url, &config.source.root_dir) {
        (Some(base_url), None) => Ok(Arc::new(HttpSource::new(base_url, &config.http)?)),
        (None, Some(root_dir)) => Ok(Arc::new(LocalSource::new(root_dir))),
        (Some(_), Some(_)) => Err(AppError::config(
            "source.base_url and source.root_dir are mutually exclusive",
        )),
        (None, None) => Err(AppError::config("no article source configured")),
    }
}
