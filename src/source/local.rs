//! Local filesystem source.
//!
//! Serves the same layout as the static site, typically its `public/`
//! directory, for development and offline reading. It is also the target the
//! merge pipeline writes into.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::models::{ArticleDocument, ArticleKey};
use crate::source::ArticleSource;

/// Local filesystem source backend.
#[derive(Debug, Clone)]
pub struct LocalSource {
    root_dir: PathBuf,
}

impl LocalSource {
    /// Create a new LocalSource rooted at the given directory.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    /// Write a document where `fetch` will find it for `key`.
    pub async fn store(&self, key: &ArticleKey, document: &ArticleDocument) -> Result<PathBuf> {
        let bytes = serde_json::to_vec_pretty(document)?;
        self.write_bytes(&key.resource_path(), &bytes).await
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, relative: &str, bytes: &[u8]) -> Result<PathBuf> {
        let path = self.root_dir.join(relative);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let tmp = path.with_extension("json.tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, &path).await?;
        Ok(path)
    }

    /// Read bytes, returning None if file doesn't exist.
    async fn read_bytes(&self, relative: &str) -> Result<Option<Vec<u8>>> {
        let path = self.root_dir.join(relative);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Io(e)),
        }
    }
}

#[async_trait]
impl ArticleSource for LocalSource {
    async fn fetch(&self, key: &ArticleKey) -> Result<Option<ArticleDocument>> {
        match self.read_bytes(&key.resource_path()).await? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    fn describe(&self) -> String {
        self.root_dir.display().to_string()
    }
}
