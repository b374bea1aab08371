//! In-memory source.
//!
//! Holds documents keyed by `ArticleKey`. Used to serve a preloaded corpus
//! and to exercise discovery and resolution without I/O.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::error::{AppError, Result};
use crate::models::{ArticleDocument, ArticleKey};
use crate::source::ArticleSource;

/// In-memory source backend.
#[derive(Debug, Default)]
pub struct MemorySource {
    documents: HashMap<ArticleKey, ArticleDocument>,
    broken: HashSet<ArticleKey>,
    fetches: AtomicUsize,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the document stored under `key`.
    pub fn insert(&mut self, key: ArticleKey, document: ArticleDocument) {
        self.broken.remove(&key);
        self.documents.insert(key, document);
    }

    /// Make every fetch of `key` fail with an I/O error.
    pub fn break_key(&mut self, key: ArticleKey) {
        self.documents.remove(&key);
        self.broken.insert(key);
    }

    /// Number of fetches served so far, hits and misses alike.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ArticleSource for MemorySource {
    async fn fetch(&self, key: &ArticleKey) -> Result<Option<ArticleDocument>> {
        self.fetches.fetch_add(1, Ordering::Relaxed);
        if self.broken.contains(key) {
            return Err(AppError::Io(std::io::Error::other(format!(
                "document {key} is unreadable"
            ))));
        }
        Ok(self.documents.get(key).cloned())
    }

    fn describe(&self) -> String {
        format!("memory ({} documents)", self.documents.len())
    }
}
