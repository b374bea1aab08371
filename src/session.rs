// src/session.rs

//! Caller-owned browsing state.
//!
//! Remembers whether discovery has already run so repeated list views do not
//! rescan the whole ID space.

use crate::error::Result;
use crate::models::{ArticleSummary, CategoryCode};
use crate::services::ArticleDiscovery;

/// Article list held for the duration of one browsing session.
pub struct ArticleSession {
    discovery: ArticleDiscovery,
    articles: Vec<ArticleSummary>,
    has_loaded: bool,
}

impl ArticleSession {
    pub fn new(discovery: ArticleDiscovery) -> Self {
        Self {
            discovery,
            articles: Vec::new(),
            has_loaded: false,
        }
    }

    /// Run discovery unless a previous run already succeeded.
    pub async fn ensure_loaded(
        &mut self,
        category: Option<&CategoryCode>,
    ) -> Result<&[ArticleSummary]> {
        if !self.has_loaded {
            self.refresh(category).await?;
        }
        Ok(&self.articles)
    }

    /// Run discovery again and replace the list.
    ///
    /// On failure the previous list and flag are left untouched.
    pub async fn refresh(&mut self, category: Option<&CategoryCode>) -> Result<&[ArticleSummary]> {
        let outcome = self.discovery.discover(category).await?;
        self.articles = outcome.articles;
        self.has_loaded = true;
        Ok(&self.articles)
    }

    pub fn articles(&self) -> &[ArticleSummary] {
        &self.articles
    }

    pub fn has_loaded(&self) -> bool {
        self.has_loaded
    }

    /// Look up a loaded summary by its composite id.
    pub fn find(&self, id: &str) -> Option<&ArticleSummary> {
        self.articles.iter().find(|article| article.id == id)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::models::{ArticleDocument, ArticleKey, DiscoveryConfig};
    use crate::source::MemorySource;

    fn code(s: &str) -> CategoryCode {
        CategoryCode::parse(s).unwrap()
    }

    fn session_over(source: Arc<MemorySource>) -> ArticleSession {
        let config = DiscoveryConfig {
            categories: vec![code("0026")],
            max_sequence: 5,
            ..DiscoveryConfig::default()
        };
        ArticleSession::new(ArticleDiscovery::new(source, config))
    }

    fn corpus() -> MemorySource {
        let mut source = MemorySource::new();
        source.insert(
            ArticleKey::new(code("0026"), 2),
            ArticleDocument {
                title: "T".into(),
                date: "2025年1月1日".into(),
                url: "u".into(),
                content: String::new(),
                comments: None,
            },
        );
        source
    }

    #[tokio::test]
    async fn ensure_loaded_scans_once() {
        let source = Arc::new(corpus());
        let mut session = session_over(source.clone());
        assert!(!session.has_loaded());

        assert_eq!(session.ensure_loaded(None).await.unwrap().len(), 1);
        assert_eq!(session.ensure_loaded(None).await.unwrap().len(), 1);

        assert!(session.has_loaded());
        assert_eq!(source.fetch_count(), 5);
        assert_eq!(session.find("0026_002").map(|a| a.title.as_str()), Some("T"));
        assert!(session.find("0026_001").is_none());
    }

    #[tokio::test]
    async fn refresh_always_rescans() {
        let source = Arc::new(corpus());
        let mut session = session_over(source.clone());

        session.ensure_loaded(None).await.unwrap();
        session.refresh(None).await.unwrap();

        assert_eq!(source.fetch_count(), 10);
        assert_eq!(session.articles().len(), 1);
    }

    #[tokio::test]
    async fn failed_discovery_leaves_flag_unset() {
        let mut source = MemorySource::new();
        for seq in 1..=5 {
            source.break_key(ArticleKey::new(code("0026"), seq));
        }
        let mut session = session_over(Arc::new(source));

        assert!(session.ensure_loaded(None).await.is_err());
        assert!(!session.has_loaded());
        assert!(session.articles().is_empty());
    }
}
