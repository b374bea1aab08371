// src/services/resolver.rs

//! Article detail resolution.

use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::models::{ArticleDetail, ArticleId, CategoryCode};
use crate::source::ArticleSource;

/// Service resolving a single identifier to a full article.
pub struct ArticleResolver {
    source: Arc<dyn ArticleSource>,
    legacy_category: CategoryCode,
}

impl ArticleResolver {
    /// Create a resolver; `article_<seq>` ids are looked up in `legacy_category`.
    pub fn new(source: Arc<dyn ArticleSource>, legacy_category: CategoryCode) -> Self {
        Self {
            source,
            legacy_category,
        }
    }

    /// Fetch the article named by `id`.
    ///
    /// Fails with `InvalidId` before any fetch when `id` has neither accepted
    /// shape, and with `NotFound` when no document backs it. Every call
    /// fetches again.
    pub async fn resolve(&self, id: &str) -> Result<ArticleDetail> {
        let key = ArticleId::parse(id)?.key(&self.legacy_category);

        match self.source.fetch(&key).await {
            Ok(Some(document)) => Ok(ArticleDetail::from_document(id, document)),
            Ok(None) => Err(AppError::NotFound(id.to_string())),
            Err(e) => {
                log::error!("Failed to load article {} from {}: {}", id, key.resource_path(), e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ArticleDocument, ArticleKey, Comment};
    use crate::source::MemorySource;

    fn code(s: &str) -> CategoryCode {
        CategoryCode::parse(s).unwrap()
    }

    fn document() -> ArticleDocument {
        ArticleDocument {
            title: "Third".into(),
            date: "2025年9月1日".into(),
            url: "https://example.com/3".into(),
            content: "段落一\n\n段落二".into(),
            comments: Some(vec![Comment {
                kind: None,
                name: "匿名".into(),
                age: Some("40代".into()),
                gender: None,
                date: "2025年9月2日".into(),
                content: "なるほど".into(),
            }]),
        }
    }

    fn resolver_with(source: MemorySource) -> (Arc<MemorySource>, ArticleResolver) {
        let source = Arc::new(source);
        let resolver = ArticleResolver::new(source.clone(), code("0026"));
        (source, resolver)
    }

    #[tokio::test]
    async fn composite_and_legacy_ids_fetch_the_same_document() {
        let mut source = MemorySource::new();
        source.insert(ArticleKey::new(code("0026"), 3), document());
        let (_, resolver) = resolver_with(source);

        let composite = resolver.resolve("0026_003").await.unwrap();
        let legacy = resolver.resolve("article_003").await.unwrap();

        assert_eq!(composite.id, "0026_003");
        assert_eq!(legacy.id, "article_003");
        assert_eq!(composite.title, legacy.title);
        assert_eq!(composite.content, legacy.content);
        assert_eq!(composite.comments, legacy.comments);
        assert_eq!(composite.comments.len(), 1);
    }

    #[tokio::test]
    async fn invalid_id_is_rejected_without_fetching() {
        let (source, resolver) = resolver_with(MemorySource::new());

        let result = resolver.resolve("xyz").await;
        assert!(matches!(result, Err(AppError::InvalidId(ref id)) if id == "xyz"));
        assert_eq!(source.fetch_count(), 0);
    }

    #[tokio::test]
    async fn missing_document_is_not_found() {
        let (source, resolver) = resolver_with(MemorySource::new());

        let result = resolver.resolve("0014_999").await;
        assert!(matches!(result, Err(AppError::NotFound(ref id)) if id == "0014_999"));
        assert_eq!(source.fetch_count(), 1);
    }

    #[tokio::test]
    async fn source_errors_propagate() {
        let mut source = MemorySource::new();
        source.break_key(ArticleKey::new(code("0026"), 1));
        let (_, resolver) = resolver_with(source);

        assert!(matches!(
            resolver.resolve("0026_001").await,
            Err(AppError::Io(_))
        ));
    }

    #[tokio::test]
    async fn absent_comments_default_to_empty() {
        let mut source = MemorySource::new();
        source.insert(
            ArticleKey::new(code("0011"), 1),
            ArticleDocument {
                comments: None,
                ..document()
            },
        );
        let (_, resolver) = resolver_with(source);

        let detail = resolver.resolve("0011_001").await.unwrap();
        assert!(detail.comments.is_empty());
    }

    #[tokio::test]
    async fn every_call_fetches_again() {
        let mut source = MemorySource::new();
        source.insert(ArticleKey::new(code("0026"), 3), document());
        let (source, resolver) = resolver_with(source);

        resolver.resolve("0026_003").await.unwrap();
        resolver.resolve("0026_003").await.unwrap();
        assert_eq!(source.fetch_count(), 2);
    }
}
