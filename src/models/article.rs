// src/models/article.rs

//! Article documents and their list/detail projections.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::models::ArticleKey;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{(id|title|date|url|comments)\}").expect("list template placeholder pattern")
});

/// A reader comment attached to an article.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    /// Comment type tag as published by the source
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    /// Author display name
    pub name: String,

    /// Age bracket (e.g. "30代")
    #[serde(default)]
    pub age: Option<String>,

    /// Gender descriptor
    #[serde(default)]
    pub gender: Option<String>,

    /// Posting date in `<Y>年<M>月<D>日` form
    pub date: String,

    /// Comment body, may contain line breaks
    pub content: String,
}

impl Comment {
    /// Age and gender joined by a space, skipping missing parts.
    pub fn age_gender_label(&self) -> Option<String> {
        let parts: Vec<&str> = [self.age.as_deref(), self.gender.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }

    /// Lines of the comment body.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.content.split('\n')
    }
}

/// Raw JSON document as served at `articles/<cat>/article_<seq>.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleDocument {
    pub title: String,
    pub date: String,
    pub url: String,

    /// Full body; only the detail view reads it
    #[serde(default)]
    pub content: String,

    /// Absent and `null` both mean "no comments"
    #[serde(default)]
    pub comments: Option<Vec<Comment>>,
}

/// List-view projection of an article.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleSummary {
    /// Composite identifier, e.g. `0026_001`
    pub id: String,
    pub title: String,
    pub date: String,
    pub url: String,
    pub comments: Vec<Comment>,
}

impl ArticleSummary {
    /// Project a fetched document into a list entry for `key`.
    pub fn from_document(key: &ArticleKey, document: ArticleDocument) -> Self {
        Self {
            id: key.composite_id(),
            title: document.title,
            date: document.date,
            url: document.url,
            comments: document.comments.unwrap_or_default(),
        }
    }

    /// Format the summary for display using a template.
    ///
    /// Supported placeholders:
    /// - `{id}`, `{title}`, `{date}`, `{url}`
    /// - `{comments}` (number of comments)
    ///
    /// Substitution is a single pass, so braces inside field values are
    /// printed as they are.
    pub fn format(&self, template: &str) -> String {
        PLACEHOLDER
            .replace_all(template, |caps: &Captures<'_>| match &caps[1] {
                "id" => self.id.clone(),
                "title" => self.title.clone(),
                "date" => self.date.clone(),
                "url" => self.url.clone(),
                _ => self.comments.len().to_string(),
            })
            .into_owned()
    }
}

/// Full article with body and comments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleDetail {
    /// Identifier exactly as requested by the caller
    pub id: String,
    pub title: String,
    pub date: String,
    pub url: String,
    pub content: String,
    pub comments: Vec<Comment>,
}

impl ArticleDetail {
    pub fn from_document(id: impl Into<String>, document: ArticleDocument) -> Self {
        Self {
            id: id.into(),
            title: document.title,
            date: document.date,
            url: document.url,
            content: document.content,
            comments: document.comments.unwrap_or_default(),
        }
    }

    /// Body split into paragraphs; empty entries mark blank lines.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.content.split('\n')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryCode;

    fn key(cat: &str, seq: u16) -> ArticleKey {
        ArticleKey::new(CategoryCode::parse(cat).unwrap(), seq)
    }

    fn comment(age: Option<&str>, gender: Option<&str>) -> Comment {
        Comment {
            kind: None,
            name: "山田".into(),
            age: age.map(String::from),
            gender: gender.map(String::from),
            date: "2025年9月1日".into(),
            content: "一行目\n二行目".into(),
        }
    }

    #[test]
    fn document_without_comments_defaults_to_empty() {
        let raw = r#"{"title":"T","date":"2025年9月1日","url":"https://example.com/a","content":"body"}"#;
        let document: ArticleDocument = serde_json::from_str(raw).unwrap();

        let summary = ArticleSummary::from_document(&key("0026", 1), document.clone());
        assert!(summary.comments.is_empty());

        let detail = ArticleDetail::from_document("0026_001", document);
        assert!(detail.comments.is_empty());
    }

    #[test]
    fn null_comments_default_to_empty() {
        let raw = r#"{"title":"T","date":"d","url":"u","comments":null}"#;
        let document: ArticleDocument = serde_json::from_str(raw).unwrap();
        let summary = ArticleSummary::from_document(&key("0026", 1), document);
        assert!(summary.comments.is_empty());
    }

    #[test]
    fn comment_fields_deserialize_with_nulls() {
        let raw = r#"{
            "title": "T", "date": "2025年9月1日", "url": "u", "content": "c",
            "comments": [
                {"type": null, "name": "A", "age": null, "gender": null, "date": "2025年9月2日", "content": "x"},
                {"type": "reply", "name": "B", "age": "30代", "gender": "女性", "date": "2025年9月3日", "content": "y"}
            ]
        }"#;
        let document: ArticleDocument = serde_json::from_str(raw).unwrap();
        let comments = document.comments.unwrap();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].kind, None);
        assert_eq!(comments[1].kind.as_deref(), Some("reply"));
        assert_eq!(comments[1].age.as_deref(), Some("30代"));
    }

    #[test]
    fn comment_type_serializes_under_its_json_name() {
        let value = serde_json::to_value(comment(None, None)).unwrap();
        assert!(value.get("type").is_some());
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn summary_uses_composite_id_and_ignores_content() {
        let document = ArticleDocument {
            title: "Title".into(),
            date: "2024年1月1日".into(),
            url: "https://example.com/1".into(),
            content: "ignored".into(),
            comments: Some(vec![comment(None, None)]),
        };
        let summary = ArticleSummary::from_document(&key("0014", 42), document);
        assert_eq!(summary.id, "0014_042");
        assert_eq!(summary.comments.len(), 1);
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("content").is_none());
    }

    #[test]
    fn format_replaces_placeholders() {
        let summary = ArticleSummary {
            id: "0026_001".into(),
            title: "Title".into(),
            date: "2024年1月1日".into(),
            url: "https://example.com/1".into(),
            comments: vec![comment(None, None), comment(None, None)],
        };
        assert_eq!(
            summary.format("[{date}] {title} ({comments}) {id}"),
            "[2024年1月1日] Title (2) 0026_001"
        );
    }

    #[test]
    fn format_leaves_braces_in_values_alone() {
        let summary = ArticleSummary {
            id: "0026_001".into(),
            title: "Why {date} matters {comments}".into(),
            date: "2025年1月1日".into(),
            url: "https://example.com/{id}".into(),
            comments: vec![],
        };
        assert_eq!(summary.format("{title}"), "Why {date} matters {comments}");
        assert_eq!(
            summary.format("{url} {date} {unknown}"),
            "https://example.com/{id} 2025年1月1日 {unknown}"
        );
    }

    #[test]
    fn age_gender_label_joins_present_parts() {
        assert_eq!(
            comment(Some("30代"), Some("男性")).age_gender_label().as_deref(),
            Some("30代 男性")
        );
        assert_eq!(
            comment(None, Some("女性")).age_gender_label().as_deref(),
            Some("女性")
        );
        assert_eq!(comment(Some(""), None).age_gender_label(), None);
        assert_eq!(comment(None, None).age_gender_label(), None);
    }

    #[test]
    fn paragraphs_keep_blank_lines() {
        let detail = ArticleDetail {
            id: "article_001".into(),
            title: "T".into(),
            date: "d".into(),
            url: "u".into(),
            content: "first\n\nsecond".into(),
            comments: vec![],
        };
        let paragraphs: Vec<_> = detail.paragraphs().collect();
        assert_eq!(paragraphs, vec!["first", "", "second"]);
    }
}
