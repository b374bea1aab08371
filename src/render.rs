// src/render.rs

//! Plain-text views of the article list and a single article.

use crate::models::{ArticleDetail, ArticleSummary, Comment};

const RULE: &str = "────────────────────────────────────────";

/// Render the list view: a count line followed by one line per article.
pub fn list(articles: &[ArticleSummary], template: &str) -> String {
    let mut out = format!("記事一覧\n{}件の記事が見つかりました\n", articles.len());
    for article in articles {
        out.push_str(&article.format(template));
        out.push('\n');
    }
    out
}

/// Render the detail view: header, body paragraphs and comments.
pub fn detail(article: &ArticleDetail) -> String {
    let mut out = format!(
        "{}\n{}  元記事: {}\n{RULE}\n",
        article.title, article.date, article.url
    );

    for paragraph in article.paragraphs() {
        out.push_str(paragraph.trim_end());
        out.push('\n');
    }

    out.push_str(RULE);
    out.push('\n');
    out.push_str(&comments(&article.comments));
    out
}

/// Render the comment section.
pub fn comments(comments: &[Comment]) -> String {
    if comments.is_empty() {
        return "コメント\nコメントはまだありません。\n".to_string();
    }

    let mut out = format!("コメント ({}件)\n", comments.len());
    for (i, comment) in comments.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let header = match comment.age_gender_label() {
            Some(label) => format!("{} [{}] {}\n", comment.name, label, comment.date),
            None => format!("{} {}\n", comment.name, comment.date),
        };
        out.push_str(&header);
        for line in comment.lines() {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

/// Message shown when an article cannot be displayed.
pub fn not_found(id: &str) -> String {
    format!("記事が見つかりません: {id}")
}
