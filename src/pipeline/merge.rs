// src/pipeline/merge.rs

//! Merge pipeline.
//!
//! Joins scraped article bodies with their scraped comment lists and writes
//! the combined documents in the layout the sources serve:
//!
//! ```text
//! {articles_dir}/{cat}/{cat}_{seq}.json   body: title, date, url, content
//! {comments_dir}/{cat}/{cat}_{seq}.json   array of comments (optional)
//!          => {output_dir}/articles/{cat}/article_{seq}.json
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::error::Result;
use crate::models::{ArticleDocument, ArticleKey, CategoryCode, Comment, Config};
use crate::source::{ArticleSource, LocalSource};

static SCRAPED_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{4})_([0-9]{3})\.json$").expect("scraped file pattern"));

/// Article body as written by the scraper. Missing fields become empty.
#[derive(Debug, Deserialize)]
struct ScrapedArticle {
    #[serde(default)]
    title: String,
    #[serde(default)]
    date: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    content: String,
}

/// Result of merging one category.
#[derive(Debug)]
pub struct MergeReport {
    pub category: CategoryCode,
    /// Written documents, ascending sequence
    pub merged: Vec<ArticleKey>,
    /// Merged documents whose comment file was absent
    pub without_comments: usize,
    /// Bodies skipped because they, their comments or the write failed
    pub failures: usize,
}

impl fmt::Display for MergeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}件保存 (コメントなし {}件, エラー {}件)",
            self.category,
            self.merged.len(),
            self.without_comments,
            self.failures
        )
    }
}

/// Merge `category`, or every configured category, using `config.merge`.
pub async fn run_merge(config: &Config, category: Option<&CategoryCode>) -> Result<Vec<MergeReport>> {
    let targets = match category {
        Some(code) => vec![code.clone()],
        None => config.discovery.categories.clone(),
    };
    let target = LocalSource::new(&config.merge.output_dir);

    let mut reports = Vec::with_capacity(targets.len());
    for code in &targets {
        let report = merge_category(
            &config.merge.articles_dir,
            &config.merge.comments_dir,
            &target,
            code,
        )
        .await?;
        log::info!("{}", report);
        reports.push(report);
    }
    Ok(reports)
}

/// Merge every scraped body of one category into `target`.
///
/// A body that cannot be read, whose comment file is malformed, or whose
/// merged document cannot be written is counted and skipped.
pub async fn merge_category(
    articles_dir: &Path,
    comments_dir: &Path,
    target: &LocalSource,
    category: &CategoryCode,
) -> Result<MergeReport> {
    let bodies_dir = articles_dir.join(category.as_str());
    let sequences = scraped_sequences(&bodies_dir, category).await?;
    log::info!(
        "Merging {} articles of category {} into {}",
        sequences.len(),
        category,
        target.describe()
    );

    let mut report = MergeReport {
        category: category.clone(),
        merged: Vec::new(),
        without_comments: 0,
        failures: 0,
    };

    for sequence in sequences {
        let key = ArticleKey::new(category.clone(), sequence);
        let file_name = scraped_file_name(&key);
        let body_path = bodies_dir.join(&file_name);
        let comments_path = comments_dir.join(category.as_str()).join(&file_name);

        match merge_one(&key, &body_path, &comments_path, target).await {
            Ok(had_comments) => {
                if !had_comments {
                    log::debug!("{}: no comment file, using an empty list", key);
                    report.without_comments += 1;
                }
                report.merged.push(key);
            }
            Err(e) => {
                log::warn!("{}: merge failed: {}", key, e);
                report.failures += 1;
            }
        }
    }

    Ok(report)
}

/// Merge one body with its comments. Returns whether a comment file existed.
async fn merge_one(
    key: &ArticleKey,
    body_path: &Path,
    comments_path: &Path,
    target: &LocalSource,
) -> Result<bool> {
    let body = tokio::fs::read(body_path).await?;
    let article: ScrapedArticle = serde_json::from_slice(&body)?;

    let comments: Option<Vec<Comment>> = match read_optional(comments_path).await? {
        Some(bytes) => Some(serde_json::from_slice(&bytes)?),
        None => None,
    };
    let had_comments = comments.is_some();

    let document = ArticleDocument {
        title: article.title,
        date: article.date,
        url: article.url,
        content: article.content,
        comments: Some(comments.unwrap_or_default()),
    };
    let path = target.store(key, &document).await?;
    log::debug!("{}: wrote {}", key, path.display());
    Ok(had_comments)
}

/// Sequences of `<cat>_<seq>.json` files in `dir`, ascending.
///
/// A missing directory yields nothing; other entries are ignored.
async fn scraped_sequences(dir: &Path, category: &CategoryCode) -> Result<Vec<u16>> {
    let mut entries = match tokio::fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::warn!("No scraped articles at {}", dir.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let mut sequences = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let name = entry.file_name();
        let Some(caps) = name.to_str().and_then(|name| SCRAPED_FILE.captures(name)) else {
            continue;
        };
        if &caps[1] != category.as_str() {
            continue;
        }
        if let Ok(sequence) = caps[2].parse::<u16>() {
            sequences.push(sequence);
        }
    }
    sequences.sort_unstable();
    Ok(sequences)
}

fn scraped_file_name(key: &ArticleKey) -> PathBuf {
    PathBuf::from(format!("{}_{:03}.json", key.category, key.sequence))
}

async fn read_optional(path: &Path) -> Result<Option<Vec<u8>>> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}
