//! Application configuration structures.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::{CategoryCode, MAX_SEQUENCE};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Where article documents are read from
    #[serde(default)]
    pub source: SourceConfig,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Category enumeration rules
    #[serde(default)]
    pub discovery: DiscoveryConfig,

    /// Console output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Inputs and target of the merge step
    #[serde(default)]
    pub merge: MergeConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        match (&self.source.base_url, &self.source.root_dir) {
            (Some(_), Some(_)) => {
                return Err(AppError::validation(
                    "source.base_url and source.root_dir are mutually exclusive",
                ));
            }
            (None, None) => {
                return Err(AppError::validation(
                    "one of source.base_url or source.root_dir must be set",
                ));
            }
            (Some(base_url), None) => {
                url::Url::parse(base_url)?;
            }
            (None, Some(_)) => {}
        }
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::validation("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }
        self.discovery.validate()
    }
}

/// Document source. Exactly one of the two fields is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Static file server hosting `articles/<cat>/article_<seq>.json`
    #[serde(default)]
    pub base_url: Option<String>,

    /// Local directory with the same layout
    #[serde(default)]
    pub root_dir: Option<PathBuf>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: Some(defaults::base_url()),
            root_dir: None,
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds; a timed out fetch counts as missing
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Category enumeration settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Categories scanned when no filter is given, in scan order
    #[serde(default = "defaults::categories")]
    pub categories: Vec<CategoryCode>,

    /// Highest sequence number probed in each category
    #[serde(default = "defaults::max_sequence")]
    pub max_sequence: u16,

    /// Maximum concurrent probes
    #[serde(default = "defaults::max_concurrent")]
    pub max_concurrent: usize,

    /// Category assumed for `article_<seq>` identifiers
    #[serde(default = "defaults::legacy_category")]
    pub legacy_category: CategoryCode,
}

impl DiscoveryConfig {
    pub fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            return Err(AppError::validation("discovery.categories is empty"));
        }
        let mut seen = HashSet::new();
        for code in &self.categories {
            if !seen.insert(code) {
                return Err(AppError::validation(format!(
                    "discovery.categories lists {code} twice"
                )));
            }
        }
        if !(1..=MAX_SEQUENCE).contains(&self.max_sequence) {
            return Err(AppError::validation(format!(
                "discovery.max_sequence must be between 1 and {MAX_SEQUENCE}"
            )));
        }
        if self.max_concurrent == 0 {
            return Err(AppError::validation("discovery.max_concurrent must be > 0"));
        }
        Ok(())
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            categories: defaults::categories(),
            max_sequence: defaults::max_sequence(),
            max_concurrent: defaults::max_concurrent(),
            legacy_category: defaults::legacy_category(),
        }
    }
}

/// Console output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Line template for list entries, see `ArticleSummary::format`
    #[serde(default = "defaults::list_template")]
    pub list_template: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            list_template: defaults::list_template(),
        }
    }
}

/// Merge step settings.
///
/// Scraped bodies live at `<articles_dir>/<cat>/<cat>_<seq>.json`, their
/// comments at `<comments_dir>/<cat>/<cat>_<seq>.json`. Merged documents are
/// written under `output_dir` in the layout `LocalSource` reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeConfig {
    #[serde(default = "defaults::articles_dir")]
    pub articles_dir: PathBuf,

    #[serde(default = "defaults::comments_dir")]
    pub comments_dir: PathBuf,

    #[serde(default = "defaults::output_dir")]
    pub output_dir: PathBuf,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            articles_dir: defaults::articles_dir(),
            comments_dir: defaults::comments_dir(),
            output_dir: defaults::output_dir(),
        }
    }
}

mod defaults {
    use std::path::PathBuf;


    use crate::models::CategoryCode;

    // Source defaults
    pub fn base_url() -> String {
        "http://localhost:3000".into()
    }

    // HTTP defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; article-browser/0.1)".into()
    }
    pub fn timeout() -> u64 {
        10
    }

    // Discovery defaults
    pub fn categories() -> Vec<CategoryCode> {
        ["0026", "0014", "0011", "0006", "0029"]
            .into_iter()
            .map(CategoryCode::from_static)
            .collect()
    }
    pub fn max_sequence() -> u16 {
        300
    }
    pub fn max_concurrent() -> usize {
        8
    }
    pub fn legacy_category() -> CategoryCode {
        CategoryCode::from_static("0026")
    }

    // Output defaults
    pub fn list_template() -> String {
        "{date}  {id}  {title}  ({comments}件のコメント)".into()
    }

    // Merge defaults
    pub fn articles_dir() -> PathBuf {
        PathBuf::from("scraped/articles")
    }
    pub fn comments_dir() -> PathBuf {
        PathBuf::from("scraped/comments")
    }
    pub fn output_dir() -> PathBuf {
        PathBuf::from("public")
    }
}
