// src/models/id.rs

//! Category codes, article keys and the two accepted identifier shapes.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

static COMPOSITE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{4})_([0-9]{3})$").expect("composite id pattern"));

static LEGACY_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^article_([0-9]{3})$").expect("legacy id pattern"));

/// Highest sequence a three-digit identifier can carry.
pub const MAX_SEQUENCE: u16 = 999;

/// A four-digit category code partitioning articles into ID namespaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryCode(String);

impl CategoryCode {
    /// Parse a category code, accepting exactly four ASCII digits.
    pub fn parse(code: &str) -> Result<Self> {
        if code.len() == 4 && code.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(code.to_string()))
        } else {
            Err(AppError::InvalidCategory(code.to_string()))
        }
    }

    /// Wrap a literal code that is already known to be four digits.
    pub(crate) fn from_static(code: &'static str) -> Self {
        debug_assert!(code.len() == 4 && code.bytes().all(|b| b.is_ascii_digit()));
        Self(code.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CategoryCode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CategoryCode {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<CategoryCode> for String {
    fn from(code: CategoryCode) -> Self {
        code.0
    }
}

/// Normalized `(category, sequence)` pair naming exactly one document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleKey {
    pub category: CategoryCode,
    pub sequence: u16,
}

impl ArticleKey {
    pub fn new(category: CategoryCode, sequence: u16) -> Self {
        Self { category, sequence }
    }

    /// Identifier used by list entries, e.g. `0026_001`.
    pub fn composite_id(&self) -> String {
        format!("{}_{:03}", self.category, self.sequence)
    }

    /// Path of the backing document relative to the source root.
    pub fn resource_path(&self) -> String {
        format!("articles/{}/article_{:03}.json", self.category, self.sequence)
    }
}

impl fmt::Display for ArticleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{:03}", self.category, self.sequence)
    }
}

/// An identifier as accepted by detail resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleId {
    /// `<category4>_<seq3>`, e.g. `0026_001`
    Composite {
        category: CategoryCode,
        sequence: u16,
    },
    /// `article_<seq3>`, kept for links created before categories existed
    Legacy { sequence: u16 },
}

impl ArticleId {
    /// Parse either identifier shape.
    ///
    /// Returns `AppError::InvalidId` naming the input for any other shape.
    pub fn parse(id: &str) -> Result<Self> {
        if let Some(caps) = COMPOSITE_ID.captures(id) {
            let category = CategoryCode::parse(&caps[1])?;
            let sequence = parse_sequence(id, &caps[2])?;
            return Ok(Self::Composite { category, sequence });
        }

        if let Some(caps) = LEGACY_ID.captures(id) {
            let sequence = parse_sequence(id, &caps[1])?;
            return Ok(Self::Legacy { sequence });
        }

        Err(AppError::InvalidId(id.to_string()))
    }

    /// Resolve to a concrete key; legacy ids land in `legacy_category`.
    pub fn key(&self, legacy_category: &CategoryCode) -> ArticleKey {
        match self {
            Self::Composite { category, sequence } => ArticleKey::new(category.clone(), *sequence),
            Self::Legacy { sequence } => ArticleKey::new(legacy_category.clone(), *sequence),
        }
    }
}

fn parse_sequence(id: &str, digits: &str) -> Result<u16> {
    digits
        .parse()
        .map_err(|_| AppError::InvalidId(id.to_string()))
}
