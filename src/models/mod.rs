// src/models/mod.rs

//! Domain models for the article browser.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod article;
mod config;
mod id;

// Re-export all public types
pub use article::{ArticleDetail, ArticleDocument, ArticleSummary, Comment};
pub use config::{Config, DiscoveryConfig, HttpConfig, MergeConfig, OutputConfig, SourceConfig};
pub use id::{ArticleId, ArticleKey, CategoryCode, MAX_SEQUENCE};
