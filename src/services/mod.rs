//! Service layer for the article browser.
//!
//! This module contains the business logic for:
//! - Article enumeration across categories (`ArticleDiscovery`)
//! - Single article lookup (`ArticleResolver`)

mod discovery;
mod resolver;

pub use discovery::{
    ArticleDiscovery, DiscoveryOutcome, Probe, collect_probes, plan_probes, sort_newest_first,
};
pub use resolver::ArticleResolver;
