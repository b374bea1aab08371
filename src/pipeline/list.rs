// src/pipeline/list.rs

//! Article list pipeline.

use chrono::Utc;

use crate::error::Result;
use crate::models::{CategoryCode, Config};
use crate::render;
use crate::services::ArticleDiscovery;
use crate::source;

/// Discover articles and render the list view (or JSON when `json` is set).
pub async fn run_list(
    config: &Config,
    category: Option<&CategoryCode>,
    json: bool,
) -> Result<String> {
    let start_time = Utc::now();
    let source = source::from_config(config)?;
    let discovery = ArticleDiscovery::new(source, config.discovery.clone());

    let outcome = discovery.discover(category).await?;

    let elapsed = Utc::now() - start_time;
    log::info!(
        "Listed {} articles from {} probes in {} ms",
        outcome.articles.len(),
        outcome.probe_total,
        elapsed.num_milliseconds()
    );

    if json {
        Ok(serde_json::to_string_pretty(&outcome.articles)?)
    } else {
        Ok(render::list(&outcome.articles, &config.output.list_template))
    }
}
