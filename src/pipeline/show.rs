// src/pipeline/show.rs

use crate::error::Result;
use crate::models::Config;
use crate::render;
use crate::services::ArticleResolver;
use crate::source;

/// Resolve one article and render the detail view (or JSON).
pub async fn run_show(config: &Config, id: &str, json: bool) -> Result<String> {
    let source = source::from_config(config)?;
    let resolver = ArticleResolver::new(source, config.discovery.legacy_category.clone());

    let article = resolver.resolve(id).await?;
    log::debug!(
        "Resolved {} ({} comments)",
        article.id,
        article.comments.len()
    );

    if json {
        Ok(serde_json::to_string_pretty(&article)?)
    } else {
        Ok(render::detail(&article))
    }
}
