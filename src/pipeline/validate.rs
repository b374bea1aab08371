// src/pipeline/validate.rs

use crate::error::Result;
use crate::models::Config;

/// Validate configuration and log the effective settings.
pub fn run_validate(config: &Config) -> Result<()> {
    log::info!("Validating configuration...");

    if let Err(e) = config.validate() {
        log::error!("Config validation failed: {}", e);
        return Err(e);
    }

    match (&config.source.base_url, &config.source.root_dir) {
        (Some(url), _) => log::info!("    source: {}", url),
        (None, Some(dir)) => log::info!("    source: {}", dir.display()),
        (None, None) => {}
    }
    log::info!("    user_agent: {}", config.http.user_agent);
    log::info!("    timeout_secs: {}", config.http.timeout_secs);
    log::info!(
        "    categories: {}",
        config
            .discovery
            .categories
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    log::info!("    max_sequence: {}", config.discovery.max_sequence);
    log::info!("    max_concurrent: {}", config.discovery.max_concurrent);
    log::info!("    legacy_category: {}", config.discovery.legacy_category);

    log::info!("✓ Config OK");
    Ok(())
}
