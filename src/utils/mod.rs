//! Utility functions and helpers.

pub mod date;
pub mod http;

use url::Url;

pub use date::{parse_localized_date, sentinel_date};

/// Parse a source base URL so that relative resource paths resolve beneath it.
///
/// `Url::join` replaces the last path segment unless the base ends in `/`,
/// so `https://host/site` is treated as `https://host/site/`.
pub fn base_url(raw: &str) -> crate::error::Result<Url> {
    let mut url = Url::parse(raw)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
