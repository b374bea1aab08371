//! Pipeline entry points for CLI operations.
//!
//! - `run_list`: Discover articles and render the list
//! - `run_show`: Resolve one article and render it
//! - `run_validate`: Check configuration
//! - `run_merge`: Join scraped bodies and comments into servable documents

pub mod list;
pub mod merge;
pub mod show;
pub mod validate;

pub use list::run_list;
pub use merge::{MergeReport, run_merge};
pub use show::run_show;
pub use validate::run_validate;
