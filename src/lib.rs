// src/lib.rs

//! Article browser library
//!
//! Lists articles published as static `articles/<cat>/article_<seq>.json`
//! documents and resolves single articles with their comments.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod render;
pub mod services;
pub mod session;
pub mod source;
pub mod utils;
