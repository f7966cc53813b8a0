//! Ambient types: configuration and errors.

pub mod config;
pub mod error;

pub use config::CatalogConfig;
pub use error::{CatalogError, CatalogResult};
