//! ontoviz-common — Shared error types and configuration used across all ontoviz crates.

pub mod error;
pub mod config;

pub use config::{Config, DataConfig, ServerConfig};
pub use error::{ApiError, OntovizError, Result};
