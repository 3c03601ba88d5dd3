pub mod config;
pub mod dataset;
pub mod error;

// Recommendation engine
pub mod recommender;

// HTTP API
pub mod api;

// Web UI
pub mod web;

// CLI
pub mod cli;

// Re-exports
pub use config::Settings;
pub use error::{Error, Result};
pub use recommender::Recommender;
