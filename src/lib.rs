//! Library crate root re-exporting CLI, config, and launcher modules.

pub mod cli;
pub mod config;
pub mod launcher;
pub mod telemetry;
