#![deny(clippy::all)]

pub mod commands;
pub mod config;
pub mod error;
pub mod handlers;
pub mod presenter;
pub mod telemetry;

pub use config::CallConfig;
pub use error::CliError;
