//! Terminal front-end and static bundle server for sodachat

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod web;

pub use cli::Cli;
pub use config::{AppConfig, WebConfig};
