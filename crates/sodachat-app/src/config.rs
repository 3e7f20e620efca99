use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use sodachat_api::ApiConfig;

use crate::cli::Cli;

/// Data directory used when neither `--data-dir` nor `SODACHAT_DATA_DIR` is given
pub const DEFAULT_DATA_DIR: &str = "~/.sodachat";

/// Resolved settings for a run of the binary
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub data_dir: PathBuf,
    pub web: WebConfig,
    pub verbose: bool,
}

#[derive(Debug, Clone)]
pub struct WebConfig {
    pub bind_addr: SocketAddr,
    pub web_dir: PathBuf,
}

impl AppConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let bind_addr: SocketAddr = format!("{}:{}", cli.web_bind, cli.web_port)
            .parse()
            .with_context(|| format!("Invalid web bind address: {}:{}", cli.web_bind, cli.web_port))?;

        Ok(Self {
            api: ApiConfig::from_value(Some(&cli.api_base_url)),
            data_dir: cli
                .data_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
            web: WebConfig {
                bind_addr,
                web_dir: cli.web_dir.clone(),
            },
            verbose: cli.verbose,
        })
    }
}
