pub mod render;
pub mod repl;

pub use repl::{run_repl_mode, ReplCommand};

use anyhow::Result;

use crate::config::AppConfig;
use crate::web::server::WebServer;

/// Serve the browser client bundle
pub async fn run_web_server(config: &AppConfig) -> Result<()> {
    WebServer::new(config.web.clone()).start().await
}
