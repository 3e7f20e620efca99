use anyhow::Result;
use clap::{CommandFactory, Parser};

use sodachat::app::{run_repl_mode, run_web_server};
use sodachat::{logging, AppConfig, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Some(shell) = cli.generate {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        return Ok(());
    }

    logging::init(cli.verbose);

    let config = AppConfig::from_cli(&cli)?;
    log::debug!("Resolved configuration: {:?}", config);

    if cli.web {
        return run_web_server(&config).await;
    }

    run_repl_mode(&config).await
}
