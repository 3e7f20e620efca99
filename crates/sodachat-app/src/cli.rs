use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

use sodachat_api::{API_BASE_URL_ENV, DEFAULT_API_BASE_URL};

/// CLI arguments for sodachat
#[derive(Parser, Debug)]
#[command(name = "sodachat")]
#[command(about = "Soda Machine AI Chat - talk to the soda machine ordering assistant")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Base URL of the assistant backend (POST {url}/ask/)
    #[arg(long, value_name = "URL", env = API_BASE_URL_ENV, default_value = DEFAULT_API_BASE_URL)]
    pub api_base_url: String,

    /// Directory holding saved conversations (default: ~/.sodachat)
    #[arg(long, value_name = "DIR", env = "SODACHAT_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Serve the compiled browser client instead of starting the terminal chat
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub web: bool,

    /// Web server port
    #[arg(long, default_value = "8080", env = "SODACHAT_WEB_PORT")]
    pub web_port: u16,

    /// Web server bind address
    #[arg(long, default_value = "127.0.0.1", env = "SODACHAT_WEB_BIND")]
    pub web_bind: String,

    /// Directory with index.html and the wasm-pack output
    #[arg(long, value_name = "DIR", env = "SODACHAT_WEB_DIR", default_value = "crates/sodachat-wasm/static")]
    pub web_dir: PathBuf,

    /// Generate shell completions
    #[arg(long, value_enum)]
    pub generate: Option<Shell>,

    /// Enable verbose debug output (HTTP requests, storage writes)
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "sodachat",
            "--api-base-url",
            "http://soda.local:9000",
            "--data-dir",
            "/tmp/soda",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.api_base_url, "http://soda.local:9000");
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/soda")));
        assert!(cli.verbose);
        assert!(!cli.web);
    }

    #[test]
    fn test_web_mode_flags() {
        let cli = Cli::try_parse_from(["sodachat", "--web", "--web-port", "3000"]).unwrap();
        assert!(cli.web);
        assert_eq!(cli.web_port, 3000);
    }
}
