use anyhow::{bail, Context, Result};
use axum::Router;
use colored::Colorize;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::config::WebConfig;

/// Serves `index.html`, the stylesheet and the wasm-pack output of the browser client
pub struct WebServer {
    config: WebConfig,
}

impl WebServer {
    pub fn new(config: WebConfig) -> Self {
        Self { config }
    }

    pub fn router(&self) -> Router {
        // Add CORS layer for development
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .fallback_service(ServeDir::new(&self.config.web_dir))
            .layer(cors)
    }

    pub async fn start(self) -> Result<()> {
        if !self.config.web_dir.is_dir() {
            bail!(
                "Web directory {} does not exist (build it with wasm-pack first)",
                self.config.web_dir.display()
            );
        }

        let app = self.router();

        println!("{}", format!("Serving static files from: {}", self.config.web_dir.display()).bright_black());
        println!("🌐 Web server starting on http://{}", self.config.bind_addr);
        log::info!("Listening on {}", self.config.bind_addr);

        let listener = tokio::net::TcpListener::bind(&self.config.bind_addr)
            .await
            .with_context(|| format!("Failed to bind {}", self.config.bind_addr))?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_web_dir_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let server = WebServer::new(WebConfig {
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            web_dir: temp_dir.path().join("missing"),
        });

        let err = server.start().await.unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let server = WebServer::new(WebConfig {
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            web_dir: temp_dir.path().to_path_buf(),
        });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = server.router();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let response = reqwest::get(format!("http://{}/pkg/missing.wasm", addr)).await.unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_serves_index_html() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("index.html"), "<h1>Soda Machine AI Chat</h1>").unwrap();

        let server = WebServer::new(WebConfig {
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            web_dir: temp_dir.path().to_path_buf(),
        });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = server.router();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let response = reqwest::get(format!("http://{}/", addr)).await.unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body = response.text().await.unwrap();
        assert!(body.contains("Soda Machine AI Chat"));
    }
}
