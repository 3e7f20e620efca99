//! # sodachat-api
//!
//! Client for the soda machine assistant backend.
//!
//! The backend exposes a single endpoint: `POST {base_url}/ask/` with a JSON body
//! `{"message": ...}`, answering `{"response": ...}`. The `AskClient` trait is the
//! seam the controller talks to; `HttpAskClient` is the reqwest implementation used
//! by both the terminal client and the browser build.
//!
//! ## Example
//!
//! ```rust,no_run
//! use sodachat_api::{ApiConfig, AskClient, HttpAskClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sodachat_api::ApiError> {
//!     let client = HttpAskClient::new(&ApiConfig::from_env());
//!     let reply = client.send_message("What do you have in stock?").await?;
//!     println!("{}", reply);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::{AskClient, HttpAskClient};
pub use config::{
    normalize_base_url,
    ApiConfig,
    API_BASE_URL_ENV,
    ASK_PATH,
    DEFAULT_API_BASE_URL,
};
pub use error::ApiError;
