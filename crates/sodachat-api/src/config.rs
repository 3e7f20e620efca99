use std::env;

/// Base URL used when no configuration value is supplied
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Path of the question endpoint, appended to the base URL
pub const ASK_PATH: &str = "/ask/";

/// Environment variable carrying the backend base URL
pub const API_BASE_URL_ENV: &str = "SODACHAT_API_BASE_URL";

/// Connection settings for the assistant backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.as_ref()),
        }
    }

    /// Use `value` when it is set and non-blank, the default otherwise
    pub fn from_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(url) if !url.is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    /// Read `SODACHAT_API_BASE_URL` from the process environment
    pub fn from_env() -> Self {
        Self::from_value(env::var(API_BASE_URL_ENV).ok().as_deref())
    }

    /// Full URL of the question endpoint
    pub fn ask_url(&self) -> String {
        format!("{}{}", self.base_url, ASK_PATH)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

/// Trim whitespace and trailing slashes so `ASK_PATH` can be appended as-is
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
