use sodachat_api::ApiConfig;

/// Backend settings baked in at build time.
///
/// `SODACHAT_API_BASE_URL=https://soda.example.com wasm-pack build ...` points the
/// bundle at another backend; unset means `http://localhost:8000`.
pub fn api_config() -> ApiConfig {
    ApiConfig::from_value(option_env!("SODACHAT_API_BASE_URL"))
}
