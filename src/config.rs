/// API endpoint configuration.
/// The base URL is taken from `CUPCAKERY_API_URL`: at runtime on the server,
/// at compile time in the browser bundle.
use leptos::logging::log;

pub const API_URL_ENV: &str = "CUPCAKERY_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> Self {
        let base_url = runtime_value()
            .or_else(|| option_env!("CUPCAKERY_API_URL").map(str::to_string))
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        log!("[CONFIG] API base URL: {}", base_url);
        Self::new(base_url)
    }

    /// Joins an endpoint path such as `/products/` onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_value() -> Option<String> {
    std::env::var(API_URL_ENV).ok()
}

#[cfg(target_arch = "wasm32")]
fn runtime_value() -> Option<String> {
    None
}
