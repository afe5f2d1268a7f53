/// Base URL of the backend API, fixed when the bundle is built.
pub const DEFAULT_API_URL: &str = "/api";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Reads `EGRET_API_URL` at compile time, falling back to [`DEFAULT_API_URL`].
    pub fn from_env() -> Self {
        Self::with_base_url(option_env!("EGRET_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
