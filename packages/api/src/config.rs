use std::env;

/// Environment variable naming the backend base URL.
pub const BASE_URL_VAR: &str = "API_BASE_URL";

/// Fallback when no base URL is provided at run or build time.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Backend location, resolved once and then fixed for the session.
///
/// Resolution order: the runtime environment (native builds), the value baked
/// in at compile time (how wasm builds receive it, since the browser has no
/// process environment), then the local loopback default.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let base_url = env::var(BASE_URL_VAR)
            .ok()
            .or_else(|| option_env!("API_BASE_URL").map(str::to_string))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// The prefix every endpoint path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slashes_are_stripped() {
        let config = ApiConfig::new("http://localhost:8000/api/");
        assert_eq!(config.base_url(), "http://localhost:8000/api");

        let config = ApiConfig::new("http://localhost:8000/api//");
        assert_eq!(config.base_url(), "http://localhost:8000/api");
    }

    #[test]
    fn test_env_override() {
        env::set_var(BASE_URL_VAR, "https://backend.example.com/api");
        let config = ApiConfig::from_env();
        assert_eq!(config.base_url(), "https://backend.example.com/api");
        env::remove_var(BASE_URL_VAR);
    }
}
