//! Construction of the API client the hooks and the auth context share.
//!
//! The token store is picked per platform: browser `localStorage` on the web
//! build, a process-wide in-memory slot everywhere else (desktop dev runs,
//! tests). The base URL is resolved exactly once per process and then fixed.

use std::sync::OnceLock;

use api::{ApiClient, ApiConfig};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type ClientTokens = store::LocalTokens;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type ClientTokens = store::MemoryTokens;

/// The token store backing the running app.
pub fn make_tokens() -> ClientTokens {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalTokens::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        // One slot per process, like the browser has one localStorage:
        // a login must be visible to every adapter constructed afterwards.
        static TOKENS: OnceLock<store::MemoryTokens> = OnceLock::new();
        TOKENS.get_or_init(store::MemoryTokens::new).clone()
    }
}

fn api_config() -> &'static ApiConfig {
    static CONFIG: OnceLock<ApiConfig> = OnceLock::new();
    CONFIG.get_or_init(ApiConfig::from_env)
}

/// A fresh client over the shared token store and the fixed base URL.
pub fn make_client() -> ApiClient<ClientTokens> {
    ApiClient::new(api_config(), make_tokens())
}
