use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use store::TokenStore;

use crate::config::ApiConfig;
use crate::error::ApiError;

/// Where a rejected session gets sent.
const LOGIN_PATH: &str = "/login";

/// Generic JSON client for the backend API.
///
/// Holds the base URL (resolved once at construction) and the token store the
/// bearer credential is re-read from on **every** request — the token is
/// never cached in the client, so a logout or a 401 in one adapter is
/// immediately visible to all of them. Resource adapters wrap this by
/// delegation and add only their field translations.
#[derive(Clone)]
pub struct ApiClient<S: TokenStore> {
    http: reqwest::Client,
    base_url: String,
    tokens: S,
}

impl<S: TokenStore> ApiClient<S> {
    pub fn new(config: &ApiConfig, tokens: S) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url().to_string(),
            tokens,
        }
    }

    /// Perform a request and decode the JSON response as `T`.
    ///
    /// `headers` are merged over the defaults; the caller wins on conflict.
    pub async fn request<T, B>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
        headers: Option<HeaderMap>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.send(method, endpoint, body, headers).await?;
        response.json::<T>().await.map_err(ApiError::Decode)
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.request(Method::GET, endpoint, None::<&()>, None).await
    }

    pub async fn post<T, B>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, endpoint, Some(body), None).await
    }

    /// POST without a body, response discarded (the logout endpoint).
    pub async fn post_unit(&self, endpoint: &str) -> Result<(), ApiError> {
        self.send(Method::POST, endpoint, None::<&()>, None)
            .await
            .map(drop)
    }

    pub async fn put<T, B>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::PUT, endpoint, Some(body), None).await
    }

    /// DELETE, response body discarded.
    pub async fn delete(&self, endpoint: &str) -> Result<(), ApiError> {
        self.send(Method::DELETE, endpoint, None::<&()>, None)
            .await
            .map(drop)
    }

    async fn send<B>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
        headers: Option<HeaderMap>,
    ) -> Result<reqwest::Response, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, endpoint);

        let mut header_map = HeaderMap::new();
        if let Some(token) = self.tokens.get() {
            if let Ok(value) = HeaderValue::from_str(&format!("Bearer {token}")) {
                header_map.insert(AUTHORIZATION, value);
            }
        }
        if let Some(extra) = headers {
            for (name, value) in extra.iter() {
                header_map.insert(name.clone(), value.clone());
            }
        }

        let mut builder = self.http.request(method, &url).headers(header_map);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|err| {
            tracing::error!(%url, "API request failed: {err}");
            ApiError::Network(err)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // Error bodies are best-effort JSON; a malformed one degrades to `{}`
        // rather than masking the HTTP failure with a decode failure.
        let error_body: serde_json::Value = response
            .json()
            .await
            .unwrap_or_else(|_| serde_json::json!({}));

        if status == StatusCode::UNAUTHORIZED {
            // The session is dead. Drop the persisted token and send the
            // whole app back to the login screen before surfacing the error.
            self.tokens.clear();
            redirect_to_login();
        }

        let message = error_body
            .get("message")
            .and_then(serde_json::Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| {
                format!(
                    "HTTP error {} {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("")
                )
            });

        Err(ApiError::Http {
            status: status.as_u16(),
            message,
        })
    }
}

fn redirect_to_login() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(LOGIN_PATH);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::warn!("session expired; browser clients are redirected to {LOGIN_PATH}");
    }
}
