//! # Browser token store — `localStorage` persistence
//!
//! [`LocalTokens`] is the [`TokenStore`] implementation used on the **web
//! platform**. It keeps the bearer token in the browser's `localStorage`
//! under [`TOKEN_KEY`], which is what makes the session survive page reloads:
//! the auth provider finds the token there on startup and revalidates it.
//!
//! All methods silently swallow storage errors (returning `None` for reads,
//! doing nothing for writes). A browser with storage disabled degrades to
//! "never logged in" rather than crashing the app.

use web_sys::Storage;

use crate::tokens::{TokenStore, TOKEN_KEY};

/// `localStorage`-backed TokenStore for the web platform.
///
/// Zero-size and `Clone`-friendly; every operation goes through the window's
/// storage object directly, so all instances observe the same slot.
#[derive(Clone, Debug, Default)]
pub struct LocalTokens;

impl LocalTokens {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl TokenStore for LocalTokens {
    fn get(&self) -> Option<String> {
        Self::storage()?.get_item(TOKEN_KEY).ok()?
    }

    fn set(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
