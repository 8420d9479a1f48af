//! # Token persistence — the session credential store
//!
//! The bearer token is the only piece of state Folio persists on the client.
//! [`TokenStore`] abstracts where that single string lives so the HTTP client
//! and the session can be handed their storage explicitly instead of reaching
//! for an ambient global: browser `localStorage` on the web platform
//! ([`crate::LocalTokens`]), process memory everywhere else
//! ([`crate::MemoryTokens`], also what tests inject).
//!
//! Implementations must behave like a single persistent slot: `set` replaces,
//! `clear` empties, `get` reflects the latest write. The HTTP client re-reads
//! the slot on every request, so a cleared token takes effect immediately.

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "auth_token";

/// A persistent slot holding the current bearer token, if any.
pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}
