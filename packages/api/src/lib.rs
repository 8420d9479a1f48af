//! # API crate — typed client layer for the Folio backend
//!
//! Everything the frontends need to talk to the remote REST API lives here:
//! a generic JSON-over-HTTP client, one adapter per backend resource, and the
//! client-side authentication session. The UI layer composes these; nothing
//! in this crate knows about components or rendering.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | Generic envelope client: URL building, bearer attachment, JSON bodies, status interpretation, the 401 session reset |
//! | [`config`] | Backend base URL resolution (env var, baked-in value, loopback default) |
//! | [`envelope`] | The backend's response wrappers; unwrap depth is declared per endpoint, never inferred |
//! | [`error`] | [`ApiError`] — network / HTTP-status / decode taxonomy, `Display` is what views render |
//! | [`models`] | Resource types and the backend↔frontend field projections |
//! | [`session`] | [`Session`] — token restore/login/register/logout state machine |
//!
//! Resource adapters ([`TodoApi`], [`UserApi`], [`ProjectApi`], [`AuthApi`])
//! wrap the client by delegation; each owns the field translation for one
//! resource and nothing else. Errors pass through them unchanged.

pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod models;

mod auth;
mod projects;
mod session;
mod todos;
mod users;

pub use auth::AuthApi;
pub use client::ApiClient;
pub use config::ApiConfig;
pub use envelope::{Envelope, NestedEnvelope};
pub use error::ApiError;
pub use models::{
    AuthPayload, CurrentUser, LoginCredentials, NewTodo, NewUser, PortfolioProject,
    RegisterCredentials, Todo, TodoPatch, TodoRecord, User, UserPatch,
};
pub use projects::ProjectApi;
pub use session::Session;
pub use todos::TodoApi;
pub use users::UserApi;
