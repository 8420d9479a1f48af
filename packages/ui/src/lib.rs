//! This crate contains all shared UI for the workspace: the auth context,
//! the per-resource view-state hooks, and the small form components the
//! views are assembled from.

pub mod components;

mod client;
pub use client::{make_client, make_tokens, ClientTokens};

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LogoutButton, Protected};

mod todos;
pub use todos::{use_todos, TodoFilter, TodoList, TodoStats, UseTodos};

mod users;
pub use users::{use_users, UserList, UseUsers};

mod projects;
pub use projects::{use_projects, ProjectList, UseProjects};

mod navbar;
pub use navbar::Navbar;
