//! Authentication context and hooks for the UI.

use api::{AuthApi, Session, User};
use dioxus::prelude::*;

use crate::client::{make_client, make_tokens, ClientTokens};
use crate::components::Spinner;

/// Authentication state for the application.
#[derive(Clone)]
pub struct AuthState {
    pub session: Session<ClientTokens>,
    pub loading: bool,
}

impl AuthState {
    fn fresh() -> Self {
        Self {
            session: Session::new(AuthApi::new(make_client()), make_tokens()),
            loading: true,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.session.user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::fresh);

    // Revalidate any persisted token on mount. Built from scratch rather
    // than read out of the signal: a read here would subscribe the resource
    // to its own write.
    let _ = use_resource(move || async move {
        let mut state = AuthState::fresh();
        state.session.restore().await;
        state.loading = false;
        auth_state.set(state);
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();

    let onclick = move |_| async move {
        let mut state = auth_state();
        state.session.logout().await;
        state.loading = false;
        auth_state.set(state);
        // Hard navigation: every view resets along with the session
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

/// Gate that renders its children only for an authenticated session.
///
/// While the initial token check runs it shows a spinner; once the session
/// settles unauthenticated it redirects to the login entry point.
#[component]
pub fn Protected(children: Element) -> Element {
    let auth = use_auth();
    let state = auth();

    if state.loading {
        return rsx! {
            div {
                class: "protected-loading",
                Spinner {}
            }
        };
    }

    if !state.is_authenticated() {
        tracing::debug!("unauthenticated; redirecting to /login");
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
        return rsx! {};
    }

    rsx! {
        {children}
    }
}
