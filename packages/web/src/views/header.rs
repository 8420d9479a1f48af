use dioxus::prelude::*;
use ui::{use_auth, LogoutButton, Navbar};

use crate::Route;

/// Top navigation bar: brand, section links for a live session, and the
/// user menu.
#[component]
pub fn Header() -> Element {
    let auth = use_auth();
    let state = auth();

    rsx! {
        Navbar {
            Link {
                class: "navbar-brand",
                to: Route::Root {},
                span { class: "navbar-logo", "F" }
                span { "Folio" }
            }

            nav {
                class: "navbar-links",
                if state.is_authenticated() {
                    Link { to: Route::Todos {}, "Todos" }
                    Link { to: Route::Projects {}, "Projects" }
                    Link { to: Route::Users {}, "Users" }
                }
            }

            div {
                class: "navbar-user",
                if let Some(user) = state.user() {
                    span { class: "navbar-username", "{user.name}" }
                    LogoutButton { class: "navbar-logout" }
                } else {
                    Link { to: Route::Login {}, "Log in" }
                    Link { class: "navbar-register", to: Route::Register {}, "Sign up" }
                }
            }
        }
    }
}
