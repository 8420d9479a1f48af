//! User registry admin page: the table plus a create form.

use api::NewUser;
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, ErrorMessage, Input};
use ui::{use_users, Protected};

use super::Header;

#[component]
pub fn Users() -> Element {
    rsx! {
        Header {}
        Protected {
            UserAdmin {}
        }
    }
}

#[component]
fn UserAdmin() -> Element {
    let users = use_users();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);

    let state = users.read();

    let handle_create = move |evt: FormEvent| {
        evt.prevent_default();
        let user = NewUser {
            name: name().trim().to_string(),
            email: email().trim().to_string(),
        };
        if user.name.is_empty() || !user.email.contains('@') {
            return;
        }
        spawn(async move {
            if users.create(user).await.is_ok() {
                name.set(String::new());
                email.set(String::new());
            }
        });
    };

    rsx! {
        main {
            class: "page users-page",

            h1 { class: "page-title", "Users" }

            if let Some(err) = state.error.clone() {
                ErrorMessage {
                    message: err,
                    onretry: move |_| {
                        spawn(async move {
                            users.fetch_all().await;
                        });
                    },
                }
            }

            form {
                class: "user-form",
                onsubmit: handle_create,

                Input {
                    placeholder: "Name",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
                Input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    "Add user"
                }
            }

            if state.loading {
                p { class: "users-loading", "Loading..." }
            } else if state.users.is_empty() {
                p { class: "users-empty", "No users yet." }
            } else {
                table {
                    class: "users-table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Email" }
                            th { "Joined" }
                            th {}
                        }
                    }
                    tbody {
                        for user in state.users {
                            tr {
                                key: "{user.id}",
                                td { "{user.name}" }
                                td { "{user.email}" }
                                td { {user.created_at.clone().unwrap_or_default()} }
                                td {
                                    Button {
                                        variant: ButtonVariant::Danger,
                                        onclick: {
                                            let id = user.id;
                                            move |_| {
                                                spawn(async move {
                                                    let _ = users.remove(id).await;
                                                });
                                            }
                                        },
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
