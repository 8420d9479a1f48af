//! Portfolio project list page: search box plus project cards.

use dioxus::prelude::*;
use ui::components::ErrorMessage;
use ui::{use_projects, Protected};

use super::Header;

#[component]
pub fn Projects() -> Element {
    rsx! {
        Header {}
        Protected {
            ProjectGallery {}
        }
    }
}

#[component]
fn ProjectGallery() -> Element {
    let projects = use_projects();
    let state = projects.read();
    let filtered = state.filtered();

    rsx! {
        main {
            class: "page projects-page",

            h1 { class: "page-title", "Portfolio projects" }

            if let Some(err) = state.error.clone() {
                ErrorMessage {
                    message: err,
                    onretry: move |_| {
                        spawn(async move {
                            projects.fetch_all().await;
                        });
                    },
                }
            }

            div {
                class: "project-search",
                input {
                    class: "input project-search-input",
                    r#type: "text",
                    placeholder: "Search projects...",
                    value: "{state.query}",
                    oninput: move |evt| projects.set_query(evt.value()),
                }
                if !state.query.is_empty() {
                    button {
                        class: "project-search-clear",
                        onclick: move |_| projects.set_query(String::new()),
                        "✕"
                    }
                }
                p {
                    class: "project-search-hint",
                    "Searches title, description, position and status"
                }
            }

            if state.loading {
                p { class: "projects-loading", "Loading..." }
            } else if filtered.is_empty() {
                p { class: "projects-empty", "No matching projects." }
            } else {
                div {
                    class: "project-grid",
                    for project in filtered {
                        article {
                            key: "{project.id}",
                            class: "project-card",

                            div {
                                class: "project-card-head",
                                h2 { "{project.title}" }
                                span {
                                    class: "project-status",
                                    "{project.status}"
                                }
                            }
                            p { class: "project-position", "{project.position}" }
                            p { class: "project-description", "{project.description}" }
                            p { class: "project-updated", "Updated {project.updated_at}" }
                        }
                    }
                }
            }
        }
    }
}
