//! Todo list page: add form, filter tabs, the list itself, and the stats
//! footer.

use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, ErrorMessage, Input};
use ui::{use_todos, Protected, TodoFilter};

use super::Header;

#[component]
pub fn Todos() -> Element {
    rsx! {
        Header {}
        Protected {
            TodoBoard {}
        }
    }
}

#[component]
fn TodoBoard() -> Element {
    let todos = use_todos();
    let mut draft = use_signal(String::new);

    let state = todos.read();
    let stats = state.stats();
    let filtered = state.filtered();

    let handle_add = move |evt: FormEvent| {
        evt.prevent_default();
        let text = draft().trim().to_string();
        if text.is_empty() {
            return;
        }
        spawn(async move {
            // Keep the draft on failure so nothing typed is lost
            if todos.add(text).await.is_ok() {
                draft.set(String::new());
            }
        });
    };

    rsx! {
        main {
            class: "page todo-page",

            h1 { class: "page-title", "Todo list" }

            if let Some(err) = state.error.clone() {
                ErrorMessage {
                    message: err,
                    onretry: move |_| {
                        spawn(async move {
                            todos.fetch_all().await;
                        });
                    },
                }
            }

            form {
                class: "todo-form",
                onsubmit: handle_add,

                Input {
                    class: "todo-input",
                    placeholder: "What needs doing?",
                    value: draft(),
                    disabled: state.creating,
                    oninput: move |evt: FormEvent| draft.set(evt.value()),
                }
                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: state.creating || draft().trim().is_empty(),
                    if state.creating { "Adding..." } else { "Add" }
                }
            }

            div {
                class: "todo-tabs",
                for (filter, count) in [TodoFilter::All, TodoFilter::Pending, TodoFilter::Completed]
                    .map(|filter| (filter, stats.count_for(filter)))
                {
                    button {
                        class: if state.filter == filter { "tab active" } else { "tab" },
                        onclick: move |_| todos.set_filter(filter),
                        "{filter.label()}"
                        span { class: "tab-count", "{count}" }
                    }
                }
            }

            if state.loading {
                p { class: "todo-loading", "Loading..." }
            } else if filtered.is_empty() {
                div {
                    class: "todo-empty",
                    p { "Nothing here." }
                }
            } else {
                ul {
                    class: "todo-list",
                    for todo in filtered {
                        li {
                            key: "{todo.id}",
                            class: if todo.completed { "todo-item done" } else { "todo-item" },

                            input {
                                r#type: "checkbox",
                                checked: todo.completed,
                                onchange: {
                                    let id = todo.id;
                                    move |_| {
                                        spawn(async move {
                                            todos.toggle(id).await;
                                        });
                                    }
                                },
                            }
                            span { class: "todo-text", "{todo.text}" }
                            button {
                                class: "todo-delete",
                                onclick: {
                                    let id = todo.id;
                                    move |_| {
                                        spawn(async move {
                                            todos.remove(id).await;
                                        });
                                    }
                                },
                                "✕"
                            }
                        }
                    }
                }
            }

            if stats.total > 0 {
                div {
                    class: "todo-stats",
                    span { "{stats.total} total" }
                    span { "{stats.completed} completed" }
                    span { "{stats.pending} pending" }
                    div {
                        class: "todo-progress",
                        div {
                            class: "todo-progress-fill",
                            style: "width: {stats.percent_complete()}%;",
                        }
                    }
                }
            }
        }
    }
}
