use dioxus::prelude::*;

/// Inline error banner with an optional retry action.
#[component]
pub fn ErrorMessage(
    message: String,
    #[props(default)] onretry: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        div {
            class: "error-message",
            span { "{message}" }
            if let Some(handler) = onretry {
                button {
                    class: "error-retry",
                    onclick: move |_| handler.call(()),
                    "Retry"
                }
            }
        }
    }
}

#[component]
pub fn Spinner() -> Element {
    rsx! {
        div {
            class: "spinner",
            span { class: "spinner-dot" }
            span { class: "spinner-dot" }
            span { class: "spinner-dot" }
        }
    }
}
