use dioxus::prelude::*;

#[component]
pub fn Input(
    #[props(default = "".to_string())] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = "".to_string())] placeholder: String,
    #[props(default = false)] disabled: bool,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    let ty = r#type;
    rsx! {
        input {
            class: "input {class}",
            r#type: "{ty}",
            placeholder: "{placeholder}",
            disabled: disabled,
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}
