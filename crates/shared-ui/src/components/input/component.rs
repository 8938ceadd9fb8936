use dioxus::prelude::*;

/// Text input with an optional inline error message below it.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] required: bool,
    /// Validation message for this field; marks the input invalid when set.
    #[props(default)]
    error: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let invalid = error.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        input {
            r#type: "{input_type}",
            value: value,
            placeholder: placeholder,
            required: required,
            aria_invalid: invalid,
            oninput: move |evt| on_input.call(evt),
            ..merged,
        }
        if let Some(msg) = error {
            span { class: "input-error", "{msg}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_renders_below_input() {
        let html = dioxus_ssr::render_element(rsx! {
            Input { value: "", error: "Email is required".to_string() }
        });
        assert!(html.contains("input-error"));
        assert!(html.contains("Email is required"));
    }

    #[test]
    fn no_error_no_message() {
        let html = dioxus_ssr::render_element(rsx! {
            Input { value: "jane@x.com" }
        });
        assert!(!html.contains("input-error"));
        assert!(html.contains("jane@x.com"));
    }
}
