use dioxus::prelude::*;

/// Visual variant for buttons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
    /// Text-only button used inside table rows.
    Link,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Ghost => "ghost",
            ButtonVariant::Link => "link",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    /// HTML button type. Defaults to `button` so clicks never submit a form
    /// by accident; pass `submit` for a form's primary action.
    #[props(default = "button".to_string())]
    pub button_type: String,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let base = vec![
        Attribute::new("class", "button", None, false),
        Attribute::new("data-style", props.variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            r#type: "{props.button_type}",
            onclick: move |evt| {
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            ..merged,
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_defaults_to_non_submitting_type() {
        let html = dioxus_ssr::render_element(rsx! {
            Button { "Cancel" }
        });
        assert!(html.contains(r#"type="button""#));
        assert!(html.contains(r#"data-style="primary""#));
    }

    #[test]
    fn submit_button_keeps_given_type() {
        let html = dioxus_ssr::render_element(rsx! {
            Button { variant: ButtonVariant::Secondary, button_type: "submit", "Save" }
        });
        assert!(html.contains(r#"type="submit""#));
        assert!(html.contains(r#"data-style="secondary""#));
    }
}
