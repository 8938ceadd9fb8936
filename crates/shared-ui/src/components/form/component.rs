use dioxus::prelude::*;

/// Form wrapper that keeps submission on the client.
///
/// Native `required` constraints still run before `onsubmit` fires.
#[component]
pub fn Form(
    #[props(default)] onsubmit: EventHandler<FormEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "form", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            onsubmit: move |evt| {
                evt.prevent_default();
                onsubmit.call(evt);
            },
            ..merged,
            {children}
        }
    }
}

/// Two-column field grid that collapses to one column on narrow screens.
#[component]
pub fn FormGrid(children: Element) -> Element {
    rsx! {
        div { class: "form-grid", {children} }
    }
}

/// One labelled field. `wide` spans both grid columns.
#[component]
pub fn FormField(#[props(default = false)] wide: bool, children: Element) -> Element {
    rsx! {
        div {
            class: if wide { "form-field wide" } else { "form-field" },
            {children}
        }
    }
}

/// Right-aligned row of form buttons.
#[component]
pub fn FormActions(children: Element) -> Element {
    rsx! {
        div { class: "form-actions", {children} }
    }
}
