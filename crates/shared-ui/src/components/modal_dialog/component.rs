use dioxus::prelude::*;
use dioxus_primitives::dialog::{DialogContent, DialogRoot, DialogTitle};

/// Always-open dialog with a title bar and "×" close button.
///
/// Mount it only while it should be visible. `on_close` fires for the
/// close button, escape and backdrop clicks.
#[component]
pub fn ModalDialog(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        DialogRoot {
            class: "hp-dialog-overlay",
            open: true,
            on_open_change: move |open: bool| {
                if !open {
                    on_close.call(());
                }
            },
            DialogContent { class: "hp-dialog-content",
                div { class: "hp-dialog-header",
                    DialogTitle { class: "hp-dialog-title", "{title}" }
                    button {
                        r#type: "button",
                        class: "hp-dialog-close",
                        aria_label: "Close",
                        onclick: move |_| on_close.call(()),
                        "\u{00D7}"
                    }
                }
                {children}
            }
        }
    }
}
