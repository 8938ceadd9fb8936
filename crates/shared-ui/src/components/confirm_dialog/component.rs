use dioxus::prelude::*;
use dioxus_primitives::alert_dialog::{
    AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle,
};

/// Yes/no prompt in front of a destructive action.
///
/// `on_confirm` fires from the confirm button; `on_cancel` fires whenever
/// the prompt closes (cancel, escape, backdrop, and after a confirm too).
/// The two may run in either order, so `on_cancel` must only hide the
/// prompt and `on_confirm` must not depend on state `on_cancel` clears.
#[component]
pub fn ConfirmDialog(
    open: bool,
    title: String,
    description: String,
    #[props(default = "Delete".to_string())] confirm_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        AlertDialogRoot {
            class: "hp-alert-dialog-overlay",
            open,
            on_open_change: move |open: bool| {
                if !open {
                    on_cancel.call(());
                }
            },
            AlertDialogContent { class: "hp-alert-dialog-content",
                AlertDialogTitle { class: "hp-alert-dialog-title", "{title}" }
                AlertDialogDescription { class: "hp-alert-dialog-description", "{description}" }
                AlertDialogActions { class: "hp-alert-dialog-actions",
                    AlertDialogCancel { class: "hp-alert-dialog-cancel", "Cancel" }
                    AlertDialogAction {
                        class: "hp-alert-dialog-action",
                        on_click: move |_: MouseEvent| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
