use dioxus::prelude::*;
use shared_types::ClinicInfo;
use shared_ui::{Button, ButtonVariant};

use crate::routes::Route;

/// Catch-all for paths the router does not know.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let clinic: ClinicInfo = use_context();
    let path = format!("/{}", route.join("/"));
    tracing::debug!(%path, "unknown route");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "We couldn't find that page" }
                p { class: "not-found-message",
                    code { "{path}" }
                    " is not part of the {clinic.name} site."
                }
                div { class: "not-found-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| {
                            navigator().push(Route::Home {});
                        },
                        "Back to Home"
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| {
                            navigator().push(Route::Login {});
                        },
                        "Go to Portal"
                    }
                }
            }
        }
    }
}
