use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdArrowLeft;
use dioxus_free_icons::Icon;
use shared_ui::{Button, ButtonVariant, PageActions, PageHeader, PageTitle};

/// Shell around every dashboard: title bar with Logout and Back.
///
/// Logout only navigates; there is no session to clear.
#[component]
pub fn RolePage(title: String, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./role_page.css") }

        div { class: "role-page",
            PageHeader {
                PageTitle { "{title}" }
                PageActions {
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| {
                            navigator().push(Route::Login {});
                        },
                        "Logout"
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| navigator().go_back(),
                        Icon::<LdArrowLeft> { icon: LdArrowLeft, width: 18, height: 18 }
                        "Back"
                    }
                }
            }
            main { class: "role-page-main", {children} }
        }
    }
}

/// Centered welcome card used by the doctor and patient dashboards.
#[component]
pub fn WelcomePanel(heading: String, body: String, image: String, image_alt: String) -> Element {
    rsx! {
        shared_ui::Card { class: "welcome-panel",
            h2 { "{heading}" }
            p { "{body}" }
            img { src: "{image}", alt: "{image_alt}" }
        }
    }
}
