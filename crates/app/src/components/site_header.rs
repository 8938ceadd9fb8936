use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::ClinicInfo;
use shared_ui::{Button, ButtonVariant};

/// In-page sections the header links to, as (element id, label).
pub const SECTIONS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("services", "Services"),
    ("about", "About Us"),
    ("contact", "Contact"),
];

/// Smooth-scroll the marketing page to the element with `id`.
fn scroll_to_section(id: &str) {
    document::eval(&format!(
        r#"
        (function() {{
            var el = document.getElementById('{id}');
            if (el) {{ el.scrollIntoView({{ behavior: 'smooth' }}); }}
        }})();
        "#,
    ));
}

/// Sticky header of the public site.
#[component]
pub fn SiteHeader() -> Element {
    let clinic: ClinicInfo = use_context();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./site_header.css") }

        header { class: "site-header",
            div { class: "site-header-inner",
                div {
                    class: "site-brand",
                    onclick: move |_| {
                        navigator().push(Route::Home {});
                    },
                    "{clinic.name}"
                }
                nav { class: "site-nav",
                    for (id , label) in SECTIONS.iter() {
                        a {
                            key: "{id}",
                            class: "site-nav-link",
                            onclick: move |_| scroll_to_section(id),
                            "{label}"
                        }
                    }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    class: "site-login",
                    onclick: move |_| {
                        navigator().push(Route::Login {});
                    },
                    "Login / Portal"
                }
            }
        }
    }
}
