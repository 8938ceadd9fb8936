use chrono::Datelike;
use dioxus::prelude::*;
use shared_types::ClinicInfo;

use super::site_header::SECTIONS;

#[component]
pub fn SiteFooter() -> Element {
    let clinic: ClinicInfo = use_context();
    let year = chrono::Utc::now().year();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./site_footer.css") }

        footer { class: "site-footer",
            div { class: "site-footer-inner",
                div { class: "site-footer-grid",
                    div {
                        h3 { "{clinic.name}" }
                        p { "{clinic.tagline}" }
                    }
                    div {
                        h3 { "Quick Links" }
                        ul {
                            for (id , label) in SECTIONS.iter() {
                                li { key: "{id}",
                                    a { href: "#{id}", "{label}" }
                                }
                            }
                        }
                    }
                    div {
                        h3 { "Contact Us" }
                        p { "{clinic.address}, {clinic.city}" }
                        p { "Email: {clinic.email}" }
                        p { "Phone: {clinic.phone}" }
                    }
                }
                div { class: "site-footer-legal",
                    p { "\u{00A9} {year} {clinic.name}. All Rights Reserved." }
                }
            }
        }
    }
}
