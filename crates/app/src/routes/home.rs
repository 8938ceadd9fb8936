use crate::components::{SiteFooter, SiteHeader};
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::ClinicInfo;

const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1586773860418-d37222d8fce3?q=80&w=1920&auto=format&fit=crop";
const ABOUT_IMAGE: &str =
    "https://images.unsplash.com/photo-1576091160550-2173dba999ef?q=80&w=800&auto=format&fit=crop";

/// A service tile on the home page.
struct Service {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const SERVICES: &[Service] = &[
    Service {
        icon: "\u{2764}\u{FE0F}",
        title: "Cardiology",
        description: "Comprehensive heart care from diagnosis to treatment.",
    },
    Service {
        icon: "\u{1F476}",
        title: "Pediatrics",
        description: "Specialized medical care for infants, children, and adolescents.",
    },
    Service {
        icon: "\u{1F9E0}",
        title: "Neurology",
        description: "Expert care for disorders of the brain, spine, and nervous system.",
    },
    Service {
        icon: "\u{1F9B4}",
        title: "Orthopedics",
        description: "Treatment for musculoskeletal trauma, spine diseases, and sports injuries.",
    },
    Service {
        icon: "\u{1F52C}",
        title: "Oncology",
        description: "Advanced cancer treatment with a compassionate approach.",
    },
    Service {
        icon: "\u{1F6A8}",
        title: "Emergency Care",
        description: "24/7 emergency services for critical medical situations.",
    },
];

/// Public marketing page.
#[component]
pub fn Home() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }

        div { class: "home-page",
            SiteHeader {}
            main {
                HeroSection {}
                ServicesSection {}
                AboutSection {}
                ContactSection {}
            }
            SiteFooter {}
        }
    }
}

#[component]
fn HeroSection() -> Element {
    rsx! {
        section {
            id: "home",
            class: "home-hero",
            style: "background-image: url('{HERO_IMAGE}')",
            div { class: "home-hero-overlay" }
            div { class: "home-hero-content",
                h1 { "Compassionate Care, Advanced Medicine" }
                p {
                    "We are dedicated to providing the highest quality healthcare with a personal touch. "
                    "Your health and well-being are our top priorities."
                }
                button {
                    class: "home-hero-cta",
                    onclick: move |_| {
                        navigator().push(Route::Login {});
                    },
                    "Book an Appointment"
                }
            }
        }
    }
}

#[component]
fn ServicesSection() -> Element {
    rsx! {
        section { id: "services", class: "home-section",
            div { class: "home-container",
                h2 { class: "home-heading", "Our Services" }
                div { class: "home-services-grid",
                    for service in SERVICES.iter() {
                        div { key: "{service.title}", class: "home-service",
                            div { class: "home-service-icon", "{service.icon}" }
                            h3 { "{service.title}" }
                            p { "{service.description}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AboutSection() -> Element {
    let clinic: ClinicInfo = use_context();

    rsx! {
        section { id: "about", class: "home-section muted",
            div { class: "home-container home-about",
                div { class: "home-about-image",
                    img { src: ABOUT_IMAGE, alt: "Hospital Staff" }
                }
                div { class: "home-about-text",
                    h2 { class: "home-heading left", "About {clinic.name}" }
                    p {
                        "Founded on the principles of integrity, compassion, and innovation, {clinic.name} "
                        "has been serving the community for over 50 years. We believe in a patient-centric "
                        "approach, where every individual receives personalized care tailored to their unique needs."
                    }
                    p {
                        "Our state-of-the-art facilities and a team of highly skilled medical professionals "
                        "ensure that you receive the best possible care. From routine check-ups to complex "
                        "surgeries, we are here for you every step of the way."
                    }
                }
            }
        }
    }
}

#[component]
fn ContactSection() -> Element {
    let clinic: ClinicInfo = use_context();

    rsx! {
        section { id: "contact", class: "home-section",
            div { class: "home-container home-contact",
                h2 { class: "home-heading", "Get in Touch" }
                p {
                    "We are here to help. Contact us for appointments, inquiries, or emergencies. "
                    "Our team is available 24/7."
                }
                div { class: "home-contact-card",
                    p { class: "home-contact-address", "{clinic.address}, {clinic.city}" }
                    p { "Phone: {clinic.phone} | Email: {clinic.email}" }
                }
            }
        }
    }
}
