use super::role_page::{RolePage, WelcomePanel};
use dioxus::prelude::*;

#[component]
pub fn DoctorDashboard() -> Element {
    rsx! {
        RolePage { title: "Doctor Page",
            WelcomePanel {
                heading: "Welcome, Doctor!",
                body: "Here you can view your appointments, manage patient records, and more.",
                image: "https://images.unsplash.com/photo-1538108149393-fbbd81895907?q=80&w=800&auto=format&fit=crop",
                image_alt: "Doctor workspace",
            }
        }
    }
}
