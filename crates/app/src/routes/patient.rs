use super::role_page::{RolePage, WelcomePanel};
use dioxus::prelude::*;

/// Dashboard for the `User` role (patients).
#[component]
pub fn UserDashboard() -> Element {
    rsx! {
        RolePage { title: "User Page",
            WelcomePanel {
                heading: "Welcome to Your Patient Portal!",
                body: "Here you can view your upcoming appointments, medical history, and communicate with your doctor.",
                image: "https://images.unsplash.com/photo-1624727828489-a1e03b79bba8?q=80&w=800&auto=format&fit=crop",
                image_alt: "Patient portal",
            }
        }
    }
}
