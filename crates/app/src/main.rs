use dioxus::prelude::*;

mod components;
mod config;
mod format_helpers;
mod routes;
mod state;
use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    let config = config::app_config();
    if let Err(e) = dioxus::logger::init(config::log_level(config)) {
        eprintln!("[logger] already initialised: {e}");
    }
    tracing::info!(clinic = %config.clinic.name, "starting portal");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let clinic = use_context_provider(|| config::app_config().clinic.clone());

    rsx! {
        document::Title { "{clinic.name} Portal" }
        document::Link { rel: "stylesheet", href: THEME_BASE }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
