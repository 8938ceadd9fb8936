use dioxus::prelude::*;

/// Toolbar row: search input on the left, actions on the right; stacks on
/// narrow screens.
#[component]
pub fn SearchBar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "search-bar",
            {children}
        }
    }
}
