use dioxus::prelude::*;

/// Color scheme for badges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BadgeVariant {
    Success,
    Info,
    Danger,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Success => "success",
            BadgeVariant::Info => "info",
            BadgeVariant::Danger => "danger",
        }
    }
}

/// Rounded pill for short labels such as a user's role.
#[component]
pub fn Badge(
    variant: BadgeVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-variant", variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_renders_variant_attribute() {
        let html = dioxus_ssr::render_element(rsx! {
            Badge { variant: BadgeVariant::Danger, "Admin" }
        });
        assert!(html.contains(r#"data-variant="danger""#));
        assert!(html.contains("Admin"));
    }

    #[test]
    fn badge_variants_map_to_distinct_attributes() {
        let html = dioxus_ssr::render_element(rsx! {
            Badge { variant: BadgeVariant::Info, "Doctor" }
            Badge { variant: BadgeVariant::Success, "User" }
        });
        assert!(html.contains(r#"data-variant="info""#));
        assert!(html.contains(r#"data-variant="success""#));
    }
}
