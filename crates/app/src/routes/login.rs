use crate::routes::{dashboard_route, Route};
use dioxus::prelude::*;
use shared_types::{ClinicInfo, Role, ALL_ROLES};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, Form,
    FormSelect, Input, Label,
};

const BACKDROP_IMAGE: &str =
    "https://images.unsplash.com/photo-1586773860418-d37222d8fce3?q=80&w=1920&auto=format&fit=crop";

/// Mock sign-in form.
///
/// Email and password are collected but never checked: submitting only
/// routes to the dashboard of the selected role.
#[component]
pub fn Login() -> Element {
    let clinic: ClinicInfo = use_context();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(Role::default);

    let handle_login = move |_: FormEvent| {
        let selected = role();
        tracing::info!(role = %selected, "routing to dashboard");
        navigator().push(dashboard_route(selected));
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div {
            class: "login-page",
            style: "background-image: url('{BACKDROP_IMAGE}')",

            Card {
                class: "login-card",

                CardHeader {
                    CardTitle {
                        class: "login-title",
                        onclick: move |_| {
                            navigator().push(Route::Home {});
                        },
                        "{clinic.name} Portal"
                    }
                    CardDescription { "Sign in to access your dashboard" }
                }

                CardContent {
                    Form { onsubmit: handle_login,
                        div { class: "login-field",
                            Label { html_for: "role", "Select Your Role" }
                            FormSelect {
                                id: "role",
                                value: role().as_str().to_string(),
                                onchange: move |evt: Event<FormData>| {
                                    role.set(Role::from_str_or_default(&evt.value()));
                                },
                                for r in ALL_ROLES.iter() {
                                    option { key: "{r}", value: r.as_str(), "{r.login_label()}" }
                                }
                            }
                        }
                        div { class: "login-field",
                            Label { html_for: "email", "Email" }
                            Input {
                                input_type: "email",
                                id: "email",
                                placeholder: "you@example.com",
                                required: true,
                                value: email(),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                        }
                        div { class: "login-field",
                            Label { html_for: "password", "Password" }
                            Input {
                                input_type: "password",
                                id: "password",
                                placeholder: "\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}",
                                required: true,
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            button_type: "submit",
                            class: "login-submit",
                            "Login"
                        }
                    }
                }
            }
        }
    }
}
