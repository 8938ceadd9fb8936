use crate::format_helpers::to_datetime_local;
use dioxus::prelude::*;
use shared_types::{AppError, Doctor, Gender, Role, User, ALL_GENDERS, ALL_ROLES};
use shared_ui::{
    Button, ButtonVariant, Form, FormActions, FormField, FormGrid, FormSelect, Input, Label,
    ModalDialog,
};

/// Add/edit dialog for one user.
///
/// Mounted only while open. The fields edit a local copy of `initial`, so
/// closing without saving leaves the directory untouched.
#[component]
pub fn UserModal(
    initial: User,
    editing: bool,
    doctors: Vec<Doctor>,
    on_save: EventHandler<User>,
    on_close: EventHandler<()>,
) -> Element {
    let mut draft = use_signal(|| initial.clone());
    let mut errors = use_signal(|| None::<AppError>);

    let field_error = move |field: &str| -> Option<String> {
        errors
            .read()
            .as_ref()
            .and_then(|e| e.field_error(field))
            .map(str::to_string)
    };

    let handle_submit = move |_: FormEvent| {
        let user = draft.read().clone();
        match user.check_required() {
            Ok(()) => {
                errors.set(None);
                on_save.call(user);
            }
            Err(e) => {
                tracing::debug!(error = %e, "user form incomplete");
                errors.set(Some(e));
            }
        }
    };

    let title = if editing { "Edit User" } else { "Add New User" };
    let current = draft.read().clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./admin.css") }

        ModalDialog { title, on_close,
            Form { onsubmit: handle_submit,
                FormGrid {
                    FormField {
                        Label { html_for: "full_name", "Full Name" }
                        Input {
                            id: "full_name",
                            value: current.full_name.clone(),
                            required: true,
                            error: field_error("full_name"),
                            on_input: move |e: FormEvent| draft.write().full_name = e.value(),
                        }
                    }
                    FormField {
                        Label { html_for: "email", "Email" }
                        Input {
                            id: "email",
                            input_type: "email",
                            value: current.email.clone(),
                            required: true,
                            error: field_error("email"),
                            on_input: move |e: FormEvent| draft.write().email = e.value(),
                        }
                    }
                    FormField {
                        Label { html_for: "phone_number", "Phone Number" }
                        Input {
                            id: "phone_number",
                            input_type: "tel",
                            value: current.phone_number.clone(),
                            required: true,
                            error: field_error("phone_number"),
                            on_input: move |e: FormEvent| draft.write().phone_number = e.value(),
                        }
                    }
                    FormField {
                        Label { html_for: "role", "Role" }
                        FormSelect {
                            id: "role",
                            value: current.role.as_str().to_string(),
                            onchange: move |e: Event<FormData>| {
                                draft.write().role = Role::from_str_or_default(&e.value());
                            },
                            for r in ALL_ROLES.iter() {
                                option { key: "{r}", value: r.as_str(), "{r}" }
                            }
                        }
                    }
                    FormField {
                        Label { html_for: "gender", "Gender" }
                        FormSelect {
                            id: "gender",
                            value: current.gender.as_str().to_string(),
                            onchange: move |e: Event<FormData>| {
                                draft.write().gender = Gender::from_str_or_default(&e.value());
                            },
                            for g in ALL_GENDERS.iter() {
                                option { key: "{g}", value: g.as_str(), "{g}" }
                            }
                        }
                    }
                    FormField {
                        Label { html_for: "appointment_time", "Appointment Time" }
                        Input {
                            id: "appointment_time",
                            input_type: "datetime-local",
                            value: to_datetime_local(&current.appointment_time),
                            on_input: move |e: FormEvent| draft.write().appointment_time = e.value(),
                        }
                    }
                    FormField { wide: true,
                        Label { html_for: "address", "Address" }
                        Input {
                            id: "address",
                            value: current.address.clone(),
                            required: true,
                            error: field_error("address"),
                            on_input: move |e: FormEvent| draft.write().address = e.value(),
                        }
                    }
                    FormField { wide: true,
                        Label { html_for: "assigned_doctor", "Assign Doctor" }
                        FormSelect {
                            id: "assigned_doctor",
                            value: current.assigned_doctor.clone(),
                            onchange: move |e: Event<FormData>| {
                                draft.write().assigned_doctor = e.value();
                            },
                            for d in doctors.iter() {
                                option {
                                    key: "{d.id}",
                                    value: d.name.clone(),
                                    "{d.option_label()}"
                                }
                            }
                        }
                    }
                }

                FormActions {
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        button_type: "submit",
                        "Save"
                    }
                }
            }
        }
    }
}
