use crate::format_helpers::format_appointment;
use crate::state::AdminState;
use dioxus::prelude::*;
use shared_types::{Role, User};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonVariant, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow, ToastOptions,
};

const COLUMNS: [&str; 6] = [
    "Full Name",
    "Contact",
    "Role",
    "Appointment",
    "Assigned Doctor",
    "Actions",
];

pub fn role_badge_variant(role: Role) -> BadgeVariant {
    match role {
        Role::Admin => BadgeVariant::Danger,
        Role::Doctor => BadgeVariant::Info,
        Role::User => BadgeVariant::Success,
    }
}

/// Label/value rows under the name on a narrow-screen card.
pub fn card_details(user: &User) -> Vec<(&'static str, String)> {
    vec![
        ("Gender", user.gender.to_string()),
        ("Phone", user.phone_number.clone()),
        ("Appointment", format_appointment(&user.appointment_time)),
        ("Doctor", user.assigned_doctor.clone()),
    ]
}

/// Desktop table of the users matching the current search.
#[component]
pub fn UserTable(state: Signal<AdminState>) -> Element {
    let users = state.read().visible_users();

    rsx! {
        DataTable { class: "user-table",
            DataTableHeader {
                for col in COLUMNS {
                    DataTableColumn { key: "{col}", "{col}" }
                }
            }
            DataTableBody {
                if users.is_empty() {
                    DataTableEmpty { colspan: COLUMNS.len(), "No users found." }
                }
                for user in users {
                    UserRow { key: "{user.id}", user: user.clone(), state }
                }
            }
        }
    }
}

#[component]
fn UserRow(user: User, state: Signal<AdminState>) -> Element {
    let id = user.id;
    let mut state = state;
    let toast = use_toast();

    // The row can vanish between render and click
    let handle_edit = move |_: MouseEvent| {
        if let Err(e) = state.write().start_edit(id) {
            tracing::warn!(id, error = %e, "edit requested for missing user");
            toast.error(e.to_string(), ToastOptions::new());
        }
    };

    rsx! {
        DataTableRow {
            DataTableCell {
                div { class: "user-name", "{user.full_name}" }
                div { class: "user-sub", "{user.gender}" }
            }
            DataTableCell {
                div { "{user.email}" }
                div { class: "user-sub", "{user.phone_number}" }
            }
            DataTableCell {
                Badge { variant: role_badge_variant(user.role), "{user.role}" }
            }
            DataTableCell { "{format_appointment(&user.appointment_time)}" }
            DataTableCell { "{user.assigned_doctor}" }
            DataTableCell { class: "user-actions",
                Button {
                    variant: ButtonVariant::Link,
                    onclick: handle_edit,
                    "Edit"
                }
                Button {
                    variant: ButtonVariant::Link,
                    class: "user-delete",
                    onclick: move |_| state.write().request_delete(id),
                    "Delete"
                }
            }
        }
    }
}

/// Stacked card list shown instead of the table on narrow screens.
#[component]
pub fn UserCards(state: Signal<AdminState>) -> Element {
    let users = state.read().visible_users();

    rsx! {
        div { class: "user-cards",
            if users.is_empty() {
                p { class: "user-cards-empty", "No users found." }
            }
            for user in users {
                UserCard { key: "{user.id}", user: user.clone(), state }
            }
        }
    }
}

#[component]
fn UserCard(user: User, state: Signal<AdminState>) -> Element {
    let id = user.id;
    let mut state = state;
    let toast = use_toast();

    // The row can vanish between render and click
    let handle_edit = move |_: MouseEvent| {
        if let Err(e) = state.write().start_edit(id) {
            tracing::warn!(id, error = %e, "edit requested for missing user");
            toast.error(e.to_string(), ToastOptions::new());
        }
    };

    rsx! {
        div { class: "user-card",
            div { class: "user-card-head",
                div {
                    div { class: "user-name", "{user.full_name}" }
                    div { class: "user-sub", "{user.email}" }
                }
                Badge { variant: role_badge_variant(user.role), "{user.role}" }
            }
            dl { class: "user-card-details",
                for (term, value) in card_details(&user) {
                    dt { "{term}" }
                    dd { "{value}" }
                }
            }
            div { class: "user-actions",
                Button {
                    variant: ButtonVariant::Link,
                    onclick: handle_edit,
                    "Edit"
                }
                Button {
                    variant: ButtonVariant::Link,
                    class: "user-delete",
                    onclick: move |_| state.write().request_delete(id),
                    "Delete"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_badges_follow_role_colors() {
        assert_eq!(role_badge_variant(Role::Admin), BadgeVariant::Danger);
        assert_eq!(role_badge_variant(Role::Doctor), BadgeVariant::Info);
        assert_eq!(role_badge_variant(Role::User), BadgeVariant::Success);
    }

    #[test]
    fn card_details_include_gender_and_formatted_time() {
        let user = shared_types::seed::initial_users().remove(1);
        let details = card_details(&user);
        let terms: Vec<_> = details.iter().map(|(term, _)| *term).collect();
        assert_eq!(terms, vec!["Gender", "Phone", "Appointment", "Doctor"]);
        assert_eq!(details[0].1, user.gender.to_string());
        assert_eq!(details[2].1, format_appointment(&user.appointment_time));
    }
}
