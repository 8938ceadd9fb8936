mod user_modal;
mod user_table;

pub use user_modal::UserModal;
pub use user_table::{UserCards, UserTable};

use super::role_page::RolePage;
use crate::state::AdminState;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdPlus;
use dioxus_free_icons::Icon;
use shared_types::{SaveOutcome, User};
use shared_ui::{use_toast, Button, ButtonVariant, ConfirmDialog, Input, SearchBar, ToastOptions};

const PAGE_TITLE: &str = "Admin Dashboard";

/// User management dashboard.
///
/// The directory lives in this component's state and is rebuilt from the
/// seed data every time the route mounts.
#[component]
pub fn AdminDashboard() -> Element {
    let mut state = use_signal(AdminState::seeded);
    let toast = use_toast();

    let handle_save = move |user: User| {
        let result = state.write().save(user);
        match result {
            Ok(SaveOutcome::Created(id)) => {
                tracing::info!(id, "user added");
                toast.success("User added".to_string(), ToastOptions::new());
            }
            Ok(SaveOutcome::Updated(id)) => {
                tracing::info!(id, "user updated");
                toast.success("User updated".to_string(), ToastOptions::new());
            }
            Err(e) => {
                tracing::warn!(error = %e, "user not saved");
                toast.error(e.to_string(), ToastOptions::new());
            }
        }
    };

    let modal = state.read().modal.seed();
    let doctors = state.read().doctors.clone();
    // Captured at render so confirming never depends on the prompt state
    let pending = state.read().pending_delete;
    let prompt_text = match state.read().pending_delete_name() {
        Some(name) => format!(
            "Are you sure you want to delete this user? {name} will be removed from the directory."
        ),
        None => "Are you sure you want to delete this user?".to_string(),
    };

    let handle_delete = move |_: ()| {
        let Some(id) = pending else {
            return;
        };
        let removed = state.write().confirm_delete(id);
        if let Some(user) = removed {
            tracing::info!(id = user.id, "user deleted");
            toast.success("User deleted".to_string(), ToastOptions::new());
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./admin.css") }

        RolePage { title: PAGE_TITLE,
            section { class: "admin-panel",
                h2 { class: "admin-panel-title", "User Management" }

                SearchBar {
                    Input {
                        class: "admin-search",
                        placeholder: "Search by name, email, or role...",
                        value: state.read().search.clone(),
                        on_input: move |e: FormEvent| state.write().set_search(e.value()),
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| state.write().start_add(),
                        Icon::<LdPlus> { icon: LdPlus, width: 18, height: 18 }
                        "Add New User"
                    }
                }

                UserTable { state }
                UserCards { state }
            }
        }

        if let Some((initial, editing)) = modal {
            UserModal {
                initial,
                editing,
                doctors,
                on_save: handle_save,
                on_close: move |_| state.write().cancel(),
            }
        }

        ConfirmDialog {
            open: pending.is_some(),
            title: "Delete User",
            description: prompt_text,
            on_confirm: handle_delete,
            on_cancel: move |_| state.write().dismiss_delete(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_title_names_the_dashboard() {
        assert_eq!(PAGE_TITLE, "Admin Dashboard");
    }
}
