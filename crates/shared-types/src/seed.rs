//! Static demo data the portal starts from on every load.

use crate::models::{Doctor, Gender, Role, User};

fn doctor(id: u32, name: &str, department: &str, specialization: &str) -> Doctor {
    Doctor {
        id,
        name: name.to_string(),
        department: department.to_string(),
        specialization: specialization.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn user(
    id: u32,
    full_name: &str,
    email: &str,
    phone_number: &str,
    role: Role,
    gender: Gender,
    address: &str,
    appointment_time: &str,
    assigned_doctor: &str,
) -> User {
    User {
        id,
        full_name: full_name.to_string(),
        email: email.to_string(),
        phone_number: phone_number.to_string(),
        role,
        gender,
        address: address.to_string(),
        appointment_time: appointment_time.to_string(),
        assigned_doctor: assigned_doctor.to_string(),
    }
}

/// Physicians offered by the assigned-doctor select. Never edited.
pub fn doctors() -> Vec<Doctor> {
    vec![
        doctor(1, "Dr. Emily Carter", "Cardiology", "Interventional Cardiology"),
        doctor(2, "Dr. Rajesh Patel", "Neurology", "Epilepsy & Seizure Disorders"),
        doctor(3, "Dr. Sofia Alvarez", "Pediatrics", "Neonatal Care"),
        doctor(4, "Dr. Marcus Lee", "Orthopedics", "Sports Medicine"),
        doctor(5, "Dr. Hannah Kim", "Oncology", "Medical Oncology"),
    ]
}

/// Users the admin table shows before any edits.
pub fn initial_users() -> Vec<User> {
    vec![
        user(
            1,
            "Alice Johnson",
            "alice.johnson@example.com",
            "(555) 201-3344",
            Role::Admin,
            Gender::Female,
            "12 Maple Ave, Wellness City",
            "2024-08-01 09:00",
            "Dr. Emily Carter",
        ),
        user(
            2,
            "Brian Smith",
            "brian.smith@example.com",
            "(555) 318-7720",
            Role::Doctor,
            Gender::Male,
            "48 Oak Street, Wellness City",
            "2024-08-02 10:30",
            "Dr. Rajesh Patel",
        ),
        user(
            3,
            "Chloe Nguyen",
            "chloe.nguyen@example.com",
            "(555) 442-1098",
            Role::User,
            Gender::Female,
            "7 Birch Lane, Healthville",
            "2024-08-03 14:15",
            "Dr. Sofia Alvarez",
        ),
        user(
            4,
            "Daniel Okafor",
            "daniel.okafor@example.com",
            "(555) 563-2281",
            Role::User,
            Gender::Male,
            "230 Pine Road, Healthville",
            "2024-08-05 11:45",
            "Dr. Marcus Lee",
        ),
        user(
            5,
            "Riley Morgan",
            "riley.morgan@example.com",
            "(555) 674-9035",
            Role::User,
            Gender::Other,
            "91 Cedar Court, Wellness City",
            "2024-08-06 16:00",
            "Dr. Hannah Kim",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_user_ids_are_unique() {
        let users = initial_users();
        let ids: HashSet<_> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids.len(), users.len());
    }

    #[test]
    fn seed_users_pass_validation() {
        use validator::Validate;
        for u in initial_users() {
            assert!(u.validate().is_ok(), "seed user {} is invalid", u.id);
        }
    }

    #[test]
    fn seed_assignments_name_seed_doctors() {
        let names: HashSet<_> = doctors().into_iter().map(|d| d.name).collect();
        for u in initial_users() {
            assert!(names.contains(&u.assigned_doctor));
        }
    }
}
