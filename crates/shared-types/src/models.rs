use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Identifier of a [`User`] row. Unique within one directory.
pub type UserId = u32;

/// Portal role picked on the login form and stored on each user record.
///
/// This is a display and routing preference only. Nothing in the portal
/// checks it before rendering a dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Role {
    Admin,
    Doctor,
    #[default]
    User,
}

/// All roles in the order the login form lists them.
pub const ALL_ROLES: &[Role] = &[Role::User, Role::Doctor, Role::Admin];

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Doctor => "Doctor",
            Role::User => "User",
        }
    }

    /// Parse a select value, defaulting to `User` for unknown input.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "admin" => Role::Admin,
            "doctor" => Role::Doctor,
            _ => Role::User,
        }
    }

    /// Label shown in the login role picker.
    pub fn login_label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Doctor => "Doctor",
            Role::User => "User / Patient",
        }
    }

    /// Route path of the dashboard for this role.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Admin => "/admin",
            Role::Doctor => "/doctor",
            Role::User => "/user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Gender {
    Male,
    Female,
    #[default]
    Other,
}

pub const ALL_GENDERS: &[Gender] = &[Gender::Male, Gender::Female, Gender::Other];

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "male" => Gender::Male,
            "female" => Gender::Female,
            _ => Gender::Other,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only physician record from the seed data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Doctor {
    pub id: u32,
    pub name: String,
    pub department: String,
    pub specialization: String,
}

impl Doctor {
    /// Label used by the assigned-doctor select.
    pub fn option_label(&self) -> String {
        format!("{} - {}", self.name, self.department)
    }
}

/// A portal user managed from the admin dashboard.
///
/// `assigned_doctor` holds a doctor's name, copied rather than referenced,
/// so it can name a doctor that is not in the seed list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct User {
    pub id: UserId,
    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone_number: String,
    pub role: Role,
    pub gender: Gender,
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,
    /// Free text, normally `YYYY-MM-DD HH:MM` or `YYYY-MM-DDTHH:MM`.
    pub appointment_time: String,
    pub assigned_doctor: String,
}

impl User {
    /// Blank record used by the "Add New User" flow.
    pub fn new_draft(id: UserId, doctors: &[Doctor]) -> Self {
        Self {
            id,
            full_name: String::new(),
            email: String::new(),
            phone_number: String::new(),
            role: Role::User,
            gender: Gender::Other,
            address: String::new(),
            appointment_time: String::new(),
            assigned_doctor: doctors.first().map(|d| d.name.clone()).unwrap_or_default(),
        }
    }

    /// Required-field check run before a record enters the directory.
    pub fn check_required(&self) -> Result<(), AppError> {
        Ok(self.validate()?)
    }

    /// Case-insensitive substring match on name, email or role.
    ///
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.full_name.to_lowercase().contains(needle)
            || self.email.to_lowercase().contains(needle)
            || self.role.as_str().to_lowercase().contains(needle)
    }
}
