use shared_types::{seed, User, UserDirectory, UserId};

/// Directory holding the standard seed users.
pub fn seeded_directory() -> UserDirectory {
    UserDirectory::new(seed::initial_users())
}

/// Fully filled record that passes the required-field check.
pub fn valid_user(id: UserId, name: &str, email: &str) -> User {
    User {
        full_name: name.to_string(),
        email: email.to_string(),
        phone_number: "555-0100".to_string(),
        address: "1 Test Way".to_string(),
        ..User::new_draft(id, &seed::doctors())
    }
}

/// Ids in directory order.
pub fn ids(directory: &UserDirectory) -> Vec<UserId> {
    directory.all().iter().map(|u| u.id).collect()
}
