use crate::error::AppError;
use crate::models::{Doctor, User, UserId};

/// Answer to the "are you sure?" prompt in front of a delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

/// What [`UserDirectory::save`] did with the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created(UserId),
    Updated(UserId),
}

/// In-memory list of portal users, kept in insertion order.
///
/// Nothing here is persisted; a fresh directory is built from the seed
/// data whenever the admin dashboard mounts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn all(&self) -> &[User] {
        &self.users
    }

    /// `max(id) + 1`, or 1 for an empty directory.
    ///
    /// Derived from the current rows, so deleting the highest id frees it
    /// for the next insert.
    pub fn next_id(&self) -> UserId {
        self.users.iter().map(|u| u.id).max().map_or(1, |max| max + 1)
    }

    /// Users whose name, email or role contains `term`, ignoring case.
    /// An empty term returns every user.
    pub fn search(&self, term: &str) -> Vec<User> {
        let needle = term.to_lowercase();
        if needle.is_empty() {
            return self.users.clone();
        }
        self.users
            .iter()
            .filter(|u| u.matches(&needle))
            .cloned()
            .collect()
    }

    /// Default record for the add form, numbered with the next free id.
    pub fn draft(&self, doctors: &[Doctor]) -> User {
        User::new_draft(self.next_id(), doctors)
    }

    /// Replace the user with the same id, or append a new one.
    ///
    /// New users always get [`next_id`](Self::next_id), whatever id the
    /// record arrived with. Email and phone are not checked for duplicates.
    pub fn save(&mut self, user: User) -> Result<SaveOutcome, AppError> {
        user.check_required()?;

        if let Some(existing) = self.users.iter_mut().find(|u| u.id == user.id) {
            let id = user.id;
            *existing = user;
            tracing::debug!(id, "user updated");
            return Ok(SaveOutcome::Updated(id));
        }

        let id = self.next_id();
        self.users.push(User { id, ..user });
        tracing::debug!(id, "user created");
        Ok(SaveOutcome::Created(id))
    }

    /// Remove a user once the caller has confirmed.
    ///
    /// Returns the removed record; declined prompts and unknown ids leave
    /// the directory untouched and return `None`.
    pub fn delete(&mut self, id: UserId, confirmation: Confirmation) -> Option<User> {
        if confirmation == Confirmation::Declined {
            return None;
        }
        let index = self.users.iter().position(|u| u.id == id)?;
        tracing::debug!(id, "user deleted");
        Some(self.users.remove(index))
    }
}
