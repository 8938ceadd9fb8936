use shared_types::{
    seed, AppError, Confirmation, Doctor, SaveOutcome, User, UserDirectory, UserId,
};

/// What the add/edit dialog is showing.
#[derive(Debug, Clone, PartialEq)]
pub enum ModalState {
    Closed,
    /// Blank record numbered with the next free id.
    Adding(User),
    /// Copy of an existing record; the directory row is untouched until save.
    Editing(User),
}

impl ModalState {
    /// Record the dialog opens with, and whether it edits an existing row.
    pub fn seed(&self) -> Option<(User, bool)> {
        match self {
            ModalState::Closed => None,
            ModalState::Adding(user) => Some((user.clone(), false)),
            ModalState::Editing(user) => Some((user.clone(), true)),
        }
    }
}

/// Everything the admin dashboard owns, held in one `Signal` and handed to
/// the table and dialogs explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminState {
    pub directory: UserDirectory,
    pub doctors: Vec<Doctor>,
    pub search: String,
    pub modal: ModalState,
    /// Row waiting on the delete confirmation prompt.
    pub pending_delete: Option<UserId>,
}

impl AdminState {
    pub fn new(users: Vec<User>, doctors: Vec<Doctor>) -> Self {
        Self {
            directory: UserDirectory::new(users),
            doctors,
            search: String::new(),
            modal: ModalState::Closed,
            pending_delete: None,
        }
    }

    /// Fresh state from the static seed data.
    pub fn seeded() -> Self {
        Self::new(seed::initial_users(), seed::doctors())
    }

    /// Rows matching the current search term, in insertion order.
    pub fn visible_users(&self) -> Vec<User> {
        self.directory.search(&self.search)
    }

    pub fn set_search(&mut self, term: String) {
        self.search = term;
    }

    pub fn start_add(&mut self) {
        self.modal = ModalState::Adding(self.directory.draft(&self.doctors));
    }

    pub fn start_edit(&mut self, id: UserId) -> Result<(), AppError> {
        let user = self
            .directory
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;
        self.modal = ModalState::Editing(user);
        Ok(())
    }

    /// Close the dialog and drop whatever was typed into it.
    pub fn cancel(&mut self) {
        self.modal = ModalState::Closed;
    }

    /// Store the dialog's record and close it. On error the dialog stays
    /// open so the user can fix the fields.
    pub fn save(&mut self, user: User) -> Result<SaveOutcome, AppError> {
        let outcome = self.directory.save(user)?;
        self.modal = ModalState::Closed;
        Ok(outcome)
    }

    pub fn request_delete(&mut self, id: UserId) {
        self.pending_delete = Some(id);
    }

    /// Delete `id` after the prompt was confirmed and clear the prompt.
    ///
    /// Takes the id captured when the prompt rendered, so it still deletes
    /// when the prompt was closed before the confirm handler ran.
    pub fn confirm_delete(&mut self, id: UserId) -> Option<User> {
        self.pending_delete = None;
        self.directory.delete(id, Confirmation::Confirmed)
    }

    /// Close the prompt without deleting anything.
    pub fn dismiss_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Name of the user awaiting delete confirmation, for the prompt text.
    pub fn pending_delete_name(&self) -> Option<&str> {
        self.pending_delete
            .and_then(|id| self.directory.get(id))
            .map(|u| u.full_name.as_str())
    }
}
