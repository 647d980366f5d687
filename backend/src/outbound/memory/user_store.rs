//! In-memory identity store.

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::debug;

use crate::domain::ports::{UserRepository, UserStoreError};
use crate::domain::{DisplayName, Email, Password, User, UserId};

use super::arena::Arena;

#[derive(Debug, Default)]
struct UserState {
    users: Arena<UserId, User>,
    by_email: HashMap<String, UserId>,
}

/// `RwLock`-guarded identity store with a unique email index.
///
/// Reads take the shared lock and clone records out; writes take the
/// exclusive lock, so the email uniqueness check and the insert are atomic.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    state: RwLock<UserState>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryUserStore {
    fn create_user(
        &self,
        email: &Email,
        password: &Password,
        name: &DisplayName,
    ) -> Result<User, UserStoreError> {
        let mut state = self.state.write();
        if state.by_email.contains_key(email.as_ref()) {
            return Err(UserStoreError::already_registered());
        }

        let mut id = UserId::random();
        while state.users.get(&id).is_some() {
            id = UserId::random();
        }
        let user = User::new(id, email.clone(), password.clone(), name.clone());
        state.users.insert(id, user.clone());
        state.by_email.insert(email.as_ref().to_owned(), id);
        debug!(user_id = %id, "user stored");
        Ok(user)
    }

    fn get_user_by_id(&self, id: &UserId) -> Result<User, UserStoreError> {
        self.state
            .read()
            .users
            .get(id)
            .cloned()
            .ok_or_else(UserStoreError::not_found)
    }

    fn get_user_by_email(&self, email: &str) -> Result<User, UserStoreError> {
        let state = self.state.read();
        state
            .by_email
            .get(email)
            .and_then(|id| state.users.get(id))
            .cloned()
            .ok_or_else(UserStoreError::not_found)
    }

    fn get_all_users(&self) -> Vec<User> {
        self.state.read().users.values().cloned().collect()
    }

    fn delete_user(&self, id: &UserId) -> Result<(), UserStoreError> {
        let mut state = self.state.write();
        let removed = state.users.remove(id).ok_or_else(UserStoreError::not_found)?;
        state.by_email.remove(removed.email().as_ref());
        debug!(user_id = %id, "user removed");
        Ok(())
    }
}
