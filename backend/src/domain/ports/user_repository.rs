//! Port abstraction for the identity store.

use crate::domain::{DisplayName, Email, Password, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by identity store adapters.
    pub enum UserStoreError {
        /// A live user already owns this email.
        AlreadyRegistered as Conflict => "this user is already registered",
        /// No live user matches the lookup.
        NotFound as NotFound => "user not found",
    }
}

/// Identity store: owns user records and enforces email uniqueness.
///
/// Every read returns an independent copy of the stored record.
#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    /// Register a user under a fresh identifier with the default avatar.
    fn create_user(
        &self,
        email: &Email,
        password: &Password,
        name: &DisplayName,
    ) -> Result<User, UserStoreError>;

    /// Fetch a user by identifier.
    fn get_user_by_id(&self, id: &UserId) -> Result<User, UserStoreError>;

    /// Fetch a user by exact, case-sensitive email.
    fn get_user_by_email(&self, email: &str) -> Result<User, UserStoreError>;

    /// Snapshot of every live user.
    fn get_all_users(&self) -> Vec<User>;

    /// Remove a user.
    fn delete_user(&self, id: &UserId) -> Result<(), UserStoreError>;
}
