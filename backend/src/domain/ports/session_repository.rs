//! Port abstraction for the session store.

use crate::domain::{Session, SessionId, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by session store adapters.
    pub enum SessionStoreError {
        /// The identifier does not name a live session.
        NotFound as NotFound => "session not found",
    }
}

/// Session store: maps session identifiers to bound user identifiers.
#[cfg_attr(test, mockall::automock)]
pub trait SessionRepository: Send + Sync {
    /// Create a guest session under a fresh identifier. Never fails.
    fn create_session(&self) -> Session;

    /// Fetch a live session.
    fn get_session_by_id(&self, id: &SessionId) -> Result<Session, SessionStoreError>;

    /// Rebind an existing session. Never creates one.
    fn set_session_user_id(
        &self,
        id: &SessionId,
        user_id: UserId,
    ) -> Result<Session, SessionStoreError>;

    /// Remove a session.
    fn delete_session_by_id(&self, id: &SessionId) -> Result<(), SessionStoreError>;
}
