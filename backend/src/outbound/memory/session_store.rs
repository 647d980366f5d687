//! In-memory session store.

use parking_lot::RwLock;
use tracing::debug;

use crate::domain::ports::{SessionRepository, SessionStoreError};
use crate::domain::{Session, SessionId, UserId};

use super::arena::Arena;

/// `RwLock`-guarded map from session identifier to bound user.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<Arena<SessionId, Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionRepository for InMemorySessionStore {
    fn create_session(&self) -> Session {
        let mut sessions = self.sessions.write();
        let mut id = SessionId::random();
        while sessions.get(&id).is_some() {
            id = SessionId::random();
        }
        let session = Session::anonymous(id);
        sessions.insert(id, session);
        debug!(session_id = %id, live = sessions.len(), "session stored");
        session
    }

    fn get_session_by_id(&self, id: &SessionId) -> Result<Session, SessionStoreError> {
        self.sessions
            .read()
            .get(id)
            .copied()
            .ok_or_else(SessionStoreError::not_found)
    }

    fn set_session_user_id(
        &self,
        id: &SessionId,
        user_id: UserId,
    ) -> Result<Session, SessionStoreError> {
        let mut sessions = self.sessions.write();
        let session = sessions.get_mut(id).ok_or_else(SessionStoreError::not_found)?;
        *session = Session::new(*id, user_id);
        Ok(*session)
    }

    fn delete_session_by_id(&self, id: &SessionId) -> Result<(), SessionStoreError> {
        self.sessions
            .write()
            .remove(id)
            .map(|_| ())
            .ok_or_else(SessionStoreError::not_found)
    }
}
