//! Auth Flow: stitches a request's session cookie to a session and a user.
//!
//! The service never holds more than one store lock at a time. Creating a user
//! and binding a session to it are separate critical sections, so a session
//! removed in between leaves the user registered and the binding failed.

use std::sync::Arc;

use tracing::{debug, info};

use super::ports::{SessionRepository, UserRepository};
use super::{Error, LoginCredentials, Registration, Session, SessionId, User, UserId};

/// Message returned for every `/me` failure so callers cannot tell the
/// causes apart.
pub const UNAUTHORIZED_MESSAGE: &str = "unauthorized";
/// Message returned when a request carries no session cookie.
pub const COOKIE_NOT_FOUND_MESSAGE: &str = "cookie not found";
/// Message returned when the session cookie is not a session identifier.
pub const INVALID_SESSION_ID_MESSAGE: &str = "session id is invalid";

/// Outcome of resolving a request's session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionResolution {
    /// The cookie named a live session.
    Existing(Session),
    /// No usable cookie; a guest session was created and must be sent back.
    Created(Session),
}

impl SessionResolution {
    pub fn session(&self) -> Session {
        match self {
            Self::Existing(session) | Self::Created(session) => *session,
        }
    }

    /// Whether the caller must set the session cookie on the response.
    pub fn is_new(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

/// A user together with the fresh session bound to them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authenticated {
    pub user: User,
    pub session: Session,
}

/// Orchestrates cookie inspection, credential checks, and session binding.
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    sessions: Arc<dyn SessionRepository>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, sessions: Arc<dyn SessionRepository>) -> Self {
        Self { users, sessions }
    }

    /// Resolve the cookie to a live session or create a guest session.
    ///
    /// A missing cookie, a malformed identifier, and an unknown session are
    /// treated alike.
    pub fn resolve_session(&self, cookie: Option<&str>) -> SessionResolution {
        let existing = cookie
            .and_then(|raw| raw.parse::<SessionId>().ok())
            .and_then(|id| self.sessions.get_session_by_id(&id).ok());
        match existing {
            Some(session) => SessionResolution::Existing(session),
            None => {
                let session = self.sessions.create_session();
                debug!(session_id = %session.id(), "created guest session");
                SessionResolution::Created(session)
            }
        }
    }

    /// Register a user and bind a fresh session to them.
    ///
    /// # Errors
    /// [`ErrorCode::Conflict`](super::ErrorCode::Conflict) when the email is
    /// taken; [`ErrorCode::InvalidRequest`](super::ErrorCode::InvalidRequest)
    /// when the new session vanished before it could be bound.
    pub fn register(&self, form: &Registration) -> Result<Authenticated, Error> {
        let user = self
            .users
            .create_user(form.email(), form.password(), form.name())?;
        let session = self.open_session_for(user.id())?;
        info!(user_id = %user.id(), session_id = %session.id(), "user registered");
        Ok(Authenticated { user, session })
    }

    /// Check credentials and bind a fresh session to the user.
    ///
    /// # Errors
    /// [`ErrorCode::NotFound`](super::ErrorCode::NotFound) for an unknown
    /// email, [`ErrorCode::Unauthorized`](super::ErrorCode::Unauthorized) for
    /// a password mismatch.
    pub fn login(&self, credentials: &LoginCredentials) -> Result<Authenticated, Error> {
        let user = self.users.get_user_by_email(credentials.email())?;
        if !user.password_matches(credentials.password()) {
            debug!(user_id = %user.id(), "password mismatch");
            return Err(Error::unauthorized("invalid password"));
        }
        let session = self.open_session_for(user.id())?;
        info!(user_id = %user.id(), session_id = %session.id(), "user logged in");
        Ok(Authenticated { user, session })
    }

    /// Delete the session named by the cookie.
    ///
    /// # Errors
    /// All failures are [`ErrorCode::InvalidRequest`](super::ErrorCode::InvalidRequest):
    /// no cookie, a malformed identifier, or a session that is not live.
    pub fn logout(&self, cookie: Option<&str>) -> Result<SessionId, Error> {
        let raw = cookie.ok_or_else(|| Error::invalid_request(COOKIE_NOT_FOUND_MESSAGE))?;
        let id = raw
            .parse::<SessionId>()
            .map_err(|_| Error::invalid_request(INVALID_SESSION_ID_MESSAGE))?;
        self.sessions
            .delete_session_by_id(&id)
            .map_err(|err| Error::invalid_request(err.to_string()))?;
        info!(session_id = %id, "session closed");
        Ok(id)
    }

    /// The user bound to the cookie's session.
    ///
    /// # Errors
    /// [`ErrorCode::Unauthorized`](super::ErrorCode::Unauthorized) with the
    /// same message whether the cookie is missing or malformed, the session is
    /// unknown, or the session's user does not exist.
    pub fn current_user(&self, cookie: Option<&str>) -> Result<User, Error> {
        let Some(raw) = cookie else {
            debug!("no session cookie");
            return Err(Error::unauthorized(UNAUTHORIZED_MESSAGE));
        };
        let Ok(id) = raw.parse::<SessionId>() else {
            debug!("malformed session cookie");
            return Err(Error::unauthorized(UNAUTHORIZED_MESSAGE));
        };
        let session = self.sessions.get_session_by_id(&id).map_err(|err| {
            debug!(session_id = %id, error = %err, "unknown session");
            Error::unauthorized(UNAUTHORIZED_MESSAGE)
        })?;
        self.users
            .get_user_by_id(&session.user_id())
            .map_err(|err| {
                debug!(session_id = %id, error = %err, "session not bound to a live user");
                Error::unauthorized(UNAUTHORIZED_MESSAGE)
            })
    }

    fn open_session_for(&self, user_id: UserId) -> Result<Session, Error> {
        let session = self.sessions.create_session();
        self.sessions
            .set_session_user_id(&session.id(), user_id)
            .map_err(|err| Error::invalid_request(err.to_string()))
    }
}

#[cfg(test)]
mod tests;
