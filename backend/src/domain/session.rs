//! Server-side session records.
//!
//! A session identifier doubles as the bearer credential carried in the
//! `session_id` cookie. It is neither signed nor encrypted: anyone holding the
//! identifier holds the session.

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use super::UserId;

/// Opaque session identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Generate a fresh identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for SessionId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A session and the user it is bound to.
///
/// ## Invariants
/// - `user_id` is [`UserId::anonymous`] until login or registration binds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    id: SessionId,
    user_id: UserId,
}

impl Session {
    pub fn new(id: SessionId, user_id: UserId) -> Self {
        Self { id, user_id }
    }

    /// A guest session bound to no user.
    pub fn anonymous(id: SessionId) -> Self {
        Self::new(id, UserId::anonymous())
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn is_anonymous(&self) -> bool {
        self.user_id.is_anonymous()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn anonymous_session_has_nil_user() {
        let session = Session::anonymous(SessionId::random());
        assert!(session.is_anonymous());
        assert_eq!(session.user_id(), UserId::anonymous());
    }

    #[rstest]
    #[case("not-a-uuid")]
    #[case("")]
    #[case("1234")]
    fn rejects_malformed_identifier(#[case] raw: &str) {
        assert!(raw.parse::<SessionId>().is_err());
    }

    #[rstest]
    fn identifier_round_trips_through_text() {
        let id = SessionId::random();
        let parsed: SessionId = id.to_string().parse().expect("valid uuid");
        assert_eq!(parsed, id);
    }
}
