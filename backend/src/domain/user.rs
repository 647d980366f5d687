//! User data model and the validated values a registration is built from.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use uuid::Uuid;
use zeroize::Zeroizing;

/// Avatar assigned to every newly registered user.
pub const DEFAULT_AVATAR_URL: &str = "https://sun9-88.userapi.com/s/v1/ig2/P_e5HW2lWX3ZxayBg73NnzbHzyhxFCXtBseRjSrN_NbemNC78OpkeYfJeXcTOXqyR8NhSwizZKqJEq_R8PhQo607.jpg?quality=95&as=32x40,48x60,72x90,108x135,160x200,240x300,360x450,480x600,540x675,640x800,720x900,1080x1350,1280x1600,1440x1800,1620x2025&from=bu&cs=1620x0";

/// Maximum allowed length for an email address.
pub const EMAIL_MAX: usize = 254;
/// Minimum allowed length for a password.
pub const PASSWORD_MIN: usize = 4;
/// Maximum allowed length for a password.
pub const PASSWORD_MAX: usize = 64;
/// Minimum allowed length for a display name.
pub const DISPLAY_NAME_MIN: usize = 4;
/// Maximum allowed length for a display name.
pub const DISPLAY_NAME_MAX: usize = 32;

/// Validation errors raised while building registration values.
///
/// The `Display` strings are the messages returned to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// One of email, password, or name was empty.
    MissingField,
    EmailTooLong { max: usize },
    InvalidEmail,
    PasswordTooShort { min: usize },
    PasswordTooLong { max: usize },
    InvalidPassword,
    InvalidDisplayName,
    DisplayNameTooShort { min: usize },
    DisplayNameTooLong { max: usize },
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField => write!(f, "email, password and name are required"),
            Self::EmailTooLong { .. } => write!(f, "email is too long"),
            Self::InvalidEmail => write!(f, "email is invalid"),
            Self::PasswordTooShort { .. } => write!(f, "password is too short"),
            Self::PasswordTooLong { .. } => write!(f, "password is too long"),
            Self::InvalidPassword => write!(f, "password is invalid"),
            Self::InvalidDisplayName => write!(f, "name is invalid"),
            Self::DisplayNameTooShort { .. } => write!(f, "name is too short"),
            Self::DisplayNameTooLong { .. } => write!(f, "name is too long"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Stable user identifier.
///
/// The nil UUID is reserved for "no user": guest sessions are bound to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(Uuid);

impl UserId {
    /// Generate a fresh identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// The identifier bound to guest sessions.
    pub const fn anonymous() -> Self {
        Self(Uuid::nil())
    }

    /// Whether this is the guest identifier.
    pub fn is_anonymous(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for UserId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl FromStr for UserId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Length is enforced separately; this only checks the local@domain.tld shape.
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Validated email address. Comparison is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Validate and construct an [`Email`].
    pub fn new(email: impl Into<String>) -> Result<Self, UserValidationError> {
        let email = email.into();
        if email.is_empty() {
            return Err(UserValidationError::MissingField);
        }
        if email.chars().count() > EMAIL_MAX {
            return Err(UserValidationError::EmailTooLong { max: EMAIL_MAX });
        }
        if !email_regex().is_match(&email) {
            return Err(UserValidationError::InvalidEmail);
        }
        Ok(Self(email))
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Validated password. Stored as plaintext and zeroised on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    /// Validate and construct a [`Password`].
    pub fn new(password: impl Into<String>) -> Result<Self, UserValidationError> {
        let password = Zeroizing::new(password.into());
        if password.is_empty() {
            return Err(UserValidationError::MissingField);
        }
        let length = password.chars().count();
        if length < PASSWORD_MIN {
            return Err(UserValidationError::PasswordTooShort { min: PASSWORD_MIN });
        }
        if length > PASSWORD_MAX {
            return Err(UserValidationError::PasswordTooLong { max: PASSWORD_MAX });
        }
        if password.chars().any(char::is_whitespace) {
            return Err(UserValidationError::InvalidPassword);
        }
        Ok(Self(password))
    }

    /// Verbatim comparison against a candidate password.
    pub fn matches(&self, candidate: &str) -> bool {
        self.0.as_str() == candidate
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(**redacted**)")
    }
}

/// Human readable display name: no whitespace, bounded length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName(String);

impl DisplayName {
    /// Validate and construct a [`DisplayName`].
    pub fn new(name: impl Into<String>) -> Result<Self, UserValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(UserValidationError::MissingField);
        }
        if name.chars().any(char::is_whitespace) {
            return Err(UserValidationError::InvalidDisplayName);
        }
        let length = name.chars().count();
        if length < DISPLAY_NAME_MIN {
            return Err(UserValidationError::DisplayNameTooShort {
                min: DISPLAY_NAME_MIN,
            });
        }
        if length > DISPLAY_NAME_MAX {
            return Err(UserValidationError::DisplayNameTooLong {
                max: DISPLAY_NAME_MAX,
            });
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Registered user.
///
/// ## Invariants
/// - `email` is unique across live users (enforced by the identity store).
/// - Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    email: Email,
    password: Password,
    name: DisplayName,
    avatar: String,
}

impl User {
    /// Build a user with the default avatar.
    pub fn new(id: UserId, email: Email, password: Password, name: DisplayName) -> Self {
        Self {
            id,
            email,
            password,
            name,
            avatar: DEFAULT_AVATAR_URL.to_owned(),
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn name(&self) -> &DisplayName {
        &self.name
    }

    pub fn avatar(&self) -> &str {
        self.avatar.as_str()
    }

    /// Verbatim password check.
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password.matches(candidate)
    }
}
