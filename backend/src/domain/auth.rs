//! Authentication inputs: login credentials and registration forms.
//!
//! Constructors validate raw strings before the Auth Flow talks to a store.

use std::fmt;

use zeroize::Zeroizing;

use super::{DisplayName, Email, Password, UserValidationError};

/// Error returned when login payload values are missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Email or password was empty.
    MissingField,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField => write!(f, "Email or Password is required"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Login credentials.
///
/// ## Invariants
/// - Neither field is empty. No format check is applied; the email is looked
///   up verbatim and the password compared verbatim.
///
/// # Examples
/// ```
/// use mindleak::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts("user@mail.com", "1234").unwrap();
/// assert_eq!(creds.email(), "user@mail.com");
/// assert_eq!(creds.password(), "1234");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, LoginValidationError> {
        if email.is_empty() || password.is_empty() {
            return Err(LoginValidationError::MissingField);
        }
        Ok(Self {
            email: email.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Validated registration form.
///
/// Fields are checked in order email, password, name; the first failure is
/// returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    email: Email,
    password: Password,
    name: DisplayName,
}

impl Registration {
    /// Validate raw registration inputs.
    pub fn try_from_parts(
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<Self, UserValidationError> {
        let email = Email::new(email)?;
        let password = Password::new(password)?;
        let name = DisplayName::new(name)?;
        Ok(Self {
            email,
            password,
            name,
        })
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn name(&self) -> &DisplayName {
        &self.name
    }
}
