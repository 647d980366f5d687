//! Session cookie configuration parsing and validation.
//!
//! This module centralises the environment-driven cookie settings so they are
//! validated consistently and can be tested in isolation.

use actix_web::cookie::time::Duration;
use mockable::Env;
use tracing::warn;

const COOKIE_TTL_ENV: &str = "SESSION_COOKIE_TTL_MINUTES";
const COOKIE_SECURE_ENV: &str = "SESSION_COOKIE_SECURE";
const BOOL_EXPECTED: &str = "1|0|true|false|yes|no|y|n";
const TTL_EXPECTED: &str = "a positive number of minutes";

/// Lifetime of a freshly issued session cookie.
pub const DEFAULT_COOKIE_TTL_MINUTES: i64 = 60;

/// Build mode for configuration validation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    /// Debug builds fall back to defaults and emit warnings for bad values.
    Debug,
    /// Release builds reject invalid values.
    Release,
}

impl BuildMode {
    /// Determine the build mode from `cfg!(debug_assertions)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mindleak::inbound::http::session_config::BuildMode;
    ///
    /// let mode = BuildMode::from_debug_assertions();
    /// if cfg!(debug_assertions) {
    ///     assert_eq!(mode, BuildMode::Debug);
    /// } else {
    ///     assert_eq!(mode, BuildMode::Release);
    /// }
    /// ```
    #[must_use]
    pub fn from_debug_assertions() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }

    pub(crate) fn is_debug(self) -> bool {
        matches!(self, Self::Debug)
    }
}

/// Attributes applied to the `session_id` cookie.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CookieSettings {
    /// `Max-Age` of an issued cookie; `Expires` is now plus this.
    pub ttl: Duration,
    /// Whether cookies are marked `Secure`.
    pub secure: bool,
}

impl Default for CookieSettings {
    fn default() -> Self {
        Self {
            ttl: Duration::minutes(DEFAULT_COOKIE_TTL_MINUTES),
            secure: false,
        }
    }
}

/// Errors raised while validating configuration.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is present but contains an invalid value.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Build cookie settings from environment variables and build mode.
///
/// Unset variables take their defaults in every build mode.
///
/// # Examples
///
/// ```rust
/// use mindleak::inbound::http::session_config::{cookie_settings_from_env, BuildMode};
/// use mockable::MockEnv;
///
/// let mut env = MockEnv::new();
/// env.expect_string().returning(|name| match name {
///     "SESSION_COOKIE_TTL_MINUTES" => Some("15".to_string()),
///     _ => None,
/// });
///
/// let settings = cookie_settings_from_env(&env, BuildMode::Release).expect("valid settings");
/// assert_eq!(settings.ttl.whole_minutes(), 15);
/// assert!(!settings.secure);
/// ```
pub fn cookie_settings_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
) -> Result<CookieSettings, ConfigError> {
    let defaults = CookieSettings::default();
    Ok(CookieSettings {
        ttl: ttl_from_env(env, mode, defaults.ttl)?,
        secure: secure_from_env(env, mode, defaults.secure)?,
    })
}

fn ttl_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
    default: Duration,
) -> Result<Duration, ConfigError> {
    let Some(value) = env.string(COOKIE_TTL_ENV) else {
        return Ok(default);
    };
    match value.trim().parse::<i64>() {
        Ok(minutes) if minutes > 0 => Ok(Duration::minutes(minutes)),
        _ => fallback_or_reject(mode, COOKIE_TTL_ENV, value, TTL_EXPECTED, default),
    }
}

fn secure_from_env<E: Env>(env: &E, mode: BuildMode, default: bool) -> Result<bool, ConfigError> {
    let Some(value) = env.string(COOKIE_SECURE_ENV) else {
        return Ok(default);
    };
    match parse_bool(&value) {
        Some(flag) => Ok(flag),
        None => fallback_or_reject(mode, COOKIE_SECURE_ENV, value, BOOL_EXPECTED, default),
    }
}

/// Debug builds log and use `default`; release builds fail.
pub(crate) fn fallback_or_reject<T>(
    mode: BuildMode,
    name: &'static str,
    value: String,
    expected: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    if mode.is_debug() {
        warn!(variable = name, value = %value, expected, "invalid value; using default");
        Ok(default)
    } else {
        Err(ConfigError::InvalidEnv {
            name,
            value,
            expected,
        })
    }
}

pub(crate) fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" => Some(true),
        "0" | "false" | "no" | "n" => Some(false),
        _ => None,
    }
}
