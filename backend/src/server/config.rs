//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use mindleak::inbound::http::session_config::{
    BuildMode, ConfigError, CookieSettings, cookie_settings_from_env,
};
use mockable::Env;
use tracing::warn;

const BIND_ADDR_ENV: &str = "MINDLEAK_BIND_ADDR";
const BIND_ADDR_EXPECTED: &str = "a socket address such as 0.0.0.0:8090";
/// Listener address used when `MINDLEAK_BIND_ADDR` is unset.
pub const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::new(std::net::IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED), 8090);

/// Settings for creating the HTTP server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) cookies: CookieSettings,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr, cookies: CookieSettings) -> Self {
        Self { bind_addr, cookies }
    }

    /// Read the listener address and cookie settings from the environment.
    ///
    /// Debug builds replace invalid values with defaults and log a warning;
    /// release builds reject them.
    pub fn from_env<E: Env>(env: &E, mode: BuildMode) -> Result<Self, ConfigError> {
        let bind_addr = match env.string(BIND_ADDR_ENV) {
            None => DEFAULT_BIND_ADDR,
            Some(value) => match value.trim().parse::<SocketAddr>() {
                Ok(addr) => addr,
                Err(error) if mode == BuildMode::Debug => {
                    warn!(value = %value, %error, "invalid MINDLEAK_BIND_ADDR; using default");
                    DEFAULT_BIND_ADDR
                }
                Err(_) => {
                    return Err(ConfigError::InvalidEnv {
                        name: BIND_ADDR_ENV,
                        value,
                        expected: BIND_ADDR_EXPECTED,
                    });
                }
            },
        };
        let cookies = cookie_settings_from_env(env, mode)?;
        Ok(Self::new(bind_addr, cookies))
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
