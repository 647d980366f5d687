//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain services and remain testable without real I/O. Stores
//! are built once and shared by every worker.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};

use crate::domain::ports::{ArticleRepository, SessionRepository, UserRepository};
use crate::domain::{AuthService, FeedService};
use crate::outbound::memory::{InMemoryArticleStore, InMemorySessionStore, InMemoryUserStore};

use super::session_config::CookieSettings;

/// Parameter object bundling the three store ports.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub users: Arc<dyn UserRepository>,
    pub sessions: Arc<dyn SessionRepository>,
    pub articles: Arc<dyn ArticleRepository>,
}

impl HttpStatePorts {
    /// Fresh, empty in-memory stores with article timestamps from `clock`.
    pub fn in_memory(clock: Arc<dyn Clock>) -> Self {
        Self {
            users: Arc::new(InMemoryUserStore::new()),
            sessions: Arc::new(InMemorySessionStore::new()),
            articles: Arc::new(InMemoryArticleStore::new(clock)),
        }
    }
}

impl Default for HttpStatePorts {
    fn default() -> Self {
        Self::in_memory(Arc::new(DefaultClock))
    }
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub auth: AuthService,
    pub feed: Arc<FeedService>,
    pub cookies: CookieSettings,
}

impl HttpState {
    /// Construct state from a ports bundle.
    ///
    /// # Examples
    /// ```
    /// use mindleak::inbound::http::session_config::CookieSettings;
    /// use mindleak::inbound::http::state::{HttpState, HttpStatePorts};
    ///
    /// let state = HttpState::new(HttpStatePorts::default(), CookieSettings::default());
    /// assert!(!state.cookies.secure);
    /// ```
    pub fn new(ports: HttpStatePorts, cookies: CookieSettings) -> Self {
        let HttpStatePorts {
            users,
            sessions,
            articles,
        } = ports;
        Self {
            auth: AuthService::new(users, sessions),
            feed: Arc::new(FeedService::new(articles)),
            cookies,
        }
    }
}
