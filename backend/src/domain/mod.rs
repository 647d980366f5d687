//! Domain primitives, store ports, and the services built on them.
//!
//! Purpose: keep the identity, session, and content models transport
//! agnostic. Adapters in `inbound` and `outbound` depend on this module,
//! never the other way round.
//!
//! Public surface:
//! - Error / ErrorCode: failure payload and its stable category.
//! - User, Session, Article: entities copied out of the stores.
//! - AuthService: session resolution, registration, login, logout, `/me`.
//! - FeedService: article listing with one-time demo seeding.

pub mod article;
pub mod auth;
pub mod auth_service;
pub mod error;
pub mod feed;
pub mod ports;
pub mod session;
pub mod trace_id;
pub mod user;

pub use self::article::{Article, ArticleId};
pub use self::auth::{LoginCredentials, LoginValidationError, Registration};
pub use self::auth_service::{AuthService, Authenticated, SessionResolution};
pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::feed::FeedService;
pub use self::session::{Session, SessionId};
pub use self::trace_id::TraceId;
pub use self::user::{DisplayName, Email, Password, User, UserId, UserValidationError};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use mindleak::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::unauthorized("unauthorized"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
