//! Session cookie carrier.
//!
//! The `session_id` cookie holds the bare session identifier. It is neither
//! signed nor encrypted: whoever presents a live identifier holds the session.

use actix_web::cookie::Cookie;
use actix_web::cookie::time::OffsetDateTime;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::{Ready, ready};

use crate::domain::SessionId;

use super::session_config::CookieSettings;

/// Name of the session cookie.
pub const SESSION_COOKIE_NAME: &str = "session_id";

/// Raw `session_id` cookie value presented with a request, if any.
///
/// Extraction never fails; interpreting the value is the Auth Flow's job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionCookie(Option<String>);

impl SessionCookie {
    pub fn value(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }
}

impl FromRequest for SessionCookie {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let value = req
            .cookie(SESSION_COOKIE_NAME)
            .map(|cookie| cookie.value().to_owned());
        ready(Ok(Self(value)))
    }
}

/// Cookie carrying `session_id` back to the client.
pub fn issue_cookie(settings: &CookieSettings, session_id: SessionId) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE_NAME, session_id.to_string())
        .path("/")
        .http_only(true)
        .secure(settings.secure)
        .max_age(settings.ttl)
        .expires(OffsetDateTime::now_utc() + settings.ttl)
        .finish()
}

/// Already-expired cookie that makes the client drop `session_id`.
pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(SESSION_COOKIE_NAME, "")
        .path("/")
        .http_only(true)
        .finish();
    cookie.make_removal();
    cookie
}
