//! Test helpers for inbound HTTP components.

use actix_web::App;
use actix_web::body::MessageBody;
use actix_web::cookie::Cookie;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::web;

use super::app::{AppDependencies, build_app};
use super::health::HealthState;
use super::session::SESSION_COOKIE_NAME;
use super::session_config::CookieSettings;
use super::state::{HttpState, HttpStatePorts};

/// Fresh state over empty in-memory stores.
pub fn test_state() -> HttpState {
    HttpState::new(HttpStatePorts::default(), CookieSettings::default())
}

/// The full application over its own isolated stores.
pub fn test_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    test_app_with(test_state())
}

/// The full application over the given state.
pub fn test_app_with(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    build_app(AppDependencies {
        health_state: web::Data::new(HealthState::new()),
        http_state: web::Data::new(state),
    })
}

/// The `session_id` cookie set by a response, if any.
pub fn session_cookie<B>(res: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE_NAME)
        .map(Cookie::into_owned)
}
