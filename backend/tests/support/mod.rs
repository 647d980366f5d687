//! Shared helpers for HTTP integration suites.

use actix_web::body::MessageBody;
use actix_web::cookie::Cookie;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use mindleak::inbound::http::app::{AppDependencies, build_app};
use mindleak::inbound::http::health::HealthState;
use mindleak::inbound::http::session::SESSION_COOKIE_NAME;
use mindleak::inbound::http::session_config::CookieSettings;
use mindleak::inbound::http::state::{HttpState, HttpStatePorts};

/// The full application over the given ports.
pub fn app_with(
    ports: HttpStatePorts,
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
        http_state: web::Data::new(HttpState::new(ports, CookieSettings::default())),
    })
}

/// The `session_id` cookie set by a response, if any.
pub fn session_cookie<B>(res: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE_NAME)
        .map(Cookie::into_owned)
}
