//! Application assembly: routes, extractor configuration, and middleware.
//!
//! Lives in the library so integration tests drive exactly the app the
//! binary serves.

use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, Route, web};

use crate::Trace;

use super::auth::{login, logout, me, register};
use super::error::{json_error_handler, method_not_allowed};
use super::feed::feed;
use super::health::{HealthState, live, ready};
use super::state::HttpState;

/// Shared state handed to every worker's app instance.
#[derive(Clone)]
pub struct AppDependencies {
    pub health_state: web::Data<HealthState>,
    pub http_state: web::Data<HttpState>,
}

/// Browsers on any origin may call the API with credentials; the origin is
/// echoed back rather than answered with `*`.
fn permissive_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
}

/// A path served by one method; every other method gets 405.
fn single_method(path: &str, route: Route) -> actix_web::Resource {
    web::resource(path)
        .route(route)
        .default_service(web::to(method_not_allowed))
}

/// Build the application.
///
/// # Examples
/// ```
/// use actix_web::web;
/// use mindleak::inbound::http::app::{AppDependencies, build_app};
/// use mindleak::inbound::http::health::HealthState;
/// use mindleak::inbound::http::session_config::CookieSettings;
/// use mindleak::inbound::http::state::{HttpState, HttpStatePorts};
///
/// let deps = AppDependencies {
///     health_state: web::Data::new(HealthState::new()),
///     http_state: web::Data::new(HttpState::new(
///         HttpStatePorts::default(),
///         CookieSettings::default(),
///     )),
/// };
/// let _app = build_app(deps);
/// ```
pub fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let json_config = web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(json_error_handler);

    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config)
        .wrap(permissive_cors())
        .wrap(Trace)
        .service(single_method("/feed", web::get().to(feed)))
        .service(single_method("/registration", web::post().to(register)))
        .service(single_method("/login", web::post().to(login)))
        .service(single_method("/logout", web::post().to(logout)))
        .service(single_method("/me", web::get().to(me)))
        .service(single_method("/health/ready", web::get().to(ready)))
        .service(single_method("/health/live", web::get().to(live)))
}
