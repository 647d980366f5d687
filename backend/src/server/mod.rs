//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;
use std::time::Duration;

use actix_web::dev::Server;
use actix_web::{HttpServer, web};
use mockable::DefaultClock;

use mindleak::inbound::http::app::{AppDependencies, build_app};
use mindleak::inbound::http::health::HealthState;
use mindleak::inbound::http::state::{HttpState, HttpStatePorts};
#[cfg(debug_assertions)]
use mindleak::doc::ApiDoc;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Read and write deadline for client connections.
const SOCKET_TIMEOUT: Duration = Duration::from_secs(10);

/// Construct an Actix HTTP server over fresh in-memory stores.
///
/// The stores are built once here and shared by every worker.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let ports = HttpStatePorts::in_memory(Arc::new(DefaultClock));
    let http_state = web::Data::new(HttpState::new(ports, config.cookies));

    let server = HttpServer::new(move || {
        let app = build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        });

        #[cfg(debug_assertions)]
        let app = app.service(
            SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );

        app
    })
    .client_request_timeout(SOCKET_TIMEOUT)
    .client_disconnect_timeout(SOCKET_TIMEOUT)
    .bind(config.bind_addr())?
    .run();

    health_state.mark_ready();
    Ok(server)
}
