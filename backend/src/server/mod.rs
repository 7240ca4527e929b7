//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

use state_builders::{AppState, build_app_state};

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};

use tracking_backend::inbound::http;
use tracking_backend::inbound::http::health::HealthState;
use tracking_backend::{Correlation, RequestLog};
#[cfg(debug_assertions)]
use tracking_backend::doc::ApiDoc;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let AppState {
        http: http_state,
        api_metrics,
        clock,
    } = build_app_state(&config);
    let http_state = web::Data::new(http_state);
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        let app = App::new()
            .app_data(server_health_state.clone())
            .app_data(http_state.clone())
            .wrap(RequestLog::new(api_metrics.clone(), clock.clone()))
            .wrap(Correlation)
            .configure(http::configure);

        #[cfg(debug_assertions)]
        let app = app.service(
            SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );

        app
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
