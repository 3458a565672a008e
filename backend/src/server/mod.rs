//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

use actix_cors::Cors;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use roster_backend::Trace;
#[cfg(debug_assertions)]
use roster_backend::doc::ApiDoc;
use roster_backend::domain::UserFields;
use roster_backend::inbound::http::health::HealthState;
use roster_backend::inbound::http::routes::configure;
use roster_backend::inbound::http::state::HttpState;
use state_builders::{build_http_state, build_repository};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Browser clients may call from any origin unless one is configured.
fn build_cors(origin: Option<&str>) -> Cors {
    let cors = match origin {
        Some(origin) => Cors::default().allowed_origin(origin),
        None => Cors::default().allow_any_origin(),
    };
    cors.allowed_methods(["GET", "POST", "PUT", "DELETE"])
        .allow_any_header()
        .expose_headers([roster_backend::domain::TRACE_ID_HEADER])
        .max_age(3600)
}

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    cors_origin: Option<String>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        cors_origin,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(build_cors(cors_origin.as_deref()))
        .wrap(Trace);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app.configure(configure)
}

/// Open the user store and construct the Actix server.
///
/// `seed` pre-populates the in-memory store and is ignored for the file
/// store.
///
/// # Errors
///
/// Returns [`std::io::Error`] when the store cannot be opened or the socket
/// cannot be bound.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
    seed: Vec<UserFields>,
) -> std::io::Result<Server> {
    let repository = build_repository(&config, seed).map_err(std::io::Error::other)?;
    let http_state = web::Data::new(build_http_state(repository));
    let server_health_state = health_state.clone();
    let ServerConfig {
        bind_addr,
        store_path: _,
        cors_origin,
    } = config;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            cors_origin: cors_origin.clone(),
        })
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
