//! HTTP server
//!
//! Route table, CORS posture, and startup. The route configuration is
//! factored out so tests can mount the same app without binding a socket.

pub mod handlers;
pub mod state;

use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer};
use serde_json::json;
use tracing::info;
use tracing_actix_web::TracingLogger;

use crate::config::{RelayConfig, ServerConfig};
use crate::relay::RelayClient;

use state::AppState;

/// Mount the API routes onto an actix app.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                actix_web::error::InternalError::from_response(
                    err,
                    HttpResponse::BadRequest()
                        .json(json!({ "error": "Malformed JSON in request body" })),
                )
                .into()
            }))
            .route("/chat", web::post().to(handlers::chat))
            .route("/ping", web::get().to(handlers::ping))
            .default_service(web::route().to(handlers::api_not_found)),
    );
}

/// Accept any localhost or loopback origin, with or without a port.
fn is_local_origin(origin: &str) -> bool {
    let rest = origin
        .strip_prefix("http://")
        .or_else(|| origin.strip_prefix("https://"));

    let Some(rest) = rest else { return false };

    let host = rest.split(':').next().unwrap_or(rest);
    let port_ok = match rest.split_once(':') {
        Some((_, port)) => !port.is_empty() && port.chars().all(|c| c.is_ascii_digit()),
        None => true,
    };

    port_ok && (host == "localhost" || host == "127.0.0.1")
}

fn cors() -> Cors {
    Cors::default()
        .allowed_origin_fn(|origin, _req_head| {
            origin.to_str().map(is_local_origin).unwrap_or(false)
        })
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
}

/// Build the relay and serve until shutdown.
pub async fn run_server(
    server_config: ServerConfig,
    relay_config: RelayConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let relay = RelayClient::new(relay_config)?;
    let state = web::Data::new(AppState::new(relay));

    let bind_addr = server_config.bind_addr();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(cors())
            .wrap(TracingLogger::default())
            .configure(routes)
    })
    .bind(&bind_addr)?;

    info!("Listening on {}", bind_addr);
    info!("  POST /api/chat - Submit a conversation");
    info!("  GET  /api/ping - Liveness probe");

    server.run().await?;
    Ok(())
}
