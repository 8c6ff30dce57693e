//! HTTP JSON API.
//!
//! | Route                       | Handler                    |
//! |-----------------------------|----------------------------|
//! | `POST /api/generate`        | [`handlers::generate`]     |
//! | `GET  /api/generate/status` | [`handlers::get_status`]   |
//! | `POST /api/generate/status` | [`handlers::post_status`]  |
//! | `POST /api/download`        | [`handlers::download`]     |
//! | `GET  /health`              | [`handlers::health`]       |
//!
//! Handlers expect a `web::Data<Orchestrator>` in the app data.
mod error;
pub mod handlers;

use actix_web::{HttpRequest, error::JsonPayloadError, web};

pub use error::ApiError;

/// Request bodies carry whole generation results, base64 document included.
pub const JSON_LIMIT: usize = 16 * 1024 * 1024;

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected request body: {err}");
    ApiError::BadRequest(format!("Invalid JSON body: {err}")).into()
}

/// Configure API routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(JSON_LIMIT)
            .error_handler(json_error),
    );
    cfg.service(
        web::scope("/api")
            .route("/generate", web::post().to(handlers::generate))
            .route("/generate/status", web::get().to(handlers::get_status))
            .route("/generate/status", web::post().to(handlers::post_status))
            .route("/download", web::post().to(handlers::download)),
    );
    cfg.route("/health", web::get().to(handlers::health));
}
