use actix_web::error::{PathError, QueryPayloadError};
use actix_web::{web, HttpRequest};

use crate::error::AppError;
use crate::errors::ErrorCode;

pub mod games;
pub mod health;
pub mod scores;
pub mod users;

/// Register every route. Middleware is applied by the caller (`main.rs`
/// or the integration test app builder).
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(path_error))
        .app_data(web::QueryConfig::default().error_handler(query_error));

    // Health check routes: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // User routes: /api/user/**
    cfg.service(web::scope("/api/user").configure(users::configure_routes));

    // Game routes: /api/game/** and /api/games/**
    cfg.configure(games::configure_routes);

    // Score routes: /api/scores/**, /api/highscores
    cfg.configure(scores::configure_routes);
}

fn path_error(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    AppError::bad_request(ErrorCode::BadRequest, format!("Invalid path: {err}")).into()
}

fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::bad_request(ErrorCode::BadRequest, format!("Invalid query: {err}")).into()
}
