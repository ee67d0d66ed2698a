//! Score listings.

use actix_web::{web, HttpResponse};

use crate::db::require_db;
use crate::error::AppError;
use crate::protocol::views::{HighScoresQuery, ScoresView};
use crate::services::scores::ScoreLedger;
use crate::state::app_state::AppState;

/// GET /api/scores
async fn all_scores(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let scores = ScoreLedger::new().list_all(db).await?;
    Ok(HttpResponse::Ok().json(ScoresView::from(scores)))
}

/// GET /api/highscores?limit=N
///
/// A missing or non-positive limit returns every score.
async fn high_scores(
    query: web::Query<HighScoresQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let limit = query.limit.unwrap_or(0);
    let scores = ScoreLedger::new().top(db, limit).await?;
    Ok(HttpResponse::Ok().json(ScoresView::from(scores)))
}

/// GET /api/scores/user/{user_name}
async fn user_scores(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let scores = ScoreLedger::new().by_user(db, &path).await?;
    Ok(HttpResponse::Ok().json(ScoresView::from(scores)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/scores").route(web::get().to(all_scores)));
    cfg.service(web::resource("/api/scores/user/{user_name}").route(web::get().to(user_scores)));
    cfg.service(web::resource("/api/highscores").route(web::get().to(high_scores)));
}
