//! Game lifecycle routes.

use actix_web::{web, HttpResponse};

use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::{GameKey, ValidatedJson};
use crate::protocol::views::{
    GameView, GamesView, MakeMoveRequest, MessageView, MovesView, NewGameRequest,
};
use crate::services::games::GameService;
use crate::services::stats::{trigger_average_refresh, StatsAggregator};
use crate::state::app_state::AppState;

/// POST /api/game
async fn new_game(
    body: ValidatedJson<NewGameRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let NewGameRequest {
        user_name,
        attempts,
    } = body.into_inner();
    let words = app_state.words.clone();

    let record = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            GameService::new()
                .new_game(txn, &words, &user_name, attempts)
                .await
        })
    })
    .await?;

    // After commit, so the refresh sees the new game.
    trigger_average_refresh(&app_state).await;

    Ok(HttpResponse::Ok().json(GameView::from_record(
        &record,
        "Good luck playing Hangman!",
    )))
}

/// GET /api/game/{handle}
async fn get_game(
    key: GameKey,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let record = GameService::new().get(db, key.id()).await?;
    Ok(HttpResponse::Ok().json(GameView::from_record(&record, "Time to make a move!")))
}

/// PUT /api/game/{handle}
async fn make_move(
    key: GameKey,
    body: ValidatedJson<MakeMoveRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = key.id();
    let guess = body.into_inner().guess;

    let (record, outcome) = with_txn(&app_state, move |txn| {
        Box::pin(async move { GameService::new().make_move(txn, id, &guess).await })
    })
    .await?;

    Ok(HttpResponse::Ok().json(GameView::from_record(&record, outcome.message())))
}

/// DELETE /api/game/{handle}
async fn delete_game(
    key: GameKey,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = key.id();
    with_txn(&app_state, move |txn| {
        Box::pin(async move { GameService::new().delete(txn, id).await })
    })
    .await?;

    Ok(HttpResponse::Ok().json(MessageView::new("Game deleted!")))
}

/// GET /api/game/{handle}/history
async fn game_history(
    key: GameKey,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let moves = GameService::new().history(db, key.id()).await?;
    Ok(HttpResponse::Ok().json(MovesView { moves }))
}

/// GET /api/game/user/{user_name}
async fn user_games(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let records = GameService::new().list_user_games(db, &path).await?;

    Ok(HttpResponse::Ok().json(GamesView {
        games: records
            .iter()
            .map(|record| GameView::from_record(record, ""))
            .collect(),
    }))
}

/// GET /api/games/average_attempts
async fn average_attempts(app_state: web::Data<AppState>) -> HttpResponse {
    let message = StatsAggregator::new().cached_average(&app_state.cache);
    HttpResponse::Ok().json(MessageView::new(message))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/game").route(web::post().to(new_game)));
    // Registered before `{handle}/history` so a user named "history" still resolves.
    cfg.service(web::resource("/api/game/user/{user_name}").route(web::get().to(user_games)));
    cfg.service(
        web::resource("/api/game/{handle}")
            .route(web::get().to(get_game))
            .route(web::put().to(make_move))
            .route(web::delete().to(delete_game)),
    );
    cfg.service(web::resource("/api/game/{handle}/history").route(web::get().to(game_history)));
    cfg.service(
        web::resource("/api/games/average_attempts").route(web::get().to(average_attempts)),
    );
}
