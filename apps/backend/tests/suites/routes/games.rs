use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem;
use std::time::Duration;

use hangman_backend::config::server::StatsRefresh;
use hangman_backend::db::require_db;
use hangman_backend::entities::games;
use hangman_backend::protocol::views::{GameView, GamesView, MessageView, MovesView};
use hangman_backend::services::stats::StatsAggregator;
use hangman_backend::utils::game_handle::GameHandle;
use hangman_backend::AppError;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use serde_json::json;

use crate::support::app_builder::create_test_app;
use crate::support::build_test_state;
use crate::support::test_state::test_state_builder;

async fn register<S>(app: &S, name: &str)
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let req = test::TestRequest::post()
        .uri("/api/user")
        .set_json(json!({"user_name": name}))
        .to_request();
    assert!(test::call_service(app, req).await.status().is_success());
}

async fn start<S>(app: &S, name: &str, attempts: u8) -> GameView
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let req = test::TestRequest::post()
        .uri("/api/game")
        .set_json(json!({"user_name": name, "attempts": attempts}))
        .to_request();
    test::call_and_read_body_json(app, req).await
}

async fn guess<S>(app: &S, key: &str, letter: &str) -> GameView
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let req = test::TestRequest::put()
        .uri(&format!("/api/game/{key}"))
        .set_json(json!({"guess": letter}))
        .to_request();
    test::call_and_read_body_json(app, req).await
}

#[actix_web::test]
async fn new_game_view() -> Result<(), AppError> {
    let app = create_test_app(build_test_state().await?).await;
    register(&app, "alice").await;

    let view = start(&app, "alice", 5).await;
    assert_eq!(view.user_name, "alice");
    assert_eq!(view.current_word, "***");
    assert_eq!(view.attempts_remaining, 5);
    assert_eq!(view.status, "IN_PROGRESS");
    assert!(!view.game_over);
    assert_eq!(view.message, "Good luck playing Hangman!");
    assert!(GameHandle::decode(&view.urlsafe_key).is_ok());
    Ok(())
}

#[actix_web::test]
async fn new_game_defaults_attempts_and_refreshes_average() -> Result<(), AppError> {
    let app = create_test_app(build_test_state().await?).await;
    register(&app, "dora").await;

    let req = test::TestRequest::post()
        .uri("/api/game")
        .set_json(json!({"user_name": "dora"}))
        .to_request();
    let view: GameView = test::call_and_read_body_json(&app, req).await;
    assert_eq!(view.attempts_remaining, 5);

    let req = test::TestRequest::get()
        .uri("/api/games/average_attempts")
        .to_request();
    let body: MessageView = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.message, "The average moves remaining is 5.00");
    Ok(())
}

#[actix_web::test]
async fn new_game_rejects_too_many_attempts() -> Result<(), AppError> {
    let app = create_test_app(build_test_state().await?).await;
    register(&app, "erin").await;

    let req = test::TestRequest::post()
        .uri("/api/game")
        .set_json(json!({"user_name": "erin", "attempts": 15}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, StatusCode::BAD_REQUEST, "INVALID_ATTEMPTS").await;
    Ok(())
}

#[actix_web::test]
async fn new_game_for_unknown_user_is_not_found() -> Result<(), AppError> {
    let app = create_test_app(build_test_state().await?).await;

    let req = test::TestRequest::post()
        .uri("/api/game")
        .set_json(json!({"user_name": "nobody"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let problem = assert_problem(resp, StatusCode::NOT_FOUND, "USER_NOT_FOUND").await;
    assert_eq!(problem.detail, "A User with that name does not exist!");
    Ok(())
}

#[actix_web::test]
async fn play_to_win_then_idempotent() -> Result<(), AppError> {
    let app = create_test_app(build_test_state().await?).await;
    register(&app, "fay").await;
    let key = start(&app, "fay", 5).await.urlsafe_key;

    let view = guess(&app, &key, "c").await;
    assert_eq!(view.message, "Bingo!");
    assert_eq!(view.current_word, "c**");

    let view = guess(&app, &key, "q").await;
    assert_eq!(view.message, "You missed!");

    guess(&app, &key, "A").await;
    let view = guess(&app, &key, "t").await;
    assert_eq!(view.message, "You win!");
    assert_eq!(view.status, "WON");
    assert!(view.game_over);
    assert_eq!(view.attempts_remaining, 1);

    let again = guess(&app, &key, "z").await;
    assert_eq!(again.message, "Game already over!");
    assert_eq!(again.attempts_remaining, 1);
    assert_eq!(again.current_word, "cat");

    let req = test::TestRequest::get()
        .uri(&format!("/api/game/{key}"))
        .to_request();
    let fetched: GameView = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched.message, "Time to make a move!");
    assert_eq!(fetched.status, "WON");
    Ok(())
}

#[actix_web::test]
async fn losing_move_reports_game_over() -> Result<(), AppError> {
    let app = create_test_app(build_test_state().await?).await;
    register(&app, "gil").await;
    let key = start(&app, "gil", 1).await.urlsafe_key;

    let view = guess(&app, &key, "x").await;
    assert_eq!(view.message, "You missed! Game over!");
    assert_eq!(view.status, "LOST");
    assert!(view.game_over);
    assert_eq!(view.attempts_remaining, 0);
    Ok(())
}

#[actix_web::test]
async fn multi_char_guess_is_bad_request() -> Result<(), AppError> {
    let app = create_test_app(build_test_state().await?).await;
    register(&app, "hal").await;
    let key = start(&app, "hal", 5).await.urlsafe_key;

    let req = test::TestRequest::put()
        .uri(&format!("/api/game/{key}"))
        .set_json(json!({"guess": "ab"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, StatusCode::BAD_REQUEST, "INVALID_GUESS").await;
    Ok(())
}

#[actix_web::test]
async fn history_lists_moves_in_order() -> Result<(), AppError> {
    let app = create_test_app(build_test_state().await?).await;
    register(&app, "ivy").await;
    let key = start(&app, "ivy", 5).await.urlsafe_key;
    guess(&app, &key, "t").await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/game/{key}/history"))
        .to_request();
    let body: MovesView = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body.moves,
        vec![
            "ivy created a new game".to_string(),
            "made a guess: 't', result: **t, Bingo!".to_string(),
        ]
    );
    Ok(())
}

#[actix_web::test]
async fn delete_in_progress_then_finished() -> Result<(), AppError> {
    let app = create_test_app(build_test_state().await?).await;
    register(&app, "jo").await;

    let key = start(&app, "jo", 5).await.urlsafe_key;
    let req = test::TestRequest::delete()
        .uri(&format!("/api/game/{key}"))
        .to_request();
    let body: MessageView = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.message, "Game deleted!");

    let req = test::TestRequest::get()
        .uri(&format!("/api/game/{key}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, StatusCode::NOT_FOUND, "GAME_NOT_FOUND").await;

    let key = start(&app, "jo", 1).await.urlsafe_key;
    guess(&app, &key, "z").await;
    let req = test::TestRequest::delete()
        .uri(&format!("/api/game/{key}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, StatusCode::BAD_REQUEST, "GAME_ALREADY_OVER").await;
    Ok(())
}

#[actix_web::test]
async fn user_games_have_empty_messages() -> Result<(), AppError> {
    let app = create_test_app(build_test_state().await?).await;
    register(&app, "kim").await;
    start(&app, "kim", 5).await;
    start(&app, "kim", 3).await;

    let req = test::TestRequest::get()
        .uri("/api/game/user/kim")
        .to_request();
    let body: GamesView = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.games.len(), 2);
    assert!(body.games.iter().all(|g| g.message.is_empty()));
    Ok(())
}

#[actix_web::test]
async fn malformed_handle_is_bad_request() -> Result<(), AppError> {
    let app = create_test_app(build_test_state().await?).await;

    let req = test::TestRequest::get()
        .uri("/api/game/not-a-handle")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, StatusCode::BAD_REQUEST, "INVALID_GAME_HANDLE").await;
    Ok(())
}

#[actix_web::test]
async fn unknown_but_valid_handle_is_not_found() -> Result<(), AppError> {
    let app = create_test_app(build_test_state().await?).await;

    let key = GameHandle::encode(999);
    let req = test::TestRequest::get()
        .uri(&format!("/api/game/{key}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let problem = assert_problem(resp, StatusCode::NOT_FOUND, "GAME_NOT_FOUND").await;
    assert_eq!(problem.detail, "Game not found!");
    Ok(())
}

#[actix_web::test]
async fn average_is_empty_before_any_game() -> Result<(), AppError> {
    let app = create_test_app(build_test_state().await?).await;

    let req = test::TestRequest::get()
        .uri("/api/games/average_attempts")
        .to_request();
    let body: MessageView = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.message, "");
    Ok(())
}

#[actix_web::test]
async fn failed_average_refresh_does_not_fail_new_game() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let cache = state.cache.clone();
    let db = require_db(&state)?.clone();
    let app = create_test_app(state).await;
    register(&app, "lou").await;

    let key = start(&app, "lou", 5).await.urlsafe_key;
    let stats = StatsAggregator::new();
    assert_eq!(
        stats.cached_average(&cache),
        "The average moves remaining is 5.00"
    );

    // A stored value the domain refuses to load makes the refresh fail.
    let id = GameHandle::decode(&key).map_err(AppError::from)?;
    games::Entity::update_many()
        .col_expr(games::Column::AttemptsRemaining, Expr::value(300i16))
        .filter(games::Column::Id.eq(id))
        .exec(&db)
        .await?;

    let req = test::TestRequest::post()
        .uri("/api/game")
        .set_json(json!({"user_name": "lou", "attempts": 2}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let view: GameView = test::read_body_json(resp).await;
    assert_eq!(view.message, "Good luck playing Hangman!");

    assert_eq!(
        stats.cached_average(&cache),
        "The average moves remaining is 5.00"
    );
    Ok(())
}

#[actix_web::test]
async fn background_refresh_fills_average() -> Result<(), AppError> {
    let state = test_state_builder(&["cat"])?
        .with_stats_refresh(StatsRefresh::Background)
        .build()
        .await?;
    let cache = state.cache.clone();
    let app = create_test_app(state).await;
    register(&app, "max").await;
    start(&app, "max", 6).await;

    let stats = StatsAggregator::new();
    let mut message = stats.cached_average(&cache);
    for _ in 0..200 {
        if !message.is_empty() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
        message = stats.cached_average(&cache);
    }
    assert_eq!(message, "The average moves remaining is 6.00");
    Ok(())
}
