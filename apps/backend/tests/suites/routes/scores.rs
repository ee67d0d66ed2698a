use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem;
use hangman_backend::protocol::views::ScoresView;
use hangman_backend::AppError;
use time::OffsetDateTime;

use crate::support::app_builder::create_test_app;
use crate::support::build_test_state;
use crate::support::factory::{create_game, create_user, play};

#[actix_web::test]
async fn score_listings() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let alice = create_user(&state, "alice").await?;
    let bob = create_user(&state, "bob").await?;

    let g = create_game(&state, &alice.name, 5).await?;
    play(&state, g.id, &["c", "a", "t"]).await?;
    let g = create_game(&state, &bob.name, 1).await?;
    play(&state, g.id, &["x"]).await?;
    let app = create_test_app(state).await;

    let req = test::TestRequest::get().uri("/api/scores").to_request();
    let all: ScoresView = test::call_and_read_body_json(&app, req).await;
    assert_eq!(all.items.len(), 2);

    let today = OffsetDateTime::now_utc().date().to_string();
    assert!(all.items.iter().all(|s| s.date == today));

    let req = test::TestRequest::get()
        .uri("/api/highscores?limit=1")
        .to_request();
    let top: ScoresView = test::call_and_read_body_json(&app, req).await;
    assert_eq!(top.items.len(), 1);
    assert_eq!(top.items[0].user_name, bob.name);
    assert_eq!(top.items[0].score, 17);
    assert!(!top.items[0].won);

    let req = test::TestRequest::get()
        .uri("/api/highscores")
        .to_request();
    let every: ScoresView = test::call_and_read_body_json(&app, req).await;
    assert_eq!(every.items.len(), 2);

    let req = test::TestRequest::get()
        .uri(&format!("/api/scores/user/{}", alice.name))
        .to_request();
    let mine: ScoresView = test::call_and_read_body_json(&app, req).await;
    assert_eq!(mine.items.len(), 1);
    assert!(mine.items[0].won);
    assert_eq!(mine.items[0].score, 15);
    Ok(())
}

#[actix_web::test]
async fn scores_for_unknown_user_is_not_found() -> Result<(), AppError> {
    let app = create_test_app(build_test_state().await?).await;

    let req = test::TestRequest::get()
        .uri("/api/scores/user/ghost")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, StatusCode::NOT_FOUND, "USER_NOT_FOUND").await;
    Ok(())
}

#[actix_web::test]
async fn non_numeric_limit_is_bad_request() -> Result<(), AppError> {
    let app = create_test_app(build_test_state().await?).await;

    let req = test::TestRequest::get()
        .uri("/api/highscores?limit=lots")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, StatusCode::BAD_REQUEST, "BAD_REQUEST").await;
    Ok(())
}
