use hangman_backend::db::require_db;
use hangman_backend::errors::ErrorCode;
use hangman_backend::services::stats::{trigger_average_refresh, StatsAggregator};
use hangman_backend::AppError;

use crate::support::build_test_state;
use crate::support::factory::{create_game, create_user, play};

#[tokio::test]
async fn average_is_empty_until_refreshed() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let stats = StatsAggregator::new();

    assert_eq!(stats.cached_average(&state.cache), "");
    assert_eq!(stats.refresh_average(db, &state.cache).await?, None);
    assert_eq!(stats.cached_average(&state.cache), "");
    Ok(())
}

#[tokio::test]
async fn average_covers_in_progress_games_only() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let user = create_user(&state, "avg").await?;

    create_game(&state, &user.name, 5).await?;
    create_game(&state, &user.name, 2).await?;
    let done = create_game(&state, &user.name, 9).await?;
    play(&state, done.id, &["c", "a", "t"]).await?;

    let message = StatsAggregator::new()
        .refresh_average(db, &state.cache)
        .await?;
    assert_eq!(
        message.as_deref(),
        Some("The average moves remaining is 3.50")
    );
    assert_eq!(
        StatsAggregator::new().cached_average(&state.cache),
        "The average moves remaining is 3.50"
    );
    Ok(())
}

#[tokio::test]
async fn stale_average_survives_when_no_games_in_progress() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let user = create_user(&state, "stale").await?;
    let game = create_game(&state, &user.name, 4).await?;

    trigger_average_refresh(&state).await;
    let stats = StatsAggregator::new();
    assert_eq!(
        stats.cached_average(&state.cache),
        "The average moves remaining is 4.00"
    );

    play(&state, game.id, &["c", "a", "t"]).await?;
    trigger_average_refresh(&state).await;
    assert_eq!(
        stats.cached_average(&state.cache),
        "The average moves remaining is 4.00"
    );
    Ok(())
}

#[tokio::test]
async fn rankings_fail_without_users() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;

    let err = StatsAggregator::new()
        .rankings(db)
        .await
        .expect_err("no users");
    assert_eq!(err.code(), ErrorCode::NoUsers);
    assert_eq!(err.status().as_u16(), 404);
    Ok(())
}

#[tokio::test]
async fn rankings_use_mean_score_descending() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let alice = create_user(&state, "alice").await?;
    let bob = create_user(&state, "bob").await?;
    let idle = create_user(&state, "idle").await?;

    // alice: 15 and 12 -> 13.5
    let g = create_game(&state, &alice.name, 5).await?;
    play(&state, g.id, &["c", "a", "t"]).await?;
    let g = create_game(&state, &alice.name, 8).await?;
    play(&state, g.id, &["c", "a", "t"]).await?;
    // bob: 17
    let g = create_game(&state, &bob.name, 1).await?;
    play(&state, g.id, &["z"]).await?;

    let ranked = StatsAggregator::new().rankings(db).await?;
    let names: Vec<&str> = ranked.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec![bob.name.as_str(), alice.name.as_str(), idle.name.as_str()]);
    assert_eq!(ranked[0].performance, 17.0);
    assert_eq!(ranked[1].performance, 13.5);
    assert_eq!(ranked[2].performance, 0.0);
    Ok(())
}
