use hangman_backend::db::require_db;
use hangman_backend::domain::{GameStatus, GuessOutcome};
use hangman_backend::errors::ErrorCode;
use hangman_backend::repos::scores as scores_repo;
use hangman_backend::services::games::GameService;
use hangman_backend::AppError;

use crate::support::build_test_state;
use crate::support::factory::{create_game, create_user, play};

#[tokio::test]
async fn new_game_starts_fully_masked() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let user = create_user(&state, "ng").await?;

    let game = create_game(&state, &user.name, 5).await?;

    assert_eq!(game.user_name, user.name);
    assert_eq!(game.state.current(), "***");
    assert_eq!(game.state.attempts_remaining(), 5);
    assert_eq!(game.state.status(), GameStatus::InProgress);
    assert_eq!(
        game.state.moves(),
        &[format!("{} created a new game", user.name)]
    );
    Ok(())
}

#[tokio::test]
async fn new_game_defaults_to_five_attempts() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let user = create_user(&state, "dflt").await?;

    let game = GameService::new()
        .new_game(db, &state.words, &user.name, None)
        .await?;
    assert_eq!(game.state.attempts_allowed(), 5);
    Ok(())
}

#[tokio::test]
async fn new_game_rejects_attempts_out_of_range() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let user = create_user(&state, "range").await?;

    for attempts in [0, 15, -3] {
        let err = create_game(&state, &user.name, attempts)
            .await
            .expect_err("out-of-range attempts should fail");
        assert_eq!(err.code(), ErrorCode::InvalidAttempts, "attempts={attempts}");
    }
    assert!(create_game(&state, &user.name, 14).await.is_ok());
    Ok(())
}

#[tokio::test]
async fn new_game_requires_known_user() -> Result<(), AppError> {
    let state = build_test_state().await?;

    let err = create_game(&state, "nobody", 5)
        .await
        .expect_err("unknown user should fail");
    assert_eq!(err.code(), ErrorCode::UserNotFound);
    assert_eq!(err.status().as_u16(), 404);
    Ok(())
}

#[tokio::test]
async fn winning_game_records_one_score() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let user = create_user(&state, "win").await?;
    let game = create_game(&state, &user.name, 5).await?;

    let finished = play(&state, game.id, &["c", "a", "t"]).await?;

    assert_eq!(finished.state.status(), GameStatus::Won);
    assert_eq!(finished.state.current(), "cat");
    assert_eq!(finished.state.attempts_remaining(), 2);

    let scores = scores_repo::list_by_user(db, user.id, &user.name).await?;
    assert_eq!(scores.len(), 1);
    assert!(scores[0].won);
    assert_eq!(scores[0].score, 3 + 14 - 2);
    Ok(())
}

#[tokio::test]
async fn losing_game_records_loss() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let user = create_user(&state, "loss").await?;
    let game = create_game(&state, &user.name, 2).await?;

    let service = GameService::new();
    let (_, first) = service.make_move(db, game.id, "x").await?;
    assert_eq!(first, GuessOutcome::Miss);
    let (record, second) = service.make_move(db, game.id, "y").await?;
    assert_eq!(second, GuessOutcome::Lost { hit: false });
    assert_eq!(record.state.status(), GameStatus::Lost);

    let scores = scores_repo::list_by_user(db, user.id, &user.name).await?;
    assert_eq!(scores.len(), 1);
    assert!(!scores[0].won);
    Ok(())
}

#[tokio::test]
async fn move_on_finished_game_changes_nothing() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let user = create_user(&state, "over").await?;
    let game = create_game(&state, &user.name, 5).await?;
    let finished = play(&state, game.id, &["c", "a", "t"]).await?;

    let (after, outcome) = GameService::new().make_move(db, game.id, "z").await?;

    assert_eq!(outcome, GuessOutcome::AlreadyOver);
    assert_eq!(outcome.message(), "Game already over!");
    assert_eq!(after, finished);
    assert_eq!(
        scores_repo::list_by_user(db, user.id, &user.name).await?.len(),
        1
    );
    Ok(())
}

#[tokio::test]
async fn invalid_guess_is_rejected_without_side_effects() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let user = create_user(&state, "inv").await?;
    let game = create_game(&state, &user.name, 5).await?;
    let service = GameService::new();

    for guess in ["", "ab"] {
        let err = service
            .make_move(db, game.id, guess)
            .await
            .expect_err("multi-char guess should fail");
        assert_eq!(err.code(), ErrorCode::InvalidGuess);
    }

    let reloaded = service.get(db, game.id).await?;
    assert_eq!(reloaded.state.attempts_remaining(), 5);
    assert_eq!(service.history(db, game.id).await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn history_is_ordered_log() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let user = create_user(&state, "hist").await?;
    let game = create_game(&state, &user.name, 5).await?;
    play(&state, game.id, &["c", "z", "a", "t"]).await?;

    let moves = GameService::new().history(db, game.id).await?;
    assert_eq!(
        moves,
        vec![
            format!("{} created a new game", user.name),
            "made a guess: 'c', result: c**, Bingo!".to_string(),
            "made a guess: 'z', result: c**, You missed!!".to_string(),
            "made a guess: 'a', result: ca*, Bingo!".to_string(),
            "made a guess: 't', result: cat, You win!".to_string(),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn delete_removes_in_progress_game() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let user = create_user(&state, "del").await?;
    let game = create_game(&state, &user.name, 5).await?;
    let service = GameService::new();

    service.delete(db, game.id).await?;

    let err = service.get(db, game.id).await.expect_err("game is gone");
    assert_eq!(err.code(), ErrorCode::GameNotFound);
    let err = service.history(db, game.id).await.expect_err("log is gone");
    assert_eq!(err.code(), ErrorCode::GameNotFound);
    Ok(())
}

#[tokio::test]
async fn delete_rejects_finished_game() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let user = create_user(&state, "delover").await?;
    let game = create_game(&state, &user.name, 5).await?;
    play(&state, game.id, &["c", "a", "t"]).await?;

    let err = GameService::new()
        .delete(db, game.id)
        .await
        .expect_err("finished game cannot be deleted");
    assert_eq!(err.code(), ErrorCode::GameAlreadyOver);
    assert_eq!(err.status().as_u16(), 400);
    Ok(())
}

#[tokio::test]
async fn list_user_games_only_returns_owner_games() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let alice = create_user(&state, "alice").await?;
    let bob = create_user(&state, "bob").await?;
    create_game(&state, &alice.name, 5).await?;
    create_game(&state, &alice.name, 3).await?;
    create_game(&state, &bob.name, 5).await?;

    let games = GameService::new().list_user_games(db, &alice.name).await?;
    assert_eq!(games.len(), 2);
    assert!(games.iter().all(|g| g.user_id == alice.id));
    assert!(games.iter().all(|g| g.state.moves().len() == 1));

    let err = GameService::new()
        .list_user_games(db, "nobody")
        .await
        .expect_err("unknown user");
    assert_eq!(err.code(), ErrorCode::UserNotFound);
    Ok(())
}

#[tokio::test]
async fn list_user_games_keeps_each_game_log() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let user = create_user(&state, "logs").await?;
    let first = create_game(&state, &user.name, 5).await?;
    let second = create_game(&state, &user.name, 5).await?;
    play(&state, first.id, &["c", "z"]).await?;
    play(&state, second.id, &["t"]).await?;

    let service = GameService::new();
    let games = service.list_user_games(db, &user.name).await?;
    assert_eq!(games.len(), 2);
    for game in &games {
        let loaded = service.get(db, game.id).await?;
        assert_eq!(game.state, loaded.state);
    }
    let by_id = |id| games.iter().find(|g| g.id == id).map(|g| g.state.moves().len());
    assert_eq!(by_id(first.id), Some(3));
    assert_eq!(by_id(second.id), Some(2));
    Ok(())
}
