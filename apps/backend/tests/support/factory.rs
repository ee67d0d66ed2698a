//! Seed data through the service layer.

use backend_test_support::unique_helpers::unique_name;
use hangman_backend::db::require_db;
use hangman_backend::repos::games::GameRecord;
use hangman_backend::repos::users::User;
use hangman_backend::services::games::GameService;
use hangman_backend::services::users::UserService;
use hangman_backend::state::app_state::AppState;
use hangman_backend::AppError;

/// Register a user with a unique name derived from `prefix`.
pub async fn create_user(state: &AppState, prefix: &str) -> Result<User, AppError> {
    let db = require_db(state)?;
    UserService::new()
        .register(db, &unique_name(prefix), None)
        .await
}

/// Start a game for `user_name` with the given attempt budget.
pub async fn create_game(
    state: &AppState,
    user_name: &str,
    attempts: i64,
) -> Result<GameRecord, AppError> {
    let db = require_db(state)?;
    GameService::new()
        .new_game(db, &state.words, user_name, Some(attempts))
        .await
}

/// Apply each guess in order, returning the final record.
pub async fn play(state: &AppState, game_id: i64, guesses: &[&str]) -> Result<GameRecord, AppError> {
    let db = require_db(state)?;
    let service = GameService::new();
    let mut last = service.get(db, game_id).await?;
    for guess in guesses {
        last = service.make_move(db, game_id, guess).await?.0;
    }
    Ok(last)
}
