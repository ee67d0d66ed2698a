//! SeaORM adapter for games and their move log.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::entities::games::{self, GameStatus};
use crate::entities::{game_moves, users};

pub mod dto;

pub use dto::{GameCreate, GameProgressUpdate};

/// Zero affected rows on a guarded write: tell "no such game" apart from
/// "game already finished" with a structured error the repos layer parses.
async fn guard_failure<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<sea_orm::DbErr, sea_orm::DbErr> {
    let exists = games::Entity::find_by_id(id).one(conn).await?.is_some();
    Ok(if exists {
        sea_orm::DbErr::Custom(format!("GAME_FINISHED:{id}"))
    } else {
        sea_orm::DbErr::Custom(format!("GAME_NOT_FOUND:{id}"))
    })
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameCreate,
) -> Result<games::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let game_active = games::ActiveModel {
        id: NotSet,
        user_id: Set(dto.user_id),
        target: Set(dto.target),
        current: Set(dto.current),
        attempts_allowed: Set(dto.attempts_allowed),
        attempts_remaining: Set(dto.attempts_allowed),
        status: Set(GameStatus::InProgress),
        created_at: Set(now),
        updated_at: Set(now),
        ended_at: Set(None),
    };

    game_active.insert(conn).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    games::Entity::find_by_id(id).one(conn).await
}

/// Game row joined with its owner.
pub async fn find_with_owner<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<(games::Model, Option<users::Model>)>, sea_orm::DbErr> {
    games::Entity::find_by_id(id)
        .find_also_related(users::Entity)
        .one(conn)
        .await
}

pub async fn list_by_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<games::Model>, sea_orm::DbErr> {
    games::Entity::find()
        .filter(games::Column::UserId.eq(user_id))
        .order_by_asc(games::Column::Id)
        .all(conn)
        .await
}

/// `attempts_remaining` of every in-progress game.
pub async fn in_progress_remaining<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<i16>, sea_orm::DbErr> {
    games::Entity::find()
        .select_only()
        .column(games::Column::AttemptsRemaining)
        .filter(games::Column::Status.eq(GameStatus::InProgress))
        .into_tuple::<i16>()
        .all(conn)
        .await
}

/// Persist the result of a guess. Only an in-progress row is ever updated.
pub async fn update_progress<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameProgressUpdate,
) -> Result<(), sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let ended_at = (dto.status != GameStatus::InProgress).then_some(now);

    let result = games::Entity::update_many()
        .col_expr(games::Column::Current, Expr::value(dto.current))
        .col_expr(
            games::Column::AttemptsRemaining,
            Expr::value(dto.attempts_remaining),
        )
        .col_expr(games::Column::Status, Expr::value(dto.status))
        .col_expr(games::Column::EndedAt, Expr::value(ended_at))
        .col_expr(games::Column::UpdatedAt, Expr::value(now))
        .filter(games::Column::Id.eq(dto.id))
        .filter(games::Column::Status.eq(GameStatus::InProgress))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return Err(guard_failure(conn, dto.id).await?);
    }
    Ok(())
}

/// Delete an in-progress game and its move log.
pub async fn delete_in_progress<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<(), sea_orm::DbErr> {
    game_moves::Entity::delete_many()
        .filter(game_moves::Column::GameId.eq(id))
        .exec(conn)
        .await?;

    let result = games::Entity::delete_many()
        .filter(games::Column::Id.eq(id))
        .filter(games::Column::Status.eq(GameStatus::InProgress))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return Err(guard_failure(conn, id).await?);
    }
    Ok(())
}

pub async fn append_move<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    move_no: i32,
    entry: String,
) -> Result<game_moves::Model, sea_orm::DbErr> {
    let move_active = game_moves::ActiveModel {
        id: NotSet,
        game_id: Set(game_id),
        move_no: Set(move_no),
        entry: Set(entry),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    move_active.insert(conn).await
}

/// Move log entries of several games in one query, ordered by game then move.
pub async fn list_moves_for_games<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_ids: Vec<i64>,
) -> Result<Vec<(i64, String)>, sea_orm::DbErr> {
    if game_ids.is_empty() {
        return Ok(Vec::new());
    }
    game_moves::Entity::find()
        .select_only()
        .column(game_moves::Column::GameId)
        .column(game_moves::Column::Entry)
        .filter(game_moves::Column::GameId.is_in(game_ids))
        .order_by_asc(game_moves::Column::GameId)
        .order_by_asc(game_moves::Column::MoveNo)
        .into_tuple::<(i64, String)>()
        .all(conn)
        .await
}

/// Move log entries in order.
pub async fn list_moves<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<String>, sea_orm::DbErr> {
    game_moves::Entity::find()
        .select_only()
        .column(game_moves::Column::Entry)
        .filter(game_moves::Column::GameId.eq(game_id))
        .order_by_asc(game_moves::Column::MoveNo)
        .into_tuple::<String>()
        .all(conn)
        .await
}
