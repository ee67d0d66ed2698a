//! SeaORM adapter for scores.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::entities::{scores, users};

pub mod dto;

pub use dto::ScoreCreate;

pub async fn create_score<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ScoreCreate,
) -> Result<scores::Model, sea_orm::DbErr> {
    let score_active = scores::ActiveModel {
        id: NotSet,
        user_id: Set(dto.user_id),
        game_id: Set(dto.game_id),
        date: Set(dto.date),
        won: Set(dto.won),
        score: Set(dto.score),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    score_active.insert(conn).await
}

/// Every score with its owner, in insertion order.
pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<(scores::Model, Option<users::Model>)>, sea_orm::DbErr> {
    scores::Entity::find()
        .find_also_related(users::Entity)
        .order_by_asc(scores::Column::Id)
        .all(conn)
        .await
}

/// Highest scores first; `limit = None` returns them all.
pub async fn list_top<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    limit: Option<u64>,
) -> Result<Vec<(scores::Model, Option<users::Model>)>, sea_orm::DbErr> {
    scores::Entity::find()
        .find_also_related(users::Entity)
        .order_by_desc(scores::Column::Score)
        .order_by_asc(scores::Column::Id)
        .limit(limit)
        .all(conn)
        .await
}

pub async fn list_by_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<scores::Model>, sea_orm::DbErr> {
    scores::Entity::find()
        .filter(scores::Column::UserId.eq(user_id))
        .order_by_asc(scores::Column::Id)
        .all(conn)
        .await
}

/// `(user_id, score)` for every score row.
pub async fn user_score_pairs<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<(i64, i32)>, sea_orm::DbErr> {
    scores::Entity::find()
        .select_only()
        .column(scores::Column::UserId)
        .column(scores::Column::Score)
        .into_tuple::<(i64, i32)>()
        .all(conn)
        .await
}
