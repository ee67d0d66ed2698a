//! Score repository functions (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;
use time::Date;

use crate::adapters::scores_sea as scores_adapter;
use crate::domain::scoring::FinalScore;
use crate::entities::{scores, users};
use crate::errors::domain::{DomainError, InfraErrorKind};

/// Score domain model, joined with the owner's name.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRecord {
    pub user_name: String,
    pub date: Date,
    pub won: bool,
    pub score: i32,
}

fn with_owner(row: (scores::Model, Option<users::Model>)) -> Result<ScoreRecord, DomainError> {
    let (score, owner) = row;
    let owner = owner.ok_or_else(|| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("score {} has no owner", score.id),
        )
    })?;
    Ok(ScoreRecord {
        user_name: owner.name,
        date: score.date,
        won: score.won,
        score: score.score,
    })
}

pub async fn create_score<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    game_id: i64,
    date: Date,
    final_score: FinalScore,
) -> Result<(), DomainError> {
    let dto = scores_adapter::ScoreCreate {
        user_id,
        game_id,
        date,
        won: final_score.won,
        score: final_score.score,
    };
    scores_adapter::create_score(conn, dto).await?;
    Ok(())
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<ScoreRecord>, DomainError> {
    scores_adapter::list_all(conn)
        .await?
        .into_iter()
        .map(with_owner)
        .collect()
}

/// Highest first, capped at `limit` when given.
pub async fn list_top<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    limit: Option<u64>,
) -> Result<Vec<ScoreRecord>, DomainError> {
    scores_adapter::list_top(conn, limit)
        .await?
        .into_iter()
        .map(with_owner)
        .collect()
}

pub async fn list_by_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    user_name: &str,
) -> Result<Vec<ScoreRecord>, DomainError> {
    let rows = scores_adapter::list_by_user(conn, user_id).await?;
    Ok(rows
        .into_iter()
        .map(|s| ScoreRecord {
            user_name: user_name.to_string(),
            date: s.date,
            won: s.won,
            score: s.score,
        })
        .collect())
}

/// `(user_id, score)` for every recorded score.
pub async fn user_score_pairs<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<(i64, i32)>, DomainError> {
    Ok(scores_adapter::user_score_pairs(conn).await?)
}
