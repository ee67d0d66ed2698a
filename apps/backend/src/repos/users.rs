//! User repository functions (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;

use crate::adapters::users_sea as users_adapter;
use crate::entities::users;
use crate::errors::domain::{DomainError, NotFoundKind};

/// User domain model
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub performance: f64,
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            performance: model.performance,
        }
    }
}

pub async fn create_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
    email: Option<String>,
) -> Result<User, DomainError> {
    let dto = users_adapter::UserCreate::new(name).with_email(email);
    let user = users_adapter::create_user(conn, dto).await?;
    Ok(User::from(user))
}

pub async fn find_user_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Option<User>, DomainError> {
    let user = users_adapter::find_user_by_name(conn, name).await?;
    Ok(user.map(User::from))
}

/// Like `find_user_by_name`, but a missing user is `NotFound(User)`.
pub async fn require_user_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<User, DomainError> {
    find_user_by_name(conn, name).await?.ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::User,
            "A User with that name does not exist!",
        )
    })
}

pub async fn list_users<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<User>, DomainError> {
    let users = users_adapter::list_users(conn).await?;
    Ok(users.into_iter().map(User::from).collect())
}

pub async fn update_performance<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    performance: f64,
) -> Result<(), DomainError> {
    users_adapter::update_performance(conn, user_id, performance).await?;
    Ok(())
}
