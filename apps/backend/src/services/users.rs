use sea_orm::ConnectionTrait;
use tracing::info;

use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};
use crate::logging::pii::Redacted;
use crate::repos::users::{self as users_repo, User};

/// User registration.
#[derive(Debug, Default, Clone, Copy)]
pub struct UserService;

impl UserService {
    pub fn new() -> Self {
        Self
    }

    /// Register a user; the name must not be taken.
    pub async fn register<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        name: &str,
        email: Option<String>,
    ) -> Result<User, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::Other("UserName".into()),
                "user_name must not be blank",
            )
            .into());
        }
        let email = email.filter(|e| !e.trim().is_empty());

        if users_repo::find_user_by_name(conn, name).await?.is_some() {
            return Err(DomainError::conflict(
                ConflictKind::UserNameTaken,
                "A User with that name already exists!",
            )
            .into());
        }

        // The unique index still backs this up if two registrations race.
        let user = users_repo::create_user(conn, name, email).await?;
        info!(
            user_id = user.id,
            user_name = %user.name,
            email = %Redacted(user.email.as_deref().unwrap_or("")),
            "User registered"
        );
        Ok(user)
    }
}
