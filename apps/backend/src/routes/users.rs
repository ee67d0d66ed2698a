//! User registration and rankings.

use actix_web::{web, HttpResponse};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::protocol::views::{CreateUserRequest, MessageView, UserView, UsersView};
use crate::services::stats::StatsAggregator;
use crate::services::users::UserService;
use crate::state::app_state::AppState;

/// POST /api/user
async fn create_user(
    body: ValidatedJson<CreateUserRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let CreateUserRequest { user_name, email } = body.into_inner();

    let user = with_txn(&app_state, move |txn| {
        Box::pin(async move { UserService::new().register(txn, &user_name, email).await })
    })
    .await?;

    Ok(HttpResponse::Ok().json(MessageView::new(format!("User {} created!", user.name))))
}

/// GET /api/user/rankings
///
/// Recomputes and persists every user's performance before ranking.
async fn rankings(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let users = with_txn(&app_state, |txn| {
        Box::pin(async move { StatsAggregator::new().rankings(txn).await })
    })
    .await?;

    Ok(HttpResponse::Ok().json(UsersView {
        users: users.into_iter().map(UserView::from).collect(),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::post().to(create_user)))
        .service(web::resource("/rankings").route(web::get().to(rankings)));
}
