use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem;
use hangman_backend::protocol::views::{MessageView, UsersView};
use hangman_backend::AppError;
use serde_json::json;

use crate::support::app_builder::create_test_app;
use crate::support::build_test_state;

#[actix_web::test]
async fn create_user_returns_message() -> Result<(), AppError> {
    let app = create_test_app(build_test_state().await?).await;

    let req = test::TestRequest::post()
        .uri("/api/user")
        .set_json(json!({"user_name": "alice", "email": "alice@example.test"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("x-trace-id"));

    let body: MessageView = test::read_body_json(resp).await;
    assert_eq!(body.message, "User alice created!");
    Ok(())
}

#[actix_web::test]
async fn duplicate_user_is_conflict() -> Result<(), AppError> {
    let app = create_test_app(build_test_state().await?).await;

    for expected in [StatusCode::OK, StatusCode::CONFLICT] {
        let req = test::TestRequest::post()
            .uri("/api/user")
            .set_json(json!({"user_name": "bob"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        if expected == StatusCode::OK {
            assert_eq!(resp.status(), expected);
        } else {
            let problem = assert_problem(resp, expected, "USER_NAME_TAKEN").await;
            assert_eq!(problem.detail, "A User with that name already exists!");
        }
    }
    Ok(())
}

#[actix_web::test]
async fn rankings_without_users_is_not_found() -> Result<(), AppError> {
    let app = create_test_app(build_test_state().await?).await;

    let req = test::TestRequest::get().uri("/api/user/rankings").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, StatusCode::NOT_FOUND, "NO_USERS").await;
    Ok(())
}

#[actix_web::test]
async fn rankings_list_users() -> Result<(), AppError> {
    let app = create_test_app(build_test_state().await?).await;

    let req = test::TestRequest::post()
        .uri("/api/user")
        .set_json(json!({"user_name": "carol"}))
        .to_request();
    assert!(test::call_service(&app, req).await.status().is_success());

    let req = test::TestRequest::get().uri("/api/user/rankings").to_request();
    let body: UsersView = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.users.len(), 1);
    assert_eq!(body.users[0].name, "carol");
    assert_eq!(body.users[0].performance, 0.0);
    Ok(())
}
