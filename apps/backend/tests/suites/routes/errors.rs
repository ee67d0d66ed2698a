use actix_web::http::StatusCode;
use actix_web::{test, web, App, HttpResponse};
use backend_test_support::problem_details::assert_problem;
use hangman_backend::error::AppError;
use hangman_backend::middleware::{RequestTrace, StructuredLogger, TraceSpan};

use crate::support::app_builder::create_test_app;
use crate::support::build_test_state;

async fn config_failure() -> Result<HttpResponse, AppError> {
    Err(AppError::config("vocabulary is empty"))
}

async fn unavailable() -> Result<HttpResponse, AppError> {
    Err(AppError::db_unavailable())
}

#[actix_web::test]
async fn malformed_json_is_bad_request() -> Result<(), AppError> {
    let app = create_test_app(build_test_state().await?).await;

    let req = test::TestRequest::post()
        .uri("/api/user")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"user_name\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, StatusCode::BAD_REQUEST, "BAD_REQUEST").await;
    Ok(())
}

#[actix_web::test]
async fn missing_field_is_bad_request() -> Result<(), AppError> {
    let app = create_test_app(build_test_state().await?).await;

    let req = test::TestRequest::put()
        .uri(&format!(
            "/api/game/{}",
            hangman_backend::GameHandle::encode(1)
        ))
        .set_json(serde_json::json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, StatusCode::BAD_REQUEST, "BAD_REQUEST").await;
    Ok(())
}

#[actix_web::test]
async fn infrastructure_errors_map_to_5xx() {
    let app = test::init_service(
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .route("/config", web::get().to(config_failure))
            .route("/unavailable", web::get().to(unavailable)),
    )
    .await;

    let req = test::TestRequest::get().uri("/config").to_request();
    let resp = test::call_service(&app, req).await;
    let problem = assert_problem(resp, StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR").await;
    assert_eq!(problem.type_, "https://hangman.local/errors/CONFIG_ERROR");

    let req = test::TestRequest::get().uri("/unavailable").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, StatusCode::SERVICE_UNAVAILABLE, "DB_UNAVAILABLE").await;
}

