//! Integration tests for the health probe, the API index, CORS and unknown routes

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::Value;

use common::{TestContext, CORS_ORIGIN};

#[actix_web::test]
async fn test_health_reports_database_state() {
    let ctx = TestContext::new();
    let app = test::init_service(ctx.app()).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "up");
    assert!(body["timestamp"].is_string());

    ctx.health.set_up(false);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["database"], "down");
    // Store details stay out of responses outside development
    assert!(!body["error"].as_str().unwrap().contains("connection refused"));
}

#[actix_web::test]
async fn test_index_lists_endpoints() {
    let ctx = TestContext::new();
    let app = test::init_service(ctx.app()).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["endpoints"]["auth"]["login"]["path"], "/auth/login");
    assert_eq!(
        body["endpoints"]["admin"]["update_status"]["path"],
        "/admin/tickets/{id}/status"
    );
}

#[actix_web::test]
async fn test_unknown_route_uses_error_envelope() {
    let ctx = TestContext::new();
    let app = test::init_service(ctx.app()).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/nao-existe").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[actix_web::test]
async fn test_cors_preflight_for_web_client() {
    let ctx = TestContext::new();
    let app = test::init_service(ctx.app()).await;

    let req = test::TestRequest::default()
        .method(actix_web::http::Method::OPTIONS)
        .uri("/tickets")
        .insert_header(("Origin", CORS_ORIGIN))
        .insert_header(("Access-Control-Request-Method", "POST"))
        .insert_header(("Access-Control-Request-Headers", "authorization,content-type"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    assert_eq!(
        resp.headers().get("access-control-allow-origin").unwrap(),
        CORS_ORIGIN
    );
    assert_eq!(
        resp.headers().get("access-control-allow-credentials").unwrap(),
        "true"
    );
}
