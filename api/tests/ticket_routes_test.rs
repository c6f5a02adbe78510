//! Integration tests for the citizen ticket endpoints

mod common;

use actix_web::{http::StatusCode, test};
use chrono::Duration;
use serde_json::Value;
use uuid::Uuid;

use common::{bearer, ticket_body, TestContext};

#[actix_web::test]
async fn test_create_requires_token() {
    let ctx = TestContext::new();
    let app = test::init_service(ctx.app()).await;

    let req = test::TestRequest::post()
        .uri("/tickets")
        .set_json(ticket_body("Buraco enorme na via"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(ctx.tickets.len().await, 0);
}

#[actix_web::test]
async fn test_create_rejects_garbage_token() {
    let ctx = TestContext::new();
    let app = test::init_service(ctx.app()).await;

    let req = test::TestRequest::post()
        .uri("/tickets")
        .insert_header(bearer("not.a.jwt"))
        .set_json(ticket_body("Buraco enorme na via"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_create_returns_protocol() {
    let ctx = TestContext::new();
    let (citizen, token) = ctx.citizen_token("Maria Silva", "maria@example.com").await;
    let app = test::init_service(ctx.app()).await;

    let req = test::TestRequest::post()
        .uri("/tickets")
        .insert_header(bearer(&token))
        .set_json(serde_json::json!({
            "category": "Iluminação",
            "description": "Poste apagado há uma semana",
            "address": "Av. Central, 500",
            "photoUrl": "https://example.com/poste.jpg"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Chamado registrado com sucesso");

    let protocol: Uuid = body["protocol"].as_str().unwrap().parse().unwrap();
    let ticket = ctx.state.ticket_service.get_ticket(&protocol.to_string()).await.unwrap();
    assert_eq!(ticket.user_id, citizen.user_id);
    assert_eq!(ticket.photo_url.as_deref(), Some("https://example.com/poste.jpg"));
}

#[actix_web::test]
async fn test_description_minimum_length() {
    let ctx = TestContext::new();
    let (_, token) = ctx.citizen_token("Maria Silva", "maria@example.com").await;
    let app = test::init_service(ctx.app()).await;

    let too_short = test::TestRequest::post()
        .uri("/tickets")
        .insert_header(bearer(&token))
        .set_json(ticket_body("123456789"))
        .to_request();
    let resp = test::call_service(&app, too_short).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Descrição deve ter pelo menos 10 caracteres");

    let just_enough = test::TestRequest::post()
        .uri("/tickets")
        .insert_header(bearer(&token))
        .set_json(ticket_body("1234567890"))
        .to_request();
    let resp = test::call_service(&app, just_enough).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    assert_eq!(ctx.tickets.len().await, 1);
}

#[actix_web::test]
async fn test_list_own_only_shows_callers_tickets() {
    let ctx = TestContext::new();
    let (maria, maria_token) = ctx.citizen_token("Maria Silva", "maria@example.com").await;
    let (joao, joao_token) = ctx.citizen_token("João Souza", "joao@example.com").await;
    let app = test::init_service(ctx.app()).await;

    for (token, description) in [
        (&maria_token, "Buraco na calçada da escola"),
        (&maria_token, "Semáforo piscando sem parar"),
        (&joao_token, "Lixo acumulado na praça"),
    ] {
        let req = test::TestRequest::post()
            .uri("/tickets")
            .insert_header(bearer(token))
            .set_json(ticket_body(description))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get()
        .uri("/tickets")
        .insert_header(bearer(&maria_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let tickets = body["data"].as_array().unwrap();
    assert_eq!(tickets.len(), 2);
    assert!(tickets
        .iter()
        .all(|t| t["userId"] == maria.user_id.to_string()));

    let req = test::TestRequest::get()
        .uri("/tickets")
        .insert_header(bearer(&joao_token))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let tickets = body["data"].as_array().unwrap();
    assert_eq!(tickets.len(), 1);
    assert_eq!(tickets[0]["userId"], joao.user_id.to_string());
    assert_eq!(tickets[0]["status"], "PENDENTE");
}

#[actix_web::test]
async fn test_lookup_is_public() {
    let ctx = TestContext::new();
    let (citizen, _) = ctx.citizen_token("Maria Silva", "maria@example.com").await;
    let ticket = ctx
        .state
        .ticket_service
        .create_ticket(&citizen, ticket_body_input())
        .await
        .unwrap();
    let app = test::init_service(ctx.app()).await;

    let req = test::TestRequest::get()
        .uri(&format!("/tickets/{}", ticket.id))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["id"], ticket.id.to_string());
    assert_eq!(body["data"]["status"], "PENDENTE");
}

#[actix_web::test]
async fn test_lookup_unknown_ticket() {
    let ctx = TestContext::new();
    let app = test::init_service(ctx.app()).await;

    for id in [Uuid::new_v4().to_string(), "nao-existe".to_string()] {
        let req = test::TestRequest::get()
            .uri(&format!("/tickets/{}", id))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Chamado não encontrado");
    }
}

fn ticket_body_input() -> gt_core::domain::entities::ticket::NewTicket {
    gt_core::domain::entities::ticket::NewTicket::new(
        "Buraco",
        "Cratera no meio da rua",
        "Rua das Flores, 123",
        None,
    )
}

#[actix_web::test]
async fn test_token_validity_follows_service_clock() {
    let ctx = TestContext::new();
    ctx.clock.advance(Duration::seconds(120));
    let (_, token) = ctx.citizen_token("Maria Silva", "maria@example.com").await;
    let app = test::init_service(ctx.app()).await;

    let req = test::TestRequest::get()
        .uri("/tickets")
        .insert_header(bearer(&token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    ctx.clock.advance(Duration::seconds(7201));
    let req = test::TestRequest::get()
        .uri("/tickets")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].as_str().unwrap().contains("token expirado"));
}
