//! Inbound HTTP contract

use actix_web::{test, web, App};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use emotrack_relay::server::{routes, state::AppState};
use emotrack_relay::{RelayClient, RelayConfig};

const GENERATE_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

fn state_for(config: RelayConfig) -> web::Data<AppState> {
    web::Data::new(AppState::new(RelayClient::new(config).unwrap()))
}

macro_rules! init_app {
    ($config:expr) => {
        test::init_service(App::new().app_data(state_for($config)).configure(routes)).await
    };
}

#[actix_web::test]
async fn ping_reports_ok() {
    let app = init_app!(RelayConfig::new("test-key"));

    let req = test::TestRequest::get().uri("/api/ping").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["ok"], true);
    assert!(body["time"].is_string());
}

#[actix_web::test]
async fn chat_returns_reply() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": "You are not alone." }] } }]
        })))
        .mount(&upstream)
        .await;

    let app = init_app!(RelayConfig::new("test-key")
        .with_base_url(upstream.uri())
        .with_timeout(2));

    let req = test::TestRequest::post()
        .uri("/api/chat")
        .set_json(json!({ "messages": [{ "role": "user", "content": "I feel anxious" }] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["reply"], "You are not alone.");
}

#[actix_web::test]
async fn empty_messages_is_bad_request() {
    let app = init_app!(RelayConfig::new("test-key"));

    let req = test::TestRequest::post()
        .uri("/api/chat")
        .set_json(json!({ "messages": [] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("non-empty"));
}

#[actix_web::test]
async fn missing_messages_field_is_bad_request() {
    let app = init_app!(RelayConfig::new("test-key"));

    let req = test::TestRequest::post()
        .uri("/api/chat")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
}

#[actix_web::test]
async fn malformed_json_is_bad_request() {
    let app = init_app!(RelayConfig::new("test-key"));

    let req = test::TestRequest::post()
        .uri("/api/chat")
        .insert_header(("content-type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Malformed JSON in request body");
}

#[actix_web::test]
async fn missing_credential_is_server_error() {
    let app = init_app!(RelayConfig::new(""));

    let req = test::TestRequest::post()
        .uri("/api/chat")
        .set_json(json!({ "messages": [{ "role": "user", "content": "hi" }] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 500);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("GEMINI_API_KEY"));
}

#[actix_web::test]
async fn upstream_failure_is_bad_gateway_with_details() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("server busy"))
        .mount(&upstream)
        .await;

    let app = init_app!(RelayConfig::new("test-key")
        .with_base_url(upstream.uri())
        .with_timeout(2));

    let req = test::TestRequest::post()
        .uri("/api/chat")
        .set_json(json!({ "messages": [{ "role": "user", "content": "hi" }] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 502);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], 500);
    assert!(body["details"].as_str().unwrap().contains("server busy"));
}

#[actix_web::test]
async fn unknown_api_route_is_json_404() {
    let app = init_app!(RelayConfig::new("test-key"));

    let req = test::TestRequest::get().uri("/api/nope").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "API route not found");
    assert_eq!(body["path"], "/api/nope");
}
