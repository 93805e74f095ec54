mod common;

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt;

use common::{FakeApi, LANGUAGES};
use selection_translator::config_manager::{Config, SystemConfig, TranslatorConfig};
use selection_translator::routes::create_app;
use selection_translator::state::AppState;

fn state(api: FakeApi) -> AppState {
    let config = Config {
        context: None,
        system_config: SystemConfig::default(),
        translator_config: TranslatorConfig {
            api_key: "k".to_string(),
            ..Default::default()
        },
    };
    AppState::with_translator(config, Arc::new(api))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let app = create_app(state(FakeApi::new(Some(LANGUAGES), Some("x"))));

    let response = app
        .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "ok");
}

#[tokio::test]
async fn languages_lists_resolved_names() {
    let app = create_app(state(FakeApi::new(Some(&["en", "zh-CN", "xx"][..]), Some("x"))));

    let response = app
        .oneshot(Request::get("/api/languages").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"languages": [
            {"code": "en", "name": "English"},
            {"code": "zh-CN", "name": "Mandarin Chinese"}
        ]})
    );
}

#[tokio::test]
async fn languages_failure_is_bad_gateway() {
    let app = create_app(state(FakeApi::new(None, Some("x"))));

    let response = app
        .oneshot(Request::get("/api/languages").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("403"));
}

#[tokio::test]
async fn translate_returns_translated_text() {
    let app = create_app(state(FakeApi::new(Some(LANGUAGES), Some("Hallo"))));

    let request = Request::post("/api/translate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({"text": "Hello", "source": "en", "target": "de"}).to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"translated_text": "Hallo"}));
}

#[tokio::test]
async fn translate_rejects_empty_text() {
    let app = create_app(state(FakeApi::new(Some(LANGUAGES), Some("Hallo"))));

    let request = Request::post("/api/translate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({"text": "", "source": "en", "target": "de"}).to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn translate_failure_is_bad_gateway() {
    let app = create_app(state(FakeApi::new(Some(LANGUAGES), None)));

    let request = Request::post("/api/translate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({"text": "Hello", "source": "en", "target": "de"}).to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}
