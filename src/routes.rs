use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::error;

use crate::languages::LanguageNames;
use crate::state::AppState;
use crate::translate::{TranslateRequest, TranslateResponse};

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // WebSocket
        .route("/client-ws", get(websocket_handler))

        // Health check
        .route("/api/health", get(health_check))

        // REST API routes
        .route("/api/languages", get(get_languages))
        .route("/api/translate", post(translate_text))
}

/// Full application with middleware and state attached
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(create_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

async fn websocket_handler(
    ws: axum::extract::ws::WebSocketUpgrade,
    State(state): State<AppState>,
) -> axum::response::Response {
    crate::websocket::websocket_handler(ws, State(state)).await
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn get_languages(
    State(state): State<AppState>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let codes = state.translator.supported_languages().await.map_err(|e| {
        error!("Failed to fetch supported languages: {}", e);
        (
            StatusCode::BAD_GATEWAY,
            Json(json!({ "error": format!("Failed to fetch supported languages: {}", e) })),
        )
    })?;

    let names = LanguageNames::from_codes(&codes);
    Ok(Json(json!({ "languages": names.entries() })))
}

async fn translate_text(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, (StatusCode, Json<Value>)> {
    if request.text.is_empty() || request.source.is_empty() || request.target.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "text, source and target are required" })),
        ));
    }

    let response = state.translator.translate(&request).await.map_err(|e| {
        error!("Translation failed: {}", e);
        (
            StatusCode::BAD_GATEWAY,
            Json(json!({ "error": format!("Translation failed: {}", e) })),
        )
    })?;

    Ok(Json(response))
}
