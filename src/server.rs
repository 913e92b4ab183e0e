use crate::error::TranslateError;
use crate::translate::{Transport, TranslationRequest, Translator};

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use bytes::Bytes;
use reqwest::Url;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, error};

/// Process-wide, read-only state shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub name: String,
    pub api_key: String,
    pub endpoint: Url,
    pub transport: Arc<dyn Transport>,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/translate", post(handle_translate))
        .route("/health", get(handle_health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn handle_translate(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    // An empty body is the caller's mistake; anything else that fails to parse is ours.
    let req = match decode_request(&body) {
        None => return StatusCode::BAD_REQUEST.into_response(),
        Some(Ok(r)) => r,
        Some(Err(e)) => {
            error!(error = %e, "Error decoding JSON");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let translator = Translator::new(&state.endpoint, &state.api_key, Arc::clone(&state.transport));

    let translation = match translator.translate(&req.target, &req.text).await {
        Ok(t) => t,
        Err(e) => {
            let status = status_for(&e);
            error!(error = %e, status = status.as_u16(), "Translate error");
            return status.into_response();
        }
    };

    debug!(target_lang = %req.target, detected = %translation.detected_language, "Translated");

    match serde_json::to_vec(&translation) {
        Ok(json) => Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json))
            .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response()),
        Err(e) => {
            error!(error = %e, "Error encoding JSON");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Reads the first JSON value in `body`; anything after it is ignored.
/// `None` means the body held no value at all.
fn decode_request(body: &[u8]) -> Option<serde_json::Result<TranslationRequest>> {
    serde_json::Deserializer::from_slice(body)
        .into_iter::<TranslationRequest>()
        .next()
}

/// Only a provider rejection is reported as the caller's fault.
fn status_for(err: &TranslateError) -> StatusCode {
    match err {
        TranslateError::BadStatus(_) => StatusCode::BAD_REQUEST,
        TranslateError::Transport(_)
        | TranslateError::Decode(_)
        | TranslateError::EmptyTranslations => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

async fn handle_health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": state.name,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
