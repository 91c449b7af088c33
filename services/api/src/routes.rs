use crate::infra::AppState;
use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::http::{header, Method, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use listing_quality::error::AppError;
use listing_quality::{ListingData, ListingReport};
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AnalyzeRequest {
    #[serde(default)]
    pub(crate) url: Option<String>,
}

pub(crate) fn router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/analyze", post(analyze_endpoint))
        .route("/api/score", post(score_endpoint))
        .layer(cors_layer())
}

/// Any origin may call the API from a browser.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready", "vision": state.analyzer.vision_enabled() })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// A missing or unreadable body counts as an empty URL.
pub(crate) async fn analyze_endpoint(
    Extension(state): Extension<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<ListingReport>, AppError> {
    let url = match payload {
        Ok(Json(request)) => request.url.unwrap_or_default(),
        Err(rejection) => {
            debug!(error = %rejection, "analyze request body rejected");
            String::new()
        }
    };
    let report = state.analyzer.analyze(&url).await?;
    Ok(Json(report))
}

pub(crate) async fn score_endpoint(
    Extension(state): Extension<AppState>,
    body: Bytes,
) -> Result<Json<ListingReport>, AppError> {
    let data: ListingData = serde_json::from_slice(&body)?;
    Ok(Json(state.analyzer.score(None, data)))
}
