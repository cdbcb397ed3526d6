// src/server.rs
// =============================================================================
// HTTP API for the `serve` subcommand.
//
// Routes:
// - GET  /health     -> { "status": "ok" }
// - POST /api/audit  -> body { "url": "...", "extendedRules": false }
//                       answers with the AuditResponse envelope
//
// Each request runs its own independent audit; the only thing handlers
// share is the read-only base AuditConfig.
// =============================================================================

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::config::AuditConfig;
use crate::error::AuditError;
use crate::pipeline::audit_site;
use crate::response::AuditResponse;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditRequest {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub extended_rules: bool,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub fn router(config: AuditConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/audit", post(audit))
        .with_state(Arc::new(config))
}

/// Binds to 0.0.0.0:<port> and serves until the process is stopped
pub async fn serve(port: u16, config: AuditConfig) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    log::info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(config)).await?;
    Ok(())
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn audit(
    State(config): State<Arc<AuditConfig>>,
    payload: Result<Json<AuditRequest>, JsonRejection>,
) -> (StatusCode, Json<AuditResponse>) {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            log::debug!("Rejected audit request body: {}", rejection);
            return respond(AuditResponse::failed(&AuditError::InvalidUrl(
                "Request body must be JSON with a \"url\" field".to_string(),
            )));
        }
    };

    let Some(url) = request.url.filter(|u| !u.trim().is_empty()) else {
        return respond(AuditResponse::failed(&AuditError::InvalidUrl(
            "URL is required".to_string(),
        )));
    };

    let config = config.as_ref().clone().with_extended_rules(request.extended_rules);
    let result = audit_site(&url, &config).await;
    if let Err(e) = &result {
        if e.is_client_error() {
            log::info!("Rejected {}: {}", url, e);
        } else {
            log::error!("Audit of {} failed: {}", url, e);
        }
    }

    respond(AuditResponse::from_result(result))
}

fn respond(response: AuditResponse) -> (StatusCode, Json<AuditResponse>) {
    let status =
        StatusCode::from_u16(response.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    async fn post_json(body: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/api/audit")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = router(AuditConfig::default()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = router(AuditConfig::default()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_url_is_bad_request() {
        let (status, json) = post_json("{}").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "URL is required");
    }

    #[tokio::test]
    async fn test_malformed_url_is_bad_request() {
        let (status, json) = post_json(r#"{"url": "not a url"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    async fn test_invalid_json_is_bad_request() {
        let (status, json) = post_json("url=example.com").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
    }
}
