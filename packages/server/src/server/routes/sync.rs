use axum::{
    extract::Extension,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::domains::sync::effects::run_sync;
use crate::server::app::AxumAppState;

/// Whether the request carries the expected `Bearer {secret}` header.
///
/// With no secret configured every request is rejected, so a deployment
/// that forgets CRON_SECRET fails closed.
fn is_authorized(headers: &HeaderMap, cron_secret: Option<&str>) -> bool {
    let Some(secret) = cron_secret else {
        return false;
    };
    let presented = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());
    presented == Some(format!("Bearer {}", secret).as_str())
}

/// Sync endpoint - runs a full board sync across all active companies.
///
/// Triggered by an external scheduler. Outside development the caller must
/// present the shared bearer secret. The response is the per-company
/// report; a company failure lands in the report, never in the status code.
pub async fn sync_handler(
    Extension(state): Extension<AxumAppState>,
    headers: HeaderMap,
) -> Response {
    let deps = &state.server_deps;

    if deps.config.require_sync_auth()
        && !is_authorized(&headers, deps.config.cron_secret.as_deref())
    {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Unauthorized" })),
        )
            .into_response();
    }

    match run_sync(deps).await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => {
            error!(error = %e, "Sync run failed before dispatch");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, value.parse().unwrap());
        headers
    }

    #[test]
    fn exact_bearer_token_is_authorized() {
        assert!(is_authorized(
            &headers_with("Bearer topsecret"),
            Some("topsecret")
        ));
    }

    #[test]
    fn wrong_or_missing_token_is_rejected() {
        assert!(!is_authorized(
            &headers_with("Bearer other"),
            Some("topsecret")
        ));
        assert!(!is_authorized(&HeaderMap::new(), Some("topsecret")));
        assert!(!is_authorized(
            &headers_with("topsecret"),
            Some("topsecret")
        ));
    }

    #[test]
    fn missing_secret_fails_closed() {
        assert!(!is_authorized(&headers_with("Bearer anything"), None));
    }
}
