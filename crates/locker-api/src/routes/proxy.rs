use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderName},
    response::Response,
    routing::any,
    Router,
};
use tracing::{debug, warn};

use crate::error::ProxyError;
use crate::state::AppState;

/// Request headers passed through to the backend.
const FORWARDED_HEADERS: [HeaderName; 3] = [header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT];

const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api", any(forward))
        .route("/api/*rest", any(forward))
}

/// Replays the request against the backend and hands its answer back
/// unchanged (status, content type, body).
async fn forward(State(state): State<AppState>, request: Request) -> Result<Response, ProxyError> {
    let (parts, body) = request.into_parts();
    let pathAndQuery = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/api");
    let target = state.backend.join(pathAndQuery)?;

    let payload = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| ProxyError::Body(e.to_string()))?;

    let mut upstream = state.client.request(parts.method.clone(), target.clone());
    for name in FORWARDED_HEADERS.iter() {
        if let Some(value) = parts.headers.get(name) {
            upstream = upstream.header(name.clone(), value.clone());
        }
    }
    if !payload.is_empty() {
        upstream = upstream.body(payload);
    }

    let upstreamResponse = upstream.send().await.map_err(|e| {
        warn!("backend request {} {target} failed: {e}", parts.method);
        ProxyError::Upstream(e)
    })?;

    let status = upstreamResponse.status();
    let contentType = upstreamResponse.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = upstreamResponse.bytes().await.map_err(ProxyError::Upstream)?;
    debug!(method = %parts.method, %target, %status, "forwarded");

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    if let Some(contentType) = contentType {
        response.headers_mut().insert(header::CONTENT_TYPE, contentType);
    }
    Ok(response)
}
