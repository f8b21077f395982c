use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::IntoResponse,
    routing::any,
    Json, Router,
};
use locker_api::{api_router, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Backend stand-in that echoes what it received.
async fn echo(request: axum::extract::Request) -> impl IntoResponse {
    let authorization = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let method = request.method().to_string();
    let uri = request.uri().to_string();
    let body = axum::body::to_bytes(request.into_body(), usize::MAX)
        .await
        .unwrap_or_default();
    let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    if uri.starts_with("/api/documents/404") {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"message": "Document not found with id: 404"})),
        );
    }

    (
        StatusCode::OK,
        Json(json!({
            "method": method,
            "uri": uri,
            "authorization": authorization,
            "body": body,
        })),
    )
}

async fn spawn_backend() -> String {
    let app = Router::new().route("/*path", any(echo));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let router = api_router(AppState::new("http://127.0.0.1:9").unwrap());
    let response = router
        .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({"status": "ok"}));
}

#[tokio::test]
async fn forwards_method_query_and_authorization() {
    let backend = spawn_backend().await;
    let router = api_router(AppState::new(&backend).unwrap());

    let response = router
        .oneshot(
            Request::get("/api/documents/search?name=pan")
                .header(header::AUTHORIZATION, "Bearer tok-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let echoed = json_body(response).await;
    assert_eq!(echoed["method"], "GET");
    assert_eq!(echoed["uri"], "/api/documents/search?name=pan");
    assert_eq!(echoed["authorization"], "Bearer tok-123");
}

#[tokio::test]
async fn forwards_json_body() {
    let backend = spawn_backend().await;
    let router = api_router(AppState::new(&backend).unwrap());

    let response = router
        .oneshot(
            Request::builder()
                .method(Method::PUT)
                .uri("/api/documents/4")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"name":"Passport","type":"ID"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    let echoed = json_body(response).await;
    assert_eq!(echoed["method"], "PUT");
    assert_eq!(echoed["authorization"], Value::Null);
    assert_eq!(echoed["body"]["name"], "Passport");
}

#[tokio::test]
async fn passes_upstream_errors_through() {
    let backend = spawn_backend().await;
    let router = api_router(AppState::new(&backend).unwrap());

    let response = router
        .oneshot(Request::get("/api/documents/404").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(response).await["message"],
        "Document not found with id: 404"
    );
}

#[tokio::test]
async fn unreachable_backend_is_bad_gateway() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let router = api_router(AppState::new(&format!("http://{addr}")).unwrap());
    let response = router
        .oneshot(Request::get("/api/documents/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = json_body(response).await;
    assert_eq!(body["success"], false);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Backend unavailable"));
}
