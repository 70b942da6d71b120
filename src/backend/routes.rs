use axum::{body::Bytes, routing::post, Json, Router};
use serde_json::Value;
use tower_http::cors::CorsLayer;
use crate::api::{progress_log_line, story_log_line, Ack, PROGRESS_PATH, STORY_PATH};
use super::config::ServerConfig;
use super::error::{BackendError, Result};

/// Read whatever JSON arrived; anything unreadable counts as no body
fn lenient(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap_or_else(|e| {
        log::debug!("Ignoring unreadable body: {}", e);
        Value::Null
    })
}

async fn progress_handler(body: Bytes) -> Json<Ack> {
    log::info!("{}", progress_log_line(&lenient(&body)));
    Json(Ack::ok())
}

async fn story_handler(body: Bytes) -> Json<Ack> {
    log::info!("{}", story_log_line(&lenient(&body)));
    Json(Ack::ok())
}

pub fn router() -> Router {
    Router::new()
        .route(PROGRESS_PATH, post(progress_handler))
        .route(STORY_PATH, post(story_handler))
        .layer(CorsLayer::permissive())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Magic Backend shutting down");
}

/// Bind and serve until Ctrl-C
pub async fn run_server(config: ServerConfig) -> Result<()> {
    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| BackendError::Bind { addr, source })?;

    log::info!("Magic Backend running on port {}...", addr.port());
    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use tower::ServiceExt;

    async fn post_json(path: &str, body: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_progress_acknowledged() {
        let (status, body) = post_json(
            "/api/progress",
            r#"{"userId":"demo_user","magicMeter":50,"currentRealm":"ocean"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({ "success": true }));
    }

    #[tokio::test]
    async fn test_story_with_extra_fields() {
        let (status, body) = post_json(
            "/api/story",
            r#"{"userId":"demo_user","mood":"Brave","generatedStory":"...","wand":"elder","tags":[1,2]}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({ "success": true }));
    }

    #[tokio::test]
    async fn test_empty_and_malformed_bodies_accepted() {
        let (status, _) = post_json("/api/story", "{}").await;
        assert_eq!(status, StatusCode::OK);
        let (status, body) = post_json("/api/progress", "not json at all").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/missing")
            .body(Body::empty())
            .unwrap();
        let response = router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/progress")
            .header(header::ORIGIN, "http://localhost:5173")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();
        let response = router().oneshot(request).await.unwrap();
        assert!(response.status().is_success());
        assert!(response.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[test]
    fn test_lenient_parse() {
        assert_eq!(lenient(b"not json"), Value::Null);
        let body = lenient(br#"{"userId":"u","magicMeter":"lots"}"#);
        assert_eq!(progress_log_line(&body), "Saved progress for u: Meter at lots in realm undefined");
    }

    #[tokio::test]
    async fn test_wrong_typed_field_acknowledged() {
        let (status, body) = post_json("/api/progress", r#"{"userId":"u","magicMeter":"lots","currentRealm":null}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({ "success": true }));
    }
}
