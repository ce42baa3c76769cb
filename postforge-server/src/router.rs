use axum::{
    extract::DefaultBodyLimit, http::StatusCode, response::IntoResponse, routing::get, Router,
};
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use postforge_core::proxy::middleware::cors_layer;
use postforge_core::proxy::{build_proxy_router, AppState};
use postforge_types::ServerConfig;

/// Comfortably above a 40,000-character prompt in any encoding.
const BODY_LIMIT_BYTES: usize = 1024 * 1024;

pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
        .route("/version", get(version_info));

    let mut app = build_proxy_router(state).merge(public_routes);

    // SPA fallback: unknown paths serve index.html so the frontend router
    // can take over.
    if let Some(static_dir) = config.static_dir.as_deref() {
        let index_path = format!("{}/index.html", static_dir);
        let spa_service = ServeDir::new(static_dir)
            .append_index_html_on_directories(true)
            .fallback(ServeFile::new(&index_path));
        app = app.fallback_service(spa_service);
    }

    app.layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.allowed_origins))
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, axum::Json(serde_json::json!({"status": "ok"})))
}

async fn version_info() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({
            "version": option_env!("GIT_VERSION").unwrap_or("dev"),
            "build_time": option_env!("BUILD_TIME").unwrap_or("unknown"),
            "cargo_version": env!("CARGO_PKG_VERSION"),
        })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::SET_COOKIE;
    use axum_test::TestServer;
    use postforge_core::upstream::GenerationBackend;
    use postforge_core::{SystemClock, UpstreamFailure};
    use postforge_types::GenerationConfig;
    use std::sync::Arc;

    struct EchoBackend;

    #[async_trait::async_trait]
    impl GenerationBackend for EchoBackend {
        async fn generate(
            &self,
            prompt: &str,
            _config: &GenerationConfig,
        ) -> Result<String, UpstreamFailure> {
            Ok(format!("echo: {}", prompt))
        }
    }

    fn test_server(config: &ServerConfig) -> TestServer {
        let state = AppState::new(Arc::new(EchoBackend), Arc::new(SystemClock));
        TestServer::new(build_router(state, config)).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        let server = test_server(&ServerConfig::default());
        for path in ["/health", "/healthz"] {
            let response = server.get(path).await;
            assert_eq!(response.status_code(), StatusCode::OK);
            assert_eq!(response.json::<serde_json::Value>()["status"], "ok");
        }
    }

    #[tokio::test]
    async fn test_version_endpoint() {
        let server = test_server(&ServerConfig::default());
        let body = server.get("/version").await.json::<serde_json::Value>();
        assert_eq!(body["cargo_version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_generate_is_mounted() {
        let server = test_server(&ServerConfig::default());
        let response = server
            .post("/api/generate")
            .json(&serde_json::json!({"prompt": "hello world", "mode": "generate"}))
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["content"], "echo: hello world");
        assert_eq!(body["remainingRequests"], 4);
        assert!(response.headers().get(SET_COOKIE).is_some());
    }

    #[tokio::test]
    async fn test_unknown_path_without_static_dir() {
        let server = test_server(&ServerConfig::default());
        assert_eq!(server.get("/nope").await.status_code(), StatusCode::NOT_FOUND);
    }
}
