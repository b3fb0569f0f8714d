use axum::Router;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// `/` and `/favicon.ico` get their own files; everything else comes from
/// the static directory, at the root or under the configured prefix.
pub fn build_router(config: &ServerConfig) -> Router {
    let router = Router::new()
        .route_service("/", ServeFile::new(config.index_path()))
        .route_service("/favicon.ico", ServeFile::new(config.favicon_path()));

    let static_files = ServeDir::new(&config.static_dir);
    let router = match config.mount_prefix() {
        Some(prefix) => router.nest_service(prefix, static_files),
        None => router.fallback_service(static_files),
    };

    router.layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use std::fs;
    use std::path::Path;
    use tower::ServiceExt;

    fn static_root() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<h3>shell</h3>").unwrap();
        fs::write(dir.path().join("favicon.ico"), [0u8, 0, 1, 0]).unwrap();
        fs::write(dir.path().join("app.js"), "console.log('app')").unwrap();
        dir
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, body.to_vec())
    }

    fn router_for(dir: &Path) -> Router {
        build_router(&ServerConfig::new(dir))
    }

    #[tokio::test]
    async fn root_serves_index() {
        let dir = static_root();
        let (status, body) = get(router_for(dir.path()), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"<h3>shell</h3>");
    }

    #[tokio::test]
    async fn favicon_is_served() {
        let dir = static_root();
        let (status, body) = get(router_for(dir.path()), "/favicon.ico").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, vec![0u8, 0, 1, 0]);
    }

    #[tokio::test]
    async fn static_assets_from_root() {
        let dir = static_root();
        let (status, body) = get(router_for(dir.path()), "/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"console.log('app')");
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let dir = static_root();
        let (status, _) = get(router_for(dir.path()), "/missing.css").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn missing_favicon_is_not_found() {
        let dir = static_root();
        fs::remove_file(dir.path().join("favicon.ico")).unwrap();
        let (status, _) = get(router_for(dir.path()), "/favicon.ico").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn prefixed_static_dir() {
        let dir = static_root();
        let mut config = ServerConfig::new(dir.path());
        config.static_prefix = "/public".to_string();
        let app = build_router(&config);

        let (status, body) = get(app.clone(), "/public/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"console.log('app')");

        let (status, _) = get(app.clone(), "/app.js").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = get(app, "/").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn index_outside_static_dir() {
        let dir = static_root();
        let shell_dir = tempfile::tempdir().unwrap();
        let shell = shell_dir.path().join("shell.html");
        fs::write(&shell, "<p>custom</p>").unwrap();

        let mut config = ServerConfig::new(dir.path());
        config.index = Some(shell);
        let (status, body) = get(build_router(&config), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"<p>custom</p>");
    }
}
