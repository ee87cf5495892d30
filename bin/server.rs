// Gold Stocks - Static Content Server
// Serves the visualization front end over plain HTTP GET so the browser gets
// proper MIME types and CORS instead of file:// restrictions. Three route
// shapes: / → index.html, /data/<file> → the data directory, anything else →
// the base directory. All file resolution (MIME inference, byte-exact bodies,
// 404s, safe path joining) is tower-http's ServeDir/ServeFile.

use axum::Router;
use std::path::{Path, PathBuf};
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};

const LISTEN_ADDR: &str = "127.0.0.1:5000";

/// Build the router over a base directory
///
/// `/data` is a registered route, so it takes precedence over the generic
/// catch-all fallback; without that ordering the data route would be
/// shadowed and meaningless.
fn build_router(base: &Path) -> Router {
    Router::new()
        .route_service("/", ServeFile::new(base.join("index.html")))
        .nest_service("/data", ServeDir::new(base.join("data")))
        .fallback_service(ServeDir::new(base))
        .layer(CorsLayer::permissive())
}

#[tokio::main]
async fn main() {
    println!("🌐 Gold Stocks - Static Content Server");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // Base directory: first CLI arg, default to the working directory
    let base: PathBuf = std::env::args().nth(1).unwrap_or_else(|| ".".to_string()).into();

    if !base.join("index.html").exists() {
        eprintln!("❌ No index.html under {:?}", base);
        eprintln!("   Run from the site directory, or pass it as the first argument.");
        std::process::exit(1);
    }
    println!("✓ Serving {:?}", base);

    let app = build_router(&base);

    let listener = tokio::net::TcpListener::bind(LISTEN_ADDR)
        .await
        .expect("Failed to bind to address");

    println!("\n🚀 Server running on http://{}", LISTEN_ADDR);
    println!("   Site: http://{}/", LISTEN_ADDR);
    println!("   Data: http://{}/data/<filename>", LISTEN_ADDR);
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use std::fs;
    use tower::util::ServiceExt;

    /// A site directory with an index, a nested asset, and a data file
    fn site_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<html>gold</html>").unwrap();

        fs::create_dir(dir.path().join("js")).unwrap();
        fs::write(dir.path().join("js/app.js"), "console.log('gold');").unwrap();

        fs::create_dir(dir.path().join("data")).unwrap();
        fs::write(dir.path().join("data/sample.csv"), "year,price\n2024,2600\n").unwrap();

        dir
    }

    async fn get(router: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_root_serves_index() {
        let dir = site_dir();
        let (status, body) = get(build_router(dir.path()), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"<html>gold</html>");
    }

    #[tokio::test]
    async fn test_generic_path_serves_nested_file() {
        let dir = site_dir();
        let (status, body) = get(build_router(dir.path()), "/js/app.js").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"console.log('gold');");
    }

    #[tokio::test]
    async fn test_data_route_returns_exact_bytes() {
        let dir = site_dir();
        let (status, body) = get(build_router(dir.path()), "/data/sample.csv").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"year,price\n2024,2600\n");
    }

    #[tokio::test]
    async fn test_data_route_takes_precedence_over_catch_all() {
        let dir = site_dir();
        // Same relative name exists under the base dir with different content;
        // /data/... must resolve against the data directory, not the base
        fs::write(dir.path().join("sample.csv"), "decoy\n").unwrap();

        let (status, body) = get(build_router(dir.path()), "/data/sample.csv").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"year,price\n2024,2600\n");
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let dir = site_dir();
        let (status, _) = get(build_router(dir.path()), "/nonexistent.file").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_missing_data_file_is_not_found() {
        let dir = site_dir();
        let (status, _) = get(build_router(dir.path()), "/data/missing.csv").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_traversal_cannot_escape_base() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("site");
        fs::create_dir(&base).unwrap();
        fs::write(base.join("index.html"), "<html>gold</html>").unwrap();
        fs::write(dir.path().join("secret.txt"), "secret").unwrap();

        let (status, body) = get(build_router(&base), "/../secret.txt").await;
        assert_ne!(status, StatusCode::OK);
        assert_ne!(body, b"secret");
    }
}
