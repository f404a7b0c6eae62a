//! HTTP routes.
//!
//! `robots.txt` and `sitemap.xml` are rendered once from the configuration;
//! everything else comes from the site root, with `index.html` answering
//! any path the client-side router owns.

use std::{path::Path, sync::Arc};

use axum::{
    Router,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::NaiveDate;
use mary_core::SiteConfig;
use mary_seo::{RobotsGenerator, SitemapGenerator};
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

/// Pre-rendered SEO files.
#[derive(Debug, Clone)]
pub struct SeoFiles {
    /// `None` when robots.txt is disabled.
    pub robots: Option<String>,
    pub sitemap: String,
}

impl SeoFiles {
    pub fn render(config: &SiteConfig, lastmod: NaiveDate) -> Self {
        Self {
            robots: RobotsGenerator::new(config.clone()).render(),
            sitemap: SitemapGenerator::new(config.clone()).generate(lastmod),
        }
    }
}

/// Create the site router.
pub fn create_router(site_root: &Path, config: &SiteConfig, lastmod: NaiveDate) -> Router {
    let files = Arc::new(SeoFiles::render(config, lastmod));
    let index = ServeFile::new(site_root.join("index.html"));

    Router::new()
        .route("/robots.txt", get(robots_handler))
        .route("/sitemap.xml", get(sitemap_handler))
        .fallback_service(ServeDir::new(site_root).fallback(index))
        .layer(TraceLayer::new_for_http())
        .with_state(files)
}

async fn robots_handler(State(files): State<Arc<SeoFiles>>) -> Response {
    match &files.robots {
        Some(body) => (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            body.clone(),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn sitemap_handler(State(files): State<Arc<SeoFiles>>) -> Response {
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        files.sitemap.clone(),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use tower::ServiceExt;

    use super::*;

    fn lastmod() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, 1).expect("valid date")
    }

    fn site_root() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(dir.path().join("index.html"), "<html>shell</html>").expect("write");
        std::fs::create_dir_all(dir.path().join("pkg")).expect("mkdir");
        std::fs::write(dir.path().join("pkg/mary.css"), "body{}").expect("write");
        dir
    }

    async fn get_text(router: Router, uri: &str) -> (StatusCode, Option<String>, String) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, content_type, String::from_utf8_lossy(&bytes).into_owned())
    }

    #[tokio::test]
    async fn test_robots_route() {
        let root = site_root();
        let router = create_router(root.path(), &SiteConfig::default(), lastmod());

        let (status, content_type, body) = get_text(router, "/robots.txt").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("text/plain; charset=utf-8"));
        assert!(body.contains("User-agent: GPTBot"));
    }

    #[tokio::test]
    async fn test_robots_disabled() {
        let root = site_root();
        let mut config = SiteConfig::default();
        config.robots.enabled = false;
        let router = create_router(root.path(), &config, lastmod());

        let (status, _, _) = get_text(router, "/robots.txt").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_sitemap_route() {
        let root = site_root();
        let router = create_router(root.path(), &SiteConfig::default(), lastmod());

        let (status, content_type, body) = get_text(router, "/sitemap.xml").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/xml; charset=utf-8"));
        assert!(body.contains("<lastmod>2026-05-01</lastmod>"));
    }

    #[tokio::test]
    async fn test_static_assets_and_client_routes() {
        let root = site_root();
        let router = create_router(root.path(), &SiteConfig::default(), lastmod());

        let (status, _, body) = get_text(router.clone(), "/pkg/mary.css").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "body{}");

        let (status, _, body) = get_text(router, "/agence").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<html>shell</html>");
    }
}
