//! HTTP handlers for the landing page and static asset serving.

use axum::{
    body::Body,
    extract::Path,
    http::header,
    response::{Html, Response},
};
use tracing::instrument;

use crate::errors::{Error, Result};
use crate::static_assets::Assets;

/// Serve the recorder landing page from the embedded assets
#[instrument]
pub async fn index() -> Result<Html<String>> {
    let page = Assets::get("index.html").ok_or_else(|| Error::Internal {
        operation: "render index page".to_string(),
    })?;

    Ok(Html(String::from_utf8_lossy(&page.data).to_string()))
}

/// Serve an embedded static asset by relative path
#[instrument]
pub async fn serve_static_asset(Path(path): Path<String>) -> Result<Response> {
    let path = path.trim_start_matches('/');

    let content = Assets::get(path).ok_or_else(|| Error::NotFound {
        message: "Static file not found".to_string(),
    })?;

    let mime = mime_guess::from_path(path).first_or_octet_stream();

    Response::builder()
        .header(header::CONTENT_TYPE, mime.as_ref())
        .body(Body::from(content.data.into_owned()))
        .map_err(|e| Error::Internal {
            operation: format!("build static asset response: {e}"),
        })
}

#[cfg(test)]
mod tests {
    use crate::test_utils::create_test_app;
    use axum::http::StatusCode;
    use serde_json::Value;
    use tempfile::TempDir;

    #[test_log::test(tokio::test)]
    async fn test_index_page_served_at_root() {
        let dir = TempDir::new().unwrap();
        let server = create_test_app(dir.path()).await;

        let response = server.get("/").await;

        response.assert_status(StatusCode::OK);
        assert!(
            response
                .headers()
                .get("content-type")
                .map(|v| v.to_str().unwrap())
                .unwrap()
                .contains("text/html")
        );

        let text = response.text();
        assert!(text.contains("<!doctype html>") || text.contains("<!DOCTYPE html>"));
    }

    #[test_log::test(tokio::test)]
    async fn test_serve_script_asset() {
        let dir = TempDir::new().unwrap();
        let server = create_test_app(dir.path()).await;

        let response = server.get("/static/scripts.js").await;

        response.assert_status(StatusCode::OK);
        assert!(
            response
                .headers()
                .get("content-type")
                .map(|v| v.to_str().unwrap())
                .unwrap()
                .contains("javascript")
        );
    }

    #[test_log::test(tokio::test)]
    async fn test_serve_stylesheet_asset() {
        let dir = TempDir::new().unwrap();
        let server = create_test_app(dir.path()).await;

        let response = server.get("/static/styles.css").await;

        response.assert_status(StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").map(|v| v.to_str().unwrap()),
            Some("text/css")
        );
    }

    #[test_log::test(tokio::test)]
    async fn test_missing_asset_returns_404_json() {
        let dir = TempDir::new().unwrap();
        let server = create_test_app(dir.path()).await;

        let response = server.get("/static/nope.js").await;

        response.assert_status(StatusCode::NOT_FOUND);
        let json: Value = response.json();
        assert_eq!(json["error"], "Static file not found");
    }
}
