// HTTP request handlers
use crate::infrastructure::http_response::html_response;
use crate::presentation::app_state::AppState;
use axum::{
    extract::State,
    http::HeaderMap,
    response::IntoResponse,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(dashboard_page))
        .route("/healthz", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Host document with the dashboard mounted into its anchor
pub async fn dashboard_page(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    // Check if client accepts Brotli compression
    let compress = headers
        .get("accept-encoding")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.contains("br"))
        .unwrap_or(false);

    let page = state.page_service.render_page();
    tracing::debug!(mounted = page.mounted, compress, "Serving dashboard page");

    match html_response(page.html, compress).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::page_service::PageService;
    use crate::infrastructure::host_document::HostDocument;
    use crate::infrastructure::static_source::StaticDashboardSource;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn app(host_html: &str) -> Router {
        let host = HostDocument {
            origin: "test".to_string(),
            html: host_html.to_string(),
        };
        let page_service =
            PageService::new(Arc::new(StaticDashboardSource), host, "root".to_string());
        router(Arc::new(AppState { page_service }))
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health_check() {
        let (status, body) = get_body(app("<div id=\"root\"></div>"), "/healthz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_dashboard_page_mounts_into_embedded_host() {
        let (status, body) = get_body(app(&HostDocument::embedded().html), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with("<!DOCTYPE html>"));
        assert!(body.contains("<h1>Innovation Dashboard</h1>"));
        assert_eq!(body.matches("class=\"dashboard-card\"").count(), 4);
    }

    #[tokio::test]
    async fn test_dashboard_page_without_anchor_serves_host() {
        let host = "<html><body><p>maintenance</p></body></html>";
        let (status, body) = get_body(app(host), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, host);
    }

    #[tokio::test]
    async fn test_dashboard_page_honors_brotli() {
        let response = app(&HostDocument::embedded().html)
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::ACCEPT_ENCODING, "gzip, br")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_ENCODING], "br");
    }
}
