// HTTP response utilities for HTML pages with optional Brotli encoding
use async_compression::tokio::bufread::BrotliEncoder;
use axum::{
    body::Body,
    http::{header, HeaderValue, Response, StatusCode},
};
use tokio::io::AsyncReadExt;

const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

async fn brotli(bytes: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = BrotliEncoder::new(bytes);
    let mut compressed = Vec::new();
    encoder.read_to_end(&mut compressed).await?;
    Ok(compressed)
}

/// Build an HTML response, Brotli-compressed when the client accepts it.
pub async fn html_response(html: String, compress: bool) -> Result<Response<Body>, StatusCode> {
    let raw = html.into_bytes();

    let (body_bytes, content_encoding) = if compress {
        let compressed = brotli(&raw).await.map_err(|e| {
            tracing::error!("Brotli compression error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
        tracing::debug!(
            "Compressed page: {} -> {} bytes ({:.1}% reduction)",
            raw.len(),
            compressed.len(),
            (1.0 - compressed.len() as f64 / raw.len().max(1) as f64) * 100.0
        );
        (compressed, Some("br"))
    } else {
        (raw, None)
    };

    let content_length = HeaderValue::from_str(&body_bytes.len().to_string()).map_err(|e| {
        tracing::error!("Content-Length header error: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let mut response_builder = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, HTML_CONTENT_TYPE)
        .header(header::CONTENT_LENGTH, content_length);

    if let Some(encoding) = content_encoding {
        response_builder = response_builder
            .header(header::CONTENT_ENCODING, encoding)
            .header(header::VARY, "accept-encoding");
    }

    response_builder.body(Body::from(body_bytes)).map_err(|e| {
        tracing::error!("Response build error: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}
