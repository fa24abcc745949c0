// Host document - the HTML page that carries the mount anchor and theme tokens
use anyhow::Context;

const DEFAULT_HOST_DOCUMENT: &str = include_str!("../../static/index.html");

#[derive(Debug, Clone)]
pub struct HostDocument {
    pub origin: String,
    pub html: String,
}

impl HostDocument {
    pub fn embedded() -> Self {
        Self {
            origin: "embedded".to_string(),
            html: DEFAULT_HOST_DOCUMENT.to_string(),
        }
    }
}

pub async fn load_host_document(path: Option<&str>) -> anyhow::Result<HostDocument> {
    match path {
        Some(path) => {
            let html = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("reading host document {}", path))?;
            Ok(HostDocument {
                origin: path.to_string(),
                html,
            })
        }
        None => Ok(HostDocument::embedded()),
    }
}
