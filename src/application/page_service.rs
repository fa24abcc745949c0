// Page service - Use case for rendering the dashboard into the host document
use crate::application::dashboard_source::DashboardSource;
use crate::infrastructure::host_document::HostDocument;
use crate::infrastructure::mount::mount;
use crate::presentation::view::page::render_dashboard;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    pub html: String,
    /// False when the anchor was missing and the host document went out as-is.
    pub mounted: bool,
}

#[derive(Clone)]
pub struct PageService {
    source: Arc<dyn DashboardSource>,
    host: HostDocument,
    anchor_id: String,
}

impl PageService {
    pub fn new(source: Arc<dyn DashboardSource>, host: HostDocument, anchor_id: String) -> Self {
        Self {
            source,
            host,
            anchor_id,
        }
    }

    /// Render the dashboard markup without a host document.
    pub fn render_fragment(&self) -> String {
        render_dashboard(self.source.dashboard())
    }

    pub fn render_page(&self) -> RenderedPage {
        let fragment = self.render_fragment();

        match mount(&self.host.html, &self.anchor_id, &fragment) {
            Ok(html) => {
                tracing::debug!(
                    "Mounted dashboard into #{} ({} bytes)",
                    self.anchor_id,
                    html.len()
                );
                RenderedPage {
                    html,
                    mounted: true,
                }
            }
            Err(e) => {
                tracing::error!(host = %self.host.origin, "Dashboard not mounted: {}", e);
                RenderedPage {
                    html: self.host.html.clone(),
                    mounted: false,
                }
            }
        }
    }
}
