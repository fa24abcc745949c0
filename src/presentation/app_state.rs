// Application state for HTTP handlers
use crate::application::page_service::PageService;

#[derive(Clone)]
pub struct AppState {
    pub page_service: PageService,
}
