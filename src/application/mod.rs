// Application layer - Use cases
pub mod dashboard_source;
pub mod page_service;
