// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod host_document;
pub mod http_response;
pub mod mount;
pub mod static_source;
