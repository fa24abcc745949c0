// Presentation layer - Markup views and HTTP delivery
pub mod app_state;
pub mod handlers;
pub mod view;
