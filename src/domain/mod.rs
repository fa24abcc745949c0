// Domain layer - Immutable dashboard records
pub mod dashboard;
pub mod metrics;
