// Source trait for dashboard content
use crate::domain::dashboard::DashboardData;

pub trait DashboardSource: Send + Sync {
    /// Content for one page load.
    fn dashboard(&self) -> DashboardData;
}
