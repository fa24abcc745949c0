// Literal dashboard content
use crate::application::dashboard_source::DashboardSource;
use crate::domain::dashboard::DashboardData;

#[derive(Debug, Clone, Default)]
pub struct StaticDashboardSource;

impl DashboardSource for StaticDashboardSource {
    fn dashboard(&self) -> DashboardData {
        DashboardData::innovation()
    }
}
