// Dashboard domain model
use super::metrics::{AdoptionSeries, CategoryShare, FunnelStage, TeamProgress};

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub title: String,
    pub subtitle: String,
    pub funnel: Vec<FunnelStage>,
    pub investment: Vec<CategoryShare>,
    pub investment_total: String,
    pub adoption: AdoptionSeries,
    pub teams: Vec<TeamProgress>,
}

impl DashboardData {
    /// The innovation dashboard content. Every value is a literal.
    pub fn innovation() -> Self {
        Self {
            title: "Innovation Dashboard".to_string(),
            subtitle: "Real-time metrics on our company's growth and creative pipeline."
                .to_string(),
            funnel: vec![
                FunnelStage::new("Submitted", 1240, "#e94560"),
                FunnelStage::new("In Review", 860, "#f8b400"),
                FunnelStage::new("In Development", 215, "#53a8b6"),
                FunnelStage::new("Launched", 45, "#7ed957"),
            ],
            investment: vec![
                CategoryShare::new("AI/ML", 45.0, "#e94560"),
                CategoryShare::new("Sustainability", 25.0, "#53a8b6"),
                CategoryShare::new("Robotics", 20.0, "#f8b400"),
                CategoryShare::new("Quantum", 10.0, "#a259ff"),
            ],
            investment_total: "$15M".to_string(),
            adoption: AdoptionSeries::new(
                vec![10.0, 25.0, 40.0, 30.0, 60.0, 85.0],
                "6m ago",
                "Now",
            ),
            teams: vec![
                TeamProgress::new("Eng & Design", 85.0, "#e94560"),
                TeamProgress::new("Marketing & Sales", 70.0, "#53a8b6"),
                TeamProgress::new("Product & Research", 92.0, "#f8b400"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_innovation_literals() {
        let data = DashboardData::innovation();
        assert_eq!(data.title, "Innovation Dashboard");

        let stages: Vec<&str> = data.funnel.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(stages, ["Submitted", "In Review", "In Development", "Launched"]);

        let total: f64 = data.investment.iter().map(|c| c.percentage).sum();
        assert_eq!(total, 100.0);

        assert_eq!(data.adoption.samples.len(), 6);
        assert_eq!(data.teams.len(), 3);
    }
}
