// Infographic widgets, one per dashboard card
pub mod donut;
pub mod funnel;
pub mod progress;
pub mod trend;

pub use donut::DonutChart;
pub use funnel::IdeaFunnel;
pub use progress::TeamCollaboration;
pub use trend::MarketAdoptionChart;
