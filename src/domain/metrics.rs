// Dashboard metric domain models

/// One step of the idea pipeline. Stages are ordered widest first.
#[derive(Debug, Clone, PartialEq)]
pub struct FunnelStage {
    pub name: String,
    pub value: u64,
    pub color: String,
}

impl FunnelStage {
    pub fn new(name: &str, value: u64, color: &str) -> Self {
        Self {
            name: name.to_string(),
            value,
            color: color.to_string(),
        }
    }
}

/// Slice of a whole, e.g. a share of the R&D budget.
///
/// A set of shares is expected to total 100 but nothing enforces it.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub name: String,
    pub percentage: f64,
    pub color: String,
}

impl CategoryShare {
    pub fn new(name: &str, percentage: f64, color: &str) -> Self {
        Self {
            name: name.to_string(),
            percentage,
            color: color.to_string(),
        }
    }
}

/// Trend samples over fixed, evenly spaced time buckets (oldest first).
#[derive(Debug, Clone, PartialEq)]
pub struct AdoptionSeries {
    pub samples: Vec<f64>,
    pub start_label: String,
    pub end_label: String,
}

impl AdoptionSeries {
    pub fn new(samples: Vec<f64>, start_label: &str, end_label: &str) -> Self {
        Self {
            samples,
            start_label: start_label.to_string(),
            end_label: end_label.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamProgress {
    pub name: String,
    pub percentage: f64,
    pub color: String,
}

impl TeamProgress {
    pub fn new(name: &str, percentage: f64, color: &str) -> Self {
        Self {
            name: name.to_string(),
            percentage,
            color: color.to_string(),
        }
    }
}
