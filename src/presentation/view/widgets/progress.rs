// Team collaboration - labeled progress tracks
use crate::domain::metrics::TeamProgress;
use leptos::prelude::*;

/// The fill is sized in percent of the whole track.
const TRACK_PERCENT: f64 = 100.0;

/// Filled portion of a track of `track_width`. Percentages outside
/// [0, 100] are passed through.
pub fn fill_width(track_width: f64, percentage: f64) -> f64 {
    track_width * percentage / 100.0
}

#[component]
pub fn TeamCollaboration(teams: Vec<TeamProgress>) -> impl IntoView {
    view! {
        <div class="progress-bar-container">
            {teams
                .into_iter()
                .map(|team| {
                    let fill = format!(
                        "width: {}%; background-color: {}",
                        fill_width(TRACK_PERCENT, team.percentage),
                        team.color,
                    );
                    view! {
                        <div class="progress-item">
                            <div class="progress-label">
                                <span>{team.name}</span>
                                <span>{format!("{}%", team.percentage)}</span>
                            </div>
                            <div class="progress-bar-bg">
                                <div class="progress-bar-fg" style=fill></div>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view::render_html;

    #[test]
    fn test_fill_width_bounds() {
        assert_eq!(fill_width(240.0, 0.0), 0.0);
        assert_eq!(fill_width(240.0, 100.0), 240.0);
        assert_eq!(fill_width(240.0, 50.0), 120.0);
    }

    #[test]
    fn test_out_of_range_is_not_clamped() {
        assert_eq!(fill_width(200.0, 120.0), 240.0);
        assert_eq!(fill_width(200.0, -10.0), -20.0);

        let teams = vec![TeamProgress::new("Ops", 120.0, "#fff")];
        let html = render_html(move || view! { <TeamCollaboration teams=teams /> });
        assert!(html.contains("width: 120%; background-color: #fff"));
    }

    #[test]
    fn test_track_per_team() {
        let teams = vec![
            TeamProgress::new("Eng & Design", 85.0, "#e94560"),
            TeamProgress::new("Marketing & Sales", 70.0, "#53a8b6"),
        ];
        let html = render_html(move || view! { <TeamCollaboration teams=teams /> });

        assert_eq!(html.matches(r#"class="progress-bar-bg""#).count(), 2);
        assert!(html.contains("<span>Eng &amp; Design</span><span>85%</span>"));
        assert!(html.contains("<span>Marketing &amp; Sales</span><span>70%</span>"));
    }
}
