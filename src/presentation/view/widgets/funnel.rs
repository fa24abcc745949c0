// Idea funnel - one tapering bar per stage
use crate::domain::metrics::FunnelStage;
use leptos::prelude::*;

/// Width lost per stage, in percent of the container.
const TAPER_STEP: i64 = 15;

/// Bar width in percent for the stage at `index`. Not clamped: past the
/// seventh stage this goes negative.
pub fn stage_width(index: usize) -> i64 {
    100 - index as i64 * TAPER_STEP
}

/// Format a count with comma thousands separators, e.g. 1240 -> "1,240".
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[component]
pub fn IdeaFunnel(stages: Vec<FunnelStage>) -> impl IntoView {
    view! {
        <div class="idea-funnel">
            {stages
                .into_iter()
                .enumerate()
                .map(|(index, stage)| {
                    let style = format!(
                        "--stage-color: {}; --stage-width: {}%",
                        stage.color,
                        stage_width(index),
                    );
                    view! {
                        <div class="funnel-stage" style=style>
                            <span class="stage-name">{stage.name}</span>
                            <span class="stage-value">{format_count(stage.value)}</span>
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

    fn stages() -> Vec<FunnelStage> {
        vec![
            FunnelStage::new("Submitted", 1240, "#e94560"),
            FunnelStage::new("In Review", 860, "#f8b400"),
            FunnelStage::new("In Development", 215, "#53a8b6"),
            FunnelStage::new("Launched", 45, "#7ed957"),
        ]
    }

    fn stage_names(html: &str) -> Vec<&str> {
        html.split(r#"<span class="stage-name">"#)
            .skip(1)
            .filter_map(|rest| rest.split("</span>").next())
            .collect()
    }

    #[test]
    fn test_one_bar_per_stage_in_order() {
        let html = render_html(|| view! { <IdeaFunnel stages=stages() /> });

        assert_eq!(html.matches(r#"class="funnel-stage""#).count(), 4);
        assert_eq!(
            stage_names(&html),
            ["Submitted", "In Review", "In Development", "Launched"]
        );
        assert!(html.contains(r#"<span class="stage-value">1,240</span>"#));
    }

    #[test]
    fn test_taper_ignores_value() {
        let html = render_html(|| view! { <IdeaFunnel stages=stages() /> });

        assert!(html.contains("--stage-color: #e94560; --stage-width: 100%"));
        assert!(html.contains("--stage-color: #7ed957; --stage-width: 55%"));
        assert_eq!(stage_width(7), -5);
    }

    #[test]
    fn test_empty_funnel_renders_no_bars() {
        let html = render_html(|| view! { <IdeaFunnel stages=Vec::new() /> });

        assert!(html.starts_with(r#"<div class="idea-funnel">"#));
        assert!(!html.contains("funnel-stage"));
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(45), "45");
        assert_eq!(format_count(860), "860");
        assert_eq!(format_count(1240), "1,240");
        assert_eq!(format_count(1234567), "1,234,567");
    }
}
