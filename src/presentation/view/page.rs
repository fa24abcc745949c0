// Page composition - stylesheet, header and the card grid
use super::card::DashboardCard;
use super::icons::Icon;
use super::render_html;
use super::styles::DASHBOARD_CSS;
use super::widgets::{DonutChart, IdeaFunnel, MarketAdoptionChart, TeamCollaboration};
use crate::domain::dashboard::DashboardData;
use leptos::prelude::*;

#[component]
pub fn DashboardPage(data: DashboardData) -> impl IntoView {
    let DashboardData {
        title,
        subtitle,
        funnel,
        investment,
        investment_total,
        adoption,
        teams,
    } = data;

    view! {
        <style inner_html=DASHBOARD_CSS></style>
        <header class="dashboard-header" role="banner">
            <h1>{title}</h1>
            <p>{subtitle}</p>
        </header>
        <main class="dashboard-grid">
            <DashboardCard title="Idea Funnel" icon=Icon::Lightbulb>
                <IdeaFunnel stages=funnel />
            </DashboardCard>
            <DashboardCard title="R&D Investment" icon=Icon::Cog>
                <DonutChart shares=investment center_label=investment_total />
            </DashboardCard>
            <DashboardCard title="Market Adoption" icon=Icon::ChartLine>
                <MarketAdoptionChart series=adoption />
            </DashboardCard>
            <DashboardCard title="Team Collaboration" icon=Icon::Users>
                <TeamCollaboration teams=teams />
            </DashboardCard>
        </main>
    }
}

/// Dashboard markup ready to mount into a host document.
pub fn render_dashboard(data: DashboardData) -> String {
    render_html(move || view! { <DashboardPage data=data /> })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card_titles(html: &str) -> Vec<&str> {
        html.split("<h3>")
            .skip(1)
            .filter_map(|rest| rest.split("</h3>").next())
            .collect()
    }

    #[test]
    fn test_four_cards_in_order() {
        let html = render_dashboard(DashboardData::innovation());

        assert_eq!(html.matches(r#"class="dashboard-card""#).count(), 4);
        assert_eq!(
            card_titles(&html),
            ["Idea Funnel", "R&amp;D Investment", "Market Adoption", "Team Collaboration"]
        );
    }

    #[test]
    fn test_page_starts_with_stylesheet() {
        let html = render_dashboard(DashboardData::innovation());

        assert!(html.starts_with("<style>"));
        assert!(html.contains("@keyframes fill-bar"));
        assert!(html.contains("minmax(320px, 1fr)"));

        let style_end = html.find("</style>").unwrap();
        let header = html.find(r#"<header class="dashboard-header" role="banner">"#).unwrap();
        let grid = html.find(r#"<main class="dashboard-grid">"#).unwrap();
        assert!(style_end < header && header < grid);
        assert!(html.contains("<h1>Innovation Dashboard</h1>"));
    }
}
