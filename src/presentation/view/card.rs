// Card shell shared by every widget
use super::icons::{Icon, IconGlyph};
use leptos::prelude::*;

#[component]
pub fn DashboardCard(title: &'static str, icon: Icon, children: Children) -> impl IntoView {
    view! {
        <div class="dashboard-card" role="region" aria-label=format!("{} dashboard card", title)>
            <div class="card-header">
                <div class="card-icon">
                    <IconGlyph icon=icon />
                </div>
                <h3>{title}</h3>
            </div>
            <div class="card-content">{children()}</div>
        </div>
    }
}
