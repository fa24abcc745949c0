//! Dashboard view components, rendered to HTML with Leptos SSR.

pub mod card;
pub mod icons;
pub mod page;
pub mod styles;
pub mod widgets;

use leptos::prelude::*;

/// Render a view to an HTML string under a fresh reactive owner.
pub fn render_html<V: IntoView>(view: impl FnOnce() -> V) -> String {
    let owner = Owner::new();
    owner.with(|| view().to_html())
}
