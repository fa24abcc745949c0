// Card icons - 24x24 glyphs filled with the current text color
use leptos::prelude::*;

const LIGHTBULB_PATH: &str = "M9 21c0 .55.45 1 1 1h4c.55 0 1-.45 1-1v-1H9v1zm3-19C8.14 2 5 5.14 5 9c0 2.38 1.19 4.47 3 5.74V17c0 .55.45 1 1 1h6c.55 0 1-.45 1-1v-2.26c1.81-1.27 3-3.36 3-5.74 0-3.86-3.14-7-7-7z";
const COG_PATH: &str = "M19.43 12.98c.04-.32.07-.64.07-.98s-.03-.66-.07-.98l2.11-1.65c.19-.15.24-.42.12-.64l-2-3.46c-.12-.22-.39-.3-.61-.22l-2.49 1c-.52-.4-1.08-.73-1.69-.98l-.38-2.65C14.46 2.18 14.25 2 14 2h-4c-.25 0-.46.18-.49.42l-.38 2.65c-.61.25-1.17.59-1.69-.98l-2.49-1c-.23-.09-.49 0-.61.22l-2 3.46c-.13.22-.07.49.12.64l2.11 1.65c-.04.32-.07.65-.07.98s.03.66.07.98l-2.11 1.65c-.19.15-.24.42-.12.64l2 3.46c.12.22.39.3.61.22l2.49-1c.52.4 1.08.73 1.69.98l.38 2.65c.03.24.24.42.49.42h4c.25 0 .46-.18.49-.42l.38-2.65c.61-.25 1.17-.59 1.69-.98l2.49 1c.23.09.49 0 .61-.22l2-3.46c.12-.22-.07-.49-.12-.64l-2.11-1.65zM12 15.5c-1.93 0-3.5-1.57-3.5-3.5s1.57-3.5 3.5-3.5 3.5 1.57 3.5 3.5-1.57 3.5-3.5 3.5z";
const CHART_LINE_PATH: &str = "M3.5 18.49l6-6.01 4 4L22 6.92l-1.41-1.41-7.09 7.97-4-4L2 16.99z";
const USERS_PATH: &str = "M16 11c1.66 0 2.99-1.34 2.99-3S17.66 5 16 5c-1.66 0-3 1.34-3 3s1.34 3 3 3zm-8 0c1.66 0 2.99-1.34 2.99-3S9.66 5 8 5C6.34 5 5 6.34 5 8s1.34 3 3 3zm0 2c-2.33 0-7 1.17-7 3.5V19h14v-2.5c0-2.33-4.67-3.5-7-3.5zm8 0c-.29 0-.62.02-.97.05 1.16.84 1.97 1.97 1.97 3.45V19h6v-2.5c0-2.33-4.67-3.5-7-3.5z";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Lightbulb,
    Cog,
    ChartLine,
    Users,
}

impl Icon {
    pub fn path(self) -> &'static str {
        match self {
            Icon::Lightbulb => LIGHTBULB_PATH,
            Icon::Cog => COG_PATH,
            Icon::ChartLine => CHART_LINE_PATH,
            Icon::Users => USERS_PATH,
        }
    }
}

#[component]
pub fn IconGlyph(icon: Icon) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width="24"
            height="24"
            viewBox="0 0 24 24"
            fill="currentColor"
        >
            <path d=icon.path() />
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view::render_html;

    #[test]
    fn test_each_icon_renders_its_own_glyph() {
        for icon in [Icon::Lightbulb, Icon::Cog, Icon::ChartLine, Icon::Users] {
            let html = render_html(|| view! { <IconGlyph icon=icon /> });

            assert!(html.starts_with("<svg"), "{:?}: {}", icon, html);
            assert!(html.contains(r#"width="24""#));
            assert!(html.contains(r#"height="24""#));
            assert!(html.contains(r#"fill="currentColor""#));
            assert!(html.contains(&format!(r#"d="{}""#, icon.path())));
        }
    }
}
