#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::components::CircleOfFifths;
use crate::config::theme::ThemePalette;
use crate::config::AppConfig;

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let palette = config.palette().unwrap_or_else(|e| {
        tracing::warn!("{}; falling back to the light theme", e);
        ThemePalette::default_light()
    });
    let page_style = format!(
        "min-height: 100vh; margin: 0; font-family: sans-serif; background-color: {}; color: {};",
        palette.background, palette.foreground
    );

    rsx! {
        div {
            style: "{page_style}",
            CircleOfFifths { palette: palette }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_renders_with_configured_theme() {
        let config = AppConfig::from_json_str(
            r#"{"version": "1", "app": {"title": "t", "width": 10, "height": 10, "theme": "dark"}}"#,
        )
        .unwrap();
        let mut dom = VirtualDom::new(App).with_root_context(config);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("background-color: #1e1e1e;"));
        assert!(html.contains(">Circle of Fifths</h1>"));
    }
}
