// Grid of round key controls, one per table row
#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::config::theme::ThemePalette;
use crate::state::selection::KeyControl;

/// Column count of the key grid.
pub const GRID_COLUMNS: usize = 4;

#[derive(Props, Clone, PartialEq)]
pub struct KeyGridProps {
    pub controls: Vec<KeyControl>,
    pub palette: ThemePalette,
    /// Fired with the label of the clicked control.
    pub onselect: EventHandler<&'static str>,
}

pub fn KeyGrid(props: KeyGridProps) -> Element {
    let onselect = props.onselect;
    let grid_style = format!(
        "display: grid; grid-template-columns: repeat({GRID_COLUMNS}, minmax(0, 1fr)); gap: 1rem; margin-bottom: 1.5rem;"
    );

    rsx! {
        div {
            class: "key-grid",
            style: "{grid_style}",
            {props.controls.iter().map(|control| {
                let label = control.label;
                let style = props.palette.key_style(control.selected);
                rsx! {
                    button {
                        key: "{label}",
                        class: "key-control",
                        "data-selected": "{control.selected}",
                        style: "{style}",
                        onclick: move |_| onselect.call(label),
                        "{label}"
                    }
                }
            })}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::selection::Selection;

    fn render(root: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(root);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn NothingSelected() -> Element {
        rsx! {
            KeyGrid {
                controls: Selection::default().view().controls,
                palette: ThemePalette::default_light(),
                onselect: |_| {},
            }
        }
    }

    fn GbAfterC() -> Element {
        let mut selection = Selection::default();
        selection.select("C");
        selection.select("Gb");
        rsx! {
            KeyGrid {
                controls: selection.view().controls,
                palette: ThemePalette::default_light(),
                onselect: |_| {},
            }
        }
    }

    #[test]
    fn test_renders_thirteen_unselected_controls() {
        let html = render(NothingSelected);
        assert_eq!(html.matches("<button").count(), 13);
        assert_eq!(html.matches("data-selected=\"false\"").count(), 13);
        assert!(html.contains("repeat(4, minmax(0, 1fr))"));
    }

    #[test]
    fn test_exactly_one_control_is_selected() {
        let html = render(GbAfterC);
        assert_eq!(html.matches("data-selected=\"true\"").count(), 1);
        assert_eq!(html.matches("data-selected=\"false\"").count(), 12);

        let selected_at = html.find("data-selected=\"true\"").unwrap();
        let button_end = selected_at + html[selected_at..].find("</button>").unwrap();
        assert!(html[selected_at..button_end].ends_with(">Gb"));
    }

    #[test]
    fn test_controls_follow_circle_order() {
        let html = render(NothingSelected);
        let positions: Vec<usize> = shared::keys()
            .map(|key| html.find(&format!(">{key}</button>")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
