// The circle-of-fifths widget: key grid plus the chord panel of the selected key
#![allow(non_snake_case)]
use dioxus::prelude::*;

use super::{ChordPanel, KeyGrid};
use crate::config::theme::ThemePalette;
use crate::state::selection::Selection;

#[derive(Props, Clone, PartialEq)]
pub struct CircleOfFifthsProps {
    pub palette: ThemePalette,
}

pub fn CircleOfFifths(props: CircleOfFifthsProps) -> Element {
    // Nothing selected until the first click; never cleared afterwards.
    let mut selection = use_signal(Selection::default);
    let view = selection.read().view();

    let handle_select = move |key: &'static str| {
        // Re-selecting the current key would only schedule a redundant render.
        if selection.peek().is_selected(key) {
            return;
        }
        selection.write().select(key);
    };

    rsx! {
        div {
            class: "circle-of-fifths",
            style: "display: flex; flex-direction: column; align-items: center; padding: 1.5rem;",
            h1 {
                style: "font-size: 1.5rem; font-weight: bold; margin-bottom: 1rem;",
                "Circle of Fifths"
            }
            KeyGrid {
                controls: view.controls,
                palette: props.palette.clone(),
                onselect: handle_select,
            }
            {view.panel.map(|listing| rsx! {
                ChordPanel { listing: listing, palette: props.palette.clone() }
            })}
        }
    }
}
