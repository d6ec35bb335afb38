// Detail panel listing the chords of the selected key
#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::config::theme::ThemePalette;
use crate::state::selection::ChordListing;

#[derive(Props, Clone, PartialEq)]
pub struct ChordPanelProps {
    pub listing: ChordListing,
    pub palette: ThemePalette,
}

pub fn ChordPanel(props: ChordPanelProps) -> Element {
    let chord_style = props.palette.chord_style();

    rsx! {
        div {
            class: "chord-panel",
            style: "text-align: center;",
            h2 {
                style: "font-size: 1.25rem; font-weight: 600; margin-bottom: 0.5rem;",
                "{props.listing.title}"
            }
            div {
                style: "display: flex; flex-wrap: wrap; justify-content: center; gap: 0.5rem;",
                {props.listing.chords.iter().map(|(degree, chord)| {
                    let numeral = degree.numeral();
                    let quality = degree.quality().label();
                    rsx! {
                        span {
                            key: "{numeral}",
                            class: "chord-tag chord-{quality}",
                            title: "{numeral} {quality}",
                            style: "{chord_style}",
                            "{chord}"
                        }
                    }
                })}
            }
        }
    }
}
