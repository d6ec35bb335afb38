// Selection state for the circle-of-fifths widget.
// The component keeps a `Signal<Selection>`; everything it draws comes from
// `Selection::view`, so rendering rules can be checked without a window.

use shared::circle::find_entry;
use shared::models::Degree;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<String>,
}

/// One round key control in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyControl {
    pub label: &'static str,
    pub selected: bool,
}

/// Contents of the detail panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordListing {
    pub title: String,
    /// (scale degree, chord label); empty when the key is not in the table.
    pub chords: Vec<(Degree, &'static str)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircleView {
    pub controls: Vec<KeyControl>,
    pub panel: Option<ChordListing>,
}

impl Selection {
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.selected() == Some(key)
    }

    /// Stores `key` as the selection. Any label is accepted, including ones
    /// that are not in the table; there is no way back to "nothing selected".
    /// Returns false when `key` was already selected.
    pub fn select(&mut self, key: impl Into<String>) -> bool {
        let key = key.into();
        if self.is_selected(&key) {
            return false;
        }
        tracing::debug!("Selecting key {}", key);
        self.selected = Some(key);
        true
    }

    pub fn view(&self) -> CircleView {
        let controls = shared::entries()
            .iter()
            .map(|entry| KeyControl {
                label: entry.key,
                selected: self.is_selected(entry.key),
            })
            .collect();

        let panel = self.selected().map(|key| {
            let chords = match find_entry(key) {
                Some(entry) => entry.degrees().collect(),
                None => {
                    tracing::warn!("No chords for selected key '{}', showing an empty list", key);
                    Vec::new()
                }
            };
            ChordListing {
                title: format!("Chords in {} Major", key),
                chords,
            }
        });

        CircleView { controls, panel }
    }
}
