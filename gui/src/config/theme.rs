// Theme colors for the key grid and chord panel
use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub background: String,
    pub foreground: String,
    // Key controls
    pub selected_background: String,
    pub selected_foreground: String,
    pub unselected_background: String,
    pub unselected_foreground: String,
    pub unselected_border: String,
    // Chord tags
    pub chord_background: String,
    pub chord_foreground: String,
}

impl ThemePalette {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            foreground: "#000000".to_string(),
            selected_background: "#000000".to_string(),
            selected_foreground: "#ffffff".to_string(),
            unselected_background: "#ffffff".to_string(),
            unselected_foreground: "#000000".to_string(),
            unselected_border: "#9ca3af".to_string(),
            chord_background: "#bbf7d0".to_string(),
            chord_foreground: "#000000".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#1e1e1e".to_string(),
            foreground: "#d1d4dc".to_string(),
            selected_background: "#d1d4dc".to_string(),
            selected_foreground: "#1e1e1e".to_string(),
            unselected_background: "#1e1e1e".to_string(),
            unselected_foreground: "#d1d4dc".to_string(),
            unselected_border: "#565656".to_string(),
            chord_background: "#26a69a".to_string(),
            chord_foreground: "#ffffff".to_string(),
        }
    }

    pub fn by_name(name: &str) -> Result<Self, AppError> {
        match name {
            "light" => Ok(Self::default_light()),
            "dark" => Ok(Self::default_dark()),
            other => Err(AppError::UnknownTheme(other.to_string())),
        }
    }

    /// Inline style for a key control in the given state.
    pub fn key_style(&self, selected: bool) -> String {
        let (bg, fg, border) = if selected {
            (&self.selected_background, &self.selected_foreground, &self.selected_background)
        } else {
            (&self.unselected_background, &self.unselected_foreground, &self.unselected_border)
        };
        format!(
            "width: 4rem; height: 4rem; border-radius: 9999px; display: flex; align-items: center; \
             justify-content: center; border: 1px solid {border}; font-size: 1.125rem; font-weight: bold; \
             cursor: pointer; transition: background-color 200ms, color 200ms; \
             background-color: {bg}; color: {fg};"
        )
    }

    pub fn chord_style(&self) -> String {
        format!(
            "padding: 0.5rem 1rem; border-radius: 0.25rem; font-size: 1.125rem; \
             box-shadow: 0 1px 3px rgba(0,0,0,0.2); background-color: {}; color: {};",
            self.chord_background, self.chord_foreground
        )
    }
}
