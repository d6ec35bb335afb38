// GUI configuration module
pub mod theme;

use serde::Deserialize;

use crate::error::AppError;
use theme::ThemePalette;

/// Mirrors assets/config/default.json.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub version: String,
    pub app: AppSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    #[serde(default = "default_theme")]
    pub theme: String, // "light" or "dark"
}

fn default_theme() -> String {
    "light".to_string()
}

impl AppConfig {
    /// Loads the configuration embedded in the binary.
    pub fn load_default() -> Result<Self, AppError> {
        let config_str = include_str!("../../assets/config/default.json");
        Self::from_json_str(config_str)
    }

    pub fn from_json_str(config_str: &str) -> Result<Self, AppError> {
        let config: AppConfig = serde_json::from_str(config_str)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.app.width == 0 || self.app.height == 0 {
            return Err(AppError::InvalidConfig(format!(
                "window size must be non-zero, got {}x{}",
                self.app.width, self.app.height
            )));
        }
        self.palette().map(|_| ())
    }

    /// Palette named by `app.theme`.
    pub fn palette(&self) -> Result<ThemePalette, AppError> {
        ThemePalette::by_name(&self.app.theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_default_loads() {
        let config = AppConfig::load_default().unwrap();
        assert_eq!(config.app.title, "Circle of Fifths");
        assert_eq!(config.app.theme, "light");
        assert_eq!(config.palette().unwrap(), ThemePalette::default_light());
    }

    #[test]
    fn test_theme_defaults_to_light() {
        let config = AppConfig::from_json_str(
            r#"{"version": "1", "app": {"title": "t", "width": 10, "height": 10}}"#,
        )
        .unwrap();
        assert_eq!(config.app.theme, "light");
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let err = AppConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, AppError::ConfigParseError { .. }));
    }

    #[test]
    fn test_zero_window_size_is_rejected() {
        let err = AppConfig::from_json_str(
            r#"{"version": "1", "app": {"title": "t", "width": 0, "height": 10}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig(_)));
    }

    #[test]
    fn test_unknown_theme_is_rejected() {
        let err = AppConfig::from_json_str(
            r#"{"version": "1", "app": {"title": "t", "width": 10, "height": 10, "theme": "neon"}}"#,
        )
        .unwrap_err();
        match err {
            AppError::UnknownTheme(name) => assert_eq!(name, "neon"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
