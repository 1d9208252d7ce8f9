//! Light and dark color palettes for diagram rendering
//!
//! Independent of the graph transform. The palette for a mode is a total
//! function of the mode; [`ThemeService`] only tracks which one is active.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::errors::DiagramError;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Light => write!(f, "light"),
            ThemeMode::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for ThemeMode {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(DiagramError::InvalidThemeMode(other.to_string())),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSettings {
    pub theme: ThemeMode,
    pub node_fill_color: String,
    pub node_stroke_color: String,
    pub text_key_color: String,
    pub text_value_color: String,
    pub text_value_null_color: String,
    pub connector_stroke_color: String,
    pub expand_icon_color: String,
    pub expand_icon_fill_color: String,
    pub expand_icon_border: String,
    pub background_color: String,
    pub gridlines_color: String,
    pub child_count_color: String,
    pub boolean_color: String,
    pub numeric_color: String,
    pub popup_key_color: String,
    pub popup_value_color: String,
    #[serde(rename = "popupContentBGColor")]
    pub popup_content_bg_color: String,
    pub highlight_fill_color: String,
    pub highlight_focus_color: String,
    pub highlight_stroke_color: String,
}

impl ThemeSettings {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self {
                theme: mode,
                node_fill_color: "rgb(41, 41, 41)".into(),
                node_stroke_color: "rgb(66, 66, 66)".into(),
                text_key_color: "#4dabf7".into(),
                text_value_color: "rgb(207, 227, 225)".into(),
                text_value_null_color: "rgb(151, 150, 149)".into(),
                connector_stroke_color: "rgb(66, 66, 66)".into(),
                expand_icon_color: "rgb(220, 221, 222)".into(),
                expand_icon_fill_color: "#1e1e1e".into(),
                expand_icon_border: "rgb(66, 66, 66)".into(),
                background_color: "#1e1e1e".into(),
                gridlines_color: "rgb(45, 45, 45)".into(),
                child_count_color: "rgb(255, 255, 255)".into(),
                boolean_color: "rgb(61, 226, 49)".into(),
                numeric_color: "rgb(232, 196, 121)".into(),
                popup_key_color: "#A5D8FF".into(),
                popup_value_color: "#40C057".into(),
                popup_content_bg_color: "#1A1A1A".into(),
                highlight_fill_color: "rgba(27, 255, 0, 0.1)".into(),
                highlight_focus_color: "rgba(82, 102, 0, 0.61)".into(),
                highlight_stroke_color: "rgb(0, 135, 54)".into(),
            },
            ThemeMode::Light => Self {
                theme: mode,
                node_fill_color: "rgb(255, 255, 255)".into(),
                node_stroke_color: "rgb(188, 190, 192)".into(),
                text_key_color: "#A020F0".into(),
                text_value_color: "rgb(83, 83, 83)".into(),
                text_value_null_color: "rgb(41, 41, 41)".into(),
                connector_stroke_color: "rgb(188, 190, 192)".into(),
                expand_icon_color: "rgb(46, 51, 56)".into(),
                expand_icon_fill_color: "#e0dede".into(),
                expand_icon_border: "rgb(188, 190, 192)".into(),
                background_color: "#F8F9FA".into(),
                gridlines_color: "#EBE8E8".into(),
                child_count_color: "rgb(41, 41, 41)".into(),
                boolean_color: "rgb(74, 145, 67)".into(),
                numeric_color: "rgb(182, 60, 30)".into(),
                popup_key_color: "#5C940D".into(),
                popup_value_color: "#1864AB".into(),
                popup_content_bg_color: "#F8F9FA".into(),
                highlight_fill_color: "rgba(27, 255, 0, 0.1)".into(),
                highlight_focus_color: "rgba(252, 255, 166, 0.57)".into(),
                highlight_stroke_color: "rgb(0, 135, 54)".into(),
            },
        }
    }
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self::for_mode(ThemeMode::default())
    }
}

/// Active theme holder.
#[derive(Debug, Clone, Default)]
pub struct ThemeService {
    settings: ThemeSettings,
}

impl ThemeService {
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            settings: ThemeSettings::for_mode(mode),
        }
    }

    pub fn current_mode(&self) -> ThemeMode {
        self.settings.theme
    }

    pub fn current_settings(&self) -> &ThemeSettings {
        &self.settings
    }

    /// Switch palettes. Returns `false` without touching anything when `mode`
    /// is already active.
    pub fn set_mode(&mut self, mode: ThemeMode) -> bool {
        if self.current_mode() == mode {
            return false;
        }
        debug!("Switching theme from {} to {}", self.current_mode(), mode);
        self.settings = ThemeSettings::for_mode(mode);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_light() {
        let service = ThemeService::default();
        assert_eq!(service.current_mode(), ThemeMode::Light);
        assert_eq!(service.current_settings().background_color, "#F8F9FA");
    }

    #[test]
    fn test_set_mode() {
        let mut service = ThemeService::default();
        assert!(!service.set_mode(ThemeMode::Light));
        assert!(service.set_mode(ThemeMode::Dark));
        assert_eq!(service.current_mode(), ThemeMode::Dark);
        assert_eq!(service.current_settings().text_key_color, "#4dabf7");
        assert_eq!(service.current_settings(), &ThemeSettings::for_mode(ThemeMode::Dark));
        assert!(!service.set_mode(ThemeMode::Dark));
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert_eq!(" Light ".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
        assert!("sepia".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn test_settings_serialize_camel_case() {
        let value = serde_json::to_value(ThemeSettings::for_mode(ThemeMode::Dark)).unwrap();
        assert_eq!(value["theme"], "dark");
        assert_eq!(value["nodeFillColor"], "rgb(41, 41, 41)");
        assert_eq!(value["popupContentBGColor"], "#1A1A1A");
        assert_eq!(value["highlightStrokeColor"], "rgb(0, 135, 54)");
        assert_eq!(value.as_object().unwrap().len(), 21);
    }
}
