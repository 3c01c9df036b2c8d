//! Dashboard Configuration
//!
//! One immutable configuration value built in `main` and handed to the app
//! once at startup: window geometry, theme colors, and the map viewport.

use egui::Color32;
use serde::Deserialize;

/// Top-level configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub window: WindowConfig,

    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default)]
    pub map: MapViewConfig,
}

/// Window geometry and title
#[derive(Debug, Clone, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_window_size")]
    pub size: [f32; 2],

    #[serde(default = "default_min_window_size")]
    pub min_size: [f32; 2],
}

fn default_title() -> String {
    "The Hacker News — Top #1 Dashboard".to_string()
}

fn default_window_size() -> [f32; 2] {
    [1400.0, 800.0]
}

fn default_min_window_size() -> [f32; 2] {
    [1200.0, 700.0]
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            size: default_window_size(),
            min_size: default_min_window_size(),
        }
    }
}

/// Colors and fixed widget dimensions
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeConfig {
    /// Header banner fill
    #[serde(default = "default_header_rgb")]
    pub header_rgb: [u8; 3],

    /// Series marks and accents
    #[serde(default = "default_accent_rgb")]
    pub accent_rgb: [u8; 3],

    /// Headline card border
    #[serde(default = "default_card_border_rgb")]
    pub card_border_rgb: [u8; 3],

    #[serde(default = "default_chart_height")]
    pub chart_height: f32,

    #[serde(default = "default_card_image_height")]
    pub card_image_height: f32,
}

fn default_header_rgb() -> [u8; 3] {
    [30, 58, 138]
}

fn default_accent_rgb() -> [u8; 3] {
    [59, 130, 246]
}

fn default_card_border_rgb() -> [u8; 3] {
    [90, 98, 112]
}

fn default_chart_height() -> f32 {
    260.0
}

fn default_card_image_height() -> f32 {
    140.0
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            header_rgb: default_header_rgb(),
            accent_rgb: default_accent_rgb(),
            card_border_rgb: default_card_border_rgb(),
            chart_height: default_chart_height(),
            card_image_height: default_card_image_height(),
        }
    }
}

impl ThemeConfig {
    pub fn header_color(&self) -> Color32 {
        rgb(self.header_rgb)
    }

    pub fn accent_color(&self) -> Color32 {
        rgb(self.accent_rgb)
    }

    pub fn card_border_color(&self) -> Color32 {
        rgb(self.card_border_rgb)
    }
}

fn rgb(c: [u8; 3]) -> Color32 {
    Color32::from_rgb(c[0], c[1], c[2])
}

/// Fixed lon/lat viewport for the intensity map
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MapViewConfig {
    #[serde(default = "default_lon_min")]
    pub lon_min: f64,

    #[serde(default = "default_lon_max")]
    pub lon_max: f64,

    #[serde(default = "default_lat_min")]
    pub lat_min: f64,

    #[serde(default = "default_lat_max")]
    pub lat_max: f64,
}

fn default_lon_min() -> f64 {
    68.0
}

fn default_lon_max() -> f64 {
    98.0
}

fn default_lat_min() -> f64 {
    6.0
}

fn default_lat_max() -> f64 {
    38.0
}

impl Default for MapViewConfig {
    fn default() -> Self {
        Self {
            lon_min: default_lon_min(),
            lon_max: default_lon_max(),
            lat_min: default_lat_min(),
            lat_max: default_lat_max(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = DashboardConfig::default();
        assert!(!config.window.title.is_empty());
        assert!(config.window.size[0] >= config.window.min_size[0]);
        assert!(config.theme.chart_height > 0.0);
        assert!(config.map.lon_min < config.map.lon_max);
        assert!(config.map.lat_min < config.map.lat_max);
    }

    #[test]
    fn empty_document_deserializes_to_defaults() {
        let config: DashboardConfig = serde_json::from_str("{}").unwrap();
        let defaults = DashboardConfig::default();
        assert_eq!(config.window.title, defaults.window.title);
        assert_eq!(config.theme.accent_rgb, defaults.theme.accent_rgb);
        assert_eq!(config.map.lat_max, defaults.map.lat_max);
    }
}
