//! Configuration types for Stowmap diagram rendering.
//!
//! Layout sizes and colors are fixed by the diagram design and are not
//! configurable. Configuration only covers the rendering surface. All types
//! implement [`serde::Deserialize`] for loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining style and export settings.
//! - [`StyleConfig`] - Visual options such as the background color.
//! - [`ExportConfig`] - Output options such as the canvas margin.
//!
//! # Example
//!
//! ```
//! # use stowmap::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.style().background_color().is_ok());
//! assert_eq!(config.export().margin(), 50.0);
//! ```

use serde::Deserialize;

use stowmap_core::color::Color;

/// Default space kept around the diagram content.
pub const DEFAULT_MARGIN: f32 = 50.0;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Export configuration section.
    #[serde(default)]
    export: ExportConfig,
}

impl AppConfig {
    pub fn new(style: StyleConfig, export: ExportConfig) -> Self {
        Self { style, export }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the export configuration.
    pub fn export(&self) -> &ExportConfig {
        &self.export
    }
}

/// Visual styling configuration for rendered diagrams.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background color of the canvas, as a CSS color string.
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    pub fn new(background_color: Option<String>) -> Self {
        Self { background_color }
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }
}

/// Output configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Space kept around the diagram content, in canvas units.
    #[serde(default = "default_margin")]
    margin: f32,
}

impl ExportConfig {
    pub fn new(margin: f32) -> Self {
        Self { margin }
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
        }
    }
}

fn default_margin() -> f32 {
    DEFAULT_MARGIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.style().background_color(), Ok(None));
        assert_eq!(config.export().margin(), DEFAULT_MARGIN);
    }

    #[test]
    fn test_deserialize_partial_json() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "style": { "background_color": "white" } }"#).unwrap();
        assert!(config.style().background_color().unwrap().is_some());
        assert_eq!(config.export().margin(), DEFAULT_MARGIN);
    }

    #[test]
    fn test_invalid_background_color() {
        let style = StyleConfig::new(Some("not-a-color".to_string()));
        let err = style.background_color().unwrap_err();
        assert!(err.contains("Invalid background color"));
    }
}
