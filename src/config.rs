//! Configuration types for hmd-aspect

use crate::error::{Error, Result};
use crate::frac::Frac;
use crate::preset::AspectPreset;
use crate::slider::{AspectSlider, SliderConfig, SliderScale};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Display configuration, persisted as TOML
///
/// ```toml
/// aspect_ratio = "16:9"
///
/// [slider]
/// min = 0.5
/// max = 3.0
/// scale = "linear"
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Explicit ratio override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<Frac>,
    /// Preset used when no explicit ratio is set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<AspectPreset>,
    /// Aspect-ratio slider settings
    pub slider: SliderConfig,
}

impl DisplayConfig {
    pub fn with_aspect_ratio(mut self, frac: Frac) -> Self {
        self.aspect_ratio = Some(frac);
        self
    }

    pub fn with_preset(mut self, preset: AspectPreset) -> Self {
        self.preset = Some(preset);
        self
    }

    pub fn with_slider(mut self, slider: SliderConfig) -> Self {
        self.slider = slider;
        self
    }

    pub fn with_slider_scale(mut self, scale: SliderScale) -> Self {
        self.slider = match scale {
            SliderScale::Linear => SliderConfig::default(),
            SliderScale::Exponential => SliderConfig::exponential(),
        };
        self
    }

    /// Ratio to apply on startup: explicit ratio first, then the preset
    pub fn effective_ratio(&self) -> Option<Frac> {
        self.aspect_ratio
            .or_else(|| self.preset.and_then(|p| p.ratio()))
    }

    /// Build the slider described by this config
    pub fn slider(&self) -> Result<AspectSlider> {
        AspectSlider::from_config(&self.slider)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| Error::Config(e.to_string()))?;
        config.slider()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!("Loaded display config from {}", path.display());
        Ok(config)
    }

    /// Write to a TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_toml_string()?)?;
        tracing::info!("Saved display config to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DisplayConfig::default();
        assert_eq!(config.effective_ratio(), None);
        assert_eq!(config.slider.scale, SliderScale::Linear);
        assert!(config.slider().is_ok());
    }

    #[test]
    fn test_parse_toml() {
        let config = DisplayConfig::from_toml_str(
            r#"
            aspect_ratio = "2.35:1"
            preset = "standard"

            [slider]
            min = -1.0
            max = 2.0
            scale = "exponential"
            "#,
        )
        .unwrap();

        assert_eq!(config.effective_ratio(), Some(Frac::new(2.35, 1.0)));
        assert_eq!(config.slider, SliderConfig::exponential());
    }

    #[test]
    fn test_preset_fallback() {
        let config = DisplayConfig::from_toml_str("preset = \"widescreen\"").unwrap();
        assert_eq!(config.effective_ratio(), Some(Frac::new(16.0, 9.0)));
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            DisplayConfig::from_toml_str("aspect_ratio = \"16/9\""),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            DisplayConfig::from_toml_str("[slider]\nmin = 3.0\nmax = 1.0\nscale = \"linear\""),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("display.toml");

        let config = DisplayConfig::default()
            .with_aspect_ratio(Frac::new(16.0, 10.0))
            .with_slider_scale(SliderScale::Exponential);
        config.save(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("aspect_ratio = \"16:10\""));

        assert_eq!(DisplayConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            DisplayConfig::load(dir.path().join("missing.toml")),
            Err(Error::Io(_))
        ));
    }
}
