//! Aspect-ratio state of a media session
//!
//! Tracks the colon text currently handed to the player and the decimal
//! value fed to the left/right eye materials.

use crate::error::Result;
use crate::frac::Frac;
use crate::preset::AspectPreset;
use crate::types::Resolution;

/// Current aspect ratio of the main display
#[derive(Debug, Clone, Default)]
pub struct DisplayAspect {
    current_text: Option<String>,
    current: Option<Frac>,
    updated_since_open: bool,
}

impl DisplayAspect {
    pub fn new() -> Self {
        Self::default()
    }

    /// New media was opened; the next frame sets the source ratio again
    pub fn open(&mut self) {
        self.updated_since_open = false;
    }

    /// Called for every decoded frame size.
    ///
    /// Only the first frame after [`DisplayAspect::open`] sets the ratio, to
    /// `"{width}:{height}"` of the texture. Returns the text when it was applied.
    pub fn on_texture(&mut self, texture: Resolution) -> Option<&str> {
        if self.updated_since_open {
            return None;
        }
        self.updated_since_open = true;

        let frac = texture.aspect_ratio();
        tracing::info!(
            "Source aspect ratio {} ({:.4}) from {}",
            frac.to_ratio_text(),
            frac.to_decimal(),
            texture
        );
        self.store(frac);
        self.current_text.as_deref()
    }

    /// Apply colon text, returning the decimal ratio for the materials.
    ///
    /// A parse failure leaves the previous state in place.
    pub fn set_current(&mut self, text: &str) -> Result<f64> {
        let frac = Frac::from_ratio_text(text)?;
        self.current_text = Some(text.to_string());
        self.current = Some(frac);
        tracing::debug!("Aspect ratio set to {}", text);
        Ok(frac.to_decimal())
    }

    /// Apply a slider or arithmetic result
    pub fn set_ratio(&mut self, frac: Frac) -> f64 {
        self.store(frac);
        tracing::debug!("Aspect ratio set to {}", frac);
        frac.to_decimal()
    }

    /// Apply a preset; [`AspectPreset::Source`] clears the override
    pub fn set_preset(&mut self, preset: AspectPreset) {
        match preset.ratio() {
            Some(frac) => self.store(frac),
            None => self.clear(),
        }
        tracing::debug!("Aspect preset {}", preset);
    }

    pub fn clear(&mut self) {
        self.current_text = None;
        self.current = None;
    }

    pub fn current_text(&self) -> Option<&str> {
        self.current_text.as_deref()
    }

    pub fn current(&self) -> Option<Frac> {
        self.current
    }

    pub fn decimal(&self) -> Option<f64> {
        self.current.map(|f| f.to_decimal())
    }

    fn store(&mut self, frac: Frac) {
        self.current_text = Some(frac.to_ratio_text());
        self.current = Some(frac);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_source_ratio_set_once_per_open() {
        let mut display = DisplayAspect::new();
        assert_eq!(
            display.on_texture(Resolution::FHD_1080P),
            Some("1920:1080")
        );
        assert_eq!(display.on_texture(Resolution::HD_720P), None);
        assert_eq!(display.current_text(), Some("1920:1080"));

        display.open();
        assert_eq!(display.on_texture(Resolution::HD_720P), Some("1280:720"));
    }

    #[test]
    fn test_set_current() {
        let mut display = DisplayAspect::new();
        assert_eq!(display.set_current("2.35:1").unwrap(), 2.35);
        assert_eq!(display.current_text(), Some("2.35:1"));
        assert_eq!(display.current(), Some(Frac::new(2.35, 1.0)));
    }

    #[test]
    fn test_set_current_failure_keeps_state() {
        let mut display = DisplayAspect::new();
        display.set_current("16:9").unwrap();
        assert!(matches!(
            display.set_current("16-9"),
            Err(Error::InvalidRatioText(_))
        ));
        assert_eq!(display.current_text(), Some("16:9"));
    }

    #[test]
    fn test_presets() {
        let mut display = DisplayAspect::new();
        display.set_preset(AspectPreset::Standard);
        assert_eq!(display.current_text(), Some("4:3"));

        display.set_preset(AspectPreset::Source);
        assert_eq!(display.current_text(), None);
        assert_eq!(display.decimal(), None);
    }

    #[test]
    fn test_set_ratio() {
        let mut display = DisplayAspect::new();
        assert_eq!(display.set_ratio(Frac::from_decimal(1.5)), 1.5);
        assert_eq!(display.current_text(), Some("3:2"));
    }
}
