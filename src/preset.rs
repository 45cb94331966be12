//! Named aspect-ratio presets
//!
//! These back the quick-select buttons of the player. [`AspectPreset::Source`]
//! clears any override so the decoder falls back to the stream's own ratio.

use crate::error::{Error, Result};
use crate::frac::Frac;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Aspect-ratio preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AspectPreset {
    /// No override, use the stream's ratio
    #[default]
    Source,
    /// 4:3 (SD television)
    Standard,
    /// 16:9 (HD television)
    Widescreen,
    /// 16:10 (computer displays)
    Widescreen16x10,
    /// 2.35:1 (anamorphic cinema)
    Cinemascope,
}

impl AspectPreset {
    pub const ALL: [AspectPreset; 5] = [
        AspectPreset::Source,
        AspectPreset::Standard,
        AspectPreset::Widescreen,
        AspectPreset::Widescreen16x10,
        AspectPreset::Cinemascope,
    ];

    /// Short name used on the command line and in config files
    pub fn name(&self) -> &'static str {
        match self {
            AspectPreset::Source => "source",
            AspectPreset::Standard => "standard",
            AspectPreset::Widescreen => "widescreen",
            AspectPreset::Widescreen16x10 => "widescreen16x10",
            AspectPreset::Cinemascope => "cinemascope",
        }
    }

    /// Ratio to apply, `None` for [`AspectPreset::Source`]
    pub fn ratio(&self) -> Option<Frac> {
        match self {
            AspectPreset::Source => None,
            AspectPreset::Standard => Some(Frac::new(4.0, 3.0)),
            AspectPreset::Widescreen => Some(Frac::new(16.0, 9.0)),
            AspectPreset::Widescreen16x10 => Some(Frac::new(16.0, 10.0)),
            AspectPreset::Cinemascope => Some(Frac::new(2.35, 1.0)),
        }
    }

    pub fn ratio_text(&self) -> Option<String> {
        self.ratio().map(|r| r.to_ratio_text())
    }

    /// Preset whose ratio text matches exactly
    pub fn from_ratio(frac: &Frac) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.ratio().as_ref() == Some(frac))
    }
}

impl std::fmt::Display for AspectPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.ratio_text() {
            Some(text) => write!(f, "{} ({})", self.name(), text),
            None => write!(f, "{}", self.name()),
        }
    }
}

impl FromStr for AspectPreset {
    type Err = Error;

    /// Accepts a preset name or its ratio text (`"16:9"`)
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some(preset) = Self::ALL.into_iter().find(|p| p.name().eq_ignore_ascii_case(s)) {
            return Ok(preset);
        }

        Frac::from_ratio_text(s)
            .ok()
            .and_then(|frac| Self::from_ratio(&frac))
            .ok_or_else(|| Error::UnknownPreset(s.to_string()))
    }
}
