//! Common types used throughout hmd-aspect

use crate::error::{Error, Result};
use crate::frac::Frac;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Video resolution (size of the decoded texture)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    // Common resolutions
    pub const SD_480P: Self = Self::new(854, 480);
    pub const HD_720P: Self = Self::new(1280, 720);
    pub const FHD_1080P: Self = Self::new(1920, 1080);
    pub const QHD_1440P: Self = Self::new(2560, 1440);
    pub const UHD_4K: Self = Self::new(3840, 2160);
    /// Full side-by-side stereo at 1080p per eye
    pub const SBS_1080P: Self = Self::new(3840, 1080);

    /// Calculate total pixels
    pub fn pixels(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Exact aspect ratio, unreduced (`1920:1080`)
    pub fn aspect_ratio(&self) -> Frac {
        Frac::new(self.width as f64, self.height as f64)
    }

    /// Portrait textures are reported rotated by some decoders
    pub fn is_portrait(&self) -> bool {
        self.height > self.width
    }

    /// Swap width and height
    pub fn rotated(&self) -> Self {
        Self::new(self.height, self.width)
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self::FHD_1080P
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Resolution {
    type Err = Error;

    /// Parse `WIDTHxHEIGHT`, e.g. `1920x1080`
    fn from_str(s: &str) -> Result<Self> {
        let (width, height) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(|| Error::InvalidResolution(s.to_string()))?;

        let parse = |v: &str| {
            v.trim()
                .parse::<u32>()
                .map_err(|_| Error::InvalidResolution(s.to_string()))
        };

        Ok(Self::new(parse(width)?, parse(height)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_aspect_ratio() {
        let ar = Resolution::FHD_1080P.aspect_ratio();
        assert_eq!(ar.to_ratio_text(), "1920:1080");
        assert_eq!(ar.reduced(), Frac::from_decimal(1920.0 / 1080.0));
        assert_eq!(Resolution::SBS_1080P.aspect_ratio().to_decimal(), 32.0 / 9.0);
    }

    #[test]
    fn test_resolution_parse() {
        assert_eq!(
            "1280x720".parse::<Resolution>().unwrap(),
            Resolution::HD_720P
        );
        assert_eq!(
            " 3840X2160 ".parse::<Resolution>().unwrap(),
            Resolution::UHD_4K
        );
        assert!("1280".parse::<Resolution>().is_err());
        assert!("wide x 720".parse::<Resolution>().is_err());
    }

    #[test]
    fn test_resolution_display_and_rotation() {
        assert_eq!(Resolution::HD_720P.to_string(), "1280x720");
        assert!(Resolution::HD_720P.rotated().is_portrait());
        assert_eq!(Resolution::UHD_4K.pixels(), 8_294_400);
    }
}
