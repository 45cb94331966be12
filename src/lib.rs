//! hmd-aspect — Aspect-ratio engine for head-mounted video players
//!
//! Exact aspect-ratio handling for a VR media player: fractions that round-trip
//! through the player's `"W:H"` text, quantized decimal and exponent
//! conversions for slider control, and the preset/state logic around them.
//!
//! # Features
//!
//! - **Frac**: rational aspect ratios with arithmetic and `"16:9"` text form
//! - **Presets**: 4:3, 16:9, 16:10, 2.35:1 and source ratio
//! - **Slider**: linear or exponential slider mapping, 1/128 quantization
//! - **Config**: TOML display configuration
//!
//! # Example
//!
//! ```rust
//! use hmd_aspect::Frac;
//!
//! let ratio = Frac::from_ratio_text("16:9")?;
//! assert_eq!(ratio.to_string(), "16/9");
//!
//! let doubled = ratio * Frac::new(2.0, 1.0);
//! assert_eq!(doubled.to_ratio_text(), "32:9");
//!
//! assert_eq!(Frac::from_decimal(1.5).to_ratio_text(), "3:2");
//! # Ok::<(), hmd_aspect::Error>(())
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod frac;
pub mod preset;
pub mod slider;
pub mod types;

// Re-exports for convenience
pub use config::DisplayConfig;
pub use display::DisplayAspect;
pub use error::{Error, Result};
pub use frac::{Frac, QUANTIZATION_BASE};
pub use preset::AspectPreset;
pub use slider::{AspectSlider, SliderConfig, SliderScale};
pub use types::Resolution;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
