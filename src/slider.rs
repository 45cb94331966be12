//! Aspect-ratio slider mapping
//!
//! Maps the position of a UI slider to a quantized [`Frac`] and back.
//! A linear slider moves the decimal ratio directly; an exponential slider
//! moves the base-2 exponent so equal travel doubles or halves the ratio.

use crate::error::{Error, Result};
use crate::frac::Frac;
use serde::{Deserialize, Serialize};

/// How slider positions map to ratios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SliderScale {
    /// Position is the decimal ratio
    #[default]
    Linear,
    /// Position is `log2` of the ratio
    Exponential,
}

/// Slider settings as stored in the config file
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    pub scale: SliderScale,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.5,
            max: 3.0,
            scale: SliderScale::Linear,
        }
    }
}

impl SliderConfig {
    /// Exponential slider spanning 1:2 to 4:1
    pub fn exponential() -> Self {
        Self {
            min: -1.0,
            max: 2.0,
            scale: SliderScale::Exponential,
        }
    }
}

/// Validated slider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectSlider {
    min: f64,
    max: f64,
    scale: SliderScale,
}

impl AspectSlider {
    pub fn new(min: f64, max: f64, scale: SliderScale) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(Error::Config(format!(
                "slider bounds must be finite, got {min}..{max}"
            )));
        }
        if min >= max {
            return Err(Error::Config(format!(
                "slider minimum {min} must be below maximum {max}"
            )));
        }
        Ok(Self { min, max, scale })
    }

    pub fn from_config(config: &SliderConfig) -> Result<Self> {
        Self::new(config.min, config.max, config.scale)
    }

    pub fn scale(&self) -> SliderScale {
        self.scale
    }

    pub fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Ratio selected at a slider position
    ///
    /// Linear positions are rounded to two decimals before quantizing.
    pub fn ratio_at(&self, value: f64) -> Frac {
        let value = self.clamp(value);
        let frac = match self.scale {
            SliderScale::Linear => Frac::from_decimal((value * 100.0).round() / 100.0),
            SliderScale::Exponential => Frac::from_exponent(value),
        };
        tracing::debug!(value, ratio = %frac, "Aspect-ratio slider moved");
        frac
    }

    /// Slider position that shows the given ratio
    ///
    /// Non-positive ratios on an exponential slider pin to the minimum.
    pub fn position_of(&self, frac: &Frac) -> f64 {
        let value = match self.scale {
            SliderScale::Linear => frac.to_decimal(),
            SliderScale::Exponential => match frac.checked_exponent() {
                Ok(exp) => exp,
                Err(_) => self.min,
            },
        };
        self.clamp(value)
    }

    fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }
}

impl Default for AspectSlider {
    fn default() -> Self {
        let config = SliderConfig::default();
        Self {
            min: config.min,
            max: config.max,
            scale: config.scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_rounds_to_hundredths() {
        let slider = AspectSlider::default();
        // 1.777 rounds to 1.78, quantized to 227/128
        assert_eq!(slider.ratio_at(1.777), Frac::new(227.0, 128.0));
        assert_eq!(slider.ratio_at(1.5), Frac::new(3.0, 2.0));
    }

    #[test]
    fn test_linear_clamps() {
        let slider = AspectSlider::default();
        assert_eq!(slider.ratio_at(10.0), Frac::new(3.0, 1.0));
        assert_eq!(slider.ratio_at(0.0), Frac::new(1.0, 2.0));
        assert_eq!(slider.ratio_at(f64::NAN), Frac::new(1.0, 2.0));
    }

    #[test]
    fn test_exponential_doubles_per_step() {
        let slider = AspectSlider::from_config(&SliderConfig::exponential()).unwrap();
        assert_eq!(slider.ratio_at(0.0), Frac::ONE);
        assert_eq!(slider.ratio_at(1.0), Frac::new(2.0, 1.0));
        assert_eq!(slider.ratio_at(2.0), Frac::new(4.0, 1.0));
        assert_eq!(slider.ratio_at(-1.0), Frac::new(1.0, 2.0));
    }

    #[test]
    fn test_position_of() {
        let linear = AspectSlider::default();
        assert_eq!(linear.position_of(&Frac::new(3.0, 2.0)), 1.5);
        assert_eq!(linear.position_of(&Frac::new(8.0, 1.0)), 3.0);

        let exp = AspectSlider::from_config(&SliderConfig::exponential()).unwrap();
        assert_eq!(exp.position_of(&Frac::new(2.0, 1.0)), 1.0);
        assert_eq!(exp.position_of(&Frac::new(0.0, 1.0)), -1.0);
        assert_eq!(exp.position_of(&Frac::new(-2.0, 1.0)), -1.0);
    }

    #[test]
    fn test_invalid_bounds() {
        assert!(matches!(
            AspectSlider::new(2.0, 1.0, SliderScale::Linear),
            Err(Error::Config(_))
        ));
        assert!(AspectSlider::new(1.0, 1.0, SliderScale::Linear).is_err());
        assert!(AspectSlider::new(f64::NEG_INFINITY, 1.0, SliderScale::Exponential).is_err());
    }
}
