//! Error types for hmd-aspect

use thiserror::Error;

/// Result type alias for hmd-aspect operations
pub type Result<T> = std::result::Result<T, Error>;

/// hmd-aspect error type
#[derive(Error, Debug)]
pub enum Error {
    // Ratio text errors
    #[error("Invalid ratio text {0:?}: expected \"<numerator>:<denominator>\"")]
    InvalidRatioText(String),

    #[error("Invalid number {value:?} in ratio text: {source}")]
    InvalidNumber {
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    // Domain errors
    #[error("Aspect ratio {0} is not positive")]
    NonPositiveRatio(String),

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("Invalid resolution: {0}")]
    InvalidResolution(String),

    // General errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if this error came from parsing user-supplied text
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidRatioText(_)
                | Error::InvalidNumber { .. }
                | Error::UnknownPreset(_)
                | Error::InvalidResolution(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_classification() {
        assert!(Error::InvalidRatioText("16".into()).is_parse_error());
        assert!(Error::UnknownPreset("ultrawide".into()).is_parse_error());
        assert!(!Error::Config("bad slider".into()).is_parse_error());
        assert!(!Error::NonPositiveRatio("0/1".into()).is_parse_error());
    }
}
