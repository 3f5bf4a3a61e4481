use harris_core::DimensionMismatch;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum HarrisError {
    #[error(transparent)]
    Dimensions(#[from] DimensionMismatch),
    #[error("Invalid window size: {0} (must be odd and >= 3)")]
    InvalidWindowSize(usize),
    #[error("Invalid sensitivity k: {0} (must be finite and >= 0)")]
    InvalidSensitivity(f32),
    #[error("Invalid threshold: {0} (must be within [0, 1])")]
    InvalidThreshold(f32),
    #[error("Invalid minimum distance: {0} (must be finite and >= 0)")]
    InvalidMinDistance(f32),
    #[error("Invalid thread count: {0} (must be > 0)")]
    InvalidThreadCount(usize),
    #[error("Gradient fields differ in shape: {ix:?} vs {iy:?}")]
    ShapeMismatch { ix: (usize, usize), iy: (usize, usize) },
}

pub type HarrisResult<T> = Result<T, HarrisError>;

/// Failures while reading or writing a `DetectorConfig`
#[cfg(feature = "serde")]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] HarrisError),
}

#[cfg(feature = "serde")]
pub type ConfigResult<T> = Result<T, ConfigError>;
