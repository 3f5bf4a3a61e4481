use harris_core::HarrisParams;
use crate::builder::DetectorBuilder;
use crate::error::{HarrisError, HarrisResult};

#[cfg(feature = "serde")]
use crate::error::ConfigResult;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Smoothing windows must be odd and at least 3 wide
pub fn validate_window_size(window_size: usize) -> HarrisResult<()> {
    if window_size < 3 || window_size % 2 == 0 {
        return Err(HarrisError::InvalidWindowSize(window_size));
    }
    Ok(())
}

/// Check every tunable against its valid range
pub fn validate_params(params: &HarrisParams) -> HarrisResult<()> {
    if !params.k.is_finite() || params.k < 0.0 {
        return Err(HarrisError::InvalidSensitivity(params.k));
    }
    validate_window_size(params.window_size)?;
    if !(0.0..=1.0).contains(&params.threshold) {
        return Err(HarrisError::InvalidThreshold(params.threshold));
    }
    if !params.min_distance.is_finite() || params.min_distance < 0.0 {
        return Err(HarrisError::InvalidMinDistance(params.min_distance));
    }
    if params.n_threads == 0 {
        return Err(HarrisError::InvalidThreadCount(params.n_threads));
    }
    Ok(())
}

/// Complete detector configuration with metadata
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DetectorConfig {
    /// Metadata
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub name: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub description: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub version: Option<String>,
    /// Pipeline tunables
    pub params: HarrisParams,
}

impl DetectorConfig {
    pub fn new(params: HarrisParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    /// Add metadata to configuration
    pub fn with_metadata(mut self, name: &str, description: &str) -> Self {
        self.name = Some(name.to_string());
        self.description = Some(description.to_string());
        self.version = Some("1.0".to_string());
        self
    }

    /// Convert to DetectorBuilder for further customization
    pub fn to_builder(self) -> DetectorBuilder {
        DetectorBuilder::from_config(self)
    }

    /// Generate human-readable summary
    pub fn summary(&self) -> String {
        let p = &self.params;
        format!(
            "DetectorConfig{}: k={}, window={}, threshold={}, max_corners={}, min_distance={:.1}, threads={}",
            self.name.as_deref().map(|n| format!(" '{}'", n)).unwrap_or_default(),
            p.k, p.window_size, p.threshold, p.max_corners, p.min_distance, p.n_threads
        )
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> HarrisResult<()> {
        validate_params(&self.params)
    }

    /// Save configuration to JSON file
    #[cfg(feature = "serde")]
    pub fn save_json<P: AsRef<std::path::Path>>(&self, path: P) -> ConfigResult<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Load configuration from JSON file
    #[cfg(feature = "serde")]
    pub fn load_json<P: AsRef<std::path::Path>>(path: P) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Save configuration to TOML file
    #[cfg(feature = "serde")]
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> ConfigResult<()> {
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Load configuration from TOML file
    #[cfg(feature = "serde")]
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(feature = "serde")]
    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    #[cfg(feature = "serde")]
    pub fn from_toml(toml_str: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }
}
