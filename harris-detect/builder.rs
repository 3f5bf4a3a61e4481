use harris_core::HarrisParams;
use crate::config::DetectorConfig;
use crate::detector::HarrisDetector;
use crate::error::HarrisResult;

/// Builder for creating a `HarrisDetector`
#[derive(Debug, Clone, Default)]
pub struct DetectorBuilder {
    params: HarrisParams,
}

impl DetectorBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Harris sensitivity constant `k`
    pub fn k(mut self, k: f32) -> Self {
        self.params.k = k;
        self
    }

    /// Set the Gaussian window used to smooth the structure tensor
    pub fn window_size(mut self, window_size: usize) -> Self {
        self.params.window_size = window_size;
        self
    }

    /// Set the normalised response threshold (0-1)
    pub fn threshold(mut self, threshold: f32) -> Self {
        self.params.threshold = threshold;
        self
    }

    /// Set the candidate cap applied before suppression
    pub fn max_corners(mut self, max_corners: usize) -> Self {
        self.params.max_corners = max_corners;
        self
    }

    /// Set the minimum pixel distance between accepted corners
    pub fn min_distance(mut self, min_distance: f32) -> Self {
        self.params.min_distance = min_distance;
        self
    }

    /// Set the number of threads for parallel processing
    pub fn threads(mut self, n_threads: usize) -> Self {
        self.params.n_threads = n_threads;
        self
    }

    /// Build the `HarrisDetector`
    pub fn build(self) -> HarrisResult<HarrisDetector> {
        HarrisDetector::new(self.params)
    }

    /// Generate a summary of the builder's configuration
    pub fn summary(&self) -> String {
        self.clone().to_config().summary()
    }

    /// Create a builder from an existing `DetectorConfig`
    pub fn from_config(config: DetectorConfig) -> Self {
        Self {
            params: config.params,
        }
    }

    /// Convert the builder into a `DetectorConfig`
    pub fn to_config(self) -> DetectorConfig {
        DetectorConfig::new(self.params)
    }

    pub fn params(&self) -> &HarrisParams {
        &self.params
    }
}
