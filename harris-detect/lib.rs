//! Harris corner detection.
//!
//! The pipeline runs four stages over an 8-bit grayscale [`Image`]:
//!
//! 1. [`gradient`]: raw 3x3 Sobel gradients, zero on the one-pixel border.
//! 2. [`response`]: Gaussian-smoothed structure tensor and the per-pixel
//!    score `det(M) - k * trace(M)^2`.
//! 3. [`maxima`]: min-max normalisation to `[0, 1]`, threshold, 8-neighbour
//!    local maxima (plateaus pass), descending sort, cap.
//! 4. [`suppression`]: greedy rank-priority minimum-distance filter.
//!
//! [`HarrisDetector`] sequences the stages with validated [`HarrisParams`].

pub mod builder;
pub mod config;
pub mod correlation;
pub mod detector;
pub mod error;
pub mod gradient;
pub mod maxima;
pub mod response;
pub mod smoothing;
pub mod suppression;
pub mod types;

pub use builder::DetectorBuilder;
pub use config::{validate_params, DetectorConfig};
pub use detector::HarrisDetector;
pub use error::{HarrisError, HarrisResult};
#[cfg(feature = "serde")]
pub use error::{ConfigError, ConfigResult};
pub use gradient::sobel_gradients;
pub use maxima::{extract_candidates, normalize_min_max};
pub use response::harris_response;
pub use suppression::suppress_close_corners;
pub use types::{Detection, GradientField, ScoredCorner, StructureTensor};

pub use harris_core::{Corner, Field, Grid, HarrisParams, Image};
