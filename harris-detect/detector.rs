use harris_core::{Corner, Field, HarrisParams, Image};
use log::debug;
use std::time::Instant;
use crate::config::validate_params;
use crate::error::HarrisResult;
use crate::gradient::sobel_gradients;
use crate::maxima::extract_candidates;
use crate::response::harris_response;
use crate::suppression::suppress_close_corners;
use crate::types::{Detection, GradientField, ScoredCorner};

/// Harris corner detector: gradients -> response -> ranked maxima -> suppression.
///
/// Holds only validated parameters, so one detector can be shared across
/// threads and images.
#[derive(Debug, Clone)]
pub struct HarrisDetector {
    params: HarrisParams,
}

impl HarrisDetector {
    /// Creates a new Harris detector with validation
    pub fn new(params: HarrisParams) -> HarrisResult<Self> {
        validate_params(&params)?;
        Ok(Self { params })
    }

    /// Sobel gradients of the image
    pub fn gradients(&self, img: &Image) -> GradientField {
        sobel_gradients(img)
    }

    /// Raw corner response from gradients
    pub fn response(&self, grads: &GradientField) -> HarrisResult<Field> {
        harris_response(grads, self.params.k, self.params.window_size)
    }

    /// Ranked, capped local maxima of a raw response field
    pub fn candidates(&self, response: &Field) -> Vec<ScoredCorner> {
        extract_candidates(response, self.params.threshold, self.params.max_corners)
    }

    /// Enforce the minimum pairwise distance on ranked candidates
    pub fn suppress(&self, candidates: &[ScoredCorner]) -> Vec<ScoredCorner> {
        suppress_close_corners(candidates, self.params.min_distance)
    }

    /// Run every stage and keep the intermediate outputs
    pub fn detect_with_response(&self, img: &Image) -> HarrisResult<Detection> {
        let (w, h) = img.dimensions();

        let t0 = Instant::now();
        let grads = self.gradients(img);
        debug!("gradients {}x{} in {:.2?}", w, h, t0.elapsed());

        let t1 = Instant::now();
        let response = self.response(&grads)?;
        debug!(
            "response (k={}, window={}) in {:.2?}",
            self.params.k,
            self.params.window_size,
            t1.elapsed()
        );

        let t2 = Instant::now();
        let candidates = self.candidates(&response);
        debug!(
            "{} candidates above {} in {:.2?}",
            candidates.len(),
            self.params.threshold,
            t2.elapsed()
        );

        let corners = self.suppress(&candidates);
        debug!(
            "{} corners kept after min distance {}",
            corners.len(),
            self.params.min_distance
        );

        Ok(Detection {
            response,
            candidates,
            corners,
        })
    }

    /// Detect corners with their normalised scores, strongest first
    pub fn detect(&self, img: &Image) -> HarrisResult<Vec<ScoredCorner>> {
        Ok(self.detect_with_response(img)?.corners)
    }

    /// Detect corner positions only
    pub fn detect_corners(&self, img: &Image) -> HarrisResult<Vec<Corner>> {
        Ok(self.detect_with_response(img)?.positions())
    }

    /// Get detector parameters
    pub fn params(&self) -> &HarrisParams {
        &self.params
    }
}
