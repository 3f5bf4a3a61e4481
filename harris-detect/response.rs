use harris_core::Field;
use rayon::prelude::*;
use crate::config::validate_window_size;
use crate::error::{HarrisError, HarrisResult};
use crate::smoothing::gaussian_blur;
use crate::types::{GradientField, StructureTensor};

/// Element-wise product of two same-shaped fields
fn product(a: &Field, b: &Field) -> Field {
    let mut out = Field::new(a.width(), a.height());
    out.as_mut_slice()
        .par_iter_mut()
        .zip(a.as_slice().par_iter().zip(b.as_slice().par_iter()))
        .for_each(|(o, (&p, &q))| *o = p * q);
    out
}

/// Build the smoothed second-moment matrix from gradients.
///
/// The three products Ix², IxIy and Iy² are blurred independently with the
/// same `window_size` Gaussian, which must be odd and at least 3.
pub fn structure_tensor(grads: &GradientField, window_size: usize) -> HarrisResult<StructureTensor> {
    validate_window_size(window_size)?;
    if grads.ix.dimensions() != grads.iy.dimensions() {
        return Err(HarrisError::ShapeMismatch {
            ix: grads.ix.dimensions(),
            iy: grads.iy.dimensions(),
        });
    }

    let (xx, (xy, yy)) = rayon::join(
        || gaussian_blur(&product(&grads.ix, &grads.ix), window_size),
        || {
            rayon::join(
                || gaussian_blur(&product(&grads.ix, &grads.iy), window_size),
                || gaussian_blur(&product(&grads.iy, &grads.iy), window_size),
            )
        },
    );

    Ok(StructureTensor { xx, xy, yy })
}

/// Harris score for one symmetric 2x2 matrix [[a, b], [b, c]]
#[inline]
pub fn corner_score(a: f32, b: f32, c: f32, k: f32) -> f32 {
    let det = a * c - b * b;
    let trace = a + c;
    det - k * trace * trace
}

/// Per-pixel response `det(M) - k * trace(M)^2` of a structure tensor.
///
/// Positive: corner. Negative: edge. Near zero: flat.
pub fn tensor_response(tensor: &StructureTensor, k: f32) -> Field {
    let (w, h) = tensor.xx.dimensions();
    let mut response = Field::new(w, h);
    response
        .as_mut_slice()
        .par_iter_mut()
        .enumerate()
        .for_each(|(i, r)| {
            let a = tensor.xx.as_slice()[i];
            let b = tensor.xy.as_slice()[i];
            let c = tensor.yy.as_slice()[i];
            *r = corner_score(a, b, c, k);
        });
    response
}

/// Gradients to response field in one call
pub fn harris_response(grads: &GradientField, k: f32, window_size: usize) -> HarrisResult<Field> {
    let tensor = structure_tensor(grads, window_size)?;
    Ok(tensor_response(&tensor, k))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::sobel_gradients;
    use approx::assert_relative_eq;
    use harris_core::Grid;

    #[test]
    fn test_corner_score_classifies_structure() {
        // Two strong eigenvalues: corner
        assert!(corner_score(100.0, 0.0, 100.0, 0.04) > 0.0);
        // One strong eigenvalue: edge
        assert!(corner_score(100.0, 0.0, 0.0, 0.04) < 0.0);
        // Flat
        assert_eq!(corner_score(0.0, 0.0, 0.0, 0.04), 0.0);
        assert_relative_eq!(corner_score(2.0, 1.0, 3.0, 0.05), 5.0 - 0.05 * 25.0);
    }

    #[test]
    fn test_constant_image_has_zero_response() {
        let img = Grid::filled(12, 9, 77u8);
        let response = harris_response(&sobel_gradients(&img), 0.04, 5).unwrap();
        assert_eq!(response.dimensions(), (12, 9));
        assert!(response.as_slice().iter().all(|&r| r == 0.0));
    }

    #[test]
    fn test_corner_beats_edge() {
        // Bright quadrant: corner at (10, 10), straight edges elsewhere
        let img = Grid::from_fn(20, 20, |x, y| if x >= 10 && y >= 10 { 255 } else { 0 });
        let response = harris_response(&sobel_gradients(&img), 0.04, 5).unwrap();
        let corner = response.get(10, 10);
        let edge = response.get(10, 16);
        assert!(corner > 0.0);
        assert!(edge < 0.0);
        assert!(corner > response.get(15, 15));
    }

    #[test]
    fn test_tensor_matches_products_for_uniform_gradients() {
        let grads = GradientField {
            ix: Grid::filled(5, 5, 2.0),
            iy: Grid::filled(5, 5, 3.0),
        };
        let tensor = structure_tensor(&grads, 3).unwrap();
        assert_relative_eq!(tensor.xx.get(2, 2), 4.0);
        assert_relative_eq!(tensor.xy.get(0, 4), 6.0);
        assert_relative_eq!(tensor.yy.get(4, 0), 9.0);
    }

    #[test]
    fn test_invalid_window_is_rejected() {
        let img = Grid::from_fn(20, 20, |x, y| if x >= 10 && y >= 10 { 255 } else { 0 });
        let grads = sobel_gradients(&img);
        for window in [0, 1, 2, 4, 6] {
            assert_eq!(
                harris_response(&grads, 0.04, window),
                Err(HarrisError::InvalidWindowSize(window))
            );
        }
        assert!(structure_tensor(&grads, 4).is_err());
    }

    #[test]
    fn test_response_peaks_on_quadrant_corner() {
        let img = Grid::from_fn(20, 20, |x, y| if x >= 10 && y >= 10 { 255 } else { 0 });
        let grads = sobel_gradients(&img);
        for window in [3, 5, 7] {
            let response = harris_response(&grads, 0.04, window).unwrap();
            let (w, _) = response.dimensions();
            let peak = response
                .as_slice()
                .iter()
                .enumerate()
                .max_by(|a, b| a.1.total_cmp(b.1))
                .map(|(i, _)| (i % w, i / w));
            assert_eq!(peak, Some((10, 10)));
        }
    }

    #[test]
    fn test_shape_mismatch_is_rejected() {
        let grads = GradientField {
            ix: Field::new(4, 4),
            iy: Field::new(4, 5),
        };
        assert!(matches!(
            structure_tensor(&grads, 3),
            Err(HarrisError::ShapeMismatch { .. })
        ));
    }
}
