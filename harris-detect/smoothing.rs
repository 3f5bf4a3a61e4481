//! Separable Gaussian smoothing of floating point fields.
//!
//! Kernels follow the automatic-sigma convention of common imaging libraries:
//! fixed binomial taps for windows up to 7, a sampled Gaussian with
//! `sigma = 0.3 * ((n - 1) / 2 - 1) + 0.8` beyond that. Borders are handled by
//! reflect-101 (`dcb|abcd|cba`) so the output keeps the input shape.

use harris_core::Field;
use rayon::prelude::*;

const SMALL_GAUSSIAN: [&[f32]; 4] = [
    &[1.0],
    &[0.25, 0.5, 0.25],
    &[0.0625, 0.25, 0.375, 0.25, 0.0625],
    &[0.03125, 0.109375, 0.21875, 0.28125, 0.21875, 0.109375, 0.03125],
];

/// Sigma implied by a window size when none is given explicitly
pub fn sigma_for_window(window_size: usize) -> f32 {
    0.3 * ((window_size as f32 - 1.0) * 0.5 - 1.0) + 0.8
}

/// 1-D Gaussian taps for an odd window, normalised to unit sum
pub fn gaussian_kernel_1d(window_size: usize) -> Vec<f32> {
    if window_size % 2 == 1 && window_size <= 7 {
        return SMALL_GAUSSIAN[window_size / 2].to_vec();
    }

    let sigma = sigma_for_window(window_size);
    let mean = (window_size as f32 - 1.0) / 2.0;
    let two_sigma_sq = 2.0 * sigma * sigma;
    let mut kernel: Vec<f32> = (0..window_size)
        .map(|i| {
            let x = i as f32 - mean;
            (-(x * x) / two_sigma_sq).exp()
        })
        .collect();

    let norm: f32 = kernel.iter().sum();
    kernel.iter_mut().for_each(|k| *k /= norm);
    kernel
}

/// Reflect an out-of-range index back into `0..len` without repeating the edge
#[inline]
pub fn reflect_101(index: isize, len: usize) -> usize {
    if len == 1 {
        return 0;
    }
    let last = len as isize - 1;
    let mut i = index;
    while i < 0 || i > last {
        if i < 0 {
            i = -i;
        }
        if i > last {
            i = 2 * last - i;
        }
    }
    i as usize
}

/// Horizontal pass
fn convolve_rows(src: &Field, kernel: &[f32]) -> Field {
    let (w, h) = src.dimensions();
    let mut dst = Field::new(w, h);
    let half = (kernel.len() / 2) as isize;

    dst.as_mut_slice()
        .par_chunks_mut(w)
        .enumerate()
        .for_each(|(y, out)| {
            let row = src.row(y);
            for (x, value) in out.iter_mut().enumerate() {
                let mut acc = 0.0f32;
                for (ki, &kv) in kernel.iter().enumerate() {
                    let sx = reflect_101(x as isize + ki as isize - half, w);
                    acc += row[sx] * kv;
                }
                *value = acc;
            }
        });
    dst
}

/// Vertical pass
fn convolve_cols(src: &Field, kernel: &[f32]) -> Field {
    let (w, h) = src.dimensions();
    let mut dst = Field::new(w, h);
    let half = (kernel.len() / 2) as isize;

    dst.as_mut_slice()
        .par_chunks_mut(w)
        .enumerate()
        .for_each(|(y, out)| {
            for (x, value) in out.iter_mut().enumerate() {
                let mut acc = 0.0f32;
                for (ki, &kv) in kernel.iter().enumerate() {
                    let sy = reflect_101(y as isize + ki as isize - half, h);
                    acc += src.get(x, sy) * kv;
                }
                *value = acc;
            }
        });
    dst
}

/// Isotropic Gaussian blur with a square `window_size` window
pub fn gaussian_blur(src: &Field, window_size: usize) -> Field {
    if src.is_empty() {
        return src.clone();
    }
    let kernel = gaussian_kernel_1d(window_size);
    let horizontal = convolve_rows(src, &kernel);
    convolve_cols(&horizontal, &kernel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use harris_core::Grid;

    #[test]
    fn test_small_kernels_are_binomial() {
        assert_eq!(gaussian_kernel_1d(3), vec![0.25, 0.5, 0.25]);
        assert_eq!(gaussian_kernel_1d(5), vec![0.0625, 0.25, 0.375, 0.25, 0.0625]);
        assert_eq!(gaussian_kernel_1d(7).len(), 7);
    }

    #[test]
    fn test_large_kernel_properties() {
        let kernel = gaussian_kernel_1d(11);
        assert_eq!(kernel.len(), 11);
        assert_relative_eq!(kernel.iter().sum::<f32>(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(kernel[0], kernel[10], epsilon = 1e-7);
        let peak = kernel.iter().cloned().fold(f32::MIN, f32::max);
        assert_eq!(peak, kernel[5]);
    }

    #[test]
    fn test_sigma_for_window() {
        assert_relative_eq!(sigma_for_window(5), 1.1, epsilon = 1e-6);
        assert_relative_eq!(sigma_for_window(9), 1.7, epsilon = 1e-6);
    }

    #[test]
    fn test_reflect_101() {
        assert_eq!(reflect_101(-1, 5), 1);
        assert_eq!(reflect_101(-2, 5), 2);
        assert_eq!(reflect_101(5, 5), 3);
        assert_eq!(reflect_101(6, 5), 2);
        assert_eq!(reflect_101(3, 5), 3);
        assert_eq!(reflect_101(-3, 1), 0);
        assert_eq!(reflect_101(-3, 2), 1);
    }

    #[test]
    fn test_blur_preserves_constant_field() {
        let field = Grid::filled(6, 4, 3.5f32);
        let blurred = gaussian_blur(&field, 5);
        assert_eq!(blurred.dimensions(), (6, 4));
        for &v in blurred.as_slice() {
            assert_relative_eq!(v, 3.5, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_blur_spreads_impulse() {
        let mut field = Field::new(7, 7);
        field.set(3, 3, 16.0);
        let blurred = gaussian_blur(&field, 3);
        assert_relative_eq!(blurred.get(3, 3), 4.0);
        assert_relative_eq!(blurred.get(2, 3), 2.0);
        assert_relative_eq!(blurred.get(2, 2), 1.0);
        assert_eq!(blurred.get(0, 0), 0.0);
        assert_relative_eq!(blurred.as_slice().iter().sum::<f32>(), 16.0, epsilon = 1e-4);
    }

    #[test]
    fn test_blur_reflects_at_border() {
        // Impulse on the left edge: reflect-101 mirrors the right tap onto the left
        let mut field = Field::new(5, 1);
        field.set(1, 0, 4.0);
        let blurred = gaussian_blur(&field, 3);
        // x = 0 sees [f(1), f(0), f(1)] => 0.25*4 + 0 + 0.25*4
        assert_relative_eq!(blurred.get(0, 0), 2.0);
        assert_relative_eq!(blurred.get(1, 0), 2.0);
        assert_relative_eq!(blurred.get(2, 0), 1.0);
    }

    #[test]
    fn test_blur_empty_field() {
        let field = Field::new(0, 0);
        assert!(gaussian_blur(&field, 5).is_empty());
    }
}
