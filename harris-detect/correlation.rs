//! Direct "valid"-mode correlation and convolution of 8-bit images with small
//! floating point kernels. No padding: the output shrinks by `kernel - 1`
//! along each axis.

use harris_core::{Field, Grid, Image};
use rayon::prelude::*;

/// 3x3 edge kernel [1, 0, -1; 2, 0, -2; 1, 0, -1]
pub fn demo_kernel() -> Field {
    Grid::from_fn(3, 3, |x, y| {
        let weight = if y == 1 { 2.0 } else { 1.0 };
        match x {
            0 => weight,
            2 => -weight,
            _ => 0.0,
        }
    })
}

/// Kernel rotated by 180 degrees
pub fn flip_kernel(kernel: &Field) -> Field {
    let (kw, kh) = kernel.dimensions();
    Grid::from_fn(kw, kh, |x, y| kernel.get(kw - 1 - x, kh - 1 - y))
}

/// Cross-correlation: `out(x, y) = sum img(x + v, y + u) * kernel(v, u)`
pub fn correlate(image: &Image, kernel: &Field) -> Field {
    let (w, h) = image.dimensions();
    let (kw, kh) = kernel.dimensions();
    if kw == 0 || kh == 0 || kw > w || kh > h {
        return Field::new(0, 0);
    }

    let out_w = w - kw + 1;
    let out_h = h - kh + 1;
    let mut out = Field::new(out_w, out_h);
    out.as_mut_slice()
        .par_chunks_mut(out_w)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, value) in row.iter_mut().enumerate() {
                let mut sum = 0.0f32;
                for u in 0..kh {
                    let src = &image.row(y + u)[x..x + kw];
                    for (v, &pixel) in src.iter().enumerate() {
                        sum += pixel as f32 * kernel.get(v, u);
                    }
                }
                *value = sum;
            }
        });
    out
}

/// Convolution: correlation with the flipped kernel
pub fn convolve(image: &Image, kernel: &Field) -> Field {
    correlate(image, &flip_kernel(kernel))
}
