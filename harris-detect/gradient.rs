use harris_core::{Field, Image};
use rayon::prelude::*;
use crate::types::GradientField;

/// Sobel X kernel: [-1, 0, 1; -2, 0, 2; -1, 0, 1]
pub const SOBEL_X: [[f32; 3]; 3] = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];

/// Sobel Y kernel: [-1, -2, -1; 0, 0, 0; 1, 2, 1]
pub const SOBEL_Y: [[f32; 3]; 3] = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Compute raw (unnormalised) Sobel gradients of an 8-bit image.
///
/// Only interior pixels are convolved; the one-pixel border of both fields
/// stays at zero. Images narrower or shorter than 3 pixels give all-zero fields.
pub fn sobel_gradients(img: &Image) -> GradientField {
    let (w, h) = img.dimensions();
    let mut ix = Field::new(w, h);
    let mut iy = Field::new(w, h);

    if w < 3 || h < 3 {
        return GradientField { ix, iy };
    }

    let src = img.as_slice();
    ix.as_mut_slice()
        .par_chunks_mut(w)
        .zip(iy.as_mut_slice().par_chunks_mut(w))
        .enumerate()
        .filter(|(y, _)| *y > 0 && *y < h - 1)
        .for_each(|(y, (row_x, row_y))| {
            for x in 1..w - 1 {
                let mut gx = 0.0f32;
                let mut gy = 0.0f32;
                for (i, (kx, ky)) in SOBEL_X.iter().zip(SOBEL_Y.iter()).enumerate() {
                    let base = (y + i - 1) * w + x - 1;
                    for j in 0..3 {
                        let pixel = src[base + j] as f32;
                        gx += kx[j] * pixel;
                        gy += ky[j] * pixel;
                    }
                }
                row_x[x] = gx;
                row_y[x] = gy;
            }
        });

    GradientField { ix, iy }
}
