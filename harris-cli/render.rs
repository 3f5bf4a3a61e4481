use harris_core::{Corner, Field, Grid, Image};
use harris_detect::maxima::normalize_range;
use image::{GrayImage, Luma, Rgb, RgbImage};
use imageproc::drawing::draw_hollow_circle_mut;

/// Inner radius of the ring drawn around each corner
pub const RING_RADIUS: i32 = 4;
pub const RING_COLOR: Rgb<u8> = Rgb([0, 255, 0]);

/// Draw a two-pixel-wide ring at every corner
pub fn draw_corners(canvas: &mut RgbImage, corners: &[Corner]) {
    for corner in corners {
        let center = (corner.x as i32, corner.y as i32);
        draw_hollow_circle_mut(canvas, center, RING_RADIUS, RING_COLOR);
        draw_hollow_circle_mut(canvas, center, RING_RADIUS + 1, RING_COLOR);
    }
}

/// BT.601 luma weights (0.299, 0.587, 0.114) in 14-bit fixed point
const LUMA_R: u32 = 4899;
const LUMA_G: u32 = 9617;
const LUMA_B: u32 = 1868;
const LUMA_SHIFT: u32 = 14;

/// Convert an RGB8 image to the detector's grayscale grid.
///
/// Y = 0.299 * R + 0.587 * G + 0.114 * B, rounded to nearest. The weights sum
/// to exactly `1 << 14`, so gray inputs come back unchanged.
pub fn gray_from_rgb(rgb: &RgbImage) -> Image {
    let (w, h) = rgb.dimensions();
    Grid::from_fn(w as usize, h as usize, |x, y| {
        let [r, g, b] = rgb.get_pixel(x as u32, y as u32).0;
        let luma = r as u32 * LUMA_R + g as u32 * LUMA_G + b as u32 * LUMA_B;
        ((luma + (1 << (LUMA_SHIFT - 1))) >> LUMA_SHIFT) as u8
    })
}

/// Min-max stretch a field onto 0-255 for viewing
pub fn field_to_gray(field: &Field) -> GrayImage {
    let stretched = normalize_range(field, 0.0, 255.0);
    GrayImage::from_fn(field.width() as u32, field.height() as u32, |x, y| {
        Luma([stretched.get(x as usize, y as usize).round() as u8])
    })
}
