use image::{Rgba, RgbaImage};

/// Gradient color at the top row.
pub const GRADIENT_START: [u8; 3] = [0, 255, 255];
/// Gradient color the bottom row approaches.
pub const GRADIENT_END: [u8; 3] = [0, 204, 102];

/// Color of row `y` in a gradient of the given height.
///
/// Each channel is `start * (1 - y/height) + end * (y/height)`, truncated.
pub fn gradient_color(y: u32, height: u32) -> Rgba<u8> {
    let ratio = y as f64 / height as f64;
    let mix = |start: u8, end: u8| -> u8 {
        let value = start as f64 * (1.0 - ratio) + end as f64 * ratio;
        value.clamp(0.0, 255.0) as u8
    };

    Rgba([
        mix(GRADIENT_START[0], GRADIENT_END[0]),
        mix(GRADIENT_START[1], GRADIENT_END[1]),
        mix(GRADIENT_START[2], GRADIENT_END[2]),
        255,
    ])
}

/// Create an opaque canvas filled with the vertical aqua-to-green gradient.
pub fn create_gradient_background(width: u32, height: u32) -> RgbaImage {
    let mut canvas = RgbaImage::new(width, height);

    for (y, row) in canvas.enumerate_rows_mut() {
        let color = gradient_color(y, height);
        for (_, _, pixel) in row {
            *pixel = color;
        }
    }

    canvas
}
