//! Vector trophy drawn when no font can render the trophy glyph.
//!
//! The trophy is built from a cup ellipse, two handle arcs, a stem and a base
//! plate. Every dimension is a fixed proportion of the trophy size, which is
//! itself 60% of the icon size.

use image::{Rgba, RgbaImage};
use imageproc::{
    drawing::{
        draw_filled_ellipse_mut, draw_filled_rect_mut, draw_hollow_ellipse_mut,
        draw_hollow_rect_mut,
    },
    rect::Rect,
};

pub const GOLD: Rgba<u8> = Rgba([255, 215, 0, 255]);
pub const DARK_GOLD: Rgba<u8> = Rgba([200, 170, 0, 255]);

const CUP_OUTLINE_WIDTH: u32 = 3;
const HANDLE_WIDTH: u32 = 8;
const PLATE_OUTLINE_WIDTH: u32 = 2;

/// Inclusive pixel box, `right` and `bottom` included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl BoundingBox {
    fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn center(&self) -> (i32, i32) {
        ((self.left + self.right) / 2, (self.top + self.bottom) / 2)
    }

    /// Whether the whole box lies on a `width` x `height` canvas.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.left >= 0
            && self.top >= 0
            && self.right < width as i32
            && self.bottom < height as i32
            && self.left <= self.right
            && self.top <= self.bottom
    }

    fn inset(&self, amount: i32) -> Option<Self> {
        let inner = Self::new(
            self.left + amount,
            self.top + amount,
            self.right - amount,
            self.bottom - amount,
        );
        (inner.left <= inner.right && inner.top <= inner.bottom).then_some(inner)
    }

    fn to_rect(self) -> Rect {
        Rect::at(self.left, self.top).of_size(
            (self.right - self.left + 1) as u32,
            (self.bottom - self.top + 1) as u32,
        )
    }
}

/// Positions of every trophy part for one icon size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrophyLayout {
    pub cup: BoundingBox,
    pub left_handle: BoundingBox,
    pub right_handle: BoundingBox,
    pub stem: BoundingBox,
    pub base: BoundingBox,
}

impl TrophyLayout {
    pub fn for_icon_size(size: u32) -> Self {
        let trophy_size = (size as f32 * 0.6) as i32;
        let proportion = |factor: f32| (trophy_size as f32 * factor) as i32;
        let center_x = (size / 2) as i32;
        let center_y = (size / 2) as i32;

        let cup_width = proportion(0.7);
        let cup_height = proportion(0.5);
        let cup_left = center_x - cup_width / 2;
        let cup_top = center_y - cup_height / 2 - proportion(0.1);
        let cup = BoundingBox::new(
            cup_left,
            cup_top,
            cup_left + cup_width,
            cup_top + cup_height,
        );

        let handle_width = proportion(0.15);
        let handle_height = proportion(0.3);
        let handle_top = cup_top + cup_height / 4;
        let left_handle_x = cup_left - handle_width;
        let right_handle_x = cup_left + cup_width - handle_width;
        let left_handle = BoundingBox::new(
            left_handle_x,
            handle_top,
            left_handle_x + handle_width * 2,
            handle_top + handle_height,
        );
        let right_handle = BoundingBox::new(
            right_handle_x,
            handle_top,
            right_handle_x + handle_width * 2,
            handle_top + handle_height,
        );

        let stem_width = proportion(0.2);
        let stem_height = proportion(0.25);
        let stem_left = center_x - stem_width / 2;
        let stem_top = cup_top + cup_height;
        let stem = BoundingBox::new(
            stem_left,
            stem_top,
            stem_left + stem_width,
            stem_top + stem_height,
        );

        let base_width = proportion(0.5);
        let base_height = proportion(0.1);
        let base_left = center_x - base_width / 2;
        let base_top = stem_top + stem_height;
        let base = BoundingBox::new(
            base_left,
            base_top,
            base_left + base_width,
            base_top + base_height,
        );

        Self {
            cup,
            left_handle,
            right_handle,
            stem,
            base,
        }
    }

    pub fn parts(&self) -> [BoundingBox; 5] {
        [
            self.cup,
            self.left_handle,
            self.right_handle,
            self.stem,
            self.base,
        ]
    }
}

/// Draw the vector trophy centered on a square canvas of `size` pixels.
pub fn draw_trophy(canvas: &mut RgbaImage, size: u32) {
    let layout = TrophyLayout::for_icon_size(size);

    draw_outlined_ellipse(canvas, layout.cup, GOLD, DARK_GOLD, CUP_OUTLINE_WIDTH);
    // Angles run clockwise from 3 o'clock: the left handle spans the
    // bottom-left-top half, the right handle the top-right-bottom half.
    draw_arc(canvas, layout.left_handle, 90.0, 270.0, GOLD, HANDLE_WIDTH);
    draw_arc(canvas, layout.right_handle, 270.0, 90.0, GOLD, HANDLE_WIDTH);
    draw_outlined_rect(canvas, layout.stem, GOLD, DARK_GOLD, PLATE_OUTLINE_WIDTH);
    draw_outlined_rect(canvas, layout.base, GOLD, DARK_GOLD, PLATE_OUTLINE_WIDTH);
}

fn draw_outlined_ellipse(
    canvas: &mut RgbaImage,
    bounds: BoundingBox,
    fill: Rgba<u8>,
    outline: Rgba<u8>,
    outline_width: u32,
) {
    let center = bounds.center();
    let radius_x = (bounds.right - bounds.left) / 2;
    let radius_y = (bounds.bottom - bounds.top) / 2;

    draw_filled_ellipse_mut(canvas, center, radius_x, radius_y, fill);

    for inset in 0..outline_width as i32 {
        let (rx, ry) = (radius_x - inset, radius_y - inset);
        if rx <= 0 || ry <= 0 {
            break;
        }
        draw_hollow_ellipse_mut(canvas, center, rx, ry, outline);
    }
}

fn draw_outlined_rect(
    canvas: &mut RgbaImage,
    bounds: BoundingBox,
    fill: Rgba<u8>,
    outline: Rgba<u8>,
    outline_width: u32,
) {
    draw_filled_rect_mut(canvas, bounds.to_rect(), fill);

    for inset in 0..outline_width as i32 {
        match bounds.inset(inset) {
            Some(ring) => draw_hollow_rect_mut(canvas, ring.to_rect(), outline),
            None => break,
        }
    }
}

/// Draw a thick elliptical arc inscribed in `bounds`.
///
/// The stroke grows inward from the ellipse edge. Angles are in degrees,
/// measured clockwise from the positive x axis, and the arc runs from
/// `start` to `end` in that direction (wrapping through 0).
fn draw_arc(
    canvas: &mut RgbaImage,
    bounds: BoundingBox,
    start: f32,
    end: f32,
    color: Rgba<u8>,
    stroke_width: u32,
) {
    let center_x = (bounds.left + bounds.right) as f32 / 2.0;
    let center_y = (bounds.top + bounds.bottom) as f32 / 2.0;
    let outer_x = (bounds.right - bounds.left) as f32 / 2.0;
    let outer_y = (bounds.bottom - bounds.top) as f32 / 2.0;
    if outer_x <= 0.0 || outer_y <= 0.0 {
        return;
    }

    let inner_x = outer_x - stroke_width as f32;
    let inner_y = outer_y - stroke_width as f32;
    let has_hole = inner_x > 0.0 && inner_y > 0.0;

    let (width, height) = canvas.dimensions();

    for y in bounds.top.max(0)..=bounds.bottom.min(height as i32 - 1) {
        for x in bounds.left.max(0)..=bounds.right.min(width as i32 - 1) {
            let dx = x as f32 - center_x;
            let dy = y as f32 - center_y;

            let outer = (dx / outer_x).powi(2) + (dy / outer_y).powi(2);
            if outer > 1.0 {
                continue;
            }
            if has_hole && (dx / inner_x).powi(2) + (dy / inner_y).powi(2) < 1.0 {
                continue;
            }

            if angle_in_sweep(dy.atan2(dx).to_degrees().rem_euclid(360.0), start, end) {
                canvas.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}

fn angle_in_sweep(angle: f32, start: f32, end: f32) -> bool {
    if start <= end {
        angle >= start && angle <= end
    } else {
        angle >= start || angle <= end
    }
}
