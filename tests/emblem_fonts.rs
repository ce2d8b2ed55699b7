use image::RgbaImage;
use std::path::Path;
use trophy_icon_gen::{
    emblem::{draw_glyph, EmblemRenderer, EmblemStyle, FontCandidate},
    trophy::GOLD,
};

const DEJAVU_SANS: FontCandidate = FontCandidate {
    name: "DejaVu Sans",
    path: "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    macos_only: false,
};

const DEJAVU_SERIF: FontCandidate = FontCandidate {
    name: "DejaVu Serif",
    path: "/usr/share/fonts/truetype/dejavu/DejaVuSerif.ttf",
    macos_only: false,
};

const MISSING: FontCandidate = FontCandidate {
    name: "Missing",
    path: "/nonexistent/fonts/Missing.ttf",
    macos_only: false,
};

/// Glyph every DejaVu face carries an outline for.
const TEST_GLYPH: char = 'H';

fn fonts_installed(candidates: &[FontCandidate]) -> bool {
    let installed = candidates
        .iter()
        .all(|candidate| Path::new(candidate.path).exists());
    if !installed {
        eprintln!("DejaVu fonts not installed, skipping");
    }
    installed
}

/// Bounding box (min_x, min_y, max_x, max_y) of every pixel the emblem touched.
fn painted_bounds(canvas: &RgbaImage) -> Option<(u32, u32, u32, u32)> {
    canvas
        .enumerate_pixels()
        .filter(|(_, _, pixel)| pixel[3] > 0)
        .fold(None, |acc, (x, y, _)| match acc {
            None => Some((x, y, x, y)),
            Some((min_x, min_y, max_x, max_y)) => {
                Some((min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y)))
            }
        })
}

#[test]
fn test_usable_font_draws_centered_glyph() {
    if !fonts_installed(&[DEJAVU_SANS]) {
        return;
    }

    let renderer = EmblemRenderer::for_glyph(TEST_GLYPH, &[DEJAVU_SANS]);
    assert_eq!(
        renderer.style(),
        EmblemStyle::Glyph {
            font: "DejaVu Sans"
        }
    );

    for size in [20, 167, 1024] {
        let mut canvas = RgbaImage::new(size, size);
        let style = renderer.draw(&mut canvas, size);
        assert_eq!(style, EmblemStyle::Glyph { font: "DejaVu Sans" });

        let (min_x, min_y, max_x, max_y) =
            painted_bounds(&canvas).expect("glyph should paint pixels");
        let expected_center = (size as f32 - 1.0) / 2.0;
        let center_x = (min_x + max_x) as f32 / 2.0;
        let center_y = (min_y + max_y) as f32 / 2.0;
        assert!(
            (center_x - expected_center).abs() <= 1.0,
            "{size}px: glyph centered at x={center_x}, expected {expected_center}"
        );
        assert!(
            (center_y - expected_center).abs() <= 1.0,
            "{size}px: glyph centered at y={center_y}, expected {expected_center}"
        );
        assert!(canvas.pixels().any(|pixel| *pixel == GOLD));
    }
}

#[test]
fn test_first_usable_candidate_wins() {
    if !fonts_installed(&[DEJAVU_SANS, DEJAVU_SERIF]) {
        return;
    }

    let serif_first = EmblemRenderer::for_glyph(TEST_GLYPH, &[MISSING, DEJAVU_SERIF, DEJAVU_SANS]);
    assert_eq!(
        serif_first.style(),
        EmblemStyle::Glyph {
            font: "DejaVu Serif"
        }
    );

    let sans_first = EmblemRenderer::for_glyph(TEST_GLYPH, &[DEJAVU_SANS, DEJAVU_SERIF]);
    assert_eq!(
        sans_first.style(),
        EmblemStyle::Glyph {
            font: "DejaVu Sans"
        }
    );
}

#[test]
fn test_macos_only_candidate_is_skipped_elsewhere() {
    if cfg!(target_os = "macos") || !fonts_installed(&[DEJAVU_SANS, DEJAVU_SERIF]) {
        return;
    }

    let gated = FontCandidate {
        macos_only: true,
        ..DEJAVU_SERIF
    };
    let renderer = EmblemRenderer::for_glyph(TEST_GLYPH, &[gated, DEJAVU_SANS]);
    assert_eq!(
        renderer.style(),
        EmblemStyle::Glyph {
            font: "DejaVu Sans"
        }
    );
}

#[test]
fn test_font_without_trophy_falls_back_to_vector_trophy() {
    if !fonts_installed(&[DEJAVU_SANS]) {
        return;
    }

    // DejaVu Sans has no U+1F3C6
    let renderer = EmblemRenderer::from_candidates(&[DEJAVU_SANS]);
    assert_eq!(renderer.style(), EmblemStyle::Procedural);
}

#[test]
fn test_unmeasurable_glyph_drawn_at_fixed_offset() {
    if !fonts_installed(&[DEJAVU_SANS]) {
        return;
    }

    let data = std::fs::read(DEJAVU_SANS.path).unwrap();
    let font = rusttype::Font::try_from_vec(data).unwrap();
    let mut canvas = RgbaImage::new(167, 167);

    // A space has no outline, so there are no bounds to center on.
    let origin = draw_glyph(&mut canvas, &font, ' ', 167);

    assert_eq!(origin, (167 / 2 - 30, 167 / 2 - 30));
    assert!(painted_bounds(&canvas).is_none());
}
