//! Segment-stroke numeral font
//!
//! The hour numerals are drawn from a built-in seven-segment stroke font
//! rather than a rasterized typeface; the face only ever needs the digits
//! 0-9. Glyphs are defined on a 4x7 unit box (y grows downward, matching
//! screen space) and scaled so the box height equals the requested text
//! size. Labels are measured by the tight bounding box of their strokes,
//! including the stroke extent, which is what bounding-box-centered
//! placement needs.

use dialkit_math::Vec2;

/// A stroke segment in glyph units
type Segment = ([f32; 2], [f32; 2]);

/// Glyph box width in glyph units
const GLYPH_WIDTH: f32 = 4.0;
/// Glyph box height in glyph units
const GLYPH_HEIGHT: f32 = 7.0;
/// Horizontal advance between glyph origins in glyph units
const GLYPH_ADVANCE: f32 = 6.0;
/// Stroke width as a fraction of the text size
const GLYPH_STROKE_SCALE: f32 = 0.12;

// The seven segments, named as in a classic display
const SEG_A: Segment = ([0.0, 0.0], [GLYPH_WIDTH, 0.0]);
const SEG_B: Segment = ([GLYPH_WIDTH, 0.0], [GLYPH_WIDTH, GLYPH_HEIGHT / 2.0]);
const SEG_C: Segment = ([GLYPH_WIDTH, GLYPH_HEIGHT / 2.0], [GLYPH_WIDTH, GLYPH_HEIGHT]);
const SEG_D: Segment = ([0.0, GLYPH_HEIGHT], [GLYPH_WIDTH, GLYPH_HEIGHT]);
const SEG_E: Segment = ([0.0, GLYPH_HEIGHT / 2.0], [0.0, GLYPH_HEIGHT]);
const SEG_F: Segment = ([0.0, 0.0], [0.0, GLYPH_HEIGHT / 2.0]);
const SEG_G: Segment = ([0.0, GLYPH_HEIGHT / 2.0], [GLYPH_WIDTH, GLYPH_HEIGHT / 2.0]);

/// Strokes for a decimal digit; empty for anything else
fn digit_segments(c: char) -> &'static [Segment] {
    match c {
        '0' => &[SEG_A, SEG_B, SEG_C, SEG_D, SEG_E, SEG_F],
        '1' => &[SEG_B, SEG_C],
        '2' => &[SEG_A, SEG_B, SEG_G, SEG_E, SEG_D],
        '3' => &[SEG_A, SEG_B, SEG_G, SEG_C, SEG_D],
        '4' => &[SEG_F, SEG_G, SEG_B, SEG_C],
        '5' => &[SEG_A, SEG_F, SEG_G, SEG_C, SEG_D],
        '6' => &[SEG_A, SEG_F, SEG_G, SEG_E, SEG_C, SEG_D],
        '7' => &[SEG_A, SEG_B, SEG_C],
        '8' => &[SEG_A, SEG_B, SEG_C, SEG_D, SEG_E, SEG_F, SEG_G],
        '9' => &[SEG_A, SEG_B, SEG_C, SEG_D, SEG_F, SEG_G],
        _ => &[],
    }
}

/// Stroke width for a given text size
#[inline]
pub fn stroke_width(text_size: f32) -> f32 {
    text_size * GLYPH_STROKE_SCALE
}

/// Collect a label's strokes in glyph units, plus the tight min/max corners
fn raw_segments(label: &str) -> Option<(Vec<(Vec2, Vec2)>, Vec2, Vec2)> {
    let mut segments = Vec::new();
    let mut min = Vec2::new(f32::MAX, f32::MAX);
    let mut max = Vec2::new(f32::MIN, f32::MIN);

    for (i, c) in label.chars().enumerate() {
        let offset = Vec2::new(i as f32 * GLYPH_ADVANCE, 0.0);
        for (a, b) in digit_segments(c) {
            let a = Vec2::new(a[0], a[1]) + offset;
            let b = Vec2::new(b[0], b[1]) + offset;
            min = min.min_components(a).min_components(b);
            max = max.max_components(a).max_components(b);
            segments.push((a, b));
        }
    }

    if segments.is_empty() {
        None
    } else {
        Some((segments, min, max))
    }
}

/// Tight bounding-box size of a label, in pixels
///
/// Includes the stroke extent, so even the width-less '1' measures one
/// stroke wide.
pub fn measure_label(label: &str, text_size: f32) -> Vec2 {
    match raw_segments(label) {
        Some((_, min, max)) => {
            let scale = text_size / GLYPH_HEIGHT;
            (max - min) * scale + Vec2::new(stroke_width(text_size), stroke_width(text_size))
        }
        None => Vec2::ZERO,
    }
}

/// A label's strokes in label-local pixel coordinates
///
/// Stroke centerline endpoints are positioned so the bounding box measured
/// by [`measure_label`] spans exactly `[0, size]` in both dimensions.
pub fn label_segments(label: &str, text_size: f32) -> Vec<(Vec2, Vec2)> {
    match raw_segments(label) {
        Some((segments, min, _)) => {
            let scale = text_size / GLYPH_HEIGHT;
            let inset = stroke_width(text_size) / 2.0;
            segments
                .into_iter()
                .map(|(a, b)| {
                    (
                        (a - min) * scale + Vec2::new(inset, inset),
                        (b - min) * scale + Vec2::new(inset, inset),
                    )
                })
                .collect()
        }
        None => Vec::new(),
    }
}
