//! Dial layout
//!
//! Maps the render surface size and the fixed scale constants to absolute
//! pixel coordinates for every element of the clock face: the dial circle,
//! the 60 tick marks, the twelve numeral anchors, and the hand endpoints.

use serde::{Serialize, Deserialize};

use crate::angle::{dial_angle, numeral_angle, tick_angle};
use crate::vec2::Vec2;

/// Dial circle radius as a fraction of the half-extent
pub const DIAL_RADIUS_SCALE: f32 = 0.9;
/// Dial border stroke width as a fraction of the half-extent
pub const BORDER_WIDTH_SCALE: f32 = 0.02;
/// Tick ring radius as a fraction of the half-extent
pub const TICK_RADIUS_SCALE: f32 = 0.85;
/// Minor tick stroke width as a fraction of the half-extent
pub const TICK_WIDTH_SCALE: f32 = 0.01;
/// Flat extra stroke width for every 5th tick, in pixels
pub const MAJOR_TICK_EXTRA: f32 = 5.0;
/// Numeral ring radius as a fraction of the half-extent
pub const NUMERAL_RADIUS_SCALE: f32 = 0.75;
/// Numeral text size as a fraction of the half-extent
pub const NUMERAL_TEXT_SCALE: f32 = 0.15;
/// Center dot radius as a fraction of the half-extent
pub const CENTER_RADIUS_SCALE: f32 = 0.03;
/// Drop-shadow offset as a fraction of the half-extent
pub const SHADOW_OFFSET_SCALE: f32 = 0.02;

/// Hour hand length as a fraction of the half-extent
pub const HOUR_HAND_SCALE: f32 = 0.4;
/// Minute hand length as a fraction of the half-extent
pub const MINUTE_HAND_SCALE: f32 = 0.65;
/// Second hand length as a fraction of the half-extent
pub const SECOND_HAND_SCALE: f32 = 0.8;

/// Hour hand stroke width as a fraction of the half-extent
pub const HOUR_HAND_WIDTH_SCALE: f32 = 0.03;
/// Minute hand stroke width as a fraction of the half-extent
pub const MINUTE_HAND_WIDTH_SCALE: f32 = 0.015;
/// Second hand stroke width as a fraction of the half-extent
pub const SECOND_HAND_WIDTH_SCALE: f32 = 0.01;

/// Geometric layout of the clock face for a given surface size
///
/// The half-extent is half the smaller surface dimension; every scale
/// constant is a fraction of it. The dial occupies the top-left square of
/// the surface, so the center sits at `(half_extent, half_extent)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DialLayout {
    /// Dial center in pixels
    pub center: Vec2,
    /// Half the smaller surface dimension, in pixels
    pub half_extent: f32,
}

impl DialLayout {
    /// Compute the layout for a surface of the given pixel size
    pub fn new(width: f32, height: f32) -> Self {
        let half_extent = width.min(height) / 2.0;
        Self {
            center: Vec2::new(half_extent, half_extent),
            half_extent,
        }
    }

    /// Radius of the dial circle
    #[inline]
    pub fn dial_radius(&self) -> f32 {
        self.half_extent * DIAL_RADIUS_SCALE
    }

    /// Stroke width of the dial border
    #[inline]
    pub fn border_width(&self) -> f32 {
        self.half_extent * BORDER_WIDTH_SCALE
    }

    /// Radius of the filled center dot
    #[inline]
    pub fn center_radius(&self) -> f32 {
        self.half_extent * CENTER_RADIUS_SCALE
    }

    /// Drop-shadow offset, equal in x and y
    #[inline]
    pub fn shadow_offset(&self) -> Vec2 {
        let offset = self.half_extent * SHADOW_OFFSET_SCALE;
        Vec2::new(offset, offset)
    }

    /// Position of tick `index` in `0..60` on the tick ring
    pub fn tick_position(&self, index: usize) -> Vec2 {
        self.center + Vec2::from_angle(tick_angle(index)) * (self.half_extent * TICK_RADIUS_SCALE)
    }

    /// Whether tick `index` marks an hour position
    #[inline]
    pub fn is_major_tick(&self, index: usize) -> bool {
        index % 5 == 0
    }

    /// Stroke width of tick `index`; hour ticks are drawn wider
    pub fn tick_width(&self, index: usize) -> f32 {
        let base = self.half_extent * TICK_WIDTH_SCALE;
        if self.is_major_tick(index) {
            base + MAJOR_TICK_EXTRA
        } else {
            base
        }
    }

    /// Anchor point for numeral `numeral` in `1..=12`
    ///
    /// The numeral's glyph bounding box is centered on this point.
    pub fn numeral_anchor(&self, numeral: u32) -> Vec2 {
        self.center
            + Vec2::from_angle(numeral_angle(numeral)) * (self.half_extent * NUMERAL_RADIUS_SCALE)
    }

    /// Text size used for the numerals
    #[inline]
    pub fn numeral_text_size(&self) -> f32 {
        self.half_extent * NUMERAL_TEXT_SCALE
    }

    /// Endpoint of a hand with the given dial value (0-60) and length scale
    pub fn hand_endpoint(&self, value: f32, length_scale: f32) -> Vec2 {
        self.center + Vec2::from_angle(dial_angle(value)) * (self.half_extent * length_scale)
    }

    /// Stroke width of a hand with the given width scale
    #[inline]
    pub fn hand_width(&self, width_scale: f32) -> f32 {
        self.half_extent * width_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn assert_vec2_eq(a: Vec2, b: Vec2) {
        assert!((a - b).length() < EPS, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_dial_radius_is_ninety_percent_of_half_extent() {
        for (w, h) in [(200.0, 200.0), (640.0, 480.0), (123.0, 457.0), (1.0, 1.0)] {
            let layout = DialLayout::new(w, h);
            let expected = 0.9 * f32::min(w, h) / 2.0;
            assert!((layout.dial_radius() - expected).abs() < EPS, "{}x{}", w, h);
        }
    }

    #[test]
    fn test_center_in_top_left_square() {
        let layout = DialLayout::new(640.0, 480.0);
        assert_vec2_eq(layout.center, Vec2::new(240.0, 240.0));
    }

    #[test]
    fn test_tick_positions_at_quarter_points() {
        let layout = DialLayout::new(200.0, 200.0);
        let r = 100.0 * TICK_RADIUS_SCALE;
        // Tick 0 straight up, 15 right, 30 down, 45 left
        assert_vec2_eq(layout.tick_position(0), Vec2::new(100.0, 100.0 - r));
        assert_vec2_eq(layout.tick_position(15), Vec2::new(100.0 + r, 100.0));
        assert_vec2_eq(layout.tick_position(30), Vec2::new(100.0, 100.0 + r));
        assert_vec2_eq(layout.tick_position(45), Vec2::new(100.0 - r, 100.0));
    }

    #[test]
    fn test_ticks_all_on_tick_ring() {
        let layout = DialLayout::new(512.0, 300.0);
        let r = layout.half_extent * TICK_RADIUS_SCALE;
        for i in 0..60 {
            let d = (layout.tick_position(i) - layout.center).length();
            assert!((d - r).abs() < EPS, "tick {}", i);
        }
    }

    #[test]
    fn test_every_fifth_tick_is_wider() {
        let layout = DialLayout::new(400.0, 400.0);
        for i in 0..60 {
            if i % 5 == 0 {
                assert!(layout.is_major_tick(i));
                assert!(layout.tick_width(i) > layout.tick_width(i + 1));
                assert!((layout.tick_width(i) - (2.0 + MAJOR_TICK_EXTRA)).abs() < EPS);
            } else {
                assert!(!layout.is_major_tick(i));
                assert!((layout.tick_width(i) - 2.0).abs() < EPS);
            }
        }
    }

    #[test]
    fn test_hand_endpoint_three_o_clock() {
        let layout = DialLayout::new(200.0, 200.0);
        // Dial value 15 points due right
        let end = layout.hand_endpoint(15.0, HOUR_HAND_SCALE);
        assert_vec2_eq(end, Vec2::new(100.0 + 100.0 * HOUR_HAND_SCALE, 100.0));
    }

    #[test]
    fn test_hand_endpoint_matches_formula() {
        let layout = DialLayout::new(300.0, 500.0);
        for v in [0.0, 7.5, 17.5, 30.0, 42.0, 59.0] {
            for scale in [HOUR_HAND_SCALE, MINUTE_HAND_SCALE, SECOND_HAND_SCALE] {
                let theta = std::f32::consts::PI * v / 30.0 - std::f32::consts::FRAC_PI_2;
                let expected = layout.center
                    + Vec2::new(theta.cos(), theta.sin()) * (layout.half_extent * scale);
                assert_vec2_eq(layout.hand_endpoint(v, scale), expected);
            }
        }
    }

    #[test]
    fn test_hand_lengths_ordered() {
        let layout = DialLayout::new(256.0, 256.0);
        let hour = (layout.hand_endpoint(10.0, HOUR_HAND_SCALE) - layout.center).length();
        let minute = (layout.hand_endpoint(10.0, MINUTE_HAND_SCALE) - layout.center).length();
        let second = (layout.hand_endpoint(10.0, SECOND_HAND_SCALE) - layout.center).length();
        assert!(hour < minute);
        assert!(minute < second);
        // The second hand stays inside the tick ring
        assert!(second < layout.half_extent * TICK_RADIUS_SCALE);
    }

    #[test]
    fn test_numeral_anchors() {
        let layout = DialLayout::new(200.0, 200.0);
        let r = 100.0 * NUMERAL_RADIUS_SCALE;
        assert_vec2_eq(layout.numeral_anchor(3), Vec2::new(100.0 + r, 100.0));
        assert_vec2_eq(layout.numeral_anchor(6), Vec2::new(100.0, 100.0 + r));
        assert_vec2_eq(layout.numeral_anchor(9), Vec2::new(100.0 - r, 100.0));
        assert_vec2_eq(layout.numeral_anchor(12), Vec2::new(100.0, 100.0 - r));
    }

    #[test]
    fn test_numeral_text_size() {
        let layout = DialLayout::new(200.0, 600.0);
        assert!((layout.numeral_text_size() - 15.0).abs() < EPS);
    }

    #[test]
    fn test_shadow_offset_uniform() {
        let layout = DialLayout::new(300.0, 300.0);
        let offset = layout.shadow_offset();
        assert_eq!(offset.x, offset.y);
        assert!((offset.x - 150.0 * SHADOW_OFFSET_SCALE).abs() < EPS);
    }
}
