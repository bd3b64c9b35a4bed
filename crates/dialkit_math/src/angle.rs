//! Dial angle mapping
//!
//! Everything on the clock face is placed on the same 0-60 circular scale:
//! ticks use their index directly, hands project the current time onto it.
//! Angle zero points along +x; screen space has y growing downward, so
//! increasing angles sweep clockwise, which is exactly the direction a
//! clock runs.

use std::f32::consts::{FRAC_PI_2, PI};

/// Angle in radians for a dial value in the 0-60 range.
///
/// Value 0 points straight up (12 o'clock), 15 points right (3 o'clock).
#[inline]
pub fn dial_angle(value: f32) -> f32 {
    PI * value / 30.0 - FRAC_PI_2
}

/// Angle in radians for a tick index in `0..60`.
#[inline]
pub fn tick_angle(index: usize) -> f32 {
    dial_angle(index as f32)
}

/// Angle in radians for an hour numeral in `1..=12`.
///
/// Numeral 3 sits at angle zero (due right); each step is 30 degrees.
#[inline]
pub fn numeral_angle(numeral: u32) -> f32 {
    PI / 6.0 * (numeral as f32 - 3.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    #[test]
    fn test_dial_angle_twelve_o_clock() {
        assert!((dial_angle(0.0) + FRAC_PI_2).abs() < EPS);
    }

    #[test]
    fn test_dial_angle_quarter_points() {
        // 15 -> right, 30 -> down, 45 -> left
        assert!(dial_angle(15.0).abs() < EPS);
        assert!((dial_angle(30.0) - FRAC_PI_2).abs() < EPS);
        assert!((dial_angle(45.0) - PI).abs() < EPS);
    }

    #[test]
    fn test_tick_angle_matches_dial_angle() {
        for i in 0..60 {
            assert_eq!(tick_angle(i), dial_angle(i as f32));
        }
    }

    #[test]
    fn test_numeral_angle() {
        // 3 o'clock is due right, 6 is straight down, 12 straight up
        assert!(numeral_angle(3).abs() < EPS);
        assert!((numeral_angle(6) - FRAC_PI_2).abs() < EPS);
        assert!((numeral_angle(12) - 3.0 * FRAC_PI_2).abs() < EPS);
    }

    #[test]
    fn test_numeral_and_tick_agree() {
        // Numeral i sits on the same ray as tick 5*i
        for i in 1..=12u32 {
            let n = numeral_angle(i);
            let t = tick_angle((i as usize * 5) % 60);
            let diff = (n - t).rem_euclid(2.0 * PI);
            assert!(diff < EPS || (2.0 * PI - diff) < EPS, "numeral {}", i);
        }
    }
}
