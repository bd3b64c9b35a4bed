//! Hand classification
//!
//! Each hand pairs a dial-value projection with its length and stroke
//! width scales.

use dialkit_math::layout::{
    HOUR_HAND_SCALE, HOUR_HAND_WIDTH_SCALE, MINUTE_HAND_SCALE, MINUTE_HAND_WIDTH_SCALE,
    SECOND_HAND_SCALE, SECOND_HAND_WIDTH_SCALE,
};

use crate::time::ClockTime;

/// The three hands of the clock
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandKind {
    Hour,
    Minute,
    Second,
}

impl HandKind {
    /// All hands, in draw order
    pub const ALL: [HandKind; 3] = [HandKind::Hour, HandKind::Minute, HandKind::Second];

    /// Hand length as a fraction of the half-extent
    pub fn length_scale(self) -> f32 {
        match self {
            HandKind::Hour => HOUR_HAND_SCALE,
            HandKind::Minute => MINUTE_HAND_SCALE,
            HandKind::Second => SECOND_HAND_SCALE,
        }
    }

    /// Hand stroke width as a fraction of the half-extent
    pub fn width_scale(self) -> f32 {
        match self {
            HandKind::Hour => HOUR_HAND_WIDTH_SCALE,
            HandKind::Minute => MINUTE_HAND_WIDTH_SCALE,
            HandKind::Second => SECOND_HAND_WIDTH_SCALE,
        }
    }

    /// Project a time snapshot onto this hand's dial value (0-60)
    pub fn dial_value(self, time: &ClockTime) -> f32 {
        match self {
            HandKind::Hour => time.hour_dial_value(),
            HandKind::Minute => time.minute_dial_value(),
            HandKind::Second => time.second_dial_value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_scales_ordered() {
        assert!(HandKind::Hour.length_scale() < HandKind::Minute.length_scale());
        assert!(HandKind::Minute.length_scale() < HandKind::Second.length_scale());
    }

    #[test]
    fn test_width_scales_ordered() {
        // The faster the hand, the thinner it is
        assert!(HandKind::Hour.width_scale() > HandKind::Minute.width_scale());
        assert!(HandKind::Minute.width_scale() > HandKind::Second.width_scale());
    }

    #[test]
    fn test_dial_values() {
        let t = ClockTime::new(15, 30, 45);
        assert_eq!(HandKind::Hour.dial_value(&t), 17.5);
        assert_eq!(HandKind::Minute.dial_value(&t), 30.0);
        assert_eq!(HandKind::Second.dial_value(&t), 45.0);
    }

    #[test]
    fn test_draw_order() {
        // Hour first so the faster hands draw on top of it
        assert_eq!(HandKind::ALL[0], HandKind::Hour);
        assert_eq!(HandKind::ALL[2], HandKind::Second);
    }
}
