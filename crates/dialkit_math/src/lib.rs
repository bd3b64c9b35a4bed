//! Clock face geometry library
//!
//! This crate provides the 2D math for placing every element of an analog
//! clock face in pixel space.
//!
//! ## Core Types
//!
//! - [`Vec2`] - 2D vector in screen space (y grows downward)
//! - [`DialLayout`] - maps a surface size and the fixed scale constants to
//!   absolute coordinates for the dial, ticks, numerals, and hands
//!
//! ## Angle helpers
//!
//! - [`dial_angle`] - 0-60 dial value to radians
//! - [`tick_angle`] - tick index to radians
//! - [`numeral_angle`] - hour numeral to radians

mod vec2;
pub mod angle;
pub mod layout;

pub use vec2::Vec2;
pub use angle::{dial_angle, numeral_angle, tick_angle};
pub use layout::DialLayout;
