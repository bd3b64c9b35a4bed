//! Core types for the dialkit clock
//!
//! This crate provides the non-geometric model of the clock face:
//!
//! - [`ClockTime`] - a wall-clock snapshot with dial-value projections
//! - [`TimeSource`] - seam for substituting the wall clock in tests/demos
//! - [`SystemClock`] / [`FixedTime`] - the two time sources
//! - [`Color`] / [`Theme`] - the three customizable face colors
//! - [`HandKind`] - per-hand scales and dial-value projection

mod time;
mod theme;
mod hand;

pub use time::{ClockTime, FixedTime, SystemClock, TimeSource};
pub use theme::{Color, Theme, DEFAULT_PRIMARY, DEFAULT_SECONDARY, DEFAULT_TERTIARY};
pub use hand::HandKind;

// Re-export commonly used types from dialkit_math for convenience
pub use dialkit_math::{DialLayout, Vec2};
