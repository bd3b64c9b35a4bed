//! Clock face rendering library
//!
//! This crate provides the wgpu-based rendering pipeline for drawing the
//! analog clock face.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::FacePipeline`] - 2D triangle pipeline with MSAA resolve
//! - [`face::FaceGeometry`] / [`face::build_face`] - per-frame tessellation
//!   of the dial, ticks, hands, and numerals
//! - [`glyph`] - built-in segment-stroke font for the hour numerals
//!
//! Layout math lives in `dialkit_math`; the time/theme model lives in
//! `dialkit_core`. Both are re-exported for convenience.

pub mod context;
pub mod face;
pub mod glyph;
pub mod pipeline;

// Re-export core types for convenience
pub use dialkit_core::{ClockTime, Color, FixedTime, HandKind, SystemClock, Theme, TimeSource};
pub use dialkit_math::{DialLayout, Vec2};

// Re-export the face builder for easy access
pub use context::RenderContext;
pub use face::{build_face, FaceGeometry};
pub use pipeline::{FacePipeline, FaceUniforms, Vertex2D};
