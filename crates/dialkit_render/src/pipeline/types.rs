//! GPU-compatible data types for the face pipeline
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};

use dialkit_core::Color;
use dialkit_math::Vec2;

/// A vertex of the face triangle list, in pixel space
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Vertex2D {
    /// Position in pixels, origin at the surface's top-left corner
    pub position: [f32; 2],
    /// RGBA color
    pub color: [f32; 4],
}

impl Vertex2D {
    /// Create a new vertex
    pub fn new(position: Vec2, color: Color) -> Self {
        Self {
            position: position.to_array(),
            color: color.to_array(),
        }
    }
}

/// Uniforms for the face shader
///
/// The shader converts pixel-space positions to NDC using the viewport
/// size. Layout: 16 bytes total (must match face.wgsl FaceUniforms).
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct FaceUniforms {
    /// Surface size in pixels (width, height)
    pub viewport: [f32; 2],
    /// Padding to 16-byte alignment
    pub _padding: [f32; 2],
}

impl FaceUniforms {
    /// Uniforms for a surface of the given size
    pub fn new(viewport: [f32; 2]) -> Self {
        Self {
            viewport,
            _padding: [0.0; 2],
        }
    }
}

impl Default for FaceUniforms {
    fn default() -> Self {
        Self::new([1.0, 1.0])
    }
}
