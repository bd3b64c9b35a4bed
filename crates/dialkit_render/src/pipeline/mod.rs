//! Face rendering pipeline
//!
//! - [`FacePipeline`] - wgpu render pipeline for the 2D triangle list
//! - [`Vertex2D`] / [`FaceUniforms`] - GPU-facing data types

mod face_pipeline;
mod types;

pub use face_pipeline::FacePipeline;
pub use types::{FaceUniforms, Vertex2D};
