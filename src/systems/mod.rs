//! Application systems
//!
//! - [`window`] - window creation, fullscreen, title updates

pub mod window;

pub use window::{WindowError, WindowSystem};
