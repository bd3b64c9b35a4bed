//! Dialkit - analog clock face application
//!
//! The binary lives in `main.rs`; this library exposes the application's
//! configuration and window plumbing for integration tests.

pub mod config;
pub mod systems;
