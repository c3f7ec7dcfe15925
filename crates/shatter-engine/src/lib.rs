//! Shatter engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the demo binary:
//! window/event loop, wgpu device and surface management, the draw-list scene
//! model and the shape renderers that consume it.

pub mod device;
pub mod window;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
