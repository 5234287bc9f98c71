//! Larkspur rendering harness.
//!
//! Opens a window, uploads geometry to the GPU, builds a shader pipeline from
//! a combined multi-section source text, and issues one indexed draw per frame
//! until the window is closed.
//!
//! The interesting parts live in [`shader`] (source splitting, stage
//! compilation, pipeline linking) and [`geometry`] (vertex layout description
//! and validated mesh upload). [`device`] and [`window`] are thin glue over
//! wgpu and winit.

pub mod core;
pub mod device;
pub mod geometry;
pub mod logging;
pub mod render;
pub mod shader;
pub mod window;
