//! Window + runtime loop.
//!
//! Owns the winit `EventLoop` and the single harness window, and wires them
//! to the GPU layer and the [`App`](crate::core::App) contract.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
