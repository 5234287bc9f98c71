//! GPU device + surface management.
//!
//! Owns the wgpu instance/adapter negotiation, the logical device and queue,
//! and the surface (swapchain) configuration. Frames are acquired here and
//! handed to the render layer as an encoder + color view.

mod context;
mod error;
mod frame;
mod init;
mod surface;

pub use context::Gpu;
pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use init::GpuInit;
