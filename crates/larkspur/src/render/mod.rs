//! Frame recording.
//!
//! [`RenderCtx`] and [`RenderTarget`] carry the explicit handles a draw
//! needs — device, queue, target format, encoder, color view — so nothing
//! depends on ambient "currently bound" state. [`draw_mesh`] records the
//! harness's one pass: clear, bind program and buffers, indexed draw.

mod ctx;
mod draw;

pub use ctx::{RenderCtx, RenderTarget};
pub use draw::{DrawCommand, draw_mesh};
