use anyhow::Result;

use crate::render::{RenderCtx, RenderTarget};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by harness users.
pub trait App {
    /// Called once after the GPU context exists, before the frame loop.
    ///
    /// Builds the session's resources (shader program, mesh). An error here
    /// aborts initialization and propagates out of
    /// [`Runtime::run`](crate::window::Runtime::run).
    fn setup(&mut self, ctx: &RenderCtx<'_>) -> Result<()>;

    /// Called once per rendered frame; records into `target`.
    fn frame(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) -> AppControl;
}
