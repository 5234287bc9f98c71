//! Harness-facing contracts.
//!
//! Defines the stable interface between the runtime (platform loop) and the
//! application: resource setup once the GPU context exists, then one
//! callback per rendered frame.

mod app;

pub use app::{App, AppControl};
