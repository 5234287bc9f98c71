//! Shader pipeline: source splitting, stage compilation, program linking.
//!
//! A program's stages are authored in one text unit, sectioned by `#shader`
//! directive lines. [`split_source`] routes lines into per-stage sources,
//! [`compile_stage`] turns one stage into a live GPU module with structured
//! diagnostics, and [`ShaderProgram::link`] combines compiled stages into an
//! executable render pipeline.
//!
//! Failures at every step are recoverable [`ShaderError`] values tagged with
//! the stage; a stage that failed to compile can never reach a pipeline.

mod compile;
mod error;
mod program;
mod source;

pub use compile::{CompiledStage, compile_stage};
pub use error::ShaderError;
pub use program::{ProgramDesc, ShaderProgram};
pub use source::{STAGE_DIRECTIVE, ShaderStage, SourceBundle, split_source};
