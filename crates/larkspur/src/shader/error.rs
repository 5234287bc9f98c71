use std::fmt;

use super::ShaderStage;

/// A failure in the shader pipeline.
///
/// Every variant is recoverable and carries the stage tag and driver
/// diagnostic, so callers can log it, assert on it, or refuse to enter the
/// frame loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShaderError {
    /// The section for a required stage was empty or absent.
    MissingStage { stage: ShaderStage },
    /// The stage source failed validation; `message` is the compiler log.
    Compile { stage: ShaderStage, message: String },
    /// Pipeline creation from individually valid stages failed.
    Link { message: String },
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::MissingStage { stage } => {
                write!(f, "shader source has no {} stage section", stage.name())
            }
            ShaderError::Compile { stage, message } => {
                write!(f, "{} stage failed to compile: {message}", stage.name())
            }
            ShaderError::Link { message } => {
                write!(f, "program link failed: {message}")
            }
        }
    }
}

impl std::error::Error for ShaderError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_error_names_the_stage() {
        let err = ShaderError::Compile {
            stage: ShaderStage::Fragment,
            message: "unexpected token".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("fragment"));
        assert!(text.contains("unexpected token"));
    }

    #[test]
    fn missing_stage_names_the_stage() {
        let err = ShaderError::MissingStage {
            stage: ShaderStage::Vertex,
        };
        assert!(err.to_string().contains("vertex"));
    }
}
