use super::{ShaderError, ShaderStage};

/// One stage compiled into a live GPU module.
///
/// Owned by the linker for the duration of pipeline creation; dropping it
/// releases the module. The linked pipeline keeps its own copy of the
/// compiled code, so the drop always happens, link success or not.
#[derive(Debug)]
pub struct CompiledStage {
    pub stage: ShaderStage,
    pub module: wgpu::ShaderModule,
}

/// Compiles one stage's source into a GPU shader module.
///
/// The module is created inside a validation error scope so malformed source
/// becomes a captured diagnostic instead of an uncaptured device error. On
/// failure the diagnostic is logged tagged with the stage name and returned
/// as [`ShaderError::Compile`]; the dead module drops here and never reaches
/// a pipeline.
pub fn compile_stage(
    device: &wgpu::Device,
    stage: ShaderStage,
    source: &str,
) -> Result<CompiledStage, ShaderError> {
    let scope = device.push_error_scope(wgpu::ErrorFilter::Validation);

    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(stage.name()),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });

    if let Some(err) = pollster::block_on(scope.pop()) {
        let message = err.to_string();
        log::error!("{} stage failed to compile: {message}", stage.name());
        return Err(ShaderError::Compile { stage, message });
    }

    Ok(CompiledStage { stage, module })
}
