use crate::geometry::VertexLayout;

use super::{CompiledStage, ShaderError, ShaderStage, SourceBundle, compile_stage};

/// Everything the linker needs besides the device.
pub struct ProgramDesc<'a> {
    pub label: &'a str,
    /// Per-stage sources, usually from [`split_source`](super::split_source).
    pub bundle: &'a SourceBundle,
    /// Layout of the vertex buffer the program will read; must agree with the
    /// vertex stage's `@location` declarations.
    pub vertex_layout: &'a VertexLayout,
    /// Format of the color target the program renders into (the surface
    /// format, in this harness).
    pub color_format: wgpu::TextureFormat,
}

/// A linked, executable shader program.
///
/// Owns the render pipeline for the session; dropping the program releases
/// it. The stage modules it was linked from are released when
/// [`link`](Self::link) returns.
#[derive(Debug)]
pub struct ShaderProgram {
    pipeline: wgpu::RenderPipeline,
}

impl ShaderProgram {
    /// Compiles every stage in `desc.bundle` and links them into a render
    /// pipeline.
    ///
    /// A stage that failed to compile is never attached: the first
    /// [`ShaderError::Compile`] aborts the link. Pipeline creation itself
    /// runs inside a validation error scope, so a bad stage pairing (e.g. a
    /// mismatched inter-stage interface or a vertex layout that disagrees
    /// with the shader) surfaces as [`ShaderError::Link`] rather than a
    /// draw-time fault.
    pub fn link(device: &wgpu::Device, desc: &ProgramDesc<'_>) -> Result<Self, ShaderError> {
        for stage in ShaderStage::ALL {
            if desc.bundle.source(stage).trim().is_empty() {
                return Err(ShaderError::MissingStage { stage });
            }
        }

        let vertex = compile_stage(
            device,
            ShaderStage::Vertex,
            desc.bundle.source(ShaderStage::Vertex),
        )?;
        let fragment = compile_stage(
            device,
            ShaderStage::Fragment,
            desc.bundle.source(ShaderStage::Fragment),
        )?;

        let pipeline = create_pipeline(device, desc, &vertex, &fragment)?;

        // `vertex` and `fragment` drop here; the pipeline retains its own
        // copy of the compiled code.
        Ok(Self { pipeline })
    }

    /// Returns the pipeline to bind for the draw.
    pub fn pipeline(&self) -> &wgpu::RenderPipeline {
        &self.pipeline
    }
}

fn create_pipeline(
    device: &wgpu::Device,
    desc: &ProgramDesc<'_>,
    vertex: &CompiledStage,
    fragment: &CompiledStage,
) -> Result<wgpu::RenderPipeline, ShaderError> {
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some(desc.label),
        bind_group_layouts: &[],
        immediate_size: 0,
    });

    let scope = device.push_error_scope(wgpu::ErrorFilter::Validation);

    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(desc.label),
        layout: Some(&layout),

        vertex: wgpu::VertexState {
            module: &vertex.module,
            entry_point: Some(vertex.stage.entry_point()),
            compilation_options: Default::default(),
            buffers: &[desc.vertex_layout.buffer_layout()],
        },

        fragment: Some(wgpu::FragmentState {
            module: &fragment.module,
            entry_point: Some(fragment.stage.entry_point()),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: desc.color_format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),

        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },

        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    });

    if let Some(err) = pollster::block_on(scope.pop()) {
        let message = err.to_string();
        log::error!("program link failed: {message}");
        return Err(ShaderError::Link { message });
    }

    Ok(pipeline)
}
