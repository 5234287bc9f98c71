//! Quad demo: one window, one program, one indexed draw per frame.

use anyhow::Result;
use bytemuck::{Pod, Zeroable};

use larkspur::core::{App, AppControl};
use larkspur::device::GpuInit;
use larkspur::geometry::{Mesh, VertexLayout};
use larkspur::logging::{LoggingConfig, init_logging};
use larkspur::render::{RenderCtx, RenderTarget, draw_mesh};
use larkspur::shader::{ProgramDesc, ShaderProgram, split_source};
use larkspur::window::{Runtime, RuntimeConfig};

/// Combined shader source; sections are split out at startup.
const QUAD_SHADER: &str = include_str!("../shaders/quad.shader");

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct Vertex {
    position: [f32; 2],
}

/// Unit quad centered on the origin; the two triangles share corners 0 and 2.
const QUAD_VERTICES: [Vertex; 4] = [
    Vertex { position: [-0.5, -0.5] },
    Vertex { position: [0.5, -0.5] },
    Vertex { position: [0.5, 0.5] },
    Vertex { position: [-0.5, 0.5] },
];

const QUAD_INDICES: [u16; 6] = [0, 1, 2, 2, 3, 0];

#[derive(Default)]
struct QuadApp {
    program: Option<ShaderProgram>,
    mesh: Option<Mesh>,
}

impl App for QuadApp {
    fn setup(&mut self, ctx: &RenderCtx<'_>) -> Result<()> {
        let bundle = split_source(QUAD_SHADER);

        // One attribute: position at location 0, two f32s per vertex.
        let layout = VertexLayout::new().with_attribute(0, wgpu::VertexFormat::Float32x2);

        let program = ShaderProgram::link(
            ctx.device,
            &ProgramDesc {
                label: "quad program",
                bundle: &bundle,
                vertex_layout: &layout,
                color_format: ctx.surface_format,
            },
        )?;

        let mesh = Mesh::new(ctx.device, "quad mesh", &QUAD_VERTICES, &QUAD_INDICES)?;

        log::info!(
            "quad ready: {} vertices, {} indices",
            QUAD_VERTICES.len(),
            mesh.index_count()
        );

        self.program = Some(program);
        self.mesh = Some(mesh);
        Ok(())
    }

    fn frame(&mut self, _ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) -> AppControl {
        if let (Some(program), Some(mesh)) = (&self.program, &self.mesh) {
            draw_mesh(target, wgpu::Color::BLACK, program, mesh);
        }
        AppControl::Continue
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "larkspur quad".to_string(),
        ..Default::default()
    };

    Runtime::run(config, GpuInit::default(), QuadApp::default())
}
