use crate::geometry::Mesh;
use crate::shader::ShaderProgram;

use super::RenderTarget;

/// One indexed draw, described before it touches the GPU.
///
/// Derived from the index list, so the vertex count a frame submits is
/// assertable in tests without a device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawCommand {
    pub index_count: u32,
    pub base_vertex: i32,
    pub instances: std::ops::Range<u32>,
}

impl DrawCommand {
    /// A single non-instanced draw over every index in `indices`.
    pub fn from_indices(indices: &[u16]) -> Self {
        Self {
            index_count: indices.len() as u32,
            base_vertex: 0,
            instances: 0..1,
        }
    }

    fn from_mesh(mesh: &Mesh) -> Self {
        Self {
            index_count: mesh.index_count(),
            base_vertex: 0,
            instances: 0..1,
        }
    }
}

/// Records one render pass: clears the target, binds the program and the
/// mesh's buffers, and issues the indexed draw.
pub fn draw_mesh(
    target: &mut RenderTarget<'_>,
    clear: wgpu::Color,
    program: &ShaderProgram,
    mesh: &Mesh,
) {
    let command = DrawCommand::from_mesh(mesh);

    let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some("larkspur mesh pass"),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: target.color_view,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(clear),
                store: wgpu::StoreOp::Store,
            },
            depth_slice: None,
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
        multiview_mask: None,
    });

    rpass.set_pipeline(program.pipeline());
    rpass.set_vertex_buffer(0, mesh.vertex_buffer().slice(..));
    rpass.set_index_buffer(mesh.index_buffer().slice(..), wgpu::IndexFormat::Uint16);
    rpass.draw_indexed(0..command.index_count, command.base_vertex, command.instances);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_indices_submit_six_vertices() {
        let command = DrawCommand::from_indices(&[0, 1, 2, 2, 3, 0]);
        assert_eq!(command.index_count, 6);
        assert_eq!(command.base_vertex, 0);
        assert_eq!(command.instances, 0..1);
    }

    #[test]
    fn empty_index_list_submits_nothing() {
        assert_eq!(DrawCommand::from_indices(&[]).index_count, 0);
    }
}
