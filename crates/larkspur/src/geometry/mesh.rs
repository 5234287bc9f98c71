use std::fmt;

use bytemuck::Pod;
use wgpu::util::DeviceExt;

/// Invalid geometry detected before any GPU upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// An index references a vertex past the end of the vertex list.
    IndexOutOfRange { index: u16, vertex_count: usize },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::IndexOutOfRange {
                index,
                vertex_count,
            } => write!(
                f,
                "index {index} out of range for {vertex_count} vertices"
            ),
        }
    }
}

impl std::error::Error for GeometryError {}

/// Checks that every index references an existing vertex.
pub fn validate_indices(indices: &[u16], vertex_count: usize) -> Result<(), GeometryError> {
    for &index in indices {
        if usize::from(index) >= vertex_count {
            return Err(GeometryError::IndexOutOfRange {
                index,
                vertex_count,
            });
        }
    }
    Ok(())
}

/// GPU-resident vertex + index data for one indexed draw.
///
/// Content is immutable after creation; both buffers are released when the
/// mesh drops. Indices are `u16`, which covers every vertex count this
/// harness handles.
pub struct Mesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

impl Mesh {
    /// Uploads `vertices` and `indices`, rejecting out-of-range indices
    /// before any GPU work.
    pub fn new<V: Pod>(
        device: &wgpu::Device,
        label: &str,
        vertices: &[V],
        indices: &[u16],
    ) -> Result<Self, GeometryError> {
        validate_indices(indices, vertices.len())?;

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Ok(Self {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
        })
    }

    pub fn vertex_buffer(&self) -> &wgpu::Buffer {
        &self.vertex_buffer
    }

    pub fn index_buffer(&self) -> &wgpu::Buffer {
        &self.index_buffer
    }

    /// Number of indices the draw call submits.
    pub fn index_count(&self) -> u32 {
        self.index_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_indices_are_accepted() {
        assert_eq!(validate_indices(&[0, 1, 2, 2, 3, 0], 4), Ok(()));
    }

    #[test]
    fn empty_index_list_is_accepted() {
        assert_eq!(validate_indices(&[], 0), Ok(()));
    }

    #[test]
    fn index_equal_to_vertex_count_is_rejected() {
        assert_eq!(
            validate_indices(&[0, 1, 4], 4),
            Err(GeometryError::IndexOutOfRange {
                index: 4,
                vertex_count: 4
            })
        );
    }

    #[test]
    fn any_index_into_empty_vertex_list_is_rejected() {
        assert!(validate_indices(&[0], 0).is_err());
    }

    #[test]
    fn error_message_names_both_counts() {
        let err = validate_indices(&[9], 4).unwrap_err();
        let text = err.to_string();
        assert!(text.contains('9'));
        assert!(text.contains('4'));
    }
}
