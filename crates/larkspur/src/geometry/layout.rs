/// Describes how a flat vertex buffer maps to shader input locations.
///
/// Attributes are declared in order. Each attribute's byte offset is the
/// running sum of the preceding attribute sizes and the stride is the total,
/// so offsets and stride are computed once from the list — never hand-written
/// at call sites. A layout that disagrees with the shader's `@location`
/// declarations renders garbage silently instead of erroring, which is why
/// this descriptor exists.
///
/// Pure configuration: no GPU state of its own. The product,
/// [`buffer_layout`](Self::buffer_layout), is consumed at pipeline creation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VertexLayout {
    attributes: Vec<wgpu::VertexAttribute>,
    stride: u64,
}

impl VertexLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an attribute bound to shader `location`, packed directly
    /// after the previous attribute.
    ///
    /// The `format` carries component count, component type, and
    /// normalization in one value (e.g. `Float32x2` for a 2D position).
    pub fn with_attribute(mut self, location: u32, format: wgpu::VertexFormat) -> Self {
        self.attributes.push(wgpu::VertexAttribute {
            format,
            offset: self.stride,
            shader_location: location,
        });
        self.stride += format.size();
        self
    }

    /// Total bytes spanning one full vertex.
    pub fn stride(&self) -> u64 {
        self.stride
    }

    pub fn attributes(&self) -> &[wgpu::VertexAttribute] {
        &self.attributes
    }

    /// The wgpu-side layout consumed at pipeline creation.
    pub fn buffer_layout(&self) -> wgpu::VertexBufferLayout<'_> {
        wgpu::VertexBufferLayout {
            array_stride: self.stride,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &self.attributes,
        }
    }
}
