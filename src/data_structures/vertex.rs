//! Vertex layouts.
//!
//! Every generator works on [`FullVertex`]. A [`VertexDescriptor`] says where
//! each attribute lives inside the caller's own vertex record, and
//! [`convert_vertices`] scatters canonical vertices into that layout.

use anyhow::bail;

/// Canonical, full-attribute vertex produced by every generator.
///
/// This is also the record format of the OBJ cache file, so changing the
/// layout requires bumping [`crate::resources::cache::OBJ_CACHE_VERSION`].
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FullVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
    pub color: [f32; 4],
    /// xyz tangent plus handedness in w.
    pub tangent: [f32; 4],
}

/// The attributes a [`VertexDescriptor`] can place.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VertexAttribute {
    Position,
    Normal,
    Uv,
    Color,
    Tangent,
}

impl VertexAttribute {
    pub const ALL: [VertexAttribute; 5] = [
        VertexAttribute::Position,
        VertexAttribute::Normal,
        VertexAttribute::Uv,
        VertexAttribute::Color,
        VertexAttribute::Tangent,
    ];

    pub fn components(self) -> usize {
        match self {
            VertexAttribute::Position | VertexAttribute::Normal => 3,
            VertexAttribute::Uv => 2,
            VertexAttribute::Color | VertexAttribute::Tangent => 4,
        }
    }

    pub fn byte_len(self) -> usize {
        self.components() * std::mem::size_of::<f32>()
    }

    /// Shader location used by [`VertexDescriptor::attributes`].
    pub fn shader_location(self) -> u32 {
        match self {
            VertexAttribute::Position => 0,
            VertexAttribute::Uv => 1,
            VertexAttribute::Normal => 2,
            VertexAttribute::Color => 3,
            VertexAttribute::Tangent => 4,
        }
    }

    pub fn format(self) -> wgpu::VertexFormat {
        match self.components() {
            2 => wgpu::VertexFormat::Float32x2,
            3 => wgpu::VertexFormat::Float32x3,
            _ => wgpu::VertexFormat::Float32x4,
        }
    }

    fn read(self, vertex: &FullVertex) -> &[f32] {
        match self {
            VertexAttribute::Position => &vertex.position[..],
            VertexAttribute::Normal => &vertex.normal[..],
            VertexAttribute::Uv => &vertex.uv[..],
            VertexAttribute::Color => &vertex.color[..],
            VertexAttribute::Tangent => &vertex.tangent[..],
        }
    }
}

/// Layout of a caller-defined vertex record.
///
/// `size` is the stride in bytes. Position is always written; the other
/// attributes are written only when they carry an offset. Bytes not covered
/// by a present attribute are never touched.
///
/// ```
/// use std::mem::{offset_of, size_of};
/// use mesh_demos::data_structures::vertex::VertexDescriptor;
///
/// #[repr(C)]
/// struct Vertex {
///     position: [f32; 3],
///     uv: [f32; 2],
/// }
///
/// let descriptor = VertexDescriptor::new(size_of::<Vertex>(), offset_of!(Vertex, position))
///     .with_uv(offset_of!(Vertex, uv));
/// assert!(descriptor.validate().is_ok());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VertexDescriptor {
    pub size: usize,
    pub position_offset: usize,
    pub normal_offset: Option<usize>,
    pub uv_offset: Option<usize>,
    pub color_offset: Option<usize>,
    pub tangent_offset: Option<usize>,
}

impl VertexDescriptor {
    pub fn new(size: usize, position_offset: usize) -> Self {
        Self {
            size,
            position_offset,
            normal_offset: None,
            uv_offset: None,
            color_offset: None,
            tangent_offset: None,
        }
    }

    /// Descriptor matching [`FullVertex`] itself.
    pub fn full() -> Self {
        use std::mem::{offset_of, size_of};
        Self::new(size_of::<FullVertex>(), offset_of!(FullVertex, position))
            .with_normal(offset_of!(FullVertex, normal))
            .with_uv(offset_of!(FullVertex, uv))
            .with_color(offset_of!(FullVertex, color))
            .with_tangent(offset_of!(FullVertex, tangent))
    }

    pub fn with_normal(mut self, offset: usize) -> Self {
        self.normal_offset = Some(offset);
        self
    }

    pub fn with_uv(mut self, offset: usize) -> Self {
        self.uv_offset = Some(offset);
        self
    }

    pub fn with_color(mut self, offset: usize) -> Self {
        self.color_offset = Some(offset);
        self
    }

    pub fn with_tangent(mut self, offset: usize) -> Self {
        self.tangent_offset = Some(offset);
        self
    }

    pub fn offset(&self, attribute: VertexAttribute) -> Option<usize> {
        match attribute {
            VertexAttribute::Position => Some(self.position_offset),
            VertexAttribute::Normal => self.normal_offset,
            VertexAttribute::Uv => self.uv_offset,
            VertexAttribute::Color => self.color_offset,
            VertexAttribute::Tangent => self.tangent_offset,
        }
    }

    /// Present attributes with their byte offsets, position first.
    pub fn fields(&self) -> impl Iterator<Item = (VertexAttribute, usize)> + '_ {
        VertexAttribute::ALL
            .into_iter()
            .filter_map(|attribute| self.offset(attribute).map(|offset| (attribute, offset)))
    }

    /// Checks that every present attribute fits inside the record and that no
    /// two attributes share bytes.
    pub fn validate(&self) -> anyhow::Result<()> {
        let mut spans = Vec::new();
        for (attribute, offset) in self.fields() {
            let len = attribute.byte_len();
            match offset.checked_add(len) {
                Some(end) if end <= self.size => spans.push((attribute, offset, end)),
                _ => bail!(
                    "{:?} at offset {} ({} bytes) does not fit in a {} byte vertex",
                    attribute,
                    offset,
                    len,
                    self.size
                ),
            }
        }
        for (i, &(a, a_offset, a_end)) in spans.iter().enumerate() {
            for &(b, b_offset, b_end) in &spans[i + 1..] {
                if a_end > b_offset && b_end > a_offset {
                    bail!("{:?} at offset {} overlaps {:?} at offset {}", a, a_offset, b, b_offset);
                }
            }
        }
        Ok(())
    }

    /// wgpu attributes for the present fields, in shader location order.
    pub fn attributes(&self) -> Vec<wgpu::VertexAttribute> {
        let mut attributes: Vec<_> = self
            .fields()
            .map(|(attribute, offset)| wgpu::VertexAttribute {
                offset: offset as wgpu::BufferAddress,
                shader_location: attribute.shader_location(),
                format: attribute.format(),
            })
            .collect();
        attributes.sort_by_key(|a| a.shader_location);
        attributes
    }

    /**
     * Buffer layout for a vertex buffer filled through this descriptor.
     *
     * The attributes are borrowed because wgpu keeps a reference to them until
     * the pipeline is created; build them with [`Self::attributes`] first.
     */
    pub fn buffer_layout<'a>(
        &self,
        attributes: &'a [wgpu::VertexAttribute],
    ) -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: self.size as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes,
        }
    }
}

/// Copies `values` into `record` starting at byte `offset`.
///
/// Panics if the field does not fit in `record`.
pub fn write_field(record: &mut [u8], offset: usize, values: &[f32]) {
    let bytes: &[u8] = bytemuck::cast_slice(values);
    record[offset..offset + bytes.len()].copy_from_slice(bytes);
}

/// Writes `src` into `dst` as tightly packed records of `descriptor.size` bytes.
///
/// `dst` must hold exactly `src.len()` records.
pub fn convert_vertices(dst: &mut [u8], src: &[FullVertex], descriptor: &VertexDescriptor) {
    debug_assert_eq!(dst.len(), src.len() * descriptor.size);
    for (record, vertex) in dst.chunks_exact_mut(descriptor.size).zip(src) {
        for (attribute, offset) in descriptor.fields() {
            write_field(record, offset, attribute.read(vertex));
        }
    }
}
