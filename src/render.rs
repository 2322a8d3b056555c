//! Hand-off of built vertex buffers to the GPU.
//!
//! - [`upload_vertices`] turns the bytes of a builder's buffer into a wgpu
//!   vertex buffer
//! - [`DrawSlice`] draws one [`MeshSlice`] of such a buffer as a triangle list
//!

use wgpu::util::DeviceExt;

use crate::mesh_builder::MeshSlice;

pub fn upload_vertices(device: &wgpu::Device, label: &str, bytes: &[u8]) -> wgpu::Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(&format!("{:?} Vertex Buffer", label)),
        contents: bytes,
        usage: wgpu::BufferUsages::VERTEX,
    })
}

/// Draws mesh slices from the currently bound vertex buffer.
pub trait DrawSlice {
    fn draw_slice(&mut self, slice: MeshSlice);
}

impl DrawSlice for wgpu::RenderPass<'_> {
    fn draw_slice(&mut self, slice: MeshSlice) {
        if slice.is_empty() {
            return;
        }
        self.draw(slice.range_u32(), 0..1);
    }
}
