#![allow(dead_code)]

use std::{
    mem::{offset_of, size_of},
    path::{Path, PathBuf},
};

use mesh_demos::VertexDescriptor;

/// Vertex with every attribute, in an order different from `FullVertex`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LitVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
    pub normal: [f32; 3],
    pub color: [f32; 4],
    pub tangent: [f32; 4],
}

impl LitVertex {
    pub fn descriptor() -> VertexDescriptor {
        VertexDescriptor::new(size_of::<Self>(), offset_of!(Self, position))
            .with_uv(offset_of!(Self, uv))
            .with_normal(offset_of!(Self, normal))
            .with_color(offset_of!(Self, color))
            .with_tangent(offset_of!(Self, tangent))
    }
}

/// Same record size as `LitVertex`, but only position and uv are declared.
pub fn position_uv_descriptor() -> VertexDescriptor {
    VertexDescriptor::new(size_of::<LitVertex>(), offset_of!(LitVertex, position))
        .with_uv(offset_of!(LitVertex, uv))
}

pub fn magnitude(v: [f32; 3]) -> f32 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-5,
        "expected {} but got {}",
        expected,
        actual
    );
}

/// A unit square in the XY plane written as one quad face.
pub const SQUARE_OBJ: &str = "\
o square
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 1.0 1.0 0.0
v 0.0 1.0 0.0
vt 0.0 0.0
vt 1.0 0.0
vt 1.0 1.0
vt 0.0 1.0
vn 0.0 0.0 1.0
f 1/1/1 2/2/1 3/3/1 4/4/1
";

/// Two triangles sharing an edge, positions only.
pub const BARE_OBJ: &str = "\
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.0 1.0 0.0
v 1.0 1.0 0.0
f 1 2 3
f 2 4 3
";

/// One face plus a line and a point element, which are not part of the
/// triangle list.
pub const FACE_WITH_LINE_OBJ: &str = "\
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.0 1.0 0.0
v 1.0 1.0 0.0
f 1 2 3
l 1 4
p 4
";

pub fn write_obj(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("failed to write obj fixture");
    path
}
