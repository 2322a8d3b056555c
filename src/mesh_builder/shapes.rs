//! Canonical vertex lists for the built-in shapes.
//!
//! All shapes are triangle lists (no index buffer) in [`FullVertex`] space.
//! Spheres are centered at the origin with radius 0.5.

use std::f32::consts::PI;

use cgmath::Vector3;

use crate::{calc, data_structures::vertex::FullVertex};

const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
const FLAT_NORMAL: [f32; 3] = [0.0, 0.0, 1.0];
const FLAT_TANGENT: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
const SPHERE_RADIUS: f32 = 0.5;

fn flat(position: [f32; 3], uv: [f32; 2], color: [f32; 4]) -> FullVertex {
    FullVertex {
        position,
        normal: FLAT_NORMAL,
        uv,
        color,
        tangent: FLAT_TANGENT,
    }
}

pub fn triangle() -> [FullVertex; 3] {
    [
        flat([0.5, -0.5, 0.0], [1.0, 0.0], [1.0, 0.0, 0.0, 1.0]),
        flat([-0.5, -0.5, 0.0], [0.0, 0.0], [0.0, 1.0, 0.0, 1.0]),
        flat([0.0, 0.5, 0.0], [0.5, 1.0], [0.0, 0.0, 1.0, 1.0]),
    ]
}

pub fn quad(half_width: f32, half_height: f32) -> [FullVertex; 6] {
    let (w, h) = (half_width, half_height);
    [
        flat([w, -h, 0.0], [1.0, 0.0], WHITE),
        flat([-w, -h, 0.0], [0.0, 0.0], WHITE),
        flat([w, h, 0.0], [1.0, 1.0], WHITE),
        flat([w, h, 0.0], [1.0, 1.0], WHITE),
        flat([-w, h, 0.0], [0.0, 1.0], WHITE),
        flat([-w, -h, 0.0], [0.0, 0.0], WHITE),
    ]
}

/// Unit tangent following increasing longitude around the Y axis.
fn azimuthal_tangent(longitude: f32) -> [f32; 4] {
    let (sin, cos) = longitude.sin_cos();
    [-sin, 0.0, cos, 1.0]
}

/// Vertex on the sphere surface in direction `direction` (unit length).
fn sphere_vertex(direction: Vector3<f32>, uv: [f32; 2], longitude: f32) -> FullVertex {
    FullVertex {
        position: (direction * SPHERE_RADIUS).into(),
        normal: direction.into(),
        uv,
        color: WHITE,
        tangent: azimuthal_tangent(longitude),
    }
}

const ICOSAHEDRON_FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

fn icosahedron_vertices() -> [Vector3<f32>; 12] {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    [
        Vector3::new(-1.0, t, 0.0),
        Vector3::new(1.0, t, 0.0),
        Vector3::new(-1.0, -t, 0.0),
        Vector3::new(1.0, -t, 0.0),
        Vector3::new(0.0, -1.0, t),
        Vector3::new(0.0, 1.0, t),
        Vector3::new(0.0, -1.0, -t),
        Vector3::new(0.0, 1.0, -t),
        Vector3::new(t, 0.0, -1.0),
        Vector3::new(t, 0.0, 1.0),
        Vector3::new(-t, 0.0, -1.0),
        Vector3::new(-t, 0.0, 1.0),
    ]
}

/// Number of vertices [`icosphere`] emits for `depth` subdivisions.
pub fn icosphere_vertex_count(depth: u32) -> usize {
    3 * 20 * 4usize.pow(depth)
}

/// Icosahedron subdivided `depth` times at edge midpoints, projected onto
/// the sphere.
pub fn icosphere(depth: u32) -> Vec<FullVertex> {
    let base = icosahedron_vertices();
    let mut out = Vec::with_capacity(icosphere_vertex_count(depth));
    for [a, b, c] in ICOSAHEDRON_FACES {
        subdivide(base[a], base[b], base[c], depth, &mut out);
    }
    debug_assert_eq!(out.len(), icosphere_vertex_count(depth));
    out
}

fn subdivide(
    a: Vector3<f32>,
    b: Vector3<f32>,
    c: Vector3<f32>,
    depth: u32,
    out: &mut Vec<FullVertex>,
) {
    if depth == 0 {
        out.extend([a, b, c].into_iter().map(icosphere_vertex));
        return;
    }
    let ab = calc::midpoint(a, b);
    let bc = calc::midpoint(b, c);
    let ca = calc::midpoint(c, a);
    subdivide(a, ab, ca, depth - 1, out);
    subdivide(ab, b, bc, depth - 1, out);
    subdivide(ca, bc, c, depth - 1, out);
    subdivide(ab, bc, ca, depth - 1, out);
}

fn icosphere_vertex(corner: Vector3<f32>) -> FullVertex {
    let n = calc::normalize_or_zero(corner);
    let longitude = n.z.atan2(n.x);
    let uv = [
        0.5 + longitude / calc::TAU,
        0.5 + calc::clamp(n.y, -1.0, 1.0).asin() / PI,
    ];
    sphere_vertex(n, uv, longitude)
}

/// Number of vertices [`uv_sphere`] emits.
pub fn uv_sphere_vertex_count(lat: u32, lon: u32) -> usize {
    6 * lat as usize * lon as usize
}

/// Latitude/longitude tessellated sphere, two triangles per cell.
///
/// The texture mapping runs `u = 1 - lon_fraction`, `v = 1 - lat_fraction`,
/// so the texture is mirrored relative to the usual convention.
pub fn uv_sphere(lat: u32, lon: u32) -> Vec<FullVertex> {
    let point = |i: u32, j: u32| {
        let lat_fraction = i as f32 / lat as f32;
        let lon_fraction = j as f32 / lon as f32;
        let polar = lat_fraction * PI;
        let azimuth = lon_fraction * calc::TAU;
        let (sin_polar, cos_polar) = polar.sin_cos();
        let (sin_azimuth, cos_azimuth) = azimuth.sin_cos();
        let direction = Vector3::new(sin_polar * cos_azimuth, cos_polar, sin_polar * sin_azimuth);
        sphere_vertex(direction, [1.0 - lon_fraction, 1.0 - lat_fraction], azimuth)
    };

    let mut out = Vec::with_capacity(uv_sphere_vertex_count(lat, lon));
    for i in 0..lat {
        for j in 0..lon {
            let a = point(i, j);
            let b = point(i + 1, j);
            let c = point(i + 1, j + 1);
            let d = point(i, j + 1);
            out.extend([a, c, b, a, d, c]);
        }
    }
    out
}
