use std::path::Path;

use anyhow::Context;
use cgmath::{InnerSpace, Vector2, Vector3};

use crate::data_structures::vertex::FullVertex;

/**
 * Parses an OBJ file into a flat triangle list.
 *
 * Faces are triangulated by tobj (fan from the first corner); `l` and `p`
 * elements are skipped. Every face
 * corner becomes its own vertex: position, normal and texcoord are resolved
 * through their separate index lists and nothing is deduplicated. Attributes
 * the file does not provide stay zero. Positions are multiplied by `scale`.
 */
pub fn load_obj_vertices(path: &Path, scale: f32) -> anyhow::Result<Vec<FullVertex>> {
    let (models, materials) = tobj::load_obj(
        path,
        &tobj::LoadOptions {
            triangulate: true,
            single_index: false,
            ignore_points: true,
            ignore_lines: true,
            ..Default::default()
        },
    )
    .with_context(|| format!("failed to parse {}", path.display()))?;

    if let Err(e) = materials {
        log::warn!("Materials of {} could not be loaded: {}", path.display(), e);
    }

    let mut vertices = Vec::new();
    for model in &models {
        let mesh = &model.mesh;
        let first = vertices.len();
        for (corner, &position_index) in mesh.indices.iter().enumerate() {
            let p = position_index as usize;
            let mut vertex = FullVertex::default();

            vertex.position = [
                mesh.positions[p * 3] * scale,
                mesh.positions[p * 3 + 1] * scale,
                mesh.positions[p * 3 + 2] * scale,
            ];
            if let Some(&n) = mesh.normal_indices.get(corner) {
                let n = n as usize;
                vertex.normal = [
                    mesh.normals.get(n * 3).map_or(0.0, |f| *f),
                    mesh.normals.get(n * 3 + 1).map_or(0.0, |f| *f),
                    mesh.normals.get(n * 3 + 2).map_or(0.0, |f| *f),
                ];
            }
            if let Some(&t) = mesh.texcoord_indices.get(corner) {
                let t = t as usize;
                vertex.uv = [
                    mesh.texcoords.get(t * 2).map_or(0.0, |f| *f),
                    mesh.texcoords.get(t * 2 + 1).map_or(0.0, |f| *f),
                ];
            }
            if mesh.vertex_color.len() >= (p + 1) * 3 {
                vertex.color = [
                    mesh.vertex_color[p * 3],
                    mesh.vertex_color[p * 3 + 1],
                    mesh.vertex_color[p * 3 + 2],
                    1.0,
                ];
            }
            vertices.push(vertex);
        }

        if !mesh.texcoord_indices.is_empty() {
            compute_tangents(&mut vertices[first..]);
        }
    }

    Ok(vertices)
}

/**
 * Obj files don't come with tangents so they are derived per triangle from
 * the position and uv deltas. Corners are never shared, so each corner simply
 * takes the tangent of its triangle. Triangles with degenerate uvs keep a
 * zero tangent.
 */
fn compute_tangents(vertices: &mut [FullVertex]) {
    for triangle in vertices.chunks_exact_mut(3) {
        let pos0: Vector3<f32> = triangle[0].position.into();
        let pos1: Vector3<f32> = triangle[1].position.into();
        let pos2: Vector3<f32> = triangle[2].position.into();

        let uv0: Vector2<f32> = triangle[0].uv.into();
        let uv1: Vector2<f32> = triangle[1].uv.into();
        let uv2: Vector2<f32> = triangle[2].uv.into();

        let delta_pos1 = pos1 - pos0;
        let delta_pos2 = pos2 - pos0;
        let delta_uv1 = uv1 - uv0;
        let delta_uv2 = uv2 - uv0;

        // Solves
        //     delta_pos1 = delta_uv1.x * T + delta_uv1.y * B
        //     delta_pos2 = delta_uv2.x * T + delta_uv2.y * B
        let det = delta_uv1.x * delta_uv2.y - delta_uv1.y * delta_uv2.x;
        if det.abs() <= f32::EPSILON {
            continue;
        }
        let r = 1.0 / det;
        let tangent = (delta_pos1 * delta_uv2.y - delta_pos2 * delta_uv1.y) * r;
        let bitangent = (delta_pos2 * delta_uv1.x - delta_pos1 * delta_uv2.x) * r;
        if tangent.magnitude2() <= f32::EPSILON {
            continue;
        }
        let tangent = tangent.normalize();

        for vertex in triangle.iter_mut() {
            let normal: Vector3<f32> = vertex.normal.into();
            let handedness = if normal.cross(tangent).dot(bitangent) < 0.0 { -1.0 } else { 1.0 };
            vertex.tangent = tangent.extend(handedness).into();
        }
    }
}
