//! Builds the demo meshes into one buffer and reports their slices.
//!
//! Every argument is imported as an OBJ file, which also writes its cache
//! file so later runs skip parsing.
//!
//! ```text
//! RUST_LOG=info mesh-info assets/rock.obj assets/ship.obj
//! ```

use std::mem::{offset_of, size_of};

use mesh_demos::{MeshBuilder, MeshSlice, VertexDescriptor};

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct Vertex {
    position: [f32; 3],
    uv: [f32; 2],
    normal: [f32; 3],
    tangent: [f32; 4],
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = env_logger::try_init() {
        println!("Warning: Could not initialize logger: {}", e);
    }

    let descriptor = VertexDescriptor::new(size_of::<Vertex>(), offset_of!(Vertex, position))
        .with_uv(offset_of!(Vertex, uv))
        .with_normal(offset_of!(Vertex, normal))
        .with_tangent(offset_of!(Vertex, tangent));
    descriptor.validate()?;

    let mut vertices: Vec<Vertex> = Vec::new();
    let mut builder = MeshBuilder::new(descriptor, &mut vertices);

    let mut slices: Vec<(String, MeshSlice)> = vec![
        ("quad".into(), builder.gen_quad(None, 0.5, 0.5)),
        ("triangle".into(), builder.gen_triangle(None)),
        ("icosphere".into(), builder.gen_icosphere(None, 3)),
        ("uv sphere".into(), builder.gen_uv_sphere(None, 48, 64)),
    ];
    for path in std::env::args().skip(1) {
        let slice = builder.load_obj(None, &path, 1.0);
        if slice.is_empty() {
            log::warn!("{} produced no vertices", path);
        }
        slices.push((path, slice));
    }

    for (name, slice) in &slices {
        log::info!(
            "{}: start {} count {} ({} triangles)",
            name,
            slice.start,
            slice.count,
            slice.count / 3
        );
    }
    log::info!(
        "{} vertices, {} bytes",
        vertices.len(),
        vertices.len() * size_of::<Vertex>()
    );

    Ok(())
}
