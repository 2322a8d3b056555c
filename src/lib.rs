//! mesh-demos
//!
//! Geometry and math shared by a set of small rendering demos. Scenes build
//! their static meshes once at start-up into a single vertex buffer laid out
//! however the scene likes, then draw index ranges of it.
//!
//! High-level modules
//! - `calc`: scalar helpers and matrix constructors on top of cgmath
//! - `camera`: free-fly camera math driven by a per-frame input snapshot
//! - `data_structures`: canonical vertex and caller layout descriptors
//! - `mesh_builder`: shape generators writing into a caller-owned buffer
//! - `resources`: OBJ import and its binary cache
//! - `render`: upload of built buffers and drawing of mesh slices with wgpu
//!

pub mod calc;
pub mod camera;
pub mod data_structures;
pub mod mesh_builder;
pub mod render;
pub mod resources;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;
pub use data_structures::vertex::{FullVertex, VertexAttribute, VertexDescriptor};
pub use mesh_builder::{MeshBuilder, MeshSlice};
pub use resources::cache::ObjCache;
