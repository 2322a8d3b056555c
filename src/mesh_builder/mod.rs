//! Procedural mesh generation into a caller-owned vertex buffer.
//!
//! A [`MeshBuilder`] borrows the caller's `Vec<V>` together with a
//! [`VertexDescriptor`] describing `V`. Each generator writes its vertices
//! either at the end of the buffer (growing it) or at a fixed index inside
//! it, and returns the [`MeshSlice`] it wrote to. Slices are plain index
//! ranges, so they stay valid when later calls reallocate the buffer.

use std::{ops::Range, path::Path};

use bytemuck::Pod;

use crate::{
    data_structures::vertex::{FullVertex, VertexDescriptor, convert_vertices},
    resources::{self, cache::ObjCache},
};

pub mod shapes;

/// Half-open range of vertices inside the shared buffer, drawn as a
/// triangle list.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct MeshSlice {
    pub start: usize,
    pub count: usize,
}

impl MeshSlice {
    pub fn new(start: usize, count: usize) -> Self {
        Self { start, count }
    }

    pub fn end(&self) -> usize {
        self.start + self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// Range in the form wgpu draw calls take.
    ///
    /// wgpu addresses vertices with `u32`, so the slice must end at or below
    /// `u32::MAX`. Checked in debug builds; release builds truncate.
    pub fn range_u32(&self) -> Range<u32> {
        debug_assert!(
            u32::try_from(self.end()).is_ok(),
            "{:?} is out of u32 vertex range",
            self
        );
        self.start as u32..self.end() as u32
    }
}

pub struct MeshBuilder<'a, V: Pod> {
    descriptor: VertexDescriptor,
    vertices: &'a mut Vec<V>,
}

impl<'a, V: Pod> MeshBuilder<'a, V> {
    /// The descriptor must describe `V`: its `size` is `size_of::<V>()` and
    /// every field lies inside the record without overlapping another one.
    /// Both are checked in debug builds only.
    pub fn new(descriptor: VertexDescriptor, vertices: &'a mut Vec<V>) -> Self {
        debug_assert_eq!(
            descriptor.size,
            std::mem::size_of::<V>(),
            "vertex descriptor size does not match the vertex type"
        );
        if cfg!(debug_assertions) {
            if let Err(e) = descriptor.validate() {
                panic!("invalid vertex descriptor: {e}");
            }
        }
        Self {
            descriptor,
            vertices,
        }
    }

    pub fn descriptor(&self) -> &VertexDescriptor {
        &self.descriptor
    }

    /// Number of vertices currently in the buffer.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Reserves `count` records and returns where they live.
    ///
    /// With `start == None` the buffer grows by `count` zeroed records. With
    /// `Some(start)` the records `start..start + count` must already exist.
    fn dst(&mut self, start: Option<usize>, count: usize) -> MeshSlice {
        match start {
            Some(start) => MeshSlice::new(start, count),
            None => {
                let old_len = self.vertices.len();
                self.vertices.resize(old_len + count, V::zeroed());
                MeshSlice::new(old_len, count)
            }
        }
    }

    /// Writes canonical vertices into the buffer.
    ///
    /// # Panics
    ///
    /// Panics if `start` is given and `start + vertices.len()` exceeds the
    /// current buffer length. Fixed placement never grows the buffer.
    pub fn push_vertices(&mut self, start: Option<usize>, vertices: &[FullVertex]) -> MeshSlice {
        let slice = self.dst(start, vertices.len());
        let records = &mut self.vertices[slice.range()];
        convert_vertices(bytemuck::cast_slice_mut(records), vertices, &self.descriptor);
        slice
    }

    pub fn gen_triangle(&mut self, start: Option<usize>) -> MeshSlice {
        self.push_vertices(start, &shapes::triangle())
    }

    pub fn gen_quad(&mut self, start: Option<usize>, half_width: f32, half_height: f32) -> MeshSlice {
        self.push_vertices(start, &shapes::quad(half_width, half_height))
    }

    /// Sphere of radius 0.5 made of `20 * 4^depth` triangles.
    pub fn gen_icosphere(&mut self, start: Option<usize>, depth: u32) -> MeshSlice {
        self.push_vertices(start, &shapes::icosphere(depth))
    }

    /// Sphere of radius 0.5 with `lat` rings and `lon` segments.
    pub fn gen_uv_sphere(&mut self, start: Option<usize>, lat: u32, lon: u32) -> MeshSlice {
        self.push_vertices(start, &shapes::uv_sphere(lat, lon))
    }

    /// Imports an OBJ file using the default cache.
    ///
    /// Returns an empty slice at index 0 when the file cannot be imported.
    pub fn load_obj<P: AsRef<Path>>(&mut self, start: Option<usize>, path: P, scale: f32) -> MeshSlice {
        self.load_obj_with_cache(start, path, scale, &ObjCache::default())
    }

    pub fn load_obj_with_cache<P: AsRef<Path>>(
        &mut self,
        start: Option<usize>,
        path: P,
        scale: f32,
        cache: &ObjCache,
    ) -> MeshSlice {
        let path = path.as_ref();
        let vertices = match cache.load(path) {
            Some(vertices) => vertices,
            None => match resources::mesh::load_obj_vertices(path, scale) {
                Ok(vertices) => {
                    cache.store(path, &vertices);
                    vertices
                }
                Err(e) => {
                    log::error!("Could not import {}: {:#}", path.display(), e);
                    return MeshSlice::default();
                }
            },
        };
        self.push_vertices(start, &vertices)
    }
}
