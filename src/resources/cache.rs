//! Binary cache for imported OBJ meshes.
//!
//! The cache sits next to the source file as `<file>.cache` and holds
//! `[u64 version][u64 count][count x FullVertex]` in native byte order. It is
//! only as portable as the machine that wrote it.
//!
//! The version tag is the only thing checked on load: cache correctness is
//! advisory. A file with a matching tag but stale or corrupted records is
//! returned as-is.

use std::path::{Path, PathBuf};

use crate::data_structures::vertex::FullVertex;

/// Bump whenever the layout of [`FullVertex`] changes.
pub const OBJ_CACHE_VERSION: u64 = 2;

pub const OBJ_CACHE_SUFFIX: &str = ".cache";

const HEADER_LEN: usize = 2 * std::mem::size_of::<u64>();

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjCache {
    /// Tag written to new cache files and required from existing ones.
    pub version: u64,
    pub enabled: bool,
}

impl Default for ObjCache {
    fn default() -> Self {
        Self {
            version: OBJ_CACHE_VERSION,
            enabled: true,
        }
    }
}

impl ObjCache {
    pub fn with_version(version: u64) -> Self {
        Self {
            version,
            ..Default::default()
        }
    }

    /// Never reads nor writes cache files.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    pub fn cache_path(obj_path: &Path) -> PathBuf {
        let mut path = obj_path.as_os_str().to_owned();
        path.push(OBJ_CACHE_SUFFIX);
        PathBuf::from(path)
    }

    /// Whether a cache file tagged `version` may be used.
    pub fn accepts(&self, version: u64) -> bool {
        self.enabled && version == self.version
    }

    /// Vertices cached for `obj_path`, or `None` on a cache miss.
    pub fn load(&self, obj_path: &Path) -> Option<Vec<FullVertex>> {
        if !self.enabled {
            return None;
        }
        let cache_path = Self::cache_path(obj_path);
        let bytes = std::fs::read(&cache_path).ok()?;
        let vertices = self.decode(&bytes)?;
        log::info!(
            "Loaded from cache: {} ({} vertices)",
            obj_path.display(),
            vertices.len()
        );
        Some(vertices)
    }

    /// Writes a fresh cache file for `obj_path`, replacing any existing one.
    ///
    /// Failures are logged and otherwise ignored.
    pub fn store(&self, obj_path: &Path, vertices: &[FullVertex]) {
        if !self.enabled {
            return;
        }
        let cache_path = Self::cache_path(obj_path);
        match std::fs::write(&cache_path, self.encode(vertices)) {
            Ok(()) => log::info!(
                "Saved to cache: {} ({} vertices)",
                obj_path.display(),
                vertices.len()
            ),
            Err(e) => log::warn!("Could not write cache {}: {}", cache_path.display(), e),
        }
    }

    pub fn encode(&self, vertices: &[FullVertex]) -> Vec<u8> {
        let payload: &[u8] = bytemuck::cast_slice(vertices);
        let mut bytes = Vec::with_capacity(HEADER_LEN + payload.len());
        bytes.extend_from_slice(&self.version.to_ne_bytes());
        bytes.extend_from_slice(&(vertices.len() as u64).to_ne_bytes());
        bytes.extend_from_slice(payload);
        bytes
    }

    /// Decodes a cache file. Rejects foreign version tags and files too short
    /// for the record count they declare.
    pub fn decode(&self, bytes: &[u8]) -> Option<Vec<FullVertex>> {
        let version = read_u64(bytes, 0)?;
        if !self.accepts(version) {
            log::info!(
                "Discarding cache with version {} (expected {})",
                version,
                self.version
            );
            return None;
        }
        let count = usize::try_from(read_u64(bytes, 8)?).ok()?;
        let payload_len = count.checked_mul(std::mem::size_of::<FullVertex>())?;
        let payload = bytes.get(HEADER_LEN..HEADER_LEN.checked_add(payload_len)?)?;

        // The payload is not necessarily aligned for f32, so copy bytewise.
        let mut vertices = vec![FullVertex::default(); count];
        bytemuck::cast_slice_mut::<FullVertex, u8>(&mut vertices).copy_from_slice(payload);
        Some(vertices)
    }
}

fn read_u64(bytes: &[u8], at: usize) -> Option<u64> {
    let raw = bytes.get(at..at.checked_add(std::mem::size_of::<u64>())?)?;
    Some(bytemuck::pod_read_unaligned(raw))
}
