/**
 * This module contains all logic for loading meshes from external files.
 *
 * `mesh` turns an OBJ file into canonical vertices, `cache` keeps a binary
 * copy of the result next to the source file so the text is parsed once.
 */
pub mod cache;
pub mod mesh;
