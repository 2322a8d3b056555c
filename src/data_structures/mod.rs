//! Engine data structures.
//!
//! - `vertex` holds the canonical vertex, the caller layout descriptor and the
//!   conversion between the two

pub mod vertex;
