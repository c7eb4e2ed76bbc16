//! CubitError: unified error type for cubitrix public APIs
//!
//! Lattice arithmetic and occupancy updates never fail. Errors only surface
//! at the few seams where a caller hands us something we can check: packed
//! cubit codes, level-of-detail requests and mesh validation.

use thiserror::Error;

/// Unified error type for cubitrix operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CubitError {
    /// A packed cubit code does not fit in 24 bits.
    #[error("cubit code {0:#x} exceeds the 24-bit lattice range")]
    InvalidCubitCode(u32),
    /// A level of detail beyond the configured maximum was requested.
    #[error("level of detail {requested} exceeds the maximum of {max}")]
    LevelOfDetailOutOfRange { requested: usize, max: usize },
    /// A mesh face has no vertices.
    #[error("mesh face {face} has no vertices")]
    EmptyFace { face: usize },
    /// A mesh face references a vertex index past the end of the vertex list.
    #[error("mesh face {face} references vertex {index}, but the mesh has {vertex_count} vertices")]
    VertexIndexOutOfRange {
        face: usize,
        index: usize,
        vertex_count: usize,
    },
}
