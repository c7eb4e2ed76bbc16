//! Lattice topology: cubes, faces, edges and vertices of the 256³ grid.
//!
//! Every element is a small `Copy` value derived from a [`Cubit`] plus an
//! axis and orientation tag. Nothing here is stored; adjacency queries are
//! table-driven and return fixed-size arrays. The algebra is closed: walking
//! from any element to a neighbouring element and back always finds the
//! starting element again.

pub mod axis;
pub mod cubit;
pub mod edge;
pub mod face;
pub mod vertex;

pub use axis::Axis;
pub use cubit::{Cubit, min_max};
pub use edge::Edge;
pub use face::Face;
pub use vertex::Vertex;

#[cfg(test)]
mod tests;
