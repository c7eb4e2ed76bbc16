//! Polygon meshes built from the Cubitrix boundary, and their subdivision.
//!
//! - [`mesh`]: the indexed polygon container [`Mesh`].
//! - [`vertex`]: [`SurfaceVertex`], the position/texcoord/normal vertex used
//!   by [`crate::world`].
//! - [`subdivide`]: Catmull-Clark subdivision over arbitrary vertex types.

pub mod mesh;
pub mod subdivide;
pub mod vertex;

pub use mesh::{Mesh, Polygon};
pub use subdivide::catmull_clark;
pub use vertex::SurfaceVertex;

use glam::Vec3;

/// Bitwise identity of a position, with `-0.0` folded onto `0.0`.
///
/// Two positions share a key exactly when they compare equal component-wise
/// (NaN aside), so the key can stand in for the position in hash maps.
#[inline]
pub fn position_key(position: Vec3) -> [u32; 3] {
    (position + Vec3::ZERO).to_array().map(f32::to_bits)
}

/// Unit vector along `v`, or zero when `v` is too short to normalize.
#[inline]
pub fn fast_unit(v: Vec3) -> Vec3 {
    let length = v.length();
    if length < 1e-6 { Vec3::ZERO } else { v / length }
}
