//! Surface vertex: position, texture coordinate and normal.

use core::fmt;
use core::hash::{Hash, Hasher};

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

use crate::geometry::fast_unit;

/// A mesh vertex carrying the attributes threaded through subdivision.
///
/// Equality and hashing compare the raw bytes, so two vertices are the same
/// mesh vertex only when every attribute is bit-identical.
#[repr(C)]
#[derive(Copy, Clone, Default, Pod, Zeroable)]
pub struct SurfaceVertex {
    pub position: Vec3,
    pub texcoord: Vec2,
    pub normal: Vec3,
}

impl SurfaceVertex {
    #[inline]
    pub const fn new(position: Vec3, texcoord: Vec2, normal: Vec3) -> Self {
        SurfaceVertex {
            position,
            texcoord,
            normal,
        }
    }

    #[inline]
    pub fn with_position(self, position: Vec3) -> Self {
        SurfaceVertex { position, ..self }
    }

    #[inline]
    pub fn with_normal(self, normal: Vec3) -> Self {
        SurfaceVertex { normal, ..self }
    }

    /// Averages position and texcoord, and renormalizes the summed normal.
    /// An empty slice blends to the zero vertex.
    pub fn blend(vertices: &[SurfaceVertex]) -> SurfaceVertex {
        if vertices.is_empty() {
            return SurfaceVertex::default();
        }
        let n = vertices.len() as f32;
        let (position, texcoord, normal) = vertices.iter().fold(
            (Vec3::ZERO, Vec2::ZERO, Vec3::ZERO),
            |(p, t, m), v| (p + v.position, t + v.texcoord, m + v.normal),
        );
        SurfaceVertex::new(position / n, texcoord / n, fast_unit(normal))
    }
}

impl PartialEq for SurfaceVertex {
    fn eq(&self, other: &Self) -> bool {
        bytemuck::bytes_of(self) == bytemuck::bytes_of(other)
    }
}

impl Eq for SurfaceVertex {}

impl Hash for SurfaceVertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        bytemuck::bytes_of(self).hash(state);
    }
}

impl fmt::Debug for SurfaceVertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})[{} {}] {}",
            self.position.x,
            self.position.y,
            self.position.z,
            self.texcoord.x,
            self.texcoord.y,
            self.normal
        )
    }
}
