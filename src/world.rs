//! `CubitWorld`: a grown solid and its boundary mesh at every level of detail.
//!
//! Level 0 is the blocky boundary of the solid: one quad per boundary face,
//! normals smoothed across coincident corners. Each further level is one
//! Catmull-Clark step applied to the level below. Levels are built on first
//! request and kept for the lifetime of the world.

use glam::{IVec3, Vec2, Vec3};
use hashbrown::HashMap;
use once_cell::unsync::OnceCell;

use crate::cubit_error::CubitError;
use crate::cubitrix::{Cubitrix, Summary};
use crate::debug_invariants::DebugInvariants;
use crate::geometry::{Mesh, SurfaceVertex, catmull_clark, fast_unit};
use crate::growth::{CubitGrowth, GrowthConfig};
use crate::topology::{Face, Vertex};

/// Texture coordinates of the four corners of every level-0 quad.
pub const CORNER_TEXCOORDS: [Vec2; 4] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(0.0, 1.0),
];

/// Level of detail used to anchor points onto the surface.
pub const SURFACE_LEVEL_OF_DETAIL: usize = 2;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WorldConfig {
    /// Growth seed; replaces `growth.seed`.
    pub seed: u64,
    /// Stop growing once this many cubits are occupied.
    pub cubit_limit: usize,
    /// Highest level of detail [`CubitWorld::mesh`] will build.
    pub max_level_of_detail: usize,
    pub growth: GrowthConfig,
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig {
            seed: 101,
            cubit_limit: 800,
            max_level_of_detail: 4,
            growth: GrowthConfig::default(),
        }
    }
}

type FacePoints = HashMap<IVec3, Vec<SurfaceVertex>>;

pub struct CubitWorld {
    cubitrix: Cubitrix,
    summary: Summary,
    base: Mesh<SurfaceVertex>,
    levels: Vec<OnceCell<Mesh<SurfaceVertex>>>,
    face_points: OnceCell<FacePoints>,
}

impl CubitWorld {
    /// Grows a solid and builds its level-0 mesh.
    pub fn generate(config: WorldConfig) -> Self {
        let mut growth = CubitGrowth::new(GrowthConfig {
            seed: config.seed,
            ..config.growth
        });
        growth.grow_until(config.cubit_limit);
        Self::from_cubitrix(growth.into_cubitrix(), config.max_level_of_detail)
    }

    /// Wraps an existing volume.
    pub fn from_cubitrix(cubitrix: Cubitrix, max_level_of_detail: usize) -> Self {
        let summary = cubitrix.summary();
        let base = boundary_mesh(&cubitrix);
        log::debug!(
            "world: {summary}; level 0 has {} faces, {} vertices",
            base.face_count(),
            base.vertex_count()
        );
        CubitWorld {
            cubitrix,
            summary,
            base,
            levels: (0..max_level_of_detail).map(|_| OnceCell::new()).collect(),
            face_points: OnceCell::new(),
        }
    }

    #[inline]
    pub fn cubitrix(&self) -> &Cubitrix {
        &self.cubitrix
    }

    /// Summary of the volume taken when the world was built.
    #[inline]
    pub fn summary(&self) -> Summary {
        self.summary
    }

    #[inline]
    pub fn max_level_of_detail(&self) -> usize {
        self.levels.len()
    }

    /// Number of levels built so far, level 0 included.
    pub fn built_levels(&self) -> usize {
        1 + self.levels.iter().filter(|cell| cell.get().is_some()).count()
    }

    /// The mesh at `level`, building it and any missing coarser level first.
    pub fn mesh(&self, level: usize) -> Result<&Mesh<SurfaceVertex>, CubitError> {
        let Some(previous) = level.checked_sub(1) else {
            return Ok(&self.base);
        };
        let cell = self
            .levels
            .get(previous)
            .ok_or(CubitError::LevelOfDetailOutOfRange {
                requested: level,
                max: self.max_level_of_detail(),
            })?;
        if let Some(mesh) = cell.get() {
            return Ok(mesh);
        }
        let coarser = self.mesh(previous)?;
        Ok(cell.get_or_init(|| {
            let mesh = subdivide(coarser);
            mesh.debug_assert_invariants();
            log::debug!(
                "world: level {level} has {} faces, {} vertices",
                mesh.face_count(),
                mesh.vertex_count()
            );
            mesh
        }))
    }

    /// Moves `position` onto the smooth surface near it.
    ///
    /// Face centres of the level-[`SURFACE_LEVEL_OF_DETAIL`] mesh within unit
    /// distance are weighted by `((1 - d²) / (1 + d²))⁸`; `position` is
    /// projected onto the plane through their weighted centre along their
    /// weighted normal. Far from the surface the inputs come back unchanged.
    pub fn best_surface(&self, position: Vec3, normal: Vec3) -> Result<(Vec3, Vec3), CubitError> {
        let face_points = self.face_points()?;
        let cell = position.round().as_ivec3();

        let mut total_weight = 0.0f32;
        let mut total_position = Vec3::ZERO;
        let mut total_normal = Vec3::ZERO;
        for dz in -1..=0 {
            for dy in -1..=0 {
                for dx in -1..=0 {
                    let Some(points) = face_points.get(&(cell + IVec3::new(dx, dy, dz))) else {
                        continue;
                    };
                    for point in points {
                        let squared = (point.position - position).length_squared();
                        if squared >= 1.0 {
                            continue;
                        }
                        let weight = ((1.0 - squared) / (1.0 + squared)).powi(8);
                        total_weight += weight;
                        total_position += point.position * weight;
                        total_normal += point.normal * weight;
                    }
                }
            }
        }

        if total_weight <= 1e-6 {
            return Ok((position, normal));
        }
        let surface_normal = fast_unit(total_normal);
        let centre = total_position / total_weight;
        let surface_position = position - (position - centre).dot(surface_normal) * surface_normal;
        Ok((surface_position, surface_normal))
    }

    fn face_points(&self) -> Result<&FacePoints, CubitError> {
        if let Some(points) = self.face_points.get() {
            return Ok(points);
        }
        let level = SURFACE_LEVEL_OF_DETAIL.min(self.max_level_of_detail());
        let mesh = self.mesh(level)?;
        Ok(self.face_points.get_or_init(|| {
            let mut points = FacePoints::new();
            for face in &mesh.faces {
                let corners: Vec<SurfaceVertex> = face.iter().map(|&v| mesh.vertices[v]).collect();
                let centre = SurfaceVertex::blend(&corners);
                points
                    .entry(centre.position.floor().as_ivec3())
                    .or_default()
                    .push(centre);
            }
            points
        }))
    }
}

/// One quad per oriented boundary face, normals smoothed by position.
fn boundary_mesh(cubitrix: &Cubitrix) -> Mesh<SurfaceVertex> {
    let faces = cubitrix.cubes().flat_map(|c| cubitrix.oriented_faces(c));
    let mut mesh = Mesh::from_oriented_faces(faces, |face: Face, corner: Vertex, n| {
        let [nx, ny, nz] = face.normal();
        let p = corner.position();
        SurfaceVertex::new(
            Vec3::new(p.x as f32, p.y as f32, p.z as f32),
            CORNER_TEXCOORDS[n & 3],
            Vec3::new(nx as f32, ny as f32, nz as f32),
        )
    });
    mesh.smooth_normals();
    mesh.debug_assert_invariants();
    mesh
}

fn subdivide(mesh: &Mesh<SurfaceVertex>) -> Mesh<SurfaceVertex> {
    catmull_clark(
        mesh,
        SurfaceVertex::blend,
        |v| v.position,
        |v, p| v.with_position(p),
    )
}
