//! # cubitrix
//!
//! cubitrix turns a sparse set of occupied unit cubes into progressively
//! refined polygon meshes. It provides a dense, lock-free occupancy index
//! over a fixed 256³ lattice, an oriented cube/face/edge/vertex topology
//! algebra, a stochastic generator that grows genus-0 solids, and
//! Catmull-Clark subdivision of the resulting boundary surface.
//!
//! ## Features
//! - [`Cubitrix`]: one bit per cubit in `AtomicU64` words; concurrent readers
//!   and writers on disjoint words never block
//! - [`topology`]: `Copy` value types with fixed-size adjacency queries in
//!   every direction, bidirectionally consistent
//! - [`CubitGrowth`]: frontier growth that keeps every surface corner at a
//!   boundary valence of 3 to 5 and the boundary Euler characteristic at 2
//! - [`geometry`]: an indexed polygon [`Mesh`] and [`catmull_clark`] over any
//!   vertex type through `blend`/`get_pos`/`set_pos` callbacks
//! - [`CubitWorld`]: a grown solid with memoized levels of detail
//!
//! ## Determinism
//!
//! All randomized decisions use `SmallRng` seeds drawn from configuration so
//! runs are reproducible. Unit tests fix seeds explicitly.
//!
//! ## Usage
//!
//! ```no_run
//! use cubitrix::prelude::*;
//!
//! let world = CubitWorld::generate(WorldConfig::default());
//! assert_eq!(world.summary().euler_characteristic(), 2);
//! let smooth = world.mesh(2)?;
//! println!("{} quads", smooth.face_count());
//! # Ok::<(), CubitError>(())
//! ```

pub mod cubit_error;
pub mod cubitrix;
pub mod debug_invariants;
pub mod geometry;
pub mod growth;
pub mod topology;
pub mod world;

pub use crate::cubitrix::{Cubitrix, Summary};
pub use cubit_error::CubitError;
pub use debug_invariants::DebugInvariants;
pub use geometry::{Mesh, SurfaceVertex, catmull_clark};
pub use growth::{CubitGrowth, GrowthConfig};
pub use world::{CubitWorld, WorldConfig};

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::cubit_error::CubitError;
    pub use crate::cubitrix::{Cubitrix, Summary};
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::geometry::mesh::{Polygon, compute_origin_scale};
    pub use crate::geometry::{Mesh, SurfaceVertex, catmull_clark};
    pub use crate::growth::{CubitGrowth, GrowthConfig};
    pub use crate::topology::{Axis, Cubit, Edge, Face, Vertex, min_max};
    pub use crate::world::{CubitWorld, WorldConfig};
}
