//! Stochastic frontier growth of a solid inside a [`Cubitrix`].
//!
//! Growth starts from a single candidate cube. Each [`CubitGrowth::grow`]
//! step removes one candidate from the frontier uniformly at random and
//! either rejects it or occupies it and pushes its empty neighbours. A
//! candidate is rejected when occupying it would leave one of its corners
//! with a boundary-face valence outside `3..=5`, or (with
//! [`GrowthConfig::preserve_genus`]) when it would change the Euler
//! characteristic of the boundary surface.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::cubitrix::Cubitrix;
use crate::topology::{Cubit, Face};

/// Smallest and largest boundary-face valence allowed at a surface corner.
pub const MIN_VERTEX_VALENCE: usize = 3;
pub const MAX_VERTEX_VALENCE: usize = 5;

/// Growth parameters.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GrowthConfig {
    /// Seed for the default [`SmallRng`].
    pub seed: u64,
    /// The initial frontier candidate.
    pub origin: Cubit,
    /// Reject candidates that would change `V - E + F` of the boundary.
    pub preserve_genus: bool,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        GrowthConfig {
            seed: 101,
            origin: Cubit::new(127, 127, 127),
            preserve_genus: true,
        }
    }
}

/// Frontier-driven solid generator.
#[derive(Debug)]
pub struct CubitGrowth<R = SmallRng> {
    cubitrix: Cubitrix,
    frontier: Vec<Cubit>,
    rng: R,
    preserve_genus: bool,
    rejected: usize,
}

impl CubitGrowth<SmallRng> {
    /// Growth driven by a [`SmallRng`] seeded from `config.seed`.
    pub fn new(config: GrowthConfig) -> Self {
        Self::with_rng(config, SmallRng::seed_from_u64(config.seed))
    }
}

impl<R: Rng> CubitGrowth<R> {
    /// Growth driven by a caller-supplied generator; `config.seed` is unused.
    pub fn with_rng(config: GrowthConfig, rng: R) -> Self {
        CubitGrowth {
            cubitrix: Cubitrix::new(),
            frontier: vec![config.origin],
            rng,
            preserve_genus: config.preserve_genus,
            rejected: 0,
        }
    }

    /// Consumes one frontier candidate. Returns `false` only when the
    /// frontier is empty.
    ///
    /// A candidate is added unless it is already occupied or adding it
    /// would leave one of its corners with a boundary valence outside
    /// `3..=5` (zero is allowed). With `preserve_genus` set it is also
    /// rejected when it would change `V - E + F` of the boundary. Without
    /// that check tunnels can close around empty cubits: seeds grown to 800
    /// cubits end with an Euler characteristic well below 2. With it every
    /// step keeps the characteristic at 2.
    pub fn grow(&mut self) -> bool {
        if self.frontier.is_empty() {
            return false;
        }
        let pick = self.rng.gen_range(0..self.frontier.len());
        let candidate = self.frontier.swap_remove(pick);

        if self.cubitrix.get(candidate) {
            return true;
        }
        if let Some(reason) = self.rejection(candidate) {
            self.rejected += 1;
            log::trace!("growth: rejected {candidate}: {reason}");
            return true;
        }

        self.cubitrix.set(candidate, true);
        self.frontier.extend(
            candidate
                .neighbors()
                .into_iter()
                .filter(|&n| !self.cubitrix.get(n)),
        );
        true
    }

    /// Grows until at least `limit` cubits are occupied or the frontier is
    /// exhausted. Returns the occupied count.
    pub fn grow_until(&mut self, limit: usize) -> usize {
        while self.cubitrix.count() < limit {
            if !self.grow() {
                log::debug!(
                    "growth: frontier exhausted at {} cubits ({} rejected)",
                    self.cubitrix.count(),
                    self.rejected
                );
                return self.cubitrix.count();
            }
        }
        log::debug!(
            "growth: reached {} cubits, frontier {} ({} rejected)",
            self.cubitrix.count(),
            self.frontier.len(),
            self.rejected
        );
        self.cubitrix.count()
    }

    fn rejection(&self, candidate: Cubit) -> Option<&'static str> {
        let after = |c: Cubit| c == candidate || self.cubitrix.get(c);

        for vertex in candidate.vertices() {
            let valence = vertex
                .faces()
                .into_iter()
                .filter(|&f| is_boundary(f, after))
                .count();
            if valence > 0 && !(MIN_VERTEX_VALENCE..=MAX_VERTEX_VALENCE).contains(&valence) {
                return Some("corner valence");
            }
        }

        if self.preserve_genus && !self.cubitrix.is_empty() {
            let before = |c: Cubit| self.cubitrix.get(c);
            if local_euler(candidate, after) != local_euler(candidate, before) {
                return Some("boundary genus");
            }
        }
        None
    }
}

impl<R> CubitGrowth<R> {
    #[inline]
    pub fn cubitrix(&self) -> &Cubitrix {
        &self.cubitrix
    }

    pub fn into_cubitrix(self) -> Cubitrix {
        self.cubitrix
    }

    /// Candidates still waiting, duplicates included.
    #[inline]
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Candidates rejected so far.
    #[inline]
    pub fn rejected(&self) -> usize {
        self.rejected
    }
}

#[inline]
fn is_boundary(face: Face, occupied: impl Fn(Cubit) -> bool) -> bool {
    let [a, b] = face.cubes();
    occupied(a) != occupied(b)
}

/// `V - E + F` of the boundary restricted to the closure of `cubit`.
///
/// Every boundary element whose presence can change when `cubit` flips is a
/// face, edge or corner of `cubit`, so the difference of this quantity
/// before and after the flip is the change of the global Euler
/// characteristic.
fn local_euler(cubit: Cubit, occupied: impl Fn(Cubit) -> bool + Copy) -> i64 {
    let faces = cubit
        .faces()
        .into_iter()
        .filter(|&f| is_boundary(f, occupied))
        .count();
    let edges = cubit
        .edges()
        .into_iter()
        .filter(|e| e.faces().into_iter().any(|f| is_boundary(f, occupied)))
        .count();
    let vertices = cubit
        .vertices()
        .into_iter()
        .filter(|v| v.faces().into_iter().any(|f| is_boundary(f, occupied)))
        .count();
    vertices as i64 - edges as i64 + faces as i64
}
