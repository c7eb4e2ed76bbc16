//! `Cubitrix`: a dense, lock-free occupancy bitmap over the 256³ lattice.
//!
//! One bit per cubit, packed 64 to an [`AtomicU64`] word:
//!
//! ```text
//! word = x << 10 | y << 2 | z >> 6      (2,097,152 words)
//! bit  = z & 63
//! ```
//!
//! Reads are a single atomic load. Writes are a single compare-and-swap
//! against the word that was just read; a writer that loses a race on the
//! same word drops its update instead of retrying and reports that through
//! the return value of [`Cubitrix::set`]. Writers touching different words
//! never interfere.
//!
//! On top of the bitmap sit the boundary queries: a face is on the boundary
//! when exactly one of its two cubes is occupied, and the oriented boundary
//! faces of the occupied cubes form a closed, consistently wound surface.

use core::fmt;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use hashbrown::HashSet;
use itertools::Itertools;
use smallvec::SmallVec;

use crate::topology::{Cubit, Edge, Face, Vertex, min_max};

/// Number of 64-bit words covering the lattice.
pub const TOTAL_WORDS: usize = 256 * 256 * 256 / 64;

#[inline]
fn locate(cubit: Cubit) -> (usize, u64) {
    let word = ((cubit.x as usize) << 10) | ((cubit.y as usize) << 2) | ((cubit.z as usize) >> 6);
    let bit = 1u64 << (cubit.z & 63);
    (word, bit)
}

/// Occupancy bitmap over every cubit of the lattice.
pub struct Cubitrix {
    words: Box<[AtomicU64]>,
    count: AtomicUsize,
}

impl Cubitrix {
    /// An empty volume.
    pub fn new() -> Self {
        let words = (0..TOTAL_WORDS).map(|_| AtomicU64::new(0)).collect();
        Cubitrix {
            words,
            count: AtomicUsize::new(0),
        }
    }

    /// Number of occupied cubits.
    #[inline]
    pub fn count(&self) -> usize {
        self.count.load(Ordering::Acquire)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Whether `cubit` is occupied.
    #[inline]
    pub fn get(&self, cubit: Cubit) -> bool {
        let (word, bit) = locate(cubit);
        self.words[word].load(Ordering::Acquire) & bit != 0
    }

    /// Alias of [`Cubitrix::get`].
    #[inline]
    pub fn has_cube(&self, cubit: Cubit) -> bool {
        self.get(cubit)
    }

    /// Sets the occupancy of `cubit`.
    ///
    /// Returns `true` when this call changed the bit. Returns `false` when the
    /// bit already held `value`, or when a concurrent writer changed the same
    /// word between our load and our compare-and-swap; in that case the
    /// update is dropped, not retried.
    pub fn set(&self, cubit: Cubit, value: bool) -> bool {
        let (index, bit) = locate(cubit);
        let word = &self.words[index];

        let current = word.load(Ordering::Acquire);
        if (current & bit != 0) == value {
            return false;
        }

        let next = if value { current | bit } else { current & !bit };
        match word.compare_exchange(current, next, Ordering::AcqRel, Ordering::Acquire) {
            Ok(_) => {
                if value {
                    self.count.fetch_add(1, Ordering::AcqRel);
                } else {
                    self.count.fetch_sub(1, Ordering::AcqRel);
                }
                true
            }
            Err(_) => {
                log::warn!("cubitrix: dropped update of {cubit} to {value} after losing a race");
                false
            }
        }
    }

    /// Empties the volume. Not atomic with respect to concurrent writers.
    pub fn clear(&self) {
        for word in self.words.iter() {
            word.store(0, Ordering::Release);
        }
        self.count.store(0, Ordering::Release);
    }

    /// Occupied cubits, scanning words from the highest index down and bits
    /// upwards within each word. The order is a function of storage layout
    /// only.
    pub fn cubes(&self) -> impl Iterator<Item = Cubit> + '_ {
        self.words.iter().enumerate().rev().flat_map(|(index, word)| SetBits {
            bits: word.load(Ordering::Acquire),
            base: (index as u32) << 6,
        })
    }

    /// Whether exactly one of the face's two cubes is occupied.
    pub fn has_face(&self, face: Face) -> bool {
        let [a, b] = face.cubes();
        self.get(a) != self.get(b)
    }

    /// Boundary faces among the six faces of `cubit`, non-oriented.
    pub fn faces(&self, cubit: Cubit) -> SmallVec<[Face; 6]> {
        cubit
            .faces()
            .into_iter()
            .filter(|&face| self.has_face(face))
            .collect()
    }

    /// Distinct non-oriented edges of the boundary faces of `cubit`.
    pub fn edges(&self, cubit: Cubit) -> SmallVec<[Edge; 12]> {
        self.faces(cubit)
            .into_iter()
            .flat_map(Face::non_oriented_edges)
            .unique()
            .collect()
    }

    /// Distinct corners of the boundary faces of `cubit`.
    pub fn vertices(&self, cubit: Cubit) -> SmallVec<[Vertex; 8]> {
        self.faces(cubit)
            .into_iter()
            .flat_map(Face::vertices)
            .unique()
            .collect()
    }

    /// Boundary faces of `cubit`, oriented so the occupied side comes first.
    ///
    /// Each of the six faces is kept when occupancy differs across it. For an
    /// occupied `cubit` the face is reported from `cubit`; for an empty one it
    /// is reversed so the occupied neighbour is reported first.
    pub fn oriented_faces(&self, cubit: Cubit) -> SmallVec<[Face; 6]> {
        let center = self.get(cubit);
        cubit
            .oriented_faces()
            .into_iter()
            .filter(|face| self.get(face.cubes()[1]) != center)
            .map(|face| face.reversed_if(!center))
            .collect()
    }

    /// Counts and bounds of the boundary surface.
    pub fn summary(&self) -> Summary {
        let cubits: Vec<Cubit> = self.cubes().collect();

        let faces: HashSet<Face> = cubits
            .iter()
            .flat_map(|&c| self.oriented_faces(c))
            .collect();
        let edges: HashSet<Edge> = faces
            .iter()
            .flat_map(|f| f.non_oriented_edges())
            .collect();
        let vertices: HashSet<Vertex> = faces.iter().flat_map(|f| f.vertices()).collect();

        let (min_cubit, max_cubit) = min_max(cubits.iter().copied());
        Summary {
            cubit_count: cubits.len(),
            face_count: faces.len(),
            edge_count: edges.len(),
            vertex_count: vertices.len(),
            min_cubit,
            max_cubit,
        }
    }
}

impl Default for Cubitrix {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Cubitrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cubitrix")
            .field("count", &self.count())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Cubitrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cubitrix:{}", self.count())
    }
}

/// Ascending set-bit positions of one word, mapped back to cubits.
struct SetBits {
    bits: u64,
    base: u32,
}

impl Iterator for SetBits {
    type Item = Cubit;

    #[inline]
    fn next(&mut self) -> Option<Cubit> {
        if self.bits == 0 {
            return None;
        }
        let offset = self.bits.trailing_zeros();
        self.bits &= self.bits - 1;
        Some(Cubit::from_code(self.base | offset))
    }
}

/// Counts and bounds of a volume's boundary surface.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub cubit_count: usize,
    /// Distinct oriented boundary faces.
    pub face_count: usize,
    /// Distinct geometric edges of the boundary faces.
    pub edge_count: usize,
    /// Distinct corners of the boundary faces.
    pub vertex_count: usize,
    /// Lowest occupied coordinate per axis; [`Cubit::MAX`] when empty.
    pub min_cubit: Cubit,
    /// Highest occupied coordinate per axis; [`Cubit::MIN`] when empty.
    pub max_cubit: Cubit,
}

impl Summary {
    /// `V - E + F`; 2 for the boundary of a single simply-connected solid.
    pub fn euler_characteristic(&self) -> i64 {
        self.vertex_count as i64 - self.edge_count as i64 + self.face_count as i64
    }

    /// Extent of the bounding box, wrapping per axis; [`Cubit::MIN`] when
    /// empty.
    pub fn size(&self) -> Cubit {
        if self.cubit_count == 0 {
            return Cubit::MIN;
        }
        self.max_cubit.wrapping_sub(self.min_cubit)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cubits={} faces={} edges={} vertices={} euler={} bounds={}..={}",
            self.cubit_count,
            self.face_count,
            self.edge_count,
            self.vertex_count,
            self.euler_characteristic(),
            self.min_cubit,
            self.max_cubit,
        )
    }
}
