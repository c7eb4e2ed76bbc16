//! Lattice corners.

use core::fmt;

use crate::topology::cubit::Cubit;
use crate::topology::edge::Edge;
use crate::topology::face::Face;

/// A lattice corner, named by the cube whose lowest corner it is.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vertex(pub Cubit);

impl Vertex {
    #[inline]
    pub const fn position(self) -> Cubit {
        self.0
    }

    /// The eight cubes meeting at this corner.
    pub fn cubes(self) -> [Cubit; 8] {
        let p = self.0;
        [
            p,
            p.offset(-1, 0, 0),
            p.offset(0, -1, 0),
            p.offset(0, 0, -1),
            p.offset(-1, -1, 0),
            p.offset(-1, 0, -1),
            p.offset(0, -1, -1),
            p.offset(-1, -1, -1),
        ]
    }

    /// The twelve non-oriented faces touching this corner, four per axis.
    pub fn faces(self) -> [Face; 12] {
        let p = self.0;
        [
            Face::y_bottom(p),
            Face::y_bottom(p.offset(-1, 0, 0)),
            Face::y_bottom(p.offset(-1, 0, -1)),
            Face::y_bottom(p.offset(0, 0, -1)),
            Face::x_left(p),
            Face::x_left(p.offset(0, -1, 0)),
            Face::x_left(p.offset(0, -1, -1)),
            Face::x_left(p.offset(0, 0, -1)),
            Face::z_back(p),
            Face::z_back(p.offset(-1, 0, 0)),
            Face::z_back(p.offset(-1, -1, 0)),
            Face::z_back(p.offset(0, -1, 0)),
        ]
    }

    /// The six non-oriented edges ending at this corner.
    pub fn edges(self) -> [Edge; 6] {
        let p = self.0;
        [
            Edge::x(p),
            Edge::y(p),
            Edge::z(p),
            Edge::x(p.offset(-1, 0, 0)),
            Edge::y(p.offset(0, -1, 0)),
            Edge::z(p.offset(0, 0, -1)),
        ]
    }
}

impl From<Cubit> for Vertex {
    #[inline]
    fn from(c: Cubit) -> Self {
        Vertex(c)
    }
}

impl fmt::Debug for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vertex{}", self.0)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vertex {}", self.0)
    }
}
