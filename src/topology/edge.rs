//! Unit edges of the lattice.
//!
//! An edge of axis `A` at primary `p` runs from `p` to `p + e_A`. The
//! reversed edge covers the same segment from the other end; its cube and
//! face rings are reported in the opposite order.

use core::fmt;

use crate::topology::axis::Axis;
use crate::topology::cubit::Cubit;
use crate::topology::face::Face;
use crate::topology::vertex::Vertex;

/// A unit lattice segment with a direction.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    primary: Cubit,
    axis: Axis,
    reversed: bool,
}

impl Edge {
    #[inline]
    pub const fn new(primary: Cubit, axis: Axis, reversed: bool) -> Self {
        Edge {
            primary,
            axis,
            reversed,
        }
    }

    #[inline]
    pub const fn x(cubit: Cubit) -> Self {
        Edge::new(cubit, Axis::X, false)
    }

    #[inline]
    pub const fn y(cubit: Cubit) -> Self {
        Edge::new(cubit, Axis::Y, false)
    }

    #[inline]
    pub const fn z(cubit: Cubit) -> Self {
        Edge::new(cubit, Axis::Z, false)
    }

    #[inline]
    pub const fn primary(self) -> Cubit {
        self.primary
    }

    #[inline]
    pub const fn axis(self) -> Axis {
        self.axis
    }

    #[inline]
    pub const fn is_reversed(self) -> bool {
        self.reversed
    }

    #[inline]
    pub const fn reversed(self) -> Self {
        Edge::new(self.primary, self.axis, !self.reversed)
    }

    #[inline]
    pub const fn reversed_if(self, flag: bool) -> Self {
        if flag { self.reversed() } else { self }
    }

    #[inline]
    pub const fn non_oriented(self) -> Self {
        Edge::new(self.primary, self.axis, false)
    }

    /// The four cubes sharing this edge.
    pub fn cubes(self) -> [Cubit; 4] {
        let p = self.primary;
        let mut out = match self.axis {
            Axis::X => [p, p.offset(0, -1, 0), p.offset(0, 0, -1), p.offset(0, -1, -1)],
            Axis::Y => [p, p.offset(-1, 0, 0), p.offset(0, 0, -1), p.offset(-1, 0, -1)],
            Axis::Z => [p, p.offset(-1, 0, 0), p.offset(0, -1, 0), p.offset(-1, -1, 0)],
        };
        if self.reversed {
            out.reverse();
        }
        out
    }

    /// The four faces sharing this edge, carrying this edge's orientation.
    pub fn faces(self) -> [Face; 4] {
        let p = self.primary;
        let mut out = match self.axis {
            Axis::X => [
                Face::y_bottom(p),
                Face::z_back(p),
                Face::y_bottom(p.offset(0, 0, -1)),
                Face::z_back(p.offset(0, -1, 0)),
            ],
            Axis::Y => [
                Face::x_left(p),
                Face::z_back(p),
                Face::x_left(p.offset(0, 0, -1)),
                Face::z_back(p.offset(-1, 0, 0)),
            ],
            Axis::Z => [
                Face::x_left(p),
                Face::y_bottom(p),
                Face::x_left(p.offset(0, -1, 0)),
                Face::y_bottom(p.offset(-1, 0, 0)),
            ],
        }
        .map(|f| f.reversed_if(self.reversed));
        if self.reversed {
            out.reverse();
        }
        out
    }

    /// Start and end corner.
    pub fn vertices(self) -> [Vertex; 2] {
        let [dx, dy, dz] = self.axis.unit();
        let start = Vertex(self.primary);
        let end = Vertex(self.primary.offset(dx, dy, dz));
        if self.reversed { [end, start] } else { [start, end] }
    }
}

impl fmt::Debug for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edge({self})")
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.reversed { '-' } else { '+' };
        write!(f, "{sign}{} {}", self.axis, self.primary)
    }
}
