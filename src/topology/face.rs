//! Oriented unit faces of the lattice.
//!
//! A face is named by its *primary* cube, an axis and a reversed flag. The
//! non-reversed face of axis `A` at `p` is the low-`A` side of cube `p`: it
//! separates `p` from `p - e_A` and reports `p` first. Reversing a face keeps
//! the same geometric square but swaps which cube is reported first and
//! flips the winding of its corners.

use core::fmt;

use crate::topology::axis::Axis;
use crate::topology::cubit::Cubit;
use crate::topology::edge::Edge;
use crate::topology::vertex::Vertex;

/// A unit square between two face-adjacent cubes, with orientation.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Face {
    primary: Cubit,
    axis: Axis,
    reversed: bool,
}

impl Face {
    #[inline]
    pub const fn new(primary: Cubit, axis: Axis, reversed: bool) -> Self {
        Face {
            primary,
            axis,
            reversed,
        }
    }

    /// Low-x side of `cubit`, normal −x.
    #[inline]
    pub const fn x_left(cubit: Cubit) -> Self {
        Face::new(cubit, Axis::X, false)
    }

    /// The face shared by `cubit` and its −x neighbour, seen from the
    /// neighbour: normal +x.
    #[inline]
    pub const fn x_right(cubit: Cubit) -> Self {
        Face::new(cubit, Axis::X, true)
    }

    /// Low-y side of `cubit`, normal −y.
    #[inline]
    pub const fn y_bottom(cubit: Cubit) -> Self {
        Face::new(cubit, Axis::Y, false)
    }

    /// Reversed [`Face::y_bottom`], normal +y.
    #[inline]
    pub const fn y_top(cubit: Cubit) -> Self {
        Face::new(cubit, Axis::Y, true)
    }

    /// Low-z side of `cubit`, normal −z.
    #[inline]
    pub const fn z_back(cubit: Cubit) -> Self {
        Face::new(cubit, Axis::Z, false)
    }

    /// Reversed [`Face::z_back`], normal +z.
    #[inline]
    pub const fn z_front(cubit: Cubit) -> Self {
        Face::new(cubit, Axis::Z, true)
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

    /// Same square, opposite orientation. An involution.
    #[inline]
    pub const fn reversed(self) -> Self {
        Face::new(self.primary, self.axis, !self.reversed)
    }

    /// Reverses the face when `flag` is set.
    #[inline]
    pub const fn reversed_if(self, flag: bool) -> Self {
        if flag { self.reversed() } else { self }
    }

    /// Canonical, orientation-free representative of this square.
    #[inline]
    pub const fn non_oriented(self) -> Self {
        Face::new(self.primary, self.axis, false)
    }

    /// Outward unit normal as seen from the first reported cube.
    pub const fn normal(self) -> [i32; 3] {
        let [x, y, z] = self.axis.unit();
        if self.reversed { [x, y, z] } else { [-x, -y, -z] }
    }

    /// The two cubes sharing this face, first reported cube first.
    pub fn cubes(self) -> [Cubit; 2] {
        let [dx, dy, dz] = self.axis.unit();
        let lower = self.primary.offset(-dx, -dy, -dz);
        if self.reversed {
            [lower, self.primary]
        } else {
            [self.primary, lower]
        }
    }

    /// The four corners in winding order; reversing the face reverses them.
    pub fn vertices(self) -> [Vertex; 4] {
        let p = self.primary;
        let mut out = match self.axis {
            Axis::X => [p, p.offset(0, 0, 1), p.offset(0, 1, 1), p.offset(0, 1, 0)],
            Axis::Y => [p, p.offset(1, 0, 0), p.offset(1, 0, 1), p.offset(0, 0, 1)],
            Axis::Z => [p, p.offset(0, 1, 0), p.offset(1, 1, 0), p.offset(1, 0, 0)],
        }
        .map(Vertex);
        if self.reversed {
            out.reverse();
        }
        out
    }

    /// The four bounding edges, carrying this face's orientation.
    ///
    /// For a reversed face every edge is reversed and the sequence runs
    /// backwards, so `f.reversed().oriented_edges()` is the reverse of
    /// `f.oriented_edges()` with each edge reversed.
    pub fn oriented_edges(self) -> [Edge; 4] {
        self.edges_with(self.reversed)
    }

    /// The four bounding edges, all non-reversed, in canonical order.
    pub fn non_oriented_edges(self) -> [Edge; 4] {
        self.edges_with(false)
    }

    fn edges_with(self, reversed: bool) -> [Edge; 4] {
        let p = self.primary;
        let mut out = match self.axis {
            Axis::Y => [
                Edge::x(p),
                Edge::z(p),
                Edge::x(p.offset(0, 0, 1)),
                Edge::z(p.offset(1, 0, 0)),
            ],
            Axis::X => [
                Edge::y(p),
                Edge::z(p),
                Edge::y(p.offset(0, 0, 1)),
                Edge::z(p.offset(0, 1, 0)),
            ],
            Axis::Z => [
                Edge::x(p),
                Edge::y(p),
                Edge::x(p.offset(0, 1, 0)),
                Edge::y(p.offset(1, 0, 0)),
            ],
        }
        .map(|e| e.reversed_if(reversed));
        if reversed {
            out.reverse();
        }
        out
    }

    fn side_name(self) -> &'static str {
        match (self.axis, self.reversed) {
            (Axis::X, false) => "x-left",
            (Axis::X, true) => "x-right",
            (Axis::Y, false) => "y-bottom",
            (Axis::Y, true) => "y-top",
            (Axis::Z, false) => "z-back",
            (Axis::Z, true) => "z-front",
        }
    }
}

impl fmt::Debug for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Face({} {})", self.side_name(), self.primary)
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.side_name(), self.primary)
    }
}
