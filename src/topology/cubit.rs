//! `Cubit`: a unit cell of the fixed 256³ lattice.
//!
//! Every cube, face, edge and vertex in this crate is named by a `Cubit`
//! plus a small tag. Coordinates are bytes and all neighbour arithmetic wraps
//! modulo 256, so stepping past the lattice edge lands on the opposite side
//! rather than failing.

use core::fmt;

use crate::cubit_error::CubitError;
use crate::topology::edge::Edge;
use crate::topology::face::Face;
use crate::topology::vertex::Vertex;

/// A unit lattice cell identified by three byte coordinates.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Cubit {
    pub x: u8,
    pub y: u8,
    pub z: u8,
}

impl Cubit {
    /// The lowest corner of the lattice.
    pub const MIN: Cubit = Cubit::new(0, 0, 0);
    /// The highest corner of the lattice.
    pub const MAX: Cubit = Cubit::new(255, 255, 255);

    /// Largest valid packed code (`0xFF_FFFF`).
    pub const MAX_CODE: u32 = (1 << 24) - 1;

    #[inline]
    pub const fn new(x: u8, y: u8, z: u8) -> Self {
        Cubit { x, y, z }
    }

    /// Packs the coordinates as `x << 16 | y << 8 | z`.
    #[inline]
    pub const fn code(self) -> u32 {
        ((self.x as u32) << 16) | ((self.y as u32) << 8) | self.z as u32
    }

    /// Inverse of [`Cubit::code`]. Bits above 24 are ignored.
    #[inline]
    pub const fn from_code(code: u32) -> Self {
        Cubit::new((code >> 16) as u8, (code >> 8) as u8, code as u8)
    }

    /// Checked inverse of [`Cubit::code`].
    pub fn try_from_code(code: u32) -> Result<Self, CubitError> {
        if code > Self::MAX_CODE {
            return Err(CubitError::InvalidCubitCode(code));
        }
        Ok(Self::from_code(code))
    }

    /// Offsets every coordinate, wrapping modulo 256.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Cubit::new(
            (self.x as i32 + dx) as u8,
            (self.y as i32 + dy) as u8,
            (self.z as i32 + dz) as u8,
        )
    }

    /// The six face-adjacent cubes: −x, +x, −y, +y, −z, +z.
    pub fn neighbors(self) -> [Cubit; 6] {
        [
            self.offset(-1, 0, 0),
            self.offset(1, 0, 0),
            self.offset(0, -1, 0),
            self.offset(0, 1, 0),
            self.offset(0, 0, -1),
            self.offset(0, 0, 1),
        ]
    }

    /// The six faces of this cube, non-oriented.
    ///
    /// The three far faces are named by the neighbouring cube, so their first
    /// reported cube is the neighbour, not `self`.
    pub fn faces(self) -> [Face; 6] {
        self.faces_with(false)
    }

    /// The six faces of this cube, each oriented so `self` is reported first.
    pub fn oriented_faces(self) -> [Face; 6] {
        self.faces_with(true)
    }

    fn faces_with(self, oriented: bool) -> [Face; 6] {
        [
            Face::y_bottom(self),
            Face::x_left(self),
            Face::z_back(self),
            Face::y_bottom(self.offset(0, 1, 0)).reversed_if(oriented),
            Face::x_left(self.offset(1, 0, 0)).reversed_if(oriented),
            Face::z_back(self.offset(0, 0, 1)).reversed_if(oriented),
        ]
    }

    /// The eight corners of this cube.
    pub fn vertices(self) -> [Vertex; 8] {
        [
            Vertex(self),
            Vertex(self.offset(1, 1, 1)),
            Vertex(self.offset(1, 0, 0)),
            Vertex(self.offset(1, 1, 0)),
            Vertex(self.offset(0, 1, 0)),
            Vertex(self.offset(1, 0, 1)),
            Vertex(self.offset(0, 0, 1)),
            Vertex(self.offset(0, 1, 1)),
        ]
    }

    /// The twelve edges of this cube, four per axis.
    pub fn edges(self) -> [Edge; 12] {
        [
            Edge::x(self),
            Edge::x(self.offset(0, 1, 0)),
            Edge::x(self.offset(0, 1, 1)),
            Edge::x(self.offset(0, 0, 1)),
            Edge::y(self),
            Edge::y(self.offset(0, 0, 1)),
            Edge::y(self.offset(1, 0, 1)),
            Edge::y(self.offset(1, 0, 0)),
            Edge::z(self),
            Edge::z(self.offset(1, 0, 0)),
            Edge::z(self.offset(1, 1, 0)),
            Edge::z(self.offset(0, 1, 0)),
        ]
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Cubit) -> Cubit {
        Cubit::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Cubit) -> Cubit {
        Cubit::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }

    /// Component-wise wrapping difference `self - other`.
    #[inline]
    pub fn wrapping_sub(self, other: Cubit) -> Cubit {
        Cubit::new(
            self.x.wrapping_sub(other.x),
            self.y.wrapping_sub(other.y),
            self.z.wrapping_sub(other.z),
        )
    }
}

impl From<(u8, u8, u8)> for Cubit {
    #[inline]
    fn from((x, y, z): (u8, u8, u8)) -> Self {
        Cubit::new(x, y, z)
    }
}

impl From<Cubit> for (u8, u8, u8) {
    #[inline]
    fn from(c: Cubit) -> Self {
        (c.x, c.y, c.z)
    }
}

impl fmt::Debug for Cubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cubit")
            .field(&self.x)
            .field(&self.y)
            .field(&self.z)
            .finish()
    }
}

impl fmt::Display for Cubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Component-wise bounds of a set of cubits, `(MAX, MIN)` when empty.
pub fn min_max<I>(cubits: I) -> (Cubit, Cubit)
where
    I: IntoIterator<Item = Cubit>,
{
    cubits
        .into_iter()
        .fold((Cubit::MAX, Cubit::MIN), |(lo, hi), c| (lo.min(c), hi.max(c)))
}

#[cfg(test)]
mod layout_tests {
    use super::*;
    use static_assertions::assert_eq_size;

    assert_eq_size!(Cubit, [u8; 3]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_roundtrip() {
        let c = Cubit::new(1, 2, 3);
        assert_eq!(c.code(), 0x01_02_03);
        assert_eq!(Cubit::from_code(c.code()), c);
        assert_eq!(Cubit::try_from_code(0xFF_FFFF).unwrap(), Cubit::MAX);
    }

    #[test]
    fn try_from_code_rejects_wide_codes() {
        assert_eq!(
            Cubit::try_from_code(1 << 24),
            Err(CubitError::InvalidCubitCode(1 << 24))
        );
    }

    #[test]
    fn offset_wraps_at_lattice_edges() {
        assert_eq!(Cubit::MAX.offset(1, 1, 1), Cubit::MIN);
        assert_eq!(Cubit::MIN.offset(-1, 0, 0), Cubit::new(255, 0, 0));
    }

    #[test]
    fn neighbors_are_axis_steps() {
        let c = Cubit::new(10, 20, 30);
        assert_eq!(
            c.neighbors(),
            [
                Cubit::new(9, 20, 30),
                Cubit::new(11, 20, 30),
                Cubit::new(10, 19, 30),
                Cubit::new(10, 21, 30),
                Cubit::new(10, 20, 29),
                Cubit::new(10, 20, 31),
            ]
        );
    }

    #[test]
    fn cardinalities() {
        let c = Cubit::new(5, 6, 7);
        let faces: std::collections::HashSet<_> = c.faces().into_iter().collect();
        let edges: std::collections::HashSet<_> = c.edges().into_iter().collect();
        let verts: std::collections::HashSet<_> = c.vertices().into_iter().collect();
        assert_eq!((faces.len(), edges.len(), verts.len()), (6, 12, 8));
    }

    #[test]
    fn min_max_bounds() {
        let (lo, hi) = min_max([Cubit::new(3, 9, 1), Cubit::new(7, 2, 5)]);
        assert_eq!(lo, Cubit::new(3, 2, 1));
        assert_eq!(hi, Cubit::new(7, 9, 5));
        assert_eq!(hi.wrapping_sub(lo), Cubit::new(4, 7, 4));
        assert_eq!(min_max(std::iter::empty::<Cubit>()), (Cubit::MAX, Cubit::MIN));
    }

    #[test]
    fn debug_and_display() {
        let c = Cubit::new(1, 2, 3);
        assert_eq!(format!("{c:?}"), "Cubit(1, 2, 3)");
        assert_eq!(format!("{c}"), "(1, 2, 3)");
    }
}
