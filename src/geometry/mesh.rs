//! Indexed polygon mesh.
//!
//! A [`Mesh`] is a vertex list plus a list of polygons, each an ordered
//! sequence of indices into the vertex list. Polygons wind consistently so
//! that shared edges are traversed in opposite directions by their two
//! faces.

use core::hash::Hash;

use glam::Vec3;
use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::cubit_error::CubitError;
use crate::debug_invariants::DebugInvariants;
use crate::geometry::vertex::SurfaceVertex;
use crate::geometry::{fast_unit, position_key};
use crate::topology::{Face, Vertex, min_max};

/// Vertex indices of one polygon. Quads stay inline.
pub type Polygon = SmallVec<[usize; 4]>;

#[derive(Clone, Debug, PartialEq)]
pub struct Mesh<T> {
    pub vertices: Vec<T>,
    pub faces: Vec<Polygon>,
}

impl<T> Default for Mesh<T> {
    fn default() -> Self {
        Mesh::new(Vec::new(), Vec::new())
    }
}

impl<T> Mesh<T> {
    pub fn new(vertices: Vec<T>, faces: Vec<Polygon>) -> Self {
        Mesh { vertices, faces }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Directed edges `(here, next)` of every polygon, wrapping at the end.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.faces.iter().flat_map(|face| cyclic_pairs(face))
    }

    /// Fan triangulation of every polygon; polygons with fewer than three
    /// corners yield nothing.
    pub fn triangles(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        self.faces.iter().flat_map(|face| {
            (1..face.len().saturating_sub(1)).map(move |i| [face[0], face[i], face[i + 1]])
        })
    }
}

impl<T: Clone + Eq + Hash> Mesh<T> {
    /// Builds a mesh from polygons given as vertex values, merging equal
    /// vertices into one index.
    pub fn from_faces<I, F>(faces: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: IntoIterator<Item = T>,
    {
        let mut builder = MeshBuilder::default();
        for face in faces {
            builder.push_face(face);
        }
        builder.finish()
    }

    /// Builds a mesh from lattice faces. `vertex(face, corner, n)` produces
    /// the mesh vertex for the `n`-th corner of `face`.
    pub fn from_oriented_faces<I, F>(faces: I, mut vertex: F) -> Self
    where
        I: IntoIterator<Item = Face>,
        F: FnMut(Face, Vertex, usize) -> T,
    {
        let mut builder = MeshBuilder::default();
        for face in faces {
            let corners = face.vertices();
            let values: SmallVec<[T; 4]> = corners
                .iter()
                .enumerate()
                .map(|(n, &corner)| vertex(face, corner, n))
                .collect();
            builder.push_face(values);
        }
        builder.finish()
    }
}

impl Mesh<SurfaceVertex> {
    /// Replaces every normal by the normalized average of the normals of all
    /// vertices sharing its position.
    pub fn smooth_normals(&mut self) {
        let mut by_position: HashMap<[u32; 3], (Vec3, usize)> = HashMap::new();
        for v in &self.vertices {
            let entry = by_position
                .entry(position_key(v.position))
                .or_insert((Vec3::ZERO, 0));
            entry.0 += v.normal;
            entry.1 += 1;
        }
        for v in &mut self.vertices {
            if let Some(&(sum, count)) = by_position.get(&position_key(v.position)) {
                v.normal = fast_unit(sum / count as f32);
            }
        }
    }
}

/// Centre of the bounding box of `vertices` and the factor mapping its
/// longest side to length 2. `None` when `vertices` is empty.
pub fn compute_origin_scale<I>(vertices: I) -> Option<(Vec3, f32)>
where
    I: IntoIterator<Item = Vertex>,
{
    let mut vertices = vertices.into_iter().map(Vertex::position).peekable();
    vertices.peek()?;
    let (lo, hi) = min_max(vertices);
    let lo = Vec3::new(lo.x as f32, lo.y as f32, lo.z as f32);
    let hi = Vec3::new(hi.x as f32, hi.y as f32, hi.z as f32);
    Some(((lo + hi) * 0.5, 2.0 / (hi - lo).max_element()))
}

#[inline]
pub(crate) fn cyclic_pairs(face: &[usize]) -> impl Iterator<Item = (usize, usize)> + '_ {
    let k = face.len();
    (0..k).map(move |i| (face[i], face[(i + 1) % k]))
}

/// Appends polygons while deduplicating vertices by value.
pub(crate) struct MeshBuilder<T> {
    index: HashMap<T, usize>,
    mesh: Mesh<T>,
}

impl<T> Default for MeshBuilder<T> {
    fn default() -> Self {
        MeshBuilder {
            index: HashMap::new(),
            mesh: Mesh::default(),
        }
    }
}

impl<T: Clone + Eq + Hash> MeshBuilder<T> {
    pub(crate) fn with_capacity(vertices: usize, faces: usize) -> Self {
        MeshBuilder {
            index: HashMap::with_capacity(vertices),
            mesh: Mesh::new(Vec::with_capacity(vertices), Vec::with_capacity(faces)),
        }
    }

    /// Index of `vertex`, appending it on first sight.
    pub(crate) fn vertex(&mut self, vertex: T) -> usize {
        if let Some(&index) = self.index.get(&vertex) {
            return index;
        }
        let index = self.mesh.vertices.len();
        self.mesh.vertices.push(vertex.clone());
        self.index.insert(vertex, index);
        index
    }

    pub(crate) fn push_face(&mut self, face: impl IntoIterator<Item = T>) {
        let polygon: Polygon = face.into_iter().map(|v| self.vertex(v)).collect();
        self.mesh.faces.push(polygon);
    }

    pub(crate) fn push_polygon(&mut self, polygon: Polygon) {
        self.mesh.faces.push(polygon);
    }

    pub(crate) fn finish(self) -> Mesh<T> {
        self.mesh
    }
}

impl<T> DebugInvariants for Mesh<T> {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "Mesh");
    }

    fn validate_invariants(&self) -> Result<(), CubitError> {
        let vertex_count = self.vertices.len();
        for (face, polygon) in self.faces.iter().enumerate() {
            if polygon.is_empty() {
                return Err(CubitError::EmptyFace { face });
            }
            if let Some(&index) = polygon.iter().find(|&&i| i >= vertex_count) {
                return Err(CubitError::VertexIndexOutOfRange {
                    face,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::Cubit;
    use glam::Vec2;
    use smallvec::smallvec;

    fn unit_cube() -> Mesh<Vertex> {
        Mesh::from_oriented_faces(Cubit::new(0, 0, 0).oriented_faces(), |_, v, _| v)
    }

    #[test]
    fn from_faces_merges_equal_vertices() {
        let mesh = Mesh::from_faces([vec!['a', 'b', 'c'], vec!['c', 'b', 'd']]);
        assert_eq!(mesh.vertices, vec!['a', 'b', 'c', 'd']);
        let want: Vec<Polygon> = vec![smallvec![0, 1, 2], smallvec![2, 1, 3]];
        assert_eq!(mesh.faces, want);
    }

    #[test]
    fn oriented_cube_faces_share_corners() {
        let mesh = unit_cube();
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.face_count(), 6);
        assert!(mesh.validate_invariants().is_ok());
    }

    #[test]
    fn closed_surface_edges_pair_up() {
        let mesh = unit_cube();
        let edges: Vec<(usize, usize)> = mesh.edges().collect();
        assert_eq!(edges.len(), 24);
        for &(a, b) in &edges {
            assert!(edges.contains(&(b, a)), "edge {a}->{b} has no twin");
        }
    }

    /// Vertex type with no `Default` impl.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    struct Label(&'static str);

    #[test]
    fn builds_meshes_of_vertices_without_default() {
        let empty: Mesh<Label> = Mesh::default();
        assert!(empty.is_empty());
        assert_eq!(empty.vertex_count(), 0);

        let mesh = Mesh::from_faces([[Label("a"), Label("b"), Label("c")]]);
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.faces, vec![Polygon::from_slice(&[0, 1, 2])]);
    }

    #[test]
    fn fan_triangulation() {
        let mesh: Mesh<u8> = Mesh::new(
            vec![0, 1, 2, 3, 4],
            vec![smallvec![0, 1, 2, 3, 4], smallvec![0, 1]],
        );
        let tris: Vec<[usize; 3]> = mesh.triangles().collect();
        assert_eq!(tris, vec![[0, 1, 2], [0, 2, 3], [0, 3, 4]]);
    }

    #[test]
    fn invariants_reject_bad_polygons() {
        let empty: Mesh<u8> = Mesh::new(vec![0], vec![smallvec![]]);
        assert_eq!(empty.validate_invariants(), Err(CubitError::EmptyFace { face: 0 }));

        let dangling: Mesh<u8> = Mesh::new(vec![0, 1], vec![smallvec![0, 1], smallvec![1, 5]]);
        assert_eq!(
            dangling.validate_invariants(),
            Err(CubitError::VertexIndexOutOfRange {
                face: 1,
                index: 5,
                vertex_count: 2
            })
        );
    }

    #[test]
    fn smooth_normals_average_by_position() {
        let p = Vec3::new(1.0, 1.0, 1.0);
        let mut mesh = Mesh::new(
            vec![
                SurfaceVertex::new(p, Vec2::ZERO, Vec3::X),
                SurfaceVertex::new(p, Vec2::ONE, Vec3::Y),
                SurfaceVertex::new(Vec3::ZERO, Vec2::ZERO, Vec3::Z),
            ],
            vec![smallvec![0, 1, 2]],
        );
        mesh.smooth_normals();
        let diagonal = Vec3::new(1.0, 1.0, 0.0).normalize();
        assert!((mesh.vertices[0].normal - diagonal).length() < 1e-6);
        assert_eq!(mesh.vertices[0].normal, mesh.vertices[1].normal);
        assert_eq!(mesh.vertices[2].normal, Vec3::Z);
    }

    #[test]
    fn origin_scale_fits_longest_side() {
        let corners = [Cubit::new(2, 4, 6), Cubit::new(6, 5, 7)].map(Vertex);
        let (origin, scale) = compute_origin_scale(corners).unwrap();
        assert_eq!(origin, Vec3::new(4.0, 4.5, 6.5));
        assert_eq!(scale, 0.5);
        assert_eq!(compute_origin_scale(std::iter::empty::<Vertex>()), None);
    }
}
