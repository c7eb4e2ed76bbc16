//! Catmull-Clark subdivision over arbitrary polygon meshes.
//!
//! The subdivider works on positions only. Vertices carry whatever else the
//! caller needs; three callbacks thread those attributes through:
//!
//! - `blend(&[T]) -> T` combines the attributes of several source vertices
//!   (the corners of a face, or the two ends of an edge);
//! - `get_pos(&T) -> Vec3` reads a position;
//! - `set_pos(&T, Vec3) -> T` returns a copy with a new position.
//!
//! Vertices that share a position but differ in other attributes (texture
//! seams, split normals) are treated as one point of the surface. Positions
//! are matched bitwise, with `-0.0` folded onto `0.0`.
//!
//! Each input face of arity `k` becomes `k` quads
//! `[vertex point, next edge point, face point, previous edge point]`, so
//! winding is preserved. Output vertices are merged by value.

use core::hash::Hash;

use glam::Vec3;
use hashbrown::HashMap;
use smallvec::{SmallVec, smallvec};

use crate::geometry::mesh::{Mesh, MeshBuilder, Polygon, cyclic_pairs};
use crate::geometry::position_key;

/// Distinct surface points of a mesh and the point of every vertex.
struct Positions {
    points: Vec<Vec3>,
    of_vertex: Vec<usize>,
}

impl Positions {
    fn new<T>(vertices: &[T], get_pos: impl Fn(&T) -> Vec3) -> Self {
        let mut index: HashMap<[u32; 3], usize> = HashMap::with_capacity(vertices.len());
        let mut points = Vec::new();
        let of_vertex = vertices
            .iter()
            .map(|v| {
                let p = get_pos(v) + Vec3::ZERO;
                *index.entry(position_key(p)).or_insert_with(|| {
                    points.push(p);
                    points.len() - 1
                })
            })
            .collect();
        Positions { points, of_vertex }
    }

    #[inline]
    fn of(&self, vertex: usize) -> usize {
        self.of_vertex[vertex]
    }

    #[inline]
    fn point(&self, vertex: usize) -> Vec3 {
        self.points[self.of_vertex[vertex]]
    }

    /// Undirected point pair of a mesh edge.
    #[inline]
    fn edge(&self, a: usize, b: usize) -> (usize, usize) {
        let (a, b) = (self.of(a), self.of(b));
        if a <= b { (a, b) } else { (b, a) }
    }
}

/// One level of Catmull-Clark subdivision.
///
/// The input is expected to be a consistently wound polygon mesh; malformed
/// input produces well-formed but geometrically meaningless output. Faces
/// with no corners are dropped.
pub fn catmull_clark<T, B, G, S>(mesh: &Mesh<T>, blend: B, get_pos: G, set_pos: S) -> Mesh<T>
where
    T: Clone + Eq + Hash,
    B: Fn(&[T]) -> T,
    G: Fn(&T) -> Vec3,
    S: Fn(&T, Vec3) -> T,
{
    let positions = Positions::new(&mesh.vertices, &get_pos);
    let point_count = positions.points.len();

    // Face points: centroid of the distinct points of each face.
    let face_points: Vec<Vec3> = mesh
        .faces
        .iter()
        .map(|face| {
            let mut distinct: SmallVec<[usize; 8]> = face.iter().map(|&v| positions.of(v)).collect();
            distinct.sort_unstable();
            distinct.dedup();
            if distinct.is_empty() {
                return Vec3::ZERO;
            }
            let sum = distinct
                .iter()
                .fold(Vec3::ZERO, |sum, &p| sum + positions.points[p]);
            sum / distinct.len() as f32
        })
        .collect();

    // Faces around every undirected edge, and per-point sums of incident
    // face points and edge endpoints.
    let mut faces_by_edge: HashMap<(usize, usize), SmallVec<[usize; 2]>> = HashMap::new();
    let mut face_sum = vec![(Vec3::ZERO, 0usize); point_count];
    let mut edge_sum = vec![(Vec3::ZERO, 0usize); point_count];
    for (f, face) in mesh.faces.iter().enumerate() {
        for &v in face.iter() {
            let entry = &mut face_sum[positions.of(v)];
            entry.0 += face_points[f];
            entry.1 += 1;
        }
        for (a, b) in cyclic_pairs(face) {
            let (pa, pb) = positions.edge(a, b);
            faces_by_edge.entry((pa, pb)).or_default().push(f);

            let ends = positions.points[pa] + positions.points[pb];
            edge_sum[pa].0 += ends;
            edge_sum[pa].1 += 2;
            if pa != pb {
                edge_sum[pb].0 += ends;
                edge_sum[pb].1 += 2;
            }
        }
    }

    // Vertex points: (F + 2R + (n - 3)P) / n.
    let vertex_points: Vec<Vec3> = (0..point_count)
        .map(|p| {
            let (f_sum, n) = face_sum[p];
            let (r_sum, r_count) = edge_sum[p];
            if n == 0 || r_count == 0 {
                return positions.points[p];
            }
            let n = n as f32;
            let f = f_sum / n;
            let r = r_sum / r_count as f32;
            (f + 2.0 * r + (n - 3.0) * positions.points[p]) / n
        })
        .collect();

    let edge_point = |a: usize, b: usize| -> T {
        let (fp_sum, fp_count) = faces_by_edge
            .get(&positions.edge(a, b))
            .map(|faces| {
                faces
                    .iter()
                    .fold((Vec3::ZERO, 0usize), |(s, c), &f| (s + face_points[f], c + 1))
            })
            .unwrap_or((Vec3::ZERO, 0));
        let p = (positions.point(a) + positions.point(b) + fp_sum) / (2 + fp_count) as f32;
        let ends = [mesh.vertices[a].clone(), mesh.vertices[b].clone()];
        set_pos(&blend(&ends[..]), p)
    };

    let arity_sum: usize = mesh.faces.iter().map(|f| f.len()).sum();
    let mut builder = MeshBuilder::with_capacity(5 * mesh.vertices.len(), arity_sum);
    for (f, face) in mesh.faces.iter().enumerate() {
        let k = face.len();
        if k == 0 {
            continue;
        }
        let corners: SmallVec<[T; 8]> = face.iter().map(|&v| mesh.vertices[v].clone()).collect();
        let center = builder.vertex(set_pos(&blend(&corners[..]), face_points[f]));

        for i in 0..k {
            let last = face[(i + k - 1) % k];
            let here = face[i];
            let next = face[(i + 1) % k];

            let here_point = set_pos(&mesh.vertices[here], vertex_points[positions.of(here)]);
            let here_index = builder.vertex(here_point);
            let next_index = builder.vertex(edge_point(here, next));
            let last_index = builder.vertex(edge_point(last, here));

            let quad: Polygon = smallvec![here_index, next_index, center, last_index];
            builder.push_polygon(quad);
        }
    }
    builder.finish()
}
