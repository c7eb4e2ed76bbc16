use std::collections::HashSet;

use proptest::prelude::*;

use crate::topology::{Cubit, Edge, Face, Vertex};

fn face() -> impl Strategy<Value = Face> {
    (any::<(u8, u8, u8)>(), 0usize..6)
        .prop_map(|(c, n)| Cubit::from(c).oriented_faces()[n])
}

proptest! {
    #[test]
    fn reversal_is_an_involution(f in face()) {
        prop_assert_eq!(f.reversed().reversed(), f);
    }

    #[test]
    fn reversed_face_vertices_are_reversed(f in face()) {
        let mut want = f.vertices();
        want.reverse();
        prop_assert_eq!(f.reversed().vertices(), want);
    }

    #[test]
    fn reversed_face_edges_are_reversed_and_flipped(f in face()) {
        let mut want = f.oriented_edges().map(Edge::reversed);
        want.reverse();
        prop_assert_eq!(f.reversed().oriented_edges(), want);
    }

    #[test]
    fn reversed_edge_starts_follow_reversed_face(f in face()) {
        let mut want: Vec<Vertex> = f
            .reversed()
            .oriented_edges()
            .iter()
            .map(|e| e.reversed().vertices()[0])
            .collect();
        want.reverse();
        let got: Vec<Vertex> = f.oriented_edges().iter().map(|e| e.vertices()[0]).collect();
        prop_assert_eq!(got, want);
    }

    #[test]
    fn non_oriented_edges_ignore_orientation(f in face()) {
        prop_assert_eq!(f.non_oriented().oriented_edges(), f.non_oriented_edges());
        prop_assert_eq!(f.reversed().non_oriented_edges(), f.non_oriented_edges());
    }

    #[test]
    fn shared_face_seen_from_both_cubes(c in any::<(u8, u8, u8)>()) {
        let c = Cubit::from(c);
        for f in c.oriented_faces() {
            let other = f.cubes()[1];
            let back = other.oriented_faces();
            prop_assert!(back.contains(&f.reversed()), "{other} missing {}", f.reversed());
            let merged: HashSet<Face> = [f.non_oriented(), f.reversed().non_oriented()]
                .into_iter()
                .collect();
            prop_assert_eq!(merged.len(), 1);
        }
    }
}

#[test]
fn oriented_edges_chain_around_each_face() {
    let cube = Cubit::new(0, 0, 0);
    for face in cube.faces() {
        let edges = face.oriented_edges();
        for i in 0..edges.len() {
            let a: HashSet<_> = edges[i].vertices().into_iter().collect();
            let b: HashSet<_> = edges[(i + 1) % edges.len()].vertices().into_iter().collect();
            assert_eq!(a.intersection(&b).count(), 1, "{face}: edges {i} and next");
        }

        let vertices = face.vertices();
        for i in 0..vertices.len() {
            let pair: HashSet<_> = [vertices[i], vertices[(i + 1) % vertices.len()]]
                .into_iter()
                .collect();
            let covering = edges
                .iter()
                .filter(|e| e.vertices().iter().all(|v| pair.contains(v)))
                .count();
            assert_eq!(covering, 1, "{face}: side {i}");
        }
    }
}
