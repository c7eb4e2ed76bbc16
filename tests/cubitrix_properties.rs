use std::collections::HashSet;

use cubitrix::Cubitrix;
use cubitrix::topology::Cubit;
use proptest::prelude::*;

fn cubit() -> impl Strategy<Value = Cubit> {
    any::<(u8, u8, u8)>().prop_map(Cubit::from)
}

/// Cubits clustered in a small box so faces are shared often.
fn clustered() -> impl Strategy<Value = Cubit> {
    (100u8..106, 100u8..106, 100u8..106).prop_map(Cubit::from)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn set_matches_a_set_model(ops in prop::collection::vec((cubit(), any::<bool>()), 0..64)) {
        let cx = Cubitrix::new();
        let mut model = HashSet::new();
        for (c, value) in ops {
            let changed = cx.set(c, value);
            let model_changed = if value { model.insert(c) } else { model.remove(&c) };
            prop_assert_eq!(changed, model_changed);
        }
        prop_assert_eq!(cx.count(), model.len());
        let listed: HashSet<Cubit> = cx.cubes().collect();
        prop_assert_eq!(listed, model);
    }

    #[test]
    fn oriented_faces_start_at_the_occupied_cube(cubes in prop::collection::hash_set(clustered(), 1..40)) {
        let cx = Cubitrix::new();
        for &c in &cubes {
            cx.set(c, true);
        }
        for c in cx.cubes() {
            let faces = cx.oriented_faces(c);
            let open = c.neighbors().iter().filter(|&&n| !cx.get(n)).count();
            prop_assert_eq!(faces.len(), open);
            for f in faces {
                prop_assert_eq!(f.cubes()[0], c);
                prop_assert!(!cx.get(f.cubes()[1]));
                prop_assert!(cx.has_face(f));
            }
        }
    }

    #[test]
    fn summary_faces_count_open_sides(cubes in prop::collection::hash_set(clustered(), 1..40)) {
        let cx = Cubitrix::new();
        for &c in &cubes {
            cx.set(c, true);
        }
        let open: usize = cubes
            .iter()
            .map(|c| c.neighbors().iter().filter(|&&n| !cubes.contains(&n)).count())
            .sum();
        let summary = cx.summary();
        prop_assert_eq!(summary.cubit_count, cubes.len());
        prop_assert_eq!(summary.face_count, open);
        let size = summary.size();
        prop_assert!(size.x < 6 && size.y < 6 && size.z < 6);
    }
}
