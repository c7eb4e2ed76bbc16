use cubitrix::prelude::*;

fn world() -> CubitWorld {
    CubitWorld::generate(WorldConfig {
        cubit_limit: 200,
        max_level_of_detail: 3,
        ..WorldConfig::default()
    })
}

#[test]
fn every_level_is_a_closed_quad_surface() {
    let world = world();
    let base_faces = world.mesh(0).unwrap().face_count();
    for level in 0..=2 {
        let mesh = world.mesh(level).unwrap();
        mesh.validate_invariants().unwrap();
        assert_eq!(mesh.face_count(), base_faces << (2 * level));
        assert!(mesh.faces.iter().all(|f| f.len() == 4));
        assert!(mesh.vertices.iter().all(|v| v.position.is_finite()));
    }
}

#[test]
fn subdivision_pulls_the_surface_inside_the_blocks() {
    let world = world();
    let summary = world.summary();
    let lo = summary.min_cubit;
    let hi = summary.max_cubit;
    let fine = world.mesh(2).unwrap();
    for v in &fine.vertices {
        let p = v.position;
        assert!(p.x >= lo.x as f32 && p.x <= hi.x as f32 + 1.0);
        assert!(p.y >= lo.y as f32 && p.y <= hi.y as f32 + 1.0);
        assert!(p.z >= lo.z as f32 && p.z <= hi.z as f32 + 1.0);
    }
}

#[test]
fn out_of_range_level_reports_the_maximum() {
    let world = world();
    let err = world.mesh(4).unwrap_err();
    assert_eq!(
        err,
        CubitError::LevelOfDetailOutOfRange {
            requested: 4,
            max: 3
        }
    );
    assert_eq!(err.to_string(), "level of detail 4 exceeds the maximum of 3");
}

#[test]
fn origin_scale_frames_the_solid() {
    let world = world();
    let cx = world.cubitrix();
    let corners = cx.cubes().flat_map(|c| c.vertices());
    let (origin, scale) = compute_origin_scale(corners).unwrap();
    let summary = world.summary();
    let extent = summary.size();
    let longest = extent.x.max(extent.y).max(extent.z) as f32 + 1.0;
    assert!((scale * longest - 2.0).abs() < 1e-5);
    assert!(origin.x > summary.min_cubit.x as f32 && origin.x < summary.max_cubit.x as f32 + 1.0);
}
