use cubitrix::growth::{CubitGrowth, GrowthConfig};
use cubitrix::topology::Cubit;

#[test]
fn seed_101_grows_a_sphere_of_800() {
    let mut growth = CubitGrowth::new(GrowthConfig {
        seed: 101,
        ..GrowthConfig::default()
    });
    let count = growth.grow_until(800);
    assert!(count >= 800);

    let summary = growth.cubitrix().summary();
    assert_eq!(summary.cubit_count, count);
    assert_eq!(summary.euler_characteristic(), 2);
    assert!(summary.min_cubit.x <= 127 && summary.max_cubit.x >= 127);
}

#[test]
fn growth_is_deterministic_per_seed() {
    let grow = |seed| {
        let mut growth = CubitGrowth::new(GrowthConfig {
            seed,
            ..GrowthConfig::default()
        });
        growth.grow_until(150);
        growth.into_cubitrix().cubes().collect::<Vec<Cubit>>()
    };
    assert_eq!(grow(9), grow(9));
    assert_ne!(grow(9), grow(10));
}

#[test]
fn several_seeds_keep_genus_zero() {
    for seed in [1, 2, 3] {
        let mut growth = CubitGrowth::new(GrowthConfig {
            seed,
            ..GrowthConfig::default()
        });
        growth.grow_until(300);
        assert_eq!(
            growth.cubitrix().summary().euler_characteristic(),
            2,
            "seed {seed}"
        );
    }
}

#[test]
fn valence_only_growth_keeps_corners_manifold() {
    let mut growth = CubitGrowth::new(GrowthConfig {
        seed: 101,
        preserve_genus: false,
        ..GrowthConfig::default()
    });
    growth.grow_until(300);
    let cx = growth.cubitrix();
    for cube in cx.cubes() {
        for v in cube.vertices() {
            let n = v.faces().into_iter().filter(|&f| cx.has_face(f)).count();
            assert!(n == 0 || (3..=5).contains(&n), "{v}: {n}");
        }
    }
}

#[test]
fn growth_near_the_lattice_corner_wraps() {
    let mut growth = CubitGrowth::new(GrowthConfig {
        seed: 5,
        origin: Cubit::new(0, 0, 0),
        ..GrowthConfig::default()
    });
    growth.grow_until(60);
    let summary = growth.cubitrix().summary();
    assert_eq!(summary.euler_characteristic(), 2);
}
