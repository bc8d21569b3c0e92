// Host-side tests for lattice construction.

use glam::Vec3;
use plexus_core::*;

#[test]
fn default_lattice_has_four_hundred_points() {
    let lattice = Lattice::build(&SceneParams::default()).expect("default params are valid");
    assert_eq!(lattice.points().len(), 400);
    assert_eq!(lattice.point_vertices().len(), 400);
    assert_eq!(lattice.line_vertices().len(), lattice.segments().len() * 2);
    assert!(!lattice.segments().is_empty());
}

#[test]
fn points_remember_their_starting_height() {
    let lattice = Lattice::build(&SceneParams::default()).unwrap();
    for p in lattice.points() {
        assert_eq!(p.y, p.original_y);
        assert!(p.brightness >= POINT_BRIGHTNESS_MIN);
        assert!(p.brightness <= POINT_BRIGHTNESS_MIN + POINT_BRIGHTNESS_SPAN);
    }
}

#[test]
fn jitter_stays_within_half_width_of_grid_cell() {
    let params = SceneParams::default();
    let lattice = Lattice::build(&params).unwrap();
    // i = 0, j = 0, k = 0 sits at the grid corner
    let first = lattice.point_position(0);
    let corner_x = -(params.grid_x as f32 / 2.0) * params.spacing;
    assert!((first.x - corner_x).abs() <= params.jitter / 2.0);
}

#[test]
fn every_point_joins_its_orthogonal_neighbours() {
    let lattice = Lattice::build(&SceneParams::default()).unwrap();
    for (i, p) in lattice.points().iter().enumerate() {
        assert!(p.segments.len() >= 2, "point {i} has {} segments", p.segments.len());
    }
}

#[test]
fn layers_are_too_far_apart_to_connect() {
    let params = SceneParams::default();
    let lattice = Lattice::build(&params).unwrap();
    let min_layer_gap = params.spacing * params.depth_stretch - params.jitter;
    assert!(min_layer_gap > params.connect_distance());
    for s in lattice.segments() {
        let a = lattice.point_position(s.a as usize);
        let b = lattice.point_position(s.b as usize);
        assert!((a.z - b.z).abs() < params.jitter + f32::EPSILON * 100.0);
    }
}

#[test]
fn connection_threshold_is_strict() {
    let at_threshold = Lattice::from_positions(
        &[Vec3::ZERO, Vec3::new(150.0, 0.0, 0.0)],
        150.0,
        1,
    );
    assert!(at_threshold.segments().is_empty());

    let inside = Lattice::from_positions(
        &[Vec3::ZERO, Vec3::new(149.9, 0.0, 0.0)],
        150.0,
        1,
    );
    assert_eq!(inside.segments().len(), 1);
}

#[test]
fn segments_are_ordered_and_listed_on_both_endpoints() {
    let lattice = Lattice::build(&SceneParams::default()).unwrap();
    for (idx, s) in lattice.segments().iter().enumerate() {
        assert!(s.a < s.b);
        assert!(s.base_opacity >= SEGMENT_OPACITY_MIN);
        assert!(s.base_opacity <= SEGMENT_OPACITY_MIN + SEGMENT_OPACITY_SPAN);
        let idx = idx as u32;
        assert!(lattice.points()[s.a as usize].segments.contains(&idx));
        assert!(lattice.points()[s.b as usize].segments.contains(&idx));
    }
    let listed: usize = lattice.points().iter().map(|p| p.segments.len()).sum();
    assert_eq!(listed, lattice.segments().len() * 2);
}

#[test]
fn segment_vertices_start_at_their_points() {
    let lattice = Lattice::build(&SceneParams::default()).unwrap();
    for (idx, s) in lattice.segments().iter().enumerate() {
        let [a, b] = lattice.segment_endpoints(idx);
        assert_eq!(a, lattice.point_position(s.a as usize));
        assert_eq!(b, lattice.point_position(s.b as usize));
        assert_eq!(lattice.segment_opacity(idx), s.base_opacity);
    }
}

#[test]
fn same_seed_builds_same_lattice() {
    let a = Lattice::build(&SceneParams::default().with_seed(7)).unwrap();
    let b = Lattice::build(&SceneParams::default().with_seed(7)).unwrap();
    let c = Lattice::build(&SceneParams::default().with_seed(8)).unwrap();
    assert_eq!(a.point_vertices(), b.point_vertices());
    assert_eq!(a.line_vertices(), b.line_vertices());
    assert_ne!(a.point_vertices(), c.point_vertices());
}

#[test]
fn invalid_params_are_rejected() {
    let empty = SceneParams {
        grid_z: 0,
        ..SceneParams::default()
    };
    assert_eq!(
        Lattice::build(&empty).err(),
        Some(ConfigError::EmptyLattice { x: 10, y: 10, z: 0 })
    );

    let spacing = SceneParams {
        spacing: -1.0,
        ..SceneParams::default()
    };
    assert_eq!(spacing.validate(), Err(ConfigError::BadSpacing(-1.0)));

    let multiplier = SceneParams {
        connect_multiplier: f32::NAN,
        ..SceneParams::default()
    };
    assert!(matches!(
        multiplier.validate(),
        Err(ConfigError::BadConnectMultiplier(_))
    ));

    let jitter = SceneParams {
        jitter: -0.5,
        ..SceneParams::default()
    };
    assert_eq!(jitter.validate(), Err(ConfigError::BadJitter(-0.5)));
}

#[test]
fn zero_jitter_places_points_on_the_grid() {
    let params = SceneParams {
        grid_x: 2,
        grid_y: 2,
        grid_z: 1,
        jitter: 0.0,
        ..SceneParams::default()
    };
    let lattice = Lattice::build(&params).unwrap();
    assert_eq!(lattice.point_position(0), Vec3::new(-120.0, -120.0, 0.0));
    assert_eq!(lattice.point_position(3), Vec3::new(0.0, 0.0, 0.0));
    // four sides plus both diagonals (169.7 < 192)
    assert_eq!(lattice.segments().len(), 6);
}
