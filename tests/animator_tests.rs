// Host-side tests for the per-frame lattice animation.

use plexus_core::*;

fn lattice() -> Lattice {
    Lattice::build(&SceneParams::default().with_seed(42)).unwrap()
}

#[test]
fn segment_endpoints_follow_points_every_tick() {
    let mut lattice = lattice();
    for tick in 0..240 {
        let time = animation_time(tick as f64 * 16.7);
        let scroll = (tick * 13 % 900) as f32;
        lattice.animate(time, scroll);
        for (idx, s) in lattice.segments().iter().enumerate() {
            let [a, b] = lattice.segment_endpoints(idx);
            assert_eq!(a, lattice.point_position(s.a as usize), "tick {tick} seg {idx}");
            assert_eq!(b, lattice.point_position(s.b as usize), "tick {tick} seg {idx}");
        }
        for (p, v) in lattice.points().iter().zip(lattice.point_vertices()) {
            assert_eq!(v.position, p.position().to_array());
        }
    }
}

#[test]
fn animation_only_moves_points_vertically() {
    let mut lattice = lattice();
    let before: Vec<_> = lattice.points().iter().map(|p| (p.x, p.z, p.original_y)).collect();
    lattice.animate(3.2, 450.0);
    for (p, (x, z, oy)) in lattice.points().iter().zip(before) {
        assert_eq!((p.x, p.z, p.original_y), (x, z, oy));
        let expected = point_height(oy, x, 3.2, 450.0);
        assert!((p.y - expected).abs() < 1e-4);
    }
}

#[test]
fn heights_stay_inside_wave_band() {
    let mut lattice = lattice();
    let scroll = 200.0;
    lattice.animate(1.7, scroll);
    for p in lattice.points() {
        let offset = p.y - p.original_y + scroll * SCROLL_SINK;
        assert!(offset.abs() <= WAVE_AMPLITUDE + 1e-3);
    }
}

#[test]
fn pulsed_opacity_stays_between_floor_and_base() {
    let mut lattice = lattice();
    let bases: Vec<f32> = lattice.segments().iter().map(|s| s.base_opacity).collect();
    for tick in 0..100 {
        lattice.animate(tick as f32 * 0.37, tick as f32 * 5.0);
        for (idx, base) in bases.iter().enumerate() {
            let alpha = lattice.segment_opacity(idx);
            assert!(alpha >= base * PULSE_FLOOR - 1e-6);
            assert!(alpha <= base + 1e-6);
            // both ends of a segment share one alpha
            assert_eq!(alpha, lattice.line_vertices()[idx * 2 + 1].alpha);
        }
    }
}

#[test]
fn pulse_speed_cycles_through_five_bands() {
    assert_eq!(pulse_speed(0), 0.5);
    assert!((pulse_speed(4) - 0.9).abs() < 1e-6);
    assert_eq!(pulse_speed(5), pulse_speed(0));
    assert_eq!(pulse_speed(13), pulse_speed(3));
}

#[test]
fn pulse_is_normalised() {
    for idx in 0..50 {
        for step in 0..50 {
            let p = pulse(step as f32 * 0.21, idx, step as f32 * 11.0);
            assert!((0.0..=1.0).contains(&p));
        }
    }
    assert_eq!(pulsed_opacity(0.2, 0.0), 0.2 * PULSE_FLOOR);
    assert!((pulsed_opacity(0.2, 1.0) - 0.2).abs() < 1e-6);
}

#[test]
fn animation_time_is_scaled_wall_time() {
    assert_eq!(animation_time(0.0), 0.0);
    assert!((animation_time(20_000.0) - 1.0).abs() < 1e-6);
}

#[test]
fn yaw_grows_with_time_and_scroll() {
    assert_eq!(lattice_yaw(0.0, 0.0), 0.0);
    assert!((lattice_yaw(2.0, 0.0) - 0.1).abs() < 1e-6);
    assert!((lattice_yaw(0.0, 1000.0) - 0.2).abs() < 1e-6);
}

#[test]
fn scrolling_sinks_the_lattice() {
    let p = point_height(0.0, 0.0, 0.0, 0.0);
    let sunk = point_height(0.0, 0.0, 0.0, 1000.0);
    // wave term stays bounded while the sink grows linearly
    assert!(sunk < p - 1000.0 * SCROLL_SINK + 2.0 * WAVE_AMPLITUDE + 1e-3);
}
