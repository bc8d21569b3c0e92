// Host-side tests for the camera rig and the backdrop context.

use glam::{Vec3, Vec4};
use plexus_core::*;

fn close(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-3
}

#[test]
fn pointer_is_measured_from_viewport_centre() {
    assert_eq!(pointer_to_mouse(500.0, 400.0, 500.0, 400.0), [0.0, 0.0]);
    let [mx, my] = pointer_to_mouse(600.0, 300.0, 500.0, 400.0);
    assert!((mx - 30.0).abs() < 1e-4 && (my + 30.0).abs() < 1e-4);
}

#[test]
fn camera_starts_at_rest_position() {
    let cam = CameraRig::new(16.0 / 9.0);
    assert_eq!(cam.position, Vec3::new(0.0, 100.0, 600.0));
    assert!((cam.fovy_radians - 75f32.to_radians()).abs() < 1e-6);
}

#[test]
fn camera_converges_on_fixed_target() {
    let mut cam = CameraRig::new(1.0);
    let mouse = [100.0, -50.0];
    let scroll = 300.0;
    let target = CameraRig::target(mouse, scroll);
    assert!(close(target, Vec3::new(30.0, 15.0 + 100.0 - 90.0, 600.0)));

    let mut last_gap = (target - cam.position).length();
    for _ in 0..1000 {
        cam.step(mouse, scroll);
        let gap = (target - cam.position).length();
        assert!(gap <= last_gap);
        last_gap = gap;
    }
    assert!(last_gap < 1e-3, "gap after 1000 ticks: {last_gap}");
    assert_eq!(cam.position.z, 600.0);
}

#[test]
fn one_step_closes_two_percent_of_the_gap() {
    let mut cam = CameraRig::new(1.0);
    cam.step([100.0, 0.0], 0.0);
    // target x = 30, so the first step moves 0.6
    assert!((cam.position.x - 0.6).abs() < 1e-5);
    assert_eq!(cam.position.y, 100.0);
}

#[test]
fn camera_looks_down_as_page_scrolls() {
    assert_eq!(CameraRig::look_at_point(0.0), Vec3::ZERO);
    assert!(close(
        CameraRig::look_at_point(1000.0),
        Vec3::new(0.0, -300.0, 0.0)
    ));
}

#[test]
fn resize_updates_aspect_and_ignores_empty_sizes() {
    let mut cam = CameraRig::new(1.0);
    cam.set_aspect(1920.0, 1080.0);
    assert!((cam.aspect - 1920.0 / 1080.0).abs() < 1e-6);
    cam.set_aspect(0.0, 1080.0);
    assert!((cam.aspect - 1920.0 / 1080.0).abs() < 1e-6);
}

#[test]
fn origin_projects_inside_clip_space() {
    let cam = CameraRig::new(1.5);
    let clip = cam.view_projection(0.0) * Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!(clip.w > 0.0);
    let ndc = clip / clip.w;
    assert!(ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0);
    assert!((0.0..=1.0).contains(&ndc.z));
}

#[test]
fn backdrop_rejects_empty_viewport() {
    let err = Backdrop::new(&SceneParams::default(), 0.0, 600.0).err();
    assert_eq!(
        err,
        Some(ConfigError::EmptyViewport {
            width: 0.0,
            height: 600.0
        })
    );
}

#[test]
fn backdrop_applies_latest_input_on_frame() {
    let mut backdrop = Backdrop::new(&SceneParams::default(), 1000.0, 800.0).unwrap();
    backdrop.handle(InputEvent::PointerMoved {
        client_x: 0.0,
        client_y: 0.0,
    });
    backdrop.handle(InputEvent::PointerMoved {
        client_x: 600.0,
        client_y: 400.0,
    });
    backdrop.handle(InputEvent::Scrolled { offset_y: 250.0 });
    let [mx, my] = backdrop.mouse();
    assert!((mx - 30.0).abs() < 1e-4 && my.abs() < 1e-6);
    assert_eq!(backdrop.scroll(), 250.0);

    backdrop.frame(40_000.0);
    assert!((backdrop.time() - 2.0).abs() < 1e-6);
    let cam = backdrop.camera().position;
    assert!(cam.x > 0.0);
    assert!(cam.y < 100.0);
}

#[test]
fn backdrop_resize_recentres_pointer() {
    let mut backdrop = Backdrop::new(&SceneParams::default(), 1000.0, 800.0).unwrap();
    backdrop.handle(InputEvent::Resized {
        width: 400.0,
        height: 200.0,
    });
    assert!((backdrop.camera().aspect - 2.0).abs() < 1e-6);
    backdrop.handle(InputEvent::PointerMoved {
        client_x: 200.0,
        client_y: 100.0,
    });
    assert_eq!(backdrop.mouse(), [0.0, 0.0]);
}

#[test]
fn uniforms_carry_fog_colour_and_yaw() {
    let mut backdrop = Backdrop::new(&SceneParams::default(), 1000.0, 800.0).unwrap();
    backdrop.frame(20_000.0);
    let u = backdrop.uniforms([2000.0, 1600.0]);
    assert_eq!(u.viewport, [2000.0, 1600.0]);
    assert_eq!(u.point_size, POINT_SIZE);
    assert_eq!(u.fog[3], FOG_DENSITY);
    let yaw = lattice_yaw(backdrop.time(), 0.0);
    assert!((u.model[0][0] - yaw.cos()).abs() < 1e-6);
}

#[test]
fn fog_thickens_with_depth() {
    assert_eq!(fog_factor(0.0, FOG_DENSITY), 0.0);
    let near = fog_factor(500.0, FOG_DENSITY);
    let far = fog_factor(2500.0, FOG_DENSITY);
    assert!(near < far && far <= 1.0);
}
