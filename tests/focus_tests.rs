// Host-side tests for the focus/close state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod scene_core;

use glam::Vec3;
use scene_core::*;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);
const EPS: f32 = 1e-5;

fn camera() -> Camera {
    Camera::look_at(Vec3::new(0.0, 1.6, 3.0), Vec3::new(0.0, 0.4, 0.0), 16.0 / 9.0)
}

fn scene_with_rings() -> (Scene, [RingId; 3]) {
    let mut scene = Scene::new().with_camera(camera());
    let a = scene.add_ring(Transform::from_position(Vec3::new(-0.5, 0.0, 0.0)), RingConfig::default());
    let b = scene.add_ring(Transform::from_position(Vec3::ZERO), RingConfig::default());
    let c = scene.add_ring(
        Transform::new(
            Vec3::new(0.5, 0.3, 0.0),
            Vec3::splat(0.8),
            Vec3::new(std::f32::consts::FRAC_PI_2, 0.2, -0.1),
        ),
        RingConfig::default(),
    );
    (scene, [a, b, c])
}

fn run_for(scene: &mut Scene, total: Duration, events: &mut Vec<SceneEvent>) {
    let mut remaining = total;
    while !remaining.is_zero() {
        let step = remaining.min(FRAME);
        scene.tick(step, events);
        remaining -= step;
    }
}

fn assert_vec3_close(a: Vec3, b: Vec3, what: &str) {
    assert!(
        (a - b).abs().max_element() < EPS,
        "{what}: expected {b:?}, got {a:?}"
    );
}

fn assert_at_baseline(ring: &Ring) {
    let t = ring.transform();
    let base = ring.baseline();
    assert_vec3_close(t.position, base.position, "position");
    assert_vec3_close(t.scale, base.scale, "scale");
    assert_vec3_close(t.rotation, base.rotation, "rotation");
}

fn active_rings(scene: &Scene) -> usize {
    scene
        .rings()
        .iter()
        .filter(|r| r.focus_phase() != FocusPhase::Idle)
        .count()
}

#[test]
fn focus_reaches_clamped_camera_point_and_scale() {
    let (mut scene, [_, b, _]) = scene_with_rings();
    let mut events = Vec::new();

    assert_eq!(scene.click(b), Ok(true));
    assert!(scene.is_busy());
    assert_eq!(scene.focused(), Some(b));

    run_for(&mut scene, Duration::from_millis(600), &mut events);

    let ring = scene.ring(b).unwrap();
    // Camera-forward point is at y≈1.006, below baseline + 1.2, so Y is floored.
    let fwd = Vec3::new(0.0, -1.2, -3.0).normalize();
    let expected = Vec3::new(0.0, 1.2, 3.0 + fwd.z * 1.6);
    assert_vec3_close(ring.transform().position, expected, "focus position");
    assert_vec3_close(ring.transform().scale, Vec3::splat(1.45), "focus scale");
    assert_eq!(ring.focus_phase(), FocusPhase::Focused);
    assert!(!scene.is_busy());
    assert_eq!(scene.focused(), Some(b));
    assert_eq!(events, vec![SceneEvent::ShowCloseControl { ring: b }]);
}

#[test]
fn focus_point_not_clamped_when_camera_point_is_high_enough() {
    let cam = Camera::look_at(Vec3::new(0.0, 4.0, 3.0), Vec3::new(0.0, 3.0, 0.0), 1.0);
    let p = cam.focus_point(1.6, 1.2);
    let expected = cam.eye + cam.forward() * 1.6;
    assert_vec3_close(p, expected, "unclamped focus point");
    assert!(p.y > 1.2);
}

#[test]
fn focus_progress_follows_ease_out_cubic() {
    let (mut scene, [_, b, _]) = scene_with_rings();
    let mut events = Vec::new();
    let target = camera().focus_point(1.6, 1.2);

    scene.click(b).unwrap();
    run_for(&mut scene, Duration::from_millis(300), &mut events);

    let ring = scene.ring(b).unwrap();
    assert_eq!(ring.focus_phase(), FocusPhase::AnimatingIn);
    assert!(scene.is_busy());
    // e(0.5) = 1 - 0.5^3 = 0.875
    let expected = Vec3::ZERO.lerp(target, 0.875);
    assert!((ring.transform().position - expected).abs().max_element() < 1e-4);
    assert!((ring.transform().scale.x - (1.0 + 0.45 * 0.875)).abs() < 1e-4);
    assert!(events.is_empty());
}

#[test]
fn focus_leaves_rotation_alone() {
    let (mut scene, [_, _, c]) = scene_with_rings();
    let mut events = Vec::new();
    let before = scene.ring(c).unwrap().transform().rotation;

    scene.click(c).unwrap();
    run_for(&mut scene, Duration::from_millis(600), &mut events);

    let ring = scene.ring(c).unwrap();
    assert_vec3_close(ring.transform().rotation, before, "rotation");
    // Scale is relative to the ring's own baseline.
    assert_vec3_close(ring.transform().scale, Vec3::splat(0.8 * 1.45), "scale");
    // Floor is relative to the ring's own baseline height.
    assert!((ring.transform().position.y - 1.5).abs() < EPS);
}

#[test]
fn focus_then_close_returns_exactly_to_baseline() {
    let (mut scene, ids) = scene_with_rings();
    for id in ids {
        let mut events = Vec::new();
        assert_eq!(scene.click(id), Ok(true));
        run_for(&mut scene, Duration::from_millis(600), &mut events);

        // Spin it while focused; close must undo this too.
        assert!(scene.pointer_down(id, 10.0));
        assert!(scene.pointer_move(90.0));
        scene.pointer_up();

        assert!(scene.request_close());
        assert!(scene.is_busy());
        run_for(&mut scene, Duration::from_millis(600), &mut events);

        let ring = scene.ring(id).unwrap();
        assert_at_baseline(ring);
        assert_eq!(ring.focus_phase(), FocusPhase::Idle);
        assert!(!scene.is_busy());
        assert_eq!(scene.focused(), None);
        assert_eq!(
            events,
            vec![
                SceneEvent::ShowCloseControl { ring: id },
                SceneEvent::HideCloseControl { ring: id },
            ]
        );
    }
}

#[test]
fn close_progress_follows_ease_in_out_cubic() {
    let (mut scene, [_, b, _]) = scene_with_rings();
    let mut events = Vec::new();
    scene.click(b).unwrap();
    run_for(&mut scene, Duration::from_millis(600), &mut events);
    let focused_pos = scene.ring(b).unwrap().transform().position;

    scene.request_close();
    run_for(&mut scene, Duration::from_millis(300), &mut events);

    // e(0.5) = 0.5: halfway back
    let expected = focused_pos.lerp(Vec3::ZERO, 0.5);
    let ring = scene.ring(b).unwrap();
    assert!((ring.transform().position - expected).abs().max_element() < 1e-4);
    assert_eq!(ring.focus_phase(), FocusPhase::AnimatingOut);
}

#[test]
fn click_while_busy_is_ignored() {
    let (mut scene, [a, b, _]) = scene_with_rings();
    let mut events = Vec::new();
    scene.click(a).unwrap();
    run_for(&mut scene, Duration::from_millis(100), &mut events);

    let before = *scene.ring(b).unwrap().transform();
    assert_eq!(scene.click(b), Ok(false));
    assert_eq!(scene.ring(b).unwrap().focus_phase(), FocusPhase::Idle);
    assert_eq!(*scene.ring(b).unwrap().transform(), before);
    assert_eq!(scene.focused(), Some(a));

    run_for(&mut scene, Duration::from_millis(100), &mut events);
    assert_eq!(*scene.ring(b).unwrap().transform(), before);
}

#[test]
fn click_on_busy_session_does_not_start_animation() {
    let session = Session::shared();
    session.borrow_mut().set_busy(true);
    let mut ring = Ring::new(
        RingId(7),
        Transform::default(),
        RingConfig::default(),
        session.clone(),
    );

    assert_eq!(ring.click(Some(&camera())), Ok(false));
    assert_eq!(ring.focus_phase(), FocusPhase::Idle);
    assert_eq!(session.borrow().focused(), None);

    let mut events = Vec::new();
    ring.tick(Duration::from_millis(600), &mut events);
    assert_eq!(*ring.transform(), Transform::default());
    assert!(events.is_empty());
    assert!(session.borrow().is_busy());
}

#[test]
fn click_while_another_ring_is_focused_is_ignored() {
    let (mut scene, [a, b, _]) = scene_with_rings();
    let mut events = Vec::new();
    scene.click(a).unwrap();
    run_for(&mut scene, Duration::from_millis(600), &mut events);
    assert!(!scene.is_busy());

    assert_eq!(scene.click(b), Ok(false));
    assert_eq!(scene.focused(), Some(a));
    assert_eq!(active_rings(&scene), 1);
}

#[test]
fn clicking_the_focused_ring_again_is_ignored() {
    let (mut scene, [a, _, _]) = scene_with_rings();
    let mut events = Vec::new();
    scene.click(a).unwrap();
    assert_eq!(scene.click(a), Ok(false));
    run_for(&mut scene, Duration::from_millis(600), &mut events);
    assert_eq!(scene.click(a), Ok(false));
    assert_eq!(events.len(), 1);
}

#[test]
fn close_is_ignored_without_focus_or_while_busy() {
    let (mut scene, [a, _, _]) = scene_with_rings();
    let mut events = Vec::new();
    assert!(!scene.request_close());

    scene.click(a).unwrap();
    run_for(&mut scene, Duration::from_millis(200), &mut events);
    assert!(!scene.request_close());
    assert_eq!(scene.ring(a).unwrap().focus_phase(), FocusPhase::AnimatingIn);

    run_for(&mut scene, Duration::from_millis(400), &mut events);
    assert!(scene.request_close());
    run_for(&mut scene, Duration::from_millis(100), &mut events);
    assert!(!scene.request_close());
}

#[test]
fn at_most_one_ring_is_active_at_any_time() {
    let (mut scene, ids) = scene_with_rings();
    let mut events = Vec::new();
    // Hammer clicks and closes across every ring while time advances.
    for step in 0..400usize {
        let id = ids[step % ids.len()];
        match step % 5 {
            0 | 2 => {
                let _ = scene.click(id);
            }
            3 => {
                scene.request_close();
            }
            _ => {}
        }
        scene.tick(Duration::from_millis(37), &mut events);
        assert!(active_rings(&scene) <= 1, "step {step}: more than one ring active");
        if let Some(f) = scene.focused() {
            let ring = scene.ring(f).unwrap();
            assert_ne!(ring.focus_phase(), FocusPhase::Idle);
        }
    }
    assert!(events.iter().any(|e| matches!(e, SceneEvent::HideCloseControl { .. })));
}

#[test]
fn missing_camera_fails_fast_without_state_change() {
    let (mut scene, [a, _, _]) = scene_with_rings();
    scene.set_camera(None);

    assert_eq!(scene.click(a), Err(FocusError::MissingCamera(a)));
    assert!(!scene.is_busy());
    assert_eq!(scene.focused(), None);
    assert_eq!(scene.ring(a).unwrap().focus_phase(), FocusPhase::Idle);

    scene.set_camera(Some(camera()));
    assert_eq!(scene.click(a), Ok(true));
}

#[test]
fn removing_an_animating_ring_releases_the_session() {
    let (mut scene, [a, b, _]) = scene_with_rings();
    let mut events = Vec::new();
    scene.click(a).unwrap();
    run_for(&mut scene, Duration::from_millis(100), &mut events);

    assert!(scene.remove_ring(a));
    assert!(!scene.is_busy());
    assert_eq!(scene.focused(), None);
    assert!(scene.ring(a).is_none());
    assert!(!scene.remove_ring(a));

    assert_eq!(scene.click(b), Ok(true));
}

#[test]
fn removing_a_focused_ring_clears_focus() {
    let (mut scene, [a, _, c]) = scene_with_rings();
    let mut events = Vec::new();
    scene.click(a).unwrap();
    run_for(&mut scene, Duration::from_millis(600), &mut events);

    scene.remove_ring(a);
    assert_eq!(scene.focused(), None);
    assert_eq!(scene.rings().len(), 2);
    assert_eq!(scene.click(c), Ok(true));
}

#[test]
fn removing_an_idle_ring_keeps_another_rings_claim() {
    let (mut scene, [a, b, _]) = scene_with_rings();
    scene.click(a).unwrap();
    scene.remove_ring(b);
    assert!(scene.is_busy());
    assert_eq!(scene.focused(), Some(a));
}

#[test]
fn zero_duration_animation_completes_on_first_tick() {
    let mut config = RingConfig::default();
    config.focus.focus_duration = Duration::ZERO;
    config.focus.close_duration = Duration::ZERO;
    let mut scene = Scene::new().with_camera(camera());
    let id = scene.add_ring(Transform::default(), config);
    let mut events = Vec::new();

    scene.click(id).unwrap();
    scene.tick(Duration::ZERO, &mut events);
    assert_eq!(scene.ring(id).unwrap().focus_phase(), FocusPhase::Focused);

    scene.request_close();
    scene.tick(Duration::ZERO, &mut events);
    assert_at_baseline(scene.ring(id).unwrap());
    assert_eq!(events.len(), 2);
}

#[test]
fn unknown_ring_click_is_ignored() {
    let (mut scene, _) = scene_with_rings();
    assert_eq!(scene.click(RingId(99)), Ok(false));
    assert!(!scene.is_busy());
}

#[test]
fn dropping_a_ring_while_session_is_borrowed_leaves_claim_in_place() {
    let session = Session::shared();
    let mut ring = Ring::new(
        RingId(3),
        Transform::default(),
        RingConfig::default(),
        session.clone(),
    );
    assert_eq!(ring.click(Some(&camera())), Ok(true));

    // Drop must not panic on the borrow; the claim it could not release
    // stays visible instead.
    {
        let held = session.borrow();
        drop(ring);
        assert!(held.is_busy());
    }
    assert!(session.borrow().is_busy());
    assert_eq!(session.borrow().focused(), Some(RingId(3)));
}

#[test]
fn dropping_an_animating_ring_releases_its_own_session() {
    let session = Session::shared();
    let mut ring = Ring::new(
        RingId(4),
        Transform::default(),
        RingConfig::default(),
        session.clone(),
    );
    ring.click(Some(&camera())).unwrap();
    drop(ring);
    assert!(!session.borrow().is_busy());
    assert_eq!(session.borrow().focused(), None);
}
