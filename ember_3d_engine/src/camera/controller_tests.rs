use glam::{Vec2, Vec3};
use crate::camera::{FlyCamera, FlyCameraDesc};
use super::*;

fn camera() -> FlyCamera {
    FlyCamera::new(FlyCameraDesc::default()).unwrap()
}

fn controller() -> FlyCameraController {
    FlyCameraController { move_speed: 2.0, boost_factor: 4.0, mouse_sensitivity: 0.01, invert_y: false }
}

#[test]
fn test_input_state_press_release() {
    let mut input = InputState::new();
    input.press(Button::KeyW);
    input.press(Button::KeyW);
    assert!(input.is_down(Button::KeyW));
    assert!(!input.is_down(Button::KeyS));

    input.release(Button::KeyW);
    assert!(!input.is_down(Button::KeyW));
}

#[test]
fn test_mouse_delta_accumulates_until_end_frame() {
    let mut input = InputState::new();
    input.add_mouse_delta(Vec2::new(3.0, 1.0));
    input.add_mouse_delta(Vec2::new(2.0, -4.0));
    assert_eq!(input.mouse_delta(), Vec2::new(5.0, -3.0));

    input.press(Button::KeyA);
    input.end_frame();
    assert_eq!(input.mouse_delta(), Vec2::ZERO);
    assert!(input.is_down(Button::KeyA));
}

#[test]
fn test_walk_forward() {
    let mut cam = camera();
    let mut input = InputState::new();
    input.press(Button::KeyW);

    controller().apply(&mut cam, &input, 0.5);
    assert!((cam.position() - Vec3::new(0.0, 0.0, 4.0)).length() < 1e-5);
}

#[test]
fn test_opposite_keys_cancel() {
    let mut cam = camera();
    let mut input = InputState::new();
    input.press(Button::KeyW);
    input.press(Button::KeyS);
    input.press(Button::KeyA);
    input.press(Button::KeyD);
    input.press(Button::KeyE);
    input.press(Button::KeyQ);

    controller().apply(&mut cam, &input, 1.0);
    assert_eq!(cam.position(), Vec3::new(0.0, 0.0, 5.0));
}

#[test]
fn test_strafe_lift_and_boost() {
    let mut cam = camera();
    let mut input = InputState::new();
    input.press(Button::KeyD);
    input.press(Button::Space);
    input.press(Button::Shift);

    controller().apply(&mut cam, &input, 0.25);
    // 2.0 * 0.25 * 4.0 = 2.0 along right and up
    assert!((cam.position() - Vec3::new(2.0, 2.0, 5.0)).length() < 1e-5);
}

#[test]
fn test_mouse_look() {
    let mut cam = camera();
    let mut input = InputState::new();
    input.add_mouse_delta(Vec2::new(10.0, -5.0));

    controller().apply(&mut cam, &input, 0.016);
    assert!((cam.yaw() - 0.1).abs() < 1e-5);
    // Mouse moved up: look up
    assert!((cam.pitch() - 0.05).abs() < 1e-5);

    let inverted = FlyCameraController { invert_y: true, ..controller() };
    let mut cam = camera();
    inverted.apply(&mut cam, &input, 0.016);
    assert!((cam.pitch() + 0.05).abs() < 1e-5);
}

#[test]
fn test_negative_dt_does_not_move() {
    let mut cam = camera();
    let mut input = InputState::new();
    input.press(Button::KeyW);

    controller().apply(&mut cam, &input, -1.0);
    assert_eq!(cam.position(), Vec3::new(0.0, 0.0, 5.0));
}
