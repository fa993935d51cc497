/// Keyboard/mouse driven movement for `FlyCamera`.
///
/// The controller works on an abstract `InputState`; translating window
/// events into it is left to the application.

use glam::Vec2;
use rustc_hash::FxHashSet;
use super::fly_camera::FlyCamera;

/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Walk forward
    KeyW,
    /// Strafe left
    KeyA,
    /// Walk backward
    KeyS,
    /// Strafe right
    KeyD,
    /// Lift down
    KeyQ,
    /// Lift up
    KeyE,
    /// Lift up (alternative)
    Space,
    /// Speed boost
    Shift,
}

/// Buttons held this frame plus the mouse motion accumulated since the last frame.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: FxHashSet<Button>,
    mouse_delta: Vec2,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, button: Button) {
        self.held.insert(button);
    }

    pub fn release(&mut self, button: Button) {
        self.held.remove(&button);
    }

    pub fn is_down(&self, button: Button) -> bool {
        self.held.contains(&button)
    }

    /// Accumulate mouse motion in pixels (y grows downward).
    pub fn add_mouse_delta(&mut self, delta: Vec2) {
        self.mouse_delta += delta;
    }

    pub fn mouse_delta(&self) -> Vec2 {
        self.mouse_delta
    }

    /// Clear per-frame state (mouse delta). Held buttons persist.
    pub fn end_frame(&mut self) {
        self.mouse_delta = Vec2::ZERO;
    }

    /// +1 if only `positive` is held, -1 if only `negative`, 0 otherwise
    fn axis(&self, positive: Button, negative: Button) -> f32 {
        (self.is_down(positive) as i32 - self.is_down(negative) as i32) as f32
    }
}

/// Movement tuning for a `FlyCamera`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlyCameraController {
    /// World units per second
    pub move_speed: f32,
    /// Multiplier applied while Shift is held
    pub boost_factor: f32,
    /// Radians per pixel of mouse motion
    pub mouse_sensitivity: f32,
    pub invert_y: bool,
}

impl Default for FlyCameraController {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            boost_factor: 3.0,
            mouse_sensitivity: 0.002,
            invert_y: false,
        }
    }
}

impl FlyCameraController {
    /// Apply one frame of input to the camera.
    ///
    /// Opposite keys cancel each other. Negative `dt` is treated as zero.
    pub fn apply(&self, camera: &mut FlyCamera, input: &InputState, dt: f32) {
        let dt = dt.max(0.0);
        let mut speed = self.move_speed * dt;
        if input.is_down(Button::Shift) {
            speed *= self.boost_factor;
        }

        let lift_up = input.is_down(Button::KeyE) || input.is_down(Button::Space);
        let lift = (lift_up as i32 - input.is_down(Button::KeyQ) as i32) as f32;

        camera.walk(input.axis(Button::KeyW, Button::KeyS) * speed);
        camera.strafe(input.axis(Button::KeyD, Button::KeyA) * speed);
        camera.lift(lift * speed);

        let delta = input.mouse_delta();
        if delta != Vec2::ZERO {
            // Screen y grows downward: moving the mouse up looks up
            let dy = if self.invert_y { delta.y } else { -delta.y };
            camera.update_direction(delta.x * self.mouse_sensitivity, dy * self.mouse_sensitivity);
        }
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
