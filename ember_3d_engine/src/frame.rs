/// Frame timing helpers for a single-threaded loop.
///
/// `FrameClock` turns wall-clock instants into clamped frame deltas;
/// `FixedStep` slices those deltas into fixed simulation steps.
///
/// ```no_run
/// # use std::time::Instant;
/// # use ember_3d_engine::frame::{FrameClock, FixedStep};
/// # fn main() -> ember_3d_engine::ember3d::Result<()> {
/// let mut clock = FrameClock::new(0.25)?;
/// let mut physics = FixedStep::new(60.0, 5)?;
/// loop {
///     let dt = clock.tick(Instant::now());
///     for step in physics.tick(dt) {
///         // scene.update(step);
/// #       let _ = step;
///     }
/// #   break;
/// }
/// # Ok(())
/// # }
/// ```

use std::time::Instant;
use crate::engine_bail;
use crate::error::Result;

/// Default upper bound for one frame delta (seconds)
pub const DEFAULT_MAX_DELTA: f32 = 0.25;

/// Measures time between frames.
#[derive(Debug, Clone)]
pub struct FrameClock {
    max_delta: f32,
    last: Option<Instant>,
    delta: f32,
    elapsed: f64,
    frame_count: u64,
}

impl FrameClock {
    /// Create a clock whose deltas never exceed `max_delta` seconds.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `max_delta` is not a positive finite number.
    pub fn new(max_delta: f32) -> Result<Self> {
        if !(max_delta > 0.0) || !max_delta.is_finite() {
            engine_bail!("ember3d::FrameClock", "max_delta must be > 0, got {}", max_delta);
        }
        Ok(Self {
            max_delta,
            last: None,
            delta: 0.0,
            elapsed: 0.0,
            frame_count: 0,
        })
    }

    /// Start a new frame at `now` and return its delta in seconds.
    ///
    /// The first tick returns 0. Long stalls (debugger, window drag) are
    /// clamped to `max_delta`; an instant earlier than the previous one
    /// counts as 0.
    pub fn tick(&mut self, now: Instant) -> f32 {
        let raw = match self.last {
            Some(last) => now.saturating_duration_since(last).as_secs_f32(),
            None => 0.0,
        };
        self.last = Some(now);
        self.delta = raw.min(self.max_delta);
        self.elapsed += self.delta as f64;
        self.frame_count += 1;
        self.delta
    }

    /// Delta returned by the last `tick`
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Sum of all clamped deltas
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn max_delta(&self) -> f32 {
        self.max_delta
    }

    /// Forget the previous instant; the next tick returns 0.
    pub fn reset(&mut self) {
        self.last = None;
        self.delta = 0.0;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self {
            max_delta: DEFAULT_MAX_DELTA,
            last: None,
            delta: 0.0,
            elapsed: 0.0,
            frame_count: 0,
        }
    }
}

/// Accumulator yielding fixed timesteps for deterministic updates.
#[derive(Debug, Clone)]
pub struct FixedStep {
    timestep: f32,
    accumulator: f32,
    max_steps: u32,
}

impl FixedStep {
    /// Steps of `1 / hz` seconds, at most `max_steps` per tick.
    pub fn new(hz: f32, max_steps: u32) -> Result<Self> {
        if !(hz > 0.0) || !hz.is_finite() {
            engine_bail!("ember3d::FixedStep", "rate must be > 0 Hz, got {}", hz);
        }
        if max_steps == 0 {
            engine_bail!("ember3d::FixedStep", "max_steps must be >= 1");
        }
        Ok(Self {
            timestep: 1.0 / hz,
            accumulator: 0.0,
            max_steps,
        })
    }

    pub fn timestep(&self) -> f32 {
        self.timestep
    }

    /// Add `delta` seconds and return the fixed steps to run now.
    ///
    /// Time beyond `max_steps` steps is dropped so a slow frame cannot
    /// snowball into ever longer catch-up frames.
    pub fn tick(&mut self, delta: f32) -> impl Iterator<Item = f32> {
        if delta.is_finite() && delta > 0.0 {
            self.accumulator += delta;
        }

        let available = (self.accumulator / self.timestep) as u32;
        let steps = available.min(self.max_steps);
        self.accumulator -= steps as f32 * self.timestep;
        if available > self.max_steps {
            self.accumulator = self.accumulator.min(self.timestep * 0.999);
        }

        std::iter::repeat(self.timestep).take(steps as usize)
    }

    /// Fraction of a step left in the accumulator, for render interpolation
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.timestep
    }
}

#[cfg(test)]
#[path = "frame_tests.rs"]
mod tests;
