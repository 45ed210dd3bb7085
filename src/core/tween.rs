use super::easing::Easing;
use super::transform::Transform;
use std::time::Duration;

/// Fixed-duration interpolation between two transforms.
///
/// Progress is driven by explicit time deltas. Once elapsed time reaches the
/// duration the tween reports done and samples exactly `to`.
#[derive(Clone, Debug)]
pub struct Tween {
    from: Transform,
    to: Transform,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
}

impl Tween {
    pub fn new(from: Transform, to: Transform, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing,
        }
    }

    pub fn target(&self) -> &Transform {
        &self.to
    }

    /// Normalized progress in \[0, 1\].
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advance by `dt` and return the sampled transform.
    pub fn advance(&mut self, dt: Duration) -> Transform {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.sample()
    }

    pub fn sample(&self) -> Transform {
        if self.is_done() {
            return self.to;
        }
        self.from.lerp(&self.to, self.easing.apply(self.progress()))
    }
}
