/// Easing curve applied to normalized animation progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    OutCubic,
    InOutCubic,
}

impl Easing {
    /// Map progress `t` (clamped to \[0, 1\]) through the curve.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::OutCubic => ease_out_cubic(t),
            Easing::InOutCubic => ease_in_out_cubic(t),
        }
    }
}

/// `1 - (1-t)^3`: fast start, gentle landing.
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// `4t^3` below the midpoint, `1 - (-2t+2)^3 / 2` above it.
#[inline]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
