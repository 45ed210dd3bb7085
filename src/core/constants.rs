/// Interaction tuning constants.
///
/// Durations, distances and factors that shape the focus/close animations and
/// drag rotation. `FocusConfig` and `RingConfig` take their defaults from here.
// Focus animation (click → in front of the camera)
pub const FOCUS_DURATION_MS: u64 = 600;
pub const FOCUS_DISTANCE: f32 = 1.6; // units along the camera forward vector
pub const FOCUS_MIN_LIFT: f32 = 1.2; // target Y is floored at baseline Y + this
pub const FOCUS_SCALE_FACTOR: f32 = 1.45; // relative to the baseline scale

// Close animation (back to the baseline transform)
pub const CLOSE_DURATION_MS: u64 = 600;

// Drag rotation
pub const DEFAULT_DRAG_SENSITIVITY: f32 = 0.012; // radians per pixel
