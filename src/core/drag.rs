use super::session::Session;

#[derive(Clone, Copy, Debug)]
struct Gesture {
    start_x: f32,
    yaw_at_start: f32,
    last_x: f32,
}

/// Pointer-driven yaw rotation for one ring.
///
/// Yaw is absolute per gesture (`yaw_at_start + dx * sensitivity`), so it never
/// drifts from accumulated per-move rounding, and it carries over from one
/// gesture to the next because each press reads the ring's current yaw.
#[derive(Clone, Debug)]
pub struct DragController {
    sensitivity: f32,
    gesture: Option<Gesture>,
}

impl DragController {
    pub fn new(sensitivity: f32) -> Self {
        Self {
            sensitivity,
            gesture: None,
        }
    }

    #[inline]
    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }

    /// Begin a gesture at pointer `x`. Suppressed while the session is busy.
    pub fn pointer_down(&mut self, session: &Session, x: f32, current_yaw: f32) -> bool {
        if session.is_busy() {
            self.gesture = None;
            return false;
        }
        self.gesture = Some(Gesture {
            start_x: x,
            yaw_at_start: current_yaw,
            last_x: x,
        });
        true
    }

    /// New yaw for pointer `x`, or `None` when no gesture is active.
    pub fn pointer_move(&mut self, x: f32) -> Option<f32> {
        let g = self.gesture.as_mut()?;
        g.last_x = x;
        Some(g.yaw_at_start + (x - g.start_x) * self.sensitivity)
    }

    /// End the gesture, returning its total horizontal displacement in pixels.
    pub fn pointer_up(&mut self) -> Option<f32> {
        self.gesture.take().map(|g| g.last_x - g.start_x)
    }
}
