use super::camera::Camera;
use super::config::RingConfig;
use super::drag::DragController;
use super::focus::{FocusController, FocusError, FocusPhase};
use super::notify::SceneObserver;
use super::session::SharedSession;
use super::transform::Transform;
use std::fmt;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RingId(pub usize);

impl fmt::Display for RingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A ring in the box: live transform, the baseline it was created with, and
/// the two controllers that move it.
pub struct Ring {
    id: RingId,
    baseline: Transform,
    transform: Transform,
    session: SharedSession,
    focus: FocusController,
    drag: DragController,
}

impl Ring {
    pub fn new(id: RingId, baseline: Transform, config: RingConfig, session: SharedSession) -> Self {
        Self {
            id,
            baseline,
            transform: baseline,
            focus: FocusController::new(id, config.focus, session.clone()),
            drag: DragController::new(config.drag_sensitivity),
            session,
        }
    }

    #[inline]
    pub fn id(&self) -> RingId {
        self.id
    }

    #[inline]
    pub fn baseline(&self) -> &Transform {
        &self.baseline
    }

    #[inline]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    #[inline]
    pub fn focus_phase(&self) -> FocusPhase {
        self.focus.phase()
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn drag_sensitivity(&self) -> f32 {
        self.drag.sensitivity()
    }

    pub fn click(&mut self, camera: Option<&Camera>) -> Result<bool, FocusError> {
        self.focus.click(&self.transform, &self.baseline, camera)
    }

    pub fn request_close(&mut self) -> bool {
        self.focus.request_close(&self.transform, &self.baseline)
    }

    pub fn pointer_down(&mut self, x: f32) -> bool {
        let started = self
            .drag
            .pointer_down(&self.session.borrow(), x, self.transform.yaw());
        if started {
            log::debug!("[drag] ring {} begin at x={:.1}", self.id, x);
        }
        started
    }

    pub fn pointer_move(&mut self, x: f32) -> bool {
        match self.drag.pointer_move(x) {
            Some(yaw) => {
                self.transform.set_yaw(yaw);
                true
            }
            None => false,
        }
    }

    pub fn pointer_up(&mut self) -> Option<f32> {
        let dx = self.drag.pointer_up()?;
        log::debug!(
            "[drag] ring {} end dx={:.1} yaw={:.3}",
            self.id,
            dx,
            self.transform.yaw()
        );
        Some(dx)
    }

    pub fn tick(&mut self, dt: Duration, observer: &mut dyn SceneObserver) {
        if let Some(ev) = self.focus.tick(dt, &mut self.transform) {
            observer.notify(ev);
        }
    }
}
