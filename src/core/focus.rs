use super::camera::Camera;
use super::config::FocusConfig;
use super::easing::Easing;
use super::notify::SceneEvent;
use super::ring::RingId;
use super::session::SharedSession;
use super::transform::Transform;
use super::tween::Tween;
use std::time::Duration;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FocusError {
    #[error("ring {0} cannot focus: scene has no camera")]
    MissingCamera(RingId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusPhase {
    Idle,
    AnimatingIn,
    Focused,
    AnimatingOut,
}

/// Click-to-focus / close-to-return state machine for one ring.
///
/// The controller never owns the ring's transform; callers pass it in so the
/// same transform can also be driven by the drag controller.
pub struct FocusController {
    ring: RingId,
    config: FocusConfig,
    session: SharedSession,
    phase: FocusPhase,
    tween: Option<Tween>,
}

impl FocusController {
    pub fn new(ring: RingId, config: FocusConfig, session: SharedSession) -> Self {
        Self {
            ring,
            config,
            session,
            phase: FocusPhase::Idle,
            tween: None,
        }
    }

    #[inline]
    pub fn phase(&self) -> FocusPhase {
        self.phase
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, FocusPhase::AnimatingIn | FocusPhase::AnimatingOut)
    }

    /// Start animating toward the camera.
    ///
    /// Returns `Ok(false)` when the click is ignored: the session is busy,
    /// another ring already holds focus, or this ring is not idle.
    pub fn click(
        &mut self,
        current: &Transform,
        baseline: &Transform,
        camera: Option<&Camera>,
    ) -> Result<bool, FocusError> {
        {
            let session = self.session.borrow();
            if session.is_busy() || session.focused().is_some() || self.phase != FocusPhase::Idle
            {
                log::debug!(
                    "[focus] ring {} click ignored (busy={} focused={:?} phase={:?})",
                    self.ring,
                    session.is_busy(),
                    session.focused(),
                    self.phase
                );
                return Ok(false);
            }
        }
        let camera = camera.ok_or(FocusError::MissingCamera(self.ring))?;

        let target = Transform {
            position: camera.focus_point(
                self.config.distance,
                baseline.position.y + self.config.min_lift,
            ),
            scale: baseline.scale * self.config.scale_factor,
            rotation: current.rotation,
        };
        {
            let mut session = self.session.borrow_mut();
            session.set_busy(true);
            session.set_focused(self.ring);
        }
        self.tween = Some(Tween::new(
            *current,
            target,
            self.config.focus_duration,
            Easing::OutCubic,
        ));
        self.phase = FocusPhase::AnimatingIn;
        log::info!(
            "[focus] ring {} focusing -> ({:.2},{:.2},{:.2})",
            self.ring,
            target.position.x,
            target.position.y,
            target.position.z
        );
        Ok(true)
    }

    /// Start animating back to `baseline`. Only the focused ring reacts, and
    /// only once its focus animation has finished.
    pub fn request_close(&mut self, current: &Transform, baseline: &Transform) -> bool {
        {
            let session = self.session.borrow();
            if session.focused() != Some(self.ring)
                || session.is_busy()
                || self.phase != FocusPhase::Focused
            {
                return false;
            }
        }
        self.session.borrow_mut().set_busy(true);
        self.tween = Some(Tween::new(
            *current,
            *baseline,
            self.config.close_duration,
            Easing::InOutCubic,
        ));
        self.phase = FocusPhase::AnimatingOut;
        log::info!("[focus] ring {} closing", self.ring);
        true
    }

    /// Advance any running animation, writing into `transform`.
    pub fn tick(&mut self, dt: Duration, transform: &mut Transform) -> Option<SceneEvent> {
        let tween = self.tween.as_mut()?;
        let sampled = tween.advance(dt);
        let done = tween.is_done();
        match self.phase {
            // Rotation stays under drag control while focusing.
            FocusPhase::AnimatingIn => {
                transform.position = sampled.position;
                transform.scale = sampled.scale;
            }
            FocusPhase::AnimatingOut => *transform = sampled,
            FocusPhase::Idle | FocusPhase::Focused => {}
        }
        if !done {
            return None;
        }

        self.tween = None;
        let mut session = self.session.borrow_mut();
        session.set_busy(false);
        match self.phase {
            FocusPhase::AnimatingIn => {
                self.phase = FocusPhase::Focused;
                log::info!("[focus] ring {} focused", self.ring);
                Some(SceneEvent::ShowCloseControl { ring: self.ring })
            }
            FocusPhase::AnimatingOut => {
                session.clear_focused();
                self.phase = FocusPhase::Idle;
                log::info!("[focus] ring {} back at baseline", self.ring);
                Some(SceneEvent::HideCloseControl { ring: self.ring })
            }
            FocusPhase::Idle | FocusPhase::Focused => None,
        }
    }
}

impl Drop for FocusController {
    // Release whatever claim this ring holds on the session.
    fn drop(&mut self) {
        let Ok(mut session) = self.session.try_borrow_mut() else {
            if self.is_animating() || self.phase == FocusPhase::Focused {
                log::warn!(
                    "[focus] ring {} dropped while session is borrowed; claim not released (phase={:?})",
                    self.ring,
                    self.phase
                );
            }
            return;
        };
        if self.is_animating() {
            session.set_busy(false);
        }
        if session.focused() == Some(self.ring) {
            session.clear_focused();
        }
    }
}
