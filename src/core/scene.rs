use super::camera::Camera;
use super::config::RingConfig;
use super::focus::FocusError;
use super::notify::SceneObserver;
use super::ring::{Ring, RingId};
use super::session::{Session, SharedSession};
use super::transform::Transform;
use std::time::Duration;

/// The rings, the camera they focus toward, and the session they share.
///
/// This is the only type the host drives: it routes pointer input to the
/// pressed ring and advances every ring once per frame via [`Scene::tick`].
pub struct Scene {
    session: SharedSession,
    rings: Vec<Ring>,
    camera: Option<Camera>,
    active_drag: Option<RingId>,
    next_id: usize,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self {
            session: Session::shared(),
            rings: Vec::new(),
            camera: None,
            active_drag: None,
            next_id: 0,
        }
    }

    pub fn with_camera(mut self, camera: Camera) -> Self {
        self.camera = Some(camera);
        self
    }

    pub fn set_camera(&mut self, camera: Option<Camera>) {
        self.camera = camera;
    }

    pub fn camera(&self) -> Option<&Camera> {
        self.camera.as_ref()
    }

    pub fn camera_mut(&mut self) -> Option<&mut Camera> {
        self.camera.as_mut()
    }

    pub fn add_ring(&mut self, baseline: Transform, config: RingConfig) -> RingId {
        let id = RingId(self.next_id);
        self.next_id += 1;
        self.rings
            .push(Ring::new(id, baseline, config, self.session.clone()));
        id
    }

    /// Destroy a ring. Any focus or busy claim it held on the session is
    /// released when its controllers drop.
    pub fn remove_ring(&mut self, id: RingId) -> bool {
        let Some(idx) = self.rings.iter().position(|r| r.id() == id) else {
            return false;
        };
        if self.active_drag == Some(id) {
            self.active_drag = None;
        }
        drop(self.rings.remove(idx));
        log::info!("[scene] ring {} removed", id);
        true
    }

    pub fn ring(&self, id: RingId) -> Option<&Ring> {
        self.rings.iter().find(|r| r.id() == id)
    }

    fn ring_mut(&mut self, id: RingId) -> Option<&mut Ring> {
        self.rings.iter_mut().find(|r| r.id() == id)
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    pub fn is_busy(&self) -> bool {
        self.session.borrow().is_busy()
    }

    pub fn focused(&self) -> Option<RingId> {
        self.session.borrow().focused()
    }

    pub fn is_dragging(&self) -> bool {
        self.active_drag.is_some()
    }

    /// Click on ring `id`. Unknown ids are ignored.
    pub fn click(&mut self, id: RingId) -> Result<bool, FocusError> {
        let camera = self.camera.as_ref();
        match self.rings.iter_mut().find(|r| r.id() == id) {
            Some(ring) => ring.click(camera),
            None => Ok(false),
        }
    }

    /// Broadcast "close requested"; only the focused ring reacts.
    pub fn request_close(&mut self) -> bool {
        let mut started = false;
        for ring in &mut self.rings {
            started |= ring.request_close();
        }
        if !started {
            log::debug!("[scene] close ignored");
        }
        started
    }

    /// Press on ring `id` at horizontal pointer position `x` (pixels).
    pub fn pointer_down(&mut self, id: RingId, x: f32) -> bool {
        if let Some(prev) = self.active_drag.take() {
            if let Some(r) = self.ring_mut(prev) {
                r.pointer_up();
            }
        }
        let started = self.ring_mut(id).is_some_and(|r| r.pointer_down(x));
        if started {
            self.active_drag = Some(id);
        }
        started
    }

    pub fn pointer_move(&mut self, x: f32) -> bool {
        match self.active_drag {
            Some(id) => self.ring_mut(id).is_some_and(|r| r.pointer_move(x)),
            None => false,
        }
    }

    /// Release the pointer anywhere. Returns the dragged ring and its total
    /// horizontal displacement.
    pub fn pointer_up(&mut self) -> Option<(RingId, f32)> {
        let id = self.active_drag.take()?;
        let dx = self.ring_mut(id)?.pointer_up()?;
        Some((id, dx))
    }

    pub fn tick(&mut self, dt: Duration, observer: &mut dyn SceneObserver) {
        for ring in &mut self.rings {
            ring.tick(dt, observer);
        }
    }
}
