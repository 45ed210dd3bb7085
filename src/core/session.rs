use super::ring::RingId;
use std::cell::RefCell;
use std::rc::Rc;

/// Session-wide interaction arbiter shared by every ring.
///
/// `busy` is set while any focus or close animation is in flight; `focused`
/// names the single ring currently pulled toward the camera. Controllers check
/// both at transition start, so the exclusion is cooperative: it relies on all
/// mutations happening on the one UI thread between frames.
#[derive(Debug, Default)]
pub struct Session {
    busy: bool,
    focused: Option<RingId>,
}

/// Handle cloned into each ring. Not `Send`: single-threaded only.
pub type SharedSession = Rc<RefCell<Session>>;

impl Session {
    pub fn shared() -> SharedSession {
        Rc::new(RefCell::new(Session::default()))
    }

    #[inline]
    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    #[inline]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    #[inline]
    pub fn set_focused(&mut self, ring: RingId) {
        self.focused = Some(ring);
    }

    #[inline]
    pub fn focused(&self) -> Option<RingId> {
        self.focused
    }

    #[inline]
    pub fn clear_focused(&mut self) {
        self.focused = None;
    }
}
