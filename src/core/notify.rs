use super::ring::RingId;

/// Outbound notifications for the host UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneEvent {
    /// A ring finished animating in; the close control should appear.
    ShowCloseControl { ring: RingId },
    /// A ring is back at its baseline; the close control should disappear.
    HideCloseControl { ring: RingId },
}

/// Receiver for [`SceneEvent`]s emitted during `Scene::tick`.
pub trait SceneObserver {
    fn notify(&mut self, event: SceneEvent);
}

impl SceneObserver for Vec<SceneEvent> {
    fn notify(&mut self, event: SceneEvent) {
        self.push(event);
    }
}
