use std::cell::RefCell;
use std::rc::Rc;

/// Shared home for values that exist only while a gesture is in progress,
/// such as the window listeners tracking a drag.
///
/// Handles are cheap clones. The stored value may itself hold handles to the
/// slot, so the cycle is broken explicitly with [`GestureSlot::take`] or by
/// dropping the [`SlotGuard`].
pub struct GestureSlot<T>(Rc<RefCell<Option<T>>>);

impl<T> Clone for GestureSlot<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> Default for GestureSlot<T> {
    fn default() -> Self {
        Self(Rc::new(RefCell::new(None)))
    }
}

impl<T> GestureSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value`, handing back whatever was there before.
    pub fn replace(&self, value: T) -> Option<T> {
        self.0.borrow_mut().replace(value)
    }

    pub fn take(&self) -> Option<T> {
        self.0.try_borrow_mut().ok()?.take()
    }

    pub fn is_active(&self) -> bool {
        self.0.try_borrow().map(|v| v.is_some()).unwrap_or(true)
    }

    /// Owner handle that empties the slot when dropped.
    pub fn guard(&self) -> SlotGuard<T> {
        SlotGuard(self.clone())
    }
}

pub struct SlotGuard<T>(GestureSlot<T>);

impl<T> Drop for SlotGuard<T> {
    fn drop(&mut self) {
        // The value drops after the slot's borrow is released.
        let released = self.0.take().is_some();
        if !released && self.0.is_active() {
            log::warn!("[input] gesture slot busy during teardown; listeners stay attached");
        }
    }
}
