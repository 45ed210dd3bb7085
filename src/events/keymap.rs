/// What a keydown asks the scene to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Close,
    /// Click the ring in this slot (0-based, creation order).
    Focus(usize),
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        "Escape" | "Esc" => Some(KeyAction::Close),
        "1" => Some(KeyAction::Focus(0)),
        "2" => Some(KeyAction::Focus(1)),
        "3" => Some(KeyAction::Focus(2)),
        _ => None,
    }
}
