use crate::core::{RingId, Scene};
use crate::dom::{self, KeyListener};
use super::keymap::{action_for_key, KeyAction};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn handle_keydown(ev: &web::KeyboardEvent, scene: &Rc<RefCell<Scene>>) {
    if ev.repeat() {
        return;
    }
    match action_for_key(&ev.key()) {
        Some(KeyAction::Close) => {
            if scene.borrow_mut().request_close() {
                log::info!("[keys] close requested");
            }
        }
        Some(KeyAction::Focus(slot)) => {
            let id = scene.borrow().rings().get(slot).map(|r| r.id());
            if let Some(id) = id {
                focus_ring(scene, id);
            }
        }
        None => {}
    }
}

fn focus_ring(scene: &Rc<RefCell<Scene>>, id: RingId) {
    match scene.borrow_mut().click(id) {
        Ok(true) => log::info!("[keys] focus ring {}", id),
        Ok(false) => {}
        Err(e) => log::error!("[keys] {}", e),
    }
}

/// Window-level keydown: `Escape` closes the focused ring, `1`-`3` focus a ring.
pub fn wire_global_keydown(scene: Rc<RefCell<Scene>>) -> Option<KeyListener> {
    let window = web::window()?;
    Some(dom::listen_key(window.as_ref(), "keydown", move |ev| {
        handle_keydown(&ev, &scene);
    }))
}
