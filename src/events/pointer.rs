use crate::camera;
use crate::constants::{CLICK_SLOP_PX, PICK_SPHERE_RADIUS};
use crate::core::{RingId, Scene};
use crate::dom::{self, PointerListener};
use crate::input;
use super::gesture::{GestureSlot, SlotGuard};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
}

/// Window listeners that exist only while a drag gesture is live.
struct DragListeners {
    _move: PointerListener,
    _up: PointerListener,
    _cancel: PointerListener,
}

type DragSlot = GestureSlot<DragListeners>;

/// Canvas `pointerdown` plus whatever drag is in flight. Dropping it
/// detaches both.
pub struct PointerInput {
    _down: PointerListener,
    _drag: SlotGuard<DragListeners>,
}

/// Wire `pointerdown` on the canvas. Move/up tracking is attached on demand.
pub fn wire_input_handlers(w: InputWiring) -> PointerInput {
    let drag = DragSlot::new();
    let guard = drag.guard();
    let canvas = w.canvas.clone();
    let down = dom::listen_pointer(canvas.as_ref(), "pointerdown", move |ev| {
        on_pointer_down(&w, &drag, &ev);
    });
    PointerInput {
        _down: down,
        _drag: guard,
    }
}

fn pick_ring(w: &InputWiring, ev: &web::PointerEvent) -> Option<RingId> {
    let pos = input::pointer_canvas_px(ev, &w.canvas);
    let scene = w.scene.borrow();
    let camera = scene.camera()?;
    let (ro, rd) = camera::screen_to_world_ray(&w.canvas, camera, pos.x, pos.y);
    input::pick_nearest(
        ro,
        rd,
        scene.rings().iter().map(|r| {
            let t = r.transform();
            (r.id(), t.position, PICK_SPHERE_RADIUS * t.scale.max_element())
        }),
    )
}

fn on_pointer_down(w: &InputWiring, drag: &DragSlot, ev: &web::PointerEvent) {
    let Some(ring) = pick_ring(w, ev) else {
        return;
    };
    if !w.scene.borrow_mut().pointer_down(ring, ev.client_x() as f32) {
        return;
    }
    ev.prevent_default();

    let Some(window) = web::window() else {
        return;
    };
    let target: &web::EventTarget = window.as_ref();
    let w_move = w.clone();
    let w_up = w.clone();
    let w_cancel = w.clone();
    let drag_up = drag.clone();
    let drag_cancel = drag.clone();
    let listeners = DragListeners {
        _move: dom::listen_pointer(target, "pointermove", move |ev| {
            w_move.scene.borrow_mut().pointer_move(ev.client_x() as f32);
        }),
        _up: dom::listen_pointer(target, "pointerup", move |_ev| {
            finish_drag(&w_up, &drag_up, false);
        }),
        _cancel: dom::listen_pointer(target, "pointercancel", move |_ev| {
            finish_drag(&w_cancel, &drag_cancel, true);
        }),
    };
    // Replacing a stale set drops (and detaches) it.
    drop(drag.replace(listeners));
}

fn finish_drag(w: &InputWiring, drag: &DragSlot, cancelled: bool) {
    let released = w.scene.borrow_mut().pointer_up();

    // The running closure belongs to these listeners; drop them after it returns.
    if let Some(listeners) = drag.take() {
        spawn_local(async move {
            drop(listeners);
        });
    }

    let Some((ring, dx)) = released else {
        return;
    };
    if cancelled || !input::is_click(dx, CLICK_SLOP_PX) {
        return;
    }
    let result = w.scene.borrow_mut().click(ring);
    match result {
        Ok(true) => log::info!("[click] focus ring {}", ring),
        Ok(false) => {}
        Err(e) => log::error!("[click] {}", e),
    }
}
