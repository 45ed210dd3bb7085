use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// A DOM event subscription that unsubscribes itself when dropped.
pub struct Listener<F: ?Sized> {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<F>,
}

impl<F: ?Sized> Drop for Listener<F> {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

pub type PointerListener = Listener<dyn FnMut(web::PointerEvent)>;
pub type KeyListener = Listener<dyn FnMut(web::KeyboardEvent)>;
pub type PlainListener = Listener<dyn FnMut()>;

pub fn listen_pointer(
    target: &web::EventTarget,
    event: &'static str,
    handler: impl FnMut(web::PointerEvent) + 'static,
) -> PointerListener {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::PointerEvent)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    Listener {
        target: target.clone(),
        event,
        closure,
    }
}

pub fn listen_key(
    target: &web::EventTarget,
    event: &'static str,
    handler: impl FnMut(web::KeyboardEvent) + 'static,
) -> KeyListener {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::KeyboardEvent)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    Listener {
        target: target.clone(),
        event,
        closure,
    }
}

pub fn listen(
    target: &web::EventTarget,
    event: &'static str,
    mut handler: impl FnMut() + 'static,
) -> PlainListener {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    Listener {
        target: target.clone(),
        event,
        closure,
    }
}

/// Click listener on the element with `element_id`, if present.
pub fn listen_click_by_id(
    document: &web::Document,
    element_id: &str,
    handler: impl FnMut() + 'static,
) -> Option<PlainListener> {
    let el = document.get_element_by_id(element_id)?;
    Some(listen(el.as_ref(), "click", handler))
}
