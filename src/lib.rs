#![cfg(target_arch = "wasm32")]
use crate::constants::{
    CANVAS_ID, CLOSE_BUTTON_ID, RING_POSITIONS, RING_TILT_X, SENSITIVITY_ATTR,
};
use crate::core::{parse_drag_sensitivity, RingConfig, Scene, Transform, DEFAULT_DRAG_SENSITIVITY};
use glam::Vec3;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

/// Everything that must be released on teardown.
struct App {
    running: Rc<Cell<bool>>,
    _resize: dom::PlainListener,
    _pointer: events::PointerInput,
    _keys: Option<dom::KeyListener>,
    _close: Option<dom::PlainListener>,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("jewel-box starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Stop the frame loop and detach every DOM listener.
#[wasm_bindgen]
pub fn stop() {
    APP.with(|app| {
        if let Some(app) = app.borrow_mut().take() {
            app.running.set(false);
            log::info!("jewel-box stopped");
        }
    });
}

fn read_drag_sensitivity(canvas: &web::HtmlCanvasElement) -> f32 {
    let Some(raw) = canvas.get_attribute(SENSITIVITY_ATTR) else {
        return DEFAULT_DRAG_SENSITIVITY;
    };
    match parse_drag_sensitivity(&raw) {
        Ok(v) => {
            log::info!("[config] drag sensitivity {}", v);
            v
        }
        Err(e) => {
            log::warn!("[config] {}; using {}", e, DEFAULT_DRAG_SENSITIVITY);
            DEFAULT_DRAG_SENSITIVITY
        }
    }
}

fn build_scene(canvas: &web::HtmlCanvasElement, drag_sensitivity: f32) -> Scene {
    let mut scene = Scene::new().with_camera(camera::scene_camera(canvas));
    let config = RingConfig::default().with_drag_sensitivity(drag_sensitivity);
    for p in RING_POSITIONS {
        let baseline = Transform::new(
            Vec3::from_array(p),
            Vec3::ONE,
            Vec3::new(RING_TILT_X, 0.0, 0.0),
        );
        scene.add_ring(baseline, config);
    }
    log::info!(
        "[scene] rings={} pos0=({:.2},{:.2},{:.2}) pos1=({:.2},{:.2},{:.2}) pos2=({:.2},{:.2},{:.2})",
        scene.rings().len(),
        RING_POSITIONS[0][0], RING_POSITIONS[0][1], RING_POSITIONS[0][2],
        RING_POSITIONS[1][0], RING_POSITIONS[1][1], RING_POSITIONS[1][2],
        RING_POSITIONS[2][0], RING_POSITIONS[2][1], RING_POSITIONS[2][2]
    );
    scene
}

async fn init() -> anyhow::Result<()> {
    if APP.with(|app| app.borrow().is_some()) {
        log::warn!("jewel-box already running; ignoring init");
        return Ok(());
    }
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);
    let canvas_resize = canvas.clone();
    let resize = dom::listen(window.as_ref(), "resize", move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    });

    let scene = Rc::new(RefCell::new(build_scene(
        &canvas,
        read_drag_sensitivity(&canvas),
    )));
    let close_control = overlay::CloseControl::new(document.clone());

    let scene_close = scene.clone();
    let close = dom::listen_click_by_id(&document, CLOSE_BUTTON_ID, move || {
        if scene_close.borrow_mut().request_close() {
            log::info!("[click] close requested");
        }
    });
    if close.is_none() {
        log::warn!("missing #{}; close only via Escape", CLOSE_BUTTON_ID);
    }
    let keys = events::wire_global_keydown(scene.clone());
    let pointer = events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
    });

    // Without WebGPU the interaction core still runs; nothing is drawn.
    let gpu = frame::init_gpu(&canvas).await;

    let running = Rc::new(Cell::new(true));
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        canvas,
        gpu,
        close_control,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx, running.clone());

    APP.with(|app| {
        *app.borrow_mut() = Some(App {
            running,
            _resize: resize,
            _pointer: pointer,
            _keys: keys,
            _close: close,
        });
    });
    Ok(())
}
