use crate::camera;
use crate::constants::{
    BOX_CENTER, BOX_COLOR, BOX_HALF_EXTENTS, RING_COLORS, RING_MAJOR_RADIUS, RING_MINOR_RADIUS,
    RING_RADIAL_SEGMENTS, RING_TUBULAR_SEGMENTS,
};
use crate::core::Scene;
use crate::overlay::CloseControl;
use crate::render::{self, mesh, DrawItem, MeshKind};
use glam::{Mat4, Vec3, Vec4};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

const RING_SHININESS: f32 = 48.0;

pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState>,
    pub close_control: CloseControl,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        {
            let mut scene = self.scene.borrow_mut();
            if let Some(cam) = scene.camera_mut() {
                camera::sync_aspect(cam, &self.canvas);
            }
            scene.tick(dt, &mut self.close_control);
        }

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            let scene = self.scene.borrow();
            let Some(cam) = scene.camera() else {
                return;
            };
            let items = draw_items(&scene);
            match g.render(cam, &items) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
    }
}

/// Tray first, then every ring at its live transform.
pub fn draw_items(scene: &Scene) -> Vec<DrawItem> {
    let mut items = Vec::with_capacity(scene.rings().len() + 1);
    items.push(DrawItem {
        mesh: MeshKind::Tray,
        model: Mat4::from_translation(BOX_CENTER),
        color: Vec3::from_array(BOX_COLOR).extend(0.0),
    });
    for (i, ring) in scene.rings().iter().enumerate() {
        let rgb = RING_COLORS[i % RING_COLORS.len()];
        items.push(DrawItem {
            mesh: MeshKind::Ring,
            model: ring.transform().model_matrix(),
            color: Vec4::new(rgb[0], rgb[1], rgb[2], RING_SHININESS),
        });
    }
    items
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState> {
    let tray = mesh::cuboid(BOX_HALF_EXTENTS);
    let ring = mesh::torus(
        RING_MAJOR_RADIUS,
        RING_MINOR_RADIUS,
        RING_RADIAL_SEGMENTS,
        RING_TUBULAR_SEGMENTS,
    );
    match render::GpuState::new(canvas, &tray, &ring).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_frame(slot: &TickSlot) {
    if let (Some(w), Some(cb)) = (web::window(), slot.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Drive `frame()` from requestAnimationFrame until `running` is cleared.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>, running: Rc<Cell<bool>>) {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running.get() {
            // Break the closure <-> slot cycle once this call has returned.
            let slot = tick_clone.clone();
            spawn_local(async move {
                slot.borrow_mut().take();
            });
            log::info!("frame loop stopped");
            return;
        }
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
