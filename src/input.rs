use glam::{Vec2, Vec3};
use web_sys as web;

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Nearest sphere hit along the ray, returning the caller's key for it.
pub fn pick_nearest<K: Copy>(
    ray_origin: Vec3,
    ray_dir: Vec3,
    spheres: impl IntoIterator<Item = (K, Vec3, f32)>,
) -> Option<K> {
    let mut best = None::<(K, f32)>;
    for (key, center, radius) in spheres {
        if let Some(t) = ray_sphere(ray_origin, ray_dir, center, radius) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((key, t)),
            }
        }
    }
    best.map(|(key, _)| key)
}

/// True when a press/release pair moved little enough to count as a click.
#[inline]
pub fn is_click(dx: f32, slop_px: f32) -> bool {
    dx.abs() < slop_px
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width().max(1.0) as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height().max(1.0) as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}
