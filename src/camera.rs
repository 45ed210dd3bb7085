use crate::constants::{CAMERA_EYE, CAMERA_TARGET};
use crate::core::Camera;
use glam::Vec3;
use web_sys as web;

#[inline]
fn canvas_aspect(canvas: &web::HtmlCanvasElement) -> f32 {
    canvas.width().max(1) as f32 / canvas.height().max(1) as f32
}

/// The fixed scene camera, sized to the canvas.
pub fn scene_camera(canvas: &web::HtmlCanvasElement) -> Camera {
    Camera::look_at(CAMERA_EYE, CAMERA_TARGET, canvas_aspect(canvas))
}

/// Keep the projection aspect in step with the canvas backing store.
pub fn sync_aspect(camera: &mut Camera, canvas: &web::HtmlCanvasElement) {
    camera.aspect = canvas_aspect(canvas);
}

/// Compute a world-space ray from canvas backing-store pixel coordinates.
///
/// Returns `(ray_origin, ray_direction)` in world space.
#[inline]
pub fn screen_to_world_ray(
    canvas: &web::HtmlCanvasElement,
    camera: &Camera,
    sx: f32,
    sy: f32,
) -> (Vec3, Vec3) {
    camera.screen_ray(canvas.width() as f32, canvas.height() as f32, sx, sy)
}
