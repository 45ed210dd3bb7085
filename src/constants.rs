use glam::Vec3;

// Scene layout and rendering constants used by the web frontend.

// DOM hooks
pub const CANVAS_ID: &str = "app-canvas";
pub const CLOSE_BUTTON_ID: &str = "close-btn";
pub const SENSITIVITY_ATTR: &str = "data-drag-sensitivity";

// Camera
pub const CAMERA_EYE: Vec3 = Vec3::new(0.0, 1.6, 3.0);
pub const CAMERA_TARGET: Vec3 = Vec3::new(0.0, 0.4, 0.0);

// Jewellery box (a flat velvet tray the rings stand in)
pub const BOX_CENTER: Vec3 = Vec3::new(0.0, 0.1, 0.0);
pub const BOX_HALF_EXTENTS: Vec3 = Vec3::new(0.8, 0.1, 0.3);
pub const BOX_COLOR: [f32; 3] = [0.35, 0.05, 0.1];

// Rings stand upright (torus plane rotated onto XY) just above the tray
pub const RING_POSITIONS: [[f32; 3]; 3] = [[-0.45, 0.35, 0.0], [0.0, 0.35, 0.0], [0.45, 0.35, 0.0]];
pub const RING_TILT_X: f32 = std::f32::consts::FRAC_PI_2;
pub const RING_COLORS: [[f32; 3]; 3] = [
    [0.95, 0.78, 0.35], // gold
    [0.85, 0.86, 0.9],  // silver
    [0.92, 0.6, 0.5],   // rose gold
];

// Ring geometry
pub const RING_MAJOR_RADIUS: f32 = 0.14;
pub const RING_MINOR_RADIUS: f32 = 0.03;
pub const RING_RADIAL_SEGMENTS: u16 = 48;
pub const RING_TUBULAR_SEGMENTS: u16 = 16;

// Interaction
pub const PICK_SPHERE_RADIUS: f32 = 0.18; // ray-sphere radius at scale 1
pub const CLICK_SLOP_PX: f32 = 6.0; // below this a press/release is a click

// Lighting and background
pub const LIGHT_DIR: Vec3 = Vec3::new(-0.4, -1.0, -0.6);
pub const AMBIENT: f32 = 0.18;
pub const CLEAR_COLOR: [f64; 3] = [0.03, 0.04, 0.08];
