pub mod camera;
pub mod config;
pub mod constants;
pub mod drag;
pub mod easing;
pub mod focus;
pub mod notify;
pub mod ring;
pub mod scene;
pub mod session;
pub mod transform;
pub mod tween;

pub use camera::*;
pub use config::*;
pub use constants::*;
pub use drag::*;
pub use easing::*;
pub use focus::*;
pub use notify::*;
pub use ring::*;
pub use scene::*;
pub use session::*;
pub use transform::*;
pub use tween::*;
