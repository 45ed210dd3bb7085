pub mod gesture;
pub mod keyboard;
pub mod keymap;
pub mod pointer;

pub use keyboard::wire_global_keydown;
pub use pointer::{wire_input_handlers, InputWiring, PointerInput};
