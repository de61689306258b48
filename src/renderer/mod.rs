//! Canvas rendering module
//!
//! The simulation never draws; `draw_frame` turns a `GameState` into
//! sprite-blit and text calls against any `Surface`.

pub mod frame;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use frame::draw_frame;
pub use surface::{DrawCommand, DrawList, Surface};
