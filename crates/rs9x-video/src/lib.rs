//! SDL2 display driver for the rs9x SNES emulator port
//!
//! Owns the window, the streaming texture, and the pixel surfaces the
//! emulation core renders into, and handles frame presentation and
//! screenshot capture.

pub mod display;
pub mod error;
pub mod events;
mod screenshot;

pub use display::Display;
pub use error::{Result, VideoError};
pub use events::filter_window_event;
