//! Platform core for the rs9x SNES emulator port
//!
//! This crate provides the configuration loader, the core-facing settings
//! record, the pixel surfaces the emulation core renders into, and the
//! trait boundary the external core is driven through.

pub mod config;
pub mod emu;
pub mod error;
pub mod gfx;
pub mod input;
pub mod paths;
pub mod settings;
pub mod snapshot;
mod tokenizer;

pub use config::Config;
pub use emu::{EmulationCore, FrameSize};
pub use error::{ConfigError, PlatformError, Result};
pub use gfx::{GfxSurfaces, IMAGE_HEIGHT, IMAGE_WIDTH};
pub use input::{EmuActions, JoypadButtons};
pub use paths::{FileType, RomPaths};
pub use settings::{ControllerOption, Settings};
