//! SNES joypad button and emulator action masks
//!
//! The button mask values match the snes9x joypad bit layout, so a mapping
//! table built here can be handed to the core verbatim.

use bitflags::bitflags;

use crate::error::ConfigError;

bitflags! {
    /// SNES controller buttons.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct JoypadButtons: u16 {
        const TR     = 0x0010;
        const TL     = 0x0020;
        const X      = 0x0040;
        const A      = 0x0080;
        const RIGHT  = 0x0100;
        const LEFT   = 0x0200;
        const DOWN   = 0x0400;
        const UP     = 0x0800;
        const START  = 0x1000;
        const SELECT = 0x2000;
        const Y      = 0x4000;
        const B      = 0x8000;
    }
}

bitflags! {
    /// Emulator-level actions bindable to a key.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct EmuActions: u8 {
        const QUIT              = 0x01;
        const TOGGLE_FULLSCREEN = 0x02;
        const MENU              = 0x04;
    }
}

impl JoypadButtons {
    /// Looks a button up by its configuration name, case-insensitively.
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        let button = match name.to_ascii_lowercase().as_str() {
            "a" => Self::A,
            "b" => Self::B,
            "x" => Self::X,
            "y" => Self::Y,
            "l" => Self::TL,
            "r" => Self::TR,
            "up" => Self::UP,
            "down" => Self::DOWN,
            "left" => Self::LEFT,
            "right" => Self::RIGHT,
            "start" => Self::START,
            "select" => Self::SELECT,
            _ => return Err(ConfigError::BadButtonName(name.to_owned())),
        };
        Ok(button)
    }
}

impl EmuActions {
    /// Looks an action up by its configuration name, case-insensitively.
    ///
    /// Only quit and fullscreen are bindable; the menu action is raised
    /// internally on focus loss.
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        match name.to_ascii_lowercase().as_str() {
            "quit" => Ok(Self::QUIT),
            "fullscreen" => Ok(Self::TOGGLE_FULLSCREEN),
            _ => Err(ConfigError::BadActionName(name.to_owned())),
        }
    }
}
