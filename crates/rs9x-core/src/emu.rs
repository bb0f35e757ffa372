//! Boundary to the emulation core
//!
//! The CPU/PPU/APU core is an external component; the platform drives it
//! through this trait and owns everything on the near side of it: the
//! settings it reads, the surfaces it renders into, and the freeze-state
//! streams it serializes through.

use std::io::{Read, Write};

use crate::gfx::GfxSurfaces;
use crate::input::JoypadButtons;

/// Dimensions of one rendered frame. Width and height vary with the SNES
/// video mode the game selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSize {
    pub width: u32,
    pub height: u32,
}

pub trait EmulationCore {
    /// Emulates one frame, rendering into the screen surface, and reports
    /// the rendered dimensions.
    fn run_frame(&mut self, gfx: &mut GfxSurfaces) -> FrameSize;

    /// Latches the joypad buttons held during the next frame.
    fn set_joypad(&mut self, buttons: JoypadButtons);

    /// Serializes the machine state into `out`.
    fn freeze(&self, out: &mut dyn Write) -> std::io::Result<()>;

    /// Restores the machine state from `input`.
    fn unfreeze(&mut self, input: &mut dyn Read) -> std::io::Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::{IMAGE_HEIGHT, IMAGE_WIDTH};

    /// Minimal core standing in for the real emulation library.
    struct StubCore {
        state: Vec<u8>,
        buttons: JoypadButtons,
    }

    impl EmulationCore for StubCore {
        fn run_frame(&mut self, gfx: &mut GfxSurfaces) -> FrameSize {
            let pitch = gfx.pitch();
            gfx.screen[..pitch].fill(0xff);
            FrameSize {
                width: IMAGE_WIDTH as u32,
                height: 224,
            }
        }

        fn set_joypad(&mut self, buttons: JoypadButtons) {
            self.buttons = buttons;
        }

        fn freeze(&self, out: &mut dyn Write) -> std::io::Result<()> {
            out.write_all(&self.state)
        }

        fn unfreeze(&mut self, input: &mut dyn Read) -> std::io::Result<()> {
            self.state.clear();
            input.read_to_end(&mut self.state)?;
            Ok(())
        }
    }

    #[test]
    fn test_core_renders_into_surfaces() {
        let mut stub = StubCore {
            state: vec![],
            buttons: JoypadButtons::empty(),
        };
        let mut gfx = GfxSurfaces::new();

        let core: &mut dyn EmulationCore = &mut stub;
        core.set_joypad(JoypadButtons::A | JoypadButtons::START);
        let size = core.run_frame(&mut gfx);

        assert_eq!(size.width as usize, IMAGE_WIDTH);
        assert!(size.height as usize <= IMAGE_HEIGHT);
        assert!(gfx.screen[..gfx.pitch()].iter().all(|&b| b == 0xff));
        assert!(gfx.screen[gfx.pitch()..].iter().all(|&b| b == 0));
        assert_eq!(stub.buttons, JoypadButtons::A | JoypadButtons::START);
    }

    #[test]
    fn test_freeze_state_round_trip() {
        let source = StubCore {
            state: b"machine state".to_vec(),
            buttons: JoypadButtons::empty(),
        };
        let mut frozen = Vec::new();
        source.freeze(&mut frozen).unwrap();

        let mut restored = StubCore {
            state: vec![],
            buttons: JoypadButtons::empty(),
        };
        restored.unfreeze(&mut frozen.as_slice()).unwrap();
        assert_eq!(restored.state, b"machine state");
    }
}
