//! Core-facing settings record
//!
//! Mirrors the knobs the emulation core reads. The config loader builds
//! this once with hard-coded defaults, option parsing mutates it, and it
//! is treated as read-only for the rest of the process lifetime.

use std::time::Duration;

/// Frame-skip value that lets the core pick its own rate.
pub const AUTO_FRAMERATE: u32 = 200;

/// Master cycles per scanline.
pub const SNES_CYCLES_PER_SCANLINE: u32 = 341;

/// Horizontal counter wrap value.
pub const SNES_HCOUNTER_MAX: u32 = 342;

/// Which peripheral is plugged into the controller ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControllerOption {
    #[default]
    Joypad,
    /// Mouse on the second controller port.
    Mouse,
    /// Mouse on the first port, joypad on the second.
    MouseSwapped,
    SuperScope,
}

/// Emulation settings shared with the core.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Audio output rate in Hz.
    pub sound_playback_rate: u32,
    pub stereo: bool,
    /// Audio output buffer size in samples.
    pub sound_buffer_size: u32,
    pub apu_enabled: bool,

    pub display_frame_rate: bool,
    /// Render only 1 in every N frames; `AUTO_FRAMERATE` lets the core decide.
    pub skip_frames: u32,
    /// Never sleep between frames.
    pub turbo_mode: bool,
    pub turbo_skip_frames: u32,

    pub cycles_percentage: u32,
    pub h_max: u32,
    pub hblank_start: u32,
    pub frame_time_pal: Duration,
    pub frame_time_ntsc: Duration,
    /// Current frame duration; the core switches this to the PAL value
    /// when a PAL ROM is loaded.
    pub frame_time: Duration,
    pub force_pal: bool,
    pub force_ntsc: bool,

    pub transparency: bool,
    pub sixteen_bit: bool,
    pub support_hires: bool,

    pub mouse: bool,
    pub superscope: bool,
    pub controller_option: ControllerOption,

    pub apply_cheats: bool,
    /// Seconds between SRAM autosaves.
    pub auto_save_delay: u32,

    /// Apply compatibility/performance hacks to known ROMs.
    pub hacks_enabled: bool,
    /// Restrict hacks to the speed-only subset.
    pub hacks_filter: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_playback_rate: 22050,
            stereo: true,
            sound_buffer_size: 512,
            apu_enabled: false,

            display_frame_rate: false,
            skip_frames: AUTO_FRAMERATE,
            turbo_mode: false,
            turbo_skip_frames: 15,

            cycles_percentage: 100,
            h_max: SNES_CYCLES_PER_SCANLINE,
            hblank_start: (256 * SNES_CYCLES_PER_SCANLINE) / SNES_HCOUNTER_MAX,
            frame_time_pal: Duration::from_millis(20),
            frame_time_ntsc: Duration::from_millis(16),
            frame_time: Duration::from_millis(16),
            force_pal: false,
            force_ntsc: false,

            transparency: false,
            sixteen_bit: true,
            support_hires: false,

            mouse: false,
            superscope: false,
            controller_option: ControllerOption::default(),

            apply_cheats: false,
            auto_save_delay: 15 * 60,

            hacks_enabled: false,
            hacks_filter: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.sound_playback_rate, 22050);
        assert!(settings.stereo);
        assert_eq!(settings.sound_buffer_size, 512);
        assert_eq!(settings.skip_frames, AUTO_FRAMERATE);
        assert_eq!(settings.frame_time, settings.frame_time_ntsc);
        assert_eq!(settings.controller_option, ControllerOption::Joypad);
        assert!(settings.sixteen_bit);
        assert!(!settings.hacks_enabled);
        assert_eq!(settings.auto_save_delay, 900);
    }
}
