//! Pixel surfaces shared with the emulation core

/// Native rendered image width in pixels.
pub const IMAGE_WIDTH: usize = 256;

/// Native rendered image height in pixels (extended SNES frame).
pub const IMAGE_HEIGHT: usize = 239;

/// The four pixel buffers the core renders into: main and sub screen in
/// 16-bit color, plus one depth byte per pixel for each.
///
/// The tile renderer depends on the Z pitch being exactly half of the
/// color pitch.
#[derive(Debug, PartialEq, Eq)]
pub struct GfxSurfaces {
    pub screen: Vec<u8>,
    pub sub_screen: Vec<u8>,
    pub z_buffer: Vec<u8>,
    pub sub_z_buffer: Vec<u8>,
    pitch: usize,
    z_pitch: usize,
}

impl GfxSurfaces {
    /// Allocates all four buffers, zeroed, at native image dimensions.
    pub fn new() -> Self {
        let pitch = IMAGE_WIDTH * 2;
        let z_pitch = pitch / 2;
        Self {
            screen: vec![0; pitch * IMAGE_HEIGHT],
            sub_screen: vec![0; pitch * IMAGE_HEIGHT],
            z_buffer: vec![0; z_pitch * IMAGE_HEIGHT],
            sub_z_buffer: vec![0; z_pitch * IMAGE_HEIGHT],
            pitch,
            z_pitch,
        }
    }

    /// Byte stride of one scanline in the color buffers.
    pub fn pitch(&self) -> usize {
        self.pitch
    }

    /// Byte stride of one scanline in the depth buffers.
    pub fn z_pitch(&self) -> usize {
        self.z_pitch
    }

    /// Pixels per scanline.
    pub fn ppl(&self) -> usize {
        self.pitch / 2
    }

    /// Zeroes all four buffers without reallocating.
    pub fn reset(&mut self) {
        self.screen.fill(0);
        self.sub_screen.fill(0);
        self.z_buffer.fill(0);
        self.sub_z_buffer.fill(0);
    }
}

impl Default for GfxSurfaces {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_sizing() {
        let gfx = GfxSurfaces::new();
        assert_eq!(gfx.pitch(), IMAGE_WIDTH * 2);
        assert_eq!(gfx.z_pitch(), gfx.pitch() / 2);
        assert_eq!(gfx.ppl(), IMAGE_WIDTH);
        assert_eq!(gfx.screen.len(), gfx.pitch() * IMAGE_HEIGHT);
        assert_eq!(gfx.sub_screen.len(), gfx.pitch() * IMAGE_HEIGHT);
        assert_eq!(gfx.z_buffer.len(), gfx.z_pitch() * IMAGE_HEIGHT);
        assert_eq!(gfx.sub_z_buffer.len(), gfx.z_pitch() * IMAGE_HEIGHT);
    }

    #[test]
    fn test_reset_zeroes_without_reallocating() {
        let mut gfx = GfxSurfaces::new();
        gfx.screen[0] = 0x1f;
        gfx.sub_screen[1] = 0x2f;
        gfx.z_buffer[2] = 0x3f;
        gfx.sub_z_buffer[3] = 0x4f;
        let len = gfx.screen.len();
        gfx.reset();
        assert_eq!(gfx.screen.len(), len);
        assert!(gfx.screen.iter().all(|&b| b == 0));
        assert!(gfx.sub_screen.iter().all(|&b| b == 0));
        assert!(gfx.z_buffer.iter().all(|&b| b == 0));
        assert!(gfx.sub_z_buffer.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_fresh_surfaces_match_reset_surfaces() {
        // Tearing surfaces down and reallocating (the fullscreen-toggle
        // path) must be indistinguishable from a single reset.
        let mut written = GfxSurfaces::new();
        written.screen[100] = 0xff;
        written.reset();
        assert_eq!(written, GfxSurfaces::new());
    }
}
