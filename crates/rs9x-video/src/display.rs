//! SDL2 display driver
//!
//! `Display` owns the window, the streaming texture and the pixel
//! surfaces the core renders into. Fullscreen switching is a full
//! teardown and rebuild of surfaces and texture under the new mode,
//! never an in-place resize. Dropping the display releases the buffers
//! and shuts the video subsystem down.

use std::path::PathBuf;

use rs9x_core::{Config, FrameSize, GfxSurfaces, IMAGE_HEIGHT, IMAGE_WIDTH};
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{FullscreenType, Window, WindowContext};
use sdl2::{EventPump, Sdl, VideoSubsystem};

use crate::error::{Result, VideoError};
use crate::screenshot;

pub struct Display {
    _sdl: Sdl,
    _video: VideoSubsystem,
    canvas: Canvas<Window>,
    texture_creator: TextureCreator<WindowContext>,
    texture: Texture,
    surfaces: GfxSurfaces,
    fullscreen: bool,
}

impl Display {
    /// Initializes the video subsystem, creates the window and allocates
    /// the frame surfaces and texture. Returns the display and the event
    /// pump for the frontend loop.
    pub fn init(config: &Config) -> Result<(Self, EventPump)> {
        let sdl = sdl2::init().map_err(VideoError::Init)?;
        let video = sdl.video().map_err(VideoError::Init)?;
        let event_pump = sdl.event_pump().map_err(VideoError::Init)?;

        let mut builder = video.window("rs9x", IMAGE_WIDTH as u32, IMAGE_HEIGHT as u32);
        builder.position_centered();
        if config.fullscreen {
            builder.fullscreen_desktop();
        }
        let window = builder.build()?;
        let canvas = window.into_canvas().build()?;
        let texture_creator = canvas.texture_creator();

        // The pointer is only useful with touchscreen controls.
        sdl.mouse().show_cursor(config.touchscreen_input);

        let texture = create_frame_texture(&texture_creator)?;
        let display = Self {
            _sdl: sdl,
            _video: video,
            canvas,
            texture_creator,
            texture,
            surfaces: GfxSurfaces::new(),
            fullscreen: config.fullscreen,
        };
        display.check_window_fit()?;

        tracing::info!(
            width = IMAGE_WIDTH,
            height = IMAGE_HEIGHT,
            fullscreen = display.fullscreen,
            "video initialized"
        );
        Ok((display, event_pump))
    }

    /// Queried once before the core renders a frame. The surfaces are
    /// valid from init onward, so this always affirms.
    pub fn begin_frame(&self) -> bool {
        true
    }

    pub fn surfaces(&self) -> &GfxSurfaces {
        &self.surfaces
    }

    pub fn surfaces_mut(&mut self) -> &mut GfxSurfaces {
        &mut self.surfaces
    }

    pub fn fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Uploads the rendered region of the screen surface through the
    /// streaming texture and presents it scaled to the window.
    pub fn present(&mut self, size: FrameSize) -> Result<()> {
        if size.width as usize > IMAGE_WIDTH || size.height as usize > IMAGE_HEIGHT {
            return Err(VideoError::OversizedFrame {
                width: size.width,
                height: size.height,
            });
        }

        let pitch = self.surfaces.pitch();
        let rendered = Rect::new(0, 0, size.width, size.height);
        let rows = &self.surfaces.screen[..size.height as usize * pitch];
        self.texture
            .update(rendered, rows, pitch)
            .map_err(|err| VideoError::Render(err.to_string()))?;

        self.canvas.clear();
        self.canvas
            .copy(&self.texture, rendered, None)
            .map_err(VideoError::Render)?;
        self.canvas.present();
        Ok(())
    }

    /// Switches between fullscreen and windowed mode. The surfaces and
    /// the texture are released and reallocated with identical sizing.
    pub fn toggle_fullscreen(&mut self) -> Result<()> {
        self.fullscreen = !self.fullscreen;
        let mode = if self.fullscreen {
            FullscreenType::Desktop
        } else {
            FullscreenType::Off
        };
        self.canvas
            .window_mut()
            .set_fullscreen(mode)
            .map_err(VideoError::Fullscreen)?;

        // Release, then acquire: nothing survives a mode switch.
        self.surfaces = GfxSurfaces::new();
        let texture = create_frame_texture(&self.texture_creator)?;
        let old = std::mem::replace(&mut self.texture, texture);
        // Safety: the old texture was created by our own texture creator,
        // which is still alive.
        unsafe { old.destroy() };

        self.check_window_fit()?;
        tracing::debug!(fullscreen = self.fullscreen, "video mode switched");
        Ok(())
    }

    /// Zeroes all four buffers without reallocating.
    pub fn reset_video(&mut self) {
        self.surfaces.reset();
    }

    /// Captures the presented frame to `screenshot-<N>.bmp` in the
    /// working directory.
    pub fn take_screenshot(&mut self) -> Result<PathBuf> {
        screenshot::capture(&self.canvas)
    }

    // The rendered image must fit inside the window we were given.
    fn check_window_fit(&self) -> Result<()> {
        let (window_width, window_height) =
            self.canvas.output_size().map_err(VideoError::Render)?;
        if IMAGE_WIDTH as u32 > window_width || IMAGE_HEIGHT as u32 > window_height {
            return Err(VideoError::OversizedFrame {
                width: IMAGE_WIDTH as u32,
                height: IMAGE_HEIGHT as u32,
            });
        }
        Ok(())
    }
}

/// RGB565 matches the core's sixteen-bit screen buffer, so scanlines
/// upload without conversion.
fn create_frame_texture(creator: &TextureCreator<WindowContext>) -> Result<Texture> {
    Ok(creator.create_texture_streaming(
        PixelFormatEnum::RGB565,
        IMAGE_WIDTH as u32,
        IMAGE_HEIGHT as u32,
    )?)
}
