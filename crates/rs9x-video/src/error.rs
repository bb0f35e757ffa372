//! Error types for the display driver

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VideoError {
    #[error("video subsystem init failed: {0}")]
    Init(String),

    #[error("window creation failed: {0}")]
    Window(#[from] sdl2::video::WindowBuildError),

    #[error("renderer creation failed: {0}")]
    Renderer(#[from] sdl2::IntegerOrSdlError),

    #[error("texture creation failed: {0}")]
    Texture(#[from] sdl2::render::TextureValueError),

    #[error("fullscreen switch failed: {0}")]
    Fullscreen(String),

    #[error("render failed: {0}")]
    Render(String),

    #[error("rendered image {width}x{height} is larger than the window")]
    OversizedFrame { width: u32, height: u32 },

    #[error("screenshot failed: {0}")]
    Screenshot(String),
}

/// Result type alias for display operations.
pub type Result<T> = std::result::Result<T, VideoError>;
