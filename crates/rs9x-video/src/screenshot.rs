//! Screenshot capture
//!
//! Reads the presented frame back from the renderer and writes it as a
//! BMP in the working directory. The filename counter only lives for the
//! process; a new run starts over at zero.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};

use sdl2::pixels::PixelFormatEnum;
use sdl2::render::Canvas;
use sdl2::surface::Surface;
use sdl2::video::Window;

use crate::error::{Result, VideoError};

static COUNTER: AtomicU32 = AtomicU32::new(0);

/// Allocates the next screenshot filename. Every capture attempt consumes
/// a number, successful or not, so names never collide within a run.
fn next_path() -> PathBuf {
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    PathBuf::from(format!("screenshot-{n}.bmp"))
}

pub(crate) fn capture(canvas: &Canvas<Window>) -> Result<PathBuf> {
    let path = next_path();

    let (width, height) = canvas.output_size().map_err(VideoError::Screenshot)?;
    // read_pixels repacks rows tightly, so the surface pitch is exact.
    let mut pixels = canvas
        .read_pixels(None, PixelFormatEnum::ARGB8888)
        .map_err(VideoError::Screenshot)?;
    let surface = Surface::from_data(
        &mut pixels,
        width,
        height,
        width * 4,
        PixelFormatEnum::ARGB8888,
    )
    .map_err(VideoError::Screenshot)?;
    surface.save_bmp(&path).map_err(VideoError::Screenshot)?;

    tracing::info!(path = %path.display(), "wrote screenshot");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(path: &std::path::Path) -> u32 {
        let name = path.file_name().unwrap().to_str().unwrap();
        name.strip_prefix("screenshot-")
            .and_then(|rest| rest.strip_suffix(".bmp"))
            .unwrap()
            .parse()
            .unwrap()
    }

    #[test]
    fn test_filenames_strictly_increase() {
        let first = number(&next_path());
        let second = number(&next_path());
        let third = number(&next_path());
        assert!(first < second && second < third);
    }
}
