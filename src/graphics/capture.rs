//! Saving the framebuffer to a PNG.

use std::ffi::c_void;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use gl;
use gl::types::*;
use image::{ImageBuffer, Rgb};
use tracing::{error, info};

use crate::error::GlcError;

const CHANNELS: usize = 3;

/// Swaps the rows of a tightly packed RGB image top-to-bottom. OpenGL hands pixels back starting
/// from the bottom row, image files start from the top.
pub fn flip_vertically(width: usize, height: usize, data: &mut [u8]) {
    let row = width * CHANNELS;

    for y in 0..height / 2 {
        let bottom = height - y - 1;
        let (upper, lower) = data.split_at_mut(bottom * row);
        upper[y * row..(y + 1) * row].swap_with_slice(&mut lower[..row]);
    }
}

/// File name for a screenshot taken at `time`, e.g. `20240309_070502.png`.
pub fn screenshot_basename(time: &NaiveDateTime) -> String {
    time.format("%Y%m%d_%H%M%S.png").to_string()
}

/// Reads back whatever is inside the current viewport and writes it to `path` as a PNG.
pub fn save_screenshot(path: &Path) -> Result<(), GlcError> {
    let mut viewport = [0 as GLint; 4];
    unsafe {
        gl::GetIntegerv(gl::VIEWPORT, viewport.as_mut_ptr());
    }

    let [x, y, width, height] = viewport;
    if width <= 0 || height <= 0 {
        return Err(GlcError::EmptyFramebuffer { width, height });
    }

    let (w, h) = (width as usize, height as usize);
    let mut data = vec![0u8; w * h * CHANNELS];

    unsafe {
        gl::PixelStorei(gl::PACK_ALIGNMENT, 1);
        gl::ReadPixels(
            x,
            y,
            width,
            height,
            gl::RGB,
            gl::UNSIGNED_BYTE,
            data.as_mut_ptr() as *mut c_void,
        );
    }

    flip_vertically(w, h, &mut data);

    let img: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_raw(width as u32, height as u32, data)
        .ok_or(GlcError::EmptyFramebuffer { width, height })?;

    img.save(path).map_err(|source| GlcError::Image {
        path: path.to_path_buf(),
        source,
    })
}

/// Saves a timestamped screenshot into `dir`, creating it if needed. Returns the path written.
/// Failures are logged, never fatal.
pub fn capture_screenshot(dir: &Path) -> Option<PathBuf> {
    let path = dir.join(screenshot_basename(&Local::now().naive_local()));

    let saved = fs::create_dir_all(dir)
        .map_err(|source| GlcError::Io { path: dir.to_path_buf(), source })
        .and_then(|_| save_screenshot(&path));

    match saved {
        Ok(()) => {
            info!("Successfully Saved Image: {}", path.display());
            Some(path)
        }
        Err(e) => {
            error!("Failed Saving Image: {}: {}", path.display(), e);
            None
        }
    }
}
