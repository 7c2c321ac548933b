//! Writing rendered frames to image files.

use std::path::Path;

use anyhow::{bail, Context, Result};
use image::{GrayImage, ImageFormat};
use umbra_raycast::Frame;

/// Convert a frame into an 8-bit grayscale image.
pub fn frame_to_image(frame: &Frame) -> Result<GrayImage> {
    GrayImage::from_raw(frame.width, frame.height, frame.pixels.clone())
        .context("frame buffer does not match its dimensions")
}

/// Image format for an output path, from its extension.
///
/// Fails for extensions this build cannot encode.
pub fn output_format(path: &Path) -> Result<ImageFormat> {
    let format = ImageFormat::from_path(path)
        .with_context(|| format!("unsupported output format {}", path.display()))?;
    if !matches!(format, ImageFormat::Png | ImageFormat::Jpeg) {
        bail!(
            "unsupported output format {} (use .png or .jpg)",
            path.display()
        );
    }
    Ok(format)
}

/// Save a frame; the format follows the file extension (`.png`, `.jpg`).
pub fn save_frame(frame: &Frame, path: &Path) -> Result<()> {
    let format = output_format(path)?;
    let image = frame_to_image(frame)?;
    image
        .save_with_format(path, format)
        .with_context(|| format!("cannot write image {}", path.display()))?;
    Ok(())
}
