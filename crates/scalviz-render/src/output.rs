//! Atomic raster output.
//!
//! Images are encoded to a sibling `<name>.partial` file and renamed
//! over the destination only after encoding succeeds.

use std::fs;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbImage};
use scalviz_types::{ScalvizError, ScalvizResult};

/// Wraps a codec error with the file it concerns.
pub(crate) fn image_error(path: &Path, err: impl std::fmt::Display) -> ScalvizError {
    ScalvizError::Image {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

/// Builds an RGB image from a raw plotters buffer.
pub(crate) fn rgb_from_buffer(
    buffer: Vec<u8>,
    (width, height): (u32, u32),
    path: &Path,
) -> ScalvizResult<RgbImage> {
    RgbImage::from_raw(width, height, buffer)
        .ok_or_else(|| image_error(path, "canvas buffer does not match its dimensions"))
}

/// Writes `image` to `path` via a temporary file and rename.
///
/// The encoding is chosen from the destination extension, PNG otherwise.
pub fn write_atomic(image: &RgbImage, path: &Path) -> ScalvizResult<()> {
    let format = ImageFormat::from_path(path).unwrap_or(ImageFormat::Png);
    let partial = partial_path(path)?;

    if let Err(e) = image.save_with_format(&partial, format) {
        let _ = fs::remove_file(&partial);
        return Err(image_error(path, e));
    }
    if let Err(e) = fs::rename(&partial, path) {
        let _ = fs::remove_file(&partial);
        return Err(e.into());
    }
    Ok(())
}

fn partial_path(path: &Path) -> ScalvizResult<PathBuf> {
    let mut name = path
        .file_name()
        .ok_or_else(|| image_error(path, "output path has no file name"))?
        .to_os_string();
    name.push(".partial");
    Ok(path.with_file_name(name))
}
