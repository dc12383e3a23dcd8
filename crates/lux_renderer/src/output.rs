//! Writing rendered images to disk.
//!
//! Two HDR formats are supported, picked by file extension:
//! - `.pfm` Portable Float Map, written directly
//! - `.exr` OpenEXR, encoded by the `image` crate

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::{ImageFormat, Rgb32FImage};
use thiserror::Error;

use crate::ImageBuffer;

/// Errors that can occur while saving an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unsupported output format: \"{0}\" (expected .pfm or .exr)")]
    UnsupportedFormat(String),

    #[error("Pixel buffer does not match a {0}x{1} image")]
    InvalidBuffer(u32, u32),
}

/// Save an image, choosing the format from the file extension.
pub fn save_image(image: &ImageBuffer, path: &Path) -> Result<(), OutputError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "pfm" => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_pfm(image, &mut writer)?;
            writer.flush()?;
        }
        "exr" => save_exr(image, path)?,
        _ => return Err(OutputError::UnsupportedFormat(path.display().to_string())),
    }

    log::info!("HDR image saved: {} ({}x{})", path.display(), image.width, image.height);
    Ok(())
}

/// Encode an image as a little-endian colour PFM.
///
/// PFM stores scanlines bottom to top.
pub fn write_pfm<W: Write>(image: &ImageBuffer, writer: &mut W) -> Result<(), OutputError> {
    write!(writer, "PF\n{} {}\n-1.0\n", image.width, image.height)?;

    for y in (0..image.height).rev() {
        for x in 0..image.width {
            for channel in image.get(x, y).to_array() {
                writer.write_all(&channel.to_le_bytes())?;
            }
        }
    }

    Ok(())
}

fn save_exr(image: &ImageBuffer, path: &Path) -> Result<(), OutputError> {
    let raw: Vec<f32> = image.pixels.iter().flat_map(|color| color.to_array()).collect();
    let buffer = Rgb32FImage::from_raw(image.width, image.height, raw)
        .ok_or(OutputError::InvalidBuffer(image.width, image.height))?;

    buffer.save_with_format(path, ImageFormat::OpenExr)?;
    Ok(())
}
