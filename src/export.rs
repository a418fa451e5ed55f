use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::RgbaImage;
use thiserror::Error;

use crate::pixel::TextureBuffer;

/// Errors that can occur while writing a texture to disk
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Pixel buffer of {len} bytes does not fit a {side}x{side} image")]
    BufferSize { side: u32, len: usize },
}

/// Convert a texture into an `image` RGBA buffer with straight alpha
pub fn to_image(texture: &TextureBuffer) -> Result<RgbaImage, ExportError> {
    let side = texture.side();
    let bytes = texture.to_bytes();
    let len = bytes.len();
    RgbaImage::from_raw(side, side, bytes).ok_or(ExportError::BufferSize { side, len })
}

/// Save the texture as a PNG; the format is taken from the file extension
///
/// # Arguments
/// * `texture` - The generated planet texture
/// * `path` - Output file path
pub fn save_png(texture: &TextureBuffer, path: &Path) -> Result<(), ExportError> {
    to_image(texture)?.save(path)?;
    Ok(())
}

/// Dump the raw r,g,b,a byte stream with no header
pub fn save_raw(texture: &TextureBuffer, path: &Path) -> Result<(), ExportError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(texture.as_bytes())?;
    writer.flush()?;
    Ok(())
}
