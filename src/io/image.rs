//! Conversion between `image` buffers and pixel canvases, plus file codecs

use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::path::Path;

use crate::io::error::{MosaicError, Result, invalid_source_data};
use crate::spatial::blocks::BlockLength;
use crate::spatial::canvas::{ChannelOrder, PixelCanvas, RawImage};

/// Build a BGRA canvas from a decoded RGBA image
///
/// # Errors
///
/// Returns an error if the image buffer does not match its dimensions
pub fn canvas_from_rgba(image: &RgbaImage) -> Result<PixelCanvas> {
    let mut pixels = Vec::with_capacity(image.as_raw().len());
    for pixel in image.pixels() {
        let [r, g, b, a] = pixel.0;
        pixels.extend_from_slice(&[b, g, r, a]);
    }

    PixelCanvas::from_raw(RawImage {
        width: image.width(),
        height: image.height(),
        pixels,
        order: ChannelOrder::Bgra,
    })
}

/// Convert a canvas of any channel order into an RGBA image
///
/// # Errors
///
/// Returns an error if the canvas is too large to address
pub fn canvas_to_rgba(canvas: &PixelCanvas) -> Result<RgbaImage> {
    let (width, height) = (canvas.width(), canvas.height());
    let mut bytes = Vec::with_capacity(width as usize * height as usize * 4);
    for y in 0..height {
        for x in 0..width {
            let color = canvas.get(x, y);
            bytes.extend_from_slice(&[color.r, color.g, color.b, canvas.alpha(x, y)]);
        }
    }

    RgbaImage::from_raw(width, height, bytes)
        .ok_or_else(|| invalid_source_data(&format!("cannot address a {width}x{height} image")))
}

/// Decode an image file into a BGRA canvas
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded
pub fn load_canvas(path: &Path) -> Result<PixelCanvas> {
    let decoded = image::open(path).map_err(|e| MosaicError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    canvas_from_rgba(&decoded.to_rgba8())
}

/// Encode a canvas to a file, choosing the format from the extension
///
/// Formats without an alpha channel receive the colour channels only.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The format cannot be determined or the image cannot be written
pub fn save_canvas(canvas: &PixelCanvas, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let image = DynamicImage::ImageRgba8(canvas_to_rgba(canvas)?);
    let saved = match ImageFormat::from_path(path) {
        Ok(ImageFormat::Jpeg) => image.to_rgb8().save(path),
        _ => image.save(path),
    };

    saved.map_err(|e| MosaicError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Scale a canvas to a `side x side` square for use as a palette image
///
/// # Errors
///
/// Returns an error if the canvas cannot be converted for resampling
pub fn scale_square(canvas: &PixelCanvas, side: BlockLength) -> Result<PixelCanvas> {
    let source = canvas_to_rgba(canvas)?;
    let scaled = imageops::resize(&source, side.get(), side.get(), FilterType::Triangle);
    canvas_from_rgba(&scaled)
}
