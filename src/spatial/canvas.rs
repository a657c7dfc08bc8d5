//! Flat pixel buffers with bounds-checked colour access
//!
//! A canvas is the unit every engine works on: decoded images arrive as a
//! [`RawImage`], become a [`PixelCanvas`], get mutated in place, and leave
//! again as a [`RawImage`] for an external encoder.

use crate::io::error::{Result, invalid_source_data};

/// An opaque RGB colour; alpha is never compared or averaged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Pure black, also the value read from outside a canvas
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure white
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Build a colour from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Byte layout of one pixel inside a raw buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelOrder {
    /// Blue, green, red, alpha (the layout platform decoders hand out)
    #[default]
    Bgra,
    /// Red, green, blue, alpha
    Rgba,
    /// Blue, green, red
    Bgr,
    /// Red, green, blue
    Rgb,
}

impl ChannelOrder {
    /// Number of bytes per pixel
    pub const fn channels(self) -> usize {
        match self {
            Self::Bgra | Self::Rgba => 4,
            Self::Bgr | Self::Rgb => 3,
        }
    }

    /// Byte positions of red, green and blue within one pixel
    const fn rgb_positions(self) -> [usize; 3] {
        match self {
            Self::Bgra | Self::Bgr => [2, 1, 0],
            Self::Rgba | Self::Rgb => [0, 1, 2],
        }
    }

    const fn has_alpha(self) -> bool {
        self.channels() == 4
    }
}

/// Decoded image as exchanged with the external decoder/encoder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImage {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Row-major pixel bytes
    pub pixels: Vec<u8>,
    /// Layout of each pixel in `pixels`
    pub order: ChannelOrder,
}

/// Owned pixel buffer with width, height and channel layout
///
/// Pixel `(x, y)` lives at byte offset `(y * width + x) * channels`. Reads
/// outside the canvas return [`Color::BLACK`] and writes outside it are
/// ignored, so edge blocks can be walked without special casing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelCanvas {
    width: u32,
    height: u32,
    order: ChannelOrder,
    pixels: Vec<u8>,
}

impl PixelCanvas {
    /// Create an opaque black canvas
    pub fn new(width: u32, height: u32, order: ChannelOrder) -> Self {
        Self::filled(width, height, order, Color::BLACK)
    }

    /// Create an opaque canvas where every pixel has the same colour
    pub fn filled(width: u32, height: u32, order: ChannelOrder, color: Color) -> Self {
        let channels = order.channels();
        let mut pixel = vec![u8::MAX; channels];
        let [r, g, b] = order.rgb_positions();
        for (position, value) in [(r, color.r), (g, color.g), (b, color.b)] {
            if let Some(byte) = pixel.get_mut(position) {
                *byte = value;
            }
        }

        let pixel_count = width as usize * height as usize;
        Self {
            width,
            height,
            order,
            pixels: pixel.repeat(pixel_count),
        }
    }

    /// Wrap a decoded image, checking that its buffer matches its geometry
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer length differs from
    /// `width * height * channels`
    pub fn from_raw(raw: RawImage) -> Result<Self> {
        let expected = (raw.width as usize)
            .checked_mul(raw.height as usize)
            .and_then(|count| count.checked_mul(raw.order.channels()))
            .ok_or_else(|| {
                invalid_source_data(&format!(
                    "{}x{} image overflows the address space",
                    raw.width, raw.height
                ))
            })?;

        if raw.pixels.len() != expected {
            return Err(invalid_source_data(&format!(
                "expected {expected} bytes for a {}x{} image, got {}",
                raw.width,
                raw.height,
                raw.pixels.len()
            )));
        }

        Ok(Self {
            width: raw.width,
            height: raw.height,
            order: raw.order,
            pixels: raw.pixels,
        })
    }

    /// Hand the buffer back in its exchange shape
    pub fn into_raw(self) -> RawImage {
        RawImage {
            width: self.width,
            height: self.height,
            pixels: self.pixels,
            order: self.order,
        }
    }

    /// Width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Pixel layout of the underlying buffer
    pub const fn order(&self) -> ChannelOrder {
        self.order
    }

    /// Raw pixel bytes in row-major order
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Whether `(x, y)` addresses a pixel of this canvas
    pub const fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Byte offset of pixel `(x, y)`, or `None` outside the canvas
    pub const fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if self.contains(x, y) {
            Some((y as usize * self.width as usize + x as usize) * self.order.channels())
        } else {
            None
        }
    }

    /// Colour at `(x, y)`; black outside the canvas
    pub fn get(&self, x: u32, y: u32) -> Color {
        let Some(offset) = self.offset(x, y) else {
            return Color::BLACK;
        };
        let [r, g, b] = self.order.rgb_positions();
        let channel = |position: usize| self.pixels.get(offset + position).copied().unwrap_or(0);

        Color::new(channel(r), channel(g), channel(b))
    }

    /// Overwrite the colour channels at `(x, y)`, leaving alpha untouched
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let Some(offset) = self.offset(x, y) else {
            return;
        };
        let [r, g, b] = self.order.rgb_positions();
        for (position, value) in [(r, color.r), (g, color.g), (b, color.b)] {
            if let Some(byte) = self.pixels.get_mut(offset + position) {
                *byte = value;
            }
        }
    }

    /// Alpha at `(x, y)`; fully opaque for layouts without alpha
    pub fn alpha(&self, x: u32, y: u32) -> u8 {
        if !self.order.has_alpha() {
            return u8::MAX;
        }
        self.offset(x, y)
            .and_then(|offset| self.pixels.get(offset + 3).copied())
            .unwrap_or(u8::MAX)
    }
}
