//! Block, triangle and picture mosaic generation over decoded pixel buffers
//!
//! A source image is laid out as a grid of fixed-size blocks. Each block is
//! replaced by its average colour, by two independently averaged triangles,
//! or by the palette image whose average colour is closest to the block's.
//! Decoding and encoding stay at the edges in [`io`]; the engines only ever
//! see a [`spatial::PixelCanvas`].

#![forbid(unsafe_code)]

/// Mosaic engines, placement strategies and the generation state machine
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Colour averaging and distance utilities
pub mod math;
/// Palette images and selection pools
pub mod palette;
/// Pixel canvases, block geometry and grid overlays
pub mod spatial;

pub use io::error::{MosaicError, Result};
