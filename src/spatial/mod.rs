//! Spatial data structures for pixel canvases
//!
//! This module contains spatial-related functionality including:
//! - Pixel buffers with bounds-checked access
//! - Block grid geometry for square and triangle mosaics
//! - Grid overlays for previewing a block layout

/// Block grid geometry and block length validation
pub mod blocks;
/// Pixel buffers and colours
pub mod canvas;
/// Square and triangle grid overlays
pub mod grid;

pub use blocks::{Block, BlockLength, BlockPartitioner, MosaicShape};
pub use canvas::{ChannelOrder, Color, PixelCanvas, RawImage};
