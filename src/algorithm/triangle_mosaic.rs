//! Triangle mosaics: every block is split into two right triangles
//!
//! The diagonal runs from the top-left to the bottom-right corner of a block.
//! The lower triangle is the upper-right half strictly off that diagonal,
//! built column by column with a ramp that starts at zero pixels. The upper
//! triangle is the lower-left half including the diagonal, built row by row
//! with a ramp that starts at one pixel. Each triangle is averaged and
//! painted independently.

use crate::algorithm::block_mosaic::for_each_region;
use crate::algorithm::region::{average_and_fill, threshold_region};
use crate::spatial::blocks::{BlockLength, MosaicShape};
use crate::spatial::canvas::PixelCanvas;

/// Replace both triangles of every block with their own average colours
///
/// Returns the number of triangles painted; triangles clipped away entirely
/// at the canvas edge are skipped.
pub fn generate_triangle_mosaic(canvas: &mut PixelCanvas, length: BlockLength) -> usize {
    for_each_region(canvas, length, MosaicShape::Triangle, average_and_fill)
}

/// Threshold each triangle to pure white or pure black independently
pub fn convert_triangles_to_black_and_white(canvas: &mut PixelCanvas, length: BlockLength) -> usize {
    for_each_region(canvas, length, MosaicShape::Triangle, threshold_region)
}
