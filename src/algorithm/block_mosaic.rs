//! Square block mosaics: every block becomes its average colour

use crate::algorithm::region::{average_and_fill, threshold_region};
use crate::spatial::blocks::{BlockLength, BlockPartitioner, MosaicShape};
use crate::spatial::canvas::{Color, PixelCanvas};

/// Replace every block of `canvas` with the block's average colour
///
/// Edge blocks are clipped to the canvas and averaged over the pixels they
/// actually cover. Returns the number of blocks painted.
pub fn generate_block_mosaic(canvas: &mut PixelCanvas, length: BlockLength) -> usize {
    for_each_region(canvas, length, MosaicShape::Square, average_and_fill)
}

/// Paint every block pure white or pure black from its average luminance
///
/// Meant to run on a canvas that was already turned into a block mosaic with
/// the same `length`, so block boundaries line up. Returns the number of
/// blocks painted.
pub fn convert_blocks_to_black_and_white(canvas: &mut PixelCanvas, length: BlockLength) -> usize {
    for_each_region(canvas, length, MosaicShape::Square, threshold_region)
}

/// Run `pass` over every non-empty region of every block, row by row
///
/// Returns how many regions `pass` reported as painted.
pub(crate) fn for_each_region<F>(
    canvas: &mut PixelCanvas,
    length: BlockLength,
    shape: MosaicShape,
    mut pass: F,
) -> usize
where
    F: FnMut(&mut PixelCanvas, &[(u32, u32)]) -> Option<Color>,
{
    let (width, height) = (canvas.width(), canvas.height());
    let partitioner = BlockPartitioner::new(width, height, length);
    let mut painted = 0;

    for block in partitioner.blocks() {
        for region in block.regions(shape, width, height) {
            if pass(canvas, &region).is_some() {
                painted += 1;
            }
        }
    }

    log::debug!(
        "{shape:?} pass over {width}x{height} with block length {length} painted {painted} regions"
    );
    painted
}
