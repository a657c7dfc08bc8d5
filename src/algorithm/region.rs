//! Per-region passes shared by every mosaic engine
//!
//! A region is the list of canvas pixels that receive one colour: a clipped
//! square block, or one triangle of a block. Regions never contain pixels
//! outside the canvas.

use crate::math::color::{ColorAccumulator, black_or_white, channel_mean};
use crate::spatial::canvas::{Color, PixelCanvas};

/// Average colour of the region's pixels, or `None` for an empty region
pub fn average_region(canvas: &PixelCanvas, region: &[(u32, u32)]) -> Option<Color> {
    let mut accumulator = ColorAccumulator::new();
    accumulator.extend(region.iter().map(|&(x, y)| canvas.get(x, y)));
    accumulator.average()
}

/// Paint every pixel of the region with one colour
pub fn fill_region(canvas: &mut PixelCanvas, region: &[(u32, u32)], color: Color) {
    for &(x, y) in region {
        canvas.set(x, y, color);
    }
}

/// Replace the region with its average colour
///
/// Returns the colour written, or `None` when the region is empty and the
/// canvas was left alone.
pub fn average_and_fill(canvas: &mut PixelCanvas, region: &[(u32, u32)]) -> Option<Color> {
    let color = average_region(canvas, region)?;
    fill_region(canvas, region, color);
    Some(color)
}

/// Paint the region pure white or pure black from its average luminance
///
/// The average is recomputed from the canvas, so applying this twice gives
/// the same result as applying it once.
pub fn threshold_region(canvas: &mut PixelCanvas, region: &[(u32, u32)]) -> Option<Color> {
    let average = average_region(canvas, region)?;
    let color = black_or_white(average);
    log::trace!(
        "region of {} pixels has mean {:.1}, painting {color:?}",
        region.len(),
        channel_mean(average)
    );
    fill_region(canvas, region, color);
    Some(color)
}
