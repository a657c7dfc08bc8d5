//! Grid overlays for previewing a block layout
//!
//! Overlays are drawn on a copy of the source; the canvas passed in is never
//! modified, so mosaic generation always sees the undecorated image.

use crate::spatial::blocks::{BlockLength, BlockPartitioner, MosaicShape};
use crate::spatial::canvas::{Color, PixelCanvas};

/// Colour of every grid line
pub const GRID_LINE_COLOR: Color = Color::WHITE;

/// Draw the grid for `shape` on a copy of `source`
pub fn draw_grid(source: &PixelCanvas, length: BlockLength, shape: MosaicShape) -> PixelCanvas {
    match shape {
        MosaicShape::Square => draw_square_grid(source, length),
        MosaicShape::Triangle => draw_triangle_grid(source, length),
    }
}

/// Copy `source` and paint a white line along every block edge
///
/// Lines sit on rows and columns that are multiples of `length` and span the
/// whole canvas.
pub fn draw_square_grid(source: &PixelCanvas, length: BlockLength) -> PixelCanvas {
    let mut preview = source.clone();
    paint_square_lines(&mut preview, length);
    preview
}

/// Copy `source` and paint the square grid plus one diagonal per block
///
/// The diagonal runs from each block's top-left corner towards its
/// bottom-right corner, one pixel per row.
pub fn draw_triangle_grid(source: &PixelCanvas, length: BlockLength) -> PixelCanvas {
    let mut preview = source.clone();
    paint_square_lines(&mut preview, length);

    let (width, height) = (preview.width(), preview.height());
    let blocks: Vec<_> = BlockPartitioner::new(width, height, length)
        .blocks()
        .collect();
    for block in blocks {
        for step in 0..block.length {
            let (Some(x), Some(y)) = (block.x.checked_add(step), block.y.checked_add(step)) else {
                break;
            };
            if !preview.contains(x, y) {
                break;
            }
            preview.set(x, y, GRID_LINE_COLOR);
        }
    }

    preview
}

fn paint_square_lines(canvas: &mut PixelCanvas, length: BlockLength) {
    let (width, height) = (canvas.width(), canvas.height());
    let step = length.get() as usize;

    for y in (0..height).step_by(step) {
        for x in 0..width {
            canvas.set(x, y, GRID_LINE_COLOR);
        }
    }

    for x in (0..width).step_by(step) {
        for y in 0..height {
            canvas.set(x, y, GRID_LINE_COLOR);
        }
    }
}
