//! Picture mosaics: every block becomes the palette image nearest its colour

use std::collections::HashMap;

use ndarray::Array2;
use rand::Rng;

use crate::algorithm::placement::{NEIGHBOR_OFFSETS, PaletteMode, choose_avoiding_neighbors};
use crate::algorithm::region::average_region;
use crate::io::error::{Result, invalid_parameter, invalid_state};
use crate::palette::index::{PaletteEntry, PaletteId, PaletteIndex};
use crate::palette::pool::DrainingPool;
use crate::spatial::blocks::{Block, BlockLength, BlockPartitioner};
use crate::spatial::canvas::PixelCanvas;

/// Which palette image ended up in each block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementReport {
    /// Stamped entry per block, indexed by `[row, column]`
    assignments: Array2<Option<PaletteId>>,
    /// Times the "use evenly" pool ran dry and was refilled
    refills: usize,
}

impl PlacementReport {
    /// Entry stamped into the block at a grid position
    pub fn assignment(&self, column: usize, row: usize) -> Option<PaletteId> {
        self.assignments.get([row, column]).copied().flatten()
    }

    /// All assignments indexed by `[row, column]`
    pub const fn assignments(&self) -> &Array2<Option<PaletteId>> {
        &self.assignments
    }

    /// Number of blocks that received an image
    pub fn placed(&self) -> usize {
        self.assignments.iter().flatten().count()
    }

    /// Number of pool refills during a "use evenly" pass
    pub const fn refills(&self) -> usize {
        self.refills
    }

    /// How often each palette image was used
    pub fn usage_counts(&self) -> HashMap<PaletteId, usize> {
        let mut counts = HashMap::new();
        for id in self.assignments.iter().flatten() {
            *counts.entry(*id).or_insert(0) += 1;
        }
        counts
    }
}

/// Copy a palette image into a block, clipped to the canvas
///
/// Palette pixel `(dx, dy)` lands on canvas pixel `(block.x + dx, block.y + dy)`.
pub fn stamp_entry(canvas: &mut PixelCanvas, block: &Block, entry: &PaletteEntry) {
    let image = entry.canvas();
    for (x, y) in block.pixels(canvas.width(), canvas.height()) {
        let color = image.get(x.saturating_sub(block.x), y.saturating_sub(block.y));
        canvas.set(x, y, color);
    }
}

/// Stamp a palette image into every block of `canvas`, row by row
///
/// Each block's average colour is taken from the canvas as it stands when the
/// block is reached. `candidates` is only consulted in
/// [`PaletteMode::NoRepetition`].
///
/// # Errors
///
/// Returns an error if:
/// - The palette is empty
/// - `candidates` is zero in no-repetition mode
pub fn generate_picture_mosaic<R: Rng + ?Sized>(
    canvas: &mut PixelCanvas,
    length: BlockLength,
    palette: &PaletteIndex,
    mode: PaletteMode,
    candidates: usize,
    rng: &mut R,
) -> Result<PlacementReport> {
    if palette.is_empty() {
        return Err(invalid_state(&"no palette images available"));
    }
    if mode == PaletteMode::NoRepetition && candidates == 0 {
        return Err(invalid_parameter(
            "no_repetition_candidates",
            &candidates,
            &"at least one candidate must be considered",
        ));
    }

    let (width, height) = (canvas.width(), canvas.height());
    let partitioner = BlockPartitioner::new(width, height, length);
    let mut assignments = Array2::from_elem((partitioner.rows(), partitioner.columns()), None);
    let mut pool = DrainingPool::new(palette.len());

    for block in partitioner.blocks() {
        let pixels = block.pixels(width, height);
        let Some(color) = average_region(canvas, &pixels) else {
            continue;
        };

        let entry = match mode {
            PaletteMode::Default => palette.nearest_to(color)?,
            PaletteMode::UseEvenly => pool.select(palette, color)?,
            PaletteMode::NoRepetition => {
                let neighbors = neighbor_images(canvas, palette, &partitioner, &block, &assignments);
                let ranked = palette.nearest_n_to(color, palette.len());
                choose_avoiding_neighbors(&ranked, candidates, &neighbors, rng)
                    .ok_or_else(|| invalid_state(&"no palette images available"))?
            }
        };

        stamp_entry(canvas, &block, entry);
        if let Some(slot) = assignments.get_mut([block.row(), block.column()]) {
            *slot = Some(entry.id());
        }
    }

    log::debug!(
        "{mode:?} picture mosaic over {width}x{height} used {} palette images, {} pool refills",
        palette.len(),
        pool.refills()
    );

    Ok(PlacementReport {
        assignments,
        refills: pool.refills(),
    })
}

/// Images in the four adjacent blocks
///
/// Blocks stamped earlier in the pass report their recorded image; blocks not
/// reached yet report the image the nearest-colour match would pick for them
/// now. Blocks outside the canvas contribute nothing.
fn neighbor_images(
    canvas: &PixelCanvas,
    palette: &PaletteIndex,
    partitioner: &BlockPartitioner,
    block: &Block,
    assignments: &Array2<Option<PaletteId>>,
) -> Vec<PaletteId> {
    NEIGHBOR_OFFSETS
        .iter()
        .filter_map(|&(d_column, d_row)| partitioner.neighbor(block, d_column, d_row))
        .filter_map(|neighbor| {
            if let Some(id) = assignments
                .get([neighbor.row(), neighbor.column()])
                .copied()
                .flatten()
            {
                return Some(id);
            }
            let pixels = neighbor.pixels(canvas.width(), canvas.height());
            let color = average_region(canvas, &pixels)?;
            palette.nearest_to(color).ok().map(PaletteEntry::id)
        })
        .collect()
}
