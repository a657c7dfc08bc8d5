//! Palette placement strategies for picture mosaics

use rand::Rng;

use crate::palette::index::{PaletteEntry, PaletteId};

/// How palette images are chosen for each block of a picture mosaic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaletteMode {
    /// Always the image whose average colour is nearest to the block's
    #[default]
    Default,
    /// Nearest image among those not yet used in the current cycle
    UseEvenly,
    /// Random pick among the nearest images, excluding adjacent blocks' images
    NoRepetition,
}

/// Block-grid offsets `(column, row)` of the four adjacent blocks: up, down, left, right
pub const NEIGHBOR_OFFSETS: [(isize, isize); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Pick an entry that differs from every neighbouring block's image
///
/// `ranked` is the palette ordered nearest-first. The first `candidates`
/// entries that are not neighbours are chosen from uniformly at random. When
/// neighbours use up all of them, the nearest non-neighbour beyond that window
/// is taken; when every palette image is a neighbour, repetition is allowed and
/// the nearest entry wins. Returns `None` only for an empty ranking.
pub fn choose_avoiding_neighbors<'a, R: Rng + ?Sized>(
    ranked: &[&'a PaletteEntry],
    candidates: usize,
    neighbors: &[PaletteId],
    rng: &mut R,
) -> Option<&'a PaletteEntry> {
    let window = candidates.min(ranked.len());
    let (top, rest) = ranked.split_at(window);

    let allowed: Vec<&'a PaletteEntry> = top
        .iter()
        .copied()
        .filter(|entry| !neighbors.contains(&entry.id()))
        .collect();

    if !allowed.is_empty() {
        let pick = rng.random_range(0..allowed.len());
        return allowed.get(pick).copied();
    }

    rest.iter()
        .copied()
        .find(|entry| !neighbors.contains(&entry.id()))
        .or_else(|| ranked.first().copied())
}
