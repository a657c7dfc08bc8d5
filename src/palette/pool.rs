use bitvec::prelude::*;
use std::fmt;

use crate::io::error::{Result, invalid_state};
use crate::math::color::manhattan_distance;
use crate::palette::index::{PaletteEntry, PaletteIndex};
use crate::spatial::canvas::Color;

/// Draining view over a palette for "use images evenly" placement
///
/// Each selection removes the chosen entry. Once nothing is left the pool is
/// refilled from the full palette, so no image is skipped for more than one
/// cycle. Membership is tracked by insertion-order position.
#[derive(Clone, Debug)]
pub struct DrainingPool {
    available: BitVec,
    refills: usize,
}

impl DrainingPool {
    /// Create a full pool for a palette of `len` entries
    pub fn new(len: usize) -> Self {
        Self {
            available: bitvec![1; len],
            refills: 0,
        }
    }

    /// Test whether the entry at `position` can still be chosen
    pub fn contains(&self, position: usize) -> bool {
        self.available.get(position).as_deref() == Some(&true)
    }

    /// Number of entries left before the next refill
    pub fn remaining(&self) -> usize {
        self.available.count_ones()
    }

    /// Test if every entry has been used in the current cycle
    pub fn is_exhausted(&self) -> bool {
        self.available.not_any()
    }

    /// How many times the pool has been refilled
    pub const fn refills(&self) -> usize {
        self.refills
    }

    /// Make every entry available again
    pub fn refill(&mut self) {
        self.available.fill(true);
        self.refills += 1;
    }

    /// Take the available entry closest to `color`
    ///
    /// Refills first when the pool is exhausted. Ties go to the entry added
    /// first, matching [`PaletteIndex::nearest_to`].
    ///
    /// # Errors
    ///
    /// Returns an error if the palette is empty or does not match the pool size
    pub fn select<'a>(&mut self, palette: &'a PaletteIndex, color: Color) -> Result<&'a PaletteEntry> {
        if palette.is_empty() {
            return Err(invalid_state(&"no palette images available"));
        }
        if palette.len() != self.available.len() {
            return Err(invalid_state(&format!(
                "pool tracks {} images but the palette has {}",
                self.available.len(),
                palette.len()
            )));
        }
        if self.is_exhausted() {
            self.refill();
        }

        let (position, entry) = palette
            .entries()
            .iter()
            .enumerate()
            .filter(|(position, _)| self.contains(*position))
            .min_by_key(|(_, entry)| manhattan_distance(color, entry.average()))
            .ok_or_else(|| invalid_state(&"draining pool has no available images"))?;

        self.available.set(position, false);
        Ok(entry)
    }
}

impl fmt::Display for DrainingPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DrainingPool({}/{} available, {} refills)",
            self.remaining(),
            self.available.len(),
            self.refills
        )
    }
}
