//! Palette images with precomputed average colours and nearest-colour lookup

use std::fmt;

use crate::io::error::{Result, invalid_parameter, invalid_state};
use crate::math::color::{average_color, manhattan_distance};
use crate::spatial::canvas::{Color, PixelCanvas};

/// Stable identifier of a palette image, unique within one index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PaletteId(usize);

impl PaletteId {
    /// Numeric value of the identifier
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for PaletteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One palette image, already scaled to the block size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    id: PaletteId,
    canvas: PixelCanvas,
    average: Color,
}

impl PaletteEntry {
    fn new(id: PaletteId, canvas: PixelCanvas) -> Self {
        let average = canvas_average(&canvas);
        Self {
            id,
            canvas,
            average,
        }
    }

    /// Identifier assigned when the image was added
    pub const fn id(&self) -> PaletteId {
        self.id
    }

    /// Scaled image stamped into mosaic blocks
    pub const fn canvas(&self) -> &PixelCanvas {
        &self.canvas
    }

    /// Average colour of the scaled image
    pub const fn average(&self) -> Color {
        self.average
    }
}

fn canvas_average(canvas: &PixelCanvas) -> Color {
    let (width, height) = (canvas.width(), canvas.height());
    average_color((0..height).flat_map(|y| (0..width).map(move |x| canvas.get(x, y))))
        .unwrap_or(Color::BLACK)
}

/// Ordered palette supporting nearest-colour queries
///
/// Queries are read-only; ties between equally distant entries go to the
/// one added first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaletteIndex {
    entries: Vec<PaletteEntry>,
    next_id: usize,
}

impl PaletteIndex {
    /// Create an empty palette
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Add an image that was already scaled to the block size
    ///
    /// # Errors
    ///
    /// Returns an error if the image has no pixels
    pub fn add_image(&mut self, canvas: PixelCanvas) -> Result<PaletteId> {
        ensure_not_empty(&canvas)?;
        let id = PaletteId(self.next_id);
        self.next_id += 1;
        self.entries.push(PaletteEntry::new(id, canvas));
        Ok(id)
    }

    /// Swap the backing image of an entry and recompute its average colour
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is unknown or the image has no pixels
    pub fn replace_image(&mut self, id: PaletteId, canvas: PixelCanvas) -> Result<()> {
        ensure_not_empty(&canvas)?;
        let entry = self
            .entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or_else(|| invalid_parameter("palette_id", &id, &"no such palette image"))?;
        *entry = PaletteEntry::new(id, canvas);
        Ok(())
    }

    /// Remove one entry, returning it if present
    pub fn remove(&mut self, id: PaletteId) -> Option<PaletteEntry> {
        let position = self.position(id)?;
        Some(self.entries.remove(position))
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// A palette holding only the given entries, in insertion order
    ///
    /// Identifiers are preserved; unknown ids are ignored.
    #[must_use]
    pub fn subset(&self, ids: &[PaletteId]) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|entry| ids.contains(&entry.id))
                .cloned()
                .collect(),
            next_id: self.next_id,
        }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the palette has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Entry with the given id
    pub fn get(&self, id: PaletteId) -> Option<&PaletteEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Insertion-order position of an entry
    pub fn position(&self, id: PaletteId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    /// Entry whose average colour is closest to `color`
    ///
    /// # Errors
    ///
    /// Returns an error if the palette is empty
    pub fn nearest_to(&self, color: Color) -> Result<&PaletteEntry> {
        self.entries
            .iter()
            .min_by_key(|entry| manhattan_distance(color, entry.average))
            .ok_or_else(|| invalid_state(&"no palette images available"))
    }

    /// Up to `n` entries ordered by distance to `color`, nearest first
    pub fn nearest_n_to(&self, color: Color, n: usize) -> Vec<&PaletteEntry> {
        let mut ranked: Vec<&PaletteEntry> = self.entries.iter().collect();
        // Stable sort keeps insertion order among equal distances
        ranked.sort_by_key(|entry| manhattan_distance(color, entry.average));
        ranked.truncate(n);
        ranked
    }
}

fn ensure_not_empty(canvas: &PixelCanvas) -> Result<()> {
    if canvas.width() == 0 || canvas.height() == 0 {
        return Err(invalid_parameter(
            "palette_image",
            &format!("{}x{}", canvas.width(), canvas.height()),
            &"palette images must contain at least one pixel",
        ));
    }
    Ok(())
}
