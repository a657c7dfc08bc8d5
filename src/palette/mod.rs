//! Palette images and the selection pools built over them

/// Palette entries with average colours and nearest-colour queries
pub mod index;
/// Draining pool for spreading selections evenly over the palette
pub mod pool;

pub use index::{PaletteEntry, PaletteId, PaletteIndex};
pub use pool::DrainingPool;
