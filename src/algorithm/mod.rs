/// Square block mosaics and their black and white conversion
pub mod block_mosaic;
/// Engine state machine and generation settings
pub mod executor;
/// Picture mosaics stamped from a palette
pub mod picture_mosaic;
/// Palette placement strategies and neighbour exclusion
pub mod placement;
/// Per-region average, fill and threshold passes
pub mod region;
/// Triangle mosaics and their black and white conversion
pub mod triangle_mosaic;

pub use executor::{EngineState, MosaicConfig, MosaicEngine};
pub use placement::PaletteMode;
