//! Mosaic constants and runtime configuration defaults

/// Block length used when none is given
pub const DEFAULT_BLOCK_LENGTH: u32 = 10;

/// Number of nearest palette images considered when avoiding repetition
pub const DEFAULT_NO_REPETITION_CANDIDATES: usize = 10;

/// Channel mean above which a block turns white
pub const BLACK_WHITE_THRESHOLD: f64 = 127.5;

/// Fixed seed for reproducible random placement
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// Suffix added to mosaic output filenames
pub const OUTPUT_SUFFIX: &str = "_mosaic";
/// Suffix added to grid preview filenames
pub const GRID_SUFFIX: &str = "_grid";

/// File extensions accepted as source and palette images (lowercase)
pub const SUPPORTED_EXTENSIONS: &[&str] = &["bmp", "jpg", "jpeg", "png"];

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
