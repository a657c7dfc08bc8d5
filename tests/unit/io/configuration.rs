//! Tests for mosaic configuration constants

#[cfg(test)]
mod tests {
    use mosaicmaker::io::configuration::{
        BLACK_WHITE_THRESHOLD, DEFAULT_BLOCK_LENGTH, DEFAULT_NO_REPETITION_CANDIDATES,
        DEFAULT_SEED, GRID_SUFFIX, MAX_INDIVIDUAL_PROGRESS_BARS, OUTPUT_SUFFIX,
        SUPPORTED_EXTENSIONS,
    };

    // Tests generation defaults
    #[test]
    fn test_generation_defaults() {
        assert_eq!(DEFAULT_BLOCK_LENGTH, 10);
        assert_eq!(DEFAULT_NO_REPETITION_CANDIDATES, 10);
        assert_eq!(DEFAULT_SEED, 42);
    }

    // Tests the threshold sits at the channel midpoint
    #[test]
    fn test_black_white_threshold() {
        assert!((BLACK_WHITE_THRESHOLD - 127.5).abs() < f64::EPSILON);
    }

    // Tests output suffixes differ so outputs never overwrite each other
    #[test]
    fn test_output_suffixes() {
        assert_eq!(OUTPUT_SUFFIX, "_mosaic");
        assert_eq!(GRID_SUFFIX, "_grid");
        assert_ne!(OUTPUT_SUFFIX, GRID_SUFFIX);
    }

    // Tests extensions are lowercase and cover the supported codecs
    #[test]
    fn test_supported_extensions() {
        assert_eq!(SUPPORTED_EXTENSIONS, &["bmp", "jpg", "jpeg", "png"]);
        assert!(
            SUPPORTED_EXTENSIONS
                .iter()
                .all(|extension| extension.chars().all(|c| c.is_ascii_lowercase()))
        );
    }

    // Tests progress bar threshold
    #[test]
    fn test_progress_bar_threshold() {
        assert_eq!(MAX_INDIVIDUAL_PROGRESS_BARS, 5);
    }
}
