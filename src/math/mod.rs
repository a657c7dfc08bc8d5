//! Mathematical utilities for colour averaging and matching

/// Colour averaging, distance and thresholding
pub mod color;
