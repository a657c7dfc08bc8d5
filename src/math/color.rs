//! Colour arithmetic: averaging, distance and black/white thresholding

use crate::io::configuration::BLACK_WHITE_THRESHOLD;
use crate::spatial::canvas::Color;

/// Running per-channel sums for averaging a stream of colours
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorAccumulator {
    red: u64,
    green: u64,
    blue: u64,
    count: u64,
}

impl ColorAccumulator {
    /// Start with no samples
    pub const fn new() -> Self {
        Self {
            red: 0,
            green: 0,
            blue: 0,
            count: 0,
        }
    }

    /// Add one sample
    pub const fn push(&mut self, color: Color) {
        self.red += color.r as u64;
        self.green += color.g as u64;
        self.blue += color.b as u64;
        self.count += 1;
    }

    /// Number of samples seen so far
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Per-channel mean truncated toward zero, or `None` without samples
    pub const fn average(&self) -> Option<Color> {
        if self.count == 0 {
            return None;
        }
        // A mean of u8 samples always fits back into a u8
        Some(Color::new(
            (self.red / self.count) as u8,
            (self.green / self.count) as u8,
            (self.blue / self.count) as u8,
        ))
    }
}

impl Extend<Color> for ColorAccumulator {
    fn extend<I: IntoIterator<Item = Color>>(&mut self, iter: I) {
        for color in iter {
            self.push(color);
        }
    }
}

/// Mean colour of a set of samples, truncated per channel
///
/// An empty set has no mean; callers skip empty regions instead of averaging
/// them.
pub fn average_color<I: IntoIterator<Item = Color>>(colors: I) -> Option<Color> {
    let mut accumulator = ColorAccumulator::new();
    accumulator.extend(colors);
    accumulator.average()
}

/// Sum of absolute channel differences
pub const fn manhattan_distance(a: Color, b: Color) -> u32 {
    a.r.abs_diff(b.r) as u32 + a.g.abs_diff(b.g) as u32 + a.b.abs_diff(b.b) as u32
}

/// Mean of the three colour channels, from 0.0 to 255.0
pub fn channel_mean(color: Color) -> f64 {
    (f64::from(color.r) + f64::from(color.g) + f64::from(color.b)) / 3.0
}

/// White when the channel mean is above the midpoint, black otherwise
pub fn black_or_white(color: Color) -> Color {
    if channel_mean(color) > BLACK_WHITE_THRESHOLD {
        Color::WHITE
    } else {
        Color::BLACK
    }
}
