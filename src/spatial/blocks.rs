//! Block geometry: the fixed-size grid laid over a canvas
//!
//! Blocks are generated row by row from the top-left corner. The last block
//! of each row and column is clipped to the canvas, so a full partition
//! covers every pixel exactly once and never reaches outside the canvas.

use std::fmt;

use crate::io::configuration::DEFAULT_BLOCK_LENGTH;
use crate::io::error::{Result, invalid_parameter};

/// Shape of the cells a mosaic is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MosaicShape {
    /// One square region per block
    #[default]
    Square,
    /// Two right triangles per block, split along the block diagonal
    Triangle,
}

/// Side length of a block in pixels; always positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockLength(u32);

impl BlockLength {
    /// The block length used when none is configured
    pub const DEFAULT: Self = Self(DEFAULT_BLOCK_LENGTH);

    /// Validate a requested block length
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is zero, negative or larger than `u32::MAX`
    pub fn new(value: i64) -> Result<Self> {
        if value <= 0 {
            return Err(invalid_parameter(
                "block_length",
                &value,
                &"block length must be positive",
            ));
        }
        u32::try_from(value).map(Self).map_err(|_overflow| {
            invalid_parameter("block_length", &value, &"block length exceeds u32::MAX")
        })
    }

    /// Length in pixels
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for BlockLength {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for BlockLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One cell of the block grid, identified by its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    /// Left edge in canvas pixels
    pub x: u32,
    /// Top edge in canvas pixels
    pub y: u32,
    /// Side length of the unclipped block
    pub length: u32,
}

impl Block {
    /// Column of this block in the block grid
    pub const fn column(&self) -> usize {
        match self.x.checked_div(self.length) {
            Some(column) => column as usize,
            None => 0,
        }
    }

    /// Row of this block in the block grid
    pub const fn row(&self) -> usize {
        match self.y.checked_div(self.length) {
            Some(row) => row as usize,
            None => 0,
        }
    }

    /// Every pixel of the block that lies inside a `width x height` canvas
    pub fn pixels(&self, width: u32, height: u32) -> Vec<(u32, u32)> {
        let Self { x, y, length } = *self;
        let x_end = x.saturating_add(length).min(width);
        let y_end = y.saturating_add(length).min(height);

        (y..y_end)
            .flat_map(|py| (x..x_end).map(move |px| (px, py)))
            .collect()
    }

    /// Upper-right half of the block, built column by column, clipped to the canvas
    ///
    /// Column `dx` of the block contributes its first `dx` rows, so the first
    /// column is empty and the ramp grows by one pixel per column. Both ramps
    /// are clipped to the canvas before iterating.
    pub fn lower_triangle(&self, width: u32, height: u32) -> Vec<(u32, u32)> {
        let (x_span, y_span) = self.visible_span(width, height);
        let Self { x, y, .. } = *self;

        (0..x_span)
            .flat_map(|dx| (0..dx.min(y_span)).map(move |dy| (x + dx, y + dy)))
            .collect()
    }

    /// Lower-left half of the block including the diagonal, built row by row,
    /// clipped to the canvas
    ///
    /// Row `dy` of the block contributes its first `dy + 1` columns. Together
    /// with [`Block::lower_triangle`] this covers the block exactly once.
    pub fn upper_triangle(&self, width: u32, height: u32) -> Vec<(u32, u32)> {
        let (x_span, y_span) = self.visible_span(width, height);
        let Self { x, y, .. } = *self;

        (0..y_span)
            .flat_map(|dy| (0..dy.saturating_add(1).min(x_span)).map(move |dx| (x + dx, y + dy)))
            .collect()
    }

    /// Columns and rows of the block that fall inside the canvas
    const fn visible_span(&self, width: u32, height: u32) -> (u32, u32) {
        let x_span = width.saturating_sub(self.x);
        let y_span = height.saturating_sub(self.y);
        (
            if x_span < self.length { x_span } else { self.length },
            if y_span < self.length { y_span } else { self.length },
        )
    }

    /// Regions of this block for the given mosaic shape, empty regions removed
    pub fn regions(&self, shape: MosaicShape, width: u32, height: u32) -> Vec<Vec<(u32, u32)>> {
        let regions = match shape {
            MosaicShape::Square => vec![self.pixels(width, height)],
            MosaicShape::Triangle => vec![
                self.lower_triangle(width, height),
                self.upper_triangle(width, height),
            ],
        };
        regions
            .into_iter()
            .filter(|region| !region.is_empty())
            .collect()
    }
}

/// Splits a canvas into blocks of a fixed length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockPartitioner {
    width: u32,
    height: u32,
    length: BlockLength,
}

impl BlockPartitioner {
    /// Partition a `width x height` area
    pub const fn new(width: u32, height: u32, length: BlockLength) -> Self {
        Self {
            width,
            height,
            length,
        }
    }

    /// Block length of this partition
    pub const fn length(&self) -> BlockLength {
        self.length
    }

    /// Number of block columns, counting a clipped final column
    pub const fn columns(&self) -> usize {
        self.width.div_ceil(self.length.get()) as usize
    }

    /// Number of block rows, counting a clipped final row
    pub const fn rows(&self) -> usize {
        self.height.div_ceil(self.length.get()) as usize
    }

    /// Total number of blocks
    pub const fn block_count(&self) -> usize {
        self.columns() * self.rows()
    }

    /// Block at a grid position, or `None` outside the grid
    pub fn block_at(&self, column: usize, row: usize) -> Option<Block> {
        if column >= self.columns() || row >= self.rows() {
            return None;
        }
        let length = self.length.get();
        Some(Block {
            x: u32::try_from(column).ok()?.checked_mul(length)?,
            y: u32::try_from(row).ok()?.checked_mul(length)?,
            length,
        })
    }

    /// Block one step away from `block`, or `None` when that leaves the grid
    pub fn neighbor(&self, block: &Block, d_column: isize, d_row: isize) -> Option<Block> {
        let column = block.column().checked_add_signed(d_column)?;
        let row = block.row().checked_add_signed(d_row)?;
        self.block_at(column, row)
    }

    /// All blocks in row-major order
    pub fn blocks(&self) -> impl Iterator<Item = Block> + '_ {
        let columns = self.columns();
        (0..self.rows())
            .flat_map(move |row| (0..columns).map(move |column| (column, row)))
            .filter_map(move |(column, row)| self.block_at(column, row))
    }
}
