use rand::{SeedableRng, rngs::StdRng};

use crate::algorithm::block_mosaic::{convert_blocks_to_black_and_white, generate_block_mosaic};
use crate::algorithm::picture_mosaic::{PlacementReport, generate_picture_mosaic};
use crate::algorithm::placement::PaletteMode;
use crate::algorithm::triangle_mosaic::{
    convert_triangles_to_black_and_white, generate_triangle_mosaic,
};
use crate::io::configuration::{DEFAULT_NO_REPETITION_CANDIDATES, DEFAULT_SEED};
use crate::io::error::{Result, invalid_parameter, invalid_state};
use crate::palette::index::PaletteIndex;
use crate::spatial::blocks::{BlockLength, MosaicShape};
use crate::spatial::canvas::PixelCanvas;
use crate::spatial::grid::draw_grid;

/// Parameters controlling one mosaic generation pass
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MosaicConfig {
    /// Side length of each block in pixels
    pub block_length: BlockLength,
    /// Square blocks or triangle halves
    pub shape: MosaicShape,
    /// Threshold the finished mosaic to pure black and white
    pub black_and_white: bool,
    /// Palette placement strategy for picture mosaics
    pub palette_mode: PaletteMode,
    /// Nearest palette images considered per block in no-repetition mode
    pub no_repetition_candidates: usize,
    /// Seed for the no-repetition random choice
    pub seed: u64,
}

impl Default for MosaicConfig {
    fn default() -> Self {
        Self {
            block_length: BlockLength::DEFAULT,
            shape: MosaicShape::Square,
            black_and_white: false,
            palette_mode: PaletteMode::Default,
            no_repetition_candidates: DEFAULT_NO_REPETITION_CANDIDATES,
            seed: DEFAULT_SEED,
        }
    }
}

impl MosaicConfig {
    /// Check the parameters that the type system does not already enforce
    ///
    /// # Errors
    ///
    /// Returns an error if the no-repetition candidate count is zero
    pub fn validate(&self) -> Result<()> {
        if self.no_repetition_candidates == 0 {
            return Err(invalid_parameter(
                "no_repetition_candidates",
                &self.no_repetition_candidates,
                &"at least one candidate must be considered",
            ));
        }
        Ok(())
    }
}

/// Lifecycle of a [`MosaicEngine`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EngineState {
    /// No source image yet
    #[default]
    Uninitialized,
    /// A source image is loaded and no mosaic has been generated from it
    SourceLoaded,
    /// A mosaic was generated from the current source
    MosaicGenerated,
    /// The current mosaic was thresholded to black and white
    BlackAndWhiteApplied,
}

/// Owns a source image and the mosaic most recently generated from it
///
/// Every generation starts from an untouched copy of the source, so
/// regenerating with different settings never compounds earlier passes.
#[derive(Clone, Debug, Default)]
pub struct MosaicEngine {
    state: EngineState,
    source: Option<PixelCanvas>,
    mosaic: Option<PixelCanvas>,
    /// Block length and shape the current mosaic was built with
    layout: Option<(BlockLength, MosaicShape)>,
}

impl MosaicEngine {
    /// Create an engine without a source image
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the source image and discard any previous mosaic
    pub fn load_source(&mut self, canvas: PixelCanvas) {
        log::debug!(
            "loaded {}x{} source image",
            canvas.width(),
            canvas.height()
        );
        self.source = Some(canvas);
        self.mosaic = None;
        self.layout = None;
        self.state = EngineState::SourceLoaded;
    }

    /// Current lifecycle state
    pub const fn state(&self) -> EngineState {
        self.state
    }

    /// The loaded source image
    pub const fn source(&self) -> Option<&PixelCanvas> {
        self.source.as_ref()
    }

    /// The most recently generated mosaic
    pub const fn mosaic(&self) -> Option<&PixelCanvas> {
        self.mosaic.as_ref()
    }

    /// Take the generated mosaic out of the engine
    pub fn take_mosaic(&mut self) -> Option<PixelCanvas> {
        self.layout = None;
        if self.source.is_some() {
            self.state = EngineState::SourceLoaded;
        }
        self.mosaic.take()
    }

    /// Whether a block mosaic can be generated right now
    pub const fn can_generate_block_mosaic(&self) -> bool {
        self.source.is_some()
    }

    /// Whether a picture mosaic can be generated from `palette` right now
    pub fn can_generate_picture_mosaic(&self, palette: &PaletteIndex) -> bool {
        self.source.is_some() && !palette.is_empty()
    }

    /// Preview the block grid over the source image
    ///
    /// # Errors
    ///
    /// Returns an error if no source image is loaded
    pub fn grid_preview(&self, length: BlockLength, shape: MosaicShape) -> Result<PixelCanvas> {
        let source = self.require_source()?;
        Ok(draw_grid(source, length, shape))
    }

    /// Generate a square or triangle block mosaic from the source
    ///
    /// # Errors
    ///
    /// Returns an error if no source image is loaded or `config` is invalid
    pub fn generate_block_mosaic(&mut self, config: &MosaicConfig) -> Result<&PixelCanvas> {
        config.validate()?;
        let mut canvas = self.require_source()?.clone();

        let painted = match config.shape {
            MosaicShape::Square => generate_block_mosaic(&mut canvas, config.block_length),
            MosaicShape::Triangle => generate_triangle_mosaic(&mut canvas, config.block_length),
        };
        log::info!(
            "generated {:?} block mosaic with block length {} ({painted} regions)",
            config.shape,
            config.block_length
        );

        self.finish_generation(canvas, config.block_length, config.shape, config.black_and_white)
    }

    /// Generate a picture mosaic by stamping palette images into square blocks
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No source image is loaded
    /// - The palette is empty
    /// - `config` asks for triangle blocks, which picture mosaics do not support
    /// - `config` is otherwise invalid
    pub fn generate_picture_mosaic(
        &mut self,
        config: &MosaicConfig,
        palette: &PaletteIndex,
    ) -> Result<PlacementReport> {
        config.validate()?;
        if config.shape != MosaicShape::Square {
            return Err(invalid_parameter(
                "shape",
                &format!("{:?}", config.shape),
                &"picture mosaics are built from square blocks",
            ));
        }
        if palette.is_empty() {
            return Err(invalid_state(&"no palette images available"));
        }

        let mut canvas = self.require_source()?.clone();
        let mut rng = StdRng::seed_from_u64(config.seed);
        let report = generate_picture_mosaic(
            &mut canvas,
            config.block_length,
            palette,
            config.palette_mode,
            config.no_repetition_candidates,
            &mut rng,
        )?;
        log::info!(
            "generated {:?} picture mosaic with block length {} ({} blocks, {} palette images)",
            config.palette_mode,
            config.block_length,
            report.placed(),
            palette.len()
        );

        self.finish_generation(
            canvas,
            config.block_length,
            MosaicShape::Square,
            config.black_and_white,
        )?;
        Ok(report)
    }

    /// Threshold the current mosaic to black and white, region by region
    ///
    /// Uses the block length and shape the mosaic was generated with. Running
    /// it again leaves the mosaic unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if no mosaic has been generated
    pub fn convert_to_black_and_white(&mut self) -> Result<&PixelCanvas> {
        let (Some(mosaic), Some((length, shape))) = (self.mosaic.as_mut(), self.layout) else {
            return Err(invalid_state(&"no mosaic has been generated"));
        };

        match shape {
            MosaicShape::Square => convert_blocks_to_black_and_white(mosaic, length),
            MosaicShape::Triangle => convert_triangles_to_black_and_white(mosaic, length),
        };
        self.state = EngineState::BlackAndWhiteApplied;

        Ok(&*mosaic)
    }

    fn require_source(&self) -> Result<&PixelCanvas> {
        self.source
            .as_ref()
            .ok_or_else(|| invalid_state(&"no source image has been loaded"))
    }

    fn finish_generation(
        &mut self,
        canvas: PixelCanvas,
        length: BlockLength,
        shape: MosaicShape,
        black_and_white: bool,
    ) -> Result<&PixelCanvas> {
        self.mosaic = Some(canvas);
        self.layout = Some((length, shape));
        self.state = EngineState::MosaicGenerated;

        if black_and_white {
            return self.convert_to_black_and_white();
        }
        self.mosaic
            .as_ref()
            .ok_or_else(|| invalid_state(&"no mosaic has been generated"))
    }
}
