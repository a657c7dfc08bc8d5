//! Command-line interface for batch mosaic generation

use crate::algorithm::executor::{MosaicConfig, MosaicEngine};
use crate::algorithm::placement::PaletteMode;
use crate::io::configuration::{
    DEFAULT_BLOCK_LENGTH, DEFAULT_NO_REPETITION_CANDIDATES, DEFAULT_SEED, GRID_SUFFIX,
    OUTPUT_SUFFIX,
};
use crate::io::error::{Result, WithPath, invalid_parameter, invalid_state};
use crate::io::image::{load_canvas, save_canvas};
use crate::io::palette::{PaletteLibrary, is_supported_image};
use crate::io::progress::ProgressManager;
use crate::palette::index::PaletteIndex;
use crate::spatial::blocks::{BlockLength, MosaicShape};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Block shape accepted on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum ShapeArg {
    /// Square blocks
    #[default]
    Square,
    /// Each block split into two triangles
    Triangle,
}

impl From<ShapeArg> for MosaicShape {
    fn from(shape: ShapeArg) -> Self {
        match shape {
            ShapeArg::Square => Self::Square,
            ShapeArg::Triangle => Self::Triangle,
        }
    }
}

/// Palette placement strategy accepted on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum ModeArg {
    /// Always the nearest palette image
    #[default]
    Nearest,
    /// Use every palette image before repeating one
    Evenly,
    /// Avoid the images of adjacent blocks
    NoRepetition,
}

impl From<ModeArg> for PaletteMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Nearest => Self::Default,
            ModeArg::Evenly => Self::UseEvenly,
            ModeArg::NoRepetition => Self::NoRepetition,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "mosaicmaker")]
#[command(
    author,
    version,
    about = "Turn images into block, triangle and picture mosaics"
)]
/// Command-line arguments for mosaic generation
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input image or directory of images to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Side length of each block in pixels
    #[arg(short, long, default_value_t = DEFAULT_BLOCK_LENGTH)]
    pub block_length: u32,

    /// Shape of the mosaic cells
    #[arg(long, value_enum, default_value_t = ShapeArg::Square)]
    pub shape: ShapeArg,

    /// Threshold the finished mosaic to black and white
    #[arg(short = 'k', long)]
    pub black_and_white: bool,

    /// Folder of palette images; builds a picture mosaic when given
    #[arg(short, long, value_name = "DIR")]
    pub palette: Option<PathBuf>,

    /// Palette placement strategy
    #[arg(short, long, value_enum, default_value_t = ModeArg::Nearest)]
    pub mode: ModeArg,

    /// Nearest palette images considered per block when avoiding repetition
    #[arg(short, long, default_value_t = DEFAULT_NO_REPETITION_CANDIDATES)]
    pub candidates: usize,

    /// Random seed for reproducible placement
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Also export the block grid drawn over the source image
    #[arg(short, long)]
    pub grid: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Generation settings described by these arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the block length or candidate count is invalid, or
    /// if a palette is combined with triangle cells
    pub fn mosaic_config(&self) -> Result<MosaicConfig> {
        if self.palette.is_some() && self.shape == ShapeArg::Triangle {
            return Err(invalid_parameter(
                "shape",
                &"triangle",
                &"picture mosaics are built from square blocks",
            ));
        }

        let config = MosaicConfig {
            block_length: BlockLength::new(i64::from(self.block_length))?,
            shape: self.shape.into(),
            black_and_white: self.black_and_white,
            palette_mode: self.mode.into(),
            no_repetition_candidates: self.candidates,
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Orchestrates batch processing of image files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments are invalid, the palette folder
    /// cannot be read, or any file fails to load, generate or export
    pub fn process(&mut self) -> Result<()> {
        let config = self.cli.mosaic_config()?;
        let files = self.collect_files()?;

        if files.is_empty() {
            log::info!("nothing to process in '{}'", self.cli.target.display());
            return Ok(());
        }

        let palette = self.load_palette(config.block_length)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index, &config, palette.as_ref())?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    /// Output path for the mosaic of `input_path`
    pub fn output_path(input_path: &Path) -> PathBuf {
        sibling_with_suffix(input_path, OUTPUT_SUFFIX)
    }

    /// Output path for the grid preview of `input_path`
    pub fn grid_path(input_path: &Path) -> PathBuf {
        sibling_with_suffix(input_path, GRID_SUFFIX)
    }

    /// Whether `path` was written by an earlier run
    pub fn is_generated_output(path: &Path) -> bool {
        path.file_stem()
            .map(|stem| stem.to_string_lossy())
            .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX) || stem.ends_with(GRID_SUFFIX))
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if !is_supported_image(target) {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"target file must be a bmp, jpeg or png image",
                ));
            }
            return Ok(if self.should_process_file(target) {
                vec![target.clone()]
            } else {
                vec![]
            });
        }

        if target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target).with_path(target)? {
                let path = entry.with_path(target)?.path();
                if path.is_file()
                    && is_supported_image(&path)
                    && !Self::is_generated_output(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            return Ok(files);
        }

        Err(invalid_parameter(
            "target",
            &target.display(),
            &"target must be an image file or directory",
        ))
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn load_palette(&self, length: BlockLength) -> Result<Option<PaletteIndex>> {
        let Some(dir) = self.cli.palette.as_deref() else {
            return Ok(None);
        };

        let bar = self.progress_manager.as_ref().map(ProgressManager::palette_bar);
        let library = PaletteLibrary::load_folder(dir, bar.as_ref())?;
        if let Some(bar) = bar {
            bar.finish_and_clear();
        }

        library.build_index(length).map(Some)
    }

    fn process_file(
        &mut self,
        input_path: &Path,
        index: usize,
        config: &MosaicConfig,
        palette: Option<&PaletteIndex>,
    ) -> Result<()> {
        let start_time = Instant::now();

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        let mut engine = MosaicEngine::new();
        engine.load_source(load_canvas(input_path)?);

        if self.cli.grid {
            let preview = engine.grid_preview(config.block_length, config.shape)?;
            save_canvas(&preview, &Self::grid_path(input_path))?;
        }

        match palette {
            Some(palette) => {
                let report = engine.generate_picture_mosaic(config, palette)?;
                log::debug!(
                    "'{}': {} blocks placed from {} distinct palette images",
                    input_path.display(),
                    report.placed(),
                    report.usage_counts().len()
                );
            }
            None => {
                engine.generate_block_mosaic(config)?;
            }
        }

        let mosaic = engine.take_mosaic().ok_or_else(|| {
            invalid_state(&"generation finished without a mosaic")
        })?;
        save_canvas(&mosaic, &Self::output_path(input_path))?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index, start_time.elapsed());
        }
        log::info!(
            "'{}' done in {:.2}s",
            input_path.display(),
            start_time.elapsed().as_secs_f64()
        );

        Ok(())
    }
}

fn sibling_with_suffix(input_path: &Path, suffix: &str) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let extension = input_path.extension().unwrap_or_default();
    let name = format!(
        "{}{}.{}",
        stem.to_string_lossy(),
        suffix,
        extension.to_string_lossy()
    );

    if let Some(parent) = input_path.parent() {
        parent.join(name)
    } else {
        PathBuf::from(name)
    }
}
