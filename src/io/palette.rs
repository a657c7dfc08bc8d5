//! Palette folder loading and per-block-length palette indexes
//!
//! Palette sources are kept at their decoded size. Whenever the block length
//! changes, a fresh [`PaletteIndex`] is derived by scaling every source to
//! the new block size, which also recomputes every average colour.

use indicatif::ProgressBar;
use std::path::{Path, PathBuf};

use crate::io::configuration::SUPPORTED_EXTENSIONS;
use crate::io::error::{Result, WithPath};
use crate::io::image::{load_canvas, scale_square};
use crate::palette::index::PaletteIndex;
use crate::spatial::blocks::BlockLength;
use crate::spatial::canvas::PixelCanvas;

/// Check whether a path has one of the accepted image extensions
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| extension.eq_ignore_ascii_case(supported))
        })
}

/// Every supported image file directly inside `dir`, sorted by path
///
/// # Errors
///
/// Returns an error if the directory cannot be listed
pub fn collect_image_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).with_path(dir)? {
        let path = entry.with_path(dir)?.path();
        if path.is_file() && is_supported_image(&path) {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// A decoded palette image and where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteSource {
    /// File the image was decoded from
    pub path: PathBuf,
    /// Image at its original size
    pub canvas: PixelCanvas,
}

/// Unscaled palette images, ready to be indexed for any block length
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaletteLibrary {
    sources: Vec<PaletteSource>,
}

impl PaletteLibrary {
    /// Create an empty library
    pub const fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Decode every supported image in `dir`
    ///
    /// Files that fail to decode are logged and skipped so one bad image does
    /// not abort the whole palette.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be listed
    pub fn load_folder(dir: &Path, progress: Option<&ProgressBar>) -> Result<Self> {
        let paths = collect_image_paths(dir)?;
        if let Some(bar) = progress {
            bar.set_length(paths.len() as u64);
        }

        let mut library = Self::new();
        for path in paths {
            match load_canvas(&path) {
                Ok(canvas) => library.add(path, canvas),
                Err(error) => log::warn!("skipping palette image: {error}"),
            }
            if let Some(bar) = progress {
                bar.inc(1);
            }
        }

        log::info!(
            "loaded {} palette images from '{}'",
            library.len(),
            dir.display()
        );
        Ok(library)
    }

    /// Add an already decoded image
    pub fn add(&mut self, path: PathBuf, canvas: PixelCanvas) {
        self.sources.push(PaletteSource { path, canvas });
    }

    /// Number of images
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether the library has no images
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Images in load order
    pub fn sources(&self) -> &[PaletteSource] {
        &self.sources
    }

    /// Scale every image to `length x length` and index the results
    ///
    /// Empty images are skipped with a warning. Entry ids follow load order.
    ///
    /// # Errors
    ///
    /// Returns an error if an image cannot be resampled
    pub fn build_index(&self, length: BlockLength) -> Result<PaletteIndex> {
        let mut index = PaletteIndex::new();
        for source in &self.sources {
            if source.canvas.width() == 0 || source.canvas.height() == 0 {
                log::warn!("skipping empty palette image '{}'", source.path.display());
                continue;
            }
            index.add_image(scale_square(&source.canvas, length)?)?;
        }
        log::debug!(
            "indexed {} palette images at block length {length}",
            index.len()
        );
        Ok(index)
    }
}
