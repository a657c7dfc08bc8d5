//! Tests for palette folder loading and rescaling per block length

#[cfg(test)]
mod tests {
    use mosaicmaker::MosaicError;
    use mosaicmaker::io::image::save_canvas;
    use mosaicmaker::io::palette::{PaletteLibrary, collect_image_paths, is_supported_image};
    use mosaicmaker::spatial::blocks::BlockLength;
    use mosaicmaker::spatial::canvas::{ChannelOrder, Color, PixelCanvas};
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn write_solid(dir: &Path, name: &str, color: Color) -> PathBuf {
        let path = dir.join(name);
        save_canvas(&PixelCanvas::filled(6, 4, ChannelOrder::Bgra, color), &path).unwrap();
        path
    }

    // Tests extension matching ignores case and rejects other files
    #[test]
    fn test_is_supported_image() {
        for accepted in ["a.png", "b.JPG", "c.jpeg", "d.Bmp"] {
            assert!(is_supported_image(Path::new(accepted)), "{accepted}");
        }
        for rejected in ["notes.txt", "archive.png.zip", "noextension", "image.gif"] {
            assert!(!is_supported_image(Path::new(rejected)), "{rejected}");
        }
    }

    // Tests only supported files are collected, sorted by path
    #[test]
    fn test_collect_image_paths() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        let second = write_solid(dir, "b.png", Color::WHITE);
        let first = write_solid(dir, "a.bmp", Color::BLACK);
        std::fs::write(dir.join("readme.txt"), "not an image").unwrap();
        std::fs::create_dir(dir.join("nested.png")).unwrap();

        assert_eq!(collect_image_paths(dir).unwrap(), vec![first, second]);
    }

    // Tests a missing folder is a file system error naming the folder
    #[test]
    fn test_missing_folder() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");

        let result = PaletteLibrary::load_folder(&missing, None);
        assert!(matches!(
            result,
            Err(MosaicError::FileSystem { ref path, .. }) if *path == missing
        ));
    }

    // Tests undecodable images are skipped instead of aborting the load
    #[test]
    fn test_load_folder_skips_broken_images() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        write_solid(dir, "a.png", Color::new(200, 0, 0));
        std::fs::write(dir.join("b.png"), b"definitely not a png").unwrap();
        write_solid(dir, "c.png", Color::new(0, 0, 200));

        let library = PaletteLibrary::load_folder(dir, None).unwrap();

        assert_eq!(library.len(), 2);
        let names: Vec<_> = library
            .sources()
            .iter()
            .filter_map(|source| source.path.file_name())
            .collect();
        assert_eq!(names, vec!["a.png", "c.png"]);
    }

    // Tests indexes are rebuilt at the requested block size with fresh averages
    #[test]
    fn test_build_index_rescales() {
        let mut library = PaletteLibrary::new();
        library.add(
            PathBuf::from("red"),
            PixelCanvas::filled(9, 5, ChannelOrder::Bgra, Color::new(200, 0, 0)),
        );
        library.add(
            PathBuf::from("blue"),
            PixelCanvas::filled(3, 3, ChannelOrder::Bgra, Color::new(0, 0, 200)),
        );

        for side in [2, 5] {
            let index = library.build_index(BlockLength::new(side).unwrap()).unwrap();
            assert_eq!(index.len(), 2);
            for entry in index.entries() {
                assert_eq!(entry.canvas().width(), side as u32);
                assert_eq!(entry.canvas().height(), side as u32);
            }
            assert_eq!(
                index.nearest_to(Color::new(180, 20, 20)).unwrap().average(),
                Color::new(200, 0, 0)
            );
        }
    }

    // Tests empty sources are left out of the index
    #[test]
    fn test_build_index_skips_empty_sources() {
        let mut library = PaletteLibrary::new();
        library.add(PathBuf::from("empty"), PixelCanvas::new(0, 0, ChannelOrder::Bgra));
        assert!(!library.is_empty());

        let index = library.build_index(BlockLength::DEFAULT).unwrap();
        assert!(index.is_empty());
    }
}
