//! Tests for region averaging, filling and thresholding

#[cfg(test)]
mod tests {
    use mosaicmaker::algorithm::region::{
        average_and_fill, average_region, fill_region, threshold_region,
    };
    use mosaicmaker::spatial::canvas::{ChannelOrder, Color, PixelCanvas};

    fn two_tone() -> PixelCanvas {
        let mut canvas = PixelCanvas::new(2, 1, ChannelOrder::Bgra);
        canvas.set(0, 0, Color::new(100, 0, 200));
        canvas.set(1, 0, Color::new(50, 10, 0));
        canvas
    }

    // Tests an empty region has no average and leaves the canvas alone
    #[test]
    fn test_empty_region() {
        let mut canvas = two_tone();

        assert_eq!(average_region(&canvas, &[]), None);
        assert_eq!(average_and_fill(&mut canvas, &[]), None);
        assert_eq!(threshold_region(&mut canvas, &[]), None);
        assert_eq!(canvas, two_tone());
    }

    // Tests the region is painted with its own average
    #[test]
    fn test_average_and_fill() {
        let mut canvas = two_tone();
        let region = [(0, 0), (1, 0)];

        let painted = average_and_fill(&mut canvas, &region);

        assert_eq!(painted, Some(Color::new(75, 5, 100)));
        assert_eq!(canvas.get(0, 0), Color::new(75, 5, 100));
        assert_eq!(canvas.get(1, 0), Color::new(75, 5, 100));
    }

    // Tests filling touches only the listed pixels
    #[test]
    fn test_fill_region_is_local() {
        let mut canvas = two_tone();
        fill_region(&mut canvas, &[(1, 0)], Color::WHITE);

        assert_eq!(canvas.get(0, 0), Color::new(100, 0, 200));
        assert_eq!(canvas.get(1, 0), Color::WHITE);
    }

    // Tests thresholding twice gives the same canvas as thresholding once
    #[test]
    fn test_threshold_is_idempotent() {
        let region = [(0, 0), (1, 0)];
        let mut once = two_tone();
        threshold_region(&mut once, &region);

        let mut twice = once.clone();
        let second = threshold_region(&mut twice, &region);

        assert_eq!(once, twice);
        assert_eq!(second, Some(Color::BLACK));
    }
}
