//! Tests for neighbour-avoiding palette selection

#[cfg(test)]
mod tests {
    use mosaicmaker::algorithm::placement::{
        NEIGHBOR_OFFSETS, PaletteMode, choose_avoiding_neighbors,
    };
    use mosaicmaker::palette::index::{PaletteEntry, PaletteId, PaletteIndex};
    use mosaicmaker::spatial::canvas::{ChannelOrder, Color, PixelCanvas};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn grey(level: u8) -> Color {
        Color::new(level, level, level)
    }

    fn palette_of<const N: usize>(levels: [u8; N]) -> (PaletteIndex, [PaletteId; N]) {
        let mut palette = PaletteIndex::new();
        let ids = levels.map(|level| {
            palette
                .add_image(PixelCanvas::filled(1, 1, ChannelOrder::Bgra, grey(level)))
                .unwrap()
        });
        (palette, ids)
    }

    fn pick(
        ranked: &[&PaletteEntry],
        candidates: usize,
        neighbors: &[PaletteId],
    ) -> Option<PaletteId> {
        let mut rng = StdRng::seed_from_u64(7);
        choose_avoiding_neighbors(ranked, candidates, neighbors, &mut rng).map(PaletteEntry::id)
    }

    // Tests a single candidate without neighbours is the nearest image
    #[test]
    fn test_single_candidate_is_nearest() {
        let (palette, [first, _, _]) = palette_of([50, 60, 70]);
        let ranked = palette.nearest_n_to(grey(50), palette.len());

        assert_eq!(pick(&ranked, 1, &[]), Some(first));
    }

    // Tests neighbouring images are excluded from the candidate window
    #[test]
    fn test_neighbors_are_excluded() {
        let (palette, [first, second, _]) = palette_of([50, 60, 70]);
        let ranked = palette.nearest_n_to(grey(50), palette.len());

        assert_eq!(pick(&ranked, 2, &[first]), Some(second));
    }

    // Tests the search widens past the window when neighbours fill it
    #[test]
    fn test_widens_beyond_window() {
        let (palette, [first, second, third, _]) = palette_of([50, 60, 70, 80]);
        let ranked = palette.nearest_n_to(grey(50), palette.len());

        assert_eq!(pick(&ranked, 2, &[first, second]), Some(third));
    }

    // Tests repetition is allowed once every image is a neighbour
    #[test]
    fn test_all_neighbors_falls_back_to_nearest() {
        let (palette, [first, second]) = palette_of([50, 60]);
        let ranked = palette.nearest_n_to(grey(60), palette.len());

        assert_eq!(pick(&ranked, 5, &[first, second]), Some(second));
        assert_eq!(pick(&[], 5, &[]), None);
    }

    // Tests random picks stay inside the allowed window
    #[test]
    fn test_random_choice_within_window() {
        let (palette, [first, second, third, fourth, _]) = palette_of([0, 10, 20, 30, 40]);
        let ranked = palette.nearest_n_to(Color::BLACK, palette.len());
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = Vec::new();

        for _ in 0..100 {
            let chosen = choose_avoiding_neighbors(&ranked, 4, &[second], &mut rng)
                .unwrap()
                .id();
            assert!([first, third, fourth].contains(&chosen), "{chosen} left the window");
            if !seen.contains(&chosen) {
                seen.push(chosen);
            }
        }

        assert_eq!(seen.len(), 3);
    }

    // Tests the neighbour offsets name the four adjacent blocks
    #[test]
    fn test_neighbor_offsets_and_default_mode() {
        assert_eq!(NEIGHBOR_OFFSETS.len(), 4);
        assert!(NEIGHBOR_OFFSETS.iter().all(|&(dx, dy)| dx.abs() + dy.abs() == 1));
        assert_eq!(PaletteMode::default(), PaletteMode::Default);
    }
}
