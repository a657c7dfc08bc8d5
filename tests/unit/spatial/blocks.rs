//! Tests for block length validation, partitioning and triangle splits

#[cfg(test)]
mod tests {
    use mosaicmaker::MosaicError;
    use mosaicmaker::io::configuration::DEFAULT_BLOCK_LENGTH;
    use mosaicmaker::spatial::blocks::{Block, BlockLength, BlockPartitioner, MosaicShape};
    use std::collections::{HashMap, HashSet};

    fn length(value: i64) -> BlockLength {
        BlockLength::new(value).unwrap()
    }

    // Tests block lengths must be positive and fit in u32
    #[test]
    fn test_block_length_validation() {
        assert_eq!(length(5).get(), 5);
        assert_eq!(BlockLength::default().get(), DEFAULT_BLOCK_LENGTH);

        for invalid in [0, -1, -100, i64::from(u32::MAX) + 1] {
            assert!(
                matches!(
                    BlockLength::new(invalid),
                    Err(MosaicError::InvalidParameter {
                        parameter: "block_length",
                        ..
                    })
                ),
                "{invalid} should be rejected"
            );
        }
    }

    // Tests clipped final rows and columns are counted
    #[test]
    fn test_partition_dimensions() {
        let partitioner = BlockPartitioner::new(10, 7, length(4));

        assert_eq!(partitioner.columns(), 3);
        assert_eq!(partitioner.rows(), 2);
        assert_eq!(partitioner.block_count(), 6);
        assert_eq!(partitioner.blocks().count(), 6);
    }

    // Tests blocks are produced row by row from the top-left corner
    #[test]
    fn test_blocks_are_row_major() {
        let partitioner = BlockPartitioner::new(10, 7, length(4));
        let corners: Vec<(u32, u32)> = partitioner.blocks().map(|b| (b.x, b.y)).collect();

        assert_eq!(
            corners,
            vec![(0, 0), (4, 0), (8, 0), (0, 4), (4, 4), (8, 4)]
        );
    }

    // Tests every pixel is covered by exactly one block for many geometries
    #[test]
    fn test_blocks_cover_every_pixel_once() {
        for (width, height, side) in [(1, 1, 1), (4, 4, 2), (10, 7, 3), (5, 9, 10), (17, 3, 4)] {
            let partitioner = BlockPartitioner::new(width, height, length(side));
            let mut coverage: HashMap<(u32, u32), usize> = HashMap::new();

            for block in partitioner.blocks() {
                for pixel in block.pixels(width, height) {
                    *coverage.entry(pixel).or_insert(0) += 1;
                }
            }

            assert_eq!(coverage.len(), (width * height) as usize);
            assert!(
                coverage.values().all(|&count| count == 1),
                "{width}x{height} with length {side} covered a pixel twice"
            );
        }
    }

    // Tests grid lookups and neighbours stop at the grid edge
    #[test]
    fn test_block_at_and_neighbor() {
        let partitioner = BlockPartitioner::new(6, 4, length(2));
        let corner = partitioner.block_at(0, 0).unwrap();

        assert_eq!(partitioner.block_at(3, 0), None);
        assert_eq!(partitioner.block_at(0, 2), None);
        assert_eq!(partitioner.neighbor(&corner, -1, 0), None);
        assert_eq!(partitioner.neighbor(&corner, 0, -1), None);

        let right = partitioner.neighbor(&corner, 1, 0).unwrap();
        assert_eq!((right.x, right.y), (2, 0));
        assert_eq!((right.column(), right.row()), (1, 0));

        let below = partitioner.neighbor(&corner, 0, 1).unwrap();
        assert_eq!((below.x, below.y), (0, 2));
        assert_eq!(partitioner.neighbor(&below, 0, 1), None);
    }

    // Tests the 2x2 triangle split: lower holds (1, 0), upper holds the rest
    #[test]
    fn test_two_by_two_triangles() {
        let block = Block {
            x: 0,
            y: 0,
            length: 2,
        };

        assert_eq!(block.lower_triangle(2, 2), vec![(1, 0)]);
        assert_eq!(block.upper_triangle(2, 2), vec![(0, 0), (0, 1), (1, 1)]);
    }

    // Tests the two triangles partition a full block without overlap
    #[test]
    fn test_triangles_partition_block() {
        let block = Block {
            x: 5,
            y: 5,
            length: 5,
        };
        let lower: HashSet<_> = block.lower_triangle(20, 20).into_iter().collect();
        let upper: HashSet<_> = block.upper_triangle(20, 20).into_iter().collect();
        let square: HashSet<_> = block.pixels(20, 20).into_iter().collect();

        assert_eq!(lower.len(), 10);
        assert_eq!(upper.len(), 15);
        assert!(lower.is_disjoint(&upper));
        assert_eq!(&lower | &upper, square);
        assert!(lower.iter().all(|&(x, y)| y - 5 < x - 5));
    }

    // Tests triangles of clipped edge blocks still cover the clipped block exactly
    #[test]
    fn test_clipped_triangles_cover_clipped_block() {
        let block = Block {
            x: 0,
            y: 0,
            length: 4,
        };
        let lower = block.lower_triangle(3, 2);
        let upper = block.upper_triangle(3, 2);

        let union: HashSet<_> = lower.iter().chain(upper.iter()).copied().collect();
        let square: HashSet<_> = block.pixels(3, 2).into_iter().collect();

        assert_eq!(lower.len() + upper.len(), 6);
        assert_eq!(union, square);
    }

    // Tests a block far larger than the canvas yields only the visible triangles
    #[test]
    fn test_huge_block_triangles_are_clipped_first() {
        for side in [1_000_000, u32::MAX] {
            let block = Block {
                x: 0,
                y: 0,
                length: side,
            };
            let lower = block.lower_triangle(4, 4);
            let upper = block.upper_triangle(4, 4);

            assert_eq!(lower, vec![(1, 0), (2, 0), (2, 1), (3, 0), (3, 1), (3, 2)]);
            assert_eq!(upper.len(), 10);
            assert!(upper.iter().all(|&(x, y)| x <= y));

            let union: HashSet<_> = lower.iter().chain(upper.iter()).copied().collect();
            let square: HashSet<_> = block.pixels(4, 4).into_iter().collect();
            assert_eq!(union, square);
        }
    }

    // Tests clipping an offset block against a canvas that ends mid-block
    #[test]
    fn test_offset_block_triangles_clip_to_canvas() {
        let block = Block {
            x: 4,
            y: 2,
            length: 1 << 20,
        };

        assert_eq!(block.lower_triangle(6, 3), vec![(5, 2)]);
        assert_eq!(block.upper_triangle(6, 3), vec![(4, 2)]);
        assert!(block.lower_triangle(4, 3).is_empty());
        assert!(block.upper_triangle(6, 2).is_empty());
    }

    // Tests empty regions are dropped from the region list
    #[test]
    fn test_regions_skip_empty_triangles() {
        let single = Block {
            x: 0,
            y: 0,
            length: 1,
        };

        assert_eq!(single.regions(MosaicShape::Square, 1, 1).len(), 1);
        assert_eq!(single.regions(MosaicShape::Triangle, 1, 1), vec![vec![(0, 0)]]);

        let outside = Block {
            x: 4,
            y: 4,
            length: 2,
        };
        assert!(outside.regions(MosaicShape::Square, 4, 4).is_empty());
    }
}
