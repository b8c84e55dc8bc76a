/// A rectangular sub-region of the output grid with half-open bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WorkUnit {
    pub row_start: u32,
    pub row_end: u32,
    pub col_start: u32,
    pub col_end: u32,
}

/// One unit covering the full grid.
pub(crate) fn full_grid(height: u32, width: u32) -> Vec<WorkUnit> {
    vec![WorkUnit {
        row_start: 0,
        row_end: height,
        col_start: 0,
        col_end: width,
    }]
}

/// One unit per output row.
pub(crate) fn per_row(height: u32, width: u32) -> Vec<WorkUnit> {
    (0..height)
        .map(|row| WorkUnit {
            row_start: row,
            row_end: row + 1,
            col_start: 0,
            col_end: width,
        })
        .collect()
}

/// One unit per output column.
pub(crate) fn per_col(height: u32, width: u32) -> Vec<WorkUnit> {
    (0..width)
        .map(|col| WorkUnit {
            row_start: 0,
            row_end: height,
            col_start: col,
            col_end: col + 1,
        })
        .collect()
}

/// Square tiles of side `block_size` in row-major order. Tiles at the
/// right and bottom edges are truncated to the grid bounds.
/// `block_size` must be non-zero.
pub(crate) fn tiles(height: u32, width: u32, block_size: u32) -> Vec<WorkUnit> {
    debug_assert!(block_size > 0);
    let rows_of_tiles = height.div_ceil(block_size);
    let cols_of_tiles = width.div_ceil(block_size);
    let mut units = Vec::with_capacity(rows_of_tiles as usize * cols_of_tiles as usize);
    let mut row = 0;
    while row < height {
        let row_end = (row + block_size).min(height);
        let mut col = 0;
        while col < width {
            let col_end = (col + block_size).min(width);
            units.push(WorkUnit {
                row_start: row,
                row_end,
                col_start: col,
                col_end,
            });
            col = col_end;
        }
        row = row_end;
    }
    units
}

/// One unit per output pixel.
pub(crate) fn per_pixel(height: u32, width: u32) -> Vec<WorkUnit> {
    let mut units = Vec::with_capacity(height as usize * width as usize);
    for row in 0..height {
        for col in 0..width {
            units.push(WorkUnit {
                row_start: row,
                row_end: row + 1,
                col_start: col,
                col_end: col + 1,
            });
        }
    }
    units
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every pixel of the grid must be covered by exactly one unit.
    fn assert_exact_cover(units: &[WorkUnit], height: u32, width: u32) {
        let mut writers = vec![0u32; (height * width) as usize];
        for unit in units {
            assert!(unit.row_start < unit.row_end, "empty unit: {unit:?}");
            assert!(unit.col_start < unit.col_end, "empty unit: {unit:?}");
            assert!(unit.row_end <= height && unit.col_end <= width);
            for row in unit.row_start..unit.row_end {
                for col in unit.col_start..unit.col_end {
                    writers[(row * width + col) as usize] += 1;
                }
            }
        }
        assert!(writers.iter().all(|&count| count == 1));
    }

    #[test]
    fn full_grid_is_one_unit() {
        let units = full_grid(7, 5);
        assert_eq!(units.len(), 1);
        assert_exact_cover(&units, 7, 5);
    }

    #[test]
    fn per_row_unit_count_equals_height() {
        let units = per_row(7, 5);
        assert_eq!(units.len(), 7);
        assert_exact_cover(&units, 7, 5);
    }

    #[test]
    fn per_col_unit_count_equals_width() {
        let units = per_col(7, 5);
        assert_eq!(units.len(), 5);
        assert_exact_cover(&units, 7, 5);
    }

    #[test]
    fn per_pixel_unit_count_equals_area() {
        let units = per_pixel(7, 5);
        assert_eq!(units.len(), 35);
        assert_exact_cover(&units, 7, 5);
    }

    #[test]
    fn tiles_truncate_at_edges() {
        // 10x7 grid with 4x4 tiles: 3x2 grid of tiles, edge tiles cut.
        let units = tiles(10, 7, 4);
        assert_eq!(units.len(), 6);
        assert_exact_cover(&units, 10, 7);
        let last = units.last().unwrap();
        assert_eq!(
            *last,
            WorkUnit {
                row_start: 8,
                row_end: 10,
                col_start: 4,
                col_end: 7,
            }
        );
    }

    #[test]
    fn oversized_tile_covers_grid_with_one_unit() {
        let units = tiles(5, 3, 256);
        assert_eq!(units, full_grid(5, 3));
    }

    #[test]
    fn tile_count_matches_ceil_division() {
        for (height, width, block) in [(64, 64, 16), (65, 64, 16), (100, 30, 7), (1, 1, 1)] {
            let units = tiles(height, width, block);
            let expected = height.div_ceil(block) as usize * width.div_ceil(block) as usize;
            assert_eq!(units.len(), expected);
            assert_exact_cover(&units, height, width);
        }
    }
}
