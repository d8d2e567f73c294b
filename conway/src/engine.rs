// engine.rs - Generation step for Conway's Game of Life
//
// Every cell is evaluated against the same input generation and written to a
// fresh output buffer. Neighbourhoods are clipped at the edges, never wrapped.

use crate::grid::Grid;

/// B3/S23
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true,   // Survival
        (false, 3)            => true,   // Birth
        _                     => false,  // Death or stays dead
    }
}

/// Live neighbours of (row, col), excluding the cell itself.
/// Positions beyond the grid edge are simply not counted.
pub fn neighbor_count(grid: &Grid, row: usize, col: usize) -> u8 {
    let (rows, cols) = grid.dimensions();
    let mut count = 0;
    for r in row.saturating_sub(1)..=(row + 1).min(rows - 1) {
        let cells = grid.row(r);
        for c in col.saturating_sub(1)..=(col + 1).min(cols - 1) {
            if (r, c) != (row, col) && cells[c] {
                count += 1;
            }
        }
    }
    count
}

/// Produces the next generation. The input grid is left untouched.
///
/// For each row the vertical 3-cell sums of every column are computed once,
/// then a sliding window over those sums yields the 3x3 block total, so no
/// overlapping region is summed twice.
pub fn step(grid: &Grid) -> Grid {
    let (rows, cols) = grid.dimensions();
    let mut next = vec![false; rows * cols];
    let mut column_sums = vec![0u8; cols];

    for row in 0..rows {
        let above = if row > 0 { Some(grid.row(row - 1)) } else { None };
        let current = grid.row(row);
        let below = if row + 1 < rows { Some(grid.row(row + 1)) } else { None };

        for col in 0..cols {
            column_sums[col] = above.map_or(0, |r| r[col] as u8)
                + current[col] as u8
                + below.map_or(0, |r| r[col] as u8);
        }

        // Running total of column_sums[col-1..=col+1]
        let mut window = column_sums[0] + if cols > 1 { column_sums[1] } else { 0 };
        for col in 0..cols {
            let alive = current[col];
            let neighbors = window - alive as u8;
            next[row * cols + col] = next_state(alive, neighbors);

            if col + 2 < cols {
                window += column_sums[col + 2];
            }
            if col >= 1 {
                window -= column_sums[col - 1];
            }
        }
    }

    Grid::from_cells(rows, cols, next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(rows: usize, cols: usize, live: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(rows, cols).unwrap();
        for &(r, c) in live {
            grid.set(r, c, true).unwrap();
        }
        grid
    }

    fn live(grid: &Grid) -> Vec<(usize, usize)> {
        grid.live_cells().collect()
    }

    /// Straightforward per-cell count, used to cross-check the sliding window
    fn step_naive(grid: &Grid) -> Grid {
        let (rows, cols) = grid.dimensions();
        let mut next = Grid::new(rows, cols).unwrap();
        for r in 0..rows {
            for c in 0..cols {
                let alive = grid.get(r, c).unwrap();
                next.set(r, c, next_state(alive, neighbor_count(grid, r, c))).unwrap();
            }
        }
        next
    }

    #[test]
    fn rule_table() {
        for n in 0..=8 {
            assert_eq!(next_state(true, n), n == 2 || n == 3, "alive with {}", n);
            assert_eq!(next_state(false, n), n == 3, "dead with {}", n);
        }
    }

    #[test]
    fn empty_grid_stays_empty() {
        let grid = Grid::new(12, 9).unwrap();
        assert!(step(&grid).is_empty());
    }

    #[test]
    fn single_cell_dies() {
        let grid = grid_with(5, 5, &[(2, 2)]);
        assert!(step(&grid).is_empty());
    }

    #[test]
    fn corner_cell_has_no_wrapped_neighbors() {
        let grid = grid_with(4, 4, &[(0, 0)]);
        assert_eq!(neighbor_count(&grid, 0, 0), 0);

        // Cells on the opposite edges would be neighbours on a torus
        let grid = grid_with(4, 4, &[(0, 0), (3, 3), (0, 3), (3, 0)]);
        assert_eq!(neighbor_count(&grid, 0, 0), 0);
        assert!(step(&grid).is_empty());
    }

    #[test]
    fn block_is_still_life() {
        let grid = grid_with(4, 4, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
        assert_eq!(step(&grid), grid);
    }

    #[test]
    fn block_in_corner_is_still_life() {
        let grid = grid_with(2, 2, &[(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(step(&grid), grid);
    }

    #[test]
    fn vertical_blinker_oscillates() {
        let grid = grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        let next = step(&grid);
        assert_eq!(live(&next), vec![(2, 1), (2, 2), (2, 3)]);
        assert_eq!(step(&next), grid);
    }

    #[test]
    fn step_does_not_mutate_input() {
        let grid = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let before = grid.clone();
        let _ = step(&grid);
        assert_eq!(grid, before);
    }

    #[test]
    fn dead_cell_with_three_neighbors_is_born() {
        let grid = grid_with(3, 3, &[(0, 0), (0, 2), (2, 1)]);
        assert_eq!(neighbor_count(&grid, 1, 1), 3);
        assert!(step(&grid).get(1, 1).unwrap());
    }

    #[test]
    fn single_row_and_column_grids() {
        let row = grid_with(1, 6, &[(0, 1), (0, 2), (0, 3)]);
        assert_eq!(live(&step(&row)), vec![(0, 2)]);

        let col = grid_with(6, 1, &[(1, 0), (2, 0), (3, 0)]);
        assert_eq!(live(&step(&col)), vec![(2, 0)]);

        let single = grid_with(1, 1, &[(0, 0)]);
        assert!(step(&single).is_empty());
    }

    #[test]
    fn sliding_window_matches_naive_count() {
        // Deterministic pseudo-random fill from a linear congruential sequence, about a third alive
        let (rows, cols) = (17, 23);
        let mut grid = Grid::new(rows, cols).unwrap();
        let mut seed: u64 = 0x2545_f491;
        for r in 0..rows {
            for c in 0..cols {
                seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
                grid.set(r, c, (seed >> 16) % 3 == 0).unwrap();
            }
        }
        let mut current = grid;
        for _ in 0..10 {
            let fast = step(&current);
            assert_eq!(fast, step_naive(&current));
            current = fast;
        }
    }
}
