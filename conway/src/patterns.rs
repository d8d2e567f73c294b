// patterns.rs - Named seed patterns, stored as offsets from their top-left corner

use crate::grid::Grid;

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "r-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
];

/// Case-insensitive lookup by name
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

impl Pattern {
    /// (height, width) of the bounding box
    pub fn extent(&self) -> (usize, usize) {
        let height = self.cells.iter().map(|&(r, _)| r + 1).max().unwrap_or(0);
        let width = self.cells.iter().map(|&(_, c)| c + 1).max().unwrap_or(0);
        (height, width)
    }

    /// Sets the pattern's cells alive with its top-left corner at (row, col).
    /// Cells falling outside the grid are clipped. Returns how many were placed.
    pub fn place(&self, grid: &mut Grid, row: usize, col: usize) -> usize {
        let mut placed = 0;
        for &(dr, dc) in self.cells {
            if grid.set(row + dr, col + dc, true).is_ok() {
                placed += 1;
            }
        }
        placed
    }

    /// Places the pattern so its bounding box is centred on the grid
    pub fn place_centered(&self, grid: &mut Grid) -> usize {
        let (height, width) = self.extent();
        let (rows, cols) = grid.dimensions();
        let row = rows.saturating_sub(height) / 2;
        let col = cols.saturating_sub(width) / 2;
        self.place(grid, row, col)
    }
}
