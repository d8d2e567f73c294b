// layout.rs - Mapping between display pixels and grid cells

/// Pixel size of one cell, derived from the display surface and grid shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellDimensions {
    pub cell_width: u32,
    pub cell_height: u32,
    rows: usize,
    cols: usize,
}

impl CellDimensions {
    /// Integer division, as the painted grid never stretches cells fractionally.
    /// A display smaller than the grid yields zero-sized cells, which map no pixels.
    pub fn from_display(width: u32, height: u32, rows: usize, cols: usize) -> Self {
        let cols_u32 = u32::try_from(cols).unwrap_or(u32::MAX).max(1);
        let rows_u32 = u32::try_from(rows).unwrap_or(u32::MAX).max(1);
        Self {
            cell_width: width / cols_u32,
            cell_height: height / rows_u32,
            rows,
            cols,
        }
    }

    /// Width and height of the painted area; may be smaller than the display
    pub fn grid_extent(&self) -> (u32, u32) {
        (self.cell_width * self.cols as u32, self.cell_height * self.rows as u32)
    }

    /// Cell under a pixel relative to the grid origin, or `None` outside the painted grid
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        if self.cell_width == 0 || self.cell_height == 0 || x < 0.0 || y < 0.0 {
            return None;
        }
        let col = x as usize / self.cell_width as usize;
        let row = y as usize / self.cell_height as usize;
        (row < self.rows && col < self.cols).then_some((row, col))
    }

    /// (x, y, width, height) of a cell relative to the grid origin
    pub fn cell_rect(&self, row: usize, col: usize) -> (u32, u32, u32, u32) {
        (
            col as u32 * self.cell_width,
            row as u32 * self.cell_height,
            self.cell_width,
            self.cell_height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_preset_on_default_display() {
        let dims = CellDimensions::from_display(800, 600, 30, 40);
        assert_eq!((dims.cell_width, dims.cell_height), (20, 20));
        assert_eq!(dims.grid_extent(), (800, 600));
    }

    #[test]
    fn big_preset_leaves_unused_margin() {
        let dims = CellDimensions::from_display(800, 600, 125, 150);
        assert_eq!((dims.cell_width, dims.cell_height), (5, 4));
        assert_eq!(dims.grid_extent(), (750, 500));
        assert_eq!(dims.cell_at(749.0, 499.0), Some((124, 149)));
        assert_eq!(dims.cell_at(760.0, 10.0), None);
        assert_eq!(dims.cell_at(10.0, 550.0), None);
    }

    #[test]
    fn pointer_maps_with_integer_division() {
        let dims = CellDimensions::from_display(800, 600, 60, 80);
        assert_eq!(dims.cell_at(0.0, 0.0), Some((0, 0)));
        assert_eq!(dims.cell_at(19.9, 9.9), Some((0, 1)));
        assert_eq!(dims.cell_at(25.0, 35.0), Some((3, 2)));
        assert_eq!(dims.cell_at(-1.0, 5.0), None);
    }

    #[test]
    fn cell_rect_round_trips_through_cell_at() {
        let dims = CellDimensions::from_display(800, 600, 30, 40);
        let (x, y, w, h) = dims.cell_rect(7, 11);
        assert_eq!((x, y, w, h), (220, 140, 20, 20));
        assert_eq!(dims.cell_at(x as f32, y as f32), Some((7, 11)));
    }

    #[test]
    fn display_smaller_than_grid_maps_nothing() {
        let dims = CellDimensions::from_display(10, 10, 30, 40);
        assert_eq!(dims.cell_width, 0);
        assert_eq!(dims.cell_at(1.0, 1.0), None);
    }
}
