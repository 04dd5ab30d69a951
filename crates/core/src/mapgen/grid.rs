//! Dense cell storage with bounds-checked access.

use serde::Serialize;
use xxhash_rust::xxh3::xxh3_64;

use crate::error::{GenError, Result};
use crate::types::{CellState, Pos};

/// Row-major `width × height` cell array; `(0, 0)` is the bottom-left cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, cells: vec![CellState::Empty; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    fn index(&self, x: i32, y: i32) -> Result<usize> {
        if !self.in_bounds(x, y) {
            return Err(GenError::OutOfBounds { x, y, width: self.width, height: self.height });
        }
        Ok((y as usize) * self.width + (x as usize))
    }

    pub fn get(&self, x: i32, y: i32) -> Result<CellState> {
        self.index(x, y).map(|index| self.cells[index])
    }

    pub fn set(&mut self, x: i32, y: i32, state: CellState) -> Result<()> {
        let index = self.index(x, y)?;
        self.cells[index] = state;
        Ok(())
    }

    pub fn get_pos(&self, pos: Pos) -> Result<CellState> {
        self.get(pos.x, pos.y)
    }

    pub fn set_pos(&mut self, pos: Pos, state: CellState) -> Result<()> {
        self.set(pos.x, pos.y, state)
    }

    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&cell| cell == state).count()
    }

    /// Every cell with its position, row by row from `y = 0`.
    pub fn cells(&self) -> impl Iterator<Item = (Pos, CellState)> + '_ {
        self.cells.iter().enumerate().map(|(index, &state)| {
            let pos = Pos { y: (index / self.width) as i32, x: (index % self.width) as i32 };
            (pos, state)
        })
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(8 + self.cells.len());
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        for cell in &self.cells {
            bytes.push(match cell {
                CellState::Empty => 0,
                CellState::Floor => 1,
                CellState::Wall => 2,
            });
        }
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_all_empty() {
        let grid = Grid::new(5, 4);
        assert_eq!(grid.len(), 20);
        assert_eq!(grid.count(CellState::Empty), 20);
        assert_eq!(grid.count(CellState::Floor), 0);
    }

    #[test]
    fn set_then_get_reads_back_the_same_cell() {
        let mut grid = Grid::new(4, 3);
        grid.set(3, 2, CellState::Floor).expect("corner is in bounds");
        assert_eq!(grid.get(3, 2), Ok(CellState::Floor));
        assert_eq!(grid.get(2, 2), Ok(CellState::Empty));
        assert_eq!(grid.count(CellState::Floor), 1);
    }

    #[test]
    fn reads_past_either_edge_report_out_of_bounds() {
        let grid = Grid::new(6, 4);
        for (x, y) in [(6, 0), (-1, 0), (0, 4), (0, -1), (i32::MAX, i32::MIN)] {
            assert_eq!(
                grid.get(x, y),
                Err(GenError::OutOfBounds { x, y, width: 6, height: 4 }),
                "({x}, {y}) must not alias another cell"
            );
        }
    }

    #[test]
    fn out_of_bounds_write_leaves_grid_untouched() {
        let mut grid = Grid::new(3, 3);
        let before = grid.clone();
        assert!(grid.set(3, 0, CellState::Floor).is_err());
        assert!(grid.set(-1, 2, CellState::Wall).is_err());
        assert_eq!(grid, before);
    }

    #[test]
    fn cells_iterates_rows_from_the_bottom() {
        let mut grid = Grid::new(3, 2);
        grid.set(1, 1, CellState::Wall).expect("in bounds");
        let positions: Vec<Pos> = grid.cells().map(|(pos, _)| pos).collect();
        assert_eq!(positions[0], Pos { y: 0, x: 0 });
        assert_eq!(positions[3], Pos { y: 1, x: 0 });
        let walls: Vec<Pos> =
            grid.cells().filter(|(_, cell)| *cell == CellState::Wall).map(|(pos, _)| pos).collect();
        assert_eq!(walls, vec![Pos { y: 1, x: 1 }]);
    }

    #[test]
    fn fingerprint_tracks_cell_contents() {
        let mut a = Grid::new(4, 4);
        let b = Grid::new(4, 4);
        assert_eq!(a.fingerprint(), b.fingerprint());
        a.set(1, 1, CellState::Floor).expect("in bounds");
        assert_ne!(a.fingerprint(), b.fingerprint());
    }
}
