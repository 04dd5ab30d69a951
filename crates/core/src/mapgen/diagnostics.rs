//! Read-only measurements over a grid.

use crate::types::{CellState, Direction, Pos};

use super::grid::Grid;

pub fn fill_ratio(grid: &Grid) -> f64 {
    if grid.is_empty() {
        return 0.0;
    }
    grid.count(CellState::Floor) as f64 / grid.len() as f64
}

/// Floor cells with at least one Empty 4-neighbour. Off-grid neighbours do not count.
pub fn exposed_floor_cells(grid: &Grid) -> Vec<Pos> {
    grid.cells()
        .filter(|&(_, state)| state == CellState::Floor)
        .map(|(pos, _)| pos)
        .filter(|&pos| {
            Direction::ALL
                .iter()
                .any(|&direction| grid.get_pos(pos.step(direction)) == Ok(CellState::Empty))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_ratio_is_floor_share_of_all_cells() {
        let mut grid = Grid::new(5, 4);
        assert_eq!(fill_ratio(&grid), 0.0);
        for x in 0..5 {
            grid.set(x, 1, CellState::Floor).expect("in bounds");
        }
        grid.set(0, 0, CellState::Wall).expect("in bounds");
        assert_eq!(fill_ratio(&grid), 0.25);
    }

    #[test]
    fn walls_do_not_count_toward_fill() {
        let mut grid = Grid::new(3, 3);
        grid.set(1, 1, CellState::Wall).expect("in bounds");
        assert_eq!(fill_ratio(&grid), 0.0);
    }

    #[test]
    fn floor_is_exposed_until_surrounded() {
        let mut grid = Grid::new(3, 3);
        grid.set(1, 1, CellState::Floor).expect("in bounds");
        assert_eq!(exposed_floor_cells(&grid), vec![Pos { y: 1, x: 1 }]);

        for (x, y) in [(1, 0), (0, 1), (2, 1)] {
            grid.set(x, y, CellState::Wall).expect("in bounds");
        }
        grid.set(1, 2, CellState::Floor).expect("in bounds");
        assert_eq!(exposed_floor_cells(&grid), vec![Pos { y: 2, x: 1 }]);
    }
}
