//! Wall thickening around carved floor.

use crate::error::Result;
use crate::types::{CellState, Direction, Pos};

use super::grid::Grid;

/// Turns every Empty 4-neighbour of a Floor cell into Wall and returns how
/// many walls were placed.
///
/// Floor cells are scanned over `x in [0, width-1)`, `y in [0, height-1)`:
/// the last column and row are never inspected as sources. Walkers never
/// reach that ring, so in practice every floor cell is covered.
///
/// Sources are collected before anything is written, which keeps the result
/// independent of sweep order.
pub fn build_walls(grid: &mut Grid) -> Result<usize> {
    let mut floors = Vec::new();
    for x in 0..grid.width().saturating_sub(1) {
        for y in 0..grid.height().saturating_sub(1) {
            let pos = Pos { y: y as i32, x: x as i32 };
            if grid.get_pos(pos)? == CellState::Floor {
                floors.push(pos);
            }
        }
    }

    let mut placed = 0;
    for floor in floors {
        for direction in Direction::ALL {
            let neighbour = floor.step(direction);
            if grid.get_pos(neighbour)? == CellState::Empty {
                grid.set_pos(neighbour, CellState::Wall)?;
                placed += 1;
            }
        }
    }
    Ok(placed)
}
