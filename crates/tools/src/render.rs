//! Text rendering and tilemap placement for finished grids.
//!
//! The core never draws anything. These helpers map each cell to a glyph or to
//! the integer tile coordinate a tilemap would receive.

use levelgen_core::{CellState, Grid, Pos};
use serde::Serialize;

pub fn glyph(cell: CellState) -> char {
    match cell {
        CellState::Empty => ' ',
        CellState::Floor => '.',
        CellState::Wall => '#',
    }
}

/// One line per row, highest `y` first so the picture reads y-up.
pub fn render_ascii(grid: &Grid) -> String {
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for y in (0..grid.height() as i32).rev() {
        for x in 0..grid.width() as i32 {
            out.push(grid.get(x, y).map_or('?', glyph));
        }
        out.push('\n');
    }
    out
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TileLayer {
    Floor,
    Walls,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TilePlacement {
    pub layer: TileLayer,
    pub x: i32,
    pub y: i32,
}

/// World-space tile coordinate of a cell, centring the room on the origin.
/// Fractions are truncated toward zero.
pub fn tile_position(pos: Pos, world_units_per_cell: f64, room_size: [f64; 2]) -> (i32, i32) {
    let x = pos.x as f64 * world_units_per_cell - room_size[0] / 2.0;
    let y = pos.y as f64 * world_units_per_cell - room_size[1] / 2.0;
    (x as i32, y as i32)
}

/// Tiles for every non-empty cell, in row-major order.
pub fn tile_placements(
    grid: &Grid,
    world_units_per_cell: f64,
    room_size: [f64; 2],
) -> Vec<TilePlacement> {
    grid.cells()
        .filter_map(|(pos, cell)| {
            let layer = match cell {
                CellState::Empty => return None,
                CellState::Floor => TileLayer::Floor,
                CellState::Wall => TileLayer::Walls,
            };
            let (x, y) = tile_position(pos, world_units_per_cell, room_size);
            Some(TilePlacement { layer, x, y })
        })
        .collect()
}
