use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self { y: self.y + dy, x: self.x + dx }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Empty,
    Floor,
    Wall,
}

/// Cardinal unit step. `Up` is +y, matching a y-up world where row 0 is the bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    Down,
    Left,
    Up,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::Down, Direction::Left, Direction::Up, Direction::Right];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Up => (0, 1),
            Direction::Right => (1, 0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Walker {
    pub pos: Pos,
    pub direction: Direction,
}

/// Loop state of a generation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    Running,
    Converged,
    Exhausted,
    /// A walker left the grid; the run cannot continue.
    Aborted,
}

impl RunState {
    pub fn is_finished(self) -> bool {
        self != RunState::Running
    }
}

/// Why a finished run stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// Fill ratio went strictly above the target.
    Converged,
    /// Iteration cap reached first; the grid is usable but under-filled.
    Exhausted,
}
