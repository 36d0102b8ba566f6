use crate::board::{Board, Tiles};

use smallvec::SmallVec;
use std::fmt;

/// Neighboring boards paired with the slide that produced them.
pub type Neighbors = SmallVec<[(Direction, Board); 4]>;

/// The direction the blank travels during one slide.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Expansion order. Changing it changes which of several equally short
    /// solutions is returned.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }

    /// The direction the blank moved between two boards one slide apart.
    pub fn between(from: &Board, to: &Board) -> Option<Self> {
        if from.side() != to.side() {
            return None;
        }
        let (row, col) = from.blank_coords();
        let (to_row, to_col) = to.blank_coords();
        let delta = (
            to_row as isize - row as isize,
            to_col as isize - col as isize,
        );
        Direction::ALL
            .into_iter()
            .find(|dir| dir.offset() == delta)
            .filter(|&dir| from.slide(dir).as_ref() == Some(to))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        };
        f.write_str(s)
    }
}

impl Board {
    /// Moves the blank one cell in `dir`, or `None` if it would leave the grid.
    pub fn slide(&self, dir: Direction) -> Option<Board> {
        let side = self.side() as isize;
        let blank = self.blank_position();
        let (row, col) = ((blank as isize) / side, (blank as isize) % side);
        let (dr, dc) = dir.offset();
        let (new_row, new_col) = (row + dr, col + dc);
        if !(0..side).contains(&new_row) || !(0..side).contains(&new_col) {
            return None;
        }
        let target = (new_row * side + new_col) as usize;
        let mut tiles: Tiles = self.tiles().iter().copied().collect();
        tiles.swap(blank, target);
        Some(Board::from_raw(self.side() as u8, tiles))
    }

    /// Replays `moves` from this board, failing on the first illegal slide.
    pub fn apply_moves(&self, moves: &[Direction]) -> Option<Board> {
        moves
            .iter()
            .try_fold(self.clone(), |board, &dir| board.slide(dir))
    }
}

/// Every board one slide away from `board`, in [`Direction::ALL`] order.
pub fn neighbors(board: &Board) -> Neighbors {
    Direction::ALL
        .into_iter()
        .filter_map(|dir| board.slide(dir).map(|next| (dir, next)))
        .collect()
}

pub fn format_moves(moves: &[Direction]) -> String {
    let mut output = String::new();
    for chunk in moves.chunks(10) {
        let line: Vec<String> = chunk.iter().map(|dir| dir.letter().to_string()).collect();
        output.push_str(&line.join(" "));
        output.push('\n');
    }
    output
}
