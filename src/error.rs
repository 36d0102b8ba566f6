use thiserror::Error;

/// A tile sequence that does not describe a valid board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidStateError {
    #[error("Board side must be between 2 and 15, got {0}")]
    UnsupportedSide(usize),
    #[error("Expected {expected} tiles, found {found}")]
    WrongLength { expected: usize, found: usize },
    #[error("Tile count {0} is not a perfect square")]
    NotSquare(usize),
    #[error("Tile {tile} is out of range 0..{limit}")]
    OutOfRange { tile: u64, limit: usize },
    #[error("Tile {0} appears more than once")]
    Duplicate(u8),
    #[error("Invalid tile `{0}`")]
    Parse(String),
}

/// Raised by [`Frontier::pop`](crate::solver::Frontier::pop) once every
/// discovered state has been expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Frontier is empty")]
pub struct EmptyFrontierError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("Goal is a {goal}x{goal} board but the initial board is {initial}x{initial}")]
    SizeMismatch { initial: usize, goal: usize },
}
