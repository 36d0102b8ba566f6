//! This crate finds shortest solutions for N×N sliding-tile puzzles with an
//! exhaustive breadth-first search.
//!
pub mod board;
pub mod error;
pub mod moves;
pub mod solver;

pub use crate::board::Board;
pub use crate::error::{EmptyFrontierError, InvalidStateError, SolveError};
pub use crate::moves::{Direction, format_moves, neighbors};
pub use crate::solver::{Exhaustion, Outcome, Path, SolveResult, Solver, solve};
