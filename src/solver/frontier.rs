use crate::board::Board;
use crate::error::EmptyFrontierError;

use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// FIFO queue of boards awaiting expansion, plus the set of every board that
/// has ever been queued.
///
/// A board is marked visited in the same step it is queued, so no board can
/// enter the queue twice even before it is expanded.
#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<Board>,
    visited: FxHashSet<Board>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity / 4),
            visited: FxHashSet::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// True if `board` was never queued.
    pub fn is_new(&self, board: &Board) -> bool {
        !self.visited.contains(board)
    }

    /// Queues `board` and marks it visited. Returns false, leaving the
    /// frontier untouched, when it was already seen.
    pub fn push(&mut self, board: Board) -> bool {
        if !self.visited.insert(board.clone()) {
            return false;
        }
        self.queue.push_back(board);
        true
    }

    pub fn pop(&mut self) -> Result<Board, EmptyFrontierError> {
        self.queue.pop_front().ok_or(EmptyFrontierError)
    }

    /// Boards waiting to be expanded.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Boards ever queued, expanded or not.
    pub fn visited(&self) -> usize {
        self.visited.len()
    }
}
