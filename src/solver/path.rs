use crate::board::Board;
use crate::moves::Direction;

use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;
use std::ops::Deref;

/// Maps each discovered board to the board it was first reached from.
/// The initial board has no entry.
#[derive(Debug, Default)]
pub struct ParentMap {
    parents: FxHashMap<Board, Board>,
}

impl ParentMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `parent` for `child` unless `child` already has one.
    pub fn insert(&mut self, child: Board, parent: Board) -> bool {
        match self.parents.entry(child) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(parent);
                true
            }
        }
    }

    pub fn get(&self, child: &Board) -> Option<&Board> {
        self.parents.get(child)
    }

    /// Walks parent links back from `goal` to the board with no parent and
    /// returns the boards in forward order.
    pub fn path_to(&self, goal: &Board) -> Path {
        let mut boards = vec![goal.clone()];
        let mut current = goal;
        // acyclic: a board only gets a parent the first time it is seen
        while let Some(parent) = self.parents.get(current) {
            boards.push(parent.clone());
            current = parent;
        }
        boards.reverse();
        Path(boards)
    }
}

/// Boards from the initial arrangement to the goal, one slide apart.
///
/// Always holds at least one board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path(Vec<Board>);

impl Path {
    pub fn initial(&self) -> &Board {
        &self.0[0]
    }

    pub fn goal(&self) -> &Board {
        &self.0[self.0.len() - 1]
    }

    pub fn move_count(&self) -> usize {
        self.0.len() - 1
    }

    pub fn moves(&self) -> Vec<Direction> {
        self.0
            .windows(2)
            .filter_map(|pair| Direction::between(&pair[0], &pair[1]))
            .collect()
    }
}

impl Deref for Path {
    type Target = [Board];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Board> for Path {
    fn from(board: Board) -> Self {
        Path(vec![board])
    }
}
