//! Uninformed breadth-first search from an initial board to a goal board.

mod frontier;
mod path;

pub use self::frontier::Frontier;
pub use self::path::{ParentMap, Path};

use crate::board::Board;
use crate::error::{EmptyFrontierError, SolveError};
use crate::moves::neighbors;

use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Default cap on discovered boards (the full 3x3 space is 181,440).
pub const DEFAULT_MAX_STATES: usize = 10_000_000;
const PROGRESS_INTERVAL: usize = 100_000;

pub fn solve(initial: Board, goal: Board, max_states: usize) -> Result<SolveResult, SolveError> {
    Solver::new(goal).with_max_states(max_states).solve(initial)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveResult {
    pub outcome: Outcome,
    /// Boards discovered, including the initial one.
    pub states: usize,
    /// Boards taken off the frontier and expanded.
    pub expanded: usize,
    pub elapsed: Duration,
}

impl SolveResult {
    pub fn path(&self) -> Option<&Path> {
        match &self.outcome {
            Outcome::Solved(path) => Some(path),
            Outcome::Exhausted(_) => None,
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self.outcome, Outcome::Solved(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Solved(Path),
    Exhausted(Exhaustion),
}

/// Why a search ended without reaching the goal.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Exhaustion {
    /// Every board reachable from the start was expanded.
    StateSpace,
    /// The caller's state budget ran out first.
    Budget(usize),
}

impl fmt::Display for Exhaustion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exhaustion::StateSpace => write!(f, "goal is unreachable from the initial board"),
            Exhaustion::Budget(limit) => write!(f, "reached max states {limit}"),
        }
    }
}

/// Holds the goal and the budget for any number of independent searches.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    goal: Board,
    max_states: Option<usize>,
}

impl Solver {
    pub fn new(goal: Board) -> Self {
        Self {
            goal,
            max_states: None,
        }
    }

    /// Stops the search once more than this many boards have been discovered.
    pub fn with_max_states(mut self, max_states: usize) -> Self {
        self.max_states = Some(max_states);
        self
    }

    pub fn goal(&self) -> &Board {
        &self.goal
    }

    pub fn solve(&self, initial: Board) -> Result<SolveResult, SolveError> {
        if initial.side() != self.goal.side() {
            return Err(SolveError::SizeMismatch {
                initial: initial.side(),
                goal: self.goal.side(),
            });
        }

        let timer = Instant::now();
        let mut search = Search::new(initial, self.goal.clone());
        let outcome = loop {
            match search.step() {
                Step::Expanding => {
                    if let Some(limit) = self.max_states
                        && search.states() > limit
                    {
                        debug!(limit, "state budget exhausted");
                        break Outcome::Exhausted(Exhaustion::Budget(limit));
                    }
                }
                Step::Found(path) => break Outcome::Solved(path),
                Step::Exhausted => break Outcome::Exhausted(Exhaustion::StateSpace),
            }
        };

        Ok(SolveResult {
            outcome,
            states: search.states(),
            expanded: search.expanded(),
            elapsed: timer.elapsed(),
        })
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    Expanding,
    Found,
    Exhausted,
}

/// What a single [`Search::step`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Expanding,
    Found(Path),
    Exhausted,
}

/// One in-flight breadth-first search. Owns its frontier and parent links;
/// both are dropped with it.
#[derive(Debug)]
pub struct Search {
    goal: Board,
    frontier: Frontier,
    parents: ParentMap,
    phase: Phase,
    expanded: usize,
}

impl Search {
    /// Seeds the frontier with `initial`, going straight to [`Phase::Found`]
    /// when it already is the goal.
    pub fn new(initial: Board, goal: Board) -> Self {
        debug!(side = initial.side(), %initial, "starting search");
        let phase = if initial == goal {
            Phase::Found
        } else {
            Phase::Expanding
        };
        let mut frontier = Frontier::new();
        frontier.push(initial);
        Self {
            goal,
            frontier,
            parents: ParentMap::new(),
            phase,
            expanded: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn states(&self) -> usize {
        self.frontier.visited()
    }

    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Expands the next board on the frontier.
    ///
    /// The goal is detected when it is first discovered, not when it would
    /// later be expanded. Once a terminal phase is reached every further call
    /// returns the same result.
    pub fn step(&mut self) -> Step {
        match self.phase {
            Phase::Found => return Step::Found(self.parents.path_to(&self.goal)),
            Phase::Exhausted => return Step::Exhausted,
            Phase::Expanding => {}
        }

        let current = match self.frontier.pop() {
            Ok(board) => board,
            Err(EmptyFrontierError) => {
                debug!(
                    states = self.states(),
                    expanded = self.expanded,
                    "frontier exhausted"
                );
                self.phase = Phase::Exhausted;
                return Step::Exhausted;
            }
        };

        self.expanded += 1;
        if self.expanded % PROGRESS_INTERVAL == 0 {
            trace!(
                expanded = self.expanded,
                states = self.states(),
                frontier = self.frontier.len(),
                "searching"
            );
        }

        for (_, next) in neighbors(&current) {
            if !self.frontier.is_new(&next) {
                continue;
            }
            self.parents.insert(next.clone(), current.clone());
            let found = next == self.goal;
            self.frontier.push(next);
            if found {
                debug!(
                    states = self.states(),
                    expanded = self.expanded,
                    "goal found"
                );
                self.phase = Phase::Found;
                return Step::Found(self.parents.path_to(&self.goal));
            }
        }

        Step::Expanding
    }
}
