use sliding_puzzle_solver::{Board, Direction};

/// Independent depth-first check: the fewest slides from `start` to `goal`,
/// searching no deeper than `max_depth`.
pub fn shortest_by_deepening(start: &Board, goal: &Board, max_depth: usize) -> Option<usize> {
    fn reaches(board: &Board, goal: &Board, depth: usize, last: Option<Direction>) -> bool {
        if board == goal {
            return true;
        }
        if depth == 0 {
            return false;
        }
        Direction::ALL
            .into_iter()
            .filter(|dir| Some(dir.opposite()) != last)
            .filter_map(|dir| board.slide(dir).map(|next| (dir, next)))
            .any(|(dir, next)| reaches(&next, goal, depth - 1, Some(dir)))
    }
    (0..=max_depth).find(|&depth| reaches(start, goal, depth, None))
}
