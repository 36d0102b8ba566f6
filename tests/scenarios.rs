mod common;

use common::shortest_by_deepening;
use sliding_puzzle_solver::{
    Board, Direction, Exhaustion, InvalidStateError, Outcome, Solver, neighbors, solve,
};

fn board(tiles: &[u8]) -> Board {
    Board::from_tiles(tiles.iter().copied()).unwrap()
}

#[test]
fn test_blank_swapped_with_eight() {
    let result = Solver::default()
        .solve(board(&[1, 2, 3, 4, 5, 6, 7, 0, 8]))
        .unwrap();
    let path = result.path().unwrap();
    assert_eq!(path.len(), 2);
    assert_eq!(path.goal().tiles(), &[1, 2, 3, 4, 5, 6, 7, 8, 0]);
}

#[test]
fn test_two_moves_from_goal() {
    let initial = board(&[1, 2, 3, 4, 5, 6, 0, 7, 8]);
    let result = Solver::default().solve(initial.clone()).unwrap();
    let path = result.path().unwrap();
    assert_eq!(path.move_count(), 2);
    assert_eq!(path.initial(), &initial);
    assert_eq!(path.goal(), &Board::default());
}

#[test]
fn test_goal_is_trivially_solved() {
    let result = Solver::default().solve(Board::default()).unwrap();
    let path = result.path().unwrap();
    assert_eq!(path.len(), 1);
    assert_eq!(path.move_count(), 0);
    assert!(path.moves().is_empty());
}

#[test]
fn test_odd_permutation_is_exhausted() {
    let result = Solver::default()
        .solve(board(&[1, 2, 3, 4, 5, 6, 8, 7, 0]))
        .unwrap();
    assert!(!result.is_solved());
    assert_eq!(result.outcome, Outcome::Exhausted(Exhaustion::StateSpace));
}

#[test]
fn test_invalid_input_is_rejected() {
    assert!(matches!(
        Board::from_tiles([1u8, 2, 3, 4, 5, 6, 7, 8]),
        Err(InvalidStateError::NotSquare(8))
    ));
    assert!(matches!(
        Board::new(3, [1u8, 1, 3, 4, 5, 6, 7, 8, 0]),
        Err(InvalidStateError::Duplicate(1))
    ));
    assert!(matches!(
        Board::new(3, [1u8, 2, 3, 4, 5, 6, 7, 8, 9]),
        Err(InvalidStateError::OutOfRange { tile: 9, limit: 9 })
    ));
}

#[test]
fn test_every_2x2_board() {
    // all 4! arrangements: half reach the goal, half exhaust
    let goal = Board::goal(2).unwrap();
    let mut solved = 0;
    for a in 0u8..4 {
        for b in (0u8..4).filter(|&b| b != a) {
            for c in (0u8..4).filter(|&c| c != a && c != b) {
                let d = 6 - a - b - c;
                let initial = board(&[a, b, c, d]);
                let result = solve(initial.clone(), goal.clone(), usize::MAX).unwrap();
                let expected = shortest_by_deepening(&initial, &goal, 12);
                assert_eq!(result.path().map(|p| p.move_count()), expected);
                if result.is_solved() {
                    solved += 1;
                } else {
                    assert_eq!(result.states, 12);
                }
            }
        }
    }
    assert_eq!(solved, 12);
}

#[test]
fn test_path_is_a_chain_of_slides() {
    let initial = board(&[4, 1, 3, 7, 2, 6, 0, 5, 8]);
    let result = Solver::default().solve(initial.clone()).unwrap();
    let path = result.path().unwrap();
    assert_eq!(path.move_count(), shortest_by_deepening(&initial, &Board::default(), 10).unwrap());
    for pair in path.windows(2) {
        assert!(neighbors(&pair[0]).iter().any(|(_, next)| next == &pair[1]));
    }
    assert_eq!(initial.apply_moves(&path.moves()), Some(Board::default()));
}

#[test]
fn test_4x4_near_goal() {
    let goal = Board::goal(4).unwrap();
    let moves = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];
    let initial = goal.apply_moves(&moves).unwrap();
    let result = solve(initial, goal.clone(), 1_000_000).unwrap();
    let path = result.path().unwrap();
    assert_eq!(path.move_count(), 5);
    assert_eq!(path.goal(), &goal);
}

#[test]
fn test_results_are_deterministic() {
    let initial = board(&[0, 1, 3, 4, 2, 5, 7, 8, 6]);
    let first = Solver::default().solve(initial.clone()).unwrap();
    let second = Solver::default().solve(initial).unwrap();
    assert_eq!(first.outcome, second.outcome);
    assert_eq!(first.states, second.states);
    assert_eq!(first.path().unwrap().move_count(), 4);
}
