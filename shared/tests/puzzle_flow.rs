use rand::rngs::StdRng;
use rand::SeedableRng;

use shared::constants::{PUZZLE_SIZE, PUZZLE_TIME_LIMIT_SECS};
use shared::shared_puzzle_game::{MoveOutcome, PuzzleGame, PuzzlePhase, TickOutcome, TileGrid};

#[test]
fn test_undoing_the_shuffle_solves_the_puzzle() {
    let mut rng = StdRng::seed_from_u64(1234);
    let mut grid = TileGrid::solved(PUZZLE_SIZE);
    let mut history = Vec::new();
    for _ in 0..40 {
        let mv = grid.random_move(&mut rng).unwrap();
        assert!(grid.apply(mv));
        history.push(mv);
    }
    assert!(grid.is_solvable());

    let mut game = PuzzleGame::from_grid(grid);
    let mut last = MoveOutcome::Ignored;
    for mv in history.into_iter().rev() {
        // Sliding the tile that sits where the empty slot used to be
        let inverse = mv.inverse();
        last = game.move_tile(inverse.tile);
        if last == MoveOutcome::Solved {
            break;
        }
        assert_eq!(last, MoveOutcome::Moved);
    }
    assert_eq!(last, MoveOutcome::Solved);
    assert!(game.is_complete());
    assert_eq!(game.tick(), TickOutcome::Idle);
}

#[test]
fn test_timeout_unlocks_auto_solve_without_failing() {
    let mut rng = StdRng::seed_from_u64(77);
    let mut game = PuzzleGame::new(&mut rng);
    let before = game.grid().clone();

    let mut expired = 0;
    for _ in 0..PUZZLE_TIME_LIMIT_SECS + 10 {
        if game.tick() == TickOutcome::Expired {
            expired += 1;
        }
    }
    assert_eq!(expired, 1);
    assert_eq!(game.phase(), PuzzlePhase::AutoSolveAvailable);
    assert_eq!(game.grid(), &before);

    assert!(game.auto_solve());
    assert!(game.grid().is_solved());
    assert!(!game.auto_solve());
}
