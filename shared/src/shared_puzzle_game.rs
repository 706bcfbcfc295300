use serde::{Serialize, Deserialize};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::constants::{PUZZLE_SIZE, PUZZLE_TIME_LIMIT_SECS, SHUFFLE_MOVES};

/// Square sliding-tile board. `tiles[position]` holds the original tile that
/// currently sits at `position`; the highest value is the empty slot.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TileGrid {
    size: usize,
    tiles: Vec<usize>,
}

/// Swap of the empty slot with one of its neighbours.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub empty: usize,
    pub tile: usize,
}

impl Move {
    /// The move that undoes this one.
    pub fn inverse(self) -> Move {
        Move {
            empty: self.tile,
            tile: self.empty,
        }
    }
}

impl TileGrid {
    /// Creates the solved board (identity permutation).
    pub fn solved(size: usize) -> Self {
        Self {
            size,
            tiles: (0..size * size).collect(),
        }
    }

    /// Builds a board from raw tiles. Returns None unless `tiles` is a
    /// permutation of `0..size*size`.
    pub fn from_tiles(size: usize, tiles: Vec<usize>) -> Option<Self> {
        let cells = size * size;
        if size == 0 || tiles.len() != cells {
            return None;
        }
        let mut seen = vec![false; cells];
        for &tile in &tiles {
            if tile >= cells || seen[tile] {
                return None;
            }
            seen[tile] = true;
        }
        Some(Self { size, tiles })
    }

    /// Solved board scrambled by `moves` uniformly random legal moves.
    pub fn shuffled<R: Rng + ?Sized>(size: usize, moves: usize, rng: &mut R) -> Self {
        let mut grid = Self::solved(size);
        for _ in 0..moves {
            if let Some(mv) = grid.random_move(rng) {
                grid.apply(mv);
            }
        }
        grid
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn tiles(&self) -> &[usize] {
        &self.tiles
    }

    pub fn empty_value(&self) -> usize {
        self.size * self.size - 1
    }

    pub fn empty_position(&self) -> usize {
        let empty = self.empty_value();
        self.tiles
            .iter()
            .position(|&tile| tile == empty)
            .unwrap_or(empty)
    }

    pub fn is_empty_at(&self, position: usize) -> bool {
        self.tiles.get(position) == Some(&self.empty_value())
    }

    /// Horizontal or vertical neighbours only; no diagonals, no wrapping rows.
    pub fn are_adjacent(&self, a: usize, b: usize) -> bool {
        let cells = self.size * self.size;
        if a >= cells || b >= cells {
            return false;
        }
        let (row_a, col_a) = (a / self.size, a % self.size);
        let (row_b, col_b) = (b / self.size, b % self.size);
        (row_a == row_b && col_a.abs_diff(col_b) == 1) || (col_a == col_b && row_a.abs_diff(row_b) == 1)
    }

    /// Every move currently available: one per tile touching the empty slot.
    pub fn legal_moves(&self) -> Vec<Move> {
        let empty = self.empty_position();
        let (row, col) = (empty / self.size, empty % self.size);
        let mut moves = Vec::with_capacity(4);
        if row > 0 {
            moves.push(Move { empty, tile: empty - self.size });
        }
        if row + 1 < self.size {
            moves.push(Move { empty, tile: empty + self.size });
        }
        if col > 0 {
            moves.push(Move { empty, tile: empty - 1 });
        }
        if col + 1 < self.size {
            moves.push(Move { empty, tile: empty + 1 });
        }
        moves
    }

    /// Picks one of the legal moves uniformly.
    pub fn random_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Move> {
        self.legal_moves().choose(rng).copied()
    }

    /// Applies `mv` if it is legal for the current board. Returns whether the
    /// board changed.
    pub fn apply(&mut self, mv: Move) -> bool {
        if !self.is_empty_at(mv.empty) || !self.are_adjacent(mv.empty, mv.tile) {
            return false;
        }
        self.tiles.swap(mv.empty, mv.tile);
        true
    }

    /// Slides the tile at `position` into the empty slot if they touch.
    pub fn slide(&mut self, position: usize) -> bool {
        let empty = self.empty_position();
        self.apply(Move { empty, tile: position })
    }

    pub fn is_solved(&self) -> bool {
        self.tiles.iter().enumerate().all(|(position, &tile)| position == tile)
    }

    /// Number of pairs (ignoring the empty slot) that appear out of order.
    pub fn inversions(&self) -> usize {
        let empty = self.empty_value();
        let tiles: Vec<usize> = self.tiles.iter().copied().filter(|&t| t != empty).collect();
        let mut count = 0;
        for i in 0..tiles.len() {
            for j in i + 1..tiles.len() {
                if tiles[i] > tiles[j] {
                    count += 1;
                }
            }
        }
        count
    }

    /// Standard 15-puzzle parity rule, generalised to any width: odd widths
    /// need an even inversion count; even widths need the inversion count plus
    /// the empty slot's row (counted from the bottom, starting at 1) to be odd.
    pub fn is_solvable(&self) -> bool {
        let inversions = self.inversions();
        if self.size % 2 == 1 {
            inversions % 2 == 0
        } else {
            let row_from_bottom = self.size - self.empty_position() / self.size;
            (inversions + row_from_bottom) % 2 == 1
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum PuzzlePhase {
    Shuffled,
    AutoSolveAvailable,
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Ignored,
    Moved,
    Solved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Idle,
    Counting(u32),
    Expired,
}

/// One puzzle instance: the board, its countdown and where it is in
/// `Shuffled -> AutoSolveAvailable -> Complete`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PuzzleGame {
    grid: TileGrid,
    seconds_left: u32,
    phase: PuzzlePhase,
}

impl PuzzleGame {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_grid(Self::fresh_grid(rng))
    }

    /// Starts an instance from an existing board with a full timer.
    pub fn from_grid(grid: TileGrid) -> Self {
        Self {
            grid,
            seconds_left: PUZZLE_TIME_LIMIT_SECS,
            phase: PuzzlePhase::Shuffled,
        }
    }

    // A random walk can come back to the identity; a new puzzle should never
    // start out solved.
    fn fresh_grid<R: Rng + ?Sized>(rng: &mut R) -> TileGrid {
        loop {
            let grid = TileGrid::shuffled(PUZZLE_SIZE, SHUFFLE_MOVES, rng);
            if !grid.is_solved() {
                return grid;
            }
        }
    }

    /// Throws the current instance away and starts a new one.
    pub fn reshuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        *self = Self::new(rng);
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn phase(&self) -> PuzzlePhase {
        self.phase
    }

    pub fn seconds_left(&self) -> u32 {
        self.seconds_left
    }

    pub fn is_complete(&self) -> bool {
        self.phase == PuzzlePhase::Complete
    }

    pub fn can_auto_solve(&self) -> bool {
        self.phase == PuzzlePhase::AutoSolveAvailable
    }

    pub fn move_tile(&mut self, position: usize) -> MoveOutcome {
        if self.is_complete() || !self.grid.slide(position) {
            return MoveOutcome::Ignored;
        }
        if self.grid.is_solved() {
            log::info!("Puzzle solved with {}s left", self.seconds_left);
            self.phase = PuzzlePhase::Complete;
            return MoveOutcome::Solved;
        }
        MoveOutcome::Moved
    }

    /// One elapsed second. Running out of time never fails the puzzle, it only
    /// unlocks auto-solve, and only once.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != PuzzlePhase::Shuffled || self.seconds_left == 0 {
            return TickOutcome::Idle;
        }
        self.seconds_left -= 1;
        if self.seconds_left == 0 {
            self.phase = PuzzlePhase::AutoSolveAvailable;
            return TickOutcome::Expired;
        }
        TickOutcome::Counting(self.seconds_left)
    }

    pub fn auto_solve(&mut self) -> bool {
        if !self.can_auto_solve() {
            return false;
        }
        self.grid = TileGrid::solved(self.grid.size());
        self.phase = PuzzlePhase::Complete;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn grid(tiles: &[usize]) -> TileGrid {
        TileGrid::from_tiles(3, tiles.to_vec()).expect("valid permutation")
    }

    #[test]
    fn test_identity_is_solved() {
        assert!(grid(&[0, 1, 2, 3, 4, 5, 6, 7, 8]).is_solved());
        assert!(!grid(&[0, 1, 2, 3, 4, 5, 6, 8, 7]).is_solved());
    }

    #[test]
    fn test_from_tiles_rejects_non_permutations() {
        assert!(TileGrid::from_tiles(3, vec![0, 1, 2, 3, 4, 5, 6, 7]).is_none());
        assert!(TileGrid::from_tiles(3, vec![0, 0, 2, 3, 4, 5, 6, 7, 8]).is_none());
        assert!(TileGrid::from_tiles(3, vec![0, 1, 2, 3, 4, 5, 6, 7, 9]).is_none());
    }

    #[test]
    fn test_adjacency_excludes_diagonals_and_row_wraps() {
        let g = TileGrid::solved(3);
        assert!(g.are_adjacent(4, 1));
        assert!(g.are_adjacent(4, 3));
        assert!(g.are_adjacent(4, 5));
        assert!(g.are_adjacent(4, 7));
        assert!(!g.are_adjacent(4, 0));
        assert!(!g.are_adjacent(4, 8));
        // end of one row and start of the next are not neighbours
        assert!(!g.are_adjacent(2, 3));
        assert!(!g.are_adjacent(5, 6));
        assert!(!g.are_adjacent(4, 4));
        assert!(!g.are_adjacent(8, 9));
    }

    #[test]
    fn test_legal_moves_from_corner_and_center() {
        let corner = TileGrid::solved(3);
        let mut tiles: Vec<usize> = corner.legal_moves().iter().map(|m| m.tile).collect();
        tiles.sort();
        assert_eq!(tiles, vec![5, 7]);

        let center = grid(&[0, 1, 2, 3, 8, 5, 6, 7, 4]);
        let mut tiles: Vec<usize> = center.legal_moves().iter().map(|m| m.tile).collect();
        tiles.sort();
        assert_eq!(tiles, vec![1, 3, 5, 7]);
    }

    #[test]
    fn test_slide_non_adjacent_is_ignored() {
        let mut g = TileGrid::solved(3);
        let before = g.clone();
        assert!(!g.slide(0));
        assert!(!g.slide(4));
        assert!(!g.slide(6));
        assert!(!g.slide(42));
        assert_eq!(g, before);

        assert!(g.slide(7));
        assert_eq!(g.tiles(), &[0, 1, 2, 3, 4, 5, 6, 8, 7]);
    }

    #[test]
    fn test_shuffle_stays_solvable() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let g = TileGrid::shuffled(3, SHUFFLE_MOVES, &mut rng);
            let mut sorted = g.tiles().to_vec();
            sorted.sort();
            assert_eq!(sorted, (0..9).collect::<Vec<_>>());
            assert!(g.is_solvable(), "seed {} produced {:?}", seed, g.tiles());
        }
    }

    #[test]
    fn test_parity_rule_flags_swapped_pair() {
        assert!(TileGrid::solved(3).is_solvable());
        assert!(!grid(&[1, 0, 2, 3, 4, 5, 6, 7, 8]).is_solvable());

        assert!(TileGrid::solved(4).is_solvable());
        let mut swapped: Vec<usize> = (0..16).collect();
        swapped.swap(0, 1);
        assert!(!TileGrid::from_tiles(4, swapped).unwrap().is_solvable());

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            assert!(TileGrid::shuffled(4, 100, &mut rng).is_solvable());
        }
    }

    #[test]
    fn test_inverse_moves_restore_identity() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut g = TileGrid::solved(3);
        let mut history = Vec::new();
        for _ in 0..40 {
            let mv = g.random_move(&mut rng).unwrap();
            assert!(g.apply(mv));
            history.push(mv);
        }
        for mv in history.into_iter().rev() {
            assert!(g.apply(mv.inverse()));
        }
        assert!(g.is_solved());
    }

    #[test]
    fn test_move_tile_detects_completion() {
        let mut game = PuzzleGame::from_grid(grid(&[0, 1, 2, 3, 4, 5, 6, 8, 7]));
        assert_eq!(game.move_tile(0), MoveOutcome::Ignored);
        assert_eq!(game.move_tile(8), MoveOutcome::Solved);
        assert!(game.is_complete());
        // Complete is terminal
        assert_eq!(game.move_tile(7), MoveOutcome::Ignored);
        assert!(game.grid().is_solved());
    }

    #[test]
    fn test_new_game_is_never_solved() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let game = PuzzleGame::new(&mut rng);
            assert!(!game.grid().is_solved());
            assert_eq!(game.phase(), PuzzlePhase::Shuffled);
            assert_eq!(game.seconds_left(), PUZZLE_TIME_LIMIT_SECS);
        }
    }

    #[test]
    fn test_timer_unlocks_auto_solve_once() {
        let mut game = PuzzleGame::from_grid(grid(&[0, 1, 2, 3, 4, 5, 6, 8, 7]));
        assert!(!game.auto_solve());
        for _ in 0..PUZZLE_TIME_LIMIT_SECS - 1 {
            assert!(matches!(game.tick(), TickOutcome::Counting(_)));
        }
        assert_eq!(game.tick(), TickOutcome::Expired);
        assert!(game.can_auto_solve());
        assert_eq!(game.tick(), TickOutcome::Idle);
        assert_eq!(game.seconds_left(), 0);

        assert!(game.auto_solve());
        assert!(game.is_complete());
        assert!(game.grid().is_solved());
        assert!(!game.auto_solve());
    }

    #[test]
    fn test_timer_stops_after_completion() {
        let mut game = PuzzleGame::from_grid(grid(&[0, 1, 2, 3, 4, 5, 6, 8, 7]));
        game.tick();
        assert_eq!(game.move_tile(8), MoveOutcome::Solved);
        let left = game.seconds_left();
        assert_eq!(game.tick(), TickOutcome::Idle);
        assert_eq!(game.seconds_left(), left);
        assert!(!game.can_auto_solve());
    }

    #[test]
    fn test_moves_still_allowed_after_expiry() {
        let mut game = PuzzleGame::from_grid(grid(&[0, 1, 2, 3, 4, 5, 6, 8, 7]));
        for _ in 0..PUZZLE_TIME_LIMIT_SECS {
            game.tick();
        }
        assert!(game.can_auto_solve());
        assert_eq!(game.move_tile(8), MoveOutcome::Solved);
        assert!(game.is_complete());
    }

    #[test]
    fn test_reshuffle_resets_instance() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut game = PuzzleGame::from_grid(grid(&[0, 1, 2, 3, 4, 5, 6, 8, 7]));
        game.move_tile(8);
        game.reshuffle(&mut rng);
        assert_eq!(game.phase(), PuzzlePhase::Shuffled);
        assert_eq!(game.seconds_left(), PUZZLE_TIME_LIMIT_SECS);
        assert!(game.grid().is_solvable());
    }
}
