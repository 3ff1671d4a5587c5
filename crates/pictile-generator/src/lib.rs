//! Scramble generation for sliding picture puzzles.
//!
//! The generator walks the blank of a solved board through a fixed number of
//! uniform random neighbor swaps. Every board it emits is therefore reachable
//! from the solved state by construction — no solvability retry loop — and the
//! walk doubles as a [`SolutionTrace`] that guided hints consume in reverse.
//!
//! This random-walk strategy is used exclusively; mixing in fair-shuffle
//! generation would break the trace contract.
//!
//! Scrambles are seeded and reproducible: the same seed always yields the
//! same board and trace.
//!
//! # Examples
//!
//! ```
//! use pictile_core::{GridSize, solvability};
//! use pictile_generator::Scrambler;
//!
//! let scrambled = Scrambler::from_seed(42).scramble(GridSize::Three);
//! assert!(!scrambled.board.is_solved());
//! assert!(solvability::is_solvable(&scrambled.board));
//!
//! // Rewinding the trace walks the board back to solved.
//! let mut board = scrambled.board.clone();
//! scrambled.trace.rewind(&mut board);
//! assert!(board.is_solved());
//! ```

use pictile_core::{Board, GridSize, Move, SolutionTrace, solvability};
use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;

pub use pictile_core::rotation::RotationBoard;

/// A scrambled board together with its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrambledBoard {
    /// The scrambled, guaranteed-solvable board.
    pub board: Board,
    /// The walk that produced the board, oldest move first. Rewinding it
    /// returns the board to solved.
    pub trace: SolutionTrace,
    /// Seed that reproduces this scramble.
    pub seed: u64,
}

/// Produces randomized, guaranteed-solvable boards by random walk from the
/// solved state.
///
/// A scrambler is cheap to construct; the game builds a fresh one (with a
/// fresh seed) per level start. Holding the seed rather than RNG state keeps
/// scrambles reproducible from the [`ScrambledBoard::seed`] field alone.
#[derive(Debug, Clone)]
pub struct Scrambler {
    seed: u64,
    walk_steps: Option<usize>,
}

impl Scrambler {
    /// Creates a scrambler with a randomly drawn seed.
    #[must_use]
    pub fn new() -> Self {
        Self::from_seed(rand::rng().random())
    }

    /// Creates a scrambler that reproduces the scramble for `seed`.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            walk_steps: None,
        }
    }

    /// Overrides the walk length.
    ///
    /// The default is ten walk steps per cell, far past the point of visual
    /// scrambling. Short walks give boards a few taps from solved, which is
    /// what the tutorial levels and the tests want.
    #[must_use]
    pub fn walk_steps(mut self, steps: usize) -> Self {
        self.walk_steps = Some(steps);
        self
    }

    /// Returns the seed this scrambler draws from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn steps_for(&self, size: GridSize) -> usize {
        self.walk_steps.unwrap_or(size.cells() * 10)
    }

    /// Scrambles a sliding board of the given size.
    ///
    /// The walk picks uniformly among the blank's neighbors at every step and
    /// records each swap into the trace. A walk that happens to land back on
    /// the solved board is discarded and redrawn, so players never see a
    /// finished puzzle at level start (a zero-step walk stays solved on
    /// purpose).
    #[must_use]
    pub fn scramble(&self, size: GridSize) -> ScrambledBoard {
        let mut rng = Pcg64Mcg::seed_from_u64(self.seed);
        let steps = self.steps_for(size);

        loop {
            let mut board = Board::solved(size);
            let mut trace = SolutionTrace::new();
            for _ in 0..steps {
                let blank = board.blank_position();
                let neighbors: Vec<usize> = size.neighbors(blank).collect();
                let cell = neighbors[rng.random_range(0..neighbors.len())];
                let applied = board.apply_move(cell);
                debug_assert!(applied, "blank neighbors are always legal moves");
                trace.push(Move {
                    from: cell,
                    to: blank,
                });
            }

            if steps > 0 && board.is_solved() {
                // The walk closed a loop; draw a fresh one.
                continue;
            }

            debug_assert!(solvability::is_solvable(&board));
            log::debug!(
                "scrambled {size} board in {steps} steps (seed={seed})",
                seed = self.seed
            );
            return ScrambledBoard {
                board,
                trace,
                seed: self.seed,
            };
        }
    }

    /// Deals a scrambled rotation board of the given size.
    ///
    /// Rotations are drawn uniformly per cell; an all-upright deal is redrawn
    /// so the variant never starts solved.
    #[must_use]
    pub fn scramble_rotations(&self, size: GridSize) -> RotationBoard {
        use pictile_core::Rotation;

        let mut rng = Pcg64Mcg::seed_from_u64(self.seed);
        loop {
            let rotations: Vec<Rotation> = (0..size.cells())
                .map(|_| Rotation::from_quarter_turns(rng.random_range(0..4)))
                .collect();
            let board = RotationBoard::from_rotations(size, rotations)
                .expect("one rotation was drawn per cell");
            if !board.is_solved() {
                return board;
            }
        }
    }
}

impl Default for Scrambler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrambles_are_solvable() {
        for size in GridSize::ALL {
            for seed in 0..20 {
                let scrambled = Scrambler::from_seed(seed).scramble(size);
                assert!(
                    solvability::is_solvable(&scrambled.board),
                    "size={size} seed={seed}"
                );
                assert!(!scrambled.board.is_solved());
            }
        }
    }

    #[test]
    fn test_same_seed_reproduces_the_scramble() {
        let first = Scrambler::from_seed(7).scramble(GridSize::Four);
        let second = Scrambler::from_seed(7).scramble(GridSize::Four);
        assert_eq!(first, second);
        assert_eq!(first.seed, 7);

        let other = Scrambler::from_seed(8).scramble(GridSize::Four);
        assert_ne!(first.board, other.board);
    }

    #[test]
    fn test_trace_rewinds_to_solved() {
        for seed in 0..10 {
            let scrambled = Scrambler::from_seed(seed).scramble(GridSize::Five);
            let mut board = scrambled.board.clone();
            scrambled.trace.rewind(&mut board);
            assert!(board.is_solved(), "seed={seed}");
        }
    }

    #[test]
    fn test_walk_steps_bounds_the_trace() {
        let scrambled = Scrambler::from_seed(3).walk_steps(5).scramble(GridSize::Three);
        assert_eq!(scrambled.trace.len(), 5);
    }

    #[test]
    fn test_zero_steps_stays_solved() {
        let scrambled = Scrambler::from_seed(1).walk_steps(0).scramble(GridSize::Three);
        assert!(scrambled.board.is_solved());
        assert!(scrambled.trace.is_empty());
    }

    #[test]
    fn test_rotation_deals_are_never_solved() {
        for size in GridSize::ALL {
            for seed in 0..20 {
                let board = Scrambler::from_seed(seed).scramble_rotations(size);
                assert!(!board.is_solved(), "size={size} seed={seed}");
                assert_eq!(board.rotations().len(), size.cells());
            }
        }
    }

    #[test]
    fn test_rotation_deals_are_reproducible() {
        let first = Scrambler::from_seed(11).scramble_rotations(GridSize::Four);
        let second = Scrambler::from_seed(11).scramble_rotations(GridSize::Four);
        assert_eq!(first, second);
    }
}
