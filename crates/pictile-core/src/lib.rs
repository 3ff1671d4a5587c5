//! Core data structures for sliding picture puzzles.
//!
//! This crate provides the board state and rules shared by scramble generation
//! and game management components:
//!
//! - [`GridSize`]: the supported square grid sizes (3×3, 4×4, 5×5) and their
//!   cell geometry, including Manhattan adjacency.
//! - [`Tile`] and [`Board`]: a permutation of tile identities over grid cells,
//!   with move validation and win detection. The highest identity on a board
//!   is the blank tile.
//! - [`solvability`]: the classic 15-puzzle parity invariant deciding whether
//!   a permutation is reachable from the solved board.
//! - [`Move`] and [`SolutionTrace`]: the move log produced while scrambling,
//!   consumable in reverse to walk a board back to solved.
//! - [`rotation`]: the rotation-tile puzzle variant, where tiles stay in place
//!   and are turned upright instead of slid.
//!
//! # Examples
//!
//! ```
//! use pictile_core::{Board, GridSize};
//!
//! let mut board = Board::solved(GridSize::Three);
//! assert!(board.is_solved());
//!
//! // The blank starts in the last cell; sliding its left neighbor in is legal.
//! assert_eq!(board.blank_position(), 8);
//! assert!(board.apply_move(7));
//! assert!(!board.is_solved());
//!
//! // A cell that is not next to the blank is silently rejected.
//! assert!(!board.apply_move(0));
//! ```

pub use self::{
    board::{Board, BoardError},
    grid_size::GridSize,
    rotation::{Rotation, RotationBoard},
    tile::Tile,
    trace::{Move, SolutionTrace},
};

mod board;
mod grid_size;
pub mod rotation;
pub mod solvability;
mod tile;
mod trace;
