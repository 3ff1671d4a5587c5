//! Solvability parity check for sliding-puzzle boards.
//!
//! A fair shuffle of all tile identities produces a board unreachable by legal
//! moves about half of the time. The classic 15-puzzle parity invariant tells
//! the two classes apart, so an unsolvable deal is never shown to a player:
//!
//! - On odd-width grids, a board is solvable exactly when its inversion count
//!   is even.
//! - On even-width grids, the blank's row enters the parity: a board is
//!   solvable exactly when the inversion count plus the blank's row (0-indexed
//!   from the top) is odd.
//!
//! An inversion is a pair of non-blank tiles whose identities are out of order
//! in the board's reading order.

use crate::Board;

/// Counts inversions among the non-blank tiles of a board.
///
/// # Examples
///
/// ```
/// use pictile_core::{Board, GridSize, Tile, solvability};
///
/// let board = Board::solved(GridSize::Three);
/// assert_eq!(solvability::inversions(&board), 0);
///
/// let tiles = [1, 0, 2, 3, 4, 5, 6, 7, 8].map(Tile::new).to_vec();
/// let swapped = Board::from_tiles(GridSize::Three, tiles).unwrap();
/// assert_eq!(solvability::inversions(&swapped), 1);
/// ```
#[must_use]
pub fn inversions(board: &Board) -> usize {
    let blank = board.size().blank_tile();
    let values: Vec<u8> = board
        .tiles()
        .iter()
        .filter(|&&tile| tile != blank)
        .copied()
        .map(crate::Tile::value)
        .collect();

    let mut count = 0;
    for (i, &earlier) in values.iter().enumerate() {
        count += values[i + 1..].iter().filter(|&&later| earlier > later).count();
    }
    count
}

/// Returns whether a board is reachable from the solved state by legal moves.
///
/// The check is a pure parity computation; it never mutates or searches.
///
/// # Examples
///
/// ```
/// use pictile_core::{Board, GridSize, Tile, solvability};
///
/// assert!(solvability::is_solvable(&Board::solved(GridSize::Four)));
///
/// // Swapping two neighboring tiles of a solved board flips the parity.
/// let tiles = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 14, 13, 15]
///     .map(Tile::new)
///     .to_vec();
/// let swapped = Board::from_tiles(GridSize::Four, tiles).unwrap();
/// assert!(!solvability::is_solvable(&swapped));
/// ```
#[must_use]
pub fn is_solvable(board: &Board) -> bool {
    let size = board.size();
    let inversions = inversions(board);
    if size.side() % 2 == 1 {
        inversions % 2 == 0
    } else {
        let blank_row = size.y(board.blank_position());
        (inversions + blank_row) % 2 == 1
    }
}
