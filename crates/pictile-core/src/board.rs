//! Board state and move application.

use derive_more::{Display, Error};

use crate::{GridSize, Tile};

/// A sliding-puzzle board: a permutation of tile identities over grid cells.
///
/// The board holds one [`Tile`] per cell in row-major order. It is solved when
/// every cell holds its own identity. The only mutation is [`apply_move`],
/// which swaps a tile with the adjacent blank; everything a board can reach
/// this way stays solvable.
///
/// # Examples
///
/// ```
/// use pictile_core::{Board, GridSize, Tile};
///
/// let mut board = Board::solved(GridSize::Three);
/// assert_eq!(board.tile(0), Tile::new(0));
/// assert!(board.is_solved());
///
/// // Slide the tile above the blank down into it.
/// assert!(board.apply_move(5));
/// assert_eq!(board.blank_position(), 5);
/// assert_eq!(board.tile(8), Tile::new(5));
/// ```
///
/// [`apply_move`]: Board::apply_move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: GridSize,
    tiles: Vec<Tile>,
}

/// Error for constructing a board from an invalid tile sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// The sequence length does not match the grid's cell count.
    #[display("expected {expected} tiles, got {actual}")]
    WrongTileCount {
        /// Cell count of the target grid.
        expected: usize,
        /// Length of the provided sequence.
        actual: usize,
    },
    /// A tile identity is outside `0..cells`.
    #[display("tile identity {_0} is out of range for the grid")]
    TileOutOfRange(#[error(not(source))] Tile),
    /// A tile identity appears more than once.
    #[display("tile identity {_0} appears more than once")]
    DuplicateTile(#[error(not(source))] Tile),
}

impl Board {
    /// Creates a solved board: every cell holds its own identity, with the
    /// blank in the last cell.
    #[must_use]
    pub fn solved(size: GridSize) -> Self {
        #[expect(clippy::cast_possible_truncation)]
        let tiles = (0..size.cells()).map(|i| Tile::new(i as u8)).collect();
        Self { size, tiles }
    }

    /// Creates a board from an explicit tile sequence in row-major order.
    ///
    /// The sequence must be a permutation of `0..cells`. No solvability check
    /// is performed here; see [`crate::solvability::is_solvable`].
    ///
    /// # Errors
    ///
    /// Returns a [`BoardError`] if the sequence is not a permutation of the
    /// grid's tile identities.
    pub fn from_tiles(size: GridSize, tiles: Vec<Tile>) -> Result<Self, BoardError> {
        if tiles.len() != size.cells() {
            return Err(BoardError::WrongTileCount {
                expected: size.cells(),
                actual: tiles.len(),
            });
        }
        let mut seen = vec![false; size.cells()];
        for &tile in &tiles {
            let value = usize::from(tile.value());
            if value >= size.cells() {
                return Err(BoardError::TileOutOfRange(tile));
            }
            if seen[value] {
                return Err(BoardError::DuplicateTile(tile));
            }
            seen[value] = true;
        }
        Ok(Self { size, tiles })
    }

    /// Returns the grid size of the board.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the tiles in row-major cell order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Returns the tile currently at a cell.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of range for the grid.
    #[must_use]
    pub fn tile(&self, cell: usize) -> Tile {
        self.tiles[cell]
    }

    /// Returns the cell currently holding a tile, scanning linearly.
    ///
    /// Returns `None` for identities that do not belong to this grid.
    #[must_use]
    pub fn position_of(&self, tile: Tile) -> Option<usize> {
        self.tiles.iter().position(|&t| t == tile)
    }

    /// Returns the cell currently holding the blank.
    #[must_use]
    pub fn blank_position(&self) -> usize {
        self.position_of(self.size.blank_tile())
            .expect("a board always contains the blank tile")
    }

    /// Returns whether every cell holds its own identity.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.tiles
            .iter()
            .enumerate()
            .all(|(cell, tile)| usize::from(tile.value()) == cell)
    }

    /// Attempts to slide the tile at `cell` into the blank.
    ///
    /// The move applies only when `cell` is in range and orthogonally adjacent
    /// to the blank's current cell; otherwise the board is left untouched and
    /// `false` is returned. A rejected move is normal input, not an error.
    ///
    /// Win detection is the caller's responsibility: check [`is_solved`] after
    /// every applied move.
    ///
    /// [`is_solved`]: Board::is_solved
    pub fn apply_move(&mut self, cell: usize) -> bool {
        let blank = self.blank_position();
        if !self.size.is_adjacent(cell, blank) {
            return false;
        }
        self.tiles.swap(cell, blank);
        true
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn tiles(values: &[u8]) -> Vec<Tile> {
        values.iter().copied().map(Tile::new).collect()
    }

    #[test]
    fn test_solved_boards_are_solved() {
        for size in GridSize::ALL {
            let board = Board::solved(size);
            assert!(board.is_solved());
            assert_eq!(board.blank_position(), size.cells() - 1);
        }
    }

    #[test]
    fn test_from_tiles_validates_permutation() {
        let board = Board::from_tiles(GridSize::Three, tiles(&[1, 0, 2, 3, 4, 5, 6, 7, 8]))
            .expect("valid permutation");
        assert!(!board.is_solved());

        assert_eq!(
            Board::from_tiles(GridSize::Three, tiles(&[0, 1, 2])),
            Err(BoardError::WrongTileCount {
                expected: 9,
                actual: 3
            })
        );
        assert_eq!(
            Board::from_tiles(GridSize::Three, tiles(&[0, 1, 2, 3, 4, 5, 6, 7, 9])),
            Err(BoardError::TileOutOfRange(Tile::new(9)))
        );
        assert_eq!(
            Board::from_tiles(GridSize::Three, tiles(&[0, 1, 2, 3, 4, 5, 6, 7, 7])),
            Err(BoardError::DuplicateTile(Tile::new(7)))
        );
    }

    #[test]
    fn test_apply_move_swaps_with_blank() {
        let mut board = Board::solved(GridSize::Three);
        assert!(board.apply_move(7));
        assert_eq!(board.blank_position(), 7);
        assert_eq!(board.tile(8), Tile::new(7));
        assert_eq!(board.tile(7), GridSize::Three.blank_tile());
    }

    #[test]
    fn test_apply_move_rejects_non_adjacent() {
        let mut board = Board::solved(GridSize::Three);
        let before = board.clone();
        assert!(!board.apply_move(0));
        assert!(!board.apply_move(4));
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_move_rejects_out_of_range() {
        let mut board = Board::solved(GridSize::Four);
        let before = board.clone();
        assert!(!board.apply_move(16));
        assert!(!board.apply_move(usize::MAX));
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_move_rejects_blank_cell_itself() {
        let mut board = Board::solved(GridSize::Three);
        assert!(!board.apply_move(board.blank_position()));
    }

    #[test]
    fn test_position_of_unknown_tile() {
        let board = Board::solved(GridSize::Three);
        assert_eq!(board.position_of(Tile::new(9)), None);
        assert_eq!(board.position_of(Tile::new(3)), Some(3));
    }

    fn arb_board(size: GridSize) -> impl Strategy<Value = Board> {
        #[expect(clippy::cast_possible_truncation)]
        let identity: Vec<u8> = (0..size.cells()).map(|i| i as u8).collect();
        Just(identity)
            .prop_shuffle()
            .prop_map(move |values| Board::from_tiles(size, tiles(&values)).expect("permutation"))
    }

    proptest! {
        #[test]
        fn prop_single_move_is_an_involution(
            board in arb_board(GridSize::Four),
            pick: proptest::sample::Index,
        ) {
            let mut moved = board.clone();
            let blank = moved.blank_position();
            let neighbors: Vec<usize> = GridSize::Four.neighbors(blank).collect();
            let cell = neighbors[pick.index(neighbors.len())];

            prop_assert!(moved.apply_move(cell));
            prop_assert_ne!(&moved, &board);
            // The moved tile now sits where the blank was; tapping that cell
            // slides it back.
            prop_assert!(moved.apply_move(blank));
            prop_assert_eq!(moved, board);
        }

        #[test]
        fn prop_non_adjacent_move_is_a_no_op(
            board in arb_board(GridSize::Three),
            cell in 0usize..9,
        ) {
            let blank = board.blank_position();
            prop_assume!(!GridSize::Three.is_adjacent(cell, blank));
            let mut moved = board.clone();
            prop_assert!(!moved.apply_move(cell));
            prop_assert_eq!(moved, board);
        }
    }
}
