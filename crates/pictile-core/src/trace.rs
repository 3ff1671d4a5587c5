//! Move traces recorded while scrambling.

use crate::Board;

/// A single recorded move: the tile at `from` slid into the blank at `to`.
///
/// After the move the tile sits at `to` and the blank at `from`, so the move
/// is undone by sliding the cell `to` back into the blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    /// Cell the moved tile came from.
    pub from: usize,
    /// Cell the blank occupied before the move (where the tile ends up).
    pub to: usize,
}

/// An ordered move log connecting the solved board to a scrambled one.
///
/// Traces are recorded oldest-first during scrambling and consumed
/// newest-first to walk the board back to solved, which is what guided
/// hints do one step at a time.
///
/// # Examples
///
/// ```
/// use pictile_core::{GridSize, Move, SolutionTrace};
///
/// let mut trace = SolutionTrace::new();
/// trace.push(Move { from: 7, to: 8 });
/// trace.push(Move { from: 4, to: 7 });
/// assert_eq!(trace.len(), 2);
/// assert_eq!(trace.pop(), Some(Move { from: 4, to: 7 }));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolutionTrace {
    moves: Vec<Move>,
}

impl SolutionTrace {
    /// Creates an empty trace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a move to the log.
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Removes and returns the most recent move.
    pub fn pop(&mut self) -> Option<Move> {
        self.moves.pop()
    }

    /// Returns the recorded moves, oldest first.
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Returns the number of recorded moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns whether the trace is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Undoes every recorded move on a board, newest first.
    ///
    /// The board must be in the exact state this trace leads to; each undo is
    /// then a legal move and the board ends up where the trace started (the
    /// solved board, for scramble traces).
    pub fn rewind(&self, board: &mut Board) {
        for mv in self.moves.iter().rev() {
            let applied = board.apply_move(mv.to);
            debug_assert!(applied, "trace must match the board it rewinds");
        }
    }
}
