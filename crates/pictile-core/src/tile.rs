//! Tile identity representation.

use std::fmt::{self, Display};

/// A tile identity on a puzzle board.
///
/// Identities run from `0` to `cells - 1` in the solved reading order; the
/// identity `cells - 1` is the blank. A tile knows nothing about its current
/// position — the [`Board`](crate::Board) tracks that.
///
/// For rendering, the identity selects the sub-region of the level image the
/// tile shows (row-major, same order as the solved board).
///
/// # Examples
///
/// ```
/// use pictile_core::{GridSize, Tile};
///
/// let tile = Tile::new(7);
/// assert_eq!(tile.value(), 7);
/// assert_eq!(GridSize::Three.blank_tile(), Tile::new(8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tile(u8);

impl Tile {
    /// Creates a tile with the given identity.
    #[must_use]
    pub fn new(value: u8) -> Self {
        Self(value)
    }

    /// Returns the tile identity.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
