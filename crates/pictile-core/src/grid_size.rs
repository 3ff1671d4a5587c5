//! Grid sizes and cell geometry.

use std::fmt::{self, Display};

use crate::Tile;

/// The side length of a puzzle grid.
///
/// Levels use one of three square grids. Cells are indexed in row-major order,
/// `0..cells()`, with `x = index % side` and `y = index / side`.
///
/// # Examples
///
/// ```
/// use pictile_core::GridSize;
///
/// let size = GridSize::Four;
/// assert_eq!(size.side(), 4);
/// assert_eq!(size.cells(), 16);
/// assert_eq!(size.x(6), 2);
/// assert_eq!(size.y(6), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridSize {
    /// A 3×3 grid (9 cells).
    Three,
    /// A 4×4 grid (16 cells).
    Four,
    /// A 5×5 grid (25 cells).
    Five,
}

impl GridSize {
    /// Array containing all supported grid sizes, smallest first.
    pub const ALL: [Self; 3] = [Self::Three, Self::Four, Self::Five];

    /// Creates a grid size from a side length, if supported.
    ///
    /// # Examples
    ///
    /// ```
    /// use pictile_core::GridSize;
    ///
    /// assert_eq!(GridSize::from_side(3), Some(GridSize::Three));
    /// assert_eq!(GridSize::from_side(6), None);
    /// ```
    #[must_use]
    pub fn from_side(side: usize) -> Option<Self> {
        match side {
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            5 => Some(Self::Five),
            _ => None,
        }
    }

    /// Returns the side length of the grid.
    #[must_use]
    pub fn side(self) -> usize {
        match self {
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
        }
    }

    /// Returns the total number of cells (`side²`).
    #[must_use]
    pub fn cells(self) -> usize {
        self.side() * self.side()
    }

    /// Returns the blank tile identity for this grid (the highest identity).
    #[must_use]
    pub fn blank_tile(self) -> Tile {
        match self {
            Self::Three => Tile::new(8),
            Self::Four => Tile::new(15),
            Self::Five => Tile::new(24),
        }
    }

    /// Returns the column of a cell index.
    #[must_use]
    pub fn x(self, cell: usize) -> usize {
        cell % self.side()
    }

    /// Returns the row of a cell index, counted from the top.
    #[must_use]
    pub fn y(self, cell: usize) -> usize {
        cell / self.side()
    }

    /// Returns whether two cells are orthogonal neighbors.
    ///
    /// Adjacency is Manhattan distance 1 on the grid, so cells at opposite
    /// ends of consecutive rows are *not* adjacent even though their indices
    /// differ by one.
    ///
    /// # Examples
    ///
    /// ```
    /// use pictile_core::GridSize;
    ///
    /// let size = GridSize::Three;
    /// assert!(size.is_adjacent(4, 1));
    /// assert!(size.is_adjacent(4, 5));
    /// // 2 is the end of row 0, 3 the start of row 1: not neighbors.
    /// assert!(!size.is_adjacent(2, 3));
    /// assert!(!size.is_adjacent(4, 4));
    /// ```
    #[must_use]
    pub fn is_adjacent(self, a: usize, b: usize) -> bool {
        if a >= self.cells() || b >= self.cells() {
            return false;
        }
        let dx = self.x(a).abs_diff(self.x(b));
        let dy = self.y(a).abs_diff(self.y(b));
        dx + dy == 1
    }

    /// Returns the orthogonal neighbors of a cell, in no particular order.
    ///
    /// # Examples
    ///
    /// ```
    /// use pictile_core::GridSize;
    ///
    /// let corners: Vec<usize> = GridSize::Three.neighbors(0).collect();
    /// assert_eq!(corners.len(), 2);
    /// let center: Vec<usize> = GridSize::Three.neighbors(4).collect();
    /// assert_eq!(center.len(), 4);
    /// ```
    pub fn neighbors(self, cell: usize) -> impl Iterator<Item = usize> {
        let side = self.side();
        let x = self.x(cell);
        let y = self.y(cell);
        let mut out = [None; 4];
        if x > 0 {
            out[0] = Some(cell - 1);
        }
        if x + 1 < side {
            out[1] = Some(cell + 1);
        }
        if y > 0 {
            out[2] = Some(cell - side);
        }
        if y + 1 < side {
            out[3] = Some(cell + side);
        }
        out.into_iter().flatten()
    }
}

impl Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{side}x{side}", side = self.side())
    }
}
