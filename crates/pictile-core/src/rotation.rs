//! Rotation-tile puzzle variant.
//!
//! In this variant tiles never change cells. Every tile carries a rotation in
//! quarter turns; tapping a tile turns it 90° clockwise, and the board is
//! solved once every tile is upright. There is no blank and no solvability
//! concern — any deal can be rotated home.

use crate::{BoardError, GridSize};

/// A tile rotation in clockwise quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    /// Upright (0°), the solved orientation.
    #[default]
    Upright,
    /// 90° clockwise.
    Quarter,
    /// 180°.
    Half,
    /// 270° clockwise.
    ThreeQuarter,
}

impl Rotation {
    /// Array containing all rotations in clockwise order.
    pub const ALL: [Self; 4] = [
        Self::Upright,
        Self::Quarter,
        Self::Half,
        Self::ThreeQuarter,
    ];

    /// Creates a rotation from a quarter-turn count (taken modulo 4).
    #[must_use]
    pub fn from_quarter_turns(turns: u8) -> Self {
        Self::ALL[usize::from(turns % 4)]
    }

    /// Returns the rotation in degrees (0, 90, 180, or 270).
    #[must_use]
    pub fn degrees(self) -> u16 {
        match self {
            Self::Upright => 0,
            Self::Quarter => 90,
            Self::Half => 180,
            Self::ThreeQuarter => 270,
        }
    }

    /// Returns the rotation one clockwise quarter turn further.
    #[must_use]
    pub fn turned_cw(self) -> Self {
        match self {
            Self::Upright => Self::Quarter,
            Self::Quarter => Self::Half,
            Self::Half => Self::ThreeQuarter,
            Self::ThreeQuarter => Self::Upright,
        }
    }
}

/// A rotation-puzzle board: one rotation per grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationBoard {
    size: GridSize,
    rotations: Vec<Rotation>,
}

impl RotationBoard {
    /// Creates a solved board with every tile upright.
    #[must_use]
    pub fn upright(size: GridSize) -> Self {
        Self {
            size,
            rotations: vec![Rotation::Upright; size.cells()],
        }
    }

    /// Creates a board from explicit per-cell rotations in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::WrongTileCount`] if the sequence length does not
    /// match the grid's cell count.
    pub fn from_rotations(size: GridSize, rotations: Vec<Rotation>) -> Result<Self, BoardError> {
        if rotations.len() != size.cells() {
            return Err(BoardError::WrongTileCount {
                expected: size.cells(),
                actual: rotations.len(),
            });
        }
        Ok(Self { size, rotations })
    }

    /// Returns the grid size of the board.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the per-cell rotations in row-major order.
    #[must_use]
    pub fn rotations(&self) -> &[Rotation] {
        &self.rotations
    }

    /// Turns the tile at a cell 90° clockwise.
    ///
    /// Out-of-range cells are rejected as a no-op, mirroring the sliding
    /// board's move validation.
    pub fn rotate(&mut self, cell: usize) -> bool {
        let Some(rotation) = self.rotations.get_mut(cell) else {
            return false;
        };
        *rotation = rotation.turned_cw();
        true
    }

    /// Returns whether every tile is upright.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.rotations
            .iter()
            .all(|&rotation| rotation == Rotation::Upright)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upright_board_is_solved() {
        for size in GridSize::ALL {
            assert!(RotationBoard::upright(size).is_solved());
        }
    }

    #[test]
    fn test_rotate_cycles_back_to_upright() {
        let mut board = RotationBoard::upright(GridSize::Three);
        for turn in 1..=4 {
            assert!(board.rotate(4));
            assert_eq!(board.is_solved(), turn == 4);
        }
        assert_eq!(board.rotations()[4], Rotation::Upright);
    }

    #[test]
    fn test_rotate_rejects_out_of_range() {
        let mut board = RotationBoard::upright(GridSize::Three);
        assert!(!board.rotate(9));
        assert!(board.is_solved());
    }

    #[test]
    fn test_from_rotations_validates_length() {
        assert_eq!(
            RotationBoard::from_rotations(GridSize::Three, vec![Rotation::Half; 4]),
            Err(BoardError::WrongTileCount {
                expected: 9,
                actual: 4
            })
        );

        let board =
            RotationBoard::from_rotations(GridSize::Three, vec![Rotation::Half; 9]).unwrap();
        assert!(!board.is_solved());
    }

    #[test]
    fn test_quarter_turn_arithmetic() {
        assert_eq!(Rotation::from_quarter_turns(0), Rotation::Upright);
        assert_eq!(Rotation::from_quarter_turns(3), Rotation::ThreeQuarter);
        assert_eq!(Rotation::from_quarter_turns(5), Rotation::Quarter);
        assert_eq!(Rotation::Half.degrees(), 180);
        assert_eq!(Rotation::ThreeQuarter.turned_cw(), Rotation::Upright);
    }
}
