//! Level numbers, tiers, and metadata.

use derive_more::{Display, Error};
use pictile_core::GridSize;

/// The highest level in the game.
pub const MAX_LEVEL: u8 = 15;

/// A level number in the range 1 to [`MAX_LEVEL`].
///
/// The level determines the grid tier (levels 1-5 play on 3×3, 6-10 on 4×4,
/// 11-15 on 5×5) and the background image of the puzzle.
///
/// # Examples
///
/// ```
/// use pictile_core::GridSize;
/// use pictile_game::Level;
///
/// let level = Level::new(7)?;
/// assert_eq!(level.grid_size(), GridSize::Four);
/// assert_eq!(level.image_id(), "level7.jpg");
/// assert_eq!(level.next(), Some(Level::new(8)?));
/// # Ok::<(), pictile_game::LevelError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display("{_0}")]
pub struct Level(u8);

/// Error for level numbers outside the supported range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("level {_0} is out of range (1-{MAX_LEVEL})")]
pub struct LevelError(#[error(not(source))] pub u8);

impl Level {
    /// The first level, always unlocked.
    pub const FIRST: Self = Self(1);

    /// Creates a level from its number.
    ///
    /// # Errors
    ///
    /// Returns [`LevelError`] if `number` is not in `1..=MAX_LEVEL`.
    pub fn new(number: u8) -> Result<Self, LevelError> {
        if (1..=MAX_LEVEL).contains(&number) {
            Ok(Self(number))
        } else {
            Err(LevelError(number))
        }
    }

    /// Returns the level number.
    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the following level, or `None` past the final one.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::new(self.0 + 1).ok()
    }

    /// Returns the grid size tier this level plays on.
    #[must_use]
    pub fn grid_size(self) -> GridSize {
        match self.0 {
            1..=5 => GridSize::Three,
            6..=10 => GridSize::Four,
            _ => GridSize::Five,
        }
    }

    /// Returns the background image resource identifier for this level.
    #[must_use]
    pub fn image_id(self) -> String {
        format!("level{}.jpg", self.0)
    }

    /// Returns an iterator over every level in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=MAX_LEVEL).map(Self)
    }
}
