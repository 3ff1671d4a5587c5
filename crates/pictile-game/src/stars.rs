//! Star ratings for completed levels.

/// Elapsed-time limit for a three-star completion, in seconds.
pub const THREE_STAR_LIMIT_SECS: u64 = 30;
/// Elapsed-time limit for a two-star completion, in seconds.
pub const TWO_STAR_LIMIT_SECS: u64 = 60;

/// A star rating awarded for a completed level.
///
/// The rating is a pure function of elapsed time; the thresholds are flat
/// across grid sizes.
///
/// # Examples
///
/// ```
/// use pictile_game::StarRating;
///
/// assert_eq!(StarRating::from_elapsed_seconds(25), StarRating::Three);
/// assert_eq!(StarRating::from_elapsed_seconds(45), StarRating::Two);
/// assert_eq!(StarRating::from_elapsed_seconds(90), StarRating::One);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StarRating {
    /// One star: slower than [`TWO_STAR_LIMIT_SECS`].
    One,
    /// Two stars: within [`TWO_STAR_LIMIT_SECS`].
    Two,
    /// Three stars: within [`THREE_STAR_LIMIT_SECS`].
    Three,
}

impl StarRating {
    /// Rates a completion by its elapsed time in seconds.
    #[must_use]
    pub fn from_elapsed_seconds(elapsed_seconds: u64) -> Self {
        if elapsed_seconds <= THREE_STAR_LIMIT_SECS {
            Self::Three
        } else if elapsed_seconds <= TWO_STAR_LIMIT_SECS {
            Self::Two
        } else {
            Self::One
        }
    }

    /// Returns the number of stars (1-3).
    #[must_use]
    pub fn count(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(StarRating::from_elapsed_seconds(0), StarRating::Three);
        assert_eq!(StarRating::from_elapsed_seconds(30), StarRating::Three);
        assert_eq!(StarRating::from_elapsed_seconds(31), StarRating::Two);
        assert_eq!(StarRating::from_elapsed_seconds(60), StarRating::Two);
        assert_eq!(StarRating::from_elapsed_seconds(61), StarRating::One);
        assert_eq!(StarRating::from_elapsed_seconds(u64::MAX), StarRating::One);
    }

    #[test]
    fn test_counts_and_ordering() {
        assert_eq!(StarRating::One.count(), 1);
        assert_eq!(StarRating::Three.count(), 3);
        assert!(StarRating::Three > StarRating::One);
    }
}
