//! Game flow for a picture sliding-tile puzzle.
//!
//! This crate layers the rules of the game on top of the board and scramble
//! primitives from [`pictile_core`] and [`pictile_generator`]:
//!
//! - [`Level`] maps level numbers to grid sizes and puzzle images.
//! - [`LevelSession`] plays one level: timed moves, win detection, and
//!   guided hint replay along the scramble's solution trace.
//! - [`StarRating`] scores a completion by elapsed time.
//! - [`ProgressStore`] persists unlocked levels and best times through a
//!   pluggable [`Storage`] backend.
//! - [`Game`] ties it all together as the single state controller that a UI
//!   collaborator drives.
//!
//! # Examples
//!
//! ```
//! use pictile_game::{Game, GameEvent, Level, MemoryStorage};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut game = Game::new(MemoryStorage::new())?;
//! let session = game.start_level(Level::FIRST)?;
//! let blank = session.board().blank_position();
//! let cell = session.board().size().neighbors(blank).next().unwrap();
//!
//! match game.move_tile(cell)? {
//!     GameEvent::Moved | GameEvent::LevelWon { .. } => {}
//!     event => panic!("a blank neighbor always moves: {event:?}"),
//! }
//! # Ok(())
//! # }
//! ```

pub use self::{
    ads::{AdCollaborator, AdOutcome, NoAds},
    game::{Game, GameEvent, SessionError},
    level::{Level, LevelError, MAX_LEVEL},
    progress::{
        BEST_TIMES_KEY, CompletionUpdate, FileStorage, MemoryStorage, PersistenceError,
        ProgressRecord, ProgressStore, Storage, StorageError, UNLOCKED_LEVELS_KEY,
    },
    session::{Completion, LevelSession, MoveOutcome},
    stars::{StarRating, THREE_STAR_LIMIT_SECS, TWO_STAR_LIMIT_SECS},
};

mod ads;
mod game;
mod level;
mod progress;
mod session;
mod stars;
