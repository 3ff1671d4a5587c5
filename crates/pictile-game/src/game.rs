//! The game controller: progression plus the active level session.

use derive_more::{Display, Error};
use pictile_generator::Scrambler;

use crate::{
    AdCollaborator, AdOutcome, Completion, Level, LevelSession, MoveOutcome, PersistenceError,
    ProgressRecord, ProgressStore, Storage,
};

/// Error for operations that need an active, startable session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SessionError {
    /// No level is currently in progress.
    #[display("no level in progress")]
    NoActiveSession,
    /// The requested level has not been unlocked yet.
    #[display("level {_0} is locked")]
    LevelLocked(#[error(not(source))] Level),
}

/// What a controller call changed, for the rendering collaborator to react
/// to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The input did not change the board.
    MoveRejected,
    /// The board changed; re-render.
    Moved,
    /// A hint was requested but not granted (no ad bridge, or the ad was
    /// dismissed).
    HintDenied,
    /// The level was solved and the session is over.
    ///
    /// `unlocked_next` and `new_best` reflect what was persisted; when
    /// persistence fails they are reported empty, and [`Game::progress`]
    /// remains the authoritative in-memory view.
    LevelWon {
        /// Elapsed time and star rating of the winning run.
        completion: Completion,
        /// The level newly unlocked by this win, if any.
        unlocked_next: Option<Level>,
        /// Whether the run set a new best time.
        new_best: bool,
    },
}

/// The single owner of all mutable game state: the progression store and the
/// optional active session.
///
/// UI collaborators hold a `Game`, forward taps to [`move_tile`], and render
/// from [`session`] and [`progress`]. There is no global state; everything
/// flows through this controller.
///
/// [`move_tile`]: Game::move_tile
/// [`session`]: Game::session
/// [`progress`]: Game::progress
#[derive(Debug)]
pub struct Game<S> {
    progress: ProgressStore<S>,
    session: Option<LevelSession>,
}

impl<S: Storage> Game<S> {
    /// Loads progression from storage and starts with no active session.
    ///
    /// # Errors
    ///
    /// Returns a [`PersistenceError`] when the storage layer fails to read.
    pub fn new(storage: S) -> Result<Self, PersistenceError> {
        Ok(Self {
            progress: ProgressStore::load(storage)?,
            session: None,
        })
    }

    /// Returns the current progression record.
    #[must_use]
    pub fn progress(&self) -> &ProgressRecord {
        self.progress.record()
    }

    /// Returns the active session, if a level is in progress or won.
    #[must_use]
    pub fn session(&self) -> Option<&LevelSession> {
        self.session.as_ref()
    }

    /// Starts a level with a freshly seeded scramble.
    ///
    /// Any previous session is discarded, along with hint replays in flight.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::LevelLocked`] when the level has not been
    /// unlocked.
    pub fn start_level(&mut self, level: Level) -> Result<&LevelSession, SessionError> {
        self.start_level_scrambled(level, &Scrambler::new())
    }

    /// Starts a level using the given scrambler (reproducible sessions).
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::LevelLocked`] when the level has not been
    /// unlocked.
    pub fn start_level_scrambled(
        &mut self,
        level: Level,
        scrambler: &Scrambler,
    ) -> Result<&LevelSession, SessionError> {
        if !self.progress.is_unlocked(level) {
            return Err(SessionError::LevelLocked(level));
        }
        let scrambled = scrambler.scramble(level.grid_size());
        log::info!(
            "starting level {level} on a {size} grid (seed={seed})",
            size = level.grid_size(),
            seed = scrambled.seed,
        );
        Ok(&*self.session.insert(LevelSession::begin(level, scrambled)))
    }

    /// Restarts the current level with a fresh scramble.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoActiveSession`] when no level is in
    /// progress.
    pub fn restart_level(&mut self) -> Result<&LevelSession, SessionError> {
        let level = self
            .session
            .as_ref()
            .ok_or(SessionError::NoActiveSession)?
            .level();
        self.start_level(level)
    }

    /// Feeds a player tap on `cell` into the active session.
    ///
    /// A winning move records the completion (unlock and best time) before
    /// returning. Persistence failures are logged and gameplay continues.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoActiveSession`] when no level is in
    /// progress.
    pub fn move_tile(&mut self, cell: usize) -> Result<GameEvent, SessionError> {
        let session = self.session.as_mut().ok_or(SessionError::NoActiveSession)?;
        let level = session.level();
        let outcome = session.move_tile(cell);
        Ok(self.handle_outcome(level, outcome))
    }

    /// Applies one guided hint step directly (no ad gate).
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoActiveSession`] when no level is in
    /// progress.
    pub fn hint_step(&mut self) -> Result<GameEvent, SessionError> {
        let session = self.session.as_mut().ok_or(SessionError::NoActiveSession)?;
        let level = session.level();
        let outcome = session.hint_step();
        Ok(self.handle_outcome(level, outcome))
    }

    /// Requests a guided hint step through the host's ad collaborator.
    ///
    /// The step is applied only when an ad is available and granted;
    /// otherwise the board is untouched and [`GameEvent::HintDenied`] is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoActiveSession`] when no level is in
    /// progress.
    pub fn guided_hint(
        &mut self,
        ads: &mut dyn AdCollaborator,
    ) -> Result<GameEvent, SessionError> {
        if self.session.is_none() {
            return Err(SessionError::NoActiveSession);
        }
        if !ads.is_available() {
            log::debug!("hint denied: no ad collaborator available");
            return Ok(GameEvent::HintDenied);
        }
        if ads.request() != AdOutcome::Granted {
            log::debug!("hint denied: ad was dismissed");
            return Ok(GameEvent::HintDenied);
        }
        self.hint_step()
    }

    /// Resets all progression to the initial state and ends any session.
    ///
    /// # Errors
    ///
    /// Returns a [`PersistenceError`] when the reset state could not be
    /// written back.
    pub fn reset_progress(&mut self) -> Result<(), PersistenceError> {
        self.session = None;
        self.progress.reset()
    }

    fn handle_outcome(&mut self, level: Level, outcome: MoveOutcome) -> GameEvent {
        match outcome {
            MoveOutcome::Rejected => GameEvent::MoveRejected,
            MoveOutcome::Applied => GameEvent::Moved,
            MoveOutcome::Won(completion) => {
                log::info!(
                    "level {level} won in {elapsed}s ({stars} stars)",
                    elapsed = completion.elapsed_seconds,
                    stars = completion.stars.count(),
                );
                match self
                    .progress
                    .record_completion(level, completion.elapsed_seconds)
                {
                    Ok(update) => GameEvent::LevelWon {
                        completion,
                        unlocked_next: update.unlocked_next,
                        new_best: update.new_best,
                    },
                    Err(err) => {
                        log::warn!("progress for level {level} was not persisted: {err}");
                        GameEvent::LevelWon {
                            completion,
                            unlocked_next: None,
                            new_best: false,
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pictile_generator::Scrambler;

    use super::*;
    use crate::{MemoryStorage, NoAds, StarRating};

    struct AlwaysGrant;

    impl AdCollaborator for AlwaysGrant {
        fn is_available(&self) -> bool {
            true
        }

        fn request(&mut self) -> AdOutcome {
            AdOutcome::Granted
        }
    }

    struct AlwaysDismiss;

    impl AdCollaborator for AlwaysDismiss {
        fn is_available(&self) -> bool {
            true
        }

        fn request(&mut self) -> AdOutcome {
            AdOutcome::Dismissed
        }
    }

    fn level(n: u8) -> Level {
        Level::new(n).unwrap()
    }

    fn new_game() -> Game<MemoryStorage> {
        Game::new(MemoryStorage::new()).unwrap()
    }

    #[test]
    fn test_locked_levels_cannot_start() {
        let mut game = new_game();
        assert_eq!(
            game.start_level(level(2)).err(),
            Some(SessionError::LevelLocked(level(2)))
        );
        assert!(game.session().is_none());
    }

    #[test]
    fn test_moves_require_an_active_session() {
        let mut game = new_game();
        assert_eq!(game.move_tile(0).err(), Some(SessionError::NoActiveSession));
        assert_eq!(game.hint_step().err(), Some(SessionError::NoActiveSession));
        assert_eq!(
            game.restart_level().err(),
            Some(SessionError::NoActiveSession)
        );
    }

    #[test]
    fn test_reverse_trace_playthrough_unlocks_the_next_level() {
        let mut game = new_game();

        // Scramble level 1 reproducibly with a short five-step walk, and
        // derive the winning tap sequence from an identical scramble.
        let scrambler = Scrambler::from_seed(9).walk_steps(5);
        let reference = scrambler.scramble(Level::FIRST.grid_size());
        let taps: Vec<usize> = reference.trace.moves().iter().rev().map(|mv| mv.to).collect();

        game.start_level_scrambled(Level::FIRST, &scrambler).unwrap();
        assert_eq!(game.session().unwrap().board(), &reference.board);

        let mut won = None;
        for tap in taps {
            match game.move_tile(tap).unwrap() {
                GameEvent::Moved => {}
                GameEvent::LevelWon {
                    completion,
                    unlocked_next,
                    new_best,
                } => {
                    won = Some(completion);
                    assert_eq!(unlocked_next, Some(level(2)));
                    assert!(new_best);
                    break;
                }
                event => panic!("unexpected event {event:?}"),
            }
        }

        let completion = won.expect("reverse trace wins the level");
        assert_eq!(completion.stars, StarRating::Three);
        assert!(game.progress().is_unlocked(level(2)));
        assert_eq!(game.progress().best_time(Level::FIRST), Some(completion.elapsed_seconds));
    }

    #[test]
    fn test_guided_hints_can_win_a_level() {
        let mut game = new_game();
        game.start_level_scrambled(Level::FIRST, &Scrambler::from_seed(13).walk_steps(6))
            .unwrap();

        let mut ads = AlwaysGrant;
        loop {
            match game.guided_hint(&mut ads).unwrap() {
                GameEvent::Moved => {}
                GameEvent::LevelWon { .. } => break,
                event => panic!("unexpected event {event:?}"),
            }
        }
        assert!(game.session().unwrap().is_won());
        assert!(game.progress().is_unlocked(level(2)));
    }

    #[test]
    fn test_hints_are_denied_without_a_granted_ad() {
        let mut game = new_game();
        game.start_level(Level::FIRST).unwrap();
        let before = game.session().unwrap().board().clone();

        assert_eq!(game.guided_hint(&mut NoAds).unwrap(), GameEvent::HintDenied);
        assert_eq!(
            game.guided_hint(&mut AlwaysDismiss).unwrap(),
            GameEvent::HintDenied
        );
        assert_eq!(game.session().unwrap().board(), &before);
    }

    #[test]
    fn test_restart_rescrambles_the_same_level() {
        let mut game = new_game();
        game.start_level(Level::FIRST).unwrap();
        let first_board = game.session().unwrap().board().clone();

        let session = game.restart_level().unwrap();
        assert_eq!(session.level(), Level::FIRST);
        assert!(!session.is_won());
        // Restart keeps the level but deals a fresh board state.
        assert_eq!(session.board().size(), first_board.size());
    }

    #[test]
    fn test_starting_a_level_discards_the_old_session() {
        let mut game = new_game();
        game.start_level_scrambled(Level::FIRST, &Scrambler::from_seed(9).walk_steps(5))
            .unwrap();
        let pending = game.session().unwrap().hint_steps_remaining();
        assert_eq!(pending, 5);

        game.start_level_scrambled(Level::FIRST, &Scrambler::from_seed(10).walk_steps(30))
            .unwrap();
        assert_eq!(game.session().unwrap().hint_steps_remaining(), 30);
    }

    #[test]
    fn test_reset_progress_clears_unlocks_and_session() {
        let mut game = new_game();
        game.start_level_scrambled(Level::FIRST, &Scrambler::from_seed(9).walk_steps(5))
            .unwrap();
        while !matches!(game.hint_step().unwrap(), GameEvent::LevelWon { .. }) {}
        assert!(game.progress().is_unlocked(level(2)));

        game.reset_progress().unwrap();
        assert!(game.session().is_none());
        assert!(!game.progress().is_unlocked(level(2)));
        assert!(game.progress().is_unlocked(Level::FIRST));
        assert_eq!(game.progress().best_time(Level::FIRST), None);
    }
}
