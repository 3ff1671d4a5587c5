//! A single level play session.

use std::time::Instant;

use pictile_core::{Board, Move, SolutionTrace};
use pictile_generator::ScrambledBoard;

use crate::{Level, StarRating};

/// How a completed level ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    /// Wall-clock seconds between level start and the winning move.
    pub elapsed_seconds: u64,
    /// Star rating derived from the elapsed time.
    pub stars: StarRating,
}

/// Result of feeding one move (or hint step) into a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was not applied: the cell is not next to the blank, or the
    /// session is already won. The board is unchanged.
    Rejected,
    /// The move was applied and the board is not solved yet.
    Applied,
    /// The move was applied and solved the board. The session is over.
    Won(Completion),
}

/// One play-through of a level: a scrambled board, a running timer, and the
/// move log connecting the board back to solved.
///
/// The session appends every applied move to its trace, so the trace always
/// describes a walk from the solved board to the current one. Guided hints
/// pop and undo the newest trace entry, which stays correct no matter how
/// the player has moved in between.
///
/// A won session is terminal: further moves and hints are rejected. Starting
/// the next level (or a restart) builds a fresh session and discards this one
/// along with any hint replay in flight.
#[derive(Debug)]
pub struct LevelSession {
    level: Level,
    board: Board,
    trace: SolutionTrace,
    started_at: Instant,
    completion: Option<Completion>,
}

impl LevelSession {
    pub(crate) fn begin(level: Level, scrambled: ScrambledBoard) -> Self {
        Self {
            level,
            board: scrambled.board,
            trace: scrambled.trace,
            started_at: Instant::now(),
            completion: None,
        }
    }

    /// Returns the level being played.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Returns the current board for rendering.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns whether the session has been won.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.completion.is_some()
    }

    /// Returns the completion record once the session is won.
    #[must_use]
    pub fn completion(&self) -> Option<Completion> {
        self.completion
    }

    /// Returns the elapsed play time in seconds; frozen once the session is
    /// won.
    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        match self.completion {
            Some(completion) => completion.elapsed_seconds,
            None => self.started_at.elapsed().as_secs(),
        }
    }

    /// Returns how many hint steps are left before the board is solved.
    #[must_use]
    pub fn hint_steps_remaining(&self) -> usize {
        self.trace.len()
    }

    /// Feeds a player tap on `cell` into the session.
    ///
    /// Delegates validation to the board; applied moves are logged and the
    /// board is checked for a win.
    pub fn move_tile(&mut self, cell: usize) -> MoveOutcome {
        if self.completion.is_some() {
            return MoveOutcome::Rejected;
        }
        let blank = self.board.blank_position();
        if !self.board.apply_move(cell) {
            return MoveOutcome::Rejected;
        }
        self.trace.push(Move {
            from: cell,
            to: blank,
        });
        self.check_win()
    }

    /// Applies one guided hint step: undoes the newest trace entry.
    ///
    /// Rejected when the session is won or the trace is exhausted (the board
    /// is already solved then).
    pub fn hint_step(&mut self) -> MoveOutcome {
        if self.completion.is_some() {
            return MoveOutcome::Rejected;
        }
        let Some(mv) = self.trace.pop() else {
            return MoveOutcome::Rejected;
        };
        let applied = self.board.apply_move(mv.to);
        debug_assert!(applied, "the trace always matches the board");
        self.check_win()
    }

    fn check_win(&mut self) -> MoveOutcome {
        if !self.board.is_solved() {
            return MoveOutcome::Applied;
        }
        let elapsed_seconds = self.started_at.elapsed().as_secs();
        let completion = Completion {
            elapsed_seconds,
            stars: StarRating::from_elapsed_seconds(elapsed_seconds),
        };
        self.completion = Some(completion);
        MoveOutcome::Won(completion)
    }
}

#[cfg(test)]
mod tests {
    use pictile_generator::Scrambler;

    use super::*;

    fn scrambled_session(seed: u64, steps: usize) -> LevelSession {
        let level = Level::FIRST;
        let scrambled = Scrambler::from_seed(seed)
            .walk_steps(steps)
            .scramble(level.grid_size());
        LevelSession::begin(level, scrambled)
    }

    #[test]
    fn test_reverse_trace_moves_win_the_session() {
        let scrambled = Scrambler::from_seed(5).walk_steps(5).scramble(
            Level::FIRST.grid_size(),
        );
        let taps: Vec<usize> = scrambled
            .trace
            .moves()
            .iter()
            .rev()
            .map(|mv| mv.to)
            .collect();
        let mut session = LevelSession::begin(Level::FIRST, scrambled);

        let mut won = None;
        for tap in taps {
            match session.move_tile(tap) {
                MoveOutcome::Applied => {}
                MoveOutcome::Won(completion) => won = Some(completion),
                MoveOutcome::Rejected => panic!("reverse trace taps are legal moves"),
            }
        }

        let completion = won.expect("reverse trace solves the board");
        assert!(session.is_won());
        assert_eq!(completion.stars, StarRating::Three);
        assert!(session.board().is_solved());
    }

    #[test]
    fn test_rejected_moves_leave_the_session_running() {
        let mut session = scrambled_session(1, 30);
        let blank = session.board().blank_position();
        let non_adjacent = (0..9)
            .find(|&cell| !session.board().size().is_adjacent(cell, blank))
            .unwrap();

        assert_eq!(session.move_tile(non_adjacent), MoveOutcome::Rejected);
        assert!(!session.is_won());
    }

    #[test]
    fn test_hint_steps_walk_back_to_solved() {
        let mut session = scrambled_session(2, 7);
        assert_eq!(session.hint_steps_remaining(), 7);

        // A hint replay can win early if an intermediate walk state happens
        // to be solved, so count steps instead of assuming all seven.
        let mut steps = 0;
        loop {
            match session.hint_step() {
                MoveOutcome::Applied => steps += 1,
                MoveOutcome::Won(_) => break,
                MoveOutcome::Rejected => panic!("hint steps are legal moves"),
            }
        }
        assert!(steps < 7);
        assert!(session.board().is_solved());
    }

    #[test]
    fn test_hints_stay_correct_after_manual_moves() {
        let mut session = scrambled_session(3, 8);

        // Make a manual move; the trace grows to cover it.
        let blank = session.board().blank_position();
        let neighbor = session.board().size().neighbors(blank).next().unwrap();
        assert_eq!(session.move_tile(neighbor), MoveOutcome::Applied);
        assert_eq!(session.hint_steps_remaining(), 9);

        let mut outcome = MoveOutcome::Applied;
        while outcome == MoveOutcome::Applied {
            outcome = session.hint_step();
        }
        assert!(matches!(outcome, MoveOutcome::Won(_)));
        assert!(session.board().is_solved());
    }

    #[test]
    fn test_won_session_is_terminal() {
        let mut session = scrambled_session(4, 5);
        let mut outcome = MoveOutcome::Applied;
        while outcome == MoveOutcome::Applied {
            outcome = session.hint_step();
        }
        assert!(matches!(outcome, MoveOutcome::Won(_)));

        let blank = session.board().blank_position();
        let neighbor = session.board().size().neighbors(blank).next().unwrap();
        assert_eq!(session.move_tile(neighbor), MoveOutcome::Rejected);
        assert_eq!(session.hint_step(), MoveOutcome::Rejected);
        assert!(session.board().is_solved());
    }
}
