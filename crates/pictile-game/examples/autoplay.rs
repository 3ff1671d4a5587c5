//! Plays through the first few levels with guided hints and prints the
//! resulting progression record.

use pictile_game::{
    AdCollaborator, AdOutcome, Game, GameEvent, Level, MemoryStorage, PersistenceError,
    SessionError,
};

/// A collaborator that always shows and completes an ad, so every hint
/// request is granted.
struct FreeAds;

impl AdCollaborator for FreeAds {
    fn is_available(&self) -> bool {
        true
    }

    fn request(&mut self) -> AdOutcome {
        AdOutcome::Granted
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum Error {
    Persistence(PersistenceError),
    Session(SessionError),
    Encode(serde_json::Error),
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let mut game = Game::new(MemoryStorage::new())?;
    let mut ads = FreeAds;

    let mut level = Some(Level::FIRST);
    while let Some(current) = level.take().filter(|&l| l.get() <= 3) {
        let session = game.start_level(current)?;
        println!(
            "level {current}: {size} grid, image {image}, {steps} steps from solved",
            size = session.board().size(),
            image = current.image_id(),
            steps = session.hint_steps_remaining(),
        );

        loop {
            match game.guided_hint(&mut ads)? {
                GameEvent::Moved => {}
                GameEvent::LevelWon {
                    completion,
                    unlocked_next,
                    new_best,
                } => {
                    println!(
                        "  won in {elapsed}s: {stars} stars{best}",
                        elapsed = completion.elapsed_seconds,
                        stars = completion.stars.count(),
                        best = if new_best { " (new best)" } else { "" },
                    );
                    level = unlocked_next;
                    break;
                }
                event => {
                    println!("  unexpected event {event:?}, giving up");
                    return Ok(());
                }
            }
        }
    }

    println!("{}", serde_json::to_string_pretty(game.progress())?);
    Ok(())
}
