//! Pluggable rewarded-ad capability.
//!
//! Hosts that can show a rewarded ad (for example an app-embedding bridge)
//! implement [`AdCollaborator`]; the engine only asks for availability and an
//! outcome, and never branches on host platform identity. The engine's
//! single-threaded model flattens the ad flow to a synchronous outcome: the
//! host blocks the game loop (or resolves its own async flow) before
//! answering.

/// Result of requesting a rewarded ad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdOutcome {
    /// The ad was shown to completion; the reward may be granted.
    Granted,
    /// The ad was dismissed or failed; no reward.
    Dismissed,
}

/// A host capability for showing rewarded ads.
pub trait AdCollaborator {
    /// Returns whether an ad could be shown right now.
    fn is_available(&self) -> bool;

    /// Shows an ad and reports how it ended.
    fn request(&mut self) -> AdOutcome;
}

/// The no-op collaborator for hosts without an ad bridge: never available.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAds;

impl AdCollaborator for NoAds {
    fn is_available(&self) -> bool {
        false
    }

    fn request(&mut self) -> AdOutcome {
        AdOutcome::Dismissed
    }
}
