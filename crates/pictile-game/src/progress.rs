//! Level progression and best-time records over a key-value storage contract.
//!
//! The host environment provides two persisted entries: `unlockedLevels`, a
//! JSON array of level numbers, and `bestTimes`, a JSON object mapping level
//! numbers to best completion times in seconds. Every update overwrites the
//! full value of both keys. Absent or malformed values fall back to the
//! initial state (only level 1 unlocked, no times) without failing; failures
//! of the storage layer itself propagate as [`PersistenceError`].

use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    fs, io,
    path::PathBuf,
};

use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{Level, MAX_LEVEL};

/// Storage key for the unlocked-levels array.
pub const UNLOCKED_LEVELS_KEY: &str = "unlockedLevels";
/// Storage key for the best-times object.
pub const BEST_TIMES_KEY: &str = "bestTimes";

/// The key-value persistence contract provided by the host environment.
///
/// Values are opaque strings; the progression store reads and writes whole
/// values, never patches them. Implementations decide where the data lives.
pub trait Storage {
    /// Reads the value stored under `key`, or `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the underlying medium fails.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the underlying medium fails.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Failure of the underlying storage medium.
#[derive(Debug, Display, Error)]
#[display("{message}")]
pub struct StorageError {
    #[error(not(source))]
    message: String,
}

impl StorageError {
    /// Creates a storage error from a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<io::Error> for StorageError {
    fn from(err: io::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// In-memory storage; nothing outlives the process. Used by tests and demos.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    /// Creates an empty in-memory storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed storage: a single JSON object of key-value pairs.
///
/// The whole file is rewritten on every update. A corrupt file is treated as
/// empty (and is replaced by the next write) rather than failing the game.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Creates storage backed by the given file path.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn load_entries(&self) -> Result<HashMap<String, String>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(err) => return Err(err.into()),
        };
        match serde_json::from_str(&raw) {
            Ok(entries) => Ok(entries),
            Err(err) => {
                log::warn!(
                    "storage file {} is corrupt, starting empty: {err}",
                    self.path.display()
                );
                Ok(HashMap::new())
            }
        }
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load_entries()?.remove(key))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.load_entries()?;
        entries.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string(&entries)
            .map_err(|err| StorageError::new(err.to_string()))?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// Error while persisting or loading progression state.
#[derive(Debug, Display, Error, From)]
pub enum PersistenceError {
    /// The storage layer failed.
    #[display("storage failure: {_0}")]
    Storage(StorageError),
    /// A progression payload could not be encoded as JSON.
    #[display("could not encode progress: {_0}")]
    Encode(serde_json::Error),
}

/// Unlocked levels and best completion times.
///
/// Level 1 is always unlocked; level `L + 1` is unlocked exactly when level
/// `L` has been completed at least once. Times are seconds, lower is better.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    unlocked: BTreeSet<u8>,
    best_times: BTreeMap<u8, u64>,
}

impl ProgressRecord {
    /// Creates the initial record: only level 1 unlocked, no recorded times.
    #[must_use]
    pub fn initial() -> Self {
        Self {
            unlocked: BTreeSet::from([Level::FIRST.get()]),
            best_times: BTreeMap::new(),
        }
    }

    /// Returns whether a level can be started.
    #[must_use]
    pub fn is_unlocked(&self, level: Level) -> bool {
        self.unlocked.contains(&level.get())
    }

    /// Returns the unlocked levels in ascending order.
    pub fn unlocked_levels(&self) -> impl Iterator<Item = Level> + '_ {
        self.unlocked.iter().filter_map(|&n| Level::new(n).ok())
    }

    /// Returns the best completion time for a level, in seconds.
    #[must_use]
    pub fn best_time(&self, level: Level) -> Option<u64> {
        self.best_times.get(&level.get()).copied()
    }

    /// Drops out-of-range entries and restores the level-1 unlock.
    fn sanitize(&mut self) {
        self.unlocked.retain(|&n| (1..=MAX_LEVEL).contains(&n));
        self.unlocked.insert(Level::FIRST.get());
        self.best_times.retain(|&n, _| (1..=MAX_LEVEL).contains(&n));
    }

    fn apply_completion(&mut self, level: Level, elapsed_seconds: u64) -> CompletionUpdate {
        let unlocked_next = level.next().filter(|next| self.unlocked.insert(next.get()));
        let new_best = match self.best_times.get(&level.get()) {
            Some(&best) if best <= elapsed_seconds => false,
            _ => {
                self.best_times.insert(level.get(), elapsed_seconds);
                true
            }
        };
        CompletionUpdate {
            unlocked_next,
            new_best,
        }
    }
}

impl Default for ProgressRecord {
    fn default() -> Self {
        Self::initial()
    }
}

/// What a recorded completion changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompletionUpdate {
    /// The level newly unlocked by this completion, if any.
    pub unlocked_next: Option<Level>,
    /// Whether the completion set a new best time for its level.
    pub new_best: bool,
}

/// Progression state bound to a [`Storage`] backend.
///
/// Mutations update the in-memory record and immediately rewrite both storage
/// keys, so callers never observe a partially written state.
#[derive(Debug)]
pub struct ProgressStore<S> {
    storage: S,
    record: ProgressRecord,
}

impl<S: Storage> ProgressStore<S> {
    /// Loads progression state from storage.
    ///
    /// Missing or malformed values fall back to the initial state with a
    /// logged warning; the loaded record is sanitized so level 1 is always
    /// unlocked and out-of-range entries are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Storage`] when the storage layer itself
    /// fails to read.
    pub fn load(storage: S) -> Result<Self, PersistenceError> {
        let unlocked_raw = storage.read(UNLOCKED_LEVELS_KEY)?;
        let times_raw = storage.read(BEST_TIMES_KEY)?;

        let mut record = ProgressRecord {
            unlocked: parse_or_default(UNLOCKED_LEVELS_KEY, unlocked_raw),
            best_times: parse_or_default(BEST_TIMES_KEY, times_raw),
        };
        record.sanitize();

        Ok(Self { storage, record })
    }

    /// Returns the current progression record.
    #[must_use]
    pub fn record(&self) -> &ProgressRecord {
        &self.record
    }

    /// Returns whether a level can be started.
    #[must_use]
    pub fn is_unlocked(&self, level: Level) -> bool {
        self.record.is_unlocked(level)
    }

    /// Returns the best completion time for a level, in seconds.
    #[must_use]
    pub fn best_time(&self, level: Level) -> Option<u64> {
        self.record.best_time(level)
    }

    /// Records a level completion: unlocks the next level on first completion
    /// and keeps the lower best time, then persists both keys.
    ///
    /// The in-memory record is updated even when persisting fails, so the
    /// running session keeps a consistent view.
    ///
    /// # Errors
    ///
    /// Returns a [`PersistenceError`] when the updated state could not be
    /// written back.
    pub fn record_completion(
        &mut self,
        level: Level,
        elapsed_seconds: u64,
    ) -> Result<CompletionUpdate, PersistenceError> {
        let update = self.record.apply_completion(level, elapsed_seconds);
        self.persist()?;
        Ok(update)
    }

    /// Resets progression to the initial state and persists it.
    ///
    /// # Errors
    ///
    /// Returns a [`PersistenceError`] when the reset state could not be
    /// written back.
    pub fn reset(&mut self) -> Result<(), PersistenceError> {
        self.record = ProgressRecord::initial();
        self.persist()
    }

    fn persist(&mut self) -> Result<(), PersistenceError> {
        let unlocked = serde_json::to_string(&self.record.unlocked)?;
        let times = serde_json::to_string(&self.record.best_times)?;
        self.storage.write(UNLOCKED_LEVELS_KEY, &unlocked)?;
        self.storage.write(BEST_TIMES_KEY, &times)?;
        Ok(())
    }
}

fn parse_or_default<T: DeserializeOwned + Default>(key: &str, raw: Option<String>) -> T {
    let Some(raw) = raw else {
        return T::default();
    };
    serde_json::from_str(&raw).unwrap_or_else(|err| {
        log::warn!("persisted {key} value is malformed, using defaults: {err}");
        T::default()
    })
}
