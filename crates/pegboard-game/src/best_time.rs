/// Persistent storage for the best winning time, in whole seconds.
///
/// Implementations decide where the value lives; the game only reads it and
/// conditionally writes it back when a game is won.
pub trait BestTimeStore {
    /// Returns the stored best time, if any.
    fn best_time(&self) -> Option<u32>;

    /// Replaces the stored best time.
    fn set_best_time(&mut self, seconds: u32);
}

impl<T> BestTimeStore for &mut T
where
    T: BestTimeStore + ?Sized,
{
    fn best_time(&self) -> Option<u32> {
        (**self).best_time()
    }

    fn set_best_time(&mut self, seconds: u32) {
        (**self).set_best_time(seconds);
    }
}

/// A [`BestTimeStore`] that keeps the value in memory only.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MemoryBestTimeStore {
    best_time: Option<u32>,
}

impl MemoryBestTimeStore {
    /// Creates a store holding `best_time`.
    #[must_use]
    pub fn new(best_time: Option<u32>) -> Self {
        Self { best_time }
    }
}

impl BestTimeStore for MemoryBestTimeStore {
    fn best_time(&self) -> Option<u32> {
        self.best_time
    }

    fn set_best_time(&mut self, seconds: u32) {
        self.best_time = Some(seconds);
    }
}

/// What happened to the best time when a game finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum BestTimeUpdate {
    /// The game was lost; the store was not consulted.
    NotRecorded,
    /// The game was won, but not faster than the record.
    Kept {
        /// The unchanged record.
        best: u32,
    },
    /// The game set a new record.
    Improved {
        /// The record before this game, if there was one.
        previous: Option<u32>,
        /// The new record.
        best: u32,
    },
}

impl BestTimeUpdate {
    /// Returns the best time after the update, if known.
    #[must_use]
    pub fn best(self) -> Option<u32> {
        match self {
            Self::NotRecorded => None,
            Self::Kept { best } | Self::Improved { best, .. } => Some(best),
        }
    }
}

/// Records a winning time, replacing the stored record only if strictly faster.
///
/// # Examples
///
/// ```
/// use pegboard_game::{BestTimeUpdate, MemoryBestTimeStore, record_win};
///
/// let mut store = MemoryBestTimeStore::new(Some(90));
/// assert_eq!(record_win(&mut store, 90), BestTimeUpdate::Kept { best: 90 });
/// assert_eq!(
///     record_win(&mut store, 80),
///     BestTimeUpdate::Improved { previous: Some(90), best: 80 }
/// );
/// ```
pub fn record_win<S>(store: &mut S, elapsed_seconds: u32) -> BestTimeUpdate
where
    S: BestTimeStore + ?Sized,
{
    match store.best_time() {
        Some(best) if best <= elapsed_seconds => BestTimeUpdate::Kept { best },
        previous => {
            store.set_best_time(elapsed_seconds);
            log::info!(
                "new best time {elapsed_seconds}s (previous: {})",
                previous.map_or_else(|| "none".to_owned(), |p| format!("{p}s"))
            );
            BestTimeUpdate::Improved {
                previous,
                best: elapsed_seconds,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_win_sets_record() {
        let mut store = MemoryBestTimeStore::default();
        assert_eq!(
            record_win(&mut store, 120),
            BestTimeUpdate::Improved {
                previous: None,
                best: 120
            }
        );
        assert_eq!(store.best_time(), Some(120));
    }

    #[test]
    fn test_slower_or_equal_win_keeps_record() {
        let mut store = MemoryBestTimeStore::new(Some(60));
        assert_eq!(record_win(&mut store, 61), BestTimeUpdate::Kept { best: 60 });
        assert_eq!(record_win(&mut store, 60), BestTimeUpdate::Kept { best: 60 });
        assert_eq!(store.best_time(), Some(60));
    }

    #[test]
    fn test_faster_win_replaces_record() {
        let mut store = MemoryBestTimeStore::new(Some(60));
        let update = record_win(&mut store, 59);
        assert!(update.is_improved());
        assert_eq!(update.best(), Some(59));
        assert_eq!(store.best_time(), Some(59));
    }

    #[test]
    fn test_works_through_mut_ref() {
        let mut store = MemoryBestTimeStore::default();
        let mut by_ref = &mut store;
        record_win(&mut by_ref, 10);
        assert_eq!(store.best_time(), Some(10));
        assert_eq!(BestTimeUpdate::NotRecorded.best(), None);
    }
}
