use chrono::NaiveDate;
use tracing::{debug, warn};

use super::{entities::HabitEntity, snapshot_storage::SnapshotStorage};

/// The process-wide habit collection. The lifecycle is init-from-storage once, synchronous
/// in-memory mutations, and a best-effort [flush](HabitStore::flush) after every mutation.
/// Mutations never wait for persistence; their in-memory effect is immediate.
pub struct HabitStore<S: SnapshotStorage> {
    storage: S,
    habits: Vec<HabitEntity>,
}

impl<S: SnapshotStorage> HabitStore<S> {
    /// Loads the persisted collection. A failed load leaves the store empty rather than
    /// unusable, so the collection is either fully loaded or empty, never partial.
    pub async fn init(storage: S) -> Self {
        let habits = match storage.load().await {
            Ok(v) => v,
            Err(e) => {
                warn!("Failed to load habit snapshot, starting empty: {e:?}");
                vec![]
            }
        };
        Self { storage, habits }
    }

    /// Read-only snapshot of the collection.
    pub fn habits(&self) -> &[HabitEntity] {
        &self.habits
    }

    /// Appends a habit with a fresh id and no completed days. Empty and whitespace-only
    /// names are rejected.
    pub fn add(&mut self, name: &str) -> Option<&HabitEntity> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        debug!("Adding habit {name}");
        self.habits.push(HabitEntity::new(name));
        self.habits.last()
    }

    /// Flips completion of `date` for the habit with `habit_id`. Returns the new state of
    /// the day, or None when no habit matches.
    pub fn toggle(&mut self, habit_id: &str, date: NaiveDate) -> Option<bool> {
        let habit = self.habits.iter_mut().find(|h| &*h.id == habit_id)?;
        Some(habit.toggle_date(date))
    }

    /// Deletes the habit with `habit_id`. Returns whether anything was removed.
    pub fn remove(&mut self, habit_id: &str) -> bool {
        let before = self.habits.len();
        self.habits.retain(|h| &*h.id != habit_id);
        self.habits.len() != before
    }

    /// Persists the whole collection. Persistence is best effort, a failed write is logged
    /// and otherwise ignored.
    pub async fn flush(&self) {
        if let Err(e) = self.storage.save(&self.habits).await {
            warn!("Failed to persist habit snapshot: {e:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use anyhow::{anyhow, Result};
    use chrono::NaiveDate;

    use crate::store::{entities::HabitEntity, snapshot_storage::SnapshotStorage};

    use super::HabitStore;

    const TEST_DATE: NaiveDate = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    const NEXT_DATE: NaiveDate = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();

    /// In-memory stand-in for the snapshot file. The saved collection is shared so tests
    /// can inspect it after the store takes ownership of the storage.
    #[derive(Default)]
    struct MemoryStorage {
        saved: Arc<Mutex<Vec<HabitEntity>>>,
        broken: bool,
    }

    impl MemoryStorage {
        fn broken() -> Self {
            Self {
                broken: true,
                ..Self::default()
            }
        }
    }

    impl SnapshotStorage for MemoryStorage {
        async fn load(&self) -> Result<Vec<HabitEntity>> {
            if self.broken {
                return Err(anyhow!("storage is broken"));
            }
            Ok(self.saved.lock().unwrap().clone())
        }

        async fn save(&self, habits: &[HabitEntity]) -> Result<()> {
            if self.broken {
                return Err(anyhow!("storage is broken"));
            }
            *self.saved.lock().unwrap() = habits.to_vec();
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_add_appends_habit_with_empty_dates() {
        let mut store = HabitStore::init(MemoryStorage::default()).await;

        let added = store.add("  Read  ").expect("trimmed name should be accepted");

        assert_eq!(&*added.name, "Read");
        assert!(added.dates.is_empty());
        assert_eq!(store.habits().len(), 1);
    }

    #[tokio::test]
    async fn test_add_rejects_blank_names() {
        let mut store = HabitStore::init(MemoryStorage::default()).await;

        assert!(store.add("").is_none());
        assert!(store.add("   ").is_none());
        assert!(store.habits().is_empty());
    }

    #[tokio::test]
    async fn test_toggle_is_its_own_inverse() {
        let mut store = HabitStore::init(MemoryStorage::default()).await;
        let id = store.add("Read").unwrap().id.clone();
        let original = store.habits()[0].dates.clone();

        assert_eq!(store.toggle(&id, TEST_DATE), Some(true));
        assert_eq!(store.toggle(&id, TEST_DATE), Some(false));

        assert_eq!(store.habits()[0].dates, original);
    }

    #[tokio::test]
    async fn test_toggle_unknown_id_is_noop() {
        let mut store = HabitStore::init(MemoryStorage::default()).await;
        store.add("Read");

        assert_eq!(store.toggle("no-such-id", TEST_DATE), None);
        assert!(store.habits()[0].dates.is_empty());
    }

    #[tokio::test]
    async fn test_removed_id_stays_dead() {
        let mut store = HabitStore::init(MemoryStorage::default()).await;
        let id = store.add("Read").unwrap().id.clone();

        assert!(store.remove(&id));

        assert!(!store.remove(&id));
        assert_eq!(store.toggle(&id, TEST_DATE), None);
        assert!(store.habits().is_empty());
    }

    #[tokio::test]
    async fn test_read_scenario() {
        let mut store = HabitStore::init(MemoryStorage::default()).await;
        let id = store.add("Read").unwrap().id.clone();

        store.toggle(&id, TEST_DATE);
        store.toggle(&id, NEXT_DATE);
        store.toggle(&id, TEST_DATE);

        let dates = &store.habits()[0].dates;
        assert_eq!(dates.iter().copied().collect::<Vec<_>>(), vec![NEXT_DATE]);
    }

    #[tokio::test]
    async fn test_flush_writes_whole_snapshot() {
        let storage = MemoryStorage::default();
        let saved = storage.saved.clone();
        let mut store = HabitStore::init(storage).await;
        let id = store.add("Read").unwrap().id.clone();
        store.toggle(&id, TEST_DATE);

        store.flush().await;

        assert_eq!(&*saved.lock().unwrap(), store.habits());
    }

    #[tokio::test]
    async fn test_broken_storage_starts_empty_and_swallows_writes() {
        let mut store = HabitStore::init(MemoryStorage::broken()).await;

        assert!(store.habits().is_empty());

        store.add("Read");
        // must not panic or surface the write failure
        store.flush().await;
        assert_eq!(store.habits().len(), 1);
    }
}
