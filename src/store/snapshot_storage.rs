use std::{
    future::Future,
    io::ErrorKind,
    path::PathBuf,
};

use anyhow::Result;
use fs4::tokio::AsyncFileExt;
use tokio::{
    fs::File,
    io::{AsyncReadExt, AsyncWriteExt},
};
use tracing::{debug, warn};

use super::entities::HabitEntity;

/// Name of the single slot the collection is persisted under.
pub const SNAPSHOT_FILE_NAME: &str = "habits.json";

/// Interface for abstracting persistence of the habit collection. The collection is small
/// enough that it is always written and read as one snapshot.
pub trait SnapshotStorage {
    /// Reads the whole persisted collection.
    fn load(&self) -> impl Future<Output = Result<Vec<HabitEntity>>>;

    /// Overwrites the persisted collection with `habits`.
    fn save(&self, habits: &[HabitEntity]) -> impl Future<Output = Result<()>>;
}

/// The main realization of [SnapshotStorage]. Keeps the collection as a json array in a
/// single file under the application directory.
pub struct SnapshotStorageImpl {
    snapshot_path: PathBuf,
}

impl SnapshotStorageImpl {
    pub fn new(app_dir: PathBuf) -> Result<Self, std::io::Error> {
        std::fs::create_dir_all(&app_dir)?;

        Ok(Self {
            snapshot_path: app_dir.join(SNAPSHOT_FILE_NAME),
        })
    }

    /// Reads the raw snapshot, if one exists yet.
    async fn read_raw(&self) -> std::io::Result<Option<String>> {
        let mut file = match File::open(&self.snapshot_path).await {
            Ok(v) => v,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };
        file.lock_shared()?;
        let mut raw = String::new();
        let result = file.read_to_string(&mut raw).await;
        file.unlock_async().await?;
        result?;
        Ok(Some(raw))
    }

    async fn write_with_file(file: &mut File, habits: &[HabitEntity]) -> Result<()> {
        let buffer = serde_json::to_vec(habits)?;
        file.write_all(&buffer).await?;
        file.flush().await?;
        Ok(())
    }
}

impl SnapshotStorage for SnapshotStorageImpl {
    async fn load(&self) -> Result<Vec<HabitEntity>> {
        debug!("Loading snapshot {:?}", self.snapshot_path);
        let Some(raw) = self.read_raw().await? else {
            return Ok(vec![]);
        };
        match serde_json::from_str::<Vec<HabitEntity>>(&raw) {
            Ok(v) => Ok(v),
            Err(e) => {
                // discard illegal snapshots. Might happen after shutdowns
                warn!(
                    "Snapshot in path {:?} holds illegal json: {e}",
                    self.snapshot_path
                );
                Ok(vec![])
            }
        }
    }

    async fn save(&self, habits: &[HabitEntity]) -> Result<()> {
        let mut file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.snapshot_path)
            .await?;

        // Semi-safe acquire-release for a file
        file.lock_exclusive()?;
        let result = Self::write_with_file(&mut file, habits).await;
        file.unlock_async().await?;
        result
    }
}
