//! File-backed category cache with change notifications.
//!
//! Contents live in `categories.json` inside the cache directory. Every
//! write replaces the file atomically (temp file + rename) while holding an
//! exclusive `fs2` lock on `categories.lock`, so readers in this or another
//! process never observe a half-written list.
//!
//! Each directory is opened once per process: every [`CacheStore::open`] of
//! the same directory returns a handle to the same store, so all handles
//! share one change notifier. Writes made by another process are picked up
//! by [`CacheChanges`] through the records file's modification stamp.

use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Weak};
use std::time::{Duration, SystemTime};

use fs2::FileExt;
use parking_lot::{Mutex, RwLock};
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

use super::error::CacheError;
use super::run_blocking;
use super::records::CachedCategory;
use crate::model::{normalize_categories, Category};

const RECORDS_FILE: &str = "categories.json";
const LOCK_FILE: &str = "categories.lock";

/// How often subscribers check the records file for writes from other
/// processes.
const EXTERNAL_POLL: Duration = Duration::from_secs(1);

/// Open stores keyed by canonical directory.
static OPEN_STORES: Mutex<BTreeMap<PathBuf, Weak<StoreInner>>> = Mutex::new(BTreeMap::new());

/// Shared handle to the local category cache.
///
/// Cloning is cheap; all clones see the same contents and notify the same
/// subscribers.
#[derive(Clone)]
pub struct CacheStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    dir: PathBuf,
    lock: RwLock<File>,
    /// Bumped after every committed write.
    version: watch::Sender<u64>,
}

impl CacheStore {
    /// Open (creating if needed) the cache in `dir`.
    ///
    /// Opening a directory that is already open in this process returns a
    /// handle to the existing store. Failure here means local storage is
    /// unusable; callers treat it as fatal for startup.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| CacheError::io(&dir, e))?;
        let dir = fs::canonicalize(&dir).map_err(|e| CacheError::io(&dir, e))?;

        let mut open_stores = OPEN_STORES.lock();
        open_stores.retain(|_, store| store.strong_count() > 0);
        if let Some(inner) = open_stores.get(&dir).and_then(Weak::upgrade) {
            return Ok(Self { inner });
        }

        let lock_path = dir.join(LOCK_FILE);
        let lock = OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|e| CacheError::io(&lock_path, e))?;

        let (version, _) = watch::channel(0);
        tracing::debug!(dir = %dir.display(), "Opened category cache");

        let inner = Arc::new(StoreInner {
            dir: dir.clone(),
            lock: RwLock::new(lock),
            version,
        });
        open_stores.insert(dir, Arc::downgrade(&inner));
        Ok(Self { inner })
    }

    /// Directory holding the cache files.
    pub fn dir(&self) -> &Path {
        &self.inner.dir
    }

    fn records_path(&self) -> PathBuf {
        self.inner.dir.join(RECORDS_FILE)
    }

    /// Replace the whole cache with `categories`.
    ///
    /// Records are keyed by id; if the input repeats an id the later entry
    /// wins.
    pub fn replace_all(&self, categories: &[Category]) -> Result<(), CacheError> {
        let mut records: BTreeMap<String, CachedCategory> = BTreeMap::new();
        for category in categories {
            let record = CachedCategory::from(category);
            records.insert(record.id.clone(), record);
        }
        let records: Vec<CachedCategory> = records.into_values().collect();
        self.write_records(&records)?;
        tracing::info!(count = records.len(), "Replaced cached categories");
        Ok(())
    }

    /// Remove every cached category.
    pub fn clear(&self) -> Result<(), CacheError> {
        self.write_records(&[])?;
        tracing::info!("Cleared category cache");
        Ok(())
    }

    /// All cached categories, ascending by `order`.
    pub fn read_all_sorted(&self) -> Result<Vec<Category>, CacheError> {
        let guard = self.inner.lock.read();
        let path = self.records_path();
        FileExt::lock_shared(&*guard).map_err(|e| CacheError::io(&path, e))?;
        let result = read_records(&path);
        let _ = FileExt::unlock(&*guard);

        let records = result?;
        Ok(normalize_categories(records.into_iter().map(Category::from)))
    }

    /// Like [`read_all_sorted`](Self::read_all_sorted) but degrades to an
    /// empty list, logging the failure.
    pub fn read_all_sorted_or_empty(&self) -> Vec<Category> {
        match self.read_all_sorted() {
            Ok(categories) => categories,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to read cached categories");
                Vec::new()
            }
        }
    }

    /// Observe cache contents.
    ///
    /// The first call to [`CacheChanges::next`] yields the current contents;
    /// each later call waits for the next committed write. Writes through
    /// any handle in this process are seen at once; writes from another
    /// process are seen within [`EXTERNAL_POLL`].
    pub fn subscribe(&self) -> CacheChanges {
        CacheChanges {
            store: self.clone(),
            version: self.inner.version.subscribe(),
            primed: false,
            stamp: None,
        }
    }

    fn write_records(&self, records: &[CachedCategory]) -> Result<(), CacheError> {
        let path = self.records_path();
        let tmp_path = self.inner.dir.join(format!("{}.tmp", RECORDS_FILE));
        let bytes = serde_json::to_vec_pretty(records).map_err(CacheError::Encode)?;

        {
            let guard = self.inner.lock.write();
            FileExt::lock_exclusive(&*guard).map_err(|e| CacheError::io(&path, e))?;
            let result = fs::write(&tmp_path, &bytes)
                .and_then(|_| fs::rename(&tmp_path, &path))
                .map_err(|e| CacheError::io(&path, e));
            let _ = FileExt::unlock(&*guard);
            result?;
        }

        self.inner.version.send_modify(|v| *v = v.wrapping_add(1));
        Ok(())
    }
}

fn read_records(path: &Path) -> Result<Vec<CachedCategory>, CacheError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(CacheError::io(path, e)),
    };
    serde_json::from_slice(&bytes).map_err(|e| CacheError::Corrupt {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Modification time and length of the records file, `None` while it does
/// not exist.
type FileStamp = Option<(SystemTime, u64)>;

fn file_stamp(path: &Path) -> FileStamp {
    let metadata = fs::metadata(path).ok()?;
    Some((metadata.modified().ok()?, metadata.len()))
}

/// Stream of full category lists, one per cache change.
///
/// Never ends while the store is alive. Read failures yield an empty list.
pub struct CacheChanges {
    store: CacheStore,
    version: watch::Receiver<u64>,
    primed: bool,
    /// Stamp of the records file as of the last emission.
    stamp: FileStamp,
}

impl CacheChanges {
    pub async fn next(&mut self) -> Option<Vec<Category>> {
        if self.primed {
            self.wait_for_change().await?;
        }
        self.primed = true;
        self.version.borrow_and_update();

        let store = self.store.clone();
        let (stamp, categories) = run_blocking(move || {
            let stamp = file_stamp(&store.records_path());
            (stamp, store.read_all_sorted_or_empty())
        })
        .await
        .unwrap_or_default();
        self.stamp = stamp;
        Some(categories)
    }

    /// Wait for a write in this process or a changed records file.
    async fn wait_for_change(&mut self) -> Option<()> {
        let mut poll = tokio::time::interval(EXTERNAL_POLL);
        poll.set_missed_tick_behavior(MissedTickBehavior::Delay);
        poll.tick().await;

        loop {
            tokio::select! {
                changed = self.version.changed() => return changed.ok(),
                _ = poll.tick() => {
                    let path = self.store.records_path();
                    if let Some(current) = run_blocking(move || file_stamp(&path)).await {
                        if current != self.stamp {
                            tracing::debug!("Category cache changed on disk");
                            return Some(());
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CategoryStatus;
    use std::time::Duration;
    use tempfile::TempDir;

    fn category(title: &str, order: i64) -> Category {
        Category::new(
            title,
            "desc",
            "img",
            order,
            CategoryStatus::Free,
            vec![(format!("{} fact", title), String::new())],
        )
    }

    #[test]
    fn empty_store_reads_empty() {
        let dir = TempDir::new().unwrap();
        let store = CacheStore::open(dir.path()).unwrap();
        assert!(store.read_all_sorted().unwrap().is_empty());
    }

    #[test]
    fn replace_all_then_read_sorted() {
        let dir = TempDir::new().unwrap();
        let store = CacheStore::open(dir.path()).unwrap();
        store
            .replace_all(&[category("B", 2), category("A", 1), category("C", 3)])
            .unwrap();

        let titles: Vec<_> = store
            .read_all_sorted()
            .unwrap()
            .into_iter()
            .map(|c| c.title)
            .collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn replace_all_drops_previous_contents() {
        let dir = TempDir::new().unwrap();
        let store = CacheStore::open(dir.path()).unwrap();
        store.replace_all(&[category("Old", 1)]).unwrap();
        store.replace_all(&[category("New", 5)]).unwrap();

        let stored = store.read_all_sorted().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].title, "New");
    }

    #[test]
    fn replace_all_upserts_by_id() {
        let dir = TempDir::new().unwrap();
        let store = CacheStore::open(dir.path()).unwrap();
        store
            .replace_all(&[category("Dup", 1), category("Dup", 1)])
            .unwrap();
        assert_eq!(store.read_all_sorted().unwrap().len(), 1);
    }

    #[test]
    fn contents_survive_reopen() {
        let dir = TempDir::new().unwrap();
        {
            let store = CacheStore::open(dir.path()).unwrap();
            store.replace_all(&[category("Kept", 1)]).unwrap();
        }
        let reopened = CacheStore::open(dir.path()).unwrap();
        assert_eq!(reopened.read_all_sorted().unwrap()[0].title, "Kept");
    }

    #[test]
    fn clear_removes_everything() {
        let dir = TempDir::new().unwrap();
        let store = CacheStore::open(dir.path()).unwrap();
        store.replace_all(&[category("A", 1)]).unwrap();
        store.clear().unwrap();
        assert!(store.read_all_sorted().unwrap().is_empty());
    }

    #[test]
    fn corrupt_file_is_an_error_but_or_empty_degrades() {
        let dir = TempDir::new().unwrap();
        let store = CacheStore::open(dir.path()).unwrap();
        std::fs::write(dir.path().join(RECORDS_FILE), b"{not json").unwrap();

        assert!(matches!(
            store.read_all_sorted(),
            Err(CacheError::Corrupt { .. })
        ));
        assert!(store.read_all_sorted_or_empty().is_empty());
    }

    #[tokio::test]
    async fn subscription_emits_current_then_changes() {
        let dir = TempDir::new().unwrap();
        let store = CacheStore::open(dir.path()).unwrap();
        store.replace_all(&[category("A", 1)]).unwrap();

        let mut changes = store.subscribe();
        let first = changes.next().await.unwrap();
        assert_eq!(first.len(), 1);

        store.replace_all(&[category("A", 1), category("B", 2)]).unwrap();
        let second = tokio::time::timeout(Duration::from_secs(1), changes.next())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(second.len(), 2);
    }

    #[tokio::test]
    async fn subscription_survives_corrupt_reads() {
        let dir = TempDir::new().unwrap();
        let store = CacheStore::open(dir.path()).unwrap();
        let mut changes = store.subscribe();
        changes.next().await.unwrap();

        std::fs::write(dir.path().join(RECORDS_FILE), b"garbage").unwrap();
        store.inner.version.send_modify(|v| *v += 1);
        let degraded = changes.next().await.unwrap();
        assert!(degraded.is_empty());

        store.replace_all(&[category("A", 1)]).unwrap();
        let recovered = changes.next().await.unwrap();
        assert_eq!(recovered.len(), 1);
    }

    #[test]
    fn reopening_a_directory_shares_the_store() {
        let dir = TempDir::new().unwrap();
        let a = CacheStore::open(dir.path()).unwrap();
        let b = CacheStore::open(dir.path().join(".")).unwrap();
        assert!(Arc::ptr_eq(&a.inner, &b.inner));

        let other = TempDir::new().unwrap();
        let c = CacheStore::open(other.path()).unwrap();
        assert!(!Arc::ptr_eq(&a.inner, &c.inner));
    }

    #[tokio::test]
    async fn writes_through_another_handle_reach_subscribers() {
        let dir = TempDir::new().unwrap();
        let a = CacheStore::open(dir.path()).unwrap();
        let b = CacheStore::open(dir.path()).unwrap();

        let mut changes = a.subscribe();
        assert!(changes.next().await.unwrap().is_empty());

        b.replace_all(&[category("A", 1), category("B", 2)]).unwrap();
        let seen = tokio::time::timeout(Duration::from_millis(500), changes.next())
            .await
            .expect("change not delivered")
            .unwrap();
        assert_eq!(seen.len(), 2);
    }

    #[tokio::test]
    async fn writes_from_another_process_reach_subscribers() {
        let dir = TempDir::new().unwrap();
        let store = CacheStore::open(dir.path()).unwrap();
        let mut changes = store.subscribe();
        assert!(changes.next().await.unwrap().is_empty());

        // Another process only shares the file, not the notifier.
        let records = vec![CachedCategory::from(&category("A", 1))];
        std::fs::write(
            dir.path().join(RECORDS_FILE),
            serde_json::to_vec(&records).unwrap(),
        )
        .unwrap();

        let seen = tokio::time::timeout(EXTERNAL_POLL * 3, changes.next())
            .await
            .expect("external change not detected")
            .unwrap();
        assert_eq!(seen[0].title, "A");
    }

    #[tokio::test]
    async fn unchanged_file_does_not_emit() {
        let dir = TempDir::new().unwrap();
        let store = CacheStore::open(dir.path()).unwrap();
        store.replace_all(&[category("A", 1)]).unwrap();
        let mut changes = store.subscribe();
        changes.next().await.unwrap();

        let quiet = tokio::time::timeout(EXTERNAL_POLL * 2, changes.next()).await;
        assert!(quiet.is_err());
    }
}
