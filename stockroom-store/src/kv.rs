//! Key-value store backends.
//!
//! `KeyValueStore` models browser persistent storage: synchronous,
//! atomic per call, string keys and string values. That synchronous,
//! atomic-per-call behavior is the system's only mutual-exclusion
//! primitive: a transport call's read-modify-write stays race-free as
//! long as it never suspends between its `get` and its `set`.

use crate::error::{StoreError, StoreResult};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// A durable string-keyed store with atomic get/set calls.
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`, if any.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Overwrites the value stored under `key`. No partial write is
    /// observable by a later `get`.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}

/// In-memory store, used in tests and as the default backing for the
/// mock transport.
///
/// Supports fault injection so persistence-failure paths (the browser
/// quota-exceeded case) are testable.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    fault: Mutex<FaultPlan>,
}

#[derive(Debug, Default)]
struct FaultPlan {
    set_calls: usize,
    fail_at: Option<usize>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the fault injector: the next `set` call fails with
    /// `StoreError::QuotaExceeded`, then the store recovers.
    pub fn fail_next_set(&self) {
        self.fail_set_in(0);
    }

    /// Arms the fault injector to fail the set call after `skip` more
    /// successful ones. Lets tests fail the reconciler's mirror write
    /// while the transport's own persist succeeds.
    pub fn fail_set_in(&self, skip: usize) {
        let mut plan = self.fault.lock().unwrap_or_else(|e| e.into_inner());
        plan.fail_at = Some(plan.set_calls + skip);
    }

    /// Number of keys currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut plan = self.fault.lock().unwrap_or_else(|e| e.into_inner());
        let call = plan.set_calls;
        plan.set_calls += 1;
        if plan.fail_at == Some(call) {
            plan.fail_at = None;
            return Err(StoreError::QuotaExceeded);
        }
        drop(plan);

        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store: one file per key inside a base directory.
///
/// Writes go through a temporary file plus rename, so a crashed write
/// leaves the previous value intact rather than a truncated record.
#[derive(Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    /// Opens (creating if needed) a store rooted at `base`.
    pub fn open(base: impl Into<PathBuf>) -> StoreResult<Self> {
        let base = base.into();
        fs::create_dir_all(&base)?;
        Ok(Self { base })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys are well-known constants, not user input, so a direct
        // filename mapping is safe here.
        self.base.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let path = self.path_for(key);
        let tmp = tmp_path(&path);
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
