use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::errors::{Result, StoreError};

/// File holding the like set, `{"likes": [..]}`.
pub(crate) const LIKES_FILE: &str = "blog_data.json";
/// File holding the favorites map, post id -> full post snapshot.
pub(crate) const FAVORITES_FILE: &str = "favorites.json";
/// File holding the bearer token as plain text.
pub(crate) const TOKEN_FILE: &str = "token";

/// Device-local persistence for likes, favorites, and the bearer token.
///
/// State lives as flat JSON files (plus one plain-text token file) in a
/// single directory. Absent or malformed files read back as empty state;
/// only writes surface errors.
///
/// Every read-modify-write sequence (e.g. [`Self::toggle_like`]) runs under
/// an internal mutex, so concurrent callers within one process cannot
/// interleave between the read and the write. The store is cheap to clone;
/// clones share the same directory and lock.
#[derive(Clone, Debug)]
pub struct InteractionStore {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    dir: PathBuf,
    /// Serializes read-modify-write sequences against the files in `dir`.
    lock: Mutex<()>,
}

impl InteractionStore {
    /// Open a store in the platform data directory (`<data dir>/blogkit`).
    pub fn new() -> Result<Self> {
        let base = dirs::data_dir().ok_or_else(|| {
            StoreError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                "no platform data directory",
            ))
        })?;
        Self::open(base.join("blogkit"))
    }

    /// Open a store in an explicit directory, creating it if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(StoreError::Io)?;
        Ok(Self {
            inner: Arc::new(Inner {
                dir,
                lock: Mutex::new(()),
            }),
        })
    }

    /// Directory holding this store's files.
    pub fn dir(&self) -> &Path {
        &self.inner.dir
    }

    /// Acquire the store-wide critical section.
    ///
    /// A poisoned lock is recovered: the files on disk are always in a
    /// consistent state because each write is a single `fs::write`.
    pub(crate) fn guard(&self) -> MutexGuard<'_, ()> {
        self.inner
            .lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub(crate) fn path(&self, file: &str) -> PathBuf {
        self.inner.dir.join(file)
    }

    /// Read and parse a JSON state file.
    ///
    /// Missing or unreadable files and malformed JSON all yield the default
    /// value; the latter two are logged. Callers must hold [`Self::guard`]
    /// when this read is part of a read-modify-write sequence.
    pub(crate) fn read_json<T>(&self, file: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        let path = self.path(file);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return T::default(),
            Err(err) => {
                tracing::warn!(?path, %err, "failed to read local state, treating as empty");
                return T::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(?path, %err, "malformed local state, treating as empty");
                T::default()
            }
        }
    }

    /// Serialize and write a JSON state file.
    pub(crate) fn write_json<T: Serialize>(&self, file: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value).map_err(StoreError::Serialize)?;
        fs::write(self.path(file), raw).map_err(StoreError::Io)?;
        Ok(())
    }
}
