//! File-backed gallery document.
//!
//! # Responsibility
//! - Read the document from disk on every call (no in-process cache).
//! - Write the document back in full, atomically from a reader's view.
//! - Provide `read`/`mutate` cycles that hold the store lock end to end.
//!
//! # See also
//! - `crate::repo` for the gallery and work views over this document.

use super::{ensure_active, CancellationToken, StoreError, StoreResult};
use crate::model::gallery::Gallery;
use log::{debug, error, info};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Instant;

/// Output options for the persisted document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreOptions {
    /// Write indented JSON instead of the compact single-line form.
    pub pretty: bool,
}

/// Result of a `DocumentStore::mutate` closure.
///
/// Only `Changed` triggers a save.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation<T> {
    Changed(T),
    Unchanged(T),
}

/// Single JSON document holding every gallery and its works.
#[derive(Debug)]
pub struct DocumentStore {
    path: PathBuf,
    options: StoreOptions,
    lock: Mutex<()>,
}

impl DocumentStore {
    /// Binds a store to `path`. The file is not touched until first use.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::with_options(path, StoreOptions::default())
    }

    pub fn with_options(path: impl Into<PathBuf>, options: StoreOptions) -> Self {
        Self {
            path: path.into(),
            options,
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the full document.
    ///
    /// # Errors
    /// - `Cancelled` when `cancel` already fired.
    /// - `Read` when the file exists but cannot be read.
    /// - `Corrupt` when the content is not a gallery array.
    pub fn load(&self, cancel: &CancellationToken) -> StoreResult<Vec<Gallery>> {
        let _guard = self.acquire();
        self.load_unlocked(cancel)
    }

    /// Overwrites the full document with `galleries`.
    ///
    /// # Errors
    /// - `Cancelled` when `cancel` already fired; the file is left untouched.
    /// - `Encode`/`Write` when serialization or the file replace fails.
    pub fn save(&self, galleries: &[Gallery], cancel: &CancellationToken) -> StoreResult<()> {
        ensure_active(cancel)?;
        let _guard = self.acquire();
        self.save_unlocked(galleries)
    }

    /// Runs `f` over a freshly loaded document while holding the store lock.
    pub fn read<T>(
        &self,
        cancel: &CancellationToken,
        f: impl FnOnce(&[Gallery]) -> T,
    ) -> StoreResult<T> {
        let _guard = self.acquire();
        let galleries = self.load_unlocked(cancel)?;
        Ok(f(&galleries))
    }

    /// Runs one load -> mutate -> persist cycle while holding the store lock.
    ///
    /// Cancellation is checked before load, before `f` runs and before the
    /// save starts. An error from `f` aborts the cycle without writing.
    pub fn mutate<T, E>(
        &self,
        cancel: &CancellationToken,
        f: impl FnOnce(&mut Vec<Gallery>) -> Result<Mutation<T>, E>,
    ) -> Result<T, E>
    where
        E: From<StoreError>,
    {
        let _guard = self.acquire();
        let mut galleries = self.load_unlocked(cancel)?;

        ensure_active(cancel)?;
        match f(&mut galleries)? {
            Mutation::Unchanged(value) => Ok(value),
            Mutation::Changed(value) => {
                ensure_active(cancel)?;
                self.save_unlocked(&galleries)?;
                Ok(value)
            }
        }
    }

    fn acquire(&self) -> MutexGuard<'_, ()> {
        // The guarded state lives on disk, so a panic in another holder leaves
        // nothing in memory to repair.
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn load_unlocked(&self, cancel: &CancellationToken) -> StoreResult<Vec<Gallery>> {
        ensure_active(cancel)?;
        let started_at = Instant::now();

        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("event=store_load module=store status=ok source=missing galleries=0");
                return Ok(Vec::new());
            }
            Err(err) => {
                error!(
                    "event=store_load module=store status=error duration_ms={} error_code=store_read_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source: err,
                });
            }
        };

        if raw.trim().is_empty() {
            debug!("event=store_load module=store status=ok source=empty galleries=0");
            return Ok(Vec::new());
        }

        let galleries = match serde_json::from_str::<Option<Vec<Gallery>>>(&raw) {
            Ok(parsed) => parsed.unwrap_or_default(),
            Err(err) => {
                error!(
                    "event=store_load module=store status=error duration_ms={} error_code=store_corrupt line={} column={}",
                    started_at.elapsed().as_millis(),
                    err.line(),
                    err.column()
                );
                return Err(StoreError::Corrupt {
                    path: self.path.clone(),
                    source: err,
                });
            }
        };

        debug!(
            "event=store_load module=store status=ok galleries={} duration_ms={}",
            galleries.len(),
            started_at.elapsed().as_millis()
        );
        Ok(galleries)
    }

    fn save_unlocked(&self, galleries: &[Gallery]) -> StoreResult<()> {
        let started_at = Instant::now();
        let encoded = if self.options.pretty {
            serde_json::to_vec_pretty(galleries)
        } else {
            serde_json::to_vec(galleries)
        };
        let payload = encoded.map_err(StoreError::Encode)?;

        match self.replace_file(&payload) {
            Ok(()) => {
                info!(
                    "event=store_save module=store status=ok galleries={} bytes={} duration_ms={}",
                    galleries.len(),
                    payload.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=store_save module=store status=error duration_ms={} error_code=store_write_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(StoreError::Write {
                    path: self.path.clone(),
                    source: err,
                })
            }
        }
    }

    fn replace_file(&self, payload: &[u8]) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_path = self.temp_path();
        let written = File::create(&tmp_path).and_then(|mut file| {
            file.write_all(payload)?;
            file.sync_all()
        });
        if let Err(err) = written.and_then(|()| fs::rename(&tmp_path, &self.path)) {
            let _ = fs::remove_file(&tmp_path);
            return Err(err);
        }
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("galleries"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
