//! JSON document storage for the gallery collection.
//!
//! # Responsibility
//! - Load and save the whole gallery document as one JSON blob.
//! - Serialize every load/mutate/save cycle behind one lock.
//! - Honor cooperative cancellation before each stage of a cycle.
//!
//! # Invariants
//! - Saves overwrite the full document through a sibling temp file + rename.
//! - A missing, blank or `null` document loads as an empty collection.
//! - Unparseable content is reported, never silently replaced.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod document;

pub use document::{DocumentStore, Mutation, StoreOptions};
pub use tokio_util::sync::CancellationToken;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    /// Backing file exists but could not be read.
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Backing file (or its temp sibling) could not be written or replaced.
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Backing file content is not a valid gallery document.
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// In-memory document could not be serialized.
    Encode(serde_json::Error),
    /// Caller requested cancellation before the point of no return.
    Cancelled,
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read store `{}`: {source}", path.display())
            }
            Self::Write { path, source } => {
                write!(f, "failed to write store `{}`: {source}", path.display())
            }
            Self::Corrupt { path, source } => {
                write!(f, "corrupt store `{}`: {source}", path.display())
            }
            Self::Encode(err) => write!(f, "failed to encode store document: {err}"),
            Self::Cancelled => write!(f, "store operation cancelled"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Write { source, .. } => Some(source),
            Self::Corrupt { source, .. } => Some(source),
            Self::Encode(err) => Some(err),
            Self::Cancelled => None,
        }
    }
}

/// Fails with `StoreError::Cancelled` when `cancel` has fired.
pub(crate) fn ensure_active(cancel: &CancellationToken) -> StoreResult<()> {
    if cancel.is_cancelled() {
        return Err(StoreError::Cancelled);
    }
    Ok(())
}
