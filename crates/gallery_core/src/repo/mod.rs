//! Repository layer over the shared gallery document.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for galleries and works.
//! - Keep document traversal details out of the handler layer.
//!
//! # Invariants
//! - Repository writes must enforce `validate()` before mutating.
//! - Gallery and work repositories share one `DocumentStore`, so every write
//!   from either side is visible to the other on its next load.
//! - Repository APIs return semantic errors (`NotFound`) in addition to
//!   storage errors.

use crate::model::validation::ValidationError;
use crate::store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub mod gallery_repo;
pub mod work_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Entity named by a `RepoError::NotFound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Gallery,
    Work,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gallery => "gallery",
            Self::Work => "work",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Repository error shared by gallery and work operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ValidationError),
    NotFound { kind: EntityKind, id: Uuid },
    Store(StoreError),
    Cancelled,
}

impl RepoError {
    pub(crate) fn gallery_not_found(id: Uuid) -> Self {
        Self::NotFound {
            kind: EntityKind::Gallery,
            id,
        }
    }

    pub(crate) fn work_not_found(id: Uuid) -> Self {
        Self::NotFound {
            kind: EntityKind::Work,
            id,
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound { kind, id } => write!(f, "{kind} not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::Cancelled => write!(f, "repository operation cancelled"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::NotFound { .. } | Self::Cancelled => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::Cancelled => Self::Cancelled,
            other => Self::Store(other),
        }
    }
}
