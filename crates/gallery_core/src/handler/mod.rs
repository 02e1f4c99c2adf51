//! Command/query handlers over the gallery and work repositories.
//!
//! # Responsibility
//! - Turn one external request into exactly one repository call.
//! - Absorb expected misses (`NotFound`, `Validation`) into absent results.
//!
//! # Invariants
//! - `absorb_expected` is the only place repository failures are mapped.
//! - Storage failures and cancellation always reach the caller.

use crate::repo::{RepoError, RepoResult};
use crate::store::{CancellationToken, StoreError};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod dto;
pub mod gallery_handlers;
pub mod work_handlers;

pub type HandlerResult<T> = Result<T, HandlerError>;

/// Failures a handler cannot absorb.
#[derive(Debug)]
pub enum HandlerError {
    /// Caller cancelled before the store committed.
    Cancelled,
    /// Storage-layer failure, passed through unchanged.
    Store(StoreError),
}

impl Display for HandlerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cancelled => write!(f, "request cancelled"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for HandlerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled => None,
            Self::Store(err) => Some(err),
        }
    }
}

/// One request type handled by one repository operation.
pub trait Handle<Q> {
    type Output;

    fn handle(&self, request: Q, cancel: &CancellationToken) -> HandlerResult<Self::Output>;
}

/// Maps a repository outcome to the handler vocabulary.
///
/// - `Ok(value)` -> `Ok(Some(value))`
/// - `NotFound` / `Validation` -> `Ok(None)`
/// - `Cancelled` -> `Err(HandlerError::Cancelled)`
/// - `Store` -> `Err(HandlerError::Store)`
pub fn absorb_expected<T>(result: RepoResult<T>) -> HandlerResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(RepoError::NotFound { kind, id }) => {
            debug!("event=handler_miss module=handler reason=not_found kind={kind} id={id}");
            Ok(None)
        }
        Err(RepoError::Validation(err)) => {
            debug!("event=handler_miss module=handler reason=invalid detail={err}");
            Ok(None)
        }
        Err(RepoError::Cancelled) => Err(HandlerError::Cancelled),
        Err(RepoError::Store(err)) => Err(HandlerError::Store(err)),
    }
}
