//! Domain model for the gallery document.
//!
//! # Responsibility
//! - Define the records persisted in the single JSON document.
//! - Keep write-time validation next to the data it guards.
//!
//! # Invariants
//! - Every gallery and every work is identified by a UUID that never changes.
//! - Works are owned structurally by exactly one gallery.

pub mod gallery;
pub mod validation;
pub mod work;
