//! Core persistence and use-case logic for the art gallery catalog.
//! Galleries and their works live in one JSON document; this crate owns every
//! read and write of that document.

pub mod config;
pub mod handler;
pub mod logging;
pub mod model;
pub mod repo;
pub mod store;

pub use config::{resolve_store_path, LogSettings};
pub use handler::dto::{
    CreateGalleryRequest, CreateWorkRequest, GalleryResult, SaveGalleryResult,
    UpdateGalleryRequest, UpdateWorkRequest, WorkResult,
};
pub use handler::gallery_handlers::{
    CreateGalleryCommand, DeleteGalleryCommand, GalleryHandlers, GetAllGalleriesQuery,
    GetGalleryByIdQuery, UpdateGalleryCommand,
};
pub use handler::work_handlers::{
    CreateWorkCommand, DeleteWorkCommand, GetGalleryWorksQuery, GetWorkByIdQuery,
    GetWorkOwnerQuery, UpdateWorkCommand, WorkHandlers,
};
pub use handler::{absorb_expected, Handle, HandlerError, HandlerResult};
pub use logging::{default_log_level, init_logging, init_logging_from_env, logging_status};
pub use model::gallery::{Gallery, GalleryId};
pub use model::validation::ValidationError;
pub use model::work::{Work, WorkId};
pub use repo::gallery_repo::{GalleryRepository, JsonGalleryRepository};
pub use repo::work_repo::{JsonWorkRepository, WorkRepository};
pub use repo::{EntityKind, RepoError, RepoResult};
pub use store::{
    CancellationToken, DocumentStore, Mutation, StoreError, StoreOptions, StoreResult,
};

use std::path::PathBuf;
use std::sync::Arc;

/// Gallery and work repositories wired to one shared document.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub galleries: JsonGalleryRepository,
    pub works: JsonWorkRepository,
}

impl Catalog {
    /// Opens both repositories over the document at `path`.
    pub fn open(path: impl Into<PathBuf>, options: StoreOptions) -> Self {
        Self::from_store(Arc::new(DocumentStore::with_options(path, options)))
    }

    pub fn from_store(store: Arc<DocumentStore>) -> Self {
        Self {
            galleries: JsonGalleryRepository::new(Arc::clone(&store)),
            works: JsonWorkRepository::new(store),
        }
    }

    pub fn gallery_handlers(&self) -> GalleryHandlers<JsonGalleryRepository> {
        GalleryHandlers::new(self.galleries.clone())
    }

    pub fn work_handlers(&self) -> WorkHandlers<JsonWorkRepository> {
        WorkHandlers::new(self.works.clone())
    }
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
