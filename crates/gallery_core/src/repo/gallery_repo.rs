//! Gallery repository contracts and JSON document implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over the top-level gallery records.
//! - Leave each gallery's works list to `work_repo`.
//!
//! # Invariants
//! - `create_gallery` always assigns a fresh ID, ignoring the caller's.
//! - `update_gallery` only touches `name`, `city` and `manager`.
//! - Listing preserves document order.

use crate::model::gallery::{Gallery, GalleryId};
use crate::repo::{RepoError, RepoResult};
use crate::store::{CancellationToken, DocumentStore, Mutation};
use log::info;
use std::sync::Arc;
use uuid::Uuid;

/// Repository interface for gallery CRUD operations.
pub trait GalleryRepository {
    fn list_galleries(&self, cancel: &CancellationToken) -> RepoResult<Vec<Gallery>>;
    fn get_gallery(
        &self,
        id: GalleryId,
        cancel: &CancellationToken,
    ) -> RepoResult<Option<Gallery>>;
    fn create_gallery(&self, gallery: Gallery, cancel: &CancellationToken) -> RepoResult<Gallery>;
    fn update_gallery(&self, gallery: &Gallery, cancel: &CancellationToken)
        -> RepoResult<Gallery>;
    /// Removes one gallery with all of its works.
    ///
    /// Fails with `NotFound` when no gallery has `id`.
    fn delete_gallery(&self, id: GalleryId, cancel: &CancellationToken) -> RepoResult<bool>;
}

/// Gallery repository backed by the shared JSON document.
#[derive(Debug, Clone)]
pub struct JsonGalleryRepository {
    store: Arc<DocumentStore>,
}

impl JsonGalleryRepository {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }
}

impl GalleryRepository for JsonGalleryRepository {
    fn list_galleries(&self, cancel: &CancellationToken) -> RepoResult<Vec<Gallery>> {
        Ok(self.store.read(cancel, |galleries| galleries.to_vec())?)
    }

    fn get_gallery(
        &self,
        id: GalleryId,
        cancel: &CancellationToken,
    ) -> RepoResult<Option<Gallery>> {
        Ok(self.store.read(cancel, |galleries| {
            galleries.iter().find(|gallery| gallery.id == id).cloned()
        })?)
    }

    fn create_gallery(
        &self,
        mut gallery: Gallery,
        cancel: &CancellationToken,
    ) -> RepoResult<Gallery> {
        gallery.validate()?;
        for work in &gallery.works {
            work.validate()?;
        }

        let created = self.store.mutate(cancel, |galleries| {
            gallery.id = fresh_gallery_id(galleries);
            // Carried-over works get document-unique IDs as well.
            let mut taken = Vec::with_capacity(gallery.works.len());
            for work in &mut gallery.works {
                work.id = fresh_work_id(galleries, &taken);
                taken.push(work.id);
            }
            galleries.push(gallery.clone());
            Ok::<_, RepoError>(Mutation::Changed(gallery))
        })?;

        info!(
            "event=gallery_create module=repo status=ok gallery_id={} works={}",
            created.id,
            created.works.len()
        );
        Ok(created)
    }

    fn update_gallery(
        &self,
        gallery: &Gallery,
        cancel: &CancellationToken,
    ) -> RepoResult<Gallery> {
        gallery.validate()?;

        let updated = self.store.mutate(cancel, |galleries| {
            let existing = galleries
                .iter_mut()
                .find(|candidate| candidate.id == gallery.id)
                .ok_or_else(|| RepoError::gallery_not_found(gallery.id))?;
            existing.apply_details(gallery);
            Ok::<_, RepoError>(Mutation::Changed(existing.clone()))
        })?;

        info!(
            "event=gallery_update module=repo status=ok gallery_id={}",
            updated.id
        );
        Ok(updated)
    }

    fn delete_gallery(&self, id: GalleryId, cancel: &CancellationToken) -> RepoResult<bool> {
        let removed = self.store.mutate(cancel, |galleries| {
            let index = galleries
                .iter()
                .position(|gallery| gallery.id == id)
                .ok_or_else(|| RepoError::gallery_not_found(id))?;
            Ok::<_, RepoError>(Mutation::Changed(galleries.remove(index)))
        })?;

        info!(
            "event=gallery_delete module=repo status=ok gallery_id={} works_removed={}",
            removed.id,
            removed.works.len()
        );
        Ok(true)
    }
}

fn fresh_gallery_id(galleries: &[Gallery]) -> GalleryId {
    loop {
        let id = Uuid::new_v4();
        if galleries.iter().all(|gallery| gallery.id != id) {
            return id;
        }
    }
}

/// Returns a work ID unused anywhere in `galleries` and not in `reserved`.
pub(crate) fn fresh_work_id(galleries: &[Gallery], reserved: &[Uuid]) -> Uuid {
    loop {
        let id = Uuid::new_v4();
        let in_document = galleries
            .iter()
            .any(|gallery| gallery.find_work(id).is_some());
        if !in_document && !reserved.contains(&id) {
            return id;
        }
    }
}
