//! Work repository contracts and JSON document implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over works nested inside galleries.
//! - Search works across the whole document, not one gallery.
//!
//! # Invariants
//! - Work IDs are unique document-wide, so lookups by ID need no gallery.
//! - Ownership is fixed at creation: `update_work` never moves a work to
//!   another gallery and reports `NotFound(work)` on an owner mismatch.
//! - `delete_work` saves only when a work was actually removed.

use crate::model::gallery::{Gallery, GalleryId};
use crate::model::work::{Work, WorkId};
use crate::repo::gallery_repo::fresh_work_id;
use crate::repo::{RepoError, RepoResult};
use crate::store::{CancellationToken, DocumentStore, Mutation};
use log::{debug, info};
use std::sync::Arc;

/// Repository interface for work CRUD operations.
pub trait WorkRepository {
    /// Lists the works of one gallery in display order.
    ///
    /// Fails with `NotFound(gallery)` for an unknown gallery.
    fn list_works(&self, gallery_id: GalleryId, cancel: &CancellationToken)
        -> RepoResult<Vec<Work>>;
    fn get_work(&self, work_id: WorkId, cancel: &CancellationToken) -> RepoResult<Option<Work>>;
    /// Returns the ID of the gallery that owns `work_id`, if any.
    fn gallery_of(
        &self,
        work_id: WorkId,
        cancel: &CancellationToken,
    ) -> RepoResult<Option<GalleryId>>;
    fn create_work(
        &self,
        gallery_id: GalleryId,
        work: Work,
        cancel: &CancellationToken,
    ) -> RepoResult<Work>;
    fn update_work(
        &self,
        gallery_id: GalleryId,
        work: &Work,
        cancel: &CancellationToken,
    ) -> RepoResult<Work>;
    fn delete_work(&self, work_id: WorkId, cancel: &CancellationToken) -> RepoResult<bool>;
}

/// Work repository backed by the shared JSON document.
#[derive(Debug, Clone)]
pub struct JsonWorkRepository {
    store: Arc<DocumentStore>,
}

impl JsonWorkRepository {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }
}

impl WorkRepository for JsonWorkRepository {
    fn list_works(
        &self,
        gallery_id: GalleryId,
        cancel: &CancellationToken,
    ) -> RepoResult<Vec<Work>> {
        self.store.read(cancel, |galleries| {
            find_gallery(galleries, gallery_id).map(|gallery| gallery.works.clone())
        })?
    }

    fn get_work(&self, work_id: WorkId, cancel: &CancellationToken) -> RepoResult<Option<Work>> {
        Ok(self.store.read(cancel, |galleries| {
            galleries
                .iter()
                .flat_map(|gallery| gallery.works.iter())
                .find(|work| work.id == work_id)
                .cloned()
        })?)
    }

    fn gallery_of(
        &self,
        work_id: WorkId,
        cancel: &CancellationToken,
    ) -> RepoResult<Option<GalleryId>> {
        Ok(self.store.read(cancel, |galleries| {
            galleries
                .iter()
                .find(|gallery| gallery.find_work(work_id).is_some())
                .map(|gallery| gallery.id)
        })?)
    }

    fn create_work(
        &self,
        gallery_id: GalleryId,
        mut work: Work,
        cancel: &CancellationToken,
    ) -> RepoResult<Work> {
        work.validate()?;

        let created = self.store.mutate(cancel, |galleries| {
            work.id = fresh_work_id(galleries, &[]);
            let owner = find_gallery_mut(galleries, gallery_id)?;
            owner.works.push(work.clone());
            Ok::<_, RepoError>(Mutation::Changed(work))
        })?;

        info!(
            "event=work_create module=repo status=ok gallery_id={} work_id={}",
            gallery_id, created.id
        );
        Ok(created)
    }

    fn update_work(
        &self,
        gallery_id: GalleryId,
        work: &Work,
        cancel: &CancellationToken,
    ) -> RepoResult<Work> {
        work.validate()?;

        let updated = self.store.mutate(cancel, |galleries| {
            let owner = find_gallery_mut(galleries, gallery_id)?;
            let existing = owner
                .works
                .iter_mut()
                .find(|candidate| candidate.id == work.id)
                .ok_or_else(|| RepoError::work_not_found(work.id))?;
            existing.apply_details(work);
            Ok::<_, RepoError>(Mutation::Changed(existing.clone()))
        })?;

        info!(
            "event=work_update module=repo status=ok gallery_id={} work_id={}",
            gallery_id, updated.id
        );
        Ok(updated)
    }

    fn delete_work(&self, work_id: WorkId, cancel: &CancellationToken) -> RepoResult<bool> {
        let owner = self.store.mutate(cancel, |galleries| {
            let owner = galleries.iter_mut().find_map(|gallery| {
                let index = gallery.works.iter().position(|work| work.id == work_id)?;
                gallery.works.remove(index);
                Some(gallery.id)
            });
            Ok::<_, RepoError>(match owner {
                Some(gallery_id) => Mutation::Changed(Some(gallery_id)),
                None => Mutation::Unchanged(None),
            })
        })?;

        match owner {
            Some(gallery_id) => {
                info!(
                    "event=work_delete module=repo status=ok gallery_id={} work_id={}",
                    gallery_id, work_id
                );
                Ok(true)
            }
            None => {
                debug!(
                    "event=work_delete module=repo status=skipped reason=not_found work_id={}",
                    work_id
                );
                Ok(false)
            }
        }
    }
}

fn find_gallery(galleries: &[Gallery], gallery_id: GalleryId) -> RepoResult<&Gallery> {
    galleries
        .iter()
        .find(|gallery| gallery.id == gallery_id)
        .ok_or_else(|| RepoError::gallery_not_found(gallery_id))
}

fn find_gallery_mut(
    galleries: &mut [Gallery],
    gallery_id: GalleryId,
) -> RepoResult<&mut Gallery> {
    galleries
        .iter_mut()
        .find(|gallery| gallery.id == gallery_id)
        .ok_or_else(|| RepoError::gallery_not_found(gallery_id))
}

#[cfg(test)]
mod tests {
    use super::{JsonWorkRepository, WorkRepository};
    use crate::model::gallery::Gallery;
    use crate::model::work::Work;
    use crate::repo::gallery_repo::{GalleryRepository, JsonGalleryRepository};
    use crate::repo::{EntityKind, RepoError};
    use crate::store::{CancellationToken, DocumentStore};
    use std::sync::Arc;

    #[test]
    fn gallery_of_reports_owner() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(DocumentStore::open(dir.path().join("galleries.json")));
        let galleries = JsonGalleryRepository::new(Arc::clone(&store));
        let works = JsonWorkRepository::new(store);
        let cancel = CancellationToken::new();

        let gallery = galleries
            .create_gallery(Gallery::new("Gallery One", "Beja", "Baltazar Braz"), &cancel)
            .unwrap();
        let work = works
            .create_work(gallery.id, Work::new("obra 1", "artista 1", 1900, 1000.0), &cancel)
            .unwrap();

        assert_eq!(works.gallery_of(work.id, &cancel).unwrap(), Some(gallery.id));
        assert_eq!(works.gallery_of(uuid::Uuid::new_v4(), &cancel).unwrap(), None);
    }

    #[test]
    fn create_under_unknown_gallery_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(DocumentStore::open(dir.path().join("galleries.json")));
        let works = JsonWorkRepository::new(store);
        let missing = uuid::Uuid::new_v4();

        let err = works
            .create_work(
                missing,
                Work::new("obra 1", "artista 1", 1900, 1000.0),
                &CancellationToken::new(),
            )
            .unwrap_err();

        assert!(matches!(
            err,
            RepoError::NotFound { kind: EntityKind::Gallery, id } if id == missing
        ));
    }
}
