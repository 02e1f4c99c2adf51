//! Gallery commands and queries.

use crate::handler::dto::{
    CreateGalleryRequest, GalleryResult, SaveGalleryResult, UpdateGalleryRequest,
};
use crate::handler::{absorb_expected, Handle, HandlerResult};
use crate::model::gallery::{Gallery, GalleryId};
use crate::model::validation::ValidationError;
use crate::repo::gallery_repo::GalleryRepository;
use crate::store::CancellationToken;

#[derive(Debug, Clone, Copy, Default)]
pub struct GetAllGalleriesQuery;

#[derive(Debug, Clone, Copy)]
pub struct GetGalleryByIdQuery {
    pub gallery_id: GalleryId,
}

#[derive(Debug, Clone)]
pub struct CreateGalleryCommand {
    pub request: Option<CreateGalleryRequest>,
}

#[derive(Debug, Clone)]
pub struct UpdateGalleryCommand {
    pub request: Option<UpdateGalleryRequest>,
}

#[derive(Debug, Clone, Copy)]
pub struct DeleteGalleryCommand {
    pub gallery_id: GalleryId,
}

/// Handler set for gallery operations.
pub struct GalleryHandlers<R: GalleryRepository> {
    repo: R,
}

impl<R: GalleryRepository> GalleryHandlers<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

impl<R: GalleryRepository> Handle<GetAllGalleriesQuery> for GalleryHandlers<R> {
    type Output = Vec<GalleryResult>;

    fn handle(
        &self,
        _request: GetAllGalleriesQuery,
        cancel: &CancellationToken,
    ) -> HandlerResult<Self::Output> {
        let galleries = absorb_expected(self.repo.list_galleries(cancel))?.unwrap_or_default();
        Ok(galleries.iter().map(GalleryResult::from).collect())
    }
}

impl<R: GalleryRepository> Handle<GetGalleryByIdQuery> for GalleryHandlers<R> {
    type Output = Option<GalleryResult>;

    fn handle(
        &self,
        request: GetGalleryByIdQuery,
        cancel: &CancellationToken,
    ) -> HandlerResult<Self::Output> {
        let found = absorb_expected(self.repo.get_gallery(request.gallery_id, cancel))?;
        Ok(found.flatten().as_ref().map(GalleryResult::from))
    }
}

impl<R: GalleryRepository> Handle<CreateGalleryCommand> for GalleryHandlers<R> {
    type Output = Option<SaveGalleryResult>;

    fn handle(
        &self,
        command: CreateGalleryCommand,
        cancel: &CancellationToken,
    ) -> HandlerResult<Self::Output> {
        let Some(request) = command.request else {
            return absorb_expected(Err(ValidationError::MissingPayload.into()));
        };

        let created = absorb_expected(self.repo.create_gallery(Gallery::from(request), cancel))?;
        Ok(created.map(SaveGalleryResult::from))
    }
}

impl<R: GalleryRepository> Handle<UpdateGalleryCommand> for GalleryHandlers<R> {
    type Output = Option<SaveGalleryResult>;

    fn handle(
        &self,
        command: UpdateGalleryCommand,
        cancel: &CancellationToken,
    ) -> HandlerResult<Self::Output> {
        let Some(request) = command.request else {
            return absorb_expected(Err(ValidationError::MissingPayload.into()));
        };

        let edit = Gallery::from(request);
        let updated = absorb_expected(self.repo.update_gallery(&edit, cancel))?;
        Ok(updated.map(SaveGalleryResult::from))
    }
}

impl<R: GalleryRepository> Handle<DeleteGalleryCommand> for GalleryHandlers<R> {
    type Output = bool;

    fn handle(
        &self,
        command: DeleteGalleryCommand,
        cancel: &CancellationToken,
    ) -> HandlerResult<Self::Output> {
        let deleted = absorb_expected(self.repo.delete_gallery(command.gallery_id, cancel))?;
        Ok(deleted.unwrap_or(false))
    }
}
