//! Work commands and queries.

use crate::handler::dto::{CreateWorkRequest, UpdateWorkRequest, WorkResult};
use crate::handler::{absorb_expected, Handle, HandlerResult};
use crate::model::gallery::GalleryId;
use crate::model::validation::ValidationError;
use crate::model::work::{Work, WorkId};
use crate::repo::work_repo::WorkRepository;
use crate::store::CancellationToken;

#[derive(Debug, Clone, Copy)]
pub struct GetGalleryWorksQuery {
    pub gallery_id: GalleryId,
}

#[derive(Debug, Clone, Copy)]
pub struct GetWorkByIdQuery {
    pub work_id: WorkId,
}

#[derive(Debug, Clone, Copy)]
pub struct GetWorkOwnerQuery {
    pub work_id: WorkId,
}

#[derive(Debug, Clone)]
pub struct CreateWorkCommand {
    pub gallery_id: GalleryId,
    pub request: Option<CreateWorkRequest>,
}

/// Edits a work in place; `gallery_id` must be the work's current owner.
#[derive(Debug, Clone)]
pub struct UpdateWorkCommand {
    pub gallery_id: GalleryId,
    pub request: Option<UpdateWorkRequest>,
}

#[derive(Debug, Clone, Copy)]
pub struct DeleteWorkCommand {
    pub work_id: WorkId,
}

/// Handler set for work operations.
pub struct WorkHandlers<R: WorkRepository> {
    repo: R,
}

impl<R: WorkRepository> WorkHandlers<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

impl<R: WorkRepository> Handle<GetGalleryWorksQuery> for WorkHandlers<R> {
    /// `None` when the gallery does not exist.
    type Output = Option<Vec<WorkResult>>;

    fn handle(
        &self,
        request: GetGalleryWorksQuery,
        cancel: &CancellationToken,
    ) -> HandlerResult<Self::Output> {
        let works = absorb_expected(self.repo.list_works(request.gallery_id, cancel))?;
        Ok(works.map(|works| works.into_iter().map(WorkResult::from).collect()))
    }
}

impl<R: WorkRepository> Handle<GetWorkByIdQuery> for WorkHandlers<R> {
    type Output = Option<WorkResult>;

    fn handle(
        &self,
        request: GetWorkByIdQuery,
        cancel: &CancellationToken,
    ) -> HandlerResult<Self::Output> {
        let found = absorb_expected(self.repo.get_work(request.work_id, cancel))?;
        Ok(found.flatten().map(WorkResult::from))
    }
}

impl<R: WorkRepository> Handle<GetWorkOwnerQuery> for WorkHandlers<R> {
    type Output = Option<GalleryId>;

    fn handle(
        &self,
        request: GetWorkOwnerQuery,
        cancel: &CancellationToken,
    ) -> HandlerResult<Self::Output> {
        let owner = absorb_expected(self.repo.gallery_of(request.work_id, cancel))?;
        Ok(owner.flatten())
    }
}

impl<R: WorkRepository> Handle<CreateWorkCommand> for WorkHandlers<R> {
    type Output = Option<WorkResult>;

    fn handle(
        &self,
        command: CreateWorkCommand,
        cancel: &CancellationToken,
    ) -> HandlerResult<Self::Output> {
        let Some(request) = command.request else {
            return absorb_expected(Err(ValidationError::MissingPayload.into()));
        };

        let created =
            absorb_expected(self.repo.create_work(command.gallery_id, Work::from(request), cancel))?;
        Ok(created.map(WorkResult::from))
    }
}

impl<R: WorkRepository> Handle<UpdateWorkCommand> for WorkHandlers<R> {
    type Output = Option<WorkResult>;

    fn handle(
        &self,
        command: UpdateWorkCommand,
        cancel: &CancellationToken,
    ) -> HandlerResult<Self::Output> {
        let Some(request) = command.request else {
            return absorb_expected(Err(ValidationError::MissingPayload.into()));
        };

        let edit = Work::from(request);
        let updated = absorb_expected(self.repo.update_work(command.gallery_id, &edit, cancel))?;
        Ok(updated.map(WorkResult::from))
    }
}

impl<R: WorkRepository> Handle<DeleteWorkCommand> for WorkHandlers<R> {
    type Output = bool;

    fn handle(
        &self,
        command: DeleteWorkCommand,
        cancel: &CancellationToken,
    ) -> HandlerResult<Self::Output> {
        let deleted = absorb_expected(self.repo.delete_work(command.work_id, cancel))?;
        Ok(deleted.unwrap_or(false))
    }
}
