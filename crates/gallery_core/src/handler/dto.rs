//! Request payloads and result projections exchanged with handler callers.

use crate::model::gallery::{Gallery, GalleryId};
use crate::model::work::{Work, WorkId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGalleryRequest {
    pub name: String,
    pub city: String,
    pub manager: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateGalleryRequest {
    pub id: GalleryId,
    pub name: String,
    pub city: String,
    pub manager: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateWorkRequest {
    pub name: String,
    pub author: String,
    pub creation_year: i32,
    pub ask_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateWorkRequest {
    pub id: WorkId,
    pub name: String,
    pub author: String,
    pub creation_year: i32,
    pub ask_price: f64,
}

/// Read projection of a gallery; works are summarized as a count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryResult {
    pub id: GalleryId,
    pub name: String,
    pub city: String,
    pub manager: String,
    pub works_on_display: usize,
}

/// Write projection returned by gallery create/update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveGalleryResult {
    pub id: GalleryId,
    pub name: String,
    pub city: String,
    pub manager: String,
}

/// Projection of one work, used by both reads and writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkResult {
    pub id: WorkId,
    pub name: String,
    pub author: String,
    pub creation_year: i32,
    pub ask_price: f64,
}

impl From<CreateGalleryRequest> for Gallery {
    fn from(value: CreateGalleryRequest) -> Self {
        Gallery::new(value.name, value.city, value.manager)
    }
}

impl From<UpdateGalleryRequest> for Gallery {
    fn from(value: UpdateGalleryRequest) -> Self {
        Gallery::with_id(value.id, value.name, value.city, value.manager)
    }
}

impl From<CreateWorkRequest> for Work {
    fn from(value: CreateWorkRequest) -> Self {
        Work::new(value.name, value.author, value.creation_year, value.ask_price)
    }
}

impl From<UpdateWorkRequest> for Work {
    fn from(value: UpdateWorkRequest) -> Self {
        Work::with_id(
            value.id,
            value.name,
            value.author,
            value.creation_year,
            value.ask_price,
        )
    }
}

impl From<&Gallery> for GalleryResult {
    fn from(value: &Gallery) -> Self {
        Self {
            id: value.id,
            name: value.name.clone(),
            city: value.city.clone(),
            manager: value.manager.clone(),
            works_on_display: value.works.len(),
        }
    }
}

impl From<Gallery> for SaveGalleryResult {
    fn from(value: Gallery) -> Self {
        Self {
            id: value.id,
            name: value.name,
            city: value.city,
            manager: value.manager,
        }
    }
}

impl From<Work> for WorkResult {
    fn from(value: Work) -> Self {
        Self {
            id: value.id,
            name: value.name,
            author: value.author,
            creation_year: value.creation_year,
            ask_price: value.ask_price,
        }
    }
}
