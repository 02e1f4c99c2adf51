//! Gallery domain model.
//!
//! # Responsibility
//! - Define the top-level record of the persisted document.
//! - Own the ordered list of works on display.
//!
//! # Invariants
//! - `id` is unique across the document and never changes once assigned.
//! - A missing or `null` works list on disk loads as an empty list.

use crate::model::validation::ValidationError;
use crate::model::work::{Work, WorkId};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Stable identifier for a gallery.
pub type GalleryId = Uuid;

/// One gallery and the works it displays.
///
/// Field names on disk follow the PascalCase layout of existing documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Gallery {
    pub id: GalleryId,
    pub name: String,
    pub city: String,
    pub manager: String,
    /// Works in display order.
    #[serde(
        rename = "ArtWorksOnDisplay",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub works: Vec<Work>,
}

impl Gallery {
    /// Creates a gallery with a generated ID and no works.
    pub fn new(
        name: impl Into<String>,
        city: impl Into<String>,
        manager: impl Into<String>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), name, city, manager)
    }

    /// Creates a gallery with a caller-provided ID.
    ///
    /// Used by update paths where the ID addresses an existing record.
    pub fn with_id(
        id: GalleryId,
        name: impl Into<String>,
        city: impl Into<String>,
        manager: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            city: city.into(),
            manager: manager.into(),
            works: Vec::new(),
        }
    }

    /// Overwrites the descriptive fields, leaving `id` and `works` untouched.
    pub fn apply_details(&mut self, source: &Gallery) {
        self.name.clone_from(&source.name);
        self.city.clone_from(&source.city);
        self.manager.clone_from(&source.manager);
    }

    /// Checks write-time invariants.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::BlankName);
        }
        Ok(())
    }

    pub fn find_work(&self, work_id: WorkId) -> Option<&Work> {
        self.works.iter().find(|work| work.id == work_id)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Work>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<Work>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::Gallery;
    use crate::model::validation::ValidationError;
    use crate::model::work::Work;

    #[test]
    fn apply_details_keeps_identity_and_works() {
        let mut gallery = Gallery::new("Gallery One", "Beja", "Baltazar Braz");
        gallery.works.push(Work::new("obra 1", "artista 1", 1900, 1000.0));
        let original_id = gallery.id;

        let edit = Gallery::new("Renamed", "Porto", "Someone Else");
        gallery.apply_details(&edit);

        assert_eq!(gallery.id, original_id);
        assert_eq!(gallery.name, "Renamed");
        assert_eq!(gallery.city, "Porto");
        assert_eq!(gallery.manager, "Someone Else");
        assert_eq!(gallery.works.len(), 1);
    }

    #[test]
    fn blank_name_is_rejected() {
        let gallery = Gallery::new("   ", "Beja", "Baltazar Braz");
        assert_eq!(gallery.validate(), Err(ValidationError::BlankName));
    }

    #[test]
    fn null_and_missing_works_deserialize_as_empty() {
        let id = uuid::Uuid::new_v4();
        let with_null = format!(
            r#"{{"Id":"{id}","Name":"A","City":"B","Manager":"C","ArtWorksOnDisplay":null}}"#
        );
        let without_field = format!(r#"{{"Id":"{id}","Name":"A","City":"B","Manager":"C"}}"#);

        let from_null: Gallery = serde_json::from_str(&with_null).unwrap();
        let from_missing: Gallery = serde_json::from_str(&without_field).unwrap();

        assert!(from_null.works.is_empty());
        assert_eq!(from_null, from_missing);
    }

    #[test]
    fn serializes_works_as_array() {
        let gallery = Gallery::new("A", "B", "C");
        let value = serde_json::to_value(&gallery).unwrap();
        assert_eq!(value["ArtWorksOnDisplay"], serde_json::json!([]));
        assert_eq!(value["Manager"], "C");
    }
}
