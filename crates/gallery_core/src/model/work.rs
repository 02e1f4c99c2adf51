//! Art work domain model.
//!
//! # Invariants
//! - `id` is unique across every gallery in the document.
//! - `ask_price` is finite and non-negative.

use crate::model::validation::ValidationError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for an art work.
pub type WorkId = Uuid;

/// One art work on display in a gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Work {
    pub id: WorkId,
    pub name: String,
    pub author: String,
    pub creation_year: i32,
    pub ask_price: f64,
}

impl Work {
    /// Creates a work with a generated ID.
    pub fn new(
        name: impl Into<String>,
        author: impl Into<String>,
        creation_year: i32,
        ask_price: f64,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), name, author, creation_year, ask_price)
    }

    /// Creates a work with a caller-provided ID.
    pub fn with_id(
        id: WorkId,
        name: impl Into<String>,
        author: impl Into<String>,
        creation_year: i32,
        ask_price: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            author: author.into(),
            creation_year,
            ask_price,
        }
    }

    /// Overwrites the editable fields, leaving `id` untouched.
    pub fn apply_details(&mut self, source: &Work) {
        self.name.clone_from(&source.name);
        self.author.clone_from(&source.author);
        self.creation_year = source.creation_year;
        self.ask_price = source.ask_price;
    }

    /// Checks write-time invariants.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::BlankName);
        }
        if !self.ask_price.is_finite() {
            return Err(ValidationError::NonFiniteAskPrice);
        }
        if self.ask_price < 0.0 {
            return Err(ValidationError::NegativeAskPrice(self.ask_price));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Work;
    use crate::model::validation::ValidationError;

    #[test]
    fn validate_accepts_zero_price() {
        let work = Work::new("obra", "artista", 2001, 0.0);
        assert!(work.validate().is_ok());
    }

    #[test]
    fn validate_rejects_negative_and_nan_prices() {
        let negative = Work::new("obra", "artista", 2001, -1.0);
        assert_eq!(
            negative.validate(),
            Err(ValidationError::NegativeAskPrice(-1.0))
        );

        let nan = Work::new("obra", "artista", 2001, f64::NAN);
        assert_eq!(nan.validate(), Err(ValidationError::NonFiniteAskPrice));
    }

    #[test]
    fn wire_names_are_pascal_case() {
        let work = Work::new("obra 1", "artista 1", 1900, 1000.0);
        let value = serde_json::to_value(&work).unwrap();
        assert_eq!(value["CreationYear"], 1900);
        assert_eq!(value["AskPrice"], 1000.0);
        assert_eq!(value["Author"], "artista 1");
    }
}
