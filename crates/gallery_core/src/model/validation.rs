use std::error::Error;
use std::fmt::{Display, Formatter};

/// Write-time validation failures for galleries, works and request payloads.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Request payload was absent.
    MissingPayload,
    /// `name` is empty after trim.
    BlankName,
    /// `ask_price` is below zero.
    NegativeAskPrice(f64),
    /// `ask_price` is NaN or infinite.
    NonFiniteAskPrice,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingPayload => write!(f, "request payload is missing"),
            Self::BlankName => write!(f, "name must not be blank"),
            Self::NegativeAskPrice(value) => {
                write!(f, "ask price must not be negative, got {value}")
            }
            Self::NonFiniteAskPrice => write!(f, "ask price must be a finite number"),
        }
    }
}

impl Error for ValidationError {}
