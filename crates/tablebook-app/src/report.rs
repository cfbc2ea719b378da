//! What the user is told after a query.

use std::fmt;

use tablebook_service::Venue;
use tablebook_service::error::{ServiceError, ServiceResult};

use crate::error::AppResult;

/// The three distinguishable results of a booking query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Available(Vec<String>),
    NoAvailability,
    InvalidInput(String),
}

impl Outcome {
    /// Folds a query result into an outcome. Invalid input becomes an
    /// outcome; any other error is passed through.
    ///
    /// ## Errors
    /// Returns the service error if it is not an input error.
    pub fn from_query(result: ServiceResult<Vec<&Venue>>) -> AppResult<Self> {
        match result {
            Ok(venues) if venues.is_empty() => Ok(Self::NoAvailability),
            Ok(venues) => Ok(Self::Available(
                venues.iter().map(|venue| venue.name().to_string()).collect(),
            )),
            Err(ServiceError::InvalidInput(reason)) => Ok(Self::InvalidInput(reason)),
            Err(other) => Err(other.into()),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available(names) => write!(f, "Available venues: {}", names.join(", ")),
            Self::NoAvailability => write!(f, "No available venue for booking"),
            Self::InvalidInput(reason) => write!(f, "Invalid input: {reason}"),
        }
    }
}
