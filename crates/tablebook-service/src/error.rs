use thiserror::Error;

/// Service layer errors
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Failed to read dataset {origin}: {source}")]
    Load {
        origin: String,
        #[source]
        source: csv::Error,
    },

    #[error("Dataset line {line} ({venue}): {source}")]
    Row {
        line: u64,
        venue: String,
        #[source]
        source: tablebook_hours::ParseError,
    },

    #[error("Dataset line {line} has {fields} field(s), expected 2")]
    MalformedRow { line: u64, fields: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    CoreError(#[from] tablebook_core::error::CoreError),
}

impl ServiceError {
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
