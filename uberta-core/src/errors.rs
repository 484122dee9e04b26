use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ReferenceError {
    #[error("Unknown chromosome: {0}")]
    UnknownChromosome(String),

    #[error("No flank sizes defined for chromosome: {0}")]
    MissingFlank(String),
}

pub type ReferenceResult<T> = std::result::Result<T, ReferenceError>;

#[derive(Error, Debug, PartialEq)]
pub enum SetupError {
    #[error("Invalid value for `{field}`: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

pub type SetupResult<T> = std::result::Result<T, SetupError>;

impl SetupError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        SetupError::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}
