use facultad_store::{classify, Constraint, StoreError};
use thiserror::Error;

/// Result type for census and registry operations.
pub type ElectoralResult<T> = Result<T, ElectoralError>;

/// Failures surfaced by the census registrar and the electoral registry.
///
/// Council seats reject unregistered persons through an explicit census
/// lookup ([`ElectoralError::EligibilityViolation`]), while dean and rector
/// leave the faculty requirement to the store's foreign key and therefore
/// fail with [`ElectoralError::ReferentialViolation`]. Both mean "ineligible
/// person"; the channels are kept apart so callers relying on either keep
/// working.
#[derive(Debug, Error)]
pub enum ElectoralError {
    /// A unique key (person, grouping-period, office holder, vote) already exists.
    #[error("duplicate identity: {0}")]
    DuplicateIdentity(String),

    /// A referenced grouping, period or office holder does not exist, or a
    /// dean/rector candidate has no faculty record.
    #[error("referential violation: {0}")]
    ReferentialViolation(String),

    /// A precondition checked before touching the store failed.
    #[error("eligibility violation: {0}")]
    EligibilityViolation(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("store error: {0}")]
    Store(String),
}

impl ElectoralError {
    /// Map a failed insert of `subject` onto the domain error kinds.
    pub(crate) fn insert_failed(err: sqlx::Error, subject: impl std::fmt::Display) -> Self {
        match classify(&err) {
            Some(Constraint::Unique) => {
                ElectoralError::DuplicateIdentity(format!("{subject} already exists"))
            }
            Some(Constraint::ForeignKey) => {
                ElectoralError::ReferentialViolation(format!("{subject} references a missing row"))
            }
            Some(Constraint::Check) | Some(Constraint::NotNull) => {
                ElectoralError::InvalidInput(format!("{subject}: {err}"))
            }
            None => ElectoralError::Store(err.to_string()),
        }
    }
}

impl From<StoreError> for ElectoralError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Constraint {
                constraint: Constraint::Unique,
                message,
            } => ElectoralError::DuplicateIdentity(message),
            StoreError::Constraint {
                constraint: Constraint::ForeignKey,
                message,
            } => ElectoralError::ReferentialViolation(message),
            StoreError::Constraint { message, .. } => ElectoralError::InvalidInput(message),
            other => ElectoralError::Store(other.to_string()),
        }
    }
}

impl From<sqlx::Error> for ElectoralError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::from(err).into()
    }
}
