use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Class of integrity constraint a statement violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Primary key or unique index.
    Unique,
    /// Foreign key.
    ForeignKey,
    /// `CHECK` clause.
    Check,
    /// `NOT NULL` column.
    NotNull,
}

impl std::fmt::Display for Constraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Constraint::Unique => "unique",
            Constraint::ForeignKey => "foreign key",
            Constraint::Check => "check",
            Constraint::NotNull => "not null",
        };
        f.write_str(name)
    }
}

/// Store-layer errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("schema init failed: {0}")]
    Schema(String),

    #[error("{constraint} constraint violated: {message}")]
    Constraint {
        constraint: Constraint,
        message: String,
    },

    #[error("query error: {0}")]
    Query(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match classify(&err) {
            Some(constraint) => StoreError::Constraint {
                constraint,
                message: database_message(&err),
            },
            None => StoreError::Query(err.to_string()),
        }
    }
}

/// Classify a `sqlx` error as a constraint violation, if it is one.
///
/// SQLite reports extended result codes (`2067` unique, `1555` primary key,
/// `787` foreign key, `275` check, `1299` not null); the message prefix is
/// used when only the base `SQLITE_CONSTRAINT` code is available.
pub fn classify(err: &sqlx::Error) -> Option<Constraint> {
    let sqlx::Error::Database(db_err) = err else {
        return None;
    };

    match db_err.kind() {
        sqlx::error::ErrorKind::UniqueViolation => return Some(Constraint::Unique),
        sqlx::error::ErrorKind::ForeignKeyViolation => return Some(Constraint::ForeignKey),
        sqlx::error::ErrorKind::CheckViolation => return Some(Constraint::Check),
        sqlx::error::ErrorKind::NotNullViolation => return Some(Constraint::NotNull),
        _ => {}
    }

    match db_err.code().as_deref() {
        Some("2067") | Some("1555") => return Some(Constraint::Unique),
        Some("787") => return Some(Constraint::ForeignKey),
        Some("275") => return Some(Constraint::Check),
        Some("1299") => return Some(Constraint::NotNull),
        _ => {}
    }

    let message = db_err.message();
    if message.starts_with("UNIQUE constraint failed") {
        Some(Constraint::Unique)
    } else if message.starts_with("FOREIGN KEY constraint failed") {
        Some(Constraint::ForeignKey)
    } else if message.starts_with("CHECK constraint failed") {
        Some(Constraint::Check)
    } else if message.starts_with("NOT NULL constraint failed") {
        Some(Constraint::NotNull)
    } else {
        None
    }
}

fn database_message(err: &sqlx::Error) -> String {
    match err {
        sqlx::Error::Database(db_err) => db_err.message().to_string(),
        other => other.to_string(),
    }
}
