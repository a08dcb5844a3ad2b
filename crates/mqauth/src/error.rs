use thiserror::Error;

/// Errors surfaced by credential encoding and store operations.
#[derive(Debug, Error)]
pub enum AuthDbError {
    /// A uniqueness invariant was violated. Both `account.username` and
    /// `acl.username` carry unique indexes, so re-adding either kind of row
    /// for an existing username lands here.
    #[error("{entity} for '{key}' already exists")]
    Duplicate { entity: &'static str, key: String },

    /// Underlying database failure.
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// Credential encoding failed, e.g. the operating-system RNG was
    /// unavailable. Nothing is persisted when this happens.
    #[error("credential encoding failed: {0}")]
    Credential(String),
}

pub type Result<T> = std::result::Result<T, AuthDbError>;
