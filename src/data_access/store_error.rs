use thiserror::Error;

/// Failures from the embedded store. Storage covers everything redb can
/// raise; Serialization covers the JSON encoding of records.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage error: {0}")]
    Storage(#[from] redb::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// redb 2.x has many error types. Blanket them all into StoreError::Storage.
macro_rules! from_redb {
    ($($t:ty),*) => {
        $(impl From<$t> for StoreError {
            fn from(e: $t) -> Self { StoreError::Storage(e.into()) }
        })*
    };
}

from_redb!(
    redb::DatabaseError,
    redb::TableError,
    redb::TransactionError,
    redb::StorageError,
    redb::CommitError
);
