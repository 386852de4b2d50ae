pub mod gallerydb;
pub mod memory;
pub mod propertydb;
pub mod userdb;
pub mod visitdb;

use thiserror::Error;

/// Failure surface of the document store. The store itself is an external
/// collaborator; these are the only signals its adapters may raise.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage conflict: {0}")]
    Conflict(String),
}
