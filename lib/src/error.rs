use std::io;

use thiserror::Error;

/// Core error type. Lemmatization misses are not represented here; they
/// are absorbed by the lemmatizer's fallback and never surface.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("document '{id}' not found")]
    DocumentNotFound { id: String },

    #[error("document '{id}' could not be read: {kind}")]
    DocumentRead { id: String, kind: io::ErrorKind },
}
