use thiserror::Error;

/// Application-level errors. The invalid-language path fires before any
/// core component is constructed.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("unsupported language '{0}': choose `en` or `ru`")]
    InvalidLanguage(String),

    #[error("{0}")]
    Core(#[from] lexfreq::error::Error),
}
