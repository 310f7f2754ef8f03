//! Error types
//!
//! Failures that must reach the caller (engine faults during rasterization,
//! I/O while persisting writer output) are `Error`. Absence cases - open
//! failure, out-of-range page access, a blank slot in the page list - are
//! `Option`, never `Err`.

/// Errors surfaced by rendering and writing operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The platform PDF engine rejected an operation.
    #[error("PDF engine: {detail}")]
    Engine { detail: String },

    /// I/O failure while persisting generated PDF data.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn engine(msg: impl Into<String>) -> Self {
        Self::Engine { detail: msg.into() }
    }
}

#[cfg(feature = "mupdf")]
impl From<mupdf::error::Error> for Error {
    fn from(err: mupdf::error::Error) -> Self {
        Self::Engine {
            detail: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
