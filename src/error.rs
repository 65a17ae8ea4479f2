//! Error types shared across the crate.

use thiserror::Error;

/// Errors surfaced by capacity sizing and deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A capacity computation left the representable `usize` range.
    #[error("arithmetic overflow while {0}")]
    Overflow(String),

    /// Every slot of the fixed-capacity deduplication set was probed and
    /// found occupied by a different string.
    #[error("deduplication set full: all {slots} slots occupied")]
    DedupSetFull {
        /// Total slot count of the set that filled up.
        slots: usize,
    },
}

impl Error {
    /// Creates an [`Error::Overflow`] naming the computation that overflowed.
    pub fn overflow<S: Into<String>>(what: S) -> Self {
        Error::Overflow(what.into())
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
