//! A small, hand-rolled error taxonomy.
//!
//! Almost every failure mode in this crate is silent (`Option`)
//! or fatal-and-uncaught (out of memory). The one place a `Result` earns
//! its keep is the debug-mode iterator staleness check.
use std::fmt;

/// Errors this crate can report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A [`crate::RopeIter`] was advanced after the rope it was created
    /// from had been mutated. Only detected when debug assertions are
    /// enabled; see `Rope::iter`.
    Stale(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Stale(msg) => write!(f, "stale rope iterator: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

/// Result alias used by the handful of fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;
