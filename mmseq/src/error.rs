//! Error types for sequence construction and access

use std::io;
use std::path::PathBuf;

use mmseq_core::LayoutError;

/// Errors from opening, mapping, or accessing a windowed sequence.
///
/// Open, stat, and map failures are terminal for the call that raised
/// them; no operation retries. Unmap failures cannot be observed: the
/// mapping primitive releases windows on drop and teardown is
/// best-effort.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The backing file could not be opened for the requested mode.
    #[error("failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The backing file's size could not be queried.
    #[error("failed to stat {path:?}: {source}")]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The mapping primitive failed for a window.
    #[error("failed to map window {window} ({len} bytes at file offset {offset}): {source}")]
    Map {
        window: usize,
        offset: u64,
        len: usize,
        #[source]
        source: io::Error,
    },

    /// A checked accessor was called with a position past the end.
    #[error("position {pos} out of range for sequence of length {len}")]
    OutOfRange { pos: usize, len: usize },

    /// Layout parameters violated a construction precondition.
    #[error("invalid layout: {0}")]
    Layout(#[from] LayoutError),

    /// A write was attempted through a read-only sequence.
    #[error("sequence was opened read-only")]
    ReadOnly,

    /// The sequence holds no open file (default-constructed or closed).
    #[error("sequence is not open")]
    Closed,
}

/// Result type for sequence operations
pub type Result<T> = std::result::Result<T, Error>;
