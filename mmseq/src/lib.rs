//! mmseq - Windowed Memory-Mapped Sequence Containers
//!
//! This library exposes large files as random-access sequences of plain-data
//! elements without mapping the whole file at once. A file range is split
//! into fixed-size windows and at most one window per view (plus one per
//! deque iterator) is mapped at a time.
//!
//! ## Architecture
//!
//! mmseq follows a clean arithmetic/implementation separation:
//!
//! - **mmseq-core**: Pure window arithmetic, layout validation, and the
//!   element trait (`no_std`, no I/O)
//! - **mmseq**: Concrete views with file I/O and memory mapping
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mmseq::{ListView, SeqCursor};
//!
//! fn example() -> mmseq::Result<()> {
//!     // Expose the file as bytes through 4096-element windows
//!     let view: ListView<u8, 4096> = ListView::open("data.bin")?;
//!
//!     // Random access
//!     let first = view.at(0)?;
//!     println!("len {} first {first}", view.len());
//!
//!     // Cursor positioning
//!     let mut cursor = view.iter();
//!     cursor.try_advance(4097)?;
//!     let value = cursor.value()?;
//!     println!("value at 4097: {value}");
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Bounded residency**: At most one mapped window per view, whatever
//!   the file size
//! - **Two iterator disciplines**: [`ListView`] iterators share the view's
//!   window cache; [`DequeView`] iterators own a private mapping each
//! - **Plain-data elements**: Any [`Element`] (`bytemuck::Pod`) type,
//!   read without alignment assumptions
//! - **Write-through or copy-on-write**: Shared and private writable
//!   modes next to the read-only default

// Re-export the window arithmetic and element abstractions
pub use mmseq_core::{Element, LayoutError, Mode, WindowLayout};

// Implementation modules
pub mod cursor;
pub mod deque;
pub mod error;
pub mod list;

mod mapper;
mod options;
mod page;
mod seq;

// Public exports
pub use cursor::SeqCursor;
pub use deque::{DequeIter, DequeView};
pub use error::{Error, Result};
pub use list::{ListIter, ListView};
pub use options::OpenOptions;

/// Default elements-per-window for the views' `COUNT` parameter.
///
/// With one-byte elements this is a 4 MiB window, a multiple of the page
/// size on every supported platform.
pub const DEFAULT_WINDOW_COUNT: usize = 4 * 1024 * 1024;
