//! Single-slot window mapper over an open file
//!
//! A [`WindowMapper`] owns a file handle and at most one mapped window
//! at a time. Requesting the cached window returns without a syscall;
//! requesting any other window unmaps the previous one and maps the new
//! one in its place. This bounds resident memory to one window per
//! mapper, at the cost of thrashing when accesses interleave across two
//! or more windows through the same mapper.

use std::cell::RefCell;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use memmap2::{Mmap, MmapMut, MmapOptions};
use mmseq_core::Mode;

use crate::error::{Error, Result};

/// One mapped window, carrying the protection it was created with.
pub(crate) enum Window {
    ReadOnly(Mmap),
    Writable(MmapMut),
}

impl Window {
    pub(crate) fn bytes(&self) -> &[u8] {
        match self {
            Window::ReadOnly(map) => map,
            Window::Writable(map) => map,
        }
    }

    pub(crate) fn bytes_mut(&mut self) -> Option<&mut [u8]> {
        match self {
            Window::ReadOnly(_) => None,
            Window::Writable(map) => Some(map),
        }
    }
}

/// Cache slot: the mapper is either unmapped or holds exactly one
/// mapped window. `map_cached` is the only transition.
struct Slot {
    index: usize,
    window: Window,
}

pub(crate) struct WindowMapper {
    file: Option<File>,
    path: PathBuf,
    mode: Mode,
    /// Page-aligned byte offset of window 0 within the file.
    base_offset: u64,
    /// Window length in bytes.
    window_len: usize,
    /// Total mapped span in bytes starting at `base_offset`.
    span: usize,
    slot: RefCell<Option<Slot>>,
}

/// Open a file handle suitable for every later mapping under `mode`.
pub(crate) fn open_file(path: &Path, mode: Mode) -> Result<File> {
    let mut options = std::fs::OpenOptions::new();
    options.read(true);
    if mode.is_writable() {
        options.write(true);
    }
    options.open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Query the current length of an open file.
pub(crate) fn stat_len(file: &File, path: &Path) -> Result<u64> {
    file.metadata()
        .map(|meta| meta.len())
        .map_err(|source| Error::Stat {
            path: path.to_path_buf(),
            source,
        })
}

impl WindowMapper {
    /// A mapper with no file and no mapping; every map call fails.
    pub(crate) fn closed() -> Self {
        Self {
            file: None,
            path: PathBuf::new(),
            mode: Mode::default(),
            base_offset: 0,
            window_len: 0,
            span: 0,
            slot: RefCell::new(None),
        }
    }

    pub(crate) fn new(
        file: File,
        path: PathBuf,
        mode: Mode,
        base_offset: u64,
        window_len: usize,
        span: usize,
    ) -> Self {
        Self {
            file: Some(file),
            path,
            mode,
            base_offset,
            window_len,
            span,
            slot: RefCell::new(None),
        }
    }

    pub(crate) fn is_open(&self) -> bool {
        self.file.is_some()
    }

    pub(crate) fn mode(&self) -> Mode {
        self.mode
    }

    /// Window index currently held in the cache slot, if any.
    pub(crate) fn cached_index(&self) -> Option<usize> {
        self.slot.borrow().as_ref().map(|slot| slot.index)
    }

    /// Unmap the cached window and release the file handle. Idempotent.
    pub(crate) fn close(&mut self) {
        *self.slot.get_mut() = None;
        self.file = None;
        self.span = 0;
    }

    /// Create an independent mapping of `index`, bypassing the cache.
    ///
    /// Used by cursors that own their window privately; the cache slot
    /// is untouched.
    pub(crate) fn make_window(&self, index: usize) -> Result<Window> {
        let file = self.file.as_ref().ok_or(Error::Closed)?;

        let start = index
            .checked_mul(self.window_len)
            .filter(|start| *start < self.span)
            .ok_or_else(|| map_error(index, self.base_offset, 0, beyond_span()))?;
        // The final window may cover less than a full window length.
        let len = self.window_len.min(self.span - start);
        let offset = self.base_offset + start as u64;

        let mut options = MmapOptions::new();
        options.offset(offset).len(len);
        // SAFETY: the mapping is backed by the file handle owned by
        // this mapper, which stays open for the life of the returned
        // window; offset and len lie within the validated span.
        let window = unsafe {
            match self.mode {
                Mode::ReadOnly => options.map(file).map(Window::ReadOnly),
                Mode::ReadWriteShared => options.map_mut(file).map(Window::Writable),
                Mode::ReadWritePrivate => options.map_copy(file).map(Window::Writable),
            }
        }
        .map_err(|source| map_error(index, offset, len, source))?;

        Ok(window)
    }

    /// Ensure `index` is the cached window, remapping if it is not.
    pub(crate) fn map_cached(&self, index: usize) -> Result<()> {
        let mut slot = self.slot.borrow_mut();
        match &*slot {
            Some(cached) if cached.index == index => Ok(()),
            _ => {
                log::trace!("remapping cache slot to window {index}");
                let window = self.make_window(index)?;
                *slot = Some(Slot { index, window });
                Ok(())
            }
        }
    }

    /// Run `f` against the bytes of window `index`, going through the
    /// single-slot cache. The borrow of the slot never escapes `f`.
    pub(crate) fn with_window<R>(&self, index: usize, f: impl FnOnce(&[u8]) -> R) -> Result<R> {
        let mut slot = self.slot.borrow_mut();
        match &mut *slot {
            Some(cached) if cached.index == index => Ok(f(cached.window.bytes())),
            other => {
                log::trace!("remapping cache slot to window {index}");
                let cached = other.insert(Slot {
                    index,
                    window: self.make_window(index)?,
                });
                Ok(f(cached.window.bytes()))
            }
        }
    }

    /// Mutable counterpart of [`with_window`]; fails on read-only maps.
    pub(crate) fn with_window_mut<R>(
        &self,
        index: usize,
        f: impl FnOnce(&mut [u8]) -> R,
    ) -> Result<R> {
        let mut slot = self.slot.borrow_mut();
        let cached = match &mut *slot {
            Some(cached) if cached.index == index => cached,
            other => {
                log::trace!("remapping cache slot to window {index}");
                other.insert(Slot {
                    index,
                    window: self.make_window(index)?,
                })
            }
        };
        match cached.window.bytes_mut() {
            Some(bytes) => Ok(f(bytes)),
            None => Err(Error::ReadOnly),
        }
    }

    /// Re-open the backing file under the same mode and parameters.
    ///
    /// The fresh mapper shares nothing with this one; whichever window
    /// this mapper has cached is mapped again through the new handle.
    pub(crate) fn reopen(&self) -> Result<Self> {
        if !self.is_open() {
            return Ok(Self::closed());
        }
        let file = open_file(&self.path, self.mode)?;
        let mapper = Self::new(
            file,
            self.path.clone(),
            self.mode,
            self.base_offset,
            self.window_len,
            self.span,
        );
        if let Some(index) = self.cached_index() {
            mapper.map_cached(index)?;
        }
        Ok(mapper)
    }
}

fn map_error(window: usize, offset: u64, len: usize, source: io::Error) -> Error {
    Error::Map {
        window,
        offset,
        len,
        source,
    }
}

fn beyond_span() -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, "window lies beyond mapped span")
}
