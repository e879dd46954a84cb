//! List view: sequence access through the shared single-slot cache
//!
//! [`ListView`] exposes a file range as a random-access sequence whose
//! iterators all pull windows from the view's own mapper. Iterators are
//! cheap (no private mapping) but advancing several of them out of
//! lockstep across different windows thrashes the one cache slot; each
//! access still returns the correct element for its own position.

use std::fmt;
use std::mem::size_of;
use std::path::Path;

use mmseq_core::{layout, Element, Mode};

use crate::cursor::SeqCursor;
use crate::error::{Error, Result};
use crate::options::OpenOptions;
use crate::seq::Sequence;
use crate::DEFAULT_WINDOW_COUNT;

/// Random-access view of a file as `COUNT`-element windows, sharing one
/// mapped window among the view and all of its iterators.
pub struct ListView<T: Element, const COUNT: usize = DEFAULT_WINDOW_COUNT> {
    seq: Sequence<T>,
}

impl<T: Element, const COUNT: usize> ListView<T, COUNT> {
    /// Open `path` read-only, exposing the whole file from offset 0.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::with_options(path, OpenOptions::new())
    }

    /// Open `path` with explicit mode, offset, and length options.
    pub fn with_options(path: impl AsRef<Path>, opts: OpenOptions) -> Result<Self> {
        let window_len = COUNT
            .checked_mul(size_of::<T>())
            .ok_or(mmseq_core::LayoutError::RegionSizeOverflow)?;
        Ok(Self {
            seq: Sequence::open(path.as_ref(), window_len, &opts)?,
        })
    }

    /// Number of elements exposed by the view.
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.len() == 0
    }

    /// Access and sharing mode the view was opened with.
    pub fn mode(&self) -> Mode {
        self.seq.mode()
    }

    /// Unmap the cached window and drop the file handle; the view
    /// becomes empty. Idempotent.
    pub fn close(&mut self) {
        self.seq.close();
    }

    /// Range-checked element access.
    pub fn at(&self, pos: usize) -> Result<T> {
        self.seq.check_range(pos)?;
        self.seq.get(pos)
    }

    /// Unchecked-range element access; the caller guarantees
    /// `pos < len()` (asserted in debug builds).
    pub fn get(&self, pos: usize) -> Result<T> {
        self.seq.get(pos)
    }

    /// The last element.
    pub fn back(&self) -> Result<T> {
        let len = self.seq.len();
        if len == 0 {
            return Err(Error::OutOfRange { pos: 0, len: 0 });
        }
        self.seq.get(len - 1)
    }

    /// Range-checked element write; requires a writable mode.
    pub fn put(&mut self, pos: usize, value: T) -> Result<()> {
        self.seq.put(pos, value)
    }

    /// Independent view of the same file range: fresh handle, own
    /// cache slot, nothing shared with this view.
    pub fn try_clone(&self) -> Result<Self> {
        Ok(Self {
            seq: self.seq.try_clone()?,
        })
    }

    /// Exchange all owned state with `other`; no mapping syscalls.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Cursor at logical position 0.
    pub fn iter(&self) -> ListIter<'_, T> {
        ListIter::new(&self.seq, 0)
    }

    /// Cursor at logical position `pos`; `pos == len()` is the end.
    pub fn iter_at(&self, pos: usize) -> Result<ListIter<'_, T>> {
        if pos > self.seq.len() {
            return Err(Error::OutOfRange {
                pos,
                len: self.seq.len(),
            });
        }
        Ok(ListIter::new(&self.seq, pos))
    }
}

// Metadata only; window contents are not part of the debug surface.
impl<T: Element, const COUNT: usize> fmt::Debug for ListView<T, COUNT> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListView")
            .field("len", &self.len())
            .field("mode", &self.mode())
            .field("window", &COUNT)
            .finish_non_exhaustive()
    }
}

impl<T: Element, const COUNT: usize> Default for ListView<T, COUNT> {
    fn default() -> Self {
        Self {
            seq: Sequence::default(),
        }
    }
}

impl<'a, T: Element, const COUNT: usize> IntoIterator for &'a ListView<T, COUNT> {
    type Item = Result<T>;
    type IntoIter = ListIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Random-access iterator backed by the view's shared mapper.
///
/// Holds only its normalized position; every dereference goes through
/// the view's single-slot cache, so a window crossing (or another
/// iterator's interleaved access) costs one remap.
pub struct ListIter<'a, T: Element> {
    seq: &'a Sequence<T>,
    /// Logical element position, `[0, len]`.
    pos: usize,
    /// Window index; one-past-last only at the end position.
    window: usize,
    /// Intra-window element offset, `[0, elements_per_window)`.
    intra: usize,
}

impl<'a, T: Element> ListIter<'a, T> {
    pub(crate) fn new(seq: &'a Sequence<T>, pos: usize) -> Self {
        let (window, intra) = seq.layout().locate(pos);
        Self {
            seq,
            pos,
            window,
            intra,
        }
    }
}

impl<T: Element> SeqCursor<T> for ListIter<'_, T> {
    fn position(&self) -> usize {
        self.pos
    }

    fn seq_len(&self) -> usize {
        self.seq.len()
    }

    fn try_advance(&mut self, n: isize) -> Result<()> {
        let target = self.pos as isize + n;
        if target < 0 || target > self.seq.len() as isize {
            return Err(Error::OutOfRange {
                pos: target.max(0) as usize,
                len: self.seq.len(),
            });
        }

        let epw = self.seq.layout().elements_per_window();
        let offset = n + self.intra as isize;
        if offset >= 0 && offset < epw as isize {
            self.intra = offset as usize;
        } else {
            let delta = layout::window_delta(offset, epw);
            self.window = (self.window as isize + delta) as usize;
            self.intra = layout::rebase(offset, delta, epw);
        }
        self.pos = target as usize;
        Ok(())
    }

    fn value(&mut self) -> Result<T> {
        self.seq.check_range(self.pos)?;
        self.seq.read_at(self.window, self.intra)
    }
}

impl<T: Element> Iterator for ListIter<'_, T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.seq.len() {
            return None;
        }
        let item = self.seq.read_at(self.window, self.intra);
        self.pos += 1;
        self.intra += 1;
        if self.intra == self.seq.layout().elements_per_window() {
            self.window += 1;
            self.intra = 0;
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.seq.len().saturating_sub(self.pos);
        (remaining, Some(remaining))
    }
}

impl<T: Element> ExactSizeIterator for ListIter<'_, T> {}

impl<T: Element> Clone for ListIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            seq: self.seq,
            pos: self.pos,
            window: self.window,
            intra: self.intra,
        }
    }
}

impl<T: Element> PartialEq for ListIter<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        debug_assert!(
            std::ptr::eq(self.seq, other.seq),
            "comparing iterators from different sequences"
        );
        self.pos == other.pos && std::ptr::eq(self.seq, other.seq)
    }
}

impl<T: Element> Eq for ListIter<'_, T> {}

impl<T: Element> PartialOrd for ListIter<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        debug_assert!(
            std::ptr::eq(self.seq, other.seq),
            "comparing iterators from different sequences"
        );
        self.pos.partial_cmp(&other.pos)
    }
}
