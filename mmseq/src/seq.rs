//! Base sequence: a logical element range over a windowed mapper
//!
//! [`Sequence`] owns the window mapper and the element-count metadata,
//! and provides the single read and write paths used by both view
//! types and their iterators.

use std::marker::PhantomData;
use std::mem::size_of;
use std::path::Path;

use mmseq_core::{layout, Element, Mode, WindowLayout};

use crate::error::{Error, Result};
use crate::mapper::{self, WindowMapper};
use crate::options::OpenOptions;
use crate::page::page_size;

pub(crate) struct Sequence<T> {
    mapper: WindowMapper,
    /// Logical element count exposed to callers.
    len: usize,
    layout: WindowLayout,
    marker: PhantomData<T>,
}

impl<T: Element> Sequence<T> {
    /// Bind a sequence to `path` with a window of `window_len` bytes.
    ///
    /// The mapper is opened at the largest page-aligned offset not past
    /// the requested one; the difference becomes the layout's leading
    /// padding so that logical position 0 still lands on the requested
    /// byte.
    pub(crate) fn open(path: &Path, window_len: usize, opts: &OpenOptions) -> Result<Self> {
        let elem_size = size_of::<T>();
        let page = page_size();
        layout::validate_window_len(window_len, page, elem_size)?;

        let begin_delta = (opts.offset % page as u64) as usize;
        let lead = layout::validate_lead(begin_delta, elem_size)?;

        let file = mapper::open_file(path, opts.mode)?;
        let len = match opts.len {
            Some(len) => len,
            None => {
                let file_len = mapper::stat_len(&file, path)?;
                let remaining = file_len.saturating_sub(opts.offset);
                layout::validate_region(remaining as usize, elem_size)?
            }
        };

        let span = len
            .checked_mul(elem_size)
            .and_then(|bytes| bytes.checked_add(begin_delta))
            .ok_or(mmseq_core::LayoutError::RegionSizeOverflow)?;
        let base_offset = opts.offset - begin_delta as u64;

        let mapper = WindowMapper::new(
            file,
            path.to_path_buf(),
            opts.mode,
            base_offset,
            window_len,
            span,
        );
        let layout = WindowLayout::new(window_len / elem_size, lead)?;

        Ok(Self {
            mapper,
            len,
            layout,
            marker: PhantomData,
        })
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn layout(&self) -> WindowLayout {
        self.layout
    }

    pub(crate) fn mapper(&self) -> &WindowMapper {
        &self.mapper
    }

    pub(crate) fn mode(&self) -> Mode {
        self.mapper.mode()
    }

    /// Unmap the cached window and release the file handle.
    pub(crate) fn close(&mut self) {
        self.mapper.close();
        self.len = 0;
    }

    pub(crate) fn check_range(&self, pos: usize) -> Result<()> {
        if pos >= self.len {
            return Err(Error::OutOfRange {
                pos,
                len: self.len,
            });
        }
        Ok(())
    }

    /// Read the element at logical position `pos`.
    ///
    /// The caller guarantees `pos < len`; the window split is computed
    /// here and the mapper is asked for the window (cache hit or
    /// remap).
    pub(crate) fn get(&self, pos: usize) -> Result<T> {
        debug_assert!(pos < self.len, "position {pos} out of range");
        let (window, intra) = self.layout.locate(pos);
        self.read_at(window, intra)
    }

    /// Read through a precomputed (window, intra-window) split.
    pub(crate) fn read_at(&self, window: usize, intra: usize) -> Result<T> {
        let elem_size = size_of::<T>();
        self.mapper.with_window(window, |bytes| {
            bytemuck::pod_read_unaligned(&bytes[intra * elem_size..][..elem_size])
        })
    }

    /// Write the element at logical position `pos` (writable modes).
    pub(crate) fn put(&mut self, pos: usize, value: T) -> Result<()> {
        self.check_range(pos)?;
        let (window, intra) = self.layout.locate(pos);
        let elem_size = size_of::<T>();
        self.mapper.with_window_mut(window, |bytes| {
            bytes[intra * elem_size..][..elem_size].copy_from_slice(bytemuck::bytes_of(&value));
        })
    }

    /// Independent re-open of the same file range.
    ///
    /// The clone holds a fresh file handle and its own cache slot,
    /// primed with whichever window this sequence had cached; nothing
    /// is shared beyond the immutable path/mode/size metadata.
    pub(crate) fn try_clone(&self) -> Result<Self> {
        Ok(Self {
            mapper: self.mapper.reopen()?,
            len: if self.mapper.is_open() { self.len } else { 0 },
            layout: self.layout,
            marker: PhantomData,
        })
    }
}

impl<T> Default for Sequence<T> {
    /// The empty sequence: no file, no mapping, length 0.
    fn default() -> Self {
        Self {
            mapper: WindowMapper::closed(),
            len: 0,
            layout: empty_layout(),
            marker: PhantomData,
        }
    }
}

fn empty_layout() -> WindowLayout {
    match WindowLayout::new(1, 0) {
        Ok(layout) => layout,
        // One element per window with no lead is always valid.
        Err(_) => unreachable!(),
    }
}
