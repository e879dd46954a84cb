//! Window arithmetic for logical-position translation
//!
//! This module provides pure mathematical translation of a logical
//! element position into a window index and an intra-window offset,
//! plus the validation of the layout parameters. No I/O dependencies.
//!
//! The mapping primitive requires page-aligned file offsets, so a
//! sequence starting at an arbitrary byte offset is padded backwards to
//! the nearest page boundary. The padding, expressed in elements, is
//! the `lead` of the layout: logical position `p` lives at element
//! `p + lead` of the padded region.

use crate::error::LayoutError;

/// Splits logical element positions into window accesses.
///
/// All quantities are in element units; byte-level validation happens
/// once, in [`validate_window_len`] and [`validate_lead`], before a
/// layout is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowLayout {
    /// Elements per window.
    epw: usize,
    /// Leading padding elements before logical position 0.
    lead: usize,
}

impl WindowLayout {
    /// Build a layout from elements-per-window and leading padding.
    ///
    /// `lead` must be smaller than `epw`: the padding never exceeds one
    /// page, and a window holds at least one page.
    pub const fn new(epw: usize, lead: usize) -> Result<Self, LayoutError> {
        if epw == 0 {
            return Err(LayoutError::ZeroWindow);
        }
        if lead >= epw {
            return Err(LayoutError::OffsetNotElementAligned);
        }
        Ok(Self { epw, lead })
    }

    /// Window index and intra-window element offset of position `pos`.
    pub const fn locate(&self, pos: usize) -> (usize, usize) {
        let padded = pos + self.lead;
        (padded / self.epw, padded % self.epw)
    }

    /// Elements per window.
    pub const fn elements_per_window(&self) -> usize {
        self.epw
    }

    /// Leading padding elements before logical position 0.
    pub const fn lead(&self) -> usize {
        self.lead
    }
}

/// Window delta for a signed intra-window offset.
///
/// Given the offset of a target element relative to the start of the
/// current window, returns how many windows forward (positive) or
/// backward (negative) the target lies. This is floor division toward
/// negative infinity; plain `/` truncates toward zero and lands one
/// window too far right for negative offsets that are not exact
/// multiples of `epw`.
pub const fn window_delta(offset: isize, epw: usize) -> isize {
    let epw = epw as isize;
    if offset >= 0 {
        offset / epw
    } else {
        -((-offset - 1) / epw) - 1
    }
}

/// Intra-window element offset left after moving by [`window_delta`].
pub const fn rebase(offset: isize, delta: isize, epw: usize) -> usize {
    (offset - delta * epw as isize) as usize
}

/// Validate a window byte length against the page size and element size.
///
/// The length must be a positive multiple of the page size (required by
/// the mapping primitive; checked, never rounded) and a multiple of the
/// element size (so no element straddles a window boundary).
pub const fn validate_window_len(
    window_len: usize,
    page_size: usize,
    elem_size: usize,
) -> Result<(), LayoutError> {
    if elem_size == 0 {
        return Err(LayoutError::ZeroSizedElement);
    }
    if window_len == 0 {
        return Err(LayoutError::ZeroWindow);
    }
    if window_len % page_size != 0 {
        return Err(LayoutError::WindowNotPageAligned);
    }
    if window_len % elem_size != 0 {
        return Err(LayoutError::WindowNotElementAligned);
    }
    Ok(())
}

/// Validate a region byte length and convert it to an element count.
pub const fn validate_region(byte_len: usize, elem_size: usize) -> Result<usize, LayoutError> {
    if elem_size == 0 {
        return Err(LayoutError::ZeroSizedElement);
    }
    if byte_len % elem_size != 0 {
        return Err(LayoutError::RegionNotElementAligned);
    }
    let count = byte_len / elem_size;
    if count > isize::MAX as usize {
        return Err(LayoutError::RegionSizeOverflow);
    }
    Ok(count)
}

/// Validate the page-alignment padding and convert it to an element count.
pub const fn validate_lead(begin_delta: usize, elem_size: usize) -> Result<usize, LayoutError> {
    if elem_size == 0 {
        return Err(LayoutError::ZeroSizedElement);
    }
    if begin_delta % elem_size != 0 {
        return Err(LayoutError::OffsetNotElementAligned);
    }
    Ok(begin_delta / elem_size)
}
