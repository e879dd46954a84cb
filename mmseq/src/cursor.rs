//! Random-access cursor contract shared by both iterator designs
//!
//! Both iterator types move over a sequence by logical position and
//! differ only in how they hold mapped windows. The shared capability
//! set (position, seek, dereference, distance) is expressed as a trait
//! so code can be generic over the window-lifetime strategy.

use crate::error::Result;

/// Random-access movement and dereference over a windowed sequence.
///
/// Two cursors over the same sequence compare by logical position;
/// comparing cursors from different sequences is a precondition
/// violation (asserted in debug builds). Identity is established
/// through the shared sequence state, never through backing addresses,
/// which change whenever a window is remapped.
pub trait SeqCursor<T> {
    /// Logical element position of the cursor, in `[0, len]`.
    fn position(&self) -> usize;

    /// Length of the underlying sequence.
    fn seq_len(&self) -> usize;

    /// Move by `n` elements; negative `n` moves backward.
    ///
    /// Fails if the target position leaves `[0, len]`. Moving within
    /// the current window never touches the mapping.
    fn try_advance(&mut self, n: isize) -> Result<()>;

    /// Read the element under the cursor.
    ///
    /// Fails when the cursor sits at the end position or when the
    /// window cannot be mapped.
    fn value(&mut self) -> Result<T>;

    /// Move to an absolute logical position in `[0, len]`.
    fn seek(&mut self, pos: usize) -> Result<()> {
        let delta = pos as isize - self.position() as isize;
        self.try_advance(delta)
    }

    /// Signed element distance from `other` to `self`.
    fn distance(&self, other: &Self) -> isize
    where
        Self: Sized,
    {
        self.position() as isize - other.position() as isize
    }
}
