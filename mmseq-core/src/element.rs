//! Element type constraints for windowed sequences
//!
//! Sequence elements are fixed-width plain-old-data values. Access
//! paths read them with `bytemuck::pod_read_unaligned` and write them
//! with `bytemuck::bytes_of`, so no pointer-alignment requirement is
//! imposed on the mapped region.

use bytemuck::Pod;

/// Types that can be exposed as sequence elements.
pub trait Element: Pod {}

impl<T: Pod> Element for T {}
