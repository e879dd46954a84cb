//! Layout error types for windowed sequences

/// Precondition violations detected during layout validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// Window length is zero
    ZeroWindow,
    /// Window byte length is not a multiple of the page size
    WindowNotPageAligned,
    /// Window byte length is not a multiple of the element size
    WindowNotElementAligned,
    /// Mapped region byte length is not a multiple of the element size
    RegionNotElementAligned,
    /// Offset padding is not a multiple of the element size
    OffsetNotElementAligned,
    /// Element type has zero size
    ZeroSizedElement,
    /// Region size calculation would overflow
    RegionSizeOverflow,
}

impl core::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            LayoutError::ZeroWindow => "window length is zero",
            LayoutError::WindowNotPageAligned => {
                "window byte length is not a multiple of the page size"
            }
            LayoutError::WindowNotElementAligned => {
                "window byte length is not a multiple of the element size"
            }
            LayoutError::RegionNotElementAligned => {
                "region byte length is not a multiple of the element size"
            }
            LayoutError::OffsetNotElementAligned => {
                "offset padding is not a multiple of the element size"
            }
            LayoutError::ZeroSizedElement => "element type has zero size",
            LayoutError::RegionSizeOverflow => "region size calculation would overflow",
        };
        write!(f, "{msg}")
    }
}

impl core::error::Error for LayoutError {}

/// Result type for layout validation
pub type Result<T> = core::result::Result<T, LayoutError>;
