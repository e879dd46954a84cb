//! Construction options for sequence views

use mmseq_core::Mode;

/// Options controlling how a view binds to its backing file.
///
/// `offset` is a byte offset into the file and does not need to be
/// page-aligned; the view computes the alignment padding internally.
/// When `len` is absent the element count is inferred from the
/// remaining file size past `offset`.
#[derive(Debug, Clone, Default)]
pub struct OpenOptions {
    /// Access and sharing mode for every mapping of the view.
    pub mode: Mode,
    /// Starting byte offset into the backing file.
    pub offset: u64,
    /// Element count to expose; `None` means "rest of the file".
    pub len: Option<usize>,
}

impl OpenOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the access mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the starting byte offset.
    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    /// Set an explicit element count.
    pub fn with_len(mut self, len: usize) -> Self {
        self.len = Some(len);
        self
    }
}
