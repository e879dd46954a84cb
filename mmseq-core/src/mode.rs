//! Access modes for mapped sequences
//!
//! A mode is chosen once per sequence and fixes the protection and
//! sharing of every window mapping created for it.

/// Access and sharing policy for all mappings of a sequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Read-only access.
    #[default]
    ReadOnly,
    /// Read/write access; writes stay private to the mapping
    /// (copy-on-write) and are never carried through to the file.
    /// A modified window loses its changes when it is remapped.
    ReadWritePrivate,
    /// Read/write access; writes are carried through to the file.
    ReadWriteShared,
}

impl Mode {
    /// Whether windows mapped under this mode accept writes.
    pub const fn is_writable(self) -> bool {
        match self {
            Mode::ReadOnly => false,
            Mode::ReadWritePrivate | Mode::ReadWriteShared => true,
        }
    }
}
