//! OS page-size query

use std::sync::OnceLock;

/// Size of one memory page in bytes.
///
/// Mapping offsets handed to the kernel must be multiples of this.
pub fn page_size() -> usize {
    static PAGE_SIZE: OnceLock<usize> = OnceLock::new();
    *PAGE_SIZE.get_or_init(|| {
        // SAFETY: sysconf reads a system constant and has no
        // memory-safety preconditions.
        let size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
        if size > 0 {
            size as usize
        } else {
            4096
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_size_is_a_power_of_two() {
        let size = page_size();
        assert!(size >= 512);
        assert_eq!(size & (size - 1), 0);
    }
}
