//! Disk records and per-disk flags.

use bitflags::bitflags;

bitflags! {
    /// Per-disk behavior flags, passed to the registry as a single word.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct DiskFlags: u32 {
        /// Concurrent writers across the namespace must not share this
        /// disk. Enforced by the filesystem core, recorded here.
        const NO_SHARED_WRITES = 1 << 0;
    }
}

/// One backend storage location contributing its contents to the merged
/// namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disk {
    /// Where the backend lives on the host filesystem.
    pub mountpoint: String,
    /// Behavior flags recorded at registration.
    pub flags: DiskFlags,
}

impl Disk {
    /// Create a disk record with no flags set.
    pub fn new(mountpoint: impl Into<String>) -> Self {
        Self {
            mountpoint: mountpoint.into(),
            flags: DiskFlags::empty(),
        }
    }
}
