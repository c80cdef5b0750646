//! The filesystem handle and its lifecycle.
//!
//! `Meldfs` is the long-lived object representing one mounted aggregate:
//! a mountpoint, a block of global settings, and the set of registered
//! disks. [`Meldfs::init`] builds it from the on-disk configuration;
//! everything after that — path resolution, entry merging, file I/O —
//! belongs to the filesystem core consuming the handle.

use anyhow::Result;

use crate::config;
use crate::disk::{Disk, DiskFlags};

/// Global tunables applied from the `[global]` config section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FsConfig {
    /// How long cached disk metadata stays valid. Zero means the
    /// filesystem core's built-in default.
    pub disk_cache_timeout: u32,
}

/// The filesystem handle: one mounted aggregate namespace.
///
/// Created once at startup, mutated only during initialization, then
/// handed to the filesystem core. A handle with zero disks is valid.
#[derive(Debug)]
pub struct Meldfs {
    mountpoint: String,
    config: FsConfig,
    disks: Vec<Disk>,
}

impl Meldfs {
    /// Create a bare handle with no disks and default settings.
    pub fn new(mountpoint: impl Into<String>) -> Self {
        Self {
            mountpoint: mountpoint.into(),
            config: FsConfig::default(),
            disks: Vec::new(),
        }
    }

    /// Initialize a handle for `mountpoint`, assembling its disk set
    /// from the default config locations.
    ///
    /// Never fails on configuration problems: missing or malformed
    /// config degrades to fewer disks and settings, down to a handle
    /// with zero disks.
    pub fn init(mountpoint: impl Into<String>) -> Result<Self> {
        let mut fs = Self::new(mountpoint);
        config::load_disk_set(&mut fs, config::DEFAULT_CONFIG_LOCATIONS);
        Ok(fs)
    }

    /// Register one disk with the aggregate.
    ///
    /// The mountpoint is copied; the caller keeps its own string. An
    /// entry with an empty mountpoint is rejected here — config sessions
    /// hand every closing section through and this call is the policy
    /// point.
    pub fn add_disk(&mut self, mountpoint: &str, flags: DiskFlags) {
        if mountpoint.is_empty() {
            tracing::debug!("dropping disk entry with empty mountpoint");
            return;
        }
        tracing::debug!("registering disk {} ({:?})", mountpoint, flags);
        self.disks.push(Disk {
            mountpoint: mountpoint.to_string(),
            flags,
        });
    }

    /// The aggregate's mountpoint.
    pub fn mountpoint(&self) -> &str {
        &self.mountpoint
    }

    /// Global settings in effect.
    pub fn config(&self) -> &FsConfig {
        &self.config
    }

    /// Mutable access to global settings, for the config session.
    pub fn config_mut(&mut self) -> &mut FsConfig {
        &mut self.config
    }

    /// Registered disks, in registration order.
    pub fn disks(&self) -> &[Disk] {
        &self.disks
    }

    /// Number of registered disks.
    pub fn disk_count(&self) -> usize {
        self.disks.len()
    }

    /// Tear the handle down, releasing the disk set.
    ///
    /// Consumes the handle, so a second shutdown is a compile error
    /// rather than a runtime hazard.
    pub fn shutdown(self) {
        tracing::debug!("shutting down aggregate at {}", self.mountpoint);
    }
}
