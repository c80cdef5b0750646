//! meldfs-core: the heart of meldfs.
//!
//! This crate provides:
//!
//! - **Handle**: the [`Meldfs`] aggregate with its disk set and settings
//! - **Assembly**: the startup config search over candidate paths
//! - **Formats**: structured sections and the legacy mountpoint list
//!
//! The union namespace itself — path resolution, directory-entry
//! merging, caching, file I/O — lives in the filesystem core that
//! consumes the handle built here.

pub mod config;
pub mod disk;
pub mod fs;

pub use disk::{Disk, DiskFlags};
pub use fs::{FsConfig, Meldfs};
