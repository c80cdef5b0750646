//! Startup configuration: locating and loading the disk set.
//!
//! Two on-disk formats compete for each candidate path: the structured
//! section format first, then the legacy mountpoint-per-line format when
//! the structured parse registered nothing. The first path to yield any
//! disk wins outright and the search stops; a search that yields none
//! leaves the handle with zero disks, which is valid.
//!
//! The loaders know nothing of each other. The only coupling is the
//! handle's disk count: zero after the structured attempt triggers the
//! legacy attempt, zero after both advances the search.

pub mod legacy;
pub mod scanner;
pub mod session;

use std::path::Path;

use crate::fs::Meldfs;
use session::ConfigSession;

/// Candidate config locations, tried in order. Earlier entries take
/// priority; the first to yield any disk wins.
pub const DEFAULT_CONFIG_LOCATIONS: &[&str] = &["/etc/meldfs.conf", "meldfs.conf"];

/// Try each candidate path in order until one yields at least one disk.
///
/// Mutates the handle's disk set and global settings as a side effect
/// of the sessions it runs. Missing or unreadable files count as zero
/// disks, not errors.
pub fn load_disk_set<P: AsRef<Path>>(fs: &mut Meldfs, candidates: &[P]) {
    for path in candidates {
        let path = path.as_ref();

        let mut session = ConfigSession::new(fs);
        if let Err(err) = scanner::read_config_file(path, &mut session) {
            tracing::debug!("no structured config at {}: {}", path.display(), err);
        }

        // Nothing registered: retry the same path as the legacy format.
        if fs.disk_count() == 0 {
            if let Err(err) = legacy::load_mountpoint_list(fs, path) {
                tracing::debug!("no legacy config at {}: {}", path.display(), err);
            }
        }

        if fs.disk_count() > 0 {
            tracing::info!("loaded {} disk(s) from {}", fs.disk_count(), path.display());
            break;
        }
    }
}
