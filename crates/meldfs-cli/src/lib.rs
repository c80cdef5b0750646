//! meldfs command-line front end.
//!
//! Initializes a filesystem handle for the given mountpoint, reports
//! the assembled disk set and effective settings, and tears the handle
//! down. The serving loop that mounts the aggregate belongs to the
//! filesystem core; this front end answers "what would this host
//! mount, configured how?".

use anyhow::{bail, Result};
use meldfs_core::{DiskFlags, Meldfs};

/// Run one assemble/report/shutdown cycle for the mountpoint named in
/// `args`.
pub fn run(args: impl IntoIterator<Item = String>) -> Result<()> {
    let mut args = args.into_iter();
    let Some(mountpoint) = args.next() else {
        bail!("usage: meldfs <mountpoint>");
    };
    if args.next().is_some() {
        bail!("usage: meldfs <mountpoint>");
    }

    let fs = Meldfs::init(mountpoint)?;
    tracing::debug!("assembled {} disk(s) for {}", fs.disk_count(), fs.mountpoint());
    print!("{}", render(&fs));
    fs.shutdown();
    Ok(())
}

/// Render the assembled disk set and effective settings.
fn render(fs: &Meldfs) -> String {
    let mut out = format!(
        "aggregate at {}: {} disk(s)\n",
        fs.mountpoint(),
        fs.disk_count()
    );

    for disk in fs.disks() {
        if disk.flags.contains(DiskFlags::NO_SHARED_WRITES) {
            out.push_str(&format!("  {} (no shared writes)\n", disk.mountpoint));
        } else {
            out.push_str(&format!("  {}\n", disk.mountpoint));
        }
    }

    match fs.config().disk_cache_timeout {
        0 => out.push_str("disk cache timeout: default\n"),
        t => out.push_str(&format!("disk cache timeout: {t}\n")),
    }

    out
}
