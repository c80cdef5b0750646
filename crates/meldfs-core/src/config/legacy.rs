//! Legacy config fallback: one bare mountpoint per line.
//!
//! The oldest config format has no sections or options, just mountpoints
//! separated by newlines. It is only consulted when the structured parse
//! of the same path registered nothing.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::disk::DiskFlags;
use crate::fs::Meldfs;

/// Read `path` as a newline-delimited mountpoint list, registering
/// every line verbatim with no flags. Blank lines are handed through
/// like any other; registration drops them.
pub fn load_mountpoint_list(fs: &mut Meldfs, path: &Path) -> io::Result<()> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    for line in reader.lines() {
        let line = line?;
        fs.add_disk(&line, DiskFlags::empty());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_each_line_becomes_a_disk() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"/x\n/y\n").expect("write config");

        let mut fs = Meldfs::new("/mnt/pool");
        load_mountpoint_list(&mut fs, file.path()).expect("load");

        assert_eq!(fs.disk_count(), 2);
        assert_eq!(fs.disks()[0].mountpoint, "/x");
        assert_eq!(fs.disks()[0].flags, DiskFlags::empty());
        assert_eq!(fs.disks()[1].mountpoint, "/y");
    }

    #[test]
    fn test_final_line_without_newline() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"/x\n/y").expect("write config");

        let mut fs = Meldfs::new("/mnt/pool");
        load_mountpoint_list(&mut fs, file.path()).expect("load");

        assert_eq!(fs.disk_count(), 2);
        assert_eq!(fs.disks()[1].mountpoint, "/y");
    }

    #[test]
    fn test_blank_lines_dropped_at_registration() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"/x\n\n\n/y\n").expect("write config");

        let mut fs = Meldfs::new("/mnt/pool");
        load_mountpoint_list(&mut fs, file.path()).expect("load");

        assert_eq!(fs.disk_count(), 2);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut fs = Meldfs::new("/mnt/pool");
        let err = load_mountpoint_list(&mut fs, &dir.path().join("absent.conf"))
            .expect_err("should fail");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert_eq!(fs.disk_count(), 0);
    }
}
