//! Structured-format session: section/option/end event handling.
//!
//! The structured config format is section-oriented. A tokenizer walks
//! the file and pushes events into a [`SectionSink`]; the session here
//! gives those events their meaning. The reserved `[global]` section
//! carries aggregate-wide settings applied to the handle the moment they
//! are seen; every other section describes one disk, staged locally and
//! registered when the section closes.

use crate::disk::DiskFlags;
use crate::fs::Meldfs;

/// Reserved name of the section holding global settings. Compared
/// case-insensitively.
const SECTION_GLOBAL: &str = "global";

/// Receiver side of the structured-format event protocol.
///
/// A well-formed drive is a strict start/option*/end sequence per
/// section with no nesting. Implementations must nonetheless tolerate
/// `option` and `section_end` arriving with no open section — drivers
/// own their own error recovery, and a sink that assumes pairing can be
/// faulted by one. That tolerance is part of this contract, not an
/// implementation detail.
pub trait SectionSink {
    /// A section header was read.
    fn section_start(&mut self, name: &str);
    /// A `key = value` option was read inside the current section.
    fn option(&mut self, key: &str, value: &str);
    /// The current section ended.
    fn section_end(&mut self);
}

/// Per-section accumulator state, fixed once at section start and never
/// re-evaluated mid-section.
#[derive(Debug)]
enum SectionScope {
    /// Inside `[global]`: recognized options mutate the handle directly.
    Global,
    /// Inside a disk section: options stage into an entry committed at
    /// section end.
    Disk(DiskEntry),
}

/// A disk being assembled from one section, not yet registered.
#[derive(Debug, Default)]
struct DiskEntry {
    mountpoint: Option<String>,
    flags: DiskFlags,
}

/// One structured-format parse over a candidate config file.
///
/// Wraps the handle for the duration of the parse. Global options land
/// in the handle's config block as they are seen; disk sections are
/// handed to [`Meldfs::add_disk`] as they close, mountpoint present or
/// not — registration decides what to accept.
pub struct ConfigSession<'fs> {
    fs: &'fs mut Meldfs,
    section: Option<SectionScope>,
}

impl<'fs> ConfigSession<'fs> {
    /// Start a session against the handle being initialized.
    pub fn new(fs: &'fs mut Meldfs) -> Self {
        Self { fs, section: None }
    }
}

impl SectionSink for ConfigSession<'_> {
    fn section_start(&mut self, name: &str) {
        // A still-open previous section is dropped uncommitted.
        self.section = Some(if name.eq_ignore_ascii_case(SECTION_GLOBAL) {
            SectionScope::Global
        } else {
            SectionScope::Disk(DiskEntry::default())
        });
    }

    fn option(&mut self, key: &str, value: &str) {
        match &mut self.section {
            None => {}
            Some(SectionScope::Global) => {
                if key == "disk cache timeout" {
                    match value.parse::<u32>() {
                        Ok(timeout) if timeout > 0 => {
                            self.fs.config_mut().disk_cache_timeout = timeout;
                        }
                        _ => {
                            tracing::debug!("ignoring disk cache timeout {:?}", value);
                        }
                    }
                }
            }
            Some(SectionScope::Disk(entry)) => match key {
                // Duplicate keys: last write wins.
                "mountpoint" => entry.mountpoint = Some(value.to_string()),
                "no shared writes" => {
                    if let Some(no_writes) = parse_bool(value) {
                        entry.flags.set(DiskFlags::NO_SHARED_WRITES, no_writes);
                    } else {
                        tracing::debug!("ignoring no shared writes {:?}", value);
                    }
                }
                _ => {}
            },
        }
    }

    fn section_end(&mut self) {
        let Some(scope) = self.section.take() else {
            return;
        };
        if let SectionScope::Disk(entry) = scope {
            self.fs
                .add_disk(entry.mountpoint.as_deref().unwrap_or(""), entry.flags);
        }
    }
}

/// Parse the config boolean vocabulary: `true`/`yes` and `false`/`no`.
/// Anything else is a parse failure.
fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "true" | "yes" => Some(true),
        "false" | "no" => Some(false),
        _ => None,
    }
}
