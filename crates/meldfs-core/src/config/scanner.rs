//! Line-oriented tokenizer for the structured config format.
//!
//! Syntax, per line after trimming:
//!
//! - blank lines and lines starting with `#` or `;` are skipped
//! - `[name]` closes the open section (if any) and starts a new one
//! - `key = value` emits one option event; the split is on the first
//!   `=`, so keys may contain spaces (`disk cache timeout`)
//!
//! Anything else — option lines before the first header, lines with no
//! `=` — is skipped. The scanner owns error recovery for malformed
//! syntax, and it recovers by ignoring; sinks only see clean events.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use super::session::SectionSink;

/// Read a structured config file, driving `sink` with one event per
/// section header, option line, and section close. The section open at
/// end of file is closed before returning.
///
/// A missing or unreadable file is an error to this function's caller;
/// a read error mid-file abandons the open section uncommitted.
pub fn read_config_file(path: &Path, sink: &mut impl SectionSink) -> io::Result<()> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut in_section = false;
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if let Some(name) = line
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
        {
            if in_section {
                sink.section_end();
            }
            sink.section_start(name.trim());
            in_section = true;
            continue;
        }

        if !in_section {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            sink.option(key.trim(), value.trim());
        }
    }

    if in_section {
        sink.section_end();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// Sink that records events as flat strings for assertion.
    #[derive(Default)]
    struct RecordingSink {
        events: Vec<String>,
    }

    impl SectionSink for RecordingSink {
        fn section_start(&mut self, name: &str) {
            self.events.push(format!("start {name}"));
        }

        fn option(&mut self, key: &str, value: &str) {
            self.events.push(format!("option {key}={value}"));
        }

        fn section_end(&mut self) {
            self.events.push("end".to_string());
        }
    }

    fn scan(text: &str) -> Vec<String> {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(text.as_bytes()).expect("write config");

        let mut sink = RecordingSink::default();
        read_config_file(file.path(), &mut sink).expect("scan");
        sink.events
    }

    #[test]
    fn test_sections_and_options() {
        let events = scan(
            "[global]\n\
             disk cache timeout = 30\n\
             \n\
             [media]\n\
             mountpoint = /a\n\
             no shared writes = yes\n",
        );

        assert_eq!(
            events,
            vec![
                "start global",
                "option disk cache timeout=30",
                "end",
                "start media",
                "option mountpoint=/a",
                "option no shared writes=yes",
                "end",
            ]
        );
    }

    #[test]
    fn test_open_section_closed_at_eof() {
        let events = scan("[media]\nmountpoint = /a");
        assert_eq!(events.last().map(String::as_str), Some("end"));
    }

    #[test]
    fn test_comments_blanks_and_junk_skipped() {
        let events = scan(
            "# leading comment\n\
             ; other comment style\n\
             stray option = before any section\n\
             not even an option\n\
             \n\
             [media]\n\
             no equals sign here\n\
             mountpoint = /a\n",
        );

        assert_eq!(
            events,
            vec!["start media", "option mountpoint=/a", "end"]
        );
    }

    #[test]
    fn test_header_and_option_trimming() {
        let events = scan("  [ media ]  \n   mountpoint   =   /a  \n");
        assert_eq!(
            events,
            vec!["start media", "option mountpoint=/a", "end"]
        );
    }

    #[test]
    fn test_value_may_contain_equals() {
        let events = scan("[media]\nmountpoint = /a=b\n");
        assert_eq!(events[1], "option mountpoint=/a=b");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut sink = RecordingSink::default();
        let err = read_config_file(&dir.path().join("absent.conf"), &mut sink)
            .expect_err("should fail");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(sink.events.is_empty());
    }
}
