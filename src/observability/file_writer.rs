//! Append-only trace file with size-based rotation.
//!
//! When the live file grows past its limit it is renamed to
//! `<stem>.<YYYYmmddTHHMMSS>.json` and a fresh file is started. Only the
//! newest few backups are kept.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Utc;

/// Rotate once the live file is larger than this (5 MB).
const DEFAULT_MAX_BYTES: u64 = 5 * 1024 * 1024;

/// Rotated files kept next to the live file.
const DEFAULT_BACKUPS: usize = 3;

/// Line-oriented file writer shared between exporter calls.
pub struct FileWriter {
    path: PathBuf,
    max_bytes: u64,
    backups: usize,
    file: Mutex<Option<File>>,
}

impl FileWriter {
    /// Creates a writer for `path`. Nothing is opened until the first line.
    pub const fn new(path: PathBuf) -> Self {
        Self::with_limits(path, DEFAULT_MAX_BYTES, DEFAULT_BACKUPS)
    }

    pub const fn with_limits(path: PathBuf, max_bytes: u64, backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            backups,
            file: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline and flushes.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if rotating, opening, or writing the file fails,
    /// or if the lock was poisoned by a panicking writer.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("trace file lock poisoned: {e}")))?;

        if self.needs_rotation() {
            *guard = None;
            self.rotate()?;
        }

        if guard.is_none() {
            *guard = Some(OpenOptions::new().create(true).append(true).open(&self.path)?);
        }
        let Some(file) = guard.as_mut() else {
            return Err(io::Error::new(io::ErrorKind::Other, "trace file not open"));
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.path).is_ok_and(|m| m.len() > self.max_bytes)
    }

    fn rotate(&self) -> io::Result<()> {
        let stamp = Utc::now().format("%Y%m%dT%H%M%S%3f");
        let backup = self.path.with_file_name(format!("{}.{stamp}.json", self.stem()?));
        fs::rename(&self.path, backup)?;
        self.prune_backups()
    }

    /// Deletes all but the newest `backups` rotated files.
    ///
    /// Backup names embed a sortable timestamp, so lexical order is age order.
    fn prune_backups(&self) -> io::Result<()> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let prefix = format!("{}.", self.stem()?);
        let live = self.path.file_name();

        let mut backups: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|p| p.file_name() != live)
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with(&prefix) && n.ends_with(".json"))
            })
            .collect();
        backups.sort();

        let excess = backups.len().saturating_sub(self.backups);
        for old in backups.into_iter().take(excess) {
            if let Err(e) = fs::remove_file(&old) {
                eprintln!("movieseek: could not remove old trace file {}: {e}", old.display());
            }
        }
        Ok(())
    }

    fn stem(&self) -> io::Result<&str> {
        self.path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "trace file has no name"))
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("backups", &self.backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backups_in(dir: &Path) -> usize {
        fs::read_dir(dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name() != "traces.json")
            .count()
    }

    #[test]
    fn lines_are_appended() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traces.json");
        let writer = FileWriter::new(path.clone());

        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"b\":2}").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn oversized_file_is_rotated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traces.json");
        let writer = FileWriter::with_limits(path.clone(), 8, 3);

        writer.write_line("0123456789").unwrap();
        writer.write_line("next").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "next\n");
        assert_eq!(backups_in(dir.path()), 1);
    }

    #[test]
    fn only_newest_backups_survive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traces.json");
        for stamp in ["20240101T000000000", "20240102T000000000", "20240103T000000000"] {
            fs::write(dir.path().join(format!("traces.{stamp}.json")), "old\n").unwrap();
        }
        fs::write(dir.path().join("unrelated.json"), "keep\n").unwrap();

        let writer = FileWriter::with_limits(path.clone(), 1, 2);
        fs::write(&path, "big enough\n").unwrap();
        writer.write_line("fresh").unwrap();

        assert!(!dir.path().join("traces.20240101T000000000.json").exists());
        assert!(!dir.path().join("traces.20240102T000000000.json").exists());
        assert!(dir.path().join("traces.20240103T000000000.json").exists());
        assert!(dir.path().join("unrelated.json").exists());
    }
}
