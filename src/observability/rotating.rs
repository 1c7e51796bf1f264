//! Append-only line writer with size-based rotation.
//!
//! Backups are numbered: `contacts-otlp.json.1` is the most recent, and the
//! oldest one past the retention limit is dropped on each rotation.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;
const DEFAULT_MAX_BACKUPS: usize = 3;

/// A file that moves itself to a numbered backup once it reaches a size
/// limit.
///
/// Writes from several threads are serialized through the handle lock.
pub struct RotatingFile {
    /// Live file; backups sit next to it as `{path}.1`, `{path}.2`, ...
    path: PathBuf,
    /// Size at which the next write rotates first.
    max_bytes: u64,
    /// Backups kept; older ones are deleted.
    max_backups: usize,
    /// Opened on first write.
    handle: Mutex<Option<File>>,
}

impl RotatingFile {
    /// Creates a writer for `path` with a 10 MB limit and 3 backups. Nothing
    /// touches the disk until the first write.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self::with_limits(path, DEFAULT_MAX_BYTES, DEFAULT_MAX_BACKUPS)
    }

    /// Creates a writer with an explicit size limit and backup count.
    #[must_use]
    pub const fn with_limits(path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            max_backups,
            handle: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline, rotating first if the file has outgrown
    /// its limit.
    pub fn append_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("trace file lock poisoned: {e}")))?;

        if self.needs_rotation() {
            *handle = None;
            self.rotate()?;
        }

        if handle.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)?;
            *handle = Some(file);
        }
        let Some(file) = handle.as_mut() else {
            return Err(io::Error::new(io::ErrorKind::Other, "trace file not open"));
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.path).is_ok_and(|meta| meta.len() >= self.max_bytes)
    }

    /// Shifts `.1 → .2 → …`, dropping the backup past the limit, then moves
    /// the live file to `.1`.
    fn rotate(&self) -> io::Result<()> {
        if self.max_backups == 0 {
            return fs::remove_file(&self.path);
        }

        let oldest = self.backup_path(self.max_backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }

        for n in (1..self.max_backups).rev() {
            let from = self.backup_path(n);
            if from.exists() {
                fs::rename(&from, self.backup_path(n + 1))?;
            }
        }

        fs::rename(&self.path, self.backup_path(1))
    }

    fn backup_path(&self, n: usize) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|s| s.to_os_string())
            .unwrap_or_default();
        name.push(format!(".{n}"));
        self.path.with_file_name(name)
    }

    /// Path of the live file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(path: &Path) -> Vec<String> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(String::from)
            .collect()
    }

    #[test]
    fn appends_lines_to_a_new_file() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RotatingFile::new(dir.path().join("trace.json"));

        writer.append_line("{\"a\":1}").unwrap();
        writer.append_line("{\"b\":2}").unwrap();

        assert_eq!(lines(writer.path()), vec!["{\"a\":1}", "{\"b\":2}"]);
    }

    #[test]
    fn rotates_once_the_limit_is_reached() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = RotatingFile::with_limits(path.clone(), 8, 3);

        writer.append_line("first---").unwrap();
        writer.append_line("second").unwrap();

        assert_eq!(lines(&path), vec!["second"]);
        assert_eq!(lines(&dir.path().join("trace.json.1")), vec!["first---"]);
    }

    #[test]
    fn keeps_only_the_newest_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = RotatingFile::with_limits(path.clone(), 1, 2);

        for n in 0..5 {
            writer.append_line(&format!("line {n}")).unwrap();
        }

        assert_eq!(lines(&path), vec!["line 4"]);
        assert_eq!(lines(&dir.path().join("trace.json.1")), vec!["line 3"]);
        assert_eq!(lines(&dir.path().join("trace.json.2")), vec!["line 2"]);
        assert!(!dir.path().join("trace.json.3").exists());
    }
}
