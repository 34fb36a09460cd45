//! Size-based rotating file writer
//!
//! The writer appends to a single log file and, once the next write would push
//! the file past its size limit, renames it to a timestamped backup and starts
//! a fresh file. After each rotation the old backups are pruned by count and
//! age and optionally gzip-compressed.
//!
//! Backup names keep the original stem and extension with the rotation time
//! in between: `app.log` becomes `app-2025-01-08T10-30-45.123.log`.

use crate::core::error::{LoggerError, Result};
use crate::core::options::{Options, DEFAULT_MAX_SIZE_MB};
use crate::core::Sink;
use chrono::{Local, NaiveDateTime, Utc};
use std::collections::HashSet;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

pub const MEGABYTE: u64 = 1024 * 1024;

const BACKUP_TIME_FORMAT: &str = "%Y-%m-%dT%H-%M-%S%.3f";
const COMPRESS_SUFFIX: &str = ".gz";

/// Rotation and retention rules for a [`RotatingFileWriter`]
///
/// # Examples
///
/// ```
/// use rust_logger_facade::appenders::RotationPolicy;
///
/// let policy = RotationPolicy::new("/var/log/app.log")
///     .with_max_size_mb(50)
///     .with_max_backups(7)
///     .with_max_age(30)
///     .with_compression(true);
///
/// assert_eq!(policy.max_size, 50 * 1024 * 1024);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationPolicy {
    /// File to write to; backups live in the same directory
    pub filename: PathBuf,
    /// Maximum size of the file in bytes before it is rotated
    pub max_size: u64,
    /// Days to keep backups, 0 disables age-based removal
    pub max_age: u64,
    /// Backups to keep, 0 keeps all of them
    pub max_backups: usize,
    /// Use local time in backup names instead of UTC
    pub local_time: bool,
    /// Gzip backups
    pub compress: bool,
}

impl Default for RotationPolicy {
    fn default() -> Self {
        Self::new(default_filename())
    }
}

impl RotationPolicy {
    pub fn new(filename: impl Into<PathBuf>) -> Self {
        Self {
            filename: filename.into(),
            max_size: DEFAULT_MAX_SIZE_MB * MEGABYTE,
            max_age: 0,
            max_backups: 0,
            local_time: false,
            compress: false,
        }
    }

    /// Build the policy from logger options (`max_size` there is in megabytes)
    pub fn from_options(opts: &Options) -> Self {
        let filename = if opts.filename.is_empty() {
            default_filename()
        } else {
            PathBuf::from(&opts.filename)
        };
        let max_size_mb = if opts.max_size == 0 {
            DEFAULT_MAX_SIZE_MB
        } else {
            opts.max_size
        };

        Self {
            filename,
            max_size: max_size_mb.saturating_mul(MEGABYTE),
            max_age: opts.max_age,
            max_backups: opts.max_backups,
            local_time: opts.local_time,
            compress: opts.compress,
        }
    }

    /// Maximum size in bytes
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_max_size(mut self, bytes: u64) -> Self {
        self.max_size = bytes;
        self
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_max_size_mb(mut self, megabytes: u64) -> Self {
        self.max_size = megabytes.saturating_mul(MEGABYTE);
        self
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_max_age(mut self, days: u64) -> Self {
        self.max_age = days;
        self
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_max_backups(mut self, count: usize) -> Self {
        self.max_backups = count;
        self
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_local_time(mut self, local: bool) -> Self {
        self.local_time = local;
        self
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_compression(mut self, enabled: bool) -> Self {
        self.compress = enabled;
        self
    }
}

/// `<process name>-lumberjack.log` in the system temp directory
pub fn default_filename() -> PathBuf {
    let process = std::env::current_exe()
        .ok()
        .and_then(|p| p.file_stem().map(|s| s.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "app".to_string());
    std::env::temp_dir().join(format!("{}-lumberjack.log", process))
}

/// A backup found in the log directory
#[derive(Debug, Clone)]
struct BackupFile {
    path: PathBuf,
    name: String,
    timestamp: NaiveDateTime,
}

/// Append-only log file that rotates by size
///
/// The file is opened lazily on the first write. Opening an existing file
/// appends to it unless the pending write would exceed the size limit, in
/// which case the file is rotated first.
///
/// # Examples
///
/// ```no_run
/// use rust_logger_facade::appenders::{RotatingFileWriter, RotationPolicy};
/// use std::io::Write;
///
/// let policy = RotationPolicy::new("/var/log/app.log").with_max_backups(3);
/// let mut writer = RotatingFileWriter::new(policy);
/// writer.write_all(b"{\"msg\":\"hello\"}\n").unwrap();
/// writer.flush().unwrap();
/// ```
pub struct RotatingFileWriter {
    policy: RotationPolicy,
    writer: Option<BufWriter<File>>,
    size: u64,
}

impl RotatingFileWriter {
    pub fn new(policy: RotationPolicy) -> Self {
        Self {
            policy,
            writer: None,
            size: 0,
        }
    }

    /// Get base path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.policy.filename
    }

    /// Get rotation policy
    #[must_use]
    pub fn policy(&self) -> &RotationPolicy {
        &self.policy
    }

    /// Bytes in the current file, as far as this writer knows
    #[must_use]
    pub fn current_size(&self) -> u64 {
        self.size
    }

    /// Write one chunk, rotating first if it would not fit
    pub fn write_bytes(&mut self, buf: &[u8]) -> Result<()> {
        let write_len = buf.len() as u64;
        if write_len > self.policy.max_size {
            return Err(LoggerError::EntryTooLarge {
                len: write_len,
                max: self.policy.max_size,
            });
        }

        if self.writer.is_none() {
            self.open_existing_or_new(write_len)?;
        }

        if self.size + write_len > self.policy.max_size {
            self.rotate()?;
        }

        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| LoggerError::sink("log file is not open"))?;
        writer.write_all(buf).map_err(|e| {
            LoggerError::log_file(
                self.policy.filename.display().to_string(),
                format!("Failed to write log entry: {}", e),
            )
        })?;
        self.size += write_len;
        Ok(())
    }

    /// Flush buffered bytes and ask the OS to persist them
    pub fn sync(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush().map_err(|e| {
                LoggerError::log_file(
                    self.policy.filename.display().to_string(),
                    format!("Failed to flush: {}", e),
                )
            })?;
            writer.get_ref().sync_data()?;
        }
        Ok(())
    }

    /// Close the current file; the next write reopens it
    pub fn close(&mut self) -> Result<()> {
        if let Some(mut writer) = self.writer.take() {
            writer.flush().map_err(|e| {
                LoggerError::log_file(
                    self.policy.filename.display().to_string(),
                    format!("Failed to flush on close: {}", e),
                )
            })?;
        }
        Ok(())
    }

    /// Move the current file to a backup, start a new one and prune backups
    ///
    /// Only failures to move or reopen the file are returned. Problems pruning
    /// or compressing old backups are reported on stderr, since the new file
    /// is already usable at that point.
    pub fn rotate(&mut self) -> Result<()> {
        self.close()?;
        self.open_new()?;
        self.mill();
        Ok(())
    }

    fn open_existing_or_new(&mut self, write_len: u64) -> Result<()> {
        let metadata = match fs::metadata(&self.policy.filename) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return self.open_new(),
            Err(e) => {
                return Err(LoggerError::io_operation(
                    "inspect log file",
                    format!("Cannot access '{}'", self.policy.filename.display()),
                    e,
                ))
            }
        };

        if metadata.len() + write_len >= self.policy.max_size {
            return self.rotate();
        }

        match OpenOptions::new().append(true).open(&self.policy.filename) {
            Ok(file) => {
                self.writer = Some(BufWriter::new(file));
                self.size = metadata.len();
                Ok(())
            }
            // Existing file is unusable; start over with a fresh one.
            Err(_) => self.open_new(),
        }
    }

    fn open_new(&mut self) -> Result<()> {
        let path = self.policy.filename.clone();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                LoggerError::io_operation(
                    "create log directory",
                    format!("Failed to create directory '{}'", parent.display()),
                    e,
                )
            })?;
        }

        if path.exists() {
            let backup = self.backup_path();
            fs::rename(&path, &backup).map_err(|e| {
                LoggerError::rotation(
                    path.display().to_string(),
                    format!("Failed to rename log file to '{}': {}", backup.display(), e),
                )
            })?;
        }

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::log_file(
                    path.display().to_string(),
                    format!("Failed to open new log file: {}", e),
                )
            })?;

        self.writer = Some(BufWriter::new(file));
        self.size = 0;
        Ok(())
    }

    fn backup_path(&self) -> PathBuf {
        let timestamp = if self.policy.local_time {
            Local::now().format(BACKUP_TIME_FORMAT).to_string()
        } else {
            Utc::now().format(BACKUP_TIME_FORMAT).to_string()
        };
        let (prefix, ext) = self.prefix_and_ext();
        self.dir().join(format!("{}{}{}", prefix, timestamp, ext))
    }

    fn dir(&self) -> PathBuf {
        match self.policy.filename.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// Backup name prefix (`stem-`) and extension (`.log`, possibly empty)
    fn prefix_and_ext(&self) -> (String, String) {
        let stem = self
            .policy
            .filename
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let ext = self
            .policy
            .filename
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();
        (format!("{}-", stem), ext)
    }

    /// Backups in the log directory, newest first
    fn old_log_files(&self) -> Result<Vec<BackupFile>> {
        let dir = self.dir();
        let entries = fs::read_dir(&dir).map_err(|e| {
            LoggerError::io_operation(
                "list log directory",
                format!("Cannot read '{}'", dir.display()),
                e,
            )
        })?;

        let (prefix, ext) = self.prefix_and_ext();
        let compressed_ext = format!("{}{}", ext, COMPRESS_SUFFIX);

        let mut backups = Vec::new();
        for entry in entries.filter_map(|e| e.ok()) {
            if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            let timestamp = parse_backup_time(&name, &prefix, &ext)
                .or_else(|| parse_backup_time(&name, &prefix, &compressed_ext));
            if let Some(timestamp) = timestamp {
                backups.push(BackupFile {
                    path: entry.path(),
                    name,
                    timestamp,
                });
            }
        }

        backups.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(backups)
    }

    /// Remove backups beyond the count and age limits and compress the rest
    fn mill(&self) {
        if self.policy.max_backups == 0 && self.policy.max_age == 0 && !self.policy.compress {
            return;
        }

        let mut files = match self.old_log_files() {
            Ok(files) => files,
            Err(e) => {
                eprintln!("[WARN] Skipping log file cleanup: {}", e);
                return;
            }
        };
        let mut remove = Vec::new();

        if self.policy.max_backups > 0 && self.policy.max_backups < files.len() {
            let mut preserved = HashSet::new();
            let mut remaining = Vec::new();
            for file in files {
                // A backup and its compressed copy count once.
                let base = file
                    .name
                    .strip_suffix(COMPRESS_SUFFIX)
                    .unwrap_or(&file.name)
                    .to_string();
                preserved.insert(base);
                if preserved.len() > self.policy.max_backups {
                    remove.push(file);
                } else {
                    remaining.push(file);
                }
            }
            files = remaining;
        }

        if self.policy.max_age > 0 {
            let now = if self.policy.local_time {
                Local::now().naive_local()
            } else {
                Utc::now().naive_utc()
            };
            // An age too large to represent keeps everything.
            let cutoff = i64::try_from(self.policy.max_age)
                .ok()
                .and_then(chrono::Duration::try_days)
                .and_then(|max_age| now.checked_sub_signed(max_age));

            if let Some(cutoff) = cutoff {
                let (expired, kept): (Vec<_>, Vec<_>) =
                    files.into_iter().partition(|f| f.timestamp < cutoff);
                remove.extend(expired);
                files = kept;
            }
        }

        for file in &remove {
            if let Err(e) = fs::remove_file(&file.path) {
                eprintln!("[WARN] Failed to remove old log file {}: {}", file.path.display(), e);
            }
        }

        if self.policy.compress {
            for file in files.iter().filter(|f| !f.name.ends_with(COMPRESS_SUFFIX)) {
                if let Err(e) = compress_file(&file.path) {
                    eprintln!("[WARN] Failed to compress {}: {}", file.path.display(), e);
                }
            }
        }
    }
}

impl Sink for RotatingFileWriter {
    fn write_entry(&mut self, buf: &[u8]) -> Result<()> {
        self.write_bytes(buf)
    }

    fn sync(&mut self) -> Result<()> {
        RotatingFileWriter::sync(self)
    }

    fn name(&self) -> &str {
        "rotating_file"
    }
}

impl Write for RotatingFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_bytes(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.writer {
            Some(ref mut writer) => writer.flush(),
            None => Ok(()),
        }
    }
}

impl Drop for RotatingFileWriter {
    fn drop(&mut self) {
        // Best effort flush - ignore errors during drop
        let _ = self.close();
    }
}

/// Parse the rotation time out of `<prefix><timestamp><ext>`
fn parse_backup_time(name: &str, prefix: &str, ext: &str) -> Option<NaiveDateTime> {
    let stamp = name.strip_prefix(prefix)?.strip_suffix(ext)?;
    NaiveDateTime::parse_from_str(stamp, BACKUP_TIME_FORMAT).ok()
}

/// Gzip `path` into `path.gz` and remove the original
///
/// The compressed file is written to a temporary name first, and the original
/// is removed only once compression has fully succeeded.
fn compress_file(path: &Path) -> Result<()> {
    use std::io::{BufReader, Read};

    let gz_path = PathBuf::from(format!("{}{}", path.display(), COMPRESS_SUFFIX));
    let temp_gz_path = PathBuf::from(format!("{}{}.tmp", path.display(), COMPRESS_SUFFIX));

    let input = File::open(path).map_err(|e| {
        LoggerError::io_operation(
            "compress log file",
            format!("Failed to open file for compression: {}", path.display()),
            e,
        )
    })?;
    let mut reader = BufReader::with_capacity(64 * 1024, input);

    let output = File::create(&temp_gz_path).map_err(|e| {
        LoggerError::io_operation(
            "compress log file",
            format!("Failed to create temporary compressed file: {}", temp_gz_path.display()),
            e,
        )
    })?;
    let buffered_output = BufWriter::with_capacity(64 * 1024, output);
    let mut encoder = flate2::write::GzEncoder::new(buffered_output, flate2::Compression::default());

    let mut buffer = vec![0u8; 64 * 1024];
    loop {
        let bytes_read = reader.read(&mut buffer).map_err(|e| {
            let _ = fs::remove_file(&temp_gz_path);
            LoggerError::io_operation(
                "compress log file",
                format!("Failed to read from file: {}", path.display()),
                e,
            )
        })?;

        if bytes_read == 0 {
            break;
        }

        encoder.write_all(&buffer[..bytes_read]).map_err(|e| {
            let _ = fs::remove_file(&temp_gz_path);
            LoggerError::io_operation("compress log file", "Failed to compress data chunk", e)
        })?;
    }

    let mut buffered_output = encoder.finish().map_err(|e| {
        let _ = fs::remove_file(&temp_gz_path);
        LoggerError::io_operation("compress log file", "Failed to finish compression", e)
    })?;
    buffered_output.flush().map_err(|e| {
        let _ = fs::remove_file(&temp_gz_path);
        LoggerError::io_operation("compress log file", "Failed to flush compressed file", e)
    })?;
    drop(buffered_output);

    fs::rename(&temp_gz_path, &gz_path).map_err(|e| {
        let _ = fs::remove_file(&temp_gz_path);
        LoggerError::io_operation(
            "compress log file",
            format!("Failed to rename compressed file to: {}", gz_path.display()),
            e,
        )
    })?;

    if let Err(e) = fs::remove_file(path) {
        eprintln!(
            "[WARN] Compression succeeded but failed to remove original file {}: {}",
            path.display(),
            e
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::options::{with_file_name, with_max_size};
    use flate2::read::GzDecoder;
    use std::io::Read;
    use tempfile::tempdir;

    fn backups_in(dir: &Path, prefix: &str) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .filter(|n| n.starts_with(prefix))
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_policy_from_options() {
        let opts = Options::resolve([with_file_name("/var/log/svc.log"), with_max_size(2)]);
        let policy = RotationPolicy::from_options(&opts);
        assert_eq!(policy.filename, PathBuf::from("/var/log/svc.log"));
        assert_eq!(policy.max_size, 2 * MEGABYTE);

        let opts = Options::resolve([with_file_name(""), with_max_size(0)]);
        let policy = RotationPolicy::from_options(&opts);
        assert_eq!(policy.filename, default_filename());
        assert_eq!(policy.max_size, DEFAULT_MAX_SIZE_MB * MEGABYTE);
        assert!(policy
            .filename
            .to_string_lossy()
            .ends_with("-lumberjack.log"));
    }

    #[test]
    fn test_lazy_open_creates_file_and_dirs() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("nested").join("app.log");

        let mut writer = RotatingFileWriter::new(RotationPolicy::new(&log_path));
        assert!(!log_path.exists());

        writer.write_bytes(b"first\n").unwrap();
        writer.sync().unwrap();
        assert_eq!(fs::read_to_string(&log_path).unwrap(), "first\n");
        assert_eq!(writer.current_size(), 6);
    }

    #[test]
    fn test_appends_to_existing_file() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("app.log");
        fs::write(&log_path, "old\n").unwrap();

        let mut writer = RotatingFileWriter::new(RotationPolicy::new(&log_path).with_max_size(100));
        writer.write_bytes(b"new\n").unwrap();
        writer.sync().unwrap();

        assert_eq!(fs::read_to_string(&log_path).unwrap(), "old\nnew\n");
        assert!(backups_in(dir.path(), "app-").is_empty());
    }

    #[test]
    fn test_existing_file_too_full_is_rotated_on_open() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("app.log");
        fs::write(&log_path, "0123456789").unwrap();

        let mut writer = RotatingFileWriter::new(RotationPolicy::new(&log_path).with_max_size(12));
        writer.write_bytes(b"abc\n").unwrap();
        writer.sync().unwrap();

        assert_eq!(fs::read_to_string(&log_path).unwrap(), "abc\n");
        let backups = backups_in(dir.path(), "app-");
        assert_eq!(backups.len(), 1);
        assert!(backups[0].ends_with(".log"));
        assert_eq!(
            fs::read_to_string(dir.path().join(&backups[0])).unwrap(),
            "0123456789"
        );
    }

    #[test]
    fn test_rotation_by_size() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("rotation.log");

        let mut writer = RotatingFileWriter::new(RotationPolicy::new(&log_path).with_max_size(20));
        writer.write_bytes(b"0123456789\n").unwrap();
        writer.write_bytes(b"abcdefghij\n").unwrap();
        writer.sync().unwrap();

        assert_eq!(fs::read_to_string(&log_path).unwrap(), "abcdefghij\n");
        let backups = backups_in(dir.path(), "rotation-");
        assert_eq!(backups.len(), 1);
        assert_eq!(
            fs::read_to_string(dir.path().join(&backups[0])).unwrap(),
            "0123456789\n"
        );
    }

    #[test]
    fn test_oversized_write_is_rejected() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("small.log");

        let mut writer = RotatingFileWriter::new(RotationPolicy::new(&log_path).with_max_size(4));
        let err = writer.write_bytes(b"too long").unwrap_err();
        assert!(err.to_string().contains("exceeds maximum file size 4"));
        assert!(!log_path.exists());
    }

    #[test]
    fn test_max_backups_keeps_newest() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("app.log");
        for day in 1..=4 {
            let name = format!("app-2020-01-0{}T00-00-00.000.log", day);
            fs::write(dir.path().join(name), "backup").unwrap();
        }
        fs::write(dir.path().join("unrelated.txt"), "keep me").unwrap();

        let policy = RotationPolicy::new(&log_path)
            .with_max_size(10)
            .with_max_backups(2);
        let mut writer = RotatingFileWriter::new(policy);
        writer.write_bytes(b"12345678\n").unwrap();
        writer.write_bytes(b"12345678\n").unwrap();
        writer.sync().unwrap();

        let backups = backups_in(dir.path(), "app-");
        assert_eq!(backups.len(), 2);
        assert!(backups.contains(&"app-2020-01-04T00-00-00.000.log".to_string()));
        assert!(!backups.contains(&"app-2020-01-03T00-00-00.000.log".to_string()));
        assert!(dir.path().join("unrelated.txt").exists());
    }

    #[test]
    fn test_max_age_removes_expired() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("aged.log");
        let expired = dir.path().join("aged-2000-01-01T00-00-00.000.log");
        fs::write(&expired, "ancient").unwrap();

        let policy = RotationPolicy::new(&log_path).with_max_size(10).with_max_age(1);
        let mut writer = RotatingFileWriter::new(policy);
        writer.write_bytes(b"12345678\n").unwrap();
        writer.write_bytes(b"12345678\n").unwrap();

        assert!(!expired.exists());
        assert_eq!(backups_in(dir.path(), "aged-").len(), 1);
    }

    #[test]
    fn test_compression_of_backups() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("zipped.log");

        let policy = RotationPolicy::new(&log_path)
            .with_max_size(10)
            .with_compression(true);
        let mut writer = RotatingFileWriter::new(policy);
        writer.write_bytes(b"first-l\n").unwrap();
        writer.write_bytes(b"second\n").unwrap();
        writer.sync().unwrap();

        let backups = backups_in(dir.path(), "zipped-");
        assert_eq!(backups.len(), 1, "backups: {:?}", backups);
        assert!(backups[0].ends_with(".log.gz"));

        let file = File::open(dir.path().join(&backups[0])).unwrap();
        let mut content = String::new();
        GzDecoder::new(file).read_to_string(&mut content).unwrap();
        assert_eq!(content, "first-l\n");
    }

    #[test]
    fn test_cleanup_failure_keeps_triggering_entry() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("app.log");
        let stuck = dir.path().join("app-2020-01-01T00-00-00.000.log");
        fs::write(&stuck, "old backup").unwrap();
        // A directory where the temporary archive would go makes compression fail.
        fs::create_dir(dir.path().join("app-2020-01-01T00-00-00.000.log.gz.tmp")).unwrap();

        let policy = RotationPolicy::new(&log_path)
            .with_max_size(10)
            .with_compression(true);
        let mut writer = RotatingFileWriter::new(policy);
        writer.write_bytes(b"aaaaaaaa\n").unwrap();
        writer.write_bytes(b"bbbbbbbb\n").unwrap();
        writer.sync().unwrap();

        assert_eq!(fs::read_to_string(&log_path).unwrap(), "bbbbbbbb\n");
        assert!(stuck.exists());

        // The next rotation hits the same broken backup and still writes.
        writer.write_bytes(b"cccccccc\n").unwrap();
        writer.sync().unwrap();
        assert_eq!(fs::read_to_string(&log_path).unwrap(), "cccccccc\n");

        let archived = backups_in(dir.path(), "app-")
            .into_iter()
            .filter(|n| n.ends_with(".log.gz"))
            .count();
        assert!(archived >= 1);
    }

    #[test]
    fn test_manual_rotate_and_io_write() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("manual.log");

        let mut writer = RotatingFileWriter::new(RotationPolicy::new(&log_path));
        writer.write_all(b"before\n").unwrap();
        writer.rotate().unwrap();
        writer.write_all(b"after\n").unwrap();
        writer.flush().unwrap();

        assert_eq!(fs::read_to_string(&log_path).unwrap(), "after\n");
        assert_eq!(backups_in(dir.path(), "manual-").len(), 1);
    }

    #[test]
    fn test_parse_backup_time() {
        let parsed = parse_backup_time("app-2024-03-05T06-07-08.009.log", "app-", ".log").unwrap();
        assert_eq!(parsed.to_string(), "2024-03-05 06:07:08.009");

        assert!(parse_backup_time("app.log", "app-", ".log").is_none());
        assert!(parse_backup_time("app-garbage.log", "app-", ".log").is_none());
        assert!(parse_backup_time(
            "app-2024-03-05T06-07-08.009.log.gz",
            "app-",
            ".log.gz"
        )
        .is_some());
    }
}
