//! Log file discovery and line loading.
//!
//! Reads access-log files from disk and converts their lines into
//! [`LogRecord`]s, counting the lines that fail to parse so the caller can
//! surface them.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use logstat_core::error::{LogStatError, Result};
use logstat_core::models::LogRecord;
use logstat_core::parser::LineParser;
use tracing::{debug, warn};

// ── Public API ────────────────────────────────────────────────────────────────

/// Outcome of loading one or more log files through the parser.
#[derive(Debug, Clone, Default)]
pub struct LoadedLog {
    /// Records from every line that matched the grammar, in file order.
    pub records: Vec<LogRecord>,
    /// Total number of lines read across all files.
    pub lines_read: usize,
    /// Number of lines rejected by the parser.
    pub lines_rejected: usize,
}

/// Find the log files to analyse under `path`, sorted by path.
///
/// A regular file is returned as the only element regardless of its
/// extension. A directory is walked recursively collecting `.log` files.
pub fn find_log_files(path: &Path) -> Vec<PathBuf> {
    if path.is_file() {
        return vec![path.to_path_buf()];
    }

    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(path)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry.file_type().is_file()
                && entry
                    .path()
                    .extension()
                    .map(|ext| ext == "log")
                    .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files
}

/// Load every log file under `path` and parse its lines into records.
///
/// Lines that fail to parse are counted in [`LoadedLog::lines_rejected`]
/// and traced at debug level; they never abort the batch. Errors are
/// reserved for the filesystem: a missing path, a directory with no log
/// files, or an unreadable file.
pub fn load_records(path: &Path) -> Result<LoadedLog> {
    if !path.exists() {
        return Err(LogStatError::LogPathNotFound(path.to_path_buf()));
    }

    let files = find_log_files(path);
    if files.is_empty() {
        warn!("No log files found in {}", path.display());
        return Err(LogStatError::NoLogFiles(path.to_path_buf()));
    }

    let parser = LineParser::new();
    let mut loaded = LoadedLog::default();

    for file_path in &files {
        process_single_file(file_path, &parser, &mut loaded)?;
    }

    debug!(
        "Loaded {} records from {} files ({} lines rejected)",
        loaded.records.len(),
        files.len(),
        loaded.lines_rejected,
    );

    Ok(loaded)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Read one file line by line, accumulating records and rejection counts
/// into `loaded`.
fn process_single_file(file_path: &Path, parser: &LineParser, loaded: &mut LoadedLog) -> Result<()> {
    let file = std::fs::File::open(file_path).map_err(|source| LogStatError::FileRead {
        path: file_path.to_path_buf(),
        source,
    })?;

    let reader = std::io::BufReader::new(file);
    for line_result in reader.lines() {
        let line = line_result.map_err(|source| LogStatError::FileRead {
            path: file_path.to_path_buf(),
            source,
        })?;

        loaded.lines_read += 1;
        match parser.parse_line(&line) {
            Ok(record) => loaded.records.push(record),
            Err(_) => {
                loaded.lines_rejected += 1;
                debug!(
                    "Rejected malformed line {} in {}",
                    loaded.lines_read,
                    file_path.display()
                );
            }
        }
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn write_log(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        path
    }

    fn sample_line(addr: &str, url: &str) -> String {
        format!(
            r#"{addr} - - [10/Jul/2018:22:21:28 +0200] "GET {url} HTTP/1.1" 200 1024 "-" "Agent""#
        )
    }

    // ── find_log_files ────────────────────────────────────────────────────────

    #[test]
    fn test_find_log_files_in_flat_dir() {
        let dir = TempDir::new().unwrap();
        write_log(dir.path(), "a.log", &["x"]);
        write_log(dir.path(), "b.log", &["x"]);
        write_log(dir.path(), "notes.txt", &["x"]);

        let files = find_log_files(dir.path());
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|p| p.extension().unwrap() == "log"));
    }

    #[test]
    fn test_find_log_files_recursive() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("2018").join("july");
        std::fs::create_dir_all(&sub).unwrap();
        write_log(dir.path(), "root.log", &["x"]);
        write_log(&sub, "nested.log", &["x"]);

        let files = find_log_files(dir.path());
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_find_log_files_sorted() {
        let dir = TempDir::new().unwrap();
        write_log(dir.path(), "c.log", &["x"]);
        write_log(dir.path(), "a.log", &["x"]);
        write_log(dir.path(), "b.log", &["x"]);

        let files = find_log_files(dir.path());
        let names: Vec<&str> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.log", "b.log", "c.log"]);
    }

    #[test]
    fn test_find_log_files_single_file_any_extension() {
        let dir = TempDir::new().unwrap();
        let path = write_log(dir.path(), "access.txt", &["x"]);

        // A file given directly is used as-is, extension notwithstanding.
        let files = find_log_files(&path);
        assert_eq!(files, vec![path]);
    }

    // ── load_records ──────────────────────────────────────────────────────────

    #[test]
    fn test_load_records_basic() {
        let dir = TempDir::new().unwrap();
        let line = sample_line("1.1.1.1", "/home");
        let path = write_log(dir.path(), "access.log", &[&line]);

        let loaded = load_records(&path).unwrap();
        assert_eq!(loaded.records.len(), 1);
        assert_eq!(loaded.lines_read, 1);
        assert_eq!(loaded.lines_rejected, 0);
        assert_eq!(loaded.records[0].client_address, "1.1.1.1");
        assert_eq!(loaded.records[0].request_path, "/home");
    }

    #[test]
    fn test_load_records_counts_rejected_lines() {
        let dir = TempDir::new().unwrap();
        let good = sample_line("1.1.1.1", "/home");
        let path = write_log(
            dir.path(),
            "access.log",
            &["not a log line", &good, "also garbage"],
        );

        let loaded = load_records(&path).unwrap();
        assert_eq!(loaded.records.len(), 1);
        assert_eq!(loaded.lines_read, 3);
        assert_eq!(loaded.lines_rejected, 2);
    }

    #[test]
    fn test_load_records_preserves_file_order() {
        let dir = TempDir::new().unwrap();
        let first = sample_line("1.1.1.1", "/first");
        let second = sample_line("2.2.2.2", "/second");
        let path = write_log(dir.path(), "access.log", &[&first, &second]);

        let loaded = load_records(&path).unwrap();
        assert_eq!(loaded.records[0].request_path, "/first");
        assert_eq!(loaded.records[1].request_path, "/second");
    }

    #[test]
    fn test_load_records_multiple_files_in_path_order() {
        let dir = TempDir::new().unwrap();
        write_log(dir.path(), "b.log", &[&sample_line("2.2.2.2", "/b")]);
        write_log(dir.path(), "a.log", &[&sample_line("1.1.1.1", "/a")]);

        let loaded = load_records(dir.path()).unwrap();
        assert_eq!(loaded.records.len(), 2);
        // a.log sorts before b.log, so its record comes first.
        assert_eq!(loaded.records[0].request_path, "/a");
        assert_eq!(loaded.records[1].request_path, "/b");
    }

    #[test]
    fn test_load_records_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = write_log(dir.path(), "empty.log", &[]);

        let loaded = load_records(&path).unwrap();
        assert!(loaded.records.is_empty());
        assert_eq!(loaded.lines_read, 0);
        assert_eq!(loaded.lines_rejected, 0);
    }

    #[test]
    fn test_load_records_missing_path() {
        let err = load_records(Path::new("/tmp/does-not-exist-logstat-test")).unwrap_err();
        assert!(matches!(err, LogStatError::LogPathNotFound(_)));
    }

    #[test]
    fn test_load_records_directory_without_log_files() {
        let dir = TempDir::new().unwrap();
        write_log(dir.path(), "readme.md", &["hello"]);

        let err = load_records(dir.path()).unwrap_err();
        assert!(matches!(err, LogStatError::NoLogFiles(_)));
    }
}
