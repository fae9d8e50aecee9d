//! Top-level analysis pipeline.
//!
//! Chains the reader, the parser and the analyzer: load every line under a
//! path, drop the rejects, and reduce the surviving records to an
//! [`AnalysisSummary`] with metadata about the run.

use std::path::Path;

use chrono::Utc;
use logstat_core::error::Result;
use logstat_core::models::AnalysisSummary;
use tracing::{debug, warn};

use crate::analyzer::analyse;
use crate::reader::{find_log_files, load_records};

// ── Public types ──────────────────────────────────────────────────────────────

/// Metadata produced alongside the analysis summary.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AnalysisMetadata {
    /// ISO-8601 timestamp when this result was generated.
    pub generated_at: String,
    /// Number of log files read.
    pub files_scanned: usize,
    /// Total lines read across all files.
    pub lines_read: usize,
    /// Lines rejected as malformed.
    pub lines_rejected: usize,
    /// Wall-clock seconds spent reading and parsing.
    pub load_time_seconds: f64,
    /// Wall-clock seconds spent computing the summary.
    pub analyse_time_seconds: f64,
}

/// The complete output of [`analyze_log`].
#[derive(Debug, Clone, serde::Serialize)]
pub struct LogAnalysis {
    /// The computed statistics.
    pub summary: AnalysisSummary,
    /// Metadata about this analysis run.
    pub metadata: AnalysisMetadata,
}

// ── Public function ───────────────────────────────────────────────────────────

/// Run the full analysis pipeline over the log file or directory at `path`.
///
/// 1. Discover and read the log files, parsing each line.
/// 2. Count and drop rejected lines.
/// 3. Reduce the surviving records to an [`AnalysisSummary`].
pub fn analyze_log(path: &Path) -> Result<LogAnalysis> {
    let load_start = std::time::Instant::now();
    let loaded = load_records(path)?;
    let load_time = load_start.elapsed().as_secs_f64();

    if loaded.lines_rejected > 0 {
        warn!(
            "Skipped {} malformed lines out of {} total",
            loaded.lines_rejected, loaded.lines_read
        );
    }

    let analyse_start = std::time::Instant::now();
    let summary = analyse(&loaded.records);
    let analyse_time = analyse_start.elapsed().as_secs_f64();

    debug!(
        "Analysed {} records: {} unique addresses",
        loaded.records.len(),
        summary.unique_address_count
    );

    let metadata = AnalysisMetadata {
        generated_at: Utc::now().to_rfc3339(),
        files_scanned: find_log_files(path).len(),
        lines_read: loaded.lines_read,
        lines_rejected: loaded.lines_rejected,
        load_time_seconds: load_time,
        analyse_time_seconds: analyse_time,
    };

    Ok(LogAnalysis { summary, metadata })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
