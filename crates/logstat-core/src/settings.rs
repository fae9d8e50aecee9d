use clap::Parser;
use std::path::PathBuf;

/// Summary statistics for web server access logs
#[derive(Parser, Debug, Clone)]
#[command(
    name = "logstat",
    about = "Summary statistics for web server access logs",
    version
)]
pub struct Settings {
    /// Access-log file, or a directory scanned recursively for .log files
    pub path: PathBuf,

    /// Output format
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    pub format: String,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,
}
