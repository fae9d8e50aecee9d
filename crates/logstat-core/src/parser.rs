//! Access-log line parsing.
//!
//! Converts one Combined Log Format line into a [`LogRecord`], or rejects
//! it. The parser holds no mutable state: the two regexes are compiled once
//! and each `parse_line` call is independent.

use chrono::DateTime;
use regex::Regex;

use crate::error::ParseRejection;
use crate::models::LogRecord;

/// Combined Log Format timestamp, e.g. `10/Jul/2018:22:21:28 +0200`.
const TIMESTAMP_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";

/// Outer line structure: whitespace-delimited tokens with bracketed and
/// quoted sub-fields. Quoted fields cannot contain quotes — the format has
/// no escaping.
const LINE_PATTERN: &str = r#"^(?P<addr>\S+) (?P<identity>\S+) (?P<user>\S+) \[(?P<time>[^\]]+)\] "(?P<request>[^"]+)" (?P<status>\d{3}) (?P<bytes>\S+) "(?P<referer>[^"]*)" "(?P<agent>[^"]*)"$"#;

/// The quoted request sub-field: exactly three tokens.
const REQUEST_PATTERN: &str = r"^(?P<method>\S+)\s+(?P<path>\S+)\s+(?P<protocol>\S+)$";

/// Stateless parser for access-log lines.
pub struct LineParser {
    line_re: Regex,
    request_re: Regex,
}

impl LineParser {
    pub fn new() -> Self {
        Self {
            line_re: Regex::new(LINE_PATTERN).expect("regex is valid"),
            request_re: Regex::new(REQUEST_PATTERN).expect("regex is valid"),
        }
    }

    /// Parse a single access-log line, newline already stripped.
    ///
    /// Any structural mismatch, a request sub-field that is not exactly
    /// three tokens, an unparsable timestamp or an unparsable numeric field
    /// yields [`ParseRejection`]. Well-formed but semantically unusual
    /// input (unknown method, out-of-range status code) still parses.
    pub fn parse_line(&self, line: &str) -> Result<LogRecord, ParseRejection> {
        let caps = self.line_re.captures(line).ok_or(ParseRejection)?;

        let request_caps = self
            .request_re
            .captures(&caps["request"])
            .ok_or(ParseRejection)?;

        let timestamp = DateTime::parse_from_str(&caps["time"], TIMESTAMP_FORMAT)
            .map_err(|_| ParseRejection)?;

        let status_code: u16 = caps["status"].parse().map_err(|_| ParseRejection)?;

        // A `-` byte count means "nothing sent" (e.g. 304 responses).
        let bytes_sent: u64 = match &caps["bytes"] {
            "-" => 0,
            digits => digits.parse().map_err(|_| ParseRejection)?,
        };

        Ok(LogRecord {
            client_address: caps["addr"].to_string(),
            identity: caps["identity"].to_string(),
            username: caps["user"].to_string(),
            timestamp,
            method: request_caps["method"].to_string(),
            request_path: request_caps["path"].to_string(),
            protocol: request_caps["protocol"].to_string(),
            status_code,
            bytes_sent,
            referer: caps["referer"].to_string(),
            user_agent: caps["agent"].to_string(),
        })
    }
}

impl Default for LineParser {
    fn default() -> Self {
        Self::new()
    }
}
