use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A single access-log line parsed into its constituent fields.
///
/// Instances exist only as the output of a successful parse: there is no
/// partially-populated record. Fields are stored exactly as they appeared
/// in the line; nothing is decoded, normalised or converted to another
/// time zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Client address literal, IPv4 or IPv6, taken verbatim.
    pub client_address: String,
    /// RFC 1413 identity token; `"-"` means absent.
    pub identity: String,
    /// Authenticated user name; `"-"` means absent.
    pub username: String,
    /// Request timestamp carrying the line's own UTC offset.
    pub timestamp: DateTime<FixedOffset>,
    /// HTTP method token, any non-whitespace sequence.
    pub method: String,
    /// Request path including any query string, verbatim.
    pub request_path: String,
    /// Protocol token, e.g. `HTTP/1.1`.
    pub protocol: String,
    /// Status code, three decimal digits by format contract.
    pub status_code: u16,
    /// Response size in bytes; the literal `-` token maps to 0.
    pub bytes_sent: u64,
    /// Referer header value; may be empty.
    pub referer: String,
    /// User-Agent header value; may be empty.
    pub user_agent: String,
}

/// One ranked group in a top-N listing: the grouped value and the number
/// of records that carried it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupCount {
    /// The grouped field value (a URL or a client address).
    pub value: String,
    /// Number of records in the group.
    pub count: u64,
}

impl GroupCount {
    pub fn new(value: impl Into<String>, count: u64) -> Self {
        Self {
            value: value.into(),
            count,
        }
    }
}

/// Summary statistics computed over a collection of [`LogRecord`]s.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    /// Number of distinct client addresses (exact string equality).
    pub unique_address_count: usize,
    /// Up to three most requested URLs, descending by count.
    pub top_urls: Vec<GroupCount>,
    /// Up to three most active client addresses, descending by count.
    pub top_addresses: Vec<GroupCount>,
}
