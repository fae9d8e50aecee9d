//! Aggregate statistics over parsed log records.
//!
//! Reduces a collection of [`LogRecord`]s to the unique-visitor count and
//! the top-3 URL and client-address listings.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use logstat_core::models::{AnalysisSummary, GroupCount, LogRecord};

/// Number of groups reported in each top listing.
pub const TOP_N: usize = 3;

/// Compute summary statistics over `records`.
///
/// Grouping uses exact string equality throughout: query strings make URLs
/// distinct, and textually different spellings of the same IPv6 address
/// count as different visitors. Never fails; an empty slice produces an
/// empty summary.
pub fn analyse(records: &[LogRecord]) -> AnalysisSummary {
    let unique_address_count = records
        .iter()
        .map(|r| r.client_address.as_str())
        .collect::<HashSet<_>>()
        .len();

    AnalysisSummary {
        unique_address_count,
        top_urls: rank_top(records.iter().map(|r| r.request_path.as_str()), TOP_N),
        top_addresses: rank_top(records.iter().map(|r| r.client_address.as_str()), TOP_N),
    }
}

/// Group `values`, count occurrences, and return the `limit` largest groups
/// in descending count order.
///
/// Ties are deterministic: groups accumulate in first-occurrence order and
/// the sort is stable, so equal counts keep the order in which each value
/// was first seen in the input.
fn rank_top<'a, I>(values: I, limit: usize) -> Vec<GroupCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, u64)> = Vec::new();

    for value in values {
        match index.entry(value) {
            Entry::Occupied(slot) => groups[*slot.get()].1 += 1,
            Entry::Vacant(slot) => {
                slot.insert(groups.len());
                groups.push((value, 1));
            }
        }
    }

    groups.sort_by(|a, b| b.1.cmp(&a.1));
    groups.truncate(limit);
    groups
        .into_iter()
        .map(|(value, count)| GroupCount::new(value, count))
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
