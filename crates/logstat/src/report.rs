//! Report rendering for the console.

use logstat_core::error::Result;
use logstat_data::analysis::LogAnalysis;

/// Render the analysis as the plain-text console report.
pub fn render_text(analysis: &LogAnalysis) -> String {
    let summary = &analysis.summary;
    let mut out = String::new();

    out.push_str(&format!(
        "Unique IP Addresses: {}\n",
        summary.unique_address_count
    ));

    out.push_str("\nTop 3 URLs:\n");
    for group in &summary.top_urls {
        out.push_str(&format!("  {}: {} visits\n", group.value, group.count));
    }

    out.push_str("\nTop 3 Active IPs:\n");
    for group in &summary.top_addresses {
        out.push_str(&format!("  {}: {} requests\n", group.value, group.count));
    }

    if analysis.metadata.lines_rejected > 0 {
        out.push_str(&format!(
            "\nSkipped {} malformed lines out of {} total\n",
            analysis.metadata.lines_rejected, analysis.metadata.lines_read
        ));
    }

    out
}

/// Render the analysis (summary plus run metadata) as pretty-printed JSON.
pub fn render_json(analysis: &LogAnalysis) -> Result<String> {
    Ok(serde_json::to_string_pretty(analysis)?)
}
