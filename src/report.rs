// src/report.rs
// =============================================================================
// Prints level reports, either as a text block or as one JSON line.
//
// Text block:
//
//              LEVEL1: (found no new links)
//     [/, /a, /b]
//
// The note only appears when the level found nothing new.
// =============================================================================

use anyhow::Result;
use std::io::Write;

use crate::crawl::LevelReport;

/// Writes one level to `out` in the chosen format
pub fn write_level<W: Write>(out: &mut W, report: &LevelReport, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer(&mut *out, report)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", format_level(report))?;
    }
    out.flush()?;
    Ok(())
}

fn format_level(report: &LevelReport) -> String {
    let note = if report.found_new_links {
        ""
    } else {
        " (found no new links)"
    };
    format!(
        "\n\t\t LEVEL{}:{}\n{}",
        report.level,
        note,
        format_links(&report.links)
    )
}

// [/, /a, /b]
fn format_links(links: &[String]) -> String {
    format!("[{}]", links.join(", "))
}
