use anyhow::Result;
use breakpoints::Breakpoints;
use serde_json::json;

use crate::workflow::{Report, TableRow};

/// Print a plain-text representation of the report.
pub(crate) fn print_plain(report: &Report) {
    print!("{}", format_plain(report));
}

pub(crate) fn format_plain(report: &Report) -> String {
    match report {
        Report::Query { query, .. } => format!("{query}\n"),
        Report::Keys(breakpoints) => format_keys(breakpoints),
        Report::Table(rows) => rows.iter().map(format_row).collect(),
    }
}

fn format_keys(breakpoints: &Breakpoints) -> String {
    breakpoints
        .values()
        .iter()
        .map(|(key, width)| format!("{key}\t{width}{}\n", breakpoints.unit()))
        .collect()
}

fn format_row(row: &TableRow) -> String {
    let mut out = format!("{}\t{}\n", row.key, row.width);
    out.push_str(&format!("  up    {}\n", row.up));
    out.push_str(&format!("  down  {}\n", row.down));
    out.push_str(&format!("  only  {}\n", row.only));
    if let Some(not) = &row.not {
        out.push_str(&format!("  not   {not}\n"));
    }
    out
}

/// Format the report as a JSON string.
pub(crate) fn format_report_json(report: &Report) -> Result<String> {
    let payload = match report {
        Report::Query { command, query } => json!({
            "command": command,
            "query": query,
        }),
        Report::Keys(breakpoints) => serde_json::to_value(breakpoints)?,
        Report::Table(rows) => serde_json::to_value(rows)?,
    };

    Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the report.
pub(crate) fn print_json(report: &Report) -> Result<()> {
    println!("{}", format_report_json(report)?);
    Ok(())
}
