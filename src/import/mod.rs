//! Programme spreadsheet import.
//!
//! Turns the raw cells of an uploaded table into dated programme records.
//! Rows whose date or description cannot be resolved are skipped and counted,
//! so one bad row never aborts a batch.

mod date;
mod header;

pub use date::{parse_flexible_date, parse_flexible_date_in_year};
pub use header::{find_header, HeaderMap};

use serde::Serialize;
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::CalendarDate;

/// A programme row resolved from an imported table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportRecord {
    /// Date of the activity.
    pub date: CalendarDate,
    /// What is happening.
    pub description: String,
    /// Where it happens, if given.
    pub venue: Option<String>,
    /// Who leads it, if given.
    pub lead: Option<String>,
}

/// Outcome of resolving the rows below a header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    /// Rows that resolved to records, in table order.
    pub records: Vec<ImportRecord>,
    /// 0-based indices of non-blank rows that could not be resolved.
    pub skipped: Vec<usize>,
}

/// Resolve every row after `header` into records.
pub fn resolve_rows<R, S>(rows: &[R], header: &HeaderMap, default_year: i32) -> ImportSummary
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut summary = ImportSummary::default();

    for (idx, row) in rows.iter().enumerate().skip(header.row + 1) {
        let cells = row.as_ref();
        if cells.iter().all(|c| c.as_ref().trim().is_empty()) {
            continue;
        }

        let cell = |col: usize| cells.get(col).map_or("", |c| c.as_ref().trim());
        let optional = |col: Option<usize>| {
            col.map(cell).filter(|v| !v.is_empty()).map(str::to_string)
        };

        let description = cell(header.description);
        let date = parse_flexible_date_in_year(cell(header.date), default_year);

        match date {
            Some(date) if !description.is_empty() => summary.records.push(ImportRecord {
                date,
                description: description.to_string(),
                venue: optional(header.venue),
                lead: optional(header.lead),
            }),
            _ => {
                tracing::debug!("Skipping import row {idx}: date={:?} description={description:?}", cell(header.date));
                summary.skipped.push(idx);
            }
        }
    }

    summary
}

/// Read every record of a CSV file as raw cells.
///
/// No header is assumed and rows may have differing lengths.
pub fn read_csv_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| Error::parse(format!("Cannot open CSV: {e}"), path.to_path_buf()))?;

    reader
        .records()
        .map(|record| {
            record
                .map(|r| r.iter().map(str::to_string).collect())
                .map_err(|e| Error::parse(format!("Malformed CSV: {e}"), path.to_path_buf()))
        })
        .collect()
}

/// Read a CSV file, locate its header and resolve its rows.
pub fn import_csv(path: &Path, default_year: i32) -> Result<ImportSummary> {
    let rows = read_csv_rows(path)?;
    let header = find_header(&rows)?;
    let summary = resolve_rows(&rows, &header, default_year);
    tracing::info!(
        "Imported {} rows from {} ({} skipped)",
        summary.records.len(),
        path.display(),
        summary.skipped.len()
    );
    Ok(summary)
}
