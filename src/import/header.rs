//! Header row detection for programme spreadsheets.
//!
//! Exported sheets often start with a title block, blank rows or a logo cell
//! before the real header, so the header is searched for rather than assumed
//! to be the first row.

use serde::Serialize;

use crate::constants::import::{
    DATE_TOKEN, DESCRIPTION_TOKENS, HEADER_SCAN_ROWS, LEAD_TOKEN, VENUE_TOKEN,
};
use crate::error::ImportError;

/// Location of the header row and of each known column within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeaderMap {
    /// 0-based index of the header row.
    pub row: usize,
    /// Date column.
    pub date: usize,
    /// Description (or activities) column.
    pub description: usize,
    /// Venue column, if present.
    pub venue: Option<usize>,
    /// Lead column, if present.
    pub lead: Option<usize>,
}

/// Trim, drop a byte-order mark and upper-case a cell for comparison.
fn normalize_cell(cell: &str) -> String {
    cell.trim().trim_start_matches('\u{feff}').trim().to_uppercase()
}

/// Find the header row within the first rows of a table.
pub fn find_header<R, S>(rows: &[R]) -> Result<HeaderMap, ImportError>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let scanned = rows.len().min(HEADER_SCAN_ROWS);

    for (row, cells) in rows.iter().take(HEADER_SCAN_ROWS).enumerate() {
        let cells: Vec<String> = cells.as_ref().iter().map(|c| normalize_cell(c.as_ref())).collect();
        let joined = cells.join(" ");
        if !joined.contains(DATE_TOKEN)
            || !DESCRIPTION_TOKENS.iter().any(|t| joined.contains(*t))
        {
            continue;
        }

        let column = |token: &str| cells.iter().position(|c| c.contains(token));
        let (Some(date), Some(description)) = (
            column(DATE_TOKEN),
            DESCRIPTION_TOKENS.iter().find_map(|t| column(*t)),
        ) else {
            continue;
        };

        tracing::debug!("Header found at row {row}: date={date} description={description}");
        return Ok(HeaderMap {
            row,
            date,
            description,
            venue: column(VENUE_TOKEN),
            lead: column(LEAD_TOKEN),
        });
    }

    Err(ImportError::NoHeader { scanned })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn table(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter().map(|r| r.iter().map(|c| (*c).to_string()).collect()).collect()
    }

    #[test]
    fn test_header_after_junk_rows() {
        let rows = table(&[
            &["GRACE CHURCH 2026 PROGRAMME", "", ""],
            &[],
            &["\u{feff}  Date ", "Activities", "Venue", "Lead / Contact"],
            &["12 March 2026", "Choir rehearsal", "Hall", "Ama"],
        ]);
        let header = find_header(&rows).unwrap();
        assert_eq!(header.row, 2);
        assert_eq!(header.date, 0);
        assert_eq!(header.description, 1);
        assert_eq!(header.venue, Some(2));
        assert_eq!(header.lead, Some(3));
    }

    #[test]
    fn test_description_synonym_and_optional_columns() {
        let rows = table(&[&["Description", "Event Date"]]);
        let header = find_header(&rows).unwrap();
        assert_eq!(header.date, 1);
        assert_eq!(header.description, 0);
        assert_eq!(header.venue, None);
        assert_eq!(header.lead, None);
    }

    #[test]
    fn test_requires_both_tokens() {
        let rows = table(&[&["Date", "Venue"], &["Date only"]]);
        assert_eq!(find_header(&rows), Err(ImportError::NoHeader { scanned: 2 }));
    }

    #[test]
    fn test_scan_window_is_limited() {
        let mut rows = vec![vec!["notes".to_string()]; 30];
        rows.push(vec!["Date".into(), "Activities".into()]);
        assert_eq!(
            find_header(&rows),
            Err(ImportError::NoHeader { scanned: HEADER_SCAN_ROWS })
        );

        rows.truncate(HEADER_SCAN_ROWS - 1);
        rows.push(vec!["Date".into(), "Activities".into()]);
        assert_eq!(find_header(&rows).unwrap().row, HEADER_SCAN_ROWS - 1);
    }
}
