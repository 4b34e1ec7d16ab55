//! Application constants.
//!
//! Centralizes magic numbers and configuration values for better maintainability.

/// Tabular import constants.
pub mod import {
    /// Maximum number of leading rows inspected when looking for a header.
    pub const HEADER_SCAN_ROWS: usize = 25;

    /// Cell value marking a date that has not been decided yet.
    pub const TBD_SENTINEL: &str = "TBD";

    /// Header token identifying the date column.
    pub const DATE_TOKEN: &str = "DATE";

    /// Header tokens identifying the description column, in priority order.
    pub const DESCRIPTION_TOKENS: &[&str] = &["ACTIVITIES", "DESCRIPTION"];

    /// Header token identifying the venue column.
    pub const VENUE_TOKEN: &str = "VENUE";

    /// Header token identifying the lead column.
    pub const LEAD_TOKEN: &str = "LEAD";
}

/// Lyric cleanup constants.
pub mod lyrics {
    /// Line prefixes left behind by PDF/DOCX font tables.
    pub const FONT_ARTIFACT_PREFIXES: &[&str] = &[
        "Font:",
        "Times New Roman",
        "TimesNewRoman",
        "Arial",
        "Calibri",
        "Cambria",
        "Helvetica",
        "Symbol",
        "Wingdings",
    ];

    /// Consecutive blank lines at which a run is collapsed to a single blank.
    pub const BLANK_RUN_COLLAPSE: usize = 3;
}

/// Verse plan constants.
pub mod verses {
    /// Default anchor date (`YYYY-MM-DD`) of the daily verse plan.
    pub const DEFAULT_PLAN_START: &str = "2024-01-01";

    /// File name of a user-supplied verse list inside the config directory.
    pub const PLAN_FILE: &str = "verses.json";
}

/// Hymnal constants.
pub mod hymnal {
    /// Minimum fuzzy score for a title match.
    pub const MIN_TITLE_SCORE: i64 = 80;
}
