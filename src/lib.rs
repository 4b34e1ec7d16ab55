//! `Ministry` - liturgical calendar and import heuristics for church ministry tools.
//!
//! Pure, synchronous building blocks used behind ministry management screens:
//! the liturgical season of a date, a cyclic verse-of-the-day plan, flexible
//! date parsing and header sniffing for programme spreadsheets, and cleanup of
//! pasted hymn lyrics.

pub mod config;
pub mod constants;
pub mod error;
pub mod hymnal;
pub mod import;
pub mod liturgy;
pub mod lyrics;
pub mod types;
pub mod verses;

pub use error::{Error, ImportError, Result};
pub use import::{find_header, parse_flexible_date, HeaderMap, ImportRecord};
pub use liturgy::{season_for_date, LiturgicalColor, LiturgicalSeason};
pub use lyrics::clean_lyrics;
pub use types::CalendarDate;
pub use verses::{verse_for_date, VersePlan};
