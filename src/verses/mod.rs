//! Daily verse plan.
//!
//! Maps each calendar day onto a fixed, ordered list of scripture references,
//! cycling through the list from an anchor date. Days on or before the anchor
//! all map to the first entry.

mod reference;

pub use reference::{parse_reference, ScriptureRef};

use serde::Serialize;
use std::borrow::Cow;
use std::path::Path;

use crate::constants;
use crate::error::{Error, Result};
use crate::types::CalendarDate;

/// Built-in reference list.
pub static DEFAULT_REFERENCES: &[&str] = &[
    "John 3:16",
    "Psalm 23:1",
    "Philippians 4:13",
    "Jeremiah 29:11",
    "Romans 8:28",
    "Proverbs 3:5-6",
    "Isaiah 40:31",
    "Joshua 1:9",
    "Matthew 11:28",
    "Psalm 46:1",
    "2 Corinthians 5:17",
    "Galatians 5:22-23",
    "Hebrews 11:1",
    "Romans 12:2",
    "1 John 4:19",
    "Ephesians 2:8-9",
    "Lamentations 3:22-23",
    "Micah 6:8",
    "Matthew 6:33",
    "Psalm 119:105",
    "Isaiah 41:10",
    "John 14:6",
    "Romans 5:8",
    "1 Corinthians 13:4-7",
    "Psalm 27:1",
    "Colossians 3:23",
    "James 1:5",
    "1 Peter 5:7",
    "Deuteronomy 31:6",
    "John 15:5",
    "Revelation 21:4",
];

/// One position in the verse plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersePlanEntry<'a> {
    /// 0-based position in the reference list.
    pub index: usize,
    /// Scripture reference text.
    pub reference: &'a str,
}

impl VersePlanEntry<'_> {
    /// Parse the reference text, if it is well-formed.
    pub fn parsed(&self) -> Option<ScriptureRef> {
        parse_reference(self.reference)
    }
}

/// A cyclic verse-of-the-day plan anchored at a start date.
#[derive(Debug, Clone)]
pub struct VersePlan {
    start: CalendarDate,
    references: Vec<Cow<'static, str>>,
}

impl Default for VersePlan {
    fn default() -> Self {
        Self {
            start: default_plan_start(),
            references: DEFAULT_REFERENCES.iter().map(|r| Cow::Borrowed(*r)).collect(),
        }
    }
}

impl VersePlan {
    /// Create a plan from an anchor date and an ordered reference list.
    pub fn new(start: CalendarDate, references: Vec<String>) -> Result<Self> {
        if references.is_empty() {
            return Err(Error::config(
                "verse plan has no references",
                "Provide at least one scripture reference",
            ));
        }
        for r in &references {
            if parse_reference(r).is_none() {
                tracing::warn!("Verse plan entry {r:?} does not look like a scripture reference");
            }
        }
        Ok(Self {
            start,
            references: references.into_iter().map(Cow::Owned).collect(),
        })
    }

    /// The built-in reference list anchored at `start`.
    #[must_use]
    pub fn with_start(start: CalendarDate) -> Self {
        Self { start, ..Self::default() }
    }

    /// Load a JSON array of reference strings from `path`.
    pub fn from_json_file(start: CalendarDate, path: &Path) -> Result<Self> {
        let text = fs_err::read_to_string(path).map_err(|e| Error::io(e, path.to_path_buf()))?;
        let references: Vec<String> = serde_json::from_str(&text)
            .map_err(|e| Error::parse(format!("Invalid verse list: {e}"), path.to_path_buf()))?;
        let plan = Self::new(start, references)?;
        tracing::info!("Loaded {} verse plan entries from {}", plan.len(), path.display());
        Ok(plan)
    }

    /// Anchor date.
    pub const fn start(&self) -> CalendarDate {
        self.start
    }

    /// Number of references in the cycle.
    pub fn len(&self) -> usize {
        self.references.len()
    }

    /// Whether the plan has no references. Never true for a constructed plan.
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    /// Plan entry for `date`.
    pub fn entry_for_date(&self, date: impl Into<CalendarDate>) -> VersePlanEntry<'_> {
        let index = plan_index(date.into().days_since(self.start), self.len());
        VersePlanEntry {
            index,
            reference: &self.references[index],
        }
    }

    /// Scripture reference for `date`.
    pub fn verse_for_date(&self, date: impl Into<CalendarDate>) -> &str {
        self.entry_for_date(date).reference
    }
}

/// Scripture reference for `date` on the built-in plan.
pub fn verse_for_date(date: impl Into<CalendarDate>) -> &'static str {
    let diff = date.into().days_since(default_plan_start());
    DEFAULT_REFERENCES[plan_index(diff, DEFAULT_REFERENCES.len())]
}

/// Position in a cycle of `len` entries, `diff` days after the anchor.
fn plan_index(diff: i64, len: usize) -> usize {
    match usize::try_from(diff) {
        Ok(days) if days > 0 && len > 0 => days % len,
        _ => 0,
    }
}

/// Built-in anchor date.
pub fn default_plan_start() -> CalendarDate {
    constants::verses::DEFAULT_PLAN_START
        .parse()
        .unwrap_or_else(|_| CalendarDate::from(chrono::NaiveDate::default()))
}
