//! Scripture reference parsing.

use serde::Serialize;
use std::fmt;

/// A parsed scripture reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptureRef {
    /// Book name (e.g., "Genesis", "1 John").
    pub book: String,
    /// Chapter number.
    pub chapter: u32,
    /// Starting verse, `None` for a whole chapter.
    pub start_verse: Option<u32>,
    /// Ending verse (same as start for single verse).
    pub end_verse: Option<u32>,
}

impl ScriptureRef {
    /// Create a reference for a single verse.
    pub fn single(book: impl Into<String>, chapter: u32, verse: u32) -> Self {
        Self {
            book: book.into(),
            chapter,
            start_verse: Some(verse),
            end_verse: Some(verse),
        }
    }

    /// Create a reference for a verse range.
    pub fn range(book: impl Into<String>, chapter: u32, start: u32, end: u32) -> Self {
        Self {
            book: book.into(),
            chapter,
            start_verse: Some(start),
            end_verse: Some(end),
        }
    }

    /// Create a reference to a whole chapter.
    pub fn chapter(book: impl Into<String>, chapter: u32) -> Self {
        Self {
            book: book.into(),
            chapter,
            start_verse: None,
            end_verse: None,
        }
    }
}

impl fmt::Display for ScriptureRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.start_verse, self.end_verse) {
            (Some(s), Some(e)) if s != e => write!(f, "{} {}:{}-{}", self.book, self.chapter, s, e),
            (Some(s), _) => write!(f, "{} {}:{}", self.book, self.chapter, s),
            (None, _) => write!(f, "{} {}", self.book, self.chapter),
        }
    }
}

/// Parse a scripture reference string.
///
/// Supports formats like:
/// - "Genesis 1:1"
/// - "Gen 1:1-5"
/// - "1 John 3:16"
/// - "Psalm 23"
pub fn parse_reference(input: &str) -> Option<ScriptureRef> {
    let input = input.trim();

    let (book, chapter_verse) = input.rsplit_once(' ')?;
    let book = book.trim();
    if book.is_empty() || !book.chars().any(char::is_alphabetic) {
        return None;
    }

    let Some((chapter, verses)) = chapter_verse.split_once(':') else {
        let chapter: u32 = chapter_verse.parse().ok()?;
        return Some(ScriptureRef::chapter(book, chapter));
    };
    let chapter: u32 = chapter.parse().ok()?;

    if let Some((start, end)) = verses.split_once('-') {
        let start: u32 = start.parse().ok()?;
        let end: u32 = end.parse().ok()?;
        (start <= end).then(|| ScriptureRef::range(book, chapter, start, end))
    } else {
        let verse: u32 = verses.parse().ok()?;
        Some(ScriptureRef::single(book, chapter, verse))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_scripture_ref_display() {
        assert_eq!(ScriptureRef::single("Genesis", 1, 1).to_string(), "Genesis 1:1");
        assert_eq!(ScriptureRef::range("Psalm", 23, 1, 6).to_string(), "Psalm 23:1-6");
        assert_eq!(ScriptureRef::chapter("Psalm", 23).to_string(), "Psalm 23");
    }

    #[test]
    fn test_parse_reference() {
        let single = parse_reference("1 John 3:16").unwrap();
        assert_eq!(single.book, "1 John");
        assert_eq!(single.chapter, 3);
        assert_eq!(single.start_verse, Some(16));

        let range = parse_reference("Psalm 23:1-6").unwrap();
        assert_eq!(range.book, "Psalm");
        assert_eq!(range.end_verse, Some(6));

        let chapter = parse_reference("Psalm 23").unwrap();
        assert_eq!(chapter.start_verse, None);
    }

    #[test]
    fn test_parse_reference_rejects_garbage() {
        assert!(parse_reference("").is_none());
        assert!(parse_reference("John").is_none());
        assert!(parse_reference("John 3:x").is_none());
        assert!(parse_reference("John 3:16-2").is_none());
        assert!(parse_reference("12 3:4").is_none());
    }
}
