//! Hymnal lookup over a directory of curated .txt hymn files.
//!
//! Files named `#NUMBER - Title.txt` are indexed (subdirectories included) and
//! their text is passed through [`clean_lyrics`] on load. Lookup is by hymn
//! number extracted from a title, falling back to a fuzzy title match.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::LazyLock;

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use regex::Regex;
use serde::Serialize;
use walkdir::WalkDir;

use crate::constants::hymnal::MIN_TITLE_SCORE;
use crate::lyrics::clean_lyrics;

/// Regex matching `#510` style hymn numbers.
#[allow(clippy::expect_used)]
static RE_HASH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"#(\d+)").expect("valid regex: RE_HASH")
});

/// Regex matching `Hymn 510` or `Hymn #510` patterns.
#[allow(clippy::expect_used)]
static RE_HYMN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)hymn\s*#?(\d+)").expect("valid regex: RE_HYMN")
});

/// Regex matching hymnal filenames like `#510 - Jesus Shall Reign`.
#[allow(clippy::expect_used)]
static RE_FILENAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(\d+)\s*-\s*(.+)$").expect("valid regex: RE_FILENAME")
});

/// A single hymn loaded from disk.
#[derive(Debug, Clone, Serialize)]
pub struct HymnEntry {
    /// Hymn number in the hymnal.
    pub number: u32,
    /// Display title of the hymn.
    pub title: String,
    /// Lowercased title for case-insensitive matching.
    #[serde(skip)]
    title_lower: String,
    /// Cleaned hymn text.
    pub lyrics: String,
}

/// Lazily loaded hymnal directory index.
pub struct HymnalService {
    hymnal_path: PathBuf,
    by_number: HashMap<u32, usize>,
    entries: Vec<HymnEntry>,
    loaded: bool,
}

impl HymnalService {
    /// Create a new hymnal service backed by the given directory path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            hymnal_path: path,
            by_number: HashMap::new(),
            entries: Vec::new(),
            loaded: false,
        }
    }

    /// Number of hymns indexed.
    pub fn len(&mut self) -> usize {
        self.ensure_loaded();
        self.entries.len()
    }

    /// Whether the hymnal has no hymns.
    pub fn is_empty(&mut self) -> bool {
        self.len() == 0
    }

    /// Try to match an item title to a hymn.
    ///
    /// Checks by extracted number first, then falls back to fuzzy title match.
    pub fn lookup_from_title(&mut self, item_title: &str) -> Option<&HymnEntry> {
        self.ensure_loaded();

        let idx = match extract_hymn_number(item_title).and_then(|num| self.by_number.get(&num)) {
            Some(&idx) => idx,
            None => self.lookup_by_title(item_title)?,
        };
        self.entries.get(idx)
    }

    fn ensure_loaded(&mut self) {
        if !self.loaded {
            self.load();
        }
    }

    fn load(&mut self) {
        self.loaded = true;

        if !self.hymnal_path.is_dir() {
            tracing::warn!("Hymnal directory {} does not exist", self.hymnal_path.display());
            return;
        }

        for entry in WalkDir::new(&self.hymnal_path)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(std::result::Result::ok)
        {
            let path = entry.path();
            if path.extension().is_none_or(|e| e != "txt") {
                continue;
            }

            let Some((number, title)) = path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(parse_hymnal_filename)
            else {
                continue;
            };

            let text = match fs_err::read_to_string(path) {
                Ok(t) => t,
                Err(e) => {
                    tracing::warn!("Skipping unreadable hymn file: {e}");
                    continue;
                }
            };

            let idx = self.entries.len();
            self.entries.push(HymnEntry {
                number,
                title_lower: title.to_lowercase(),
                title,
                lyrics: clean_lyrics(&text),
            });
            self.by_number.insert(number, idx);
        }

        tracing::info!("Loaded {} hymns from {}", self.entries.len(), self.hymnal_path.display());
    }

    fn lookup_by_title(&self, query: &str) -> Option<usize> {
        if self.entries.is_empty() {
            return None;
        }

        let query_lower = query.trim().to_lowercase();
        if query_lower.is_empty() {
            return None;
        }

        if let Some(idx) = self.entries.iter().position(|entry| entry.title_lower == query_lower) {
            return Some(idx);
        }

        // Substring match beats fuzzy; files are indexed in name order
        if let Some(idx) = self.entries.iter().position(|entry| {
            query_lower.contains(&entry.title_lower) || entry.title_lower.contains(&query_lower)
        }) {
            return Some(idx);
        }

        let matcher = SkimMatcherV2::default();
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(idx, entry)| {
                let score = matcher.fuzzy_match(&entry.title, query)?;
                (score >= MIN_TITLE_SCORE).then_some((score, idx))
            })
            .max_by_key(|(score, _)| *score)
            .map(|(_, idx)| idx)
    }
}

/// Extract a hymn number from an item title.
///
/// Recognizes patterns like `#510`, `Hymn #510`, `Hymn 510`.
fn extract_hymn_number(text: &str) -> Option<u32> {
    RE_HASH.captures(text)
        .or_else(|| RE_HYMN.captures(text))
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
}

/// Parse a hymnal filename like `#510 - Jesus Shall Reign` into (510, "Jesus Shall Reign").
fn parse_hymnal_filename(stem: &str) -> Option<(u32, String)> {
    let caps = RE_FILENAME.captures(stem)?;
    let number = caps.get(1)?.as_str().parse::<u32>().ok()?;
    let title = caps.get(2)?.as_str().trim().to_string();
    Some((number, title))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_extract_hymn_number() {
        assert_eq!(extract_hymn_number("#510 Jesus Shall Reign"), Some(510));
        assert_eq!(extract_hymn_number("Hymn #42 Amazing Grace"), Some(42));
        assert_eq!(extract_hymn_number("hymn 7"), Some(7));
        assert_eq!(extract_hymn_number("Call to Worship"), None);
    }

    #[test]
    fn test_parse_hymnal_filename() {
        assert_eq!(
            parse_hymnal_filename("#510 - Jesus Shall Reign"),
            Some((510, "Jesus Shall Reign".to_string()))
        );
        assert_eq!(
            parse_hymnal_filename("#42-Amazing Grace"),
            Some((42, "Amazing Grace".to_string()))
        );
        assert!(parse_hymnal_filename("510 - No Hash").is_none());
    }

    #[test]
    fn test_lookup_cleans_and_matches() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("#649 - Amazing Grace.txt"),
            "Verse 1\nAmazing grace! How sweet the sound\n-2 that saved a wretch like me!\n",
        )
        .unwrap();
        let nested = dir.path().join("Advent");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(nested.join("#88 - O Come, O Come, Emmanuel.txt"), "O come, O come, Emmanuel").unwrap();
        std::fs::write(dir.path().join("notes.md"), "ignored").unwrap();

        let mut svc = HymnalService::new(dir.path().to_path_buf());
        assert_eq!(svc.len(), 2);

        let hymn = svc.lookup_from_title("Hymn 649").unwrap();
        assert_eq!(hymn.title, "Amazing Grace");
        assert_eq!(hymn.lyrics, "Amazing grace! How sweet the sound\nthat saved a wretch like me!");

        assert_eq!(svc.lookup_from_title("o come, o come, emmanuel").unwrap().number, 88);
        assert!(svc.lookup_from_title("#999").is_none());
    }

    #[test]
    fn test_title_ties_resolve_deterministically() {
        let dir = tempfile::tempdir().unwrap();
        for (name, text) in [
            ("#700 - Holy, Holy, Holy Is the Lord.txt", "Long title"),
            ("#300 - Holy Spirit, Truth Divine.txt", "Spirit"),
            ("#100 - Holy, Holy, Holy.txt", "Short title"),
        ] {
            std::fs::write(dir.path().join(name), text).unwrap();
        }

        let mut svc = HymnalService::new(dir.path().to_path_buf());
        assert_eq!(svc.lookup_from_title("Holy, Holy, Holy").unwrap().number, 100);
        assert_eq!(svc.lookup_from_title("holy").unwrap().number, 100);

        let mut again = HymnalService::new(dir.path().to_path_buf());
        assert_eq!(again.lookup_from_title("holy, holy").unwrap().number, 100);
    }

    #[test]
    fn test_missing_directory_loads_gracefully() {
        let mut svc = HymnalService::new(PathBuf::from("/tmp/nonexistent_hymnal_dir_ministry_test"));
        assert!(svc.is_empty());
        assert!(svc.lookup_from_title("#999 Test").is_none());
    }
}
