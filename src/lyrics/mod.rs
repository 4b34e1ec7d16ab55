//! Lyric text cleanup.
//!
//! Hymn text pasted from PDF or DOCX exports drags along font table names,
//! stray punctuation, stanza numbers and page-number artifacts. [`clean_lyrics`]
//! strips those and normalizes blank-line runs. Running it twice changes
//! nothing.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::lyrics::{BLANK_RUN_COLLAPSE, FONT_ARTIFACT_PREFIXES};

/// `-12` artifact prefixes, possibly repeated.
#[allow(clippy::expect_used)]
static RE_DASH_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:-\d+\s*)+").expect("valid regex: RE_DASH_PREFIX")
});

/// Lines made only of punctuation and symbols.
#[allow(clippy::expect_used)]
static RE_PUNCT_ONLY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{P}\p{S}\s]+$").expect("valid regex: RE_PUNCT_ONLY")
});

/// `Verse 2`, `Stanza 3:`, `Hymn 510.` headers.
#[allow(clippy::expect_used)]
static RE_STANZA_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:verse|stanza|hymn)\s*#?\d+\s*[.:)]?$").expect("valid regex: RE_STANZA_HEADER")
});

/// Purely numeric lines.
#[allow(clippy::expect_used)]
static RE_NUMERIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+$").expect("valid regex: RE_NUMERIC")
});

/// Clean pasted hymn text.
pub fn clean_lyrics(text: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();

    for raw in text.lines() {
        let line = raw.trim_end();
        if line.trim().is_empty() {
            lines.push("");
            continue;
        }

        let line = RE_DASH_PREFIX
            .find(line.trim_start())
            .map_or(line, |m| &line.trim_start()[m.end()..]);
        if line.trim().is_empty() || is_artifact(line.trim()) {
            continue;
        }
        lines.push(line);
    }

    collapse_blank_runs(&lines).trim().to_string()
}

fn is_artifact(line: &str) -> bool {
    FONT_ARTIFACT_PREFIXES.iter().any(|p| line.starts_with(p))
        || RE_PUNCT_ONLY.is_match(line)
        || RE_STANZA_HEADER.is_match(line)
        || RE_NUMERIC.is_match(line)
}

fn collapse_blank_runs(lines: &[&str]) -> String {
    let mut out = String::new();
    let mut run = 0usize;

    let flush = |out: &mut String, run: usize| {
        let keep = if run >= BLANK_RUN_COLLAPSE { 1 } else { run };
        for _ in 0..keep {
            out.push('\n');
        }
    };

    for line in lines {
        if line.is_empty() {
            run += 1;
            continue;
        }
        flush(&mut out, run);
        run = 0;
        out.push_str(line);
        out.push('\n');
    }

    out
}
