//! `Ministry` - liturgical calendar and import helper CLI.

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ministry::config::Config;
use ministry::import::{import_csv, parse_flexible_date_in_year};
use ministry::liturgy::{season_for_date, LiturgicalYear};
use ministry::lyrics::clean_lyrics;
use ministry::types::CalendarDate;

#[derive(Parser)]
#[command(name = "ministry")]
#[command(about = "Liturgical calendar, verse of the day and programme import helpers")]
#[command(version)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the liturgical season of a date (today if omitted)
    Season {
        /// Date as YYYY-MM-DD
        date: Option<CalendarDate>,
    },
    /// Show the key feast dates of a year (this year if omitted)
    Calendar {
        /// Calendar year
        year: Option<i32>,
    },
    /// Show the verse of the day (today if omitted)
    Verse {
        /// Date as YYYY-MM-DD
        date: Option<CalendarDate>,
    },
    /// Parse a free-form date cell
    ParseDate {
        /// Raw cell text, e.g. "12 to 14 March 2026"
        raw: String,
    },
    /// Import a programme CSV file
    Import {
        /// Path to the CSV file
        path: PathBuf,
    },
    /// Clean pasted hymn lyrics
    CleanLyrics {
        /// Path to a text file
        path: PathBuf,
    },
    /// Look up a hymn by number or title in the configured hymnal
    Hymn {
        /// Item title, e.g. "Hymn 649" or "Amazing Grace"
        title: String,
    },
}

/// Initialize tracing with output to stderr so stdout stays clean for results
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "ministry=warn".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce() -> String) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", text());
    }
    Ok(())
}

#[derive(Serialize)]
struct SeasonReport {
    date: CalendarDate,
    #[serde(flatten)]
    info: ministry::liturgy::SeasonInfo,
}

#[derive(Serialize)]
struct VerseReport<'a> {
    date: CalendarDate,
    index: usize,
    reference: &'a str,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();
    run(cli)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let json = cli.json;

    match cli.command {
        Commands::Season { date } => {
            let date = date.unwrap_or_else(CalendarDate::today);
            let info = *season_for_date(date).info();
            let report = SeasonReport { date, info };
            emit(json, &report, || {
                let colors = info.alternate_color.map_or_else(
                    || info.color.to_string(),
                    |alt| format!("{} (or {alt})", info.color),
                );
                format!("{date}: {}\nColour: {colors}\n{}", info.name, info.definition)
            })?;
        }
        Commands::Calendar { year } => {
            let year = year.unwrap_or_else(|| CalendarDate::today().year());
            let ly = LiturgicalYear::for_year(year)
                .with_context(|| format!("year {year} is outside the supported range"))?;
            emit(json, &ly, || {
                [
                    ("Epiphany", ly.epiphany),
                    ("Ash Wednesday", ly.ash_wednesday),
                    ("Palm Sunday", ly.palm_sunday),
                    ("Easter Sunday", ly.easter),
                    ("Day of Pentecost", ly.pentecost),
                    ("First Sunday of Advent", ly.advent_start),
                    ("Christmas Day", ly.christmas),
                ]
                .iter()
                .map(|(name, d)| format!("{name:<24}{d}"))
                .collect::<Vec<_>>()
                .join("\n")
            })?;
        }
        Commands::Verse { date } => {
            let date = date.unwrap_or_else(CalendarDate::today);
            let plan = Config::load()?.verse_plan()?;
            let entry = plan.entry_for_date(date);
            let report = VerseReport {
                date,
                index: entry.index,
                reference: entry.reference,
            };
            emit(json, &report, || format!("{date}: {}", entry.reference))?;
        }
        Commands::ParseDate { raw } => {
            let parsed = parse_flexible_date_in_year(&raw, Config::load()?.default_year());
            emit(json, &parsed, || {
                parsed.map_or_else(|| "unresolved".to_string(), |d| d.to_string())
            })?;
        }
        Commands::Import { path } => {
            let summary = import_csv(&path, Config::load()?.default_year())?;
            emit(json, &summary, || {
                let mut lines: Vec<String> = summary
                    .records
                    .iter()
                    .map(|r| {
                        format!(
                            "{}  {}  [{}]  {}",
                            r.date,
                            r.description,
                            r.venue.as_deref().unwrap_or("-"),
                            r.lead.as_deref().unwrap_or("-"),
                        )
                    })
                    .collect();
                lines.push(format!(
                    "{} imported, {} skipped",
                    summary.records.len(),
                    summary.skipped.len()
                ));
                lines.join("\n")
            })?;
        }
        Commands::CleanLyrics { path } => {
            let text = fs_err::read_to_string(&path)?;
            let cleaned = clean_lyrics(&text);
            emit(json, &cleaned, || cleaned.clone())?;
        }
        Commands::Hymn { title } => {
            let mut hymnal = Config::load()?.hymnal()?;
            let hymn = hymnal
                .lookup_from_title(&title)
                .with_context(|| format!("no hymn matches {title:?}"))?;
            emit(json, hymn, || format!("#{} {}\n\n{}", hymn.number, hymn.title, hymn.lyrics))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_bad_verse_plan_start_only_affects_verse() {
        std::env::set_var("VERSE_PLAN_START", "not-a-date");

        let lyrics = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(lyrics.path(), "Verse 1\nBe thou my vision").unwrap();

        for args in [
            vec!["ministry", "season", "2026-04-05"],
            vec!["ministry", "calendar", "2026"],
            vec!["ministry", "parse-date", "12 to 14 March 2026"],
            vec!["ministry", "clean-lyrics", lyrics.path().to_str().unwrap()],
        ] {
            let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
            assert!(run(cli).is_ok(), "{args:?}");
        }

        let cli = Cli::try_parse_from(["ministry", "verse", "2026-04-05"]).unwrap();
        assert!(run(cli).is_err());

        std::env::remove_var("VERSE_PLAN_START");
    }
}
