//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use chrono::Datelike;
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

use crate::constants;
use crate::error::{Error, Result};
use crate::hymnal::HymnalService;
use crate::types::CalendarDate;
use crate::verses::{default_plan_start, VersePlan};

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Anchor date of the daily verse plan
    pub verse_plan_start: CalendarDate,
    /// JSON file overriding the built-in verse list
    pub verse_plan_path: Option<PathBuf>,
    /// Path to hymnal directory containing curated .txt files
    pub hymnal_path: Option<PathBuf>,
    /// Year assumed for imported date ranges that omit one
    pub import_default_year: Option<i32>,
    /// Unparseable VERSE_PLAN_START, reported when the verse plan is built
    invalid_plan_start: Option<String>,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            verse_plan_start: default_plan_start(),
            verse_plan_path: None,
            hymnal_path: None,
            import_default_year: None,
            invalid_plan_start: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self::default();

        if let Ok(start) = env::var("VERSE_PLAN_START") {
            match start.parse() {
                Ok(date) => config.verse_plan_start = date,
                Err(_) => config.invalid_plan_start = Some(start),
            }
        }

        // Verse list: env var override, or <config dir>/ministry/verses.json when present
        config.verse_plan_path = env::var("VERSE_PLAN_PATH").ok().map_or_else(
            || {
                dirs::config_dir()
                    .map(|d| d.join(config.app_name()).join(constants::verses::PLAN_FILE))
                    .filter(|p| p.is_file())
            },
            |path| Some(expand_path(&path)),
        );

        // Hymnal path: env var override, or default ~/Documents/Hymnal/
        config.hymnal_path = env::var("HYMNAL_PATH").ok().map_or_else(
            || {
                dirs::home_dir()
                    .map(|h| h.join("Documents/Hymnal"))
                    .filter(|p| p.is_dir())
            },
            |path| {
                let p = expand_path(&path);
                p.is_dir().then_some(p)
            },
        );

        if let Ok(year) = env::var("IMPORT_DEFAULT_YEAR") {
            match year.trim().parse::<i32>() {
                Ok(y) => config.import_default_year = Some(y),
                Err(_) => tracing::warn!("Ignoring IMPORT_DEFAULT_YEAR {year:?}: not a year"),
            }
        }

        Ok(config)
    }

    /// Build the configured verse plan.
    pub fn verse_plan(&self) -> Result<VersePlan> {
        if let Some(start) = &self.invalid_plan_start {
            return Err(Error::config(
                format!("VERSE_PLAN_START {start:?} is not a date"),
                "Use the YYYY-MM-DD format, e.g. 2024-01-01",
            ));
        }
        match &self.verse_plan_path {
            Some(path) => VersePlan::from_json_file(self.verse_plan_start, path),
            None => Ok(VersePlan::with_start(self.verse_plan_start)),
        }
    }

    /// Hymnal service for the configured directory.
    pub fn hymnal(&self) -> Result<HymnalService> {
        self.hymnal_path.clone().map(HymnalService::new).ok_or_else(|| {
            Error::config(
                "no hymnal directory found",
                "Set HYMNAL_PATH to a folder of '#NUMBER - Title.txt' files",
            )
        })
    }

    /// Year used for imported ranges without one.
    pub fn default_year(&self) -> i32 {
        self.import_default_year
            .unwrap_or_else(|| chrono::Local::now().year())
    }
}

/// Expand a leading `~` in a configured path.
fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).to_string())
}
