//! Liturgical calendar: seasons, colours and the date intervals that bound them.
//!
//! The season table is static data; [`season_for_date`] only decides which row
//! applies.

mod easter;

pub use easter::{advent_start, easter_month_day, easter_sunday, LiturgicalYear};

use serde::Serialize;
use std::fmt;

use crate::types::CalendarDate;

/// Symbolic colour associated with a season or feast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LiturgicalColor {
    /// Penitence and preparation.
    Violet,
    /// Celebration and purity.
    White,
    /// Growth.
    Green,
    /// The Spirit and the Passion.
    Red,
    /// Festal alternative to white.
    Gold,
    /// Mourning.
    Black,
}

impl LiturgicalColor {
    /// Human-readable colour name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Violet => "Violet",
            Self::White => "White",
            Self::Green => "Green",
            Self::Red => "Red",
            Self::Gold => "Gold",
            Self::Black => "Black",
        }
    }
}

impl fmt::Display for LiturgicalColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named period of the Christian year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LiturgicalSeason {
    /// The four Sundays before Christmas.
    Advent,
    /// Christmas Day through January 5.
    ChristmasSeason,
    /// January 6.
    Epiphany,
    /// January 7 until Ash Wednesday.
    SeasonAfterEpiphany,
    /// Ash Wednesday until Palm Sunday.
    Lent,
    /// Palm Sunday until Easter.
    HolyWeek,
    /// Easter Sunday until Pentecost.
    EasterSeason,
    /// The Day of Pentecost.
    DayOfPentecost,
    /// The remainder of the year.
    OrdinaryTime,
}

/// Descriptive attributes of a season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeasonInfo {
    /// The season this row describes.
    pub season: LiturgicalSeason,
    /// Display name.
    pub name: &'static str,
    /// Primary liturgical colour.
    pub color: LiturgicalColor,
    /// Alternate colour, if the season has one.
    pub alternate_color: Option<LiturgicalColor>,
    /// One-sentence definition.
    pub definition: &'static str,
}

/// Season table, in calendar order starting from Advent.
static SEASONS: [SeasonInfo; 9] = [
    SeasonInfo {
        season: LiturgicalSeason::Advent,
        name: "Advent",
        color: LiturgicalColor::Violet,
        alternate_color: None,
        definition: "A season of expectant waiting and preparation for the coming of Christ at Christmas and at the end of the age.",
    },
    SeasonInfo {
        season: LiturgicalSeason::ChristmasSeason,
        name: "Christmas Season",
        color: LiturgicalColor::White,
        alternate_color: Some(LiturgicalColor::Gold),
        definition: "The twelve days celebrating the birth of Jesus Christ, from Christmas Day to the eve of Epiphany.",
    },
    SeasonInfo {
        season: LiturgicalSeason::Epiphany,
        name: "Epiphany",
        color: LiturgicalColor::White,
        alternate_color: Some(LiturgicalColor::Gold),
        definition: "The feast marking the revelation of Christ to the Gentiles in the visit of the Magi.",
    },
    SeasonInfo {
        season: LiturgicalSeason::SeasonAfterEpiphany,
        name: "Season after Epiphany",
        color: LiturgicalColor::Green,
        alternate_color: None,
        definition: "The weeks following Epiphany that explore how Christ is made known in his ministry and teaching.",
    },
    SeasonInfo {
        season: LiturgicalSeason::Lent,
        name: "Lent",
        color: LiturgicalColor::Violet,
        alternate_color: None,
        definition: "Forty days of repentance, fasting and self-examination in preparation for Easter.",
    },
    SeasonInfo {
        season: LiturgicalSeason::HolyWeek,
        name: "Holy Week",
        color: LiturgicalColor::Red,
        alternate_color: Some(LiturgicalColor::Black),
        definition: "The final week of Lent recalling Christ's entry into Jerusalem, his last supper, crucifixion and burial.",
    },
    SeasonInfo {
        season: LiturgicalSeason::EasterSeason,
        name: "Easter Season",
        color: LiturgicalColor::White,
        alternate_color: Some(LiturgicalColor::Gold),
        definition: "The fifty days celebrating the resurrection of Jesus Christ, from Easter Sunday to Pentecost.",
    },
    SeasonInfo {
        season: LiturgicalSeason::DayOfPentecost,
        name: "Day of Pentecost",
        color: LiturgicalColor::Red,
        alternate_color: None,
        definition: "The festival of the outpouring of the Holy Spirit upon the church.",
    },
    SeasonInfo {
        season: LiturgicalSeason::OrdinaryTime,
        name: "Ordinary Time",
        color: LiturgicalColor::Green,
        alternate_color: None,
        definition: "The counted weeks outside the major seasons, devoted to growth in discipleship.",
    },
];

impl LiturgicalSeason {
    /// All seasons in calendar order starting from Advent.
    pub const fn all() -> &'static [Self] {
        &[
            Self::Advent,
            Self::ChristmasSeason,
            Self::Epiphany,
            Self::SeasonAfterEpiphany,
            Self::Lent,
            Self::HolyWeek,
            Self::EasterSeason,
            Self::DayOfPentecost,
            Self::OrdinaryTime,
        ]
    }

    /// Table row for this season.
    pub fn info(self) -> &'static SeasonInfo {
        &SEASONS[self as usize]
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Primary liturgical colour.
    pub fn color(self) -> LiturgicalColor {
        self.info().color
    }

    /// Alternate liturgical colour, if any.
    pub fn alternate_color(self) -> Option<LiturgicalColor> {
        self.info().alternate_color
    }

    /// One-sentence definition.
    pub fn definition(self) -> &'static str {
        self.info().definition
    }
}

impl fmt::Display for LiturgicalSeason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The liturgical season `date` falls in.
///
/// Total: a date matching none of the intervals is reported as Ordinary Time.
pub fn season_for_date(date: impl Into<CalendarDate>) -> LiturgicalSeason {
    let date = date.into();
    checked_season_for_date(date).unwrap_or_else(|| {
        tracing::warn!("No liturgical interval matched {date}; falling back to Ordinary Time");
        LiturgicalSeason::OrdinaryTime
    })
}

/// Interval tests in priority order, without the Ordinary Time fallback.
///
/// `None` means no interval matched, which a correct partition never produces.
pub fn checked_season_for_date(date: CalendarDate) -> Option<LiturgicalSeason> {
    let ly = LiturgicalYear::for_year(date.year())?;
    let in_range = |start: CalendarDate, end: CalendarDate| date >= start && date < end;

    let season = if in_range(ly.advent_start, ly.christmas) {
        LiturgicalSeason::Advent
    } else if date >= ly.christmas || (date.month() == 1 && date.day() <= 5) {
        LiturgicalSeason::ChristmasSeason
    } else if date == ly.epiphany {
        LiturgicalSeason::Epiphany
    } else if in_range(ly.epiphany.add_days(1), ly.ash_wednesday) {
        LiturgicalSeason::SeasonAfterEpiphany
    } else if in_range(ly.ash_wednesday, ly.palm_sunday) {
        LiturgicalSeason::Lent
    } else if in_range(ly.palm_sunday, ly.easter) {
        LiturgicalSeason::HolyWeek
    } else if in_range(ly.easter, ly.pentecost) {
        LiturgicalSeason::EasterSeason
    } else if date == ly.pentecost {
        LiturgicalSeason::DayOfPentecost
    } else if date > ly.pentecost && date < ly.advent_start {
        LiturgicalSeason::OrdinaryTime
    } else {
        return None;
    };
    Some(season)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_table_rows_match_enum_order() {
        for season in LiturgicalSeason::all() {
            assert_eq!(season.info().season, *season);
        }
    }

    #[test]
    fn test_year_boundary_stays_in_christmas() {
        assert_eq!(season_for_date(date(2025, 12, 31)), LiturgicalSeason::ChristmasSeason);
        assert_eq!(season_for_date(date(2026, 1, 1)), LiturgicalSeason::ChristmasSeason);
        assert_eq!(season_for_date(date(2026, 1, 5)), LiturgicalSeason::ChristmasSeason);
    }

    #[test]
    fn test_exact_day_feasts() {
        assert_eq!(season_for_date(date(2026, 1, 6)), LiturgicalSeason::Epiphany);
        assert_eq!(season_for_date(date(2026, 1, 7)), LiturgicalSeason::SeasonAfterEpiphany);
        assert_eq!(season_for_date(date(2026, 5, 23)), LiturgicalSeason::EasterSeason);
        assert_eq!(season_for_date(date(2026, 5, 24)), LiturgicalSeason::DayOfPentecost);
        assert_eq!(season_for_date(date(2026, 5, 25)), LiturgicalSeason::OrdinaryTime);
    }

    #[test]
    fn test_lent_and_holy_week_boundaries() {
        // Easter 2024 falls in March
        assert_eq!(season_for_date(date(2024, 2, 13)), LiturgicalSeason::SeasonAfterEpiphany);
        assert_eq!(season_for_date(date(2024, 2, 14)), LiturgicalSeason::Lent);
        assert_eq!(season_for_date(date(2024, 3, 23)), LiturgicalSeason::Lent);
        assert_eq!(season_for_date(date(2024, 3, 24)), LiturgicalSeason::HolyWeek);
        assert_eq!(season_for_date(date(2024, 3, 30)), LiturgicalSeason::HolyWeek);
        assert_eq!(season_for_date(date(2024, 3, 31)), LiturgicalSeason::EasterSeason);
    }

    #[test]
    fn test_advent_boundaries() {
        assert_eq!(season_for_date(date(2026, 11, 28)), LiturgicalSeason::OrdinaryTime);
        assert_eq!(season_for_date(date(2026, 11, 29)), LiturgicalSeason::Advent);
        assert_eq!(season_for_date(date(2026, 12, 24)), LiturgicalSeason::Advent);
        assert_eq!(season_for_date(date(2026, 12, 25)), LiturgicalSeason::ChristmasSeason);
    }

    #[test]
    fn test_accepts_datetimes() {
        let dt = chrono::NaiveDate::from_ymd_opt(2025, 4, 20)
            .unwrap()
            .and_hms_opt(23, 30, 0)
            .unwrap();
        assert_eq!(season_for_date(dt), LiturgicalSeason::EasterSeason);
    }

    #[test]
    fn test_season_colours() {
        assert_eq!(LiturgicalSeason::Lent.color(), LiturgicalColor::Violet);
        assert_eq!(LiturgicalSeason::DayOfPentecost.color(), LiturgicalColor::Red);
        assert_eq!(LiturgicalSeason::EasterSeason.alternate_color(), Some(LiturgicalColor::Gold));
        assert_eq!(LiturgicalSeason::OrdinaryTime.alternate_color(), None);
        assert!(!LiturgicalSeason::Advent.definition().is_empty());
    }
}
