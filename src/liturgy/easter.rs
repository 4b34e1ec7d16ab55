//! Easter computus and the feast dates derived from it.

use chrono::Datelike;
use serde::Serialize;

use crate::types::CalendarDate;

/// Month and day of Easter Sunday in the Gregorian calendar.
///
/// Meeus/Jones/Butcher computus, integer arithmetic only. All divisions are
/// floor divisions.
pub fn easter_month_day(year: i32) -> (u32, u32) {
    let y = i64::from(year);
    let g = y.rem_euclid(19);
    let c = y.div_euclid(100);
    let h = (c - c.div_euclid(4) - (8 * c + 13).div_euclid(25) + 19 * g + 15).rem_euclid(30);
    let i = h - h.div_euclid(28) * (1 - 29_i64.div_euclid(h + 1) * (21 - g).div_euclid(11));
    let j = (y + y.div_euclid(4) + i + 2 - c + c.div_euclid(4)).rem_euclid(7);
    let l = i - j;
    let month = 3 + (l + 40).div_euclid(44);
    let day = l + 28 - 31 * month.div_euclid(4);

    // month is 3 or 4 and day lies in 1..=31 for every year
    (
        u32::try_from(month).unwrap_or(4),
        u32::try_from(day).unwrap_or(1),
    )
}

/// Easter Sunday for `year`, or `None` outside the supported date range.
pub fn easter_sunday(year: i32) -> Option<CalendarDate> {
    let (month, day) = easter_month_day(year);
    CalendarDate::from_ymd(year, month, day)
}

/// First Sunday of Advent for `year`.
///
/// Christmas is rounded back to the preceding (or same) Sunday, then three
/// more weeks are subtracted.
pub fn advent_start(year: i32) -> Option<CalendarDate> {
    let christmas = CalendarDate::from_ymd(year, 12, 25)?;
    let to_sunday = i64::from(christmas.as_naive().weekday().num_days_from_sunday());
    Some(christmas.add_days(-to_sunday - 21))
}

/// The movable and fixed feast dates that bound the seasons of one calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LiturgicalYear {
    /// Calendar year these dates belong to.
    pub year: i32,
    /// Epiphany, January 6.
    pub epiphany: CalendarDate,
    /// Ash Wednesday, 46 days before Easter.
    pub ash_wednesday: CalendarDate,
    /// Palm Sunday, one week before Easter.
    pub palm_sunday: CalendarDate,
    /// Easter Sunday.
    pub easter: CalendarDate,
    /// Day of Pentecost, 49 days after Easter.
    pub pentecost: CalendarDate,
    /// First Sunday of Advent.
    pub advent_start: CalendarDate,
    /// Christmas Day, December 25.
    pub christmas: CalendarDate,
}

impl LiturgicalYear {
    /// Compute the feast dates of `year`.
    ///
    /// Returns `None` only for years outside the supported date range.
    pub fn for_year(year: i32) -> Option<Self> {
        let easter = easter_sunday(year)?;
        Some(Self {
            year,
            epiphany: CalendarDate::from_ymd(year, 1, 6)?,
            ash_wednesday: easter.add_days(-46),
            palm_sunday: easter.add_days(-7),
            easter,
            pentecost: easter.add_days(49),
            advent_start: advent_start(year)?,
            christmas: CalendarDate::from_ymd(year, 12, 25)?,
        })
    }
}
