//! `Occurrence` — the closed set of date-rule variants.
//!
//! Every variant knows how to produce the dates an event falls on within a
//! single calendar year. The sequences are strictly increasing and
//! duplicate-free; no variant consults adjacent years except the December
//! arm of [`Occurrence::LastDayOfEveryMonth`], which touches January 1 of
//! the following year internally.

use ac_core::models::Game;

use crate::almanac::{Almanac, Season};
use crate::date::{days_in_month, Date};
use crate::month::Month;
use crate::weekday::Weekday;

/// A rule describing when an event occurs.
///
/// Equality compares the tag and its parameters.
/// [`Occurrence::DayAfterNthWeekdayOfMonth`] reuses the nth-weekday
/// computation but is a distinct tag: the two never compare equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Occurrence {
    /// The same month/day every year.
    FixedDate {
        /// Month of the occurrence.
        month: Month,
        /// Day of the month.
        day: u8,
    },
    /// Every day from `month`/`start_day` through `end_month`/`end_day`,
    /// inclusive.
    DateRange {
        /// Starting month.
        month: Month,
        /// Starting day of month.
        start_day: u8,
        /// Ending month (equal to `month` for single-month ranges).
        end_month: Month,
        /// Ending day of month.
        end_day: u8,
    },
    /// The nth (1–4) occurrence of a weekday in a month.
    NthWeekdayOfMonth {
        /// Month of the occurrence.
        month: Month,
        /// Which occurrence, 1–4.
        nth: u8,
        /// Which weekday.
        weekday: Weekday,
    },
    /// The day after the nth occurrence of a weekday in a month.
    DayAfterNthWeekdayOfMonth {
        /// Month of the anchor occurrence.
        month: Month,
        /// Which occurrence, 1–4.
        nth: u8,
        /// Which weekday.
        weekday: Weekday,
    },
    /// Every occurrence of a weekday in a month.
    EveryWeekdayOfMonth {
        /// Month of the occurrences.
        month: Month,
        /// Which weekday.
        weekday: Weekday,
    },
    /// The last calendar day of each of the twelve months.
    LastDayOfEveryMonth,
    /// The March equinox, from the almanac.
    SpringEquinox,
    /// The September equinox, from the almanac.
    AutumnEquinox,
    /// The harvest moon for a game edition, from the almanac.
    HarvestMoon(Game),
    /// Campsite weekends: Saturdays and Sundays of June–August, minus the
    /// fireworks and meteor-shower days, plus May 26 when June opens on a
    /// Saturday.
    SummerCamperWeekends,
    /// Never occurs.
    Never,
}

impl Occurrence {
    /// The dates the event falls on in `year`, strictly increasing.
    pub fn dates_in_year(&self, year: u16, almanac: &Almanac) -> Vec<Date> {
        match *self {
            Occurrence::FixedDate { month, day } => {
                vec![day_of(year, month.number(), day)]
            }
            Occurrence::DateRange {
                month,
                start_day,
                end_month,
                end_day,
            } => {
                let end = day_of(year, end_month.number(), end_day);
                let mut dates = Vec::new();
                let mut d = day_of(year, month.number(), start_day);
                while d <= end {
                    dates.push(d);
                    d += 1;
                }
                dates
            }
            Occurrence::NthWeekdayOfMonth {
                month,
                nth,
                weekday,
            } => {
                vec![nth_weekday_date(year, month, nth, weekday)]
            }
            Occurrence::DayAfterNthWeekdayOfMonth {
                month,
                nth,
                weekday,
            } => {
                vec![nth_weekday_date(year, month, nth, weekday) + 1]
            }
            Occurrence::EveryWeekdayOfMonth { month, weekday } => {
                let first = day_of(year, month.number(), 1);
                let skip = (weekday.ordinal() as i32 - first.weekday().ordinal() as i32)
                    .rem_euclid(7) as u8;
                let mut day = 1 + skip;
                let last = days_in_month(year, month.number());
                let mut dates = Vec::new();
                while day <= last {
                    dates.push(day_of(year, month.number(), day));
                    day += 7;
                }
                dates
            }
            Occurrence::LastDayOfEveryMonth => (2u16..=13)
                .map(|m| {
                    let (y, m) = if m == 13 { (year + 1, 1) } else { (year, m as u8) };
                    day_of(y, m, 1) - 1
                })
                .collect(),
            Occurrence::SpringEquinox => {
                let day = almanac.equinox_day(year, Season::Spring);
                vec![day_of(year, 3, day)]
            }
            Occurrence::AutumnEquinox => {
                let day = almanac.equinox_day(year, Season::Autumn);
                vec![day_of(year, 9, day)]
            }
            Occurrence::HarvestMoon(game) => almanac
                .harvest_moon_date(game, year)
                .map(|(m, d)| day_of(year, m, d))
                .into_iter()
                .collect(),
            Occurrence::SummerCamperWeekends => {
                let start = day_of(year, 6, 1);
                let end = day_of(year, 8, 31);
                let mut dates = Vec::new();
                // Campers can already turn up on May 26, but only in years
                // where June 1 falls on a Saturday.
                if start.weekday() == Weekday::Saturday {
                    dates.push(day_of(year, 5, 26));
                }
                let mut d = start;
                while d <= end {
                    // July 4 is the fireworks show and August 12 the meteor
                    // shower; no campers on either day.
                    if d.weekday().is_weekend()
                        && !matches!((d.month(), d.day()), (7, 4) | (8, 12))
                    {
                        dates.push(d);
                    }
                    d += 1;
                }
                dates
            }
            Occurrence::Never => Vec::new(),
        }
    }
}

/// The nth (1-based) occurrence of `weekday` in `month` of `year`.
///
/// Shared by the nth-weekday and day-after-nth-weekday rules. With `nth` in
/// 1–4 the result always stays inside the month (day 28 at most).
fn nth_weekday_date(year: u16, month: Month, nth: u8, weekday: Weekday) -> Date {
    let first = day_of(year, month.number(), 1);
    let skip = (weekday.ordinal() as i32 - first.weekday().ordinal() as i32).rem_euclid(7) as u8;
    day_of(year, month.number(), 1 + skip + 7 * (nth - 1))
}

fn day_of(year: u16, month: u8, day: u8) -> Date {
    Date::from_ymd(year, month, day).expect("rule names a valid calendar date")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
