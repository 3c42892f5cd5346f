//! Rule-text parser.
//!
//! The reference data expresses each event's schedule as constrained free
//! text (`"3rd Monday in March"`, `"Every day June 1 - August 31"`, …).
//! [`parse_occurrence`] maps that text onto exactly one [`Occurrence`]
//! variant by trying a fixed, ordered list of patterns; the first pattern
//! that matches the whole trimmed string wins. The patterns are not
//! mutually exclusive, so the order is part of the contract.
//!
//! Text that matches no pattern parses as [`Occurrence::Never`]: the
//! source sheets contain placeholder and unfinished cells, and those
//! events simply never occur.

use ac_core::models::Game;

use crate::month::Month;
use crate::occurrence::Occurrence;
use crate::weekday::Weekday;

/// The ordered pattern table. First full match wins.
const MATCHERS: [fn(Game, &str) -> Option<Occurrence>; 10] = [
    match_fixed_date,
    match_single_month_range,
    match_multi_month_range,
    match_nth_or_every_weekday,
    match_day_after_nth_weekday,
    match_last_day_of_every_month,
    match_spring_equinox,
    match_harvest_moon,
    match_autumn_equinox,
    match_summer_weekends,
];

/// Parse a date-rule text into an [`Occurrence`].
///
/// `game` is the edition the rule is being parsed for; it only feeds the
/// harvest-moon variant. Unrecognised text yields [`Occurrence::Never`] —
/// never an error.
pub fn parse_occurrence(game: Game, text: &str) -> Occurrence {
    let text = text.trim();
    MATCHERS
        .iter()
        .find_map(|matcher| matcher(game, text))
        .unwrap_or(Occurrence::Never)
}

// ── Pattern matchers ──────────────────────────────────────────────────────────

/// `"October 31"`
fn match_fixed_date(_game: Game, text: &str) -> Option<Occurrence> {
    let (month, day) = parse_month_day(text)?;
    Some(Occurrence::FixedDate { month, day })
}

/// `"April 1-10"` (no spaces around the dash)
fn match_single_month_range(_game: Game, text: &str) -> Option<Occurrence> {
    let (month_tok, days_tok) = text.split_once(' ')?;
    let month = Month::from_long_name(month_tok)?;
    let (start_tok, end_tok) = days_tok.split_once('-')?;
    Some(Occurrence::DateRange {
        month,
        start_day: parse_day(start_tok)?,
        end_month: month,
        end_day: parse_day(end_tok)?,
    })
}

/// `"Every day June 1 - August 31"`
fn match_multi_month_range(_game: Game, text: &str) -> Option<Occurrence> {
    let rest = text.strip_prefix("Every day ")?;
    let (start_tok, end_tok) = rest.split_once(" - ")?;
    let (month, start_day) = parse_month_day(start_tok)?;
    let (end_month, end_day) = parse_month_day(end_tok)?;
    Some(Occurrence::DateRange {
        month,
        start_day,
        end_month,
        end_day,
    })
}

/// `"3rd Monday in March"` or `"Every Sunday in February"`
fn match_nth_or_every_weekday(_game: Game, text: &str) -> Option<Occurrence> {
    let tokens: Vec<&str> = text.split(' ').collect();
    match tokens[..] {
        [ordinal_tok, weekday_tok, "in", month_tok] => {
            let weekday = Weekday::from_long_name(weekday_tok)?;
            let month = Month::from_long_name(month_tok)?;
            if ordinal_tok == "Every" {
                Some(Occurrence::EveryWeekdayOfMonth { month, weekday })
            } else {
                Some(Occurrence::NthWeekdayOfMonth {
                    month,
                    nth: parse_ordinal(ordinal_tok)?,
                    weekday,
                })
            }
        }
        _ => None,
    }
}

/// `"Day after 4th Thursday in November"`
fn match_day_after_nth_weekday(_game: Game, text: &str) -> Option<Occurrence> {
    let rest = text.strip_prefix("Day after ")?;
    let tokens: Vec<&str> = rest.split(' ').collect();
    match tokens[..] {
        [ordinal_tok, weekday_tok, "in", month_tok] => {
            Some(Occurrence::DayAfterNthWeekdayOfMonth {
                month: Month::from_long_name(month_tok)?,
                nth: parse_ordinal(ordinal_tok)?,
                weekday: Weekday::from_long_name(weekday_tok)?,
            })
        }
        _ => None,
    }
}

fn match_last_day_of_every_month(_game: Game, text: &str) -> Option<Occurrence> {
    (text == "Last Day of every Month").then_some(Occurrence::LastDayOfEveryMonth)
}

fn match_spring_equinox(_game: Game, text: &str) -> Option<Occurrence> {
    text.contains("Spring Equinox").then_some(Occurrence::SpringEquinox)
}

/// The sheets spell the harvest moon as a varying September/October date
/// (`"Varies between September 8 and October 7"`).
fn match_harvest_moon(game: Game, text: &str) -> Option<Occurrence> {
    text.contains("Varies between September")
        .then_some(Occurrence::HarvestMoon(game))
}

fn match_autumn_equinox(_game: Game, text: &str) -> Option<Occurrence> {
    text.contains("Autumn Equinox").then_some(Occurrence::AutumnEquinox)
}

fn match_summer_weekends(_game: Game, text: &str) -> Option<Occurrence> {
    (text == "Every weekend in Summer").then_some(Occurrence::SummerCamperWeekends)
}

// ── Token helpers ─────────────────────────────────────────────────────────────

/// `"October 31"` → (October, 31)
fn parse_month_day(text: &str) -> Option<(Month, u8)> {
    let (month_tok, day_tok) = text.split_once(' ')?;
    Some((Month::from_long_name(month_tok)?, parse_day(day_tok)?))
}

/// A one- or two-digit day token.
fn parse_day(tok: &str) -> Option<u8> {
    if tok.is_empty() || tok.len() > 2 || !tok.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    tok.parse().ok()
}

/// `"1st"` … `"4th"`.
fn parse_ordinal(tok: &str) -> Option<u8> {
    match tok {
        "1st" => Some(1),
        "2nd" => Some(2),
        "3rd" => Some(3),
        "4th" => Some(4),
        _ => None,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
