//! `Event` and the export surface.

use std::ops::RangeInclusive;

use ac_time::almanac::Almanac;
use ac_time::date::Date;
use ac_time::occurrence::Occurrence;

/// The year span events are expanded over for export.
///
/// The reference data covers the games' supported in-game years.
pub const EXPORT_HORIZON: RangeInclusive<u16> = 2001..=2030;

/// A named event paired with its occurrence rule.
///
/// Carries the display name for the requested region and the English name
/// (the fallback and internal key). Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    name_regional: String,
    name_english: String,
    occurs: Occurrence,
}

/// One exportable calendar entry: what an external calendar serializer
/// (e.g. an iCalendar writer) consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportEntry {
    /// The display name in the requested region.
    pub summary: String,
    /// The first occurrence across the horizon.
    pub start: Date,
    /// Every later occurrence, ascending.
    pub recurrences: Vec<Date>,
}

impl Event {
    /// Construct an event.
    pub fn new(name_regional: String, name_english: String, occurs: Occurrence) -> Self {
        Event {
            name_regional,
            name_english,
            occurs,
        }
    }

    /// The display name in the requested region.
    pub fn name_regional(&self) -> &str {
        &self.name_regional
    }

    /// The English name.
    pub fn name_english(&self) -> &str {
        &self.name_english
    }

    /// The occurrence rule.
    pub fn occurs(&self) -> &Occurrence {
        &self.occurs
    }

    /// All dates across `years`, ascending.
    ///
    /// Each year's dates are already ascending and years are walked in
    /// order, so the concatenation needs no final sort.
    pub fn dates(&self, years: RangeInclusive<u16>, almanac: &Almanac) -> Vec<Date> {
        years
            .flat_map(|year| self.occurs.dates_in_year(year, almanac))
            .collect()
    }

    /// The export entry for this event over [`EXPORT_HORIZON`], or `None`
    /// if the event never occurs within it.
    pub fn export(&self, almanac: &Almanac) -> Option<ExportEntry> {
        let mut dates = self.dates(EXPORT_HORIZON, almanac).into_iter();
        let start = dates.next()?;
        Some(ExportEntry {
            summary: self.name_regional.clone(),
            start,
            recurrences: dates.collect(),
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
