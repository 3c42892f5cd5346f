//! `Calendar` — the composition root.

use ac_core::errors::{Error, Result};
use ac_core::models::{Game, Region};
use ac_time::almanac::Almanac;
use ac_time::parse::parse_occurrence;

use crate::event::{Event, ExportEntry};
use crate::reference::EventRow;

/// The game/region pairings that actually shipped.
const SUPPORTED_COMBINATIONS: [(Game, Region); 5] = [
    (Game::AnimalForest, Region::Japan),
    (Game::AnimalForestPlus, Region::Japan),
    (Game::AnimalCrossing, Region::NorthAmerica),
    (Game::AnimalCrossing, Region::Pal),
    (Game::AnimalForestEPlus, Region::Japan),
];

/// An event calendar for one game in one region.
///
/// Construction validates the pairing against the shipped releases; the
/// event list is computed on demand from reference rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    game: Game,
    region: Region,
}

impl Calendar {
    /// Create a calendar for `(game, region)`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfiguration`] if the pairing is not one
    /// of the five shipped releases.
    pub fn new(game: Game, region: Region) -> Result<Self> {
        if !SUPPORTED_COMBINATIONS.contains(&(game, region)) {
            return Err(Error::InvalidConfiguration { game, region });
        }
        Ok(Calendar { game, region })
    }

    /// The game edition.
    pub fn game(&self) -> Game {
        self.game
    }

    /// The region.
    pub fn region(&self) -> Region {
        self.region
    }

    /// Build the event list from `rows`, preserving row order.
    ///
    /// Rows whose product set excludes this calendar's game are skipped;
    /// the rest have their name and date-rule columns selected for this
    /// game/region and their rule text parsed.
    pub fn events(&self, rows: &[EventRow]) -> Vec<Event> {
        rows.iter()
            .filter_map(|row| self.event_from_row(row))
            .collect()
    }

    /// Export entries for every event that occurs at least once within
    /// the export horizon, in row order.
    pub fn export_entries(&self, rows: &[EventRow], almanac: &Almanac) -> Vec<ExportEntry> {
        self.events(rows)
            .iter()
            .filter_map(|event| event.export(almanac))
            .collect()
    }

    fn event_from_row(&self, row: &EventRow) -> Option<Event> {
        let games_in: Vec<Game> = row
            .games
            .split(", ")
            .filter_map(Game::from_code)
            .collect();
        if !games_in.contains(&self.game) {
            return None;
        }

        // Which columns carry the names depends on whether the row covers
        // the western release.
        let (name_english, name_japanese) = if games_in.contains(&Game::AnimalCrossing) {
            let japanese = if self.game == Game::AnimalForestEPlus {
                row.name_afe
            } else {
                row.name_afp
            };
            (row.event.trim(), japanese.trim())
        } else {
            (row.name_jp_translation.trim(), row.event.trim())
        };
        let name_regional = match self.region {
            Region::NorthAmerica | Region::Pal => name_english,
            Region::Japan => name_japanese,
        };
        // Untranslated cells fall back to the English name.
        let name_regional = if name_regional == "-" && name_english != "-" {
            name_english
        } else {
            name_regional
        };

        // Date-rule text priority: PAL override, then the legacy-edition
        // overrides, then the default column.
        let rule_text = if self.region == Region::Pal && row.date_europe != "-" {
            row.date_europe
        } else if row.date_afp != "-" && self.game == Game::AnimalForestPlus {
            row.date_afp
        } else if row.date_af != "-" && self.game == Game::AnimalForest {
            row.date_af
        } else {
            row.date
        };

        Some(Event::new(
            name_regional.to_owned(),
            name_english.to_owned(),
            parse_occurrence(self.game, rule_text),
        ))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::reference_rows;
    use ac_time::month::Month;
    use ac_time::occurrence::Occurrence;
    use ac_time::weekday::Weekday;

    #[test]
    fn supported_pairs_construct() {
        for (game, region) in SUPPORTED_COMBINATIONS {
            assert!(Calendar::new(game, region).is_ok());
        }
    }

    #[test]
    fn unsupported_pairs_fail() {
        for game in Game::ALL {
            for region in [Region::NorthAmerica, Region::Japan, Region::Pal] {
                if SUPPORTED_COMBINATIONS.contains(&(game, region)) {
                    continue;
                }
                assert_eq!(
                    Calendar::new(game, region),
                    Err(Error::InvalidConfiguration { game, region }),
                    "{game}/{region} should be rejected"
                );
            }
        }
    }

    #[test]
    fn rows_filter_by_game() {
        let calendar = Calendar::new(Game::AnimalForest, Region::Japan).unwrap();
        let events = calendar.events(reference_rows());
        let names: Vec<&str> = events.iter().map(Event::name_english).collect();
        // AF predates Halloween and the campsite.
        assert!(names.contains(&"New Year's Day"));
        assert!(!names.contains(&"Halloween"));
        assert!(!names.contains(&"Summer Camp"));
    }

    #[test]
    fn row_order_is_preserved() {
        let calendar = Calendar::new(Game::AnimalCrossing, Region::NorthAmerica).unwrap();
        let events = calendar.events(reference_rows());
        let kept: Vec<&str> = reference_rows()
            .iter()
            .filter(|row| row.games.split(", ").any(|code| code == "AC"))
            .map(|row| row.event)
            .collect();
        let names: Vec<&str> = events.iter().map(Event::name_english).collect();
        assert_eq!(names, kept);
    }

    #[test]
    fn japanese_names_for_japan() {
        let calendar = Calendar::new(Game::AnimalForestPlus, Region::Japan).unwrap();
        let events = calendar.events(reference_rows());
        let new_years = events
            .iter()
            .find(|e| e.name_english() == "New Year's Day")
            .unwrap();
        assert_eq!(new_years.name_regional(), "元日");
    }

    #[test]
    fn japan_only_rows_swap_name_columns() {
        // Sports Fair never shipped in AC, so its Event column holds the
        // Japanese name and the translation column the English one.
        let calendar = Calendar::new(Game::AnimalForest, Region::Japan).unwrap();
        let events = calendar.events(reference_rows());
        let sports = events
            .iter()
            .find(|e| e.name_english() == "Sports Fair")
            .unwrap();
        assert_eq!(sports.name_regional(), "うんどうかい");
    }

    #[test]
    fn untranslated_name_falls_back_to_english() {
        let calendar = Calendar::new(Game::AnimalForestPlus, Region::Japan).unwrap();
        let events = calendar.events(reference_rows());
        let mushrooming = events
            .iter()
            .find(|e| e.name_english() == "Mushrooming Season")
            .unwrap();
        assert_eq!(mushrooming.name_regional(), "Mushrooming Season");
    }

    #[test]
    fn pal_date_override_wins() {
        let pal = Calendar::new(Game::AnimalCrossing, Region::Pal).unwrap();
        let fireworks = pal
            .events(reference_rows())
            .into_iter()
            .find(|e| e.name_english() == "Fireworks Show")
            .unwrap();
        assert_eq!(
            *fireworks.occurs(),
            Occurrence::NthWeekdayOfMonth {
                month: Month::August,
                nth: 1,
                weekday: Weekday::Sunday,
            }
        );

        let ntsc = Calendar::new(Game::AnimalCrossing, Region::NorthAmerica).unwrap();
        let fireworks = ntsc
            .events(reference_rows())
            .into_iter()
            .find(|e| e.name_english() == "Fireworks Show")
            .unwrap();
        assert_eq!(
            *fireworks.occurs(),
            Occurrence::FixedDate {
                month: Month::July,
                day: 4,
            }
        );
    }

    #[test]
    fn legacy_date_overrides_apply_per_game() {
        let afp = Calendar::new(Game::AnimalForestPlus, Region::Japan).unwrap();
        let sports = afp
            .events(reference_rows())
            .into_iter()
            .find(|e| e.name_english() == "Sports Fair")
            .unwrap();
        assert_eq!(
            *sports.occurs(),
            Occurrence::NthWeekdayOfMonth {
                month: Month::October,
                nth: 2,
                weekday: Weekday::Monday,
            }
        );

        let af = Calendar::new(Game::AnimalForest, Region::Japan).unwrap();
        let aerobics = af
            .events(reference_rows())
            .into_iter()
            .find(|e| e.name_english() == "Morning Aerobics")
            .unwrap();
        assert_eq!(
            *aerobics.occurs(),
            Occurrence::DateRange {
                month: Month::August,
                start_day: 1,
                end_month: Month::August,
                end_day: 31,
            }
        );
    }

    #[test]
    fn placeholder_rule_text_parses_as_never_and_is_not_exported() {
        let calendar = Calendar::new(Game::AnimalForestEPlus, Region::Japan).unwrap();
        let events = calendar.events(reference_rows());
        let bug_off = events
            .iter()
            .find(|e| e.name_english() == "Bug-Off")
            .unwrap();
        assert_eq!(*bug_off.occurs(), Occurrence::Never);

        let almanac = Almanac::reference();
        let entries = calendar.export_entries(reference_rows(), &almanac);
        assert!(entries.iter().all(|e| e.summary != "ムシとり大会"));
        assert_eq!(entries.len(), events.len() - 1);
    }

    #[test]
    fn export_entries_in_row_order_with_ascending_dates() {
        let calendar = Calendar::new(Game::AnimalCrossing, Region::NorthAmerica).unwrap();
        let almanac = Almanac::reference();
        for entry in calendar.export_entries(reference_rows(), &almanac) {
            let mut prev = entry.start;
            for &d in &entry.recurrences {
                assert!(d > prev, "{}: {d} out of order", entry.summary);
                prev = d;
            }
        }
    }
}
