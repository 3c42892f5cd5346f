//! `Almanac` — the astronomical lookup tables.
//!
//! Two kinds of table back the equinox and harvest-moon events: equinox
//! day-of-month by year, and harvest-moon month/day by game and year. An
//! [`Almanac`] is constructed once and passed by reference wherever dates
//! are generated, so tests can substitute fixture tables freely.
//!
//! The two tables have deliberately different out-of-range policies:
//! consulting the equinox table outside its covered years is a contract
//! violation and panics, while a harvest-moon lookup outside a game's
//! covered years is an ordinary "no occurrence" (`None`).

use ac_core::ensure;
use ac_core::errors::Result;
use ac_core::models::Game;

/// Which equinox of the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    /// The March equinox.
    Spring,
    /// The September equinox.
    Autumn,
}

/// Equinox day-of-month by year.
///
/// One row per year, contiguous ascending from `first_year`; each row holds
/// the March day and the September day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquinoxTable {
    first_year: u16,
    rows: Vec<(u8, u8)>,
}

impl EquinoxTable {
    /// Build a table from `(spring_day, autumn_day)` rows, the first row
    /// belonging to `first_year`.
    pub fn from_rows(first_year: u16, rows: Vec<(u8, u8)>) -> Result<Self> {
        ensure!(!rows.is_empty(), "equinox table must have at least one row");
        for (i, &(spring, autumn)) in rows.iter().enumerate() {
            let year = first_year + i as u16;
            ensure!(
                (1..=31).contains(&spring) && (1..=30).contains(&autumn),
                "equinox row for {year} has day out of range: ({spring}, {autumn})"
            );
        }
        Ok(EquinoxTable { first_year, rows })
    }

    /// The table shipped with the library: 2001–2099.
    pub fn reference() -> Self {
        EquinoxTable {
            first_year: 2001,
            rows: EQUINOX_DAYS.to_vec(),
        }
    }

    /// First covered year.
    pub fn first_year(&self) -> u16 {
        self.first_year
    }

    /// Last covered year.
    pub fn last_year(&self) -> u16 {
        self.first_year + (self.rows.len() - 1) as u16
    }

    /// The equinox day-of-month for `year`.
    ///
    /// # Panics
    /// Panics if `year` is outside the covered range. Callers are expected
    /// to stay inside it; this is a programming error, not a data
    /// condition (contrast [`HarvestMoonTable::date`]).
    pub fn day(&self, year: u16, season: Season) -> u8 {
        assert!(
            (self.first_year()..=self.last_year()).contains(&year),
            "equinox lookup for {year} outside covered range [{}, {}]",
            self.first_year(),
            self.last_year()
        );
        let row = self.rows[(year - self.first_year) as usize];
        match season {
            Season::Spring => row.0,
            Season::Autumn => row.1,
        }
    }
}

/// Harvest-moon month/day by year, for one game edition.
///
/// One row per year, contiguous ascending from `first_year`. Coverage
/// differs per edition: each game shipped with its own span of in-game
/// years.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestMoonTable {
    first_year: u16,
    rows: Vec<(u8, u8)>,
}

impl HarvestMoonTable {
    /// Build a table from `(month, day)` rows, the first row belonging to
    /// `first_year`.
    pub fn from_rows(first_year: u16, rows: Vec<(u8, u8)>) -> Result<Self> {
        ensure!(
            !rows.is_empty(),
            "harvest-moon table must have at least one row"
        );
        for (i, &(month, day)) in rows.iter().enumerate() {
            let year = first_year + i as u16;
            ensure!(
                (1..=12).contains(&month) && (1..=31).contains(&day),
                "harvest-moon row for {year} is not a calendar date: ({month}, {day})"
            );
        }
        Ok(HarvestMoonTable { first_year, rows })
    }

    /// First covered year.
    pub fn first_year(&self) -> u16 {
        self.first_year
    }

    /// Last covered year.
    pub fn last_year(&self) -> u16 {
        self.first_year + (self.rows.len() - 1) as u16
    }

    /// The harvest-moon `(month, day)` for `year`, or `None` if the year is
    /// outside the covered range (inclusive on both ends).
    pub fn date(&self, year: u16) -> Option<(u8, u8)> {
        if (self.first_year()..=self.last_year()).contains(&year) {
            Some(self.rows[(year - self.first_year) as usize])
        } else {
            None
        }
    }
}

/// The full set of lookup tables, constructed once and shared by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Almanac {
    equinoxes: EquinoxTable,
    harvest_moons: [HarvestMoonTable; 4],
}

impl Almanac {
    /// Assemble an almanac from an equinox table and one harvest-moon table
    /// per game, ordered as [`Game::ALL`].
    pub fn new(equinoxes: EquinoxTable, harvest_moons: [HarvestMoonTable; 4]) -> Self {
        Almanac {
            equinoxes,
            harvest_moons,
        }
    }

    /// The tables shipped with the library.
    ///
    /// Equinoxes cover 2001–2099. Harvest moons cover 2001–2020 for AF and
    /// AF+, 2001–2030 for AC, and 2003–2030 for AFe+.
    pub fn reference() -> Self {
        let moons = |first_year: u16, last_year: u16| {
            let skip = (first_year - FULL_MOON_FIRST_YEAR) as usize;
            let take = (last_year - first_year + 1) as usize;
            HarvestMoonTable {
                first_year,
                rows: FULL_MOONS[skip..skip + take].to_vec(),
            }
        };
        Almanac {
            equinoxes: EquinoxTable::reference(),
            harvest_moons: [
                moons(2001, 2020), // AF
                moons(2001, 2020), // AF+
                moons(2001, 2030), // AC
                moons(2003, 2030), // AFe+
            ],
        }
    }

    /// The equinox table.
    pub fn equinoxes(&self) -> &EquinoxTable {
        &self.equinoxes
    }

    /// The harvest-moon table for `game`.
    pub fn harvest_moons(&self, game: Game) -> &HarvestMoonTable {
        let idx = Game::ALL
            .iter()
            .position(|&g| g == game)
            .expect("Game::ALL covers every variant");
        &self.harvest_moons[idx]
    }

    /// Shorthand for [`EquinoxTable::day`].
    pub fn equinox_day(&self, year: u16, season: Season) -> u8 {
        self.equinoxes.day(year, season)
    }

    /// Shorthand for [`HarvestMoonTable::date`].
    pub fn harvest_moon_date(&self, game: Game, year: u16) -> Option<(u8, u8)> {
        self.harvest_moons(game).date(year)
    }
}

// ── Shipped table data ────────────────────────────────────────────────────────

/// `(spring_day, autumn_day)` per year, 2001–2099.
const EQUINOX_DAYS: [(u8, u8); 99] = [
    (20, 23), (21, 23), (21, 23), (20, 23), (20, 23), (21, 23), // 2001-2006
    (21, 23), (20, 23), (20, 23), (21, 23), (21, 23), (20, 22), // 2007-2012
    (20, 23), (21, 23), (21, 23), (20, 22), (20, 23), (21, 23), // 2013-2018
    (21, 23), (20, 22), (20, 23), (21, 23), (21, 23), (20, 22), // 2019-2024
    (20, 23), (20, 23), (21, 23), (20, 22), (20, 23), (20, 23), // 2025-2030
    (21, 23), (20, 22), (20, 23), (20, 23), (21, 23), (20, 22), // 2031-2036
    (20, 23), (20, 23), (21, 23), (20, 22), (20, 23), (20, 23), // 2037-2042
    (21, 23), (20, 22), (20, 22), (20, 23), (21, 23), (20, 22), // 2043-2048
    (20, 22), (20, 23), (21, 23), (20, 22), (20, 22), (20, 23), // 2049-2054
    (21, 23), (20, 22), (20, 22), (20, 23), (20, 23), (20, 22), // 2055-2060
    (20, 22), (20, 23), (20, 23), (20, 22), (20, 22), (20, 23), // 2061-2066
    (20, 23), (20, 22), (20, 22), (20, 23), (20, 23), (20, 22), // 2067-2072
    (20, 22), (20, 23), (20, 23), (20, 22), (20, 22), (20, 22), // 2073-2078
    (20, 23), (20, 22), (20, 22), (20, 22), (20, 23), (20, 22), // 2079-2084
    (20, 22), (20, 22), (20, 23), (20, 22), (20, 22), (20, 22), // 2085-2090
    (20, 23), (19, 22), (20, 22), (20, 22), (20, 23), (19, 22), // 2091-2096
    (20, 22), (20, 22), (20, 23), // 2097-2099
];

/// First year of [`FULL_MOONS`].
const FULL_MOON_FIRST_YEAR: u16 = 2001;

/// Harvest-moon `(month, day)` per year, 2001–2030: the full moon nearest
/// the September equinox.
const FULL_MOONS: [(u8, u8); 30] = [
    (10, 2), (9, 22), (9, 11), (9, 29), (9, 18), (10, 7), // 2001-2006
    (9, 26), (9, 15), (10, 4), (9, 23), (9, 12), (9, 30), // 2007-2012
    (9, 20), (9, 9), (9, 28), (9, 16), (10, 5), (9, 25), // 2013-2018
    (9, 14), (10, 2), (9, 21), (9, 11), (9, 30), (9, 18), // 2019-2024
    (10, 7), (9, 26), (9, 16), (10, 3), (9, 23), (9, 12), // 2025-2030
];

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_coverage() {
        let almanac = Almanac::reference();
        assert_eq!(almanac.equinoxes().first_year(), 2001);
        assert_eq!(almanac.equinoxes().last_year(), 2099);
        assert_eq!(almanac.harvest_moons(Game::AnimalForest).last_year(), 2020);
        assert_eq!(
            almanac.harvest_moons(Game::AnimalCrossing).last_year(),
            2030
        );
        assert_eq!(
            almanac.harvest_moons(Game::AnimalForestEPlus).first_year(),
            2003
        );
    }

    #[test]
    fn equinox_lookup() {
        let almanac = Almanac::reference();
        assert_eq!(almanac.equinox_day(2001, Season::Spring), 20);
        assert_eq!(almanac.equinox_day(2001, Season::Autumn), 23);
        assert_eq!(almanac.equinox_day(2024, Season::Autumn), 22);
        assert_eq!(almanac.equinox_day(2099, Season::Spring), 20);
    }

    #[test]
    #[should_panic(expected = "outside covered range")]
    fn equinox_out_of_range_panics() {
        Almanac::reference().equinox_day(2100, Season::Spring);
    }

    #[test]
    fn harvest_moon_out_of_range_is_none() {
        let almanac = Almanac::reference();
        assert_eq!(almanac.harvest_moon_date(Game::AnimalForest, 2021), None);
        assert_eq!(almanac.harvest_moon_date(Game::AnimalForestEPlus, 2002), None);
        assert!(almanac.harvest_moon_date(Game::AnimalForest, 2020).is_some());
        assert_eq!(
            almanac.harvest_moon_date(Game::AnimalCrossing, 2001),
            Some((10, 2))
        );
    }

    #[test]
    fn from_rows_validates() {
        assert!(EquinoxTable::from_rows(2001, vec![]).is_err());
        assert!(EquinoxTable::from_rows(2001, vec![(32, 23)]).is_err());
        assert!(HarvestMoonTable::from_rows(2001, vec![(13, 1)]).is_err());
        assert!(HarvestMoonTable::from_rows(2001, vec![(9, 22)]).is_ok());
    }

    #[test]
    fn fixture_tables_substitute() {
        let equinoxes = EquinoxTable::from_rows(2024, vec![(20, 22)]).unwrap();
        let moon = HarvestMoonTable::from_rows(2024, vec![(9, 18)]).unwrap();
        let almanac = Almanac::new(
            equinoxes,
            [moon.clone(), moon.clone(), moon.clone(), moon],
        );
        assert_eq!(almanac.equinox_day(2024, Season::Spring), 20);
        assert_eq!(
            almanac.harvest_moon_date(Game::AnimalForestPlus, 2024),
            Some((9, 18))
        );
        assert_eq!(almanac.harvest_moon_date(Game::AnimalForestPlus, 2023), None);
    }
}
