//! # animal-calendar
//!
//! Computed yearly event calendars for the GameCube-era Animal Crossing
//! games. The reference data describes each event's schedule as
//! constrained free text (`"3rd Monday in March"`, `"Every weekend in
//! Summer"`, …); this library parses those rules and expands them into
//! concrete calendar dates for any supported year.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `ac-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use animal_calendar::events::{reference_rows, Calendar};
//! use animal_calendar::time::Almanac;
//! use animal_calendar::{Game, Region};
//!
//! let almanac = Almanac::reference();
//! let calendar = Calendar::new(Game::AnimalCrossing, Region::NorthAmerica)?;
//! let entries = calendar.export_entries(reference_rows(), &almanac);
//!
//! let new_years = &entries[0];
//! assert_eq!(new_years.summary, "New Year's Day");
//! assert_eq!(new_years.start.to_string(), "2001-01-01");
//! assert_eq!(new_years.recurrences.len(), 29);
//! # Ok::<(), animal_calendar::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and the game/region model.
pub use ac_core as core;

/// Date arithmetic, almanac tables, occurrence rules, and the parser.
pub use ac_time as time;

/// Event and calendar composition.
pub use ac_events as events;

pub use ac_core::{Game, Region};
