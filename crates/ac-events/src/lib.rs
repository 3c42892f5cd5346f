//! # ac-events
//!
//! Event and calendar composition: reference rows, per-game/region event
//! selection, multi-year expansion, and the export surface.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Calendar` — the composition root.
pub mod calendar;

/// `Event` and the export surface.
pub mod event;

/// Reference event rows.
pub mod reference;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::Calendar;
pub use event::{Event, ExportEntry, EXPORT_HORIZON};
pub use reference::{reference_rows, EventRow};
