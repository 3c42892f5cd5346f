//! Error types for animal-calendar.
//!
//! A single `thiserror`-derived enum covers the whole workspace. The
//! `ensure!` macro is the precondition guard used by table constructors.

use thiserror::Error;

use crate::models::{Game, Region};

/// The top-level error type used throughout animal-calendar.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// An unsupported game/region pairing at calendar construction.
    #[error("unsupported game/region combination: {game} / {region}")]
    InvalidConfiguration {
        /// The requested game edition.
        game: Game,
        /// The requested region.
        region: Region,
    },

    /// Date-related error (out-of-range construction or arithmetic).
    #[error("date error: {0}")]
    Date(String),

    /// Precondition violated (malformed lookup-table rows and the like).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),
}

/// Shorthand `Result` type used throughout animal-calendar.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Guard a precondition.
///
/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use ac_core::ensure;
/// fn day_of_month(d: u8) -> ac_core::Result<u8> {
///     ensure!((1..=31).contains(&d), "day {d} out of range [1, 31]");
///     Ok(d)
/// }
/// assert!(day_of_month(26).is_ok());
/// assert!(day_of_month(0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
