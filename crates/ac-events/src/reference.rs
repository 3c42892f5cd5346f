//! Reference event rows.
//!
//! One row per named event, mirroring the columns of the community event
//! sheet the games' schedules were transcribed from: an English event
//! name, translated/regional name columns, the editions the event appears
//! in, and up to four date-rule texts (default plus PAL, AF+, and AF
//! overrides). Absent cells hold the `"-"` placeholder.
//!
//! Selection of the right columns for a `(game, region)` pair lives in
//! [`crate::calendar::Calendar::events`]; the rows themselves are inert
//! data.

/// One reference row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventRow {
    /// The `Event` column: the English name for rows that include Animal
    /// Crossing, otherwise the Japanese name.
    pub event: &'static str,
    /// The `Name (JP Translation)` column: the English translation for
    /// Japan-only events.
    pub name_jp_translation: &'static str,
    /// The `Name (AF+)` column: the Japanese name used by AF and AF+.
    pub name_afp: &'static str,
    /// The `Name (AFe+)` column: the Japanese name used by AFe+.
    pub name_afe: &'static str,
    /// The `Games Appeared In` column: comma-separated product codes.
    pub games: &'static str,
    /// The default `Date` column (AC / AFe+).
    pub date: &'static str,
    /// The `Date (Europe)` column: PAL override.
    pub date_europe: &'static str,
    /// The `Date (AF+)` column: AF+ override.
    pub date_afp: &'static str,
    /// The `Date (AF)` column: AF override.
    pub date_af: &'static str,
}

/// The built-in reference rows.
pub fn reference_rows() -> &'static [EventRow] {
    &REFERENCE_ROWS
}

const REFERENCE_ROWS: [EventRow; 24] = [
    EventRow {
        event: "New Year's Day",
        name_jp_translation: "-",
        name_afp: "元日",
        name_afe: "元日",
        games: "AF, AF+, AC, AFe+",
        date: "January 1",
        date_europe: "-",
        date_afp: "-",
        date_af: "-",
    },
    EventRow {
        event: "Groundhog Day",
        name_jp_translation: "-",
        name_afp: "-",
        name_afe: "グラウンドホッグデー",
        games: "AC, AFe+",
        date: "February 2",
        date_europe: "-",
        date_afp: "-",
        date_af: "-",
    },
    EventRow {
        event: "春分の日",
        name_jp_translation: "Spring Equinox Day",
        name_afp: "-",
        name_afe: "-",
        games: "AF, AF+, AFe+",
        date: "Spring Equinox (day varies)",
        date_europe: "-",
        date_afp: "-",
        date_af: "-",
    },
    EventRow {
        event: "Cherry Blossom Festival",
        name_jp_translation: "-",
        name_afp: "花見",
        name_afe: "花見",
        games: "AF, AF+, AC, AFe+",
        date: "April 1-10",
        date_europe: "-",
        date_afp: "-",
        date_af: "-",
    },
    EventRow {
        event: "April Fools' Day",
        name_jp_translation: "-",
        name_afp: "-",
        name_afe: "エイプリルフール",
        games: "AC, AFe+",
        date: "April 1",
        date_europe: "-",
        date_afp: "-",
        date_af: "-",
    },
    EventRow {
        event: "Mother's Day",
        name_jp_translation: "-",
        name_afp: "母の日",
        name_afe: "母の日",
        games: "AF, AF+, AC, AFe+",
        date: "2nd Sunday in May",
        date_europe: "-",
        date_afp: "-",
        date_af: "-",
    },
    EventRow {
        event: "Father's Day",
        name_jp_translation: "-",
        name_afp: "父の日",
        name_afe: "父の日",
        games: "AF, AF+, AC, AFe+",
        date: "3rd Sunday in June",
        date_europe: "-",
        date_afp: "-",
        date_af: "-",
    },
    EventRow {
        event: "Summer Camp",
        name_jp_translation: "-",
        name_afp: "キャンプ",
        name_afe: "キャンプ",
        games: "AF+, AC, AFe+",
        date: "Every weekend in Summer",
        date_europe: "-",
        date_afp: "-",
        date_af: "-",
    },
    EventRow {
        event: "Morning Aerobics",
        name_jp_translation: "-",
        name_afp: "ラジオ体操",
        name_afe: "ラジオ体操",
        games: "AF, AF+, AC, AFe+",
        date: "Every day July 21 - August 31",
        date_europe: "-",
        date_afp: "-",
        date_af: "Every day August 1 - August 31",
    },
    EventRow {
        event: "Fireworks Show",
        name_jp_translation: "-",
        name_afp: "花火大会",
        name_afe: "花火大会",
        games: "AF, AF+, AC, AFe+",
        date: "July 4",
        date_europe: "1st Sunday in August",
        date_afp: "-",
        date_af: "-",
    },
    EventRow {
        event: "Meteor Shower",
        name_jp_translation: "-",
        name_afp: "-",
        name_afe: "流星群",
        games: "AC, AFe+",
        date: "August 12",
        date_europe: "-",
        date_afp: "-",
        date_af: "-",
    },
    EventRow {
        event: "Labor Day",
        name_jp_translation: "-",
        name_afp: "-",
        name_afe: "-",
        games: "AC",
        date: "1st Monday in September",
        date_europe: "-",
        date_afp: "-",
        date_af: "-",
    },
    EventRow {
        event: "Harvest Moon",
        name_jp_translation: "-",
        name_afp: "お月見",
        name_afe: "お月見",
        games: "AF, AF+, AC, AFe+",
        date: "Varies between September 8 and October 7",
        date_europe: "-",
        date_afp: "-",
        date_af: "-",
    },
    EventRow {
        event: "秋分の日",
        name_jp_translation: "Autumn Equinox Day",
        name_afp: "-",
        name_afe: "-",
        games: "AF, AF+, AFe+",
        date: "Autumn Equinox (day varies)",
        date_europe: "-",
        date_afp: "-",
        date_af: "-",
    },
    EventRow {
        event: "うんどうかい",
        name_jp_translation: "Sports Fair",
        name_afp: "-",
        name_afe: "-",
        games: "AF, AF+, AFe+",
        date: "1st Monday in October",
        date_europe: "-",
        date_afp: "2nd Monday in October",
        date_af: "-",
    },
    EventRow {
        event: "Explorer's Day",
        name_jp_translation: "-",
        name_afp: "-",
        name_afe: "-",
        games: "AC",
        date: "2nd Monday in October",
        date_europe: "-",
        date_afp: "-",
        date_af: "-",
    },
    EventRow {
        event: "Mushrooming Season",
        name_jp_translation: "-",
        name_afp: "-",
        name_afe: "-",
        games: "AF+, AC",
        date: "November 1-30",
        date_europe: "-",
        date_afp: "-",
        date_af: "-",
    },
    EventRow {
        event: "Halloween",
        name_jp_translation: "-",
        name_afp: "-",
        name_afe: "ハロウィン",
        games: "AC, AFe+",
        date: "October 31",
        date_europe: "-",
        date_afp: "-",
        date_af: "-",
    },
    EventRow {
        event: "Harvest Festival",
        name_jp_translation: "-",
        name_afp: "-",
        name_afe: "ハーベストフェスティバル",
        games: "AC, AFe+",
        date: "4th Thursday in November",
        date_europe: "-",
        date_afp: "-",
        date_af: "-",
    },
    EventRow {
        event: "Sale Day",
        name_jp_translation: "-",
        name_afp: "-",
        name_afe: "セールデー",
        games: "AC, AFe+",
        date: "Day after 4th Thursday in November",
        date_europe: "-",
        date_afp: "-",
        date_af: "-",
    },
    EventRow {
        event: "Stock Clearance",
        name_jp_translation: "-",
        name_afp: "在庫一掃セール",
        name_afe: "在庫一掃セール",
        games: "AF+, AC, AFe+",
        date: "Last Day of every Month",
        date_europe: "-",
        date_afp: "-",
        date_af: "-",
    },
    EventRow {
        event: "ムシとり大会",
        name_jp_translation: "Bug-Off",
        name_afp: "-",
        name_afe: "-",
        games: "AFe+",
        date: "TBD",
        date_europe: "-",
        date_afp: "-",
        date_af: "-",
    },
    EventRow {
        event: "Toy Day",
        name_jp_translation: "-",
        name_afp: "-",
        name_afe: "おもちゃの日",
        games: "AC, AFe+",
        date: "December 24",
        date_europe: "-",
        date_afp: "-",
        date_af: "-",
    },
    EventRow {
        event: "New Year's Eve",
        name_jp_translation: "-",
        name_afp: "大みそか",
        name_afe: "大みそか",
        games: "AF, AF+, AC, AFe+",
        date: "December 31",
        date_europe: "-",
        date_afp: "-",
        date_af: "-",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use ac_core::models::Game;

    #[test]
    fn rows_have_well_formed_game_codes() {
        for row in reference_rows() {
            for code in row.games.split(", ") {
                assert!(
                    Game::from_code(code).is_some(),
                    "row {:?} has unknown game code {code:?}",
                    row.event
                );
            }
        }
    }

    #[test]
    fn placeholder_cells_use_dash() {
        for row in reference_rows() {
            for cell in [row.date_europe, row.date_afp, row.date_af] {
                assert!(!cell.is_empty(), "row {:?} has an empty cell", row.event);
            }
        }
    }
}
