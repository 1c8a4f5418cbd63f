//! Names of observances, and text labels of the calendar enums.
//!
//! These strings double as keys into the reading table, so they must match
//! it exactly.

use std::fmt;

use super::{LiturgicalYear, Rank, Season};

pub const EASTER_DAY: &str = "Easter Day";
pub const ASCENSION_DAY: &str = "Ascension Day";
pub const DAY_OF_PENTECOST: &str = "Day of Pentecost";
pub const TRINITY_SUNDAY: &str = "Trinity Sunday";
pub const CHRISTMAS_DAY: &str = "Christmas Day";
pub const THE_EPIPHANY: &str = "The Epiphany";
pub const ALL_SAINTS_DAY: &str = "All Saints' Day";
pub const ASH_WEDNESDAY: &str = "Ash Wednesday";

/// Palm Sunday through Holy Saturday, i.e. Easter −7 through Easter −1.
pub const HOLY_WEEK: [&str; 7] = [
    "Palm Sunday",
    "Monday in Holy Week",
    "Tuesday in Holy Week",
    "Wednesday in Holy Week",
    "Maundy Thursday",
    "Good Friday",
    "Holy Saturday",
];

/// Easter +1 through Easter +6.
pub const EASTER_WEEK: [&str; 6] = [
    "Monday in Easter Week",
    "Tuesday in Easter Week",
    "Wednesday in Easter Week",
    "Thursday in Easter Week",
    "Friday in Easter Week",
    "Saturday in Easter Week",
];

pub const ADVENT_SUNDAYS: [&str; 4] = [
    "The First Sunday in Advent",
    "The Second Sunday in Advent",
    "The Third Sunday in Advent",
    "The Fourth Sunday in Advent",
];

pub const CHRISTMAS_SUNDAYS: [&str; 2] = [
    "The First Sunday of Christmas",
    "The Second Sunday of Christmas",
];

/// Sundays counted forward from the Sunday after January 6.
pub const EPIPHANY_SUNDAYS: [&str; 8] = [
    "The First Sunday of Epiphany: The Baptism of Our Lord",
    "The Second Sunday of Epiphany",
    "The Third Sunday of Epiphany",
    "The Fourth Sunday of Epiphany",
    "The Fifth Sunday of Epiphany",
    "The Sixth Sunday of Epiphany",
    "The Seventh Sunday of Epiphany",
    "The Eighth Sunday of Epiphany",
];
pub const SECOND_TO_LAST_EPIPHANY: &str = "The Second to Last Sunday of Epiphany";
pub const LAST_EPIPHANY: &str = "The Last Sunday of Epiphany: Transfiguration";

pub const LENT_SUNDAYS: [&str; 5] = [
    "The First Sunday in Lent",
    "The Second Sunday in Lent",
    "The Third Sunday in Lent",
    "The Fourth Sunday in Lent",
    "The Fifth Sunday in Lent",
];

/// Easter +7 through Easter +42.
pub const EASTER_SUNDAYS: [&str; 6] = [
    "The Second Sunday of Easter",
    "The Third Sunday of Easter",
    "The Fourth Sunday of Easter",
    "The Fifth Sunday of Easter",
    "The Sixth Sunday of Easter",
    "The Sunday after Ascension Day",
];

/// Proper 1 through Proper 29; Proper 29 is the Sunday before Advent.
pub const PROPERS: [&str; 29] = [
    "Proper 1", "Proper 2", "Proper 3", "Proper 4", "Proper 5", "Proper 6", "Proper 7",
    "Proper 8", "Proper 9", "Proper 10", "Proper 11", "Proper 12", "Proper 13", "Proper 14",
    "Proper 15", "Proper 16", "Proper 17", "Proper 18", "Proper 19", "Proper 20", "Proper 21",
    "Proper 22", "Proper 23", "Proper 24", "Proper 25", "Proper 26", "Proper 27", "Proper 28",
    "Proper 29",
];

/// Fixed-date commemorations as `((month, day), name)`, in calendar order.
pub const RED_LETTER_DAYS: &[((i32, i32), &str)] = &[
    ((1, 1), "Holy Name"),
    ((1, 18), "Confession of Saint Peter"),
    ((1, 25), "Conversion of Saint Paul"),
    ((2, 2), "The Presentation"),
    ((2, 24), "Saint Matthias"),
    ((3, 19), "Saint Joseph"),
    ((3, 25), "The Annunciation"),
    ((4, 25), "Saint Mark"),
    ((5, 1), "Saint Philip and Saint James"),
    ((5, 31), "The Visitation"),
    ((6, 11), "Saint Barnabas"),
    ((6, 24), "Nativity of Saint John the Baptist"),
    ((6, 29), "Saint Peter and Saint Paul"),
    ((7, 22), "Saint Mary Magdalene"),
    ((7, 25), "Saint James"),
    ((8, 6), "The Transfiguration"),
    ((8, 15), "Saint Mary the Virgin"),
    ((8, 24), "Saint Bartholomew"),
    ((9, 14), "Holy Cross Day"),
    ((9, 21), "Saint Matthew"),
    ((9, 29), "Saint Michael and All Angels"),
    ((10, 18), "Saint Luke"),
    ((10, 23), "Saint James of Jerusalem"),
    ((10, 28), "Saint Simon and Saint Jude"),
    ((11, 30), "Saint Andrew"),
    ((12, 21), "Saint Thomas"),
    ((12, 26), "Saint Stephen"),
    ((12, 27), "Saint John"),
    ((12, 28), "Holy Innocents"),
];

/// Looks up the red-letter day on `(month, day)`.
///
/// # Example
///
/// ```
/// use lekcionaro::liturgical::fmt;
///
/// assert_eq!(Some("Saint Matthew"), fmt::red_letter_day(9, 21));
/// assert_eq!(None, fmt::red_letter_day(9, 22));
/// ```
pub fn red_letter_day(month: i32, day: i32) -> Option<&'static str> {
    RED_LETTER_DAYS
        .binary_search_by_key(&(month, day), |&(md, _)| md)
        .ok()
        .map(|i| RED_LETTER_DAYS[i].1)
}

impl fmt::Display for LiturgicalYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Season::Advent => "Advent",
            Season::Christmas => "Christmas",
            Season::Epiphany => "Epiphany",
            Season::Lent => "Lent",
            Season::Easter => "Easter",
            Season::Pentecost => "Pentecost",
        })
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Rank::Minor => "minor",
            Rank::Major => "major",
            Rank::Sunday => "Sunday",
            Rank::Fixed => "fixed",
            Rank::Principal => "principal",
        })
    }
}
