//! Liturgical calendar
//!
//! Maps a [`Date`] to its liturgical year (the three-year Sunday cycle), its
//! season, and the observance falling on it, if any.
//!
//! The calendar year is the unit of computation: every rule is expressed as
//! an offset from one of the [`Anchors`] of the date's own calendar year, or
//! as a fixed month and day.

use serde::{Deserialize, Serialize};

use crate::computus::Anchors;
use crate::date::Date;

pub mod fmt;
pub mod rules;

/// One year of the three-year Sunday cycle. A new year begins on Advent
/// Sunday.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum LiturgicalYear {
    #[serde(rename = "Year A")]
    A,
    #[serde(rename = "Year B")]
    B,
    #[serde(rename = "Year C")]
    C,
}

impl LiturgicalYear {
    /// The liturgical year that begins on Advent Sunday of calendar year
    /// `start_year`. Years divisible by 3 are Year A.
    ///
    /// # Example
    ///
    /// ```
    /// use lekcionaro::liturgical::LiturgicalYear;
    ///
    /// assert_eq!(LiturgicalYear::A, LiturgicalYear::starting_in(2022));
    /// assert_eq!(LiturgicalYear::C, LiturgicalYear::starting_in(2024));
    /// ```
    pub fn starting_in(start_year: i32) -> Self {
        match start_year.rem_euclid(3) {
            0 => Self::A,
            1 => Self::B,
            _ => Self::C,
        }
    }
    /// Label used in the reading table, e.g. `"Year A"`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::A => "Year A",
            Self::B => "Year B",
            Self::C => "Year C",
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Season {
    Advent,
    Christmas,
    Epiphany,
    Lent,
    Easter,
    Pentecost,
}

/// Precedence of an observance, lowest first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    Minor,
    Major,
    Sunday,
    Fixed,
    Principal,
}

/// A named observance on a particular date.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Observance {
    pub date: Date,
    /// Name of the day, also its key in the reading table
    pub name: &'static str,
    pub year: LiturgicalYear,
    pub season: Season,
    pub rank: Rank,
}

/// Where a date stands in the liturgical calendar, whether or not anything
/// is observed on it.
///
/// # Example
///
/// ```
/// use lekcionaro::Date;
/// use lekcionaro::liturgical::{LiturgicalDay, LiturgicalYear, Season};
///
/// let day = LiturgicalDay::new(Date::from_gregorian(2024, 12, 1).unwrap()).unwrap();
///
/// assert_eq!(LiturgicalYear::C, day.year);
/// assert_eq!(Season::Advent, day.season);
/// assert_eq!("The First Sunday in Advent", day.observance().unwrap().name);
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct LiturgicalDay {
    pub date: Date,
    /// Anchors of the calendar year `date` falls in
    pub anchors: Anchors,
    pub year: LiturgicalYear,
    pub season: Season,
}

impl LiturgicalDay {
    /// Returns `None` if `date` is not [supported](Date::is_supported).
    pub fn new(date: Date) -> Option<Self> {
        Anchors::for_date(date).map(|anchors| Self::with_anchors(date, anchors))
    }

    /// `anchors` must belong to the calendar year of `date`.
    fn with_anchors(date: Date, anchors: Anchors) -> Self {
        debug_assert_eq!(anchors.year, date.year());
        let start_year = if date >= anchors.advent_sunday {
            anchors.year
        } else {
            anchors.year - 1
        };
        LiturgicalDay {
            date,
            anchors,
            year: LiturgicalYear::starting_in(start_year),
            season: season(date, &anchors),
        }
    }

    /// Runs the rules in order of precedence; the first one to match names
    /// the day.
    pub fn observance(&self) -> Option<Observance> {
        rules::RULES.iter().find_map(|rule| {
            rule.apply(self).map(|name| Observance {
                date: self.date,
                name,
                year: self.year,
                season: self.season,
                rank: rule.rank,
            })
        })
    }

    pub(crate) fn month_day(&self) -> (i32, i32) {
        let (_, m, d) = self.date.gregorian();
        (m, d)
    }
}

fn season(date: Date, anchors: &Anchors) -> Season {
    use Season::*;
    if date < anchors.epiphany {
        Christmas
    } else if date < anchors.ash_wednesday {
        Epiphany
    } else if date < anchors.easter_day {
        Lent
    } else if date < anchors.pentecost {
        Easter
    } else if date < anchors.advent_sunday {
        Pentecost
    } else if date < anchors.christmas_day {
        Advent
    } else {
        Christmas
    }
}

/// Returns the observance falling on `date`, or `None` for an ordinary
/// weekday or a date outside the supported years.
///
/// # Example
///
/// ```
/// use lekcionaro::Date;
/// use lekcionaro::liturgical::{classify, LiturgicalYear, Rank, Season};
///
/// let observance = classify(Date::from_gregorian(2022, 11, 27).unwrap()).unwrap();
///
/// assert_eq!("The First Sunday in Advent", observance.name);
/// assert_eq!(LiturgicalYear::A, observance.year);
/// assert_eq!(Season::Advent, observance.season);
/// assert_eq!(Rank::Sunday, observance.rank);
/// ```
pub fn classify(date: Date) -> Option<Observance> {
    LiturgicalDay::new(date)?.observance()
}

/// Liturgical season of `date`, `None` outside the supported years.
pub fn season_for(date: Date) -> Option<Season> {
    LiturgicalDay::new(date).map(|day| day.season)
}

/// Liturgical year (A, B or C) of `date`, `None` outside the supported years.
pub fn year_for(date: Date) -> Option<LiturgicalYear> {
    LiturgicalDay::new(date).map(|day| day.year)
}

/// All observances from `start` to `end` inclusive, in date order.
///
/// The range is cut to the supported years.
///
/// # Example
///
/// ```
/// use lekcionaro::Date;
/// use lekcionaro::liturgical::observances;
///
/// let start = Date::from_gregorian(2024, 12, 22).unwrap();
/// let end = Date::from_gregorian(2024, 12, 29).unwrap();
/// let names: Vec<_> = observances(start, end).iter().map(|o| o.name).collect();
///
/// assert_eq!(
///     vec![
///         "The Fourth Sunday in Advent",
///         "Christmas Day",
///         "Saint Stephen",
///         "Saint John",
///         "Holy Innocents",
///         "The First Sunday of Christmas",
///     ],
///     names
/// );
/// ```
pub fn observances(start: Date, end: Date) -> Vec<Observance> {
    let mut anchors: Option<Anchors> = None;
    Date::range(start.max(Date::MIN), end.min(Date::MAX))
        .filter_map(|date| {
            let year = date.year();
            let a = match anchors.filter(|a| a.year == year) {
                Some(a) => a,
                None => *anchors.insert(Anchors::for_date(date)?),
            };
            LiturgicalDay::with_anchors(date, a).observance()
        })
        .collect()
}
