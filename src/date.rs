//! Plain calendar date, without time of day or timezone.

use std::fmt;
use std::ops::{Add, RangeInclusive, Sub};
use std::str::FromStr;

use crate::error::ParseDateError;

/// Years accepted by [`Date::from_gregorian`].
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1..=9999;

/// A date in the (proleptic) Gregorian calendar.
///
/// Internally a Julian day number (JDN), so differences and offsets in days
/// are plain integer arithmetic.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Date {
    jdn: u32,
}

impl Date {
    /// January 1, 1
    pub const MIN: Date = Date { jdn: 1721426 };
    /// December 31, 9999
    pub const MAX: Date = Date { jdn: 5373484 };

    /// Creates a `Date` with a Julian day number (JDN).
    ///
    /// Any JDN is accepted; dates outside [`SUPPORTED_YEARS`] have no
    /// liturgical classification.
    pub fn from_jdn(jdn: u32) -> Self {
        Self { jdn }
    }
    /// Returns the Julian day number (JDN) of the date.
    pub fn jdn(&self) -> u32 {
        self.jdn
    }

    /// Creates a `Date` with a Gregorian calendar date.
    ///
    /// Returns `None` unless `year` is within [`SUPPORTED_YEARS`] and
    /// `month`/`day` name a real day of that year.
    ///
    /// # Example
    ///
    /// ```
    /// use lekcionaro::Date;
    ///
    /// let date = Date::from_gregorian(2024, 2, 29).unwrap();
    /// assert_eq!(2460370, date.jdn());
    /// assert_eq!(None, Date::from_gregorian(2023, 2, 29));
    /// ```
    pub fn from_gregorian(year: i32, month: i32, day: i32) -> Option<Self> {
        if !SUPPORTED_YEARS.contains(&year) || !(1..=12).contains(&month) {
            return None;
        }
        if !(1..=days_in_month(month, YearType::from_gregorian(year))).contains(&day) {
            return None;
        }
        let (y, m, d) = (year, month, day);
        u32::try_from(
            (1461 * (y + 4800 + (m - 14) / 12)) / 4 + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
                - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
                + d
                - 32075,
        )
        .map(Self::from_jdn)
        .ok()
    }

    /// Whether the date falls within [`SUPPORTED_YEARS`], i.e. between
    /// [`Date::MIN`] and [`Date::MAX`].
    pub fn is_supported(&self) -> bool {
        (Self::MIN..=Self::MAX).contains(self)
    }

    /// Represents the date in Gregorian calendar.
    ///
    /// Returns in `(year, month, day)` format.
    ///
    /// # Example
    ///
    /// ```
    /// use lekcionaro::Date;
    ///
    /// let date = Date::from_jdn(2451545);
    /// assert_eq!((2000, 1, 1), date.gregorian());
    /// ```
    pub fn gregorian(&self) -> (i32, i32, i32) {
        let jdn = self.jdn as i64;
        let f = jdn + 1401 + (((4 * jdn + 274277) / 146097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
        (year as i32, month as i32, day as i32)
    }
    pub fn year(&self) -> i32 {
        self.gregorian().0
    }

    /// Formats the date in ISO 8601 format.
    ///
    /// # Example
    ///
    /// ```
    /// use lekcionaro::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!("2000-01-01", date.iso_gregorian());
    /// ```
    pub fn iso_gregorian(&self) -> String {
        let (y, m, d) = self.gregorian();
        format!("{:04}-{:02}-{:02}", y, m, d)
    }

    /// Returns the day of week of the date, in ISO-8601 numbering (i.e.
    /// `1..=7` for Monday through Sunday)
    ///
    /// # Example
    ///
    /// ```
    /// use lekcionaro::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(6, date.day_of_week()); // Saturday
    /// ```
    pub fn day_of_week(&self) -> i32 {
        (self.jdn % 7 + 1) as i32
    }
    pub fn is_sunday(&self) -> bool {
        self.day_of_week() == 7
    }

    /// The date itself if it is a Sunday, otherwise the Sunday before it.
    pub fn sunday_on_or_before(self) -> Date {
        self + -(self.day_of_week() % 7)
    }
    /// The date itself if it is a Sunday, otherwise the Sunday after it.
    pub fn sunday_on_or_after(self) -> Date {
        self + (7 - self.day_of_week() % 7) % 7
    }

    /// Adds `days`, returning `None` if the result leaves
    /// [`SUPPORTED_YEARS`].
    ///
    /// # Example
    ///
    /// ```
    /// use lekcionaro::Date;
    ///
    /// let date = Date::from_gregorian(9999, 12, 25).unwrap();
    /// assert_eq!(Some(Date::MAX), date.checked_add(6));
    /// assert_eq!(None, date.checked_add(7));
    /// ```
    pub fn checked_add(self, days: i32) -> Option<Date> {
        let date = Date::from_jdn(self.jdn.checked_add_signed(days)?);
        date.is_supported().then_some(date)
    }

    /// Iterates over every date from `start` to `end`, both inclusive.
    ///
    /// ```
    /// use lekcionaro::Date;
    ///
    /// let start = Date::from_gregorian(2023, 12, 30).unwrap();
    /// let end = Date::from_gregorian(2024, 1, 2).unwrap();
    /// let days: Vec<_> = Date::range(start, end).map(|d| d.iso_gregorian()).collect();
    /// assert_eq!(vec!["2023-12-30", "2023-12-31", "2024-01-01", "2024-01-02"], days);
    /// ```
    pub fn range(start: Date, end: Date) -> DateRange {
        DateRange {
            jdns: start.jdn..=end.jdn,
        }
    }
}

/// Saturates at the ends of the JDN range; see [`Date::checked_add`].
impl Add<i32> for Date {
    type Output = Date;
    fn add(self, rhs: i32) -> Self::Output {
        Date::from_jdn(self.jdn.saturating_add_signed(rhs))
    }
}
impl Sub<i32> for Date {
    type Output = Date;
    fn sub(self, rhs: i32) -> Self::Output {
        self + rhs.saturating_neg()
    }
}
impl Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> Self::Output {
        (i64::from(self.jdn) - i64::from(rhs.jdn)) as i32
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.iso_gregorian())
    }
}

impl FromStr for Date {
    type Err = ParseDateError;

    /// Parses an ISO 8601 calendar date (`YYYY-MM-DD`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseDateError {
            input: s.to_owned(),
        };
        let mut fields = s.trim().splitn(3, '-');
        let mut next = || -> Result<i32, ParseDateError> {
            let field = fields.next().ok_or_else(err)?;
            if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
                return Err(err());
            }
            field.parse().map_err(|_| err())
        };
        let (y, m, d) = (next()?, next()?, next()?);
        Date::from_gregorian(y, m, d).ok_or_else(err)
    }
}

/// Inclusive range of dates, see [`Date::range`].
#[derive(Debug, Clone)]
pub struct DateRange {
    jdns: RangeInclusive<u32>,
}

impl Iterator for DateRange {
    type Item = Date;
    fn next(&mut self) -> Option<Date> {
        self.jdns.next().map(Date::from_jdn)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.jdns.size_hint()
    }
}

/// Indicates whether a year is a leap year or common year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearType {
    Common,
    Leap,
}

impl YearType {
    /// Determines if `year` is a leap year in Gregorian calendar.
    pub fn from_gregorian(year: i32) -> Self {
        if year % 4 == 0 && year % 100 != 0 || year % 400 == 0 {
            Self::Leap
        } else {
            Self::Common
        }
    }
    /// Returns `true` if `self` is `Leap`, otherwise `false`.
    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
}

fn days_in_month(month: i32, year_type: YearType) -> i32 {
    match month {
        2 => 28 + year_type.is_leap() as i32,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_gregorian() {
        let date = Date::from_gregorian(1970, 1, 1).unwrap();
        assert_eq!(2440588, date.jdn());
        let date = Date::from_gregorian(2021, 9, 8).unwrap();
        assert_eq!(2459466, date.jdn());
    }

    #[test]
    fn rejects_invalid() {
        for (y, m, d) in [
            (2023, 2, 29),
            (1900, 2, 29),
            (2024, 4, 31),
            (2024, 13, 1),
            (2024, 0, 1),
            (2024, 1, 0),
            (0, 1, 1),
            (10000, 1, 1),
        ] {
            assert_eq!(None, Date::from_gregorian(y, m, d), "{y:04}-{m:02}-{d:02}");
        }
        assert!(Date::from_gregorian(2000, 2, 29).is_some());
    }

    #[test]
    fn to_gregorian() {
        let date = Date::from_jdn(2440588);
        assert_eq!((1970, 1, 1), date.gregorian());
        let date = Date::from_jdn(2459466);
        assert_eq!((2021, 9, 8), date.gregorian());
        let date = Date::from_jdn(2451545);
        assert_eq!((2000, 1, 1), date.gregorian());
    }

    #[test]
    fn supported_range_round_trips() {
        for (y, m, d) in [(1, 1, 1), (9999, 12, 31), (2285, 3, 22)] {
            assert_eq!((y, m, d), Date::from_gregorian(y, m, d).unwrap().gregorian());
        }
    }

    #[test]
    fn to_day_of_week() {
        let date = Date::from_gregorian(1970, 1, 1).unwrap();
        assert_eq!(4, date.day_of_week());
        let date = Date::from_gregorian(2021, 9, 8).unwrap();
        assert_eq!(3, date.day_of_week());
        let date = Date::from_gregorian(2024, 12, 1).unwrap();
        assert!(date.is_sunday());
    }

    #[test]
    fn sundays() {
        let tue = Date::from_gregorian(2024, 12, 24).unwrap();
        assert_eq!("2024-12-22", tue.sunday_on_or_before().iso_gregorian());
        assert_eq!("2024-12-29", tue.sunday_on_or_after().iso_gregorian());
        let sun = Date::from_gregorian(2023, 12, 24).unwrap();
        assert_eq!(sun, sun.sunday_on_or_before());
        assert_eq!(sun, sun.sunday_on_or_after());
    }

    #[test]
    fn arithmetic() {
        let date = Date::from_gregorian(2024, 3, 31).unwrap();
        assert_eq!("2024-02-14", (date - 46).iso_gregorian());
        assert_eq!("2024-05-19", (date + 49).iso_gregorian());
        assert_eq!(46, date - (date - 46));
    }

    #[test]
    fn supported_bounds() {
        assert_eq!((1, 1, 1), Date::MIN.gregorian());
        assert_eq!((9999, 12, 31), Date::MAX.gregorian());
        assert_eq!(Some(Date::MIN), Date::from_gregorian(1, 1, 1));
        assert_eq!(Some(Date::MAX), Date::from_gregorian(9999, 12, 31));
        assert!(!(Date::MAX + 1).is_supported());
        assert!(!(Date::MIN - 1).is_supported());
    }

    #[test]
    fn checked_add() {
        let date = Date::from_gregorian(2024, 1, 1).unwrap();
        assert_eq!(Date::from_gregorian(2024, 3, 1), date.checked_add(60));
        assert_eq!(Date::from_gregorian(2023, 12, 2), date.checked_add(-30));
        for days in [2_000_000_000, i32::MAX, i32::MIN, 3_000_000, -740_000] {
            assert_eq!(None, date.checked_add(days), "{days}");
        }
        assert_eq!(Some(Date::MIN), Date::MAX.checked_add(Date::MIN - Date::MAX));
    }

    #[test]
    fn add_saturates() {
        let date = Date::from_gregorian(2024, 1, 1).unwrap();
        assert_eq!(u32::MAX, (date + i32::MAX + i32::MAX).jdn());
        assert_eq!(0, (date - i32::MAX).jdn());
        assert_eq!(0, (date + i32::MIN).jdn());
    }

    #[test]
    fn parse() {
        assert_eq!(
            Date::from_gregorian(2022, 11, 27),
            "2022-11-27".parse().ok()
        );
        for bad in ["", "2022-11", "2022-11-27-1", "2022/11/27", "2022-02-30", "-2022-1-1"] {
            assert_eq!(
                Err(ParseDateError { input: bad.into() }),
                bad.parse::<Date>(),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn range() {
        let start = Date::from_gregorian(2024, 2, 27).unwrap();
        let end = Date::from_gregorian(2024, 3, 2).unwrap();
        let days = Date::range(start, end);
        assert_eq!((5, Some(5)), days.size_hint());
        assert_eq!(5, days.count());
        assert_eq!(0, Date::range(end, start).count());
    }

    #[test]
    fn iso_format() {
        assert_eq!(
            "2021-09-08",
            Date::from_gregorian(2021, 9, 8).unwrap().to_string()
        );
    }
}
