//! Gregorian computus and the moveable anchor dates of a calendar year.

use crate::date::Date;

/// Returns the date of Easter in the Gregorian calendar.
///
/// Always falls on March 22 through April 25. Returns `None` for years
/// outside [`SUPPORTED_YEARS`](crate::date::SUPPORTED_YEARS).
///
/// # Example
///
/// ```
/// use lekcionaro::computus::easter;
///
/// assert_eq!("2024-03-31", easter(2024).unwrap().iso_gregorian());
/// ```
pub fn easter(year: i32) -> Option<Date> {
    // anonymous Gregorian algorithm (Meeus/Jones/Butcher)
    let a = year % 19;
    let (b, c) = (year / 100, year % 100);
    let (d, e) = (b / 4, b % 4);
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    // epact-derived distance from March 21 to the paschal full moon
    let h = (19 * a + b - d - g + 15) % 30;
    let (i, k) = (c / 4, c % 4);
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;
    Date::from_gregorian(year, n / 31, n % 31 + 1)
}

/// Key dates of one calendar year that the liturgical calendar hangs on.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Anchors {
    /// Calendar year these dates belong to
    pub year: i32,
    pub easter_day: Date,
    /// Easter − 46 days
    pub ash_wednesday: Date,
    /// Easter + 49 days
    pub pentecost: Date,
    /// Fourth Sunday before Christmas Day, the Sunday nearest November 30
    pub advent_sunday: Date,
    /// January 6
    pub epiphany: Date,
    /// December 25
    pub christmas_day: Date,
}

impl Anchors {
    /// Computes the anchors of calendar year `year`.
    ///
    /// Returns `None` for years outside the supported range.
    ///
    /// # Example
    ///
    /// ```
    /// use lekcionaro::computus::Anchors;
    ///
    /// let anchors = Anchors::new(2038).unwrap();
    /// assert_eq!("2038-04-25", anchors.easter_day.iso_gregorian());
    /// assert_eq!("2038-11-28", anchors.advent_sunday.iso_gregorian());
    /// ```
    pub fn new(year: i32) -> Option<Self> {
        let easter_day = easter(year)?;
        let christmas_day = Date::from_gregorian(year, 12, 25)?;
        Some(Anchors {
            year,
            easter_day,
            ash_wednesday: easter_day - 46,
            pentecost: easter_day + 49,
            advent_sunday: (christmas_day - 1).sunday_on_or_before() - 21,
            epiphany: Date::from_gregorian(year, 1, 6)?,
            christmas_day,
        })
    }
    /// Computes the anchors of the calendar year `date` falls in.
    ///
    /// Returns `None` if `date` is not [supported](Date::is_supported).
    pub fn for_date(date: Date) -> Option<Self> {
        Self::new(date.year())
    }
}
