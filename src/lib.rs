//! Liturgical calendar and Sunday lectionary.
//!
//! Given a date, this crate works out where it stands in the church year:
//! the year of the three-year Sunday cycle, the season, and the Sunday, feast
//! or holy day observed on it. A reading table then maps that observance to
//! its appointed scripture readings.
//!
//! Dates are plain calendar dates; there is no time of day or timezone
//! anywhere in the calculation, and every calculation takes its date as an
//! argument.
//!
//! # Examples
//!
//! Classifying a date:
//!
//! ```
//! use lekcionaro::Date;
//! use lekcionaro::liturgical::{classify, LiturgicalYear, Season};
//!
//! let date = Date::from_gregorian(2023, 12, 3).unwrap();
//! let observance = classify(date).unwrap();
//!
//! assert_eq!("The First Sunday in Advent", observance.name);
//! assert_eq!(LiturgicalYear::B, observance.year);
//! assert_eq!(Season::Advent, observance.season);
//! ```
//!
//! Resolving its readings from a table:
//!
//! ```
//! use lekcionaro::Date;
//! use lekcionaro::lectionary::Lectionary;
//! use lekcionaro::liturgical::classify;
//!
//! let table = Lectionary::from_json_str(r#"{
//!     "The First Sunday in Advent": {
//!         "Year B": ["Isa 64:1-9", "Ps 80 or 80:1-7v", "1 Cor 1:1-9", "Mark 13:24-37"]
//!     }
//! }"#).unwrap();
//!
//! let observance = classify(Date::from_gregorian(2023, 12, 3).unwrap()).unwrap();
//! let readings = table.resolve(&observance).unwrap();
//!
//! assert_eq!("Ps 80 or 80:1-7v", readings.citations()[1]);
//! ```
//!
//! Easter:
//!
//! ```
//! use lekcionaro::computus::easter;
//!
//! assert_eq!("2285-03-22", easter(2285).unwrap().iso_gregorian());
//! ```

pub mod citation;
pub mod computus;
pub mod config;
pub mod date;
pub mod error;
pub mod lectionary;
pub mod liturgical;
pub mod passage;
pub mod psalter;

pub use date::{Date, YearType};
pub use error::{Error, Result};
pub use lectionary::{Lectionary, ReadingSet};
pub use liturgical::{Observance, classify};
