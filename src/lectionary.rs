//! Reading table and the lookup from an observance to its readings.
//!
//! The table is data, not code: it is loaded once from JSON and handed to
//! whoever needs to resolve readings. Two shapes of entry are accepted:
//!
//! ```json
//! {
//!     "The First Sunday in Advent": {
//!         "Year A": ["Isa 2:1-5", "Ps 122", "Rom 13:8-14", "Matt 24:29-44"]
//!     },
//!     "Christmas Day": {
//!         "I": { "Year A": ["Isa 9:2-7", "Ps 96", "Titus 2:11-14", "Luke 2:1-20"] }
//!     }
//! }
//! ```
//!
//! The second, with a level of service variants, is used for days that
//! appoint alternative sets of readings.

use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::{debug, warn};
use serde::Deserialize;

use crate::citation;
use crate::error::{LookupError, TableError};
use crate::liturgical::fmt::{CHRISTMAS_DAY, EASTER_DAY};
use crate::liturgical::{LiturgicalYear, Observance};

type ByYear = BTreeMap<LiturgicalYear, Vec<String>>;

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Entry {
    Years(ByYear),
    Services(BTreeMap<String, ByYear>),
}

/// Service read on a day with several sets of readings, unless another one
/// is asked for.
///
/// # Example
///
/// ```
/// use lekcionaro::lectionary::default_service;
///
/// assert_eq!(Some("I"), default_service("Christmas Day"));
/// assert_eq!(Some("Principal Service"), default_service("Easter Day"));
/// assert_eq!(None, default_service("Trinity Sunday"));
/// ```
pub fn default_service(name: &str) -> Option<&'static str> {
    match name {
        CHRISTMAS_DAY => Some("I"),
        EASTER_DAY => Some("Principal Service"),
        _ => None,
    }
}

/// The reading table, keyed by observance name and liturgical year.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Lectionary {
    entries: HashMap<String, Entry>,
}

impl Lectionary {
    pub fn from_json_str(json: &str) -> Result<Self, TableError> {
        let table: Self = serde_json::from_str(json)?;
        debug!("loaded reading table with {} entries", table.len());
        Ok(table)
    }
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TableError> {
        let table: Self = serde_json::from_reader(reader)?;
        debug!("loaded reading table with {} entries", table.len());
        Ok(table)
    }
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| TableError::Io {
            path: path.to_owned(),
            source,
        })?;
        debug!("reading table from {}", path.display());
        Self::from_reader(BufReader::new(file))
    }

    /// Number of observances in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Service variants offered for `name`, in sorted order.
    ///
    /// Empty if `name` has a single set of readings or is not in the table.
    pub fn services(&self, name: &str) -> Vec<&str> {
        match self.entries.get(name) {
            Some(Entry::Services(services)) => services.keys().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// Readings appointed for `observance`, using the default service where
    /// the day has several.
    pub fn resolve(&self, observance: &Observance) -> Result<ReadingSet, LookupError> {
        self.resolve_named(observance.name, observance.year, None)
    }

    /// Readings of the given service on `observance`.
    pub fn resolve_service(
        &self,
        observance: &Observance,
        service: &str,
    ) -> Result<ReadingSet, LookupError> {
        self.resolve_named(observance.name, observance.year, Some(service))
    }

    /// Looks up readings by observance name and year.
    ///
    /// A miss is always an error: every name the calendar produces should
    /// be in the table.
    pub fn resolve_named(
        &self,
        name: &str,
        year: LiturgicalYear,
        service: Option<&str>,
    ) -> Result<ReadingSet, LookupError> {
        let result = self.lookup(name, year, service);
        if let Err(e) = &result {
            warn!("reading lookup failed: {e}");
        }
        result
    }

    fn lookup(
        &self,
        name: &str,
        year: LiturgicalYear,
        service: Option<&str>,
    ) -> Result<ReadingSet, LookupError> {
        let by_year = match (self.entries.get(name), service) {
            (None, _) => {
                return Err(LookupError::UnknownObservance { name: name.into() });
            }
            (Some(Entry::Years(by_year)), None) => by_year,
            (Some(Entry::Years(_)), Some(service)) => {
                return Err(LookupError::UnexpectedVariant {
                    name: name.into(),
                    variant: service.into(),
                });
            }
            (Some(Entry::Services(services)), service) => {
                let service = match service.or_else(|| default_service(name)) {
                    Some(s) => s,
                    None => return Err(LookupError::VariantRequired { name: name.into() }),
                };
                debug!("{name}: reading the \"{service}\" service");
                services
                    .get(service)
                    .ok_or_else(|| LookupError::MissingVariant {
                        name: name.into(),
                        variant: service.into(),
                    })?
            }
        };
        let citations = by_year
            .get(&year)
            .ok_or_else(|| LookupError::MissingYear {
                name: name.into(),
                year,
            })?;
        Ok(ReadingSet {
            citations: citations.clone(),
        })
    }
}

/// Citations appointed for one day, in the order they are read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ReadingSet {
    citations: Vec<String>,
}

impl ReadingSet {
    pub fn new(citations: Vec<String>) -> Self {
        Self { citations }
    }
    /// Citations exactly as stored in the table.
    pub fn citations(&self) -> &[String] {
        &self.citations
    }
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.citations.iter()
    }
    pub fn len(&self) -> usize {
        self.citations.len()
    }
    pub fn is_empty(&self) -> bool {
        self.citations.is_empty()
    }

    /// First alternative of every citation.
    ///
    /// # Example
    ///
    /// ```
    /// use lekcionaro::lectionary::ReadingSet;
    ///
    /// let readings = ReadingSet::new(vec!["Isa 64:1-9".into(), "Ps 80 or 80:1-7v".into()]);
    /// assert_eq!(vec!["Isa 64:1-9", "Ps 80"], readings.first_options());
    /// ```
    pub fn first_options(&self) -> Vec<String> {
        self.options(0)
    }
    /// The alternative at `index` of every citation, falling back to the
    /// first where a citation offers fewer.
    pub fn options(&self, index: usize) -> Vec<String> {
        self.citations
            .iter()
            .map(|c| citation::option(c, index))
            .collect()
    }
}

impl<'a> IntoIterator for &'a ReadingSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;
    fn into_iter(self) -> Self::IntoIter {
        self.citations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LiturgicalYear::*;

    const TABLE: &str = r#"{
        "Proper 8": {
            "Year A": ["Gen 22:1-18", "Ps 13", "Rom 6:12-23", "Matt 10:34-42"],
            "Year B": ["Lam 3:21-33", "Ps 30", "2 Cor 8:1-15", "Mark 5:22-43"]
        },
        "Christmas Day": {
            "I": { "Year A": ["Isa 9:1-7", "Ps 96", "Titus 2:11-14", "Luke 2:1-20"] },
            "II": { "Year A": ["Isa 62:6-12", "Ps 97", "Titus 3:4-7", "Luke 2:1-20"] }
        },
        "Easter Day": {
            "Principal Service": { "Year B": ["Acts 10:34-43", "Ps 118:14-29", "1 Cor 15:1-11", "Mark 16:1-8"] }
        },
        "Festival": {
            "Morning": { "Year A": ["Ps 1"] },
            "Evening": { "Year A": ["Ps 2"] }
        }
    }"#;

    fn table() -> Lectionary {
        Lectionary::from_json_str(TABLE).unwrap()
    }

    #[test]
    fn plain_entry() {
        let readings = table().resolve_named("Proper 8", B, None).unwrap();
        assert_eq!(
            vec!["Lam 3:21-33", "Ps 30", "2 Cor 8:1-15", "Mark 5:22-43"],
            readings.citations()
        );
    }

    #[test]
    fn default_services() {
        let t = table();
        assert_eq!(
            "Isa 9:1-7",
            t.resolve_named("Christmas Day", A, None).unwrap().citations()[0]
        );
        assert_eq!(
            "Isa 62:6-12",
            t.resolve_named("Christmas Day", A, Some("II")).unwrap().citations()[0]
        );
        assert_eq!(
            "Acts 10:34-43",
            t.resolve_named("Easter Day", B, None).unwrap().citations()[0]
        );
    }

    #[test]
    fn misses() {
        let t = table();
        let cases = [
            (
                t.resolve_named("Proper 99", A, None),
                LookupError::UnknownObservance {
                    name: "Proper 99".into(),
                },
            ),
            (
                t.resolve_named("Proper 8", C, None),
                LookupError::MissingYear {
                    name: "Proper 8".into(),
                    year: C,
                },
            ),
            (
                t.resolve_named("Christmas Day", A, Some("III")),
                LookupError::MissingVariant {
                    name: "Christmas Day".into(),
                    variant: "III".into(),
                },
            ),
            (
                t.resolve_named("Festival", A, None),
                LookupError::VariantRequired {
                    name: "Festival".into(),
                },
            ),
            (
                t.resolve_named("Proper 8", A, Some("I")),
                LookupError::UnexpectedVariant {
                    name: "Proper 8".into(),
                    variant: "I".into(),
                },
            ),
        ];
        for (result, std) in cases {
            assert_eq!(Err(std), result);
        }
    }

    #[test]
    fn lists_services() {
        let t = table();
        assert_eq!(vec!["I", "II"], t.services("Christmas Day"));
        assert!(t.services("Proper 8").is_empty());
        assert!(t.services("Nothing").is_empty());
        assert_eq!(4, t.len());
        assert!(t.contains("Festival"));
    }

    #[test]
    fn rejects_bad_json() {
        for bad in [r#"{"Proper 8": {"Year D": []}}"#, r#"{"Proper 8": ["Ps 1"]}"#, "["] {
            assert!(Lectionary::from_json_str(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn missing_file() {
        let err = Lectionary::from_path("/nonexistent/lectionary.json").unwrap_err();
        assert!(matches!(err, TableError::Io { .. }));
    }
}
