//! Psalm texts and psalm references.
//!
//! The psalter is a table of verses split at the asterisk into two halves,
//! loaded from JSON of the shape
//!
//! ```json
//! { "23": { "1": { "head": "The LORD is my shepherd;", "tail": "therefore I can lack nothing." } } }
//! ```
//!
//! Extracting that table from a prayer book is a separate, offline step.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use log::debug;
use serde::Deserialize;

use crate::citation;
use crate::error::{InvalidReference, TableError};

/// Verses in the longest psalm (119).
pub const MAX_VERSE: u32 = 176;

/// A psalm reference reduced to chapter and the verses to read.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PsalmReference {
    pub chapter: u32,
    /// `None` for the whole psalm
    pub verses: Option<Vec<u32>>,
}

impl PsalmReference {
    /// Parses references such as `"Ps 23"`, `"Psalm 23:4"`, `"Ps 23:1,3,5"` or
    /// `"Ps 80:(1-3)7-10,19"`.
    ///
    /// Ranges are expanded, optional verses in parentheses are included, and
    /// trailing markers such as `v` or half-verse `a`/`b` are dropped. Of
    /// alternatives joined by `" or "`, the first is taken. Verse numbers
    /// past [`MAX_VERSE`] are malformed.
    ///
    /// # Example
    ///
    /// ```
    /// use lekcionaro::psalter::PsalmReference;
    ///
    /// let r = PsalmReference::parse("Ps 80:(1-3)7-10,19").unwrap();
    /// assert_eq!(80, r.chapter);
    /// assert_eq!(Some(vec![1, 2, 3, 7, 8, 9, 10, 19]), r.verses);
    /// ```
    pub fn parse(reference: &str) -> Result<Self, InvalidReference> {
        let malformed = || InvalidReference::Malformed(reference.to_owned());
        let first = citation::first_option(reference);
        let body = ["Psalm ", "Pss ", "Ps "]
            .iter()
            .find_map(|p| first.strip_prefix(p))
            .unwrap_or(&first)
            .trim();

        let (chapter, verses) = match body.split_once(':') {
            Some((c, v)) => (c, Some(v)),
            None => (body, None),
        };
        let chapter = number(chapter).ok_or_else(malformed)?;
        let Some(verses) = verses else {
            return Ok(Self {
                chapter,
                verses: None,
            });
        };

        let mut list = Vec::new();
        for piece in verses.split([',', '(', ')']).map(str::trim) {
            if piece.is_empty() {
                continue;
            }
            let (start, end) = match piece.split_once('-') {
                Some((s, e)) => (number(s), number(e)),
                None => (number(piece), number(piece)),
            };
            match (start, end) {
                (Some(s), Some(e)) if s <= e && e <= MAX_VERSE => list.extend(s..=e),
                _ => return Err(malformed()),
            }
        }
        if list.is_empty() {
            return Err(malformed());
        }
        Ok(Self {
            chapter,
            verses: Some(list),
        })
    }
}

impl FromStr for PsalmReference {
    type Err = InvalidReference;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// A verse or chapter number, ignoring trailing letters ("7v", "9a").
fn number(s: &str) -> Option<u32> {
    let digits = s.trim().trim_end_matches(|c: char| c.is_ascii_alphabetic());
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// One verse, split at the asterisk.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Verse {
    pub head: String,
    pub tail: String,
}

/// The psalter, psalm number → verse number → verse.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Psalter {
    psalms: BTreeMap<u32, BTreeMap<u32, Verse>>,
}

impl Psalter {
    pub fn from_json_str(json: &str) -> Result<Self, TableError> {
        Ok(serde_json::from_str(json)?)
    }
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TableError> {
        Ok(serde_json::from_reader(reader)?)
    }
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| TableError::Io {
            path: path.to_owned(),
            source,
        })?;
        let psalter = Self::from_reader(BufReader::new(file))?;
        debug!("loaded {} psalms from {}", psalter.len(), path.display());
        Ok(psalter)
    }

    /// Number of psalms in the table.
    pub fn len(&self) -> usize {
        self.psalms.len()
    }
    pub fn is_empty(&self) -> bool {
        self.psalms.is_empty()
    }

    /// Renders the verses named by `reference`.
    ///
    /// The text begins with a `Psalm N` heading and a blank line, followed by
    /// two lines per verse: the numbered first half ending in an asterisk,
    /// then the second half.
    pub fn get_psalm(&self, reference: &str) -> Result<String, InvalidReference> {
        let reference = PsalmReference::parse(reference)?;
        self.render(&reference)
    }

    pub fn render(&self, reference: &PsalmReference) -> Result<String, InvalidReference> {
        let chapter = reference.chapter;
        let psalm = self
            .psalms
            .get(&chapter)
            .ok_or(InvalidReference::NoSuchPsalm(chapter))?;

        let mut lines = vec![format!("Psalm {chapter}\n")];
        let mut push = |n: u32, verse: &Verse| {
            lines.push(format!("{n} {} *", verse.head));
            lines.push(verse.tail.clone());
        };
        match &reference.verses {
            None => psalm.iter().for_each(|(&n, verse)| push(n, verse)),
            Some(verses) => {
                for &n in verses {
                    let verse = psalm
                        .get(&n)
                        .ok_or(InvalidReference::NoSuchVerse { chapter, verse: n })?;
                    push(n, verse);
                }
            }
        }
        Ok(lines.join("\n"))
    }
}
