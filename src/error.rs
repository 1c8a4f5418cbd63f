//! Error types.
//!
//! The calendar calculation itself cannot fail; everything here comes from
//! parsing input, loading tables, or looking things up in them.

use std::path::PathBuf;

use thiserror::Error;

use crate::liturgical::LiturgicalYear;

/// Result type for fallible operations of this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Any error produced by this crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    InvalidReference(#[from] InvalidReference),

    #[error(transparent)]
    Text(#[from] TextError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    ParseDate(#[from] ParseDateError),
}

/// The reading table has no entry for what the calendar produced.
///
/// This always points at a gap in the table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("no readings for \"{name}\"")]
    UnknownObservance { name: String },

    #[error("no readings for \"{name}\" in {year}")]
    MissingYear { name: String, year: LiturgicalYear },

    #[error("no \"{variant}\" service for \"{name}\"")]
    MissingVariant { name: String, variant: String },

    #[error("\"{name}\" has several services, one must be chosen")]
    VariantRequired { name: String },

    #[error("\"{name}\" has a single service, \"{variant}\" cannot be chosen")]
    UnexpectedVariant { name: String, variant: String },
}

/// A psalm or scripture citation that cannot be used.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidReference {
    #[error("malformed reference \"{0}\"")]
    Malformed(String),

    #[error("there is no Psalm {0}")]
    NoSuchPsalm(u32),

    #[error("Psalm {chapter} has no verse {verse}")]
    NoSuchVerse { chapter: u32, verse: u32 },
}

/// Failure of a [`TextProvider`](crate::passage::TextProvider).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextError {
    #[error("passage not found: {0}")]
    NotFound(String),

    #[error("text provider failed for {citation}: {reason}")]
    Provider { citation: String, reason: String },
}

/// A reference table could not be loaded.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid table data: {0}")]
    Json(#[from] serde_json::Error),
}

/// The configuration file could not be used.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("no lekcionaro.toml found in standard locations")]
    NotFound,
}

/// Input is not a valid `YYYY-MM-DD` date.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid date \"{input}\", expected YYYY-MM-DD")]
pub struct ParseDateError {
    pub input: String,
}
