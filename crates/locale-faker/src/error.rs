//! Error types for the locale-faker crate.
//!
//! Resource loading and value generation fail in different ways, so each has
//! its own semantic error enum built with `thiserror`.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when parsing or assembling resource tables.
///
/// These cover file I/O, JSON parsing, schema validation, and the authoring
/// mistakes that would otherwise surface as empty or ambiguous candidates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceError {
    /// A resource file could not be read.
    #[error("failed to read resource file at '{path}': {message}")]
    IoError {
        /// Path to the resource file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The resource JSON is malformed or missing required fields.
    #[error("invalid resource JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The resource document version is not supported.
    #[error("unsupported resource version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the document.
        actual: u32,
    },

    /// The table's locale tag is not a valid language tag.
    #[error("invalid locale tag in resource table: '{value}'")]
    InvalidLocale {
        /// The rejected tag.
        value: String,
    },

    /// The declared separator is not exactly one character.
    #[error("resource separator must be a single character, found '{value}'")]
    InvalidSeparator {
        /// The rejected separator.
        value: String,
    },

    /// An entry is empty or contains an empty candidate.
    #[error("resource entry {category}.{field} contains an empty candidate")]
    EmptyEntry {
        /// Category of the malformed entry.
        category: String,
        /// Field of the malformed entry.
        field: String,
    },

    /// An entry lists the same candidate twice.
    #[error("resource entry {category}.{field} lists '{value}' more than once")]
    DuplicateCandidate {
        /// Category of the malformed entry.
        category: String,
        /// Field of the malformed entry.
        field: String,
        /// The repeated candidate.
        value: String,
    },

    /// Two tables were supplied for the same locale.
    #[error("more than one resource table for locale '{locale}'")]
    DuplicateLocale {
        /// The repeated locale tag.
        locale: String,
    },

    /// No table was supplied for the default locale.
    #[error("no resource table for default locale '{locale}'")]
    MissingDefaultLocale {
        /// The default locale tag.
        locale: String,
    },
}

/// Errors that can occur while generating values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FakerError {
    /// No table in the locale fallback chain defines the requested entry.
    #[error("no resource {category}.{field} for locale '{locale}' or its fallbacks")]
    MissingResource {
        /// Requested category.
        category: String,
        /// Requested field.
        field: String,
        /// Locale the lookup started from.
        locale: String,
    },

    /// The caller supplied input that cannot be used.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Description of the rejected input.
        message: String,
    },

    /// A resolved candidate list turned out to be empty at use time.
    #[error("resource {category}.{field} has no candidates to choose from")]
    Configuration {
        /// Category of the empty entry.
        category: String,
        /// Field of the empty entry.
        field: String,
    },
}
