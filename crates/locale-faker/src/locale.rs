//! Locale tags and their fallback chain.
//!
//! A [`Locale`] is a validated, canonicalised language tag such as `en` or
//! `nb-NO`. Lookups walk from the most specific tag towards the bare
//! language, then to the resource set's default locale.
//!
//! # Tag Rules
//!
//! - Subtags are separated by `-` (`_` is accepted and normalised)
//! - The first subtag is 2 or 3 ASCII letters, stored lowercase
//! - Later subtags are 1 to 8 ASCII alphanumerics; two-letter regions are
//!   stored uppercase and four-letter scripts in title case

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FakerError;

/// Tag of the locale used when nothing more specific is configured.
pub const DEFAULT_LOCALE_TAG: &str = "en";

const MAX_SUBTAG_LEN: usize = 8;

/// A validated locale tag.
///
/// # Examples
///
/// ```
/// use locale_faker::Locale;
///
/// let locale = Locale::parse("nb_no").expect("valid tag");
/// assert_eq!(locale.as_str(), "nb-NO");
/// assert_eq!(locale.language(), "nb");
/// assert_eq!(locale.fallback_chain().collect::<Vec<_>>(), ["nb-NO", "nb"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(String);

impl Locale {
    /// Parses and canonicalises a locale tag.
    ///
    /// # Errors
    ///
    /// Returns [`FakerError::InvalidArgument`] when the tag is empty or any
    /// subtag breaks the tag rules.
    pub fn parse(tag: &str) -> Result<Self, FakerError> {
        if tag.is_empty() {
            return Err(invalid("locale tag must not be empty"));
        }

        let mut canonical = String::with_capacity(tag.len());
        for (index, subtag) in tag.split(['-', '_']).enumerate() {
            if index == 0 {
                if !is_valid_language(subtag) {
                    return Err(invalid(&format!(
                        "'{tag}' must start with a 2 or 3 letter language code"
                    )));
                }
                canonical.push_str(&subtag.to_ascii_lowercase());
                continue;
            }
            if !is_valid_subtag(subtag) {
                return Err(invalid(&format!(
                    "'{tag}' contains an invalid subtag '{subtag}'"
                )));
            }
            canonical.push('-');
            canonical.push_str(&canonical_subtag(subtag));
        }

        Ok(Self(canonical))
    }

    /// Returns the default English locale.
    #[must_use]
    pub fn english() -> Self {
        Self(DEFAULT_LOCALE_TAG.to_owned())
    }

    /// Returns the canonical tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the primary language subtag.
    #[must_use]
    pub fn language(&self) -> &str {
        self.0
            .split_once('-')
            .map_or(self.0.as_str(), |(language, _)| language)
    }

    /// Yields this tag followed by each less specific parent tag.
    ///
    /// `zh-Hant-TW` yields `zh-Hant-TW`, `zh-Hant`, then `zh`.
    pub fn fallback_chain(&self) -> impl Iterator<Item = &str> {
        std::iter::successors(Some(self.0.as_str()), |tag| {
            tag.rsplit_once('-').map(|(parent, _)| parent)
        })
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::english()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Locale {
    type Err = FakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = FakerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0
    }
}

impl Borrow<str> for Locale {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn is_valid_language(subtag: &str) -> bool {
    (2..=3).contains(&subtag.len()) && subtag.chars().all(|c| c.is_ascii_alphabetic())
}

fn is_valid_subtag(subtag: &str) -> bool {
    (1..=MAX_SUBTAG_LEN).contains(&subtag.len())
        && subtag.chars().all(|c| c.is_ascii_alphanumeric())
}

fn canonical_subtag(subtag: &str) -> String {
    let is_alpha = subtag.chars().all(|c| c.is_ascii_alphabetic());
    match subtag.len() {
        2 if is_alpha => subtag.to_ascii_uppercase(),
        4 if is_alpha => subtag
            .chars()
            .enumerate()
            .map(|(i, c)| {
                if i == 0 {
                    c.to_ascii_uppercase()
                } else {
                    c.to_ascii_lowercase()
                }
            })
            .collect(),
        _ => subtag.to_ascii_lowercase(),
    }
}

fn invalid(message: &str) -> FakerError {
    FakerError::InvalidArgument {
        message: message.to_owned(),
    }
}
