//! Resource tables and JSON parsing.
//!
//! A [`ResourceTable`] holds every (category, field) entry for a single
//! locale. Entries are authored as delimiter-separated strings and split once
//! at load time into ordered candidate lists. [`Resources`] groups the tables
//! for several locales and resolves lookups through the locale fallback chain.

use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

use camino::Utf8Path;
use cap_std::fs::Dir;
use serde::Deserialize;
use tracing::debug;

use crate::error::{FakerError, ResourceError};
use crate::locale::Locale;

/// Current supported resource document version.
const SUPPORTED_VERSION: u32 = 1;

/// Separator used when a document does not declare one.
pub const DEFAULT_SEPARATOR: char = ';';

const BUNDLED_EN: &str = include_str!("../resources/en.json");
const BUNDLED_NB_NO: &str = include_str!("../resources/nb-NO.json");

static BUNDLED: LazyLock<Result<Resources, ResourceError>> = LazyLock::new(|| {
    let tables = [
        ResourceTable::from_json(BUNDLED_EN)?,
        ResourceTable::from_json(BUNDLED_NB_NO)?,
    ];
    Resources::from_tables(Locale::english(), tables)
});

/// Identifies one entry of a resource table.
///
/// # Example
///
/// ```
/// use locale_faker::ResourceKey;
///
/// let key = ResourceKey::new("address", "zipCode");
/// assert_eq!(key.to_string(), "address.zipCode");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceKey<'a> {
    category: &'a str,
    field: &'a str,
}

impl<'a> ResourceKey<'a> {
    /// Creates a key from its category and field names.
    #[must_use]
    pub const fn new(category: &'a str, field: &'a str) -> Self {
        Self { category, field }
    }

    /// Returns the category name.
    #[must_use]
    pub const fn category(&self) -> &'a str {
        self.category
    }

    /// Returns the field name.
    #[must_use]
    pub const fn field(&self) -> &'a str {
        self.field
    }
}

impl std::fmt::Display for ResourceKey<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.category, self.field)
    }
}

/// The parsed entries for a single locale.
///
/// # Example
///
/// ```
/// use locale_faker::{ResourceKey, ResourceTable};
///
/// let json = serde_json::json!({
///     "version": 1,
///     "locale": "en",
///     "entries": {"address": {"zipCode": "#####;#####-####"}}
/// })
/// .to_string();
///
/// let table = ResourceTable::from_json(&json).expect("valid table");
/// let formats = table.get(ResourceKey::new("address", "zipCode")).expect("entry");
/// assert_eq!(formats, ["#####", "#####-####"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceTable {
    locale: Locale,
    separator: char,
    entries: BTreeMap<String, BTreeMap<String, Vec<String>>>,
}

impl ResourceTable {
    /// Parses a resource table from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if:
    /// - The JSON is malformed or required fields are missing
    /// - The version is unsupported
    /// - The locale tag or separator is invalid
    /// - Any entry contains an empty or repeated candidate
    pub fn from_json(json: &str) -> Result<Self, ResourceError> {
        let raw: RawResourceTable =
            serde_json::from_str(json).map_err(|e| ResourceError::ParseError {
                message: e.to_string(),
            })?;

        Self::from_raw(raw)
    }

    /// Loads a resource table from a JSON file inside `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the file cannot be read or parsed.
    pub fn from_file(dir: &Dir, path: &Utf8Path) -> Result<Self, ResourceError> {
        let contents = dir
            .read_to_string(path)
            .map_err(|e| ResourceError::IoError {
                path: path.as_std_path().to_path_buf(),
                message: e.to_string(),
            })?;

        Self::from_json(&contents)
    }

    fn from_raw(raw: RawResourceTable) -> Result<Self, ResourceError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(ResourceError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        let locale = Locale::parse(&raw.locale)
            .map_err(|_| ResourceError::InvalidLocale { value: raw.locale })?;
        let separator = parse_separator(raw.separator)?;

        let entries = raw
            .entries
            .into_iter()
            .map(|(category, fields)| {
                let parsed = fields
                    .into_iter()
                    .map(|(field, value)| {
                        let candidates = split_entry(&category, &field, &value, separator)?;
                        Ok((field, candidates))
                    })
                    .collect::<Result<BTreeMap<_, _>, ResourceError>>()?;
                Ok((category, parsed))
            })
            .collect::<Result<BTreeMap<_, _>, ResourceError>>()?;

        let table = Self {
            locale,
            separator,
            entries,
        };
        debug!(locale = %table.locale, entries = table.len(), "parsed resource table");
        Ok(table)
    }

    /// Returns the locale this table serves.
    #[must_use]
    pub const fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Returns the separator the entries were split on.
    #[must_use]
    pub const fn separator(&self) -> char {
        self.separator
    }

    /// Returns the candidates for `key`, if this table defines it.
    #[must_use]
    pub fn get(&self, key: ResourceKey<'_>) -> Option<&[String]> {
        self.entries
            .get(key.category())
            .and_then(|fields| fields.get(key.field()))
            .map(Vec::as_slice)
    }

    /// Returns the number of (category, field) entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.values().map(BTreeMap::len).sum()
    }

    /// Returns `true` if the table defines no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Resource tables for a set of locales plus a default locale.
///
/// # Example
///
/// ```
/// use locale_faker::{Locale, ResourceKey, Resources};
///
/// let resources = Resources::bundled().expect("bundled tables parse");
/// let norwegian = Locale::parse("nb-NO").expect("valid tag");
///
/// // nb-NO defines its own zip codes...
/// let zip = resources
///     .candidates(ResourceKey::new("address", "zipCode"), &norwegian)
///     .expect("zip codes");
/// assert_eq!(zip, ["####"]);
///
/// // ...and falls back to English for building numbers.
/// let building = resources
///     .candidates(ResourceKey::new("address", "buildingNumber"), &norwegian)
///     .expect("building numbers");
/// assert!(building.iter().any(|f| f == "#####"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resources {
    default_locale: Locale,
    tables: BTreeMap<Locale, ResourceTable>,
}

impl Resources {
    /// Groups tables by locale.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::DuplicateLocale`] if two tables share a
    /// locale and [`ResourceError::MissingDefaultLocale`] if none serves
    /// `default_locale`.
    pub fn from_tables<I>(default_locale: Locale, tables: I) -> Result<Self, ResourceError>
    where
        I: IntoIterator<Item = ResourceTable>,
    {
        let mut by_locale = BTreeMap::new();
        for table in tables {
            let locale = table.locale().clone();
            if by_locale.contains_key(&locale) {
                return Err(ResourceError::DuplicateLocale {
                    locale: locale.to_string(),
                });
            }
            by_locale.insert(locale, table);
        }

        if !by_locale.contains_key(&default_locale) {
            return Err(ResourceError::MissingDefaultLocale {
                locale: default_locale.to_string(),
            });
        }

        Ok(Self {
            default_locale,
            tables: by_locale,
        })
    }

    /// Loads every `*.json` file in `dir` as a resource table.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the directory cannot be listed, any file
    /// fails to load, or the tables cannot be grouped.
    pub fn load_dir(dir: &Dir, default_locale: Locale) -> Result<Self, ResourceError> {
        let listing_error = |e: std::io::Error| ResourceError::IoError {
            path: ".".into(),
            message: e.to_string(),
        };

        let mut names = Vec::new();
        for item in dir.entries().map_err(listing_error)? {
            let entry = item.map_err(listing_error)?;
            let name = match entry.file_name().into_string() {
                Ok(utf8) => utf8,
                Err(raw) => {
                    debug!(name = ?raw, "skipping resource file with non-UTF-8 name");
                    continue;
                }
            };
            if Utf8Path::new(&name).extension() == Some("json") {
                names.push(name);
            } else {
                debug!(%name, "skipping non-JSON file in resource directory");
            }
        }
        names.sort();
        debug!(files = names.len(), "loading resource tables from directory");

        let tables = names
            .iter()
            .map(|name| ResourceTable::from_file(dir, Utf8Path::new(name)))
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_tables(default_locale, tables)
    }

    /// Returns the tables compiled into the crate (`en` and `nb-NO`).
    ///
    /// The tables are parsed on first use and shared for the life of the
    /// process.
    ///
    /// # Errors
    ///
    /// Returns the [`ResourceError`] raised while parsing the bundled tables.
    pub fn bundled() -> Result<&'static Self, ResourceError> {
        BUNDLED.as_ref().map_err(Clone::clone)
    }

    /// Returns the locale consulted after a locale's own fallback chain.
    #[must_use]
    pub const fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    /// Returns the locales with a table, in tag order.
    pub fn locales(&self) -> impl Iterator<Item = &Locale> {
        self.tables.keys()
    }

    /// Returns the table for exactly `locale`, without fallback.
    #[must_use]
    pub fn table(&self, locale: &Locale) -> Option<&ResourceTable> {
        self.tables.get(locale)
    }

    /// Resolves the candidates for `key`, walking the fallback chain.
    ///
    /// Tables are consulted for `locale`, then each less specific parent
    /// tag, then the default locale.
    ///
    /// # Errors
    ///
    /// Returns [`FakerError::MissingResource`] if no table in the chain
    /// defines `key`.
    pub fn candidates(
        &self,
        key: ResourceKey<'_>,
        locale: &Locale,
    ) -> Result<&[String], FakerError> {
        let chain = locale
            .fallback_chain()
            .chain(std::iter::once(self.default_locale.as_str()));

        for tag in chain {
            let Some(found) = self.tables.get(tag).and_then(|table| table.get(key)) else {
                continue;
            };
            if tag != locale.as_str() {
                debug!(requested = %locale, resolved = tag, %key, "resource resolved via fallback");
            }
            return Ok(found);
        }

        Err(FakerError::MissingResource {
            category: key.category().to_owned(),
            field: key.field().to_owned(),
            locale: locale.to_string(),
        })
    }
}

fn parse_separator(raw: Option<String>) -> Result<char, ResourceError> {
    let Some(value) = raw else {
        return Ok(DEFAULT_SEPARATOR);
    };
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(separator), None) => Ok(separator),
        _ => Err(ResourceError::InvalidSeparator { value }),
    }
}

/// Splits a raw entry into its candidates, preserving authoring order.
fn split_entry(
    category: &str,
    field: &str,
    value: &str,
    separator: char,
) -> Result<Vec<String>, ResourceError> {
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();
    for candidate in value.split(separator) {
        if candidate.is_empty() {
            return Err(ResourceError::EmptyEntry {
                category: category.to_owned(),
                field: field.to_owned(),
            });
        }
        if !seen.insert(candidate) {
            return Err(ResourceError::DuplicateCandidate {
                category: category.to_owned(),
                field: field.to_owned(),
                value: candidate.to_owned(),
            });
        }
        candidates.push(candidate.to_owned());
    }
    Ok(candidates)
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawResourceTable {
    version: u32,
    locale: String,
    #[serde(default)]
    separator: Option<String>,
    entries: BTreeMap<String, BTreeMap<String, String>>,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn en_json() -> String {
        serde_json::json!({
            "version": 1,
            "locale": "en",
            "entries": {
                "address": {
                    "country": "Norway;Sweden;Denmark",
                    "zipCode": "#####;#####-####"
                },
                "phone": {"formats": "###-###-####"}
            }
        })
        .to_string()
    }

    const NB_JSON: &str = r#"{
        "version": 1,
        "locale": "nb",
        "entries": {"address": {"country": "Norge;Sverige"}}
    }"#;

    const NB_NO_JSON: &str = r#"{
        "version": 1,
        "locale": "nb-NO",
        "separator": "|",
        "entries": {"phone": {"formats": "+47 ## ## ## ##|### ## ###"}}
    }"#;

    fn table(json: &str) -> ResourceTable {
        ResourceTable::from_json(json).expect("valid table")
    }

    fn resources() -> Resources {
        Resources::from_tables(
            Locale::english(),
            [table(&en_json()), table(NB_JSON), table(NB_NO_JSON)],
        )
        .expect("valid resources")
    }

    fn locale(tag: &str) -> Locale {
        Locale::parse(tag).expect("valid tag")
    }

    #[test]
    fn parses_valid_table() {
        let parsed = table(&en_json());

        assert_eq!(parsed.locale().as_str(), "en");
        assert_eq!(parsed.separator(), DEFAULT_SEPARATOR);
        assert_eq!(parsed.len(), 3);
        assert!(!parsed.is_empty());
    }

    #[test]
    fn preserves_candidate_order() {
        let parsed = table(&en_json());
        let countries = parsed
            .get(ResourceKey::new("address", "country"))
            .expect("entry");

        assert_eq!(countries, ["Norway", "Sweden", "Denmark"]);
    }

    #[test]
    fn honours_declared_separator() {
        let parsed = table(NB_NO_JSON);
        let formats = parsed
            .get(ResourceKey::new("phone", "formats"))
            .expect("entry");

        assert_eq!(parsed.separator(), '|');
        assert_eq!(formats, ["+47 ## ## ## ##", "### ## ###"]);
    }

    #[test]
    fn missing_entries_are_none() {
        let parsed = table(&en_json());
        assert!(parsed.get(ResourceKey::new("name", "first")).is_none());
        assert!(parsed.get(ResourceKey::new("address", "state")).is_none());
    }

    #[rstest]
    #[case::malformed_json("not valid json")]
    #[case::missing_locale(r#"{"version": 1, "entries": {}}"#)]
    #[case::non_string_entry(r#"{"version": 1, "locale": "en", "entries": {"a": {"b": 3}}}"#)]
    fn rejects_json_with_parse_error(#[case] json: &str) {
        let result = ResourceTable::from_json(json);
        assert!(matches!(result, Err(ResourceError::ParseError { .. })));
    }

    #[rstest]
    #[case::unsupported_version(
        r#"{"version": 2, "locale": "en", "entries": {}}"#,
        ResourceError::UnsupportedVersion { expected: 1, actual: 2 }
    )]
    #[case::invalid_locale(
        r#"{"version": 1, "locale": "english", "entries": {}}"#,
        ResourceError::InvalidLocale { value: "english".to_owned() }
    )]
    #[case::long_separator(
        r#"{"version": 1, "locale": "en", "separator": ";;", "entries": {}}"#,
        ResourceError::InvalidSeparator { value: ";;".to_owned() }
    )]
    #[case::empty_separator(
        r#"{"version": 1, "locale": "en", "separator": "", "entries": {}}"#,
        ResourceError::InvalidSeparator { value: String::new() }
    )]
    #[case::empty_entry(
        r#"{"version": 1, "locale": "en", "entries": {"address": {"state": ""}}}"#,
        ResourceError::EmptyEntry { category: "address".to_owned(), field: "state".to_owned() }
    )]
    #[case::empty_candidate(
        r#"{"version": 1, "locale": "en", "entries": {"address": {"state": "Ohio;;Utah"}}}"#,
        ResourceError::EmptyEntry { category: "address".to_owned(), field: "state".to_owned() }
    )]
    #[case::trailing_separator(
        r#"{"version": 1, "locale": "en", "entries": {"address": {"state": "Ohio;"}}}"#,
        ResourceError::EmptyEntry { category: "address".to_owned(), field: "state".to_owned() }
    )]
    #[case::duplicate_candidate(
        r#"{"version": 1, "locale": "en", "entries": {"address": {"state": "Ohio;Utah;Ohio"}}}"#,
        ResourceError::DuplicateCandidate {
            category: "address".to_owned(),
            field: "state".to_owned(),
            value: "Ohio".to_owned(),
        }
    )]
    fn rejects_invalid_table(#[case] json: &str, #[case] expected: ResourceError) {
        assert_eq!(ResourceTable::from_json(json), Err(expected));
    }

    #[test]
    fn rejects_duplicate_locales() {
        let result =
            Resources::from_tables(Locale::english(), [table(&en_json()), table(&en_json())]);
        assert_eq!(
            result,
            Err(ResourceError::DuplicateLocale {
                locale: "en".to_owned()
            })
        );
    }

    #[test]
    fn rejects_missing_default_locale() {
        let result = Resources::from_tables(Locale::english(), [table(NB_JSON)]);
        assert_eq!(
            result,
            Err(ResourceError::MissingDefaultLocale {
                locale: "en".to_owned()
            })
        );
    }

    #[test]
    fn exact_locale_wins() {
        let resources = resources();
        let formats = resources
            .candidates(ResourceKey::new("phone", "formats"), &locale("nb-NO"))
            .expect("formats");

        assert_eq!(formats, ["+47 ## ## ## ##", "### ## ###"]);
    }

    #[test]
    fn falls_back_to_language_before_default() {
        let resources = resources();
        let countries = resources
            .candidates(ResourceKey::new("address", "country"), &locale("nb-NO"))
            .expect("countries");

        assert_eq!(countries, ["Norge", "Sverige"]);
    }

    #[test]
    fn falls_back_to_default_locale() {
        let resources = resources();
        let zip = resources
            .candidates(ResourceKey::new("address", "zipCode"), &locale("nb-NO"))
            .expect("zip codes");

        assert_eq!(zip, ["#####", "#####-####"]);
    }

    #[test]
    fn unknown_locale_uses_default() {
        let resources = resources();
        let formats = resources
            .candidates(ResourceKey::new("phone", "formats"), &locale("fr-CA"))
            .expect("formats");

        assert_eq!(formats, ["###-###-####"]);
    }

    #[test]
    fn missing_everywhere_is_an_error() {
        let resources = resources();
        let result = resources.candidates(ResourceKey::new("name", "first"), &locale("nb-NO"));

        assert_eq!(
            result,
            Err(FakerError::MissingResource {
                category: "name".to_owned(),
                field: "first".to_owned(),
                locale: "nb-NO".to_owned(),
            })
        );
    }

    #[test]
    fn lists_locales_in_tag_order() {
        let resources = resources();
        let tags: Vec<_> = resources.locales().map(Locale::as_str).collect();
        assert_eq!(tags, ["en", "nb", "nb-NO"]);
        assert!(resources.table(&locale("nb")).is_some());
        assert!(resources.table(&locale("sv")).is_none());
    }

    #[test]
    fn bundled_tables_parse() {
        let bundled = Resources::bundled().expect("bundled tables parse");
        assert_eq!(bundled.default_locale().as_str(), "en");
        let tags: Vec<_> = bundled.locales().map(Locale::as_str).collect();
        assert_eq!(tags, ["en", "nb-NO"]);
    }
}
