//! Locale-aware fake data generation for tests and demos.
//!
//! This crate produces plausible addresses, phone numbers, and names from
//! per-locale resource tables. Values are built in two steps: a locale
//! format selector picks a template (or a final value) for the requested
//! field, and a pattern expander replaces the template's placeholders with
//! random characters.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Template expansion (`#` → digit, optionally `?` → letter)
//! - Resource tables parsed once from JSON, with locale fallback
//!   (`nb-NO` → `nb` → default locale)
//! - Address, phone, and name facades over an explicit locale
//! - Caller-owned random sources, including deterministic seeded RNGs
//!
//! # Example
//!
//! ```
//! use locale_faker::{Faker, Locale, seeded_rng};
//!
//! let faker = Faker::bundled(Locale::parse("nb-NO").expect("valid tag")).expect("bundled");
//! let mut rng = seeded_rng(2026);
//!
//! let number = faker.phone().number(None, &mut rng).expect("phone number");
//! assert!(number.chars().all(|c| c.is_ascii_digit() || c == ' ' || c == '+'));
//!
//! let city = faker.address().city(&mut rng).expect("city");
//! assert!(!city.is_empty());
//! ```

mod address;
mod config;
mod error;
mod faker;
pub mod keys;
mod locale;
mod name;
mod pattern;
mod phone;
mod resources;
mod selector;

pub use address::{Address, MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};
pub use config::FakerSettings;
pub use error::{FakerError, ResourceError};
pub use faker::{Faker, seeded_rng};
pub use locale::{DEFAULT_LOCALE_TAG, Locale};
pub use name::Name;
pub use pattern::{
    DIGIT_PLACEHOLDER, LETTER_PLACEHOLDER, Placeholders, bothify, expand, expand_letters,
    expand_with, to_regex,
};
pub use phone::Phone;
pub use resources::{DEFAULT_SEPARATOR, ResourceKey, ResourceTable, Resources};
pub use selector::{candidates, select_format, select_value};
