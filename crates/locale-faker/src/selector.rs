//! Locale-aware selection of templates and values.
//!
//! Format fields yield an unexpanded template for [`crate::expand`];
//! discrete-choice fields yield a final value. Both resolve the entry through
//! the locale fallback chain and pick one candidate uniformly at random.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::error::FakerError;
use crate::locale::Locale;
use crate::resources::{ResourceKey, Resources};

/// Returns the resolved candidate list for `key`.
///
/// # Errors
///
/// Returns [`FakerError::MissingResource`] if no table in the fallback chain
/// defines `key`.
pub fn candidates<'r>(
    resources: &'r Resources,
    key: ResourceKey<'_>,
    locale: &Locale,
) -> Result<&'r [String], FakerError> {
    resources.candidates(key, locale)
}

/// Picks one template for a format field, without expanding it.
///
/// # Errors
///
/// Returns [`FakerError::MissingResource`] if the entry cannot be resolved
/// and [`FakerError::Configuration`] if it resolves to no candidates.
///
/// # Example
///
/// ```
/// use locale_faker::{Locale, Resources, keys, seeded_rng, select_format};
///
/// let resources = Resources::bundled().expect("bundled tables parse");
/// let mut rng = seeded_rng(1);
/// let template = select_format(resources, keys::address::ZIP_CODE, &Locale::english(), &mut rng)
///     .expect("zip code format");
///
/// assert!(template == "#####" || template == "#####-####");
/// ```
pub fn select_format<'r, R>(
    resources: &'r Resources,
    key: ResourceKey<'_>,
    locale: &Locale,
    rng: &mut R,
) -> Result<&'r str, FakerError>
where
    R: Rng + ?Sized,
{
    choose(resources, key, locale, rng)
}

/// Picks one final value for a discrete-choice field.
///
/// # Errors
///
/// Returns [`FakerError::MissingResource`] if the entry cannot be resolved
/// and [`FakerError::Configuration`] if it resolves to no candidates.
pub fn select_value<'r, R>(
    resources: &'r Resources,
    key: ResourceKey<'_>,
    locale: &Locale,
    rng: &mut R,
) -> Result<&'r str, FakerError>
where
    R: Rng + ?Sized,
{
    choose(resources, key, locale, rng)
}

fn choose<'r, R>(
    resources: &'r Resources,
    key: ResourceKey<'_>,
    locale: &Locale,
    rng: &mut R,
) -> Result<&'r str, FakerError>
where
    R: Rng + ?Sized,
{
    resources
        .candidates(key, locale)?
        .choose(rng)
        .map(String::as_str)
        .ok_or_else(|| FakerError::Configuration {
            category: key.category().to_owned(),
            field: key.field().to_owned(),
        })
}
