//! The generation context shared by every facade.
//!
//! A [`Faker`] pairs read-only resources with an explicit locale. It holds no
//! random state: every operation borrows the caller's RNG, so a seeded
//! [`ChaCha8Rng`] from [`seeded_rng`] makes output reproducible and
//! independent threads never contend on a shared generator.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::address::Address;
use crate::error::{FakerError, ResourceError};
use crate::locale::Locale;
use crate::name::Name;
use crate::pattern::expand;
use crate::phone::Phone;
use crate::resources::{ResourceKey, Resources};
use crate::selector::{select_format, select_value};

/// Returns a deterministic RNG for reproducible generation.
///
/// The same seed always yields the same sequence of generated values.
#[must_use]
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Resources plus the locale that governs generation.
///
/// # Example
///
/// ```
/// use locale_faker::{Faker, Locale, seeded_rng};
///
/// let faker = Faker::bundled(Locale::parse("nb-NO").expect("valid tag")).expect("bundled");
/// let mut rng = seeded_rng(2026);
///
/// let zip = faker.address().zip_code(&mut rng).expect("zip code");
/// assert_eq!(zip.len(), 4);
///
/// let english = faker.with_locale(Locale::english());
/// let zip = english.address().zip_code(&mut rng).expect("zip code");
/// assert!(zip.len() == 5 || zip.len() == 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Faker<'r> {
    resources: &'r Resources,
    locale: Locale,
}

impl Faker<'static> {
    /// Creates a faker over the bundled `en` and `nb-NO` tables.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the bundled tables fail to parse.
    pub fn bundled(locale: Locale) -> Result<Self, ResourceError> {
        Ok(Self::new(Resources::bundled()?, locale))
    }
}

impl<'r> Faker<'r> {
    /// Creates a faker over `resources` for `locale`.
    #[must_use]
    pub const fn new(resources: &'r Resources, locale: Locale) -> Self {
        Self { resources, locale }
    }

    /// Returns a faker sharing these resources but using another locale.
    #[must_use]
    pub fn with_locale(&self, locale: Locale) -> Self {
        Self::new(self.resources, locale)
    }

    /// Returns the locale lookups start from.
    #[must_use]
    pub const fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Returns the resources lookups resolve against.
    #[must_use]
    pub const fn resources(&self) -> &'r Resources {
        self.resources
    }

    /// Address generation.
    #[must_use]
    pub const fn address(&self) -> Address<'_> {
        Address::new(self)
    }

    /// Phone number generation.
    #[must_use]
    pub const fn phone(&self) -> Phone<'_> {
        Phone::new(self)
    }

    /// Personal name generation.
    #[must_use]
    pub const fn name(&self) -> Name<'_> {
        Name::new(self)
    }

    /// Picks a discrete-choice value for `key`.
    pub(crate) fn value<R>(&self, key: ResourceKey<'_>, rng: &mut R) -> Result<String, FakerError>
    where
        R: Rng + ?Sized,
    {
        select_value(self.resources, key, &self.locale, rng).map(str::to_owned)
    }

    /// Picks a template for `key` and expands it.
    pub(crate) fn formatted<R>(
        &self,
        key: ResourceKey<'_>,
        rng: &mut R,
    ) -> Result<String, FakerError>
    where
        R: Rng + ?Sized,
    {
        let template = select_format(self.resources, key, &self.locale, rng)?;
        Ok(expand(template, rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys;

    fn faker(tag: &str) -> Faker<'static> {
        Faker::bundled(Locale::parse(tag).expect("valid tag")).expect("bundled tables")
    }

    #[test]
    fn seeded_rngs_repeat() {
        let mut first = seeded_rng(5);
        let mut second = seeded_rng(5);
        let a: u64 = first.random();
        let b: u64 = second.random();
        assert_eq!(a, b);
    }

    #[test]
    fn with_locale_keeps_resources() {
        let norwegian = faker("nb-NO");
        let english = norwegian.with_locale(Locale::english());

        assert_eq!(english.locale().as_str(), "en");
        assert!(std::ptr::eq(english.resources(), norwegian.resources()));
    }

    #[test]
    fn formatted_values_contain_no_placeholders() {
        let faker = faker("en");
        let mut rng = seeded_rng(11);
        for _ in 0..500 {
            let zip = faker
                .formatted(keys::address::ZIP_CODE, &mut rng)
                .expect("zip code");
            assert!(!zip.contains('#'), "unexpanded template: {zip}");
        }
    }

    #[test]
    fn identical_seeds_generate_identical_values() {
        let faker = faker("nb-NO");
        let mut first = seeded_rng(77);
        let mut second = seeded_rng(77);

        let a: Vec<String> = (0..20)
            .map(|_| faker.phone().number(None, &mut first).expect("number"))
            .collect();
        let b: Vec<String> = (0..20)
            .map(|_| faker.phone().number(None, &mut second).expect("number"))
            .collect();

        assert_eq!(a, b);
    }

    #[test]
    fn faker_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Faker<'static>>();
    }
}
