//! Personal name generation.

use rand::Rng;
use rand::distr::{Distribution, StandardUniform};

use crate::error::FakerError;
use crate::faker::Faker;
use crate::keys::name::{FIRST, LAST, PREFIX, SUFFIX};

/// Ways of assembling a full name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FullNameLayout {
    FirstLast,
    PrefixFirstLast,
    FirstLastSuffix,
}

impl Distribution<FullNameLayout> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> FullNameLayout {
        match rng.random_range(0..3_u8) {
            0 => FullNameLayout::FirstLast,
            1 => FullNameLayout::PrefixFirstLast,
            _ => FullNameLayout::FirstLastSuffix,
        }
    }
}

/// Name facade borrowed from a [`Faker`].
#[derive(Debug, Clone, Copy)]
pub struct Name<'a> {
    faker: &'a Faker<'a>,
}

impl<'a> Name<'a> {
    pub(crate) const fn new(faker: &'a Faker<'a>) -> Self {
        Self { faker }
    }

    /// Returns a given name.
    ///
    /// # Errors
    ///
    /// Returns [`FakerError`] if `name.first` cannot be resolved.
    pub fn first<R>(&self, rng: &mut R) -> Result<String, FakerError>
    where
        R: Rng + ?Sized,
    {
        self.faker.value(FIRST, rng)
    }

    /// Returns a family name.
    ///
    /// # Errors
    ///
    /// Returns [`FakerError`] if `name.last` cannot be resolved.
    pub fn last<R>(&self, rng: &mut R) -> Result<String, FakerError>
    where
        R: Rng + ?Sized,
    {
        self.faker.value(LAST, rng)
    }

    /// Returns an honorific such as `Dr.`.
    ///
    /// # Errors
    ///
    /// Returns [`FakerError`] if `name.prefix` cannot be resolved.
    pub fn prefix<R>(&self, rng: &mut R) -> Result<String, FakerError>
    where
        R: Rng + ?Sized,
    {
        self.faker.value(PREFIX, rng)
    }

    /// Returns a suffix such as `Jr.`.
    ///
    /// # Errors
    ///
    /// Returns [`FakerError`] if `name.suffix` cannot be resolved.
    pub fn suffix<R>(&self, rng: &mut R) -> Result<String, FakerError>
    where
        R: Rng + ?Sized,
    {
        self.faker.value(SUFFIX, rng)
    }

    /// Returns a full name, occasionally with a prefix or suffix.
    ///
    /// # Errors
    ///
    /// Returns [`FakerError`] if any name part cannot be resolved.
    pub fn full<R>(&self, rng: &mut R) -> Result<String, FakerError>
    where
        R: Rng + ?Sized,
    {
        let layout: FullNameLayout = StandardUniform.sample(rng);
        let name = match layout {
            FullNameLayout::FirstLast => {
                format!("{} {}", self.first(rng)?, self.last(rng)?)
            }
            FullNameLayout::PrefixFirstLast => format!(
                "{} {} {}",
                self.prefix(rng)?,
                self.first(rng)?,
                self.last(rng)?
            ),
            FullNameLayout::FirstLastSuffix => format!(
                "{} {} {}",
                self.first(rng)?,
                self.last(rng)?,
                self.suffix(rng)?
            ),
        };
        Ok(name)
    }
}
