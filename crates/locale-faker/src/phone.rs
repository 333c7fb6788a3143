//! Phone number generation.

use rand::Rng;

use crate::error::FakerError;
use crate::faker::Faker;
use crate::keys::phone::{CELL_PHONE_FORMATS, FORMATS};
use crate::pattern::expand;

/// Phone facade borrowed from a [`Faker`].
///
/// # Example
///
/// ```
/// use locale_faker::{Faker, Locale, seeded_rng};
///
/// let faker = Faker::bundled(Locale::english()).expect("bundled tables");
/// let mut rng = seeded_rng(9);
///
/// let number = faker.phone().number(Some("01## ### ####"), &mut rng).expect("number");
/// assert!(number.starts_with("01"));
/// assert_eq!(number.len(), 13);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Phone<'a> {
    faker: &'a Faker<'a>,
}

impl<'a> Phone<'a> {
    pub(crate) const fn new(faker: &'a Faker<'a>) -> Self {
        Self { faker }
    }

    /// Returns a phone number.
    ///
    /// An explicit `pattern` is expanded as given, so `Some("")` yields an
    /// empty string; otherwise a format is chosen from the locale's
    /// `phone.formats`.
    ///
    /// # Errors
    ///
    /// Returns a lookup error if no locale format can be resolved.
    pub fn number<R>(&self, pattern: Option<&str>, rng: &mut R) -> Result<String, FakerError>
    where
        R: Rng + ?Sized,
    {
        match pattern {
            Some(explicit) => Ok(expand(explicit, rng)),
            None => self.faker.formatted(FORMATS, rng),
        }
    }

    /// Returns a mobile number from the locale's `phone.cellPhoneFormats`.
    ///
    /// # Errors
    ///
    /// Returns [`FakerError`] if no cell phone format can be resolved.
    pub fn cell_number<R>(&self, rng: &mut R) -> Result<String, FakerError>
    where
        R: Rng + ?Sized,
    {
        self.faker.formatted(CELL_PHONE_FORMATS, rng)
    }
}
