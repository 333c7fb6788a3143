//! Address generation.
//!
//! Format fields (building numbers, zip codes, secondary addresses) are
//! expanded from locale templates; discrete fields (countries, states, time
//! zones) are drawn verbatim; cities and street names are assembled from
//! independently drawn parts using one of a fixed set of layouts.

use rand::Rng;
use rand::distr::{Distribution, StandardUniform};

use crate::error::FakerError;
use crate::faker::Faker;
use crate::keys::address::{
    BUILDING_NUMBER, CITY_PREFIX, CITY_SUFFIX, COUNTRY, COUNTRY_CODE, DEFAULT_COUNTRY,
    SECONDARY_ADDRESS, STATE, STATE_ABBR, STREET_SUFFIX, TIME_ZONE, ZIP_CODE,
};

/// Southernmost latitude in degrees.
pub const MIN_LATITUDE: f64 = -90.0;
/// Northernmost latitude in degrees.
pub const MAX_LATITUDE: f64 = 90.0;

/// Westernmost longitude in degrees.
pub const MIN_LONGITUDE: f64 = -180.0;
/// Easternmost longitude in degrees.
pub const MAX_LONGITUDE: f64 = 180.0;

/// Ways of assembling a city name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum CityLayout {
    /// `"<prefix> <first><suffix>"`
    PrefixFirstSuffix,
    /// `"<prefix> <first>"`
    PrefixFirst,
    /// `"<first><suffix>"`
    FirstSuffix,
    /// `"<last><suffix>"`
    LastSuffix,
}

impl Distribution<CityLayout> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> CityLayout {
        match rng.random_range(0..4_u8) {
            0 => CityLayout::PrefixFirstSuffix,
            1 => CityLayout::PrefixFirst,
            2 => CityLayout::FirstSuffix,
            _ => CityLayout::LastSuffix,
        }
    }
}

/// Ways of assembling a street name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StreetLayout {
    FirstSuffix,
    LastSuffix,
}

impl Distribution<StreetLayout> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> StreetLayout {
        if rng.random_bool(0.5) {
            StreetLayout::FirstSuffix
        } else {
            StreetLayout::LastSuffix
        }
    }
}

/// Address facade borrowed from a [`Faker`].
///
/// # Example
///
/// ```
/// use locale_faker::{Faker, Locale, seeded_rng};
///
/// let faker = Faker::bundled(Locale::english()).expect("bundled tables");
/// let mut rng = seeded_rng(42);
///
/// let address = faker.address().street_address(true, &mut rng).expect("address");
/// assert!(address.starts_with(|c: char| c.is_ascii_digit()));
/// assert!(address.contains("Apt. ") || address.contains("Suite "));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Address<'a> {
    faker: &'a Faker<'a>,
}

impl<'a> Address<'a> {
    pub(crate) const fn new(faker: &'a Faker<'a>) -> Self {
        Self { faker }
    }

    /// Returns a building number expanded from `address.buildingNumber`.
    ///
    /// # Errors
    ///
    /// Returns [`FakerError`] if the format cannot be resolved.
    pub fn building_number<R>(&self, rng: &mut R) -> Result<String, FakerError>
    where
        R: Rng + ?Sized,
    {
        self.faker.formatted(BUILDING_NUMBER, rng)
    }

    /// Returns a postal code expanded from `address.zipCode`.
    ///
    /// # Errors
    ///
    /// Returns [`FakerError`] if the format cannot be resolved.
    pub fn zip_code<R>(&self, rng: &mut R) -> Result<String, FakerError>
    where
        R: Rng + ?Sized,
    {
        self.faker.formatted(ZIP_CODE, rng)
    }

    /// Returns an apartment or suite expanded from `address.secondaryAddress`.
    ///
    /// # Errors
    ///
    /// Returns [`FakerError`] if the format cannot be resolved.
    pub fn secondary_address<R>(&self, rng: &mut R) -> Result<String, FakerError>
    where
        R: Rng + ?Sized,
    {
        self.faker.formatted(SECONDARY_ADDRESS, rng)
    }

    /// Returns a city prefix such as `North`.
    ///
    /// # Errors
    ///
    /// Returns [`FakerError`] if the entry cannot be resolved.
    pub fn city_prefix<R>(&self, rng: &mut R) -> Result<String, FakerError>
    where
        R: Rng + ?Sized,
    {
        self.faker.value(CITY_PREFIX, rng)
    }

    /// Returns a city suffix such as `ville`.
    ///
    /// # Errors
    ///
    /// Returns [`FakerError`] if the entry cannot be resolved.
    pub fn city_suffix<R>(&self, rng: &mut R) -> Result<String, FakerError>
    where
        R: Rng + ?Sized,
    {
        self.faker.value(CITY_SUFFIX, rng)
    }

    /// Returns a city name in one of four layouts.
    ///
    /// # Errors
    ///
    /// Returns [`FakerError`] if any part cannot be resolved.
    pub fn city<R>(&self, rng: &mut R) -> Result<String, FakerError>
    where
        R: Rng + ?Sized,
    {
        let name = self.faker.name();
        let layout: CityLayout = StandardUniform.sample(rng);
        let city = match layout {
            CityLayout::PrefixFirstSuffix => format!(
                "{} {}{}",
                self.city_prefix(rng)?,
                name.first(rng)?,
                self.city_suffix(rng)?
            ),
            CityLayout::PrefixFirst => {
                format!("{} {}", self.city_prefix(rng)?, name.first(rng)?)
            }
            CityLayout::FirstSuffix => format!("{}{}", name.first(rng)?, self.city_suffix(rng)?),
            CityLayout::LastSuffix => format!("{}{}", name.last(rng)?, self.city_suffix(rng)?),
        };
        Ok(city)
    }

    /// Returns a street suffix such as `Avenue`.
    ///
    /// # Errors
    ///
    /// Returns [`FakerError`] if the entry cannot be resolved.
    pub fn street_suffix<R>(&self, rng: &mut R) -> Result<String, FakerError>
    where
        R: Rng + ?Sized,
    {
        self.faker.value(STREET_SUFFIX, rng)
    }

    /// Returns a street name built from a first or last name and a suffix.
    ///
    /// # Errors
    ///
    /// Returns [`FakerError`] if any part cannot be resolved.
    pub fn street_name<R>(&self, rng: &mut R) -> Result<String, FakerError>
    where
        R: Rng + ?Sized,
    {
        let name = self.faker.name();
        let layout: StreetLayout = StandardUniform.sample(rng);
        let base = match layout {
            StreetLayout::FirstSuffix => name.first(rng)?,
            StreetLayout::LastSuffix => name.last(rng)?,
        };
        Ok(format!("{base} {}", self.street_suffix(rng)?))
    }

    /// Returns `"<building number> <street name>"`, optionally followed by a
    /// secondary address.
    ///
    /// # Errors
    ///
    /// Returns [`FakerError`] if any part cannot be resolved.
    pub fn street_address<R>(
        &self,
        include_secondary: bool,
        rng: &mut R,
    ) -> Result<String, FakerError>
    where
        R: Rng + ?Sized,
    {
        let mut address = format!("{} {}", self.building_number(rng)?, self.street_name(rng)?);
        if include_secondary {
            address.push(' ');
            address.push_str(&self.secondary_address(rng)?);
        }
        Ok(address)
    }

    /// Returns a country name.
    ///
    /// # Errors
    ///
    /// Returns [`FakerError`] if the entry cannot be resolved.
    pub fn country<R>(&self, rng: &mut R) -> Result<String, FakerError>
    where
        R: Rng + ?Sized,
    {
        self.faker.value(COUNTRY, rng)
    }

    /// Returns a two-letter country code.
    ///
    /// # Errors
    ///
    /// Returns [`FakerError`] if the entry cannot be resolved.
    pub fn country_code<R>(&self, rng: &mut R) -> Result<String, FakerError>
    where
        R: Rng + ?Sized,
    {
        self.faker.value(COUNTRY_CODE, rng)
    }

    /// Returns the locale's home country.
    ///
    /// # Errors
    ///
    /// Returns [`FakerError`] if the entry cannot be resolved.
    pub fn default_country<R>(&self, rng: &mut R) -> Result<String, FakerError>
    where
        R: Rng + ?Sized,
    {
        self.faker.value(DEFAULT_COUNTRY, rng)
    }

    /// Returns a state or region name.
    ///
    /// # Errors
    ///
    /// Returns [`FakerError`] if the entry cannot be resolved.
    pub fn state<R>(&self, rng: &mut R) -> Result<String, FakerError>
    where
        R: Rng + ?Sized,
    {
        self.faker.value(STATE, rng)
    }

    /// Returns a state or region abbreviation.
    ///
    /// # Errors
    ///
    /// Returns [`FakerError`] if the entry cannot be resolved.
    pub fn state_abbreviation<R>(&self, rng: &mut R) -> Result<String, FakerError>
    where
        R: Rng + ?Sized,
    {
        self.faker.value(STATE_ABBR, rng)
    }

    /// Returns a time zone identifier.
    ///
    /// # Errors
    ///
    /// Returns [`FakerError`] if the entry cannot be resolved.
    pub fn time_zone<R>(&self, rng: &mut R) -> Result<String, FakerError>
    where
        R: Rng + ?Sized,
    {
        self.faker.value(TIME_ZONE, rng)
    }

    /// Returns a latitude in `[-90, 90]` degrees.
    #[expect(
        clippy::unused_self,
        reason = "coordinates sit on the facade alongside the resource-driven fields"
    )]
    pub fn latitude<R>(&self, rng: &mut R) -> f64
    where
        R: Rng + ?Sized,
    {
        rng.random_range(MIN_LATITUDE..=MAX_LATITUDE)
    }

    /// Returns a longitude in `[-180, 180]` degrees.
    #[expect(
        clippy::unused_self,
        reason = "coordinates sit on the facade alongside the resource-driven fields"
    )]
    pub fn longitude<R>(&self, rng: &mut R) -> f64
    where
        R: Rng + ?Sized,
    {
        rng.random_range(MIN_LONGITUDE..=MAX_LONGITUDE)
    }
}
