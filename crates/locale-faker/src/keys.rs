//! Resource keys used by the bundled facades.
//!
//! Custom tables must define these (category, field) entries, either
//! directly or through locale fallback, for the matching facade operations
//! to succeed.

/// Keys in the `address` category.
pub mod address {
    use crate::resources::ResourceKey;

    /// Building number formats.
    pub const BUILDING_NUMBER: ResourceKey<'static> = ResourceKey::new("address", "buildingNumber");
    /// City name prefixes.
    pub const CITY_PREFIX: ResourceKey<'static> = ResourceKey::new("address", "cityPrefix");
    /// City name suffixes.
    pub const CITY_SUFFIX: ResourceKey<'static> = ResourceKey::new("address", "citySuffix");
    /// Country names.
    pub const COUNTRY: ResourceKey<'static> = ResourceKey::new("address", "country");
    /// Two-letter country codes.
    pub const COUNTRY_CODE: ResourceKey<'static> = ResourceKey::new("address", "countryCode");
    /// The locale's home country.
    pub const DEFAULT_COUNTRY: ResourceKey<'static> = ResourceKey::new("address", "defaultCountry");
    /// Apartment and suite formats.
    pub const SECONDARY_ADDRESS: ResourceKey<'static> =
        ResourceKey::new("address", "secondaryAddress");
    /// State or region names.
    pub const STATE: ResourceKey<'static> = ResourceKey::new("address", "state");
    /// State or region abbreviations.
    pub const STATE_ABBR: ResourceKey<'static> = ResourceKey::new("address", "stateAbbr");
    /// Street name suffixes.
    pub const STREET_SUFFIX: ResourceKey<'static> = ResourceKey::new("address", "streetSuffix");
    /// Time zone identifiers.
    pub const TIME_ZONE: ResourceKey<'static> = ResourceKey::new("address", "timeZone");
    /// Postal code formats.
    pub const ZIP_CODE: ResourceKey<'static> = ResourceKey::new("address", "zipCode");
}

/// Keys in the `name` category.
pub mod name {
    use crate::resources::ResourceKey;

    /// Given names.
    pub const FIRST: ResourceKey<'static> = ResourceKey::new("name", "first");
    /// Family names.
    pub const LAST: ResourceKey<'static> = ResourceKey::new("name", "last");
    /// Honorifics placed before a name.
    pub const PREFIX: ResourceKey<'static> = ResourceKey::new("name", "prefix");
    /// Generational or professional suffixes.
    pub const SUFFIX: ResourceKey<'static> = ResourceKey::new("name", "suffix");
}

/// Keys in the `phone` category.
pub mod phone {
    use crate::resources::ResourceKey;

    /// General phone number formats.
    pub const FORMATS: ResourceKey<'static> = ResourceKey::new("phone", "formats");
    /// Mobile phone number formats.
    pub const CELL_PHONE_FORMATS: ResourceKey<'static> =
        ResourceKey::new("phone", "cellPhoneFormats");
}
