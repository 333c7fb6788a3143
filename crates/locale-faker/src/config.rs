//! Generator configuration loaded via OrthoConfig.

use std::path::PathBuf;

use cap_std::{ambient_authority, fs::Dir};
use ortho_config::OrthoConfig;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Deserialize;

use crate::error::{FakerError, ResourceError};
use crate::locale::{DEFAULT_LOCALE_TAG, Locale};
use crate::resources::Resources;

/// Settings controlling locale, resource source, and seeding.
///
/// Values come from `FAKER_*` environment variables, configuration files,
/// or command-line flags, in the usual OrthoConfig precedence.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "FAKER")]
pub struct FakerSettings {
    /// Locale tag that lookups start from.
    #[ortho_config(default = String::from(DEFAULT_LOCALE_TAG))]
    pub locale: Option<String>,
    /// Directory of `*.json` resource tables replacing the bundled ones.
    pub resources_dir: Option<PathBuf>,
    /// Seed for reproducible output.
    pub seed: Option<u64>,
}

impl FakerSettings {
    /// Return the configured locale, falling back to `en`.
    ///
    /// # Errors
    ///
    /// Returns [`FakerError::InvalidArgument`] if the configured tag is
    /// invalid.
    pub fn locale(&self) -> Result<Locale, FakerError> {
        Locale::parse(self.locale.as_deref().unwrap_or(DEFAULT_LOCALE_TAG))
    }

    /// Return the configured resources, falling back to the bundled tables.
    ///
    /// A configured directory must contain a table for `en`, the default
    /// locale.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the directory cannot be opened or its
    /// tables fail to load.
    pub fn resources(&self) -> Result<Resources, ResourceError> {
        let Some(dir_path) = self.resources_dir.as_deref() else {
            return Resources::bundled().cloned();
        };
        let dir = Dir::open_ambient_dir(dir_path, ambient_authority()).map_err(|e| {
            ResourceError::IoError {
                path: dir_path.to_path_buf(),
                message: e.to_string(),
            }
        })?;
        Resources::load_dir(&dir, Locale::english())
    }

    /// Return an RNG seeded from the configured seed, or from entropy.
    #[must_use]
    pub fn rng(&self) -> ChaCha8Rng {
        self.seed.map_or_else(
            || ChaCha8Rng::from_rng(&mut rand::rng()),
            ChaCha8Rng::seed_from_u64,
        )
    }
}
