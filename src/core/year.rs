use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A calendar year.
pub type Year = i32;

/// Earliest year the resolver will look back to when searching for data.
pub const DEFAULT_FLOOR_YEAR: Year = 1950;

/// Earliest year a user can select.
pub const DEFAULT_SELECT_START_YEAR: Year = 1965;

/// 40 hours/week × 52 weeks.
pub const DEFAULT_HOURS_PER_YEAR: u32 = 2080;

/// Default selection for the left-hand side of the comparison.
pub const DEFAULT_YEAR_A: Year = 1980;

/// Errors arising from loading or validating an [`EngineConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Explicit engine configuration.
///
/// Every constant the lookup and the hours-of-work math depend on lives here
/// and is passed into the resolver and engine constructors, so two engines
/// with different settings can run side by side.
///
/// # Examples
///
/// ```
/// use work_value::core::year::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.floor_year, 1950);
/// assert_eq!(config.hours_per_year, 2080);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Lowest year (inclusive) considered when falling back to earlier records.
    pub floor_year: Year,
    /// Lowest year (inclusive) offered for selection.
    pub select_start_year: Year,
    /// Working hours in a year, used to turn annual income into an hourly rate.
    pub hours_per_year: u32,
    /// Initially selected year for side A.
    pub default_year_a: Year,
    /// Initially selected year for side B. `None` means the current year.
    pub default_year_b: Option<Year>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            floor_year: DEFAULT_FLOOR_YEAR,
            select_start_year: DEFAULT_SELECT_START_YEAR,
            hours_per_year: DEFAULT_HOURS_PER_YEAR,
            default_year_a: DEFAULT_YEAR_A,
            default_year_b: None,
        }
    }
}

impl EngineConfig {
    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Check internal consistency against the current year.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_at(current_year())
    }

    /// Check internal consistency, with `now` as the last selectable year.
    pub fn validate_at(&self, now: Year) -> Result<(), ConfigError> {
        if self.hours_per_year == 0 {
            return Err(ConfigError::Invalid(
                "hours_per_year must be positive".to_string(),
            ));
        }
        if self.select_start_year < self.floor_year {
            return Err(ConfigError::Invalid(format!(
                "select_start_year {} is before floor_year {}",
                self.select_start_year, self.floor_year
            )));
        }
        let defaults = [
            ("default_year_a", Some(self.default_year_a)),
            ("default_year_b", self.default_year_b),
        ];
        for (name, year) in defaults {
            let Some(year) = year else { continue };
            if !self.is_selectable(year, now) {
                return Err(ConfigError::Invalid(format!(
                    "{} {} is outside the selectable range {}..={}",
                    name, year, self.select_start_year, now
                )));
            }
        }
        Ok(())
    }

    /// Years a user may pick, up to and including `current_year`.
    pub fn selectable_years(&self, current_year: Year) -> RangeInclusive<Year> {
        self.select_start_year..=current_year
    }

    pub fn is_selectable(&self, year: Year, current_year: Year) -> bool {
        self.selectable_years(current_year).contains(&year)
    }

    /// Default pair of years `(A, B)` for the first render.
    pub fn default_years(&self, current_year: Year) -> (Year, Year) {
        (
            self.default_year_a,
            self.default_year_b.unwrap_or(current_year),
        )
    }
}

/// The current calendar year in UTC.
pub fn current_year() -> Year {
    chrono::Utc::now().year()
}
