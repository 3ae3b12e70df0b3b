use crate::error::{ReportError, Result};
use crate::types::{SortDirection, DEFAULT_TWO_DIGIT_YEAR_PIVOT, ENV_PREFIX};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Report rendering configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Direction applied the first time a column is activated
    pub initial_direction: SortDirection,

    /// Two-digit years below this value are read as 20yy, the rest as 19yy
    pub two_digit_year_pivot: u32,

    /// Decimal places used by the magnitude formatter when none is given
    pub default_precision: u32,

    /// Field delimiter for CSV table input and output
    pub csv_delimiter: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            initial_direction: SortDirection::Ascending,
            two_digit_year_pivot: DEFAULT_TWO_DIGIT_YEAR_PIVOT,
            default_precision: 2,
            csv_delimiter: ",".to_string(),
        }
    }
}

impl ReportConfig {
    /// Load configuration from an optional file, then environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, config::Environment::with_prefix(ENV_PREFIX))
    }

    /// Load configuration using a specific environment source
    pub fn load_with_env(path: Option<&Path>, env: config::Environment) -> Result<Self> {
        let default_config = Self::default();

        let mut builder = config::Config::builder()
            .set_default("initial_direction", default_config.initial_direction.to_string())?
            .set_default("two_digit_year_pivot", default_config.two_digit_year_pivot as i64)?
            .set_default("default_precision", default_config.default_precision as i64)?
            .set_default("csv_delimiter", default_config.csv_delimiter)?;

        if let Some(path) = path {
            debug!("Loading report configuration from {}", path.display());
            builder = builder.add_source(config::File::from(path));
        }

        // Override with environment variables
        builder = builder.add_source(env);

        let config: ReportConfig = builder.build()?.try_deserialize()?;

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.two_digit_year_pivot > 99 {
            return Err(ReportError::InvalidConfig(format!(
                "two_digit_year_pivot must be between 0 and 99, got {}",
                self.two_digit_year_pivot
            )));
        }

        if self.default_precision > 20 {
            return Err(ReportError::InvalidConfig(format!(
                "default_precision must not exceed 20, got {}",
                self.default_precision
            )));
        }

        self.delimiter_byte()?;

        Ok(())
    }

    /// The CSV delimiter as a single byte
    pub fn delimiter_byte(&self) -> Result<u8> {
        match self.csv_delimiter.as_bytes() {
            [byte] if byte.is_ascii() => Ok(*byte),
            _ => Err(ReportError::InvalidConfig(format!(
                "csv_delimiter must be a single ASCII character, got {:?}",
                self.csv_delimiter
            ))),
        }
    }
}
