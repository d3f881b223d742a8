use std::{io, path::Path, str::FromStr};

use serde::Deserialize;
use tracing::{Level, debug, info, instrument};

use crate::{error::ConfigError, namespace::WellKnown};

pub const CONFIG_FILE: &str = "uuidv5.toml";

#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
	#[default]
	Text,
	Json,
}

/// Front-end settings, read from `uuidv5.toml` when present
#[derive(Deserialize, Clone, PartialEq, Debug)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	pub log_level:          String,
	pub show_examples:      bool,
	/// Used when the menu choice isn't recognised
	pub fallback_namespace: WellKnown,
	pub format:             OutputFormat,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			log_level:          "warn".to_string(),
			show_examples:      true,
			fallback_namespace: WellKnown::Dns,
			format:             OutputFormat::Text,
		}
	}
}

impl Config {
	pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
		let config: Config = toml::from_str(content)?;
		config.level()?;
		Ok(config)
	}

	/// Loads the configuration at `path`, falling back to defaults when the
	/// file doesn't exist.
	#[instrument]
	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		match fs_err::read_to_string(path) {
			Ok(content) => {
				info!("Loaded configuration from {:?}", path);
				Self::from_toml_str(&content)
			}
			Err(e) if e.kind() == io::ErrorKind::NotFound => {
				debug!("No configuration at {:?}, using defaults", path);
				Ok(Self::default())
			}
			Err(e) => Err(ConfigError::Read(e)),
		}
	}

	pub fn level(&self) -> Result<Level, ConfigError> {
		Level::from_str(self.log_level.trim())
			.map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
	}
}
