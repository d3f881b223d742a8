use std::io;

use rustyline::error::ReadlineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeriveError {
	#[error("Invalid namespace format '{input}': {source}")]
	InvalidNamespaceFormat {
		input:  String,
		#[source]
		source: uuid::Error,
	},
}

#[derive(Debug, Error)]
pub enum ConfigError {
	#[error(transparent)]
	Read(#[from] io::Error),

	#[error("Malformed configuration: {0}")]
	Parse(#[from] toml::de::Error),

	#[error("Unknown log level '{0}'")]
	InvalidLogLevel(String),
}

#[derive(Debug, Error)]
pub enum SessionError {
	#[error("Failed to read input: {0}")]
	Prompt(#[from] ReadlineError),

	#[error("Failed to write output: {0}")]
	Output(#[from] io::Error),

	#[error("Failed to render JSON: {0}")]
	Json(#[from] serde_json::Error),
}
