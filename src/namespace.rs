//! Namespace identifiers: the four well-known constants, the accepted input
//! shapes for [`crate::derive`], and the random namespace used by the custom
//! menu path. Everything non-deterministic lives here rather than in the
//! deriver.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::error::DeriveError;

/// The predefined namespaces published alongside the name-based UUID
/// algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum WellKnown {
	Dns,
	Url,
	Oid,
	X500,
}

impl WellKnown {
	pub const ALL: [WellKnown; 4] = [WellKnown::Dns, WellKnown::Url, WellKnown::Oid, WellKnown::X500];

	pub const fn uuid(self) -> Uuid {
		match self {
			WellKnown::Dns => Uuid::NAMESPACE_DNS,
			WellKnown::Url => Uuid::NAMESPACE_URL,
			WellKnown::Oid => Uuid::NAMESPACE_OID,
			WellKnown::X500 => Uuid::NAMESPACE_X500,
		}
	}

	/// Short label used in user-facing output
	pub const fn label(self) -> &'static str {
		match self {
			WellKnown::Dns => "DNS",
			WellKnown::Url => "URL",
			WellKnown::Oid => "OID",
			WellKnown::X500 => "X500",
		}
	}
}

impl fmt::Display for WellKnown {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.label()) }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown namespace '{0}', expected one of dns, url, oid, x500")]
pub struct UnknownNamespace(pub String);

impl FromStr for WellKnown {
	type Err = UnknownNamespace;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		WellKnown::ALL
			.into_iter()
			.find(|ns| ns.label().eq_ignore_ascii_case(s.trim()))
			.ok_or_else(|| UnknownNamespace(s.to_string()))
	}
}

impl TryFrom<String> for WellKnown {
	type Error = UnknownNamespace;

	fn try_from(name: String) -> Result<Self, Self::Error> { name.parse() }
}

/// Anything `derive` accepts as a namespace. Strings are parsed lazily so the
/// caller gets an `InvalidNamespaceFormat` back instead of having to parse up
/// front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamespaceInput<'a> {
	Parsed(Uuid),
	Text(&'a str),
}

impl NamespaceInput<'_> {
	pub fn resolve(self) -> Result<Uuid, DeriveError> {
		match self {
			NamespaceInput::Parsed(uuid) => Ok(uuid),
			NamespaceInput::Text(text) => parse_namespace(text),
		}
	}
}

impl From<Uuid> for NamespaceInput<'_> {
	fn from(uuid: Uuid) -> Self { NamespaceInput::Parsed(uuid) }
}

impl From<&Uuid> for NamespaceInput<'_> {
	fn from(uuid: &Uuid) -> Self { NamespaceInput::Parsed(*uuid) }
}

impl From<WellKnown> for NamespaceInput<'_> {
	fn from(ns: WellKnown) -> Self { NamespaceInput::Parsed(ns.uuid()) }
}

impl<'a> From<&'a str> for NamespaceInput<'a> {
	fn from(text: &'a str) -> Self { NamespaceInput::Text(text) }
}

impl<'a> From<&'a String> for NamespaceInput<'a> {
	fn from(text: &'a String) -> Self { NamespaceInput::Text(text.as_str()) }
}

/// Parses a namespace from its textual form.
///
/// Hyphenated, simple (32 digits), braced and `urn:uuid:` forms are accepted,
/// hex digits in either case. Hyphens must sit at the canonical group
/// boundaries and surrounding whitespace counts against the length.
#[instrument]
pub fn parse_namespace(text: &str) -> Result<Uuid, DeriveError> {
	Uuid::parse_str(text).map_err(|source| {
		warn!("Rejected namespace: {}", source);
		DeriveError::InvalidNamespaceFormat { input: text.to_string(), source }
	})
}

/// A fresh random (v4) namespace for the custom menu path
pub fn random_namespace() -> Uuid {
	let namespace = Uuid::new_v4();
	debug!("Generated random namespace {}", namespace);
	namespace
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn well_known_constants_match_published_values() {
		assert_eq!(WellKnown::Dns.uuid().to_string(), "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
		assert_eq!(WellKnown::Url.uuid().to_string(), "6ba7b811-9dad-11d1-80b4-00c04fd430c8");
		assert_eq!(WellKnown::Oid.uuid().to_string(), "6ba7b812-9dad-11d1-80b4-00c04fd430c8");
		assert_eq!(WellKnown::X500.uuid().to_string(), "6ba7b814-9dad-11d1-80b4-00c04fd430c8");
	}

	#[test]
	fn well_known_parses_case_insensitively() {
		assert_eq!("dns".parse::<WellKnown>(), Ok(WellKnown::Dns));
		assert_eq!(" URL ".parse::<WellKnown>(), Ok(WellKnown::Url));
		assert_eq!("x500".parse::<WellKnown>(), Ok(WellKnown::X500));
		assert_eq!("isbn".parse::<WellKnown>(), Err(UnknownNamespace("isbn".to_string())));
	}

	#[test]
	fn parses_every_accepted_form() {
		let expected = WellKnown::Dns.uuid();
		for text in [
			"6ba7b810-9dad-11d1-80b4-00c04fd430c8",
			"6BA7B810-9DAD-11D1-80B4-00C04FD430C8",
			"6ba7b8109dad11d180b400c04fd430c8",
			"{6ba7b810-9dad-11d1-80b4-00c04fd430c8}",
			"urn:uuid:6ba7b810-9dad-11d1-80b4-00c04fd430c8",
		] {
			assert_eq!(parse_namespace(text).unwrap(), expected, "{text}");
		}
	}

	#[test]
	fn rejects_malformed_namespaces() {
		for text in [
			"",
			"not-a-uuid",
			"6ba7b810-9dad-11d1-80b4-00c04fd430c",
			"6ba7b810-9dad-11d1-80b4-00c04fd430c8a",
			"6ba7b810-9dad-11d1-80b4-00c04fd430cg",
			"6ba7b8109-dad-11d1-80b4-00c04fd430c8",
			"  6ba7b810-9dad-11d1-80b4-00c04fd430c8\n",
			"6ba7b810-9dad-11d1-80b4-00c04fd430c8\t",
		] {
			match parse_namespace(text) {
				Err(DeriveError::InvalidNamespaceFormat { input, .. }) => assert_eq!(input, text),
				Ok(uuid) => panic!("'{text}' parsed as {uuid}"),
			}
		}
	}

	#[test]
	fn string_and_parsed_inputs_resolve_identically() {
		let text = "6ba7b811-9dad-11d1-80b4-00c04fd430c8";
		let owned = text.to_string();
		assert_eq!(NamespaceInput::from(text).resolve().unwrap(), Uuid::NAMESPACE_URL);
		assert_eq!(NamespaceInput::from(&owned).resolve().unwrap(), Uuid::NAMESPACE_URL);
		assert_eq!(NamespaceInput::from(WellKnown::Url).resolve().unwrap(), Uuid::NAMESPACE_URL);
	}

	#[test]
	fn random_namespaces_are_fresh_v4_values() {
		let first = random_namespace();
		let second = random_namespace();
		assert_ne!(first, second);
		assert_eq!(first.get_version_num(), 4);
	}
}
