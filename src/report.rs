use std::io::Write;

use serde::Serialize;
use tracing::instrument;
use uuid::Uuid;

use crate::{config::OutputFormat, deriver::derive_uuid, error::SessionError, namespace::{WellKnown, random_namespace}};

/// One namespace/name pair and the identifier derived from it
#[derive(Serialize, Clone, PartialEq, Eq, Debug)]
pub struct Derivation {
	pub namespace_label: String,
	pub namespace:       Uuid,
	pub name:            String,
	pub uuid:            Uuid,
}

impl Derivation {
	pub fn new(namespace_label: impl Into<String>, namespace: Uuid, name: impl Into<String>) -> Self {
		let name = name.into();
		let uuid = derive_uuid(&namespace, &name);
		Self { namespace_label: namespace_label.into(), namespace, name, uuid }
	}

	pub fn well_known(namespace: WellKnown, name: impl Into<String>) -> Self {
		Self::new(namespace.label(), namespace.uuid(), name)
	}

	/// Label shown for a freshly generated namespace
	pub fn custom_label(namespace: &Uuid) -> String { format!("Custom ({namespace})") }
}

/// The three derivations printed before the interactive prompt. The last one
/// uses a new random namespace on every call.
#[instrument]
pub fn example_derivations() -> Vec<Derivation> {
	let custom = random_namespace();
	vec![
		Derivation::well_known(WellKnown::Dns, "example.com"),
		Derivation::well_known(WellKnown::Url, "https://example.com/licensing"),
		Derivation::new(Derivation::custom_label(&custom), custom, "megapp-license-2025"),
	]
}

pub fn write_examples<W: Write>(
	out: &mut W,
	examples: &[Derivation],
	format: OutputFormat,
) -> Result<(), SessionError> {
	for example in examples {
		match format {
			OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(example)?)?,
			OutputFormat::Text if example.namespace == Uuid::NAMESPACE_DNS => {
				writeln!(out, "UUIDv5 for domain '{}': {}", example.name, example.uuid)?
			}
			OutputFormat::Text if example.namespace == Uuid::NAMESPACE_URL => {
				writeln!(out, "UUIDv5 for URL '{}': {}", example.name, example.uuid)?
			}
			OutputFormat::Text => {
				writeln!(out, "UUIDv5 for license '{}' with custom namespace:", example.name)?;
				writeln!(out, "  Namespace: {}", example.namespace)?;
				writeln!(out, "  UUIDv5: {}", example.uuid)?;
			}
		}
	}
	Ok(())
}

/// Prints the result of an interactive derivation
pub fn write_result<W: Write>(
	out: &mut W,
	derivation: &Derivation,
	format: OutputFormat,
) -> Result<(), SessionError> {
	match format {
		OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(derivation)?)?,
		OutputFormat::Text => {
			writeln!(out)?;
			writeln!(out, "Generated UUIDv5:")?;
			writeln!(out, "Namespace: {}", derivation.namespace_label)?;
			writeln!(out, "Name: {}", derivation.name)?;
			writeln!(out, "UUIDv5: {}", derivation.uuid)?;
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn render(f: impl FnOnce(&mut Vec<u8>) -> Result<(), SessionError>) -> String {
		let mut out = Vec::new();
		f(&mut out).unwrap();
		String::from_utf8(out).unwrap()
	}

	#[test]
	fn examples_cover_dns_url_and_custom() {
		let examples = example_derivations();
		assert_eq!(examples.len(), 3);
		assert_eq!(examples[0].namespace, Uuid::NAMESPACE_DNS);
		assert_eq!(examples[1].namespace, Uuid::NAMESPACE_URL);
		assert_eq!(examples[2].namespace_label, format!("Custom ({})", examples[2].namespace));
		assert_eq!(examples[2].uuid, derive_uuid(&examples[2].namespace, "megapp-license-2025"));
	}

	#[test]
	fn text_result_lists_namespace_name_and_uuid() {
		let derivation = Derivation::well_known(WellKnown::Dns, "python.org");
		let text = render(|out| write_result(out, &derivation, OutputFormat::Text));
		assert_eq!(
			text,
			"\nGenerated UUIDv5:\nNamespace: DNS\nName: python.org\nUUIDv5: \
			 886313e1-3b8a-5372-9b90-0c9aee199e5d\n"
		);
	}

	#[test]
	fn json_result_is_one_object_per_line() {
		let derivation = Derivation::well_known(WellKnown::Url, "https://example.com");
		let text = render(|out| write_result(out, &derivation, OutputFormat::Json));
		assert_eq!(text.lines().count(), 1);

		let value: serde_json::Value = serde_json::from_str(&text).unwrap();
		assert_eq!(value["namespace_label"], "URL");
		assert_eq!(value["namespace"], "6ba7b811-9dad-11d1-80b4-00c04fd430c8");
		assert_eq!(value["name"], "https://example.com");
		assert_eq!(value["uuid"], derivation.uuid.to_string());
	}

	#[test]
	fn text_examples_show_custom_namespace() {
		let examples = example_derivations();
		let text = render(|out| write_examples(out, &examples, OutputFormat::Text));
		assert!(text.starts_with("UUIDv5 for domain 'example.com': "));
		assert!(text.contains("UUIDv5 for URL 'https://example.com/licensing': "));
		assert!(text.contains(&format!("  Namespace: {}\n", examples[2].namespace)));
	}
}
