use tracing::{debug, warn};
use uuid::Uuid;

use crate::{namespace::{WellKnown, random_namespace}, report::Derivation};

pub const MENU: [&str; 4] = [
	"Choose a namespace:",
	"1. DNS namespace (for domain names)",
	"2. URL namespace (for URLs)",
	"3. Custom namespace (will generate a new one)",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
	Dns,
	Url,
	Custom,
	Invalid(String),
}

impl MenuChoice {
	pub fn parse(input: &str) -> Self {
		match input.trim() {
			"1" => MenuChoice::Dns,
			"2" => MenuChoice::Url,
			"3" => MenuChoice::Custom,
			other => MenuChoice::Invalid(other.to_string()),
		}
	}
}

/// The namespace picked from the menu along with how to describe it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
	pub label:     String,
	pub namespace: Uuid,
}

impl Selection {
	fn well_known(namespace: WellKnown) -> Self {
		Self { label: namespace.label().to_string(), namespace: namespace.uuid() }
	}

	/// Resolves a choice. Unrecognised choices select `fallback`; the custom
	/// choice generates a new random namespace.
	pub fn from_choice(choice: &MenuChoice, fallback: WellKnown) -> Self {
		match choice {
			MenuChoice::Dns => Self::well_known(WellKnown::Dns),
			MenuChoice::Url => Self::well_known(WellKnown::Url),
			MenuChoice::Custom => {
				let namespace = random_namespace();
				Self { label: Derivation::custom_label(&namespace), namespace }
			}
			MenuChoice::Invalid(input) => {
				warn!("Unrecognised menu choice {:?}, falling back to {}", input, fallback);
				Self::well_known(fallback)
			}
		}
	}

	pub fn derive(&self, name: &str) -> Derivation {
		debug!("Deriving from {} namespace", self.label);
		Derivation::new(self.label.clone(), self.namespace, name)
	}
}
