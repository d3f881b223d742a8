use tracing::{debug, instrument};
use uuid::Uuid;

use crate::{error::DeriveError, namespace::NamespaceInput};

/// Derives the version 5 identifier for `name` within `namespace`.
///
/// SHA-1 runs over the namespace's 16 bytes followed by the UTF-8 bytes of
/// `name`. The first 16 digest bytes become the identifier, with the version
/// nibble set to 5 and the RFC variant bits set, so the result interoperates
/// with any conforming implementation.
#[instrument(skip(namespace), fields(namespace = %namespace))]
pub fn derive_uuid(namespace: &Uuid, name: &str) -> Uuid {
	let derived = Uuid::new_v5(namespace, name.as_bytes());
	debug!("Derived {}", derived);
	derived
}

/// Derives the canonical string form of the version 5 identifier for `name`.
///
/// The namespace may be given already parsed or as text; text that doesn't
/// parse is reported as [`DeriveError::InvalidNamespaceFormat`]. The name is
/// never rejected.
pub fn derive<'a>(namespace: impl Into<NamespaceInput<'a>>, name: &str) -> Result<String, DeriveError> {
	let namespace = namespace.into().resolve()?;
	Ok(derive_uuid(&namespace, name).hyphenated().to_string())
}
