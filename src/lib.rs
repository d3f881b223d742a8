pub mod config;
pub mod deriver;
pub mod error;
pub mod interactive;
pub mod logging;
pub mod menu;
pub mod namespace;
pub mod report;

pub use deriver::{derive, derive_uuid};
pub use error::DeriveError;
pub use namespace::{NamespaceInput, WellKnown, parse_namespace};
