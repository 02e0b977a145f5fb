//! Data-driven rule content and loaders.
//!
//! This crate loads the rule catalog consumed by `realm-core`:
//! - Rule catalog (skills, bonus sources, units, production types) via RON
//! - Rules configuration (reserved identifiers, tunables) via TOML
//! - Catalog validation, usable without the loaders
//!
//! Content is read through `realm-core` oracles and never appears in unit state.

pub mod validate;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use validate::{ValidationError, ValidationReport, check_config, validate_catalog};

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, ConfigLoader, ContentFactory, RulesContent};
