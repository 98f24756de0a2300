//! ## Crate layout
//! - `core`: customization holders, the two resolver passes, the schema
//!   registry, config and diagnostics.
//! - `primitives`: the type vocabulary (`NativeType`, `DataType`) and the
//!   small option enums shared by every layer.
//!
//! Most callers only need the `prelude` and [`schema_builder`].

pub use adminmeta_core as core;
pub use adminmeta_primitives as primitives;

pub use adminmeta_core::{Error, error::ErrorOrigin};

use adminmeta_core::{config::ResolverConfig, schema::SchemaBuilder};
use std::path::Path;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Builder configured from an optional TOML file; defaults when `None`.
pub fn schema_builder(config_path: Option<&Path>) -> Result<SchemaBuilder, Error> {
    let config = match config_path {
        Some(path) => ResolverConfig::from_path(path)?,
        None => ResolverConfig::default(),
    };
    tracing::debug!(path = ?config_path, "resolver config loaded");

    Ok(SchemaBuilder::with_config(config)?)
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::core::{
        obs::{Diagnostic, DiagnosticKind, Level},
        prelude::*,
    };
    pub use serde::Serialize;
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::{prelude::*, *};

    #[test]
    fn default_builder_resolves_an_entity() {
        let mut builder = schema_builder(None).unwrap();
        builder
            .register(
                Entity::new("Category")
                    .with_property("Id", NativeType::Int32)
                    .with_property("Title", NativeType::Text),
                CustomizationHolder::new("Category"),
            )
            .unwrap();
        let schema = builder.build().unwrap();

        let category = schema.entity("Category").unwrap();
        assert_eq!(category.table.name, "Categories");
        assert_eq!(category.first_key().unwrap().name, "Id");
    }

    #[test]
    fn missing_config_file_is_a_config_error() {
        let path = Path::new("/nonexistent/adminmeta.toml");
        let err = schema_builder(Some(path)).err().unwrap();

        assert_eq!(err.origin(), ErrorOrigin::Config);
    }

    #[test]
    fn version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
