//! Resolver configuration.
//!
//! Loaded from TOML; every field has a default so an empty document (or no
//! file at all) yields `ResolverConfig::default()`.
//!
//! ```toml
//! pluralize_table_names = true
//! default_schema = "admin"
//! default_delete_option = "AskUser"
//! fallback_key_type = "Int32"
//!
//! [templates.display]
//! Bool = "YesNo"
//!
//! [templates.editor]
//! Html = "RichText"
//! ```

use adminmeta_primitives::{DataType, DeleteOption, FALLBACK_FOREIGN_KEY_TYPE, NativeType};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fs, path::Path};
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

///
/// ResolverConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverConfig {
    /// Derive default table names by pluralizing the entity name.
    pub pluralize_table_names: bool,

    /// Schema applied when a customization sets a table without one.
    pub default_schema: Option<String>,

    pub default_delete_option: DeleteOption,

    /// Native type given to a foreign key whose target key type is unknown.
    pub fallback_key_type: NativeType,

    pub templates: TemplateConfig,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            pluralize_table_names: true,
            default_schema: None,
            default_delete_option: DeleteOption::AskUser,
            fallback_key_type: FALLBACK_FOREIGN_KEY_TYPE,
            templates: TemplateConfig::default(),
        }
    }
}

impl ResolverConfig {
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(src)?;
        config.validate()?;

        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let src = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml_str(&src)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.fallback_key_type.is_system() {
            return Err(ConfigError::InvalidValue {
                field: "fallback_key_type".to_string(),
                message: format!("'{}' is not a system type", self.fallback_key_type),
            });
        }

        if self.default_schema.as_deref().is_some_and(str::is_empty) {
            return Err(ConfigError::InvalidValue {
                field: "default_schema".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        self.templates.display_overrides()?;
        self.templates.editor_overrides()?;

        Ok(())
    }
}

///
/// TemplateConfig
///
/// Per-`DataType` template name overrides, keyed by the data type name.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemplateConfig {
    pub display: BTreeMap<String, String>,
    pub editor: BTreeMap<String, String>,
    pub foreign_key_display: Option<String>,
    pub foreign_key_editor: Option<String>,
}

impl TemplateConfig {
    pub fn display_overrides(&self) -> Result<BTreeMap<DataType, String>, ConfigError> {
        parse_overrides("templates.display", &self.display)
    }

    pub fn editor_overrides(&self) -> Result<BTreeMap<DataType, String>, ConfigError> {
        parse_overrides("templates.editor", &self.editor)
    }
}

fn parse_overrides(
    section: &str,
    raw: &BTreeMap<String, String>,
) -> Result<BTreeMap<DataType, String>, ConfigError> {
    raw.iter()
        .map(|(key, template)| {
            let data_type = key
                .parse::<DataType>()
                .map_err(|_| ConfigError::InvalidValue {
                    field: format!("{section}.{key}"),
                    message: "unknown data type".to_string(),
                })?;

            Ok((data_type, template.clone()))
        })
        .collect()
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        let config = ResolverConfig::from_toml_str("").unwrap();
        assert_eq!(config, ResolverConfig::default());
        assert_eq!(config.fallback_key_type, NativeType::Int32);
    }

    #[test]
    fn parses_full_document() {
        let config = ResolverConfig::from_toml_str(
            r#"
            pluralize_table_names = false
            default_schema = "admin"
            default_delete_option = "CascadeDelete"
            fallback_key_type = "Int64"

            [templates]
            foreign_key_editor = "Lookup"

            [templates.display]
            Bool = "YesNo"
            "#,
        )
        .unwrap();

        assert!(!config.pluralize_table_names);
        assert_eq!(config.default_schema.as_deref(), Some("admin"));
        assert_eq!(config.default_delete_option, DeleteOption::CascadeDelete);
        assert_eq!(config.fallback_key_type, NativeType::Int64);
        assert_eq!(config.templates.foreign_key_editor.as_deref(), Some("Lookup"));
        assert_eq!(
            config.templates.display_overrides().unwrap().get(&DataType::Bool),
            Some(&"YesNo".to_string())
        );
    }

    #[test]
    fn rejects_unknown_data_type_override() {
        let err = ResolverConfig::from_toml_str(
            r#"
            [templates.editor]
            Spreadsheet = "Grid"
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "templates.editor.Spreadsheet"));
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(matches!(
            ResolverConfig::from_toml_str("pluralise = true"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = ResolverConfig::from_path("/nonexistent/adminmeta.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
