use crate::{config::ConfigError, resolve::ResolveError};
use derive_more::Display;
use thiserror::Error as ThisError;

///
/// Error
///
/// Top-level error for anything that can stop a schema from being built.
/// Customization problems never land here; they are diagnostics.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

impl Error {
    #[must_use]
    pub const fn origin(&self) -> ErrorOrigin {
        match self {
            Self::Config(_) => ErrorOrigin::Config,
            Self::Schema(SchemaError::Resolve(_)) => ErrorOrigin::Resolve,
            Self::Schema(_) => ErrorOrigin::Registry,
        }
    }
}

impl From<ResolveError> for Error {
    fn from(err: ResolveError) -> Self {
        Self::Schema(SchemaError::Resolve(err))
    }
}

///
/// ErrorOrigin
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[remain::sorted]
pub enum ErrorOrigin {
    Config,
    Registry,
    Resolve,
}

///
/// SchemaError
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum SchemaError {
    #[error("entity '{name}' is already registered")]
    DuplicateEntity { name: String },

    #[error("customization holder for '{holder}' registered with entity '{entity}'")]
    HolderMismatch { entity: String, holder: String },

    #[error("entity '{entity}' has no key property")]
    MissingKey { entity: String },

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ResolutionStage;

    #[test]
    fn origin_follows_variant() {
        let config: Error = ConfigError::InvalidValue {
            field: "fallback_key_type".to_string(),
            message: "custom".to_string(),
        }
        .into();
        assert_eq!(config.origin(), ErrorOrigin::Config);

        let dup: Error = SchemaError::DuplicateEntity {
            name: "Order".to_string(),
        }
        .into();
        assert_eq!(dup.origin(), ErrorOrigin::Registry);

        let stage: Error = ResolveError::StageOrder {
            entity: "Order".to_string(),
            expected: ResolutionStage::IdentityResolved,
            found: ResolutionStage::Unresolved,
        }
        .into();
        assert_eq!(stage.origin(), ErrorOrigin::Resolve);
    }

    #[test]
    fn schema_messages_name_the_entity() {
        let err = SchemaError::MissingKey {
            entity: "Note".to_string(),
        };

        assert_eq!(err.to_string(), "entity 'Note' has no key property");
    }
}
