use adminmeta_primitives::NativeType;
use derive_more::Display;
use serde::Serialize;
use std::fmt;

///
/// Level
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Level {
    Info,
    Warn,
}

///
/// FallbackReason
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
pub enum FallbackReason {
    #[display("foreign entity is not registered")]
    UnresolvedEntity,

    #[display("foreign entity has no key")]
    NoKey,
}

///
/// DiagnosticKind
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum DiagnosticKind {
    /// No explicit key and no `id` / `<entity>id` member.
    MissingKey,

    /// A customization names a member the entity does not have.
    UnknownMember { member: String },

    /// Foreign-key target is not in the registry.
    UnresolvedForeignEntity { foreign_entity: String },

    /// Foreign-key native type could not be copied from the target key.
    ForeignKeyTypeFallback {
        foreign_entity: String,
        fallback: NativeType,
        reason: FallbackReason,
    },
}

///
/// Diagnostic
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Diagnostic {
    pub entity: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,

    pub kind: DiagnosticKind,
}

impl Diagnostic {
    #[must_use]
    pub fn entity(entity: &str, kind: DiagnosticKind) -> Self {
        Self {
            entity: entity.to_string(),
            property: None,
            kind,
        }
    }

    #[must_use]
    pub fn property(entity: &str, property: &str, kind: DiagnosticKind) -> Self {
        Self {
            entity: entity.to_string(),
            property: Some(property.to_string()),
            kind,
        }
    }

    #[must_use]
    pub const fn level(&self) -> Level {
        match self.kind {
            DiagnosticKind::MissingKey | DiagnosticKind::UnresolvedForeignEntity { .. } => {
                Level::Info
            }
            DiagnosticKind::UnknownMember { .. } | DiagnosticKind::ForeignKeyTypeFallback { .. } => {
                Level::Warn
            }
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.property {
            Some(property) => write!(f, "{}.{}: ", self.entity, property)?,
            None => write!(f, "{}: ", self.entity)?,
        }

        match &self.kind {
            DiagnosticKind::MissingKey => write!(f, "no key property"),
            DiagnosticKind::UnknownMember { member } => {
                write!(f, "customization for unknown member '{member}' ignored")
            }
            DiagnosticKind::UnresolvedForeignEntity { foreign_entity } => {
                write!(f, "foreign entity '{foreign_entity}' not found")
            }
            DiagnosticKind::ForeignKeyTypeFallback {
                foreign_entity,
                fallback,
                reason,
            } => write!(
                f,
                "foreign key to '{foreign_entity}' defaulted to {fallback} ({reason})"
            ),
        }
    }
}
