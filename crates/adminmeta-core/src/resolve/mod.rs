//! The two resolver passes and the collaborators they consult.
//!
//! Pass 1 ([`resolve_identity`]) fixes naming, table mapping and keys and
//! applies the default key/visible/searchable rules. Pass 2
//! ([`resolve_behavior`]) links foreign keys across entities, copies the
//! remaining overrides and picks templates. Every entity must finish pass 1
//! before any entity starts pass 2.

mod behavior;
mod identity;
mod lookup;
mod selector;
mod template;

pub use behavior::resolve_behavior;
pub use identity::resolve_identity;
pub use lookup::{EntityLookup, ForeignEntityInfo, IdentityIndex};
pub use selector::{DefaultDisplaySelector, DefaultSearchSelector, PropertySelector};
pub use template::{DefaultTemplates, TemplateLookup};

use crate::{
    config::{ConfigError, ResolverConfig},
    model::ResolutionStage,
    naming,
};
use thiserror::Error as ThisError;

///
/// ResolveError
///
/// Only raised for driver misuse (running passes out of order); bad
/// customization is never an error.
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum ResolveError {
    #[error("entity '{entity}' is {found}, expected {expected}")]
    StageOrder {
        entity: String,
        expected: ResolutionStage,
        found: ResolutionStage,
    },

    #[error("entity '{entity}' linked to '{foreign_entity}' before it was identity-resolved")]
    ForeignEntityNotReady {
        entity: String,
        foreign_entity: String,
    },
}

///
/// ResolveContext
///
/// Pluggable policy consulted by both passes.
///

pub struct ResolveContext {
    pub config: ResolverConfig,
    pub display_selector: Box<dyn PropertySelector>,
    pub search_selector: Box<dyn PropertySelector>,
    pub templates: Box<dyn TemplateLookup>,
    pub pluralize: fn(&str) -> String,
}

impl ResolveContext {
    pub fn with_config(config: ResolverConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let templates = DefaultTemplates::from_config(&config.templates)?;

        Ok(Self {
            config,
            display_selector: Box::new(DefaultDisplaySelector),
            search_selector: Box::new(DefaultSearchSelector),
            templates: Box::new(templates),
            pluralize: naming::pluralize,
        })
    }

    #[must_use]
    pub fn with_display_selector(mut self, selector: impl PropertySelector + 'static) -> Self {
        self.display_selector = Box::new(selector);
        self
    }

    #[must_use]
    pub fn with_search_selector(mut self, selector: impl PropertySelector + 'static) -> Self {
        self.search_selector = Box::new(selector);
        self
    }

    #[must_use]
    pub fn with_templates(mut self, templates: impl TemplateLookup + 'static) -> Self {
        self.templates = Box::new(templates);
        self
    }

    #[must_use]
    pub fn with_pluralize(mut self, pluralize: fn(&str) -> String) -> Self {
        self.pluralize = pluralize;
        self
    }

    // Default table name for an entity without a table customization.
    pub(crate) fn default_table_name(&self, entity: &str) -> String {
        if self.config.pluralize_table_names {
            (self.pluralize)(entity)
        } else {
            entity.to_string()
        }
    }
}

impl Default for ResolveContext {
    fn default() -> Self {
        Self {
            config: ResolverConfig::default(),
            display_selector: Box::new(DefaultDisplaySelector),
            search_selector: Box::new(DefaultSearchSelector),
            templates: Box::new(DefaultTemplates::default()),
            pluralize: naming::pluralize,
        }
    }
}
