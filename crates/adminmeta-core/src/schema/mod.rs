//! Registry: collects skeletons and their customizations, drives both
//! resolver passes, and freezes the result.

mod builder;

pub use builder::SchemaBuilder;

use crate::{
    error::SchemaError,
    model::{Entity, EntityId, Property},
    obs::{Diagnostic, Level},
    resolve::{EntityLookup, ForeignEntityInfo},
};
use serde::Serialize;
use std::{collections::BTreeMap, sync::Arc};

///
/// Schema
///
/// Fully resolved entity metadata. Immutable once built; share it through
/// [`Schema::into_shared`].
///

#[derive(Clone, Debug, Serialize)]
pub struct Schema {
    entities: Vec<Entity>,

    #[serde(skip)]
    names: BTreeMap<String, EntityId>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    diagnostics: Vec<Diagnostic>,
}

impl Schema {
    pub(crate) const fn new(
        entities: Vec<Entity>,
        names: BTreeMap<String, EntityId>,
        diagnostics: Vec<Diagnostic>,
    ) -> Self {
        Self {
            entities,
            names,
            diagnostics,
        }
    }

    #[must_use]
    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.id_of(name).and_then(|id| self.entity_by_id(id))
    }

    #[must_use]
    pub fn entity_by_id(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.index())
    }

    #[must_use]
    pub fn id_of(&self, name: &str) -> Option<EntityId> {
        self.names.get(name).copied()
    }

    /// Entities in registration order.
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Target entity of a linked foreign key.
    #[must_use]
    pub fn foreign_entity(&self, property: &Property) -> Option<&Entity> {
        property
            .foreign_entity()
            .and_then(|id| self.entity_by_id(id))
    }

    /// The paired reference property of `property` within `entity`.
    #[must_use]
    pub fn reference_property<'a>(
        &self,
        entity: &'a Entity,
        property: &Property,
    ) -> Option<&'a Property> {
        property
            .reference_property()
            .and_then(|id| entity.property(id))
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.level() == Level::Warn)
    }

    /// Fails on the first entity (in registration order) without a key.
    pub fn require_keys(&self) -> Result<(), SchemaError> {
        match self.entities.iter().find(|e| !e.has_key()) {
            Some(entity) => Err(SchemaError::MissingKey {
                entity: entity.name.clone(),
            }),
            None => Ok(()),
        }
    }

    #[must_use]
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl EntityLookup for Schema {
    fn entity(&self, name: &str) -> Option<ForeignEntityInfo> {
        let id = self.id_of(name)?;
        let entity = self.entity_by_id(id)?;

        Some(ForeignEntityInfo::capture(id, entity))
    }
}

///
/// TESTS
///
