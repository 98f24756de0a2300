use crate::{
    config::{ConfigError, ResolverConfig},
    customize::CustomizationHolder,
    error::SchemaError,
    model::{Entity, EntityId},
    reflect::Reflect,
    resolve::{IdentityIndex, ResolveContext, resolve_behavior, resolve_identity},
    schema::Schema,
};
use std::collections::BTreeMap;

///
/// SchemaBuilder
///
/// Owns every skeleton and holder until `build`. Registration order fixes
/// each entity's `EntityId`.
///

#[derive(Default)]
pub struct SchemaBuilder {
    ctx: ResolveContext,
    entries: Vec<(Entity, CustomizationHolder)>,
    names: BTreeMap<String, EntityId>,
}

impl SchemaBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_context(ctx: ResolveContext) -> Self {
        Self {
            ctx,
            ..Self::default()
        }
    }

    pub fn with_config(config: ResolverConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_context(ResolveContext::with_config(config)?))
    }

    pub fn register(
        &mut self,
        entity: Entity,
        holder: CustomizationHolder,
    ) -> Result<EntityId, SchemaError> {
        if holder.entity_name() != entity.name {
            return Err(SchemaError::HolderMismatch {
                entity: entity.name,
                holder: holder.entity_name().to_string(),
            });
        }
        if self.names.contains_key(&entity.name) {
            return Err(SchemaError::DuplicateEntity { name: entity.name });
        }

        let id = EntityId::new(self.entries.len());
        self.names.insert(entity.name.clone(), id);
        self.entries.push((entity, holder));

        Ok(id)
    }

    /// Register a reflected type, customizing it in place.
    pub fn register_type<T, F>(&mut self, customize: F) -> Result<EntityId, SchemaError>
    where
        T: Reflect,
        F: FnOnce(&mut CustomizationHolder),
    {
        let descriptor = T::type_descriptor();
        let mut holder = CustomizationHolder::for_type(&descriptor);
        customize(&mut holder);

        self.register(Entity::from_descriptor(&descriptor), holder)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pass 1 for every entity, snapshot, then pass 2 for every entity.
    pub fn build(self) -> Result<Schema, SchemaError> {
        let Self {
            ctx,
            mut entries,
            names,
        } = self;
        let mut diagnostics = Vec::new();

        for (entity, holder) in &mut entries {
            resolve_identity(entity, holder, &ctx, &mut diagnostics)?;
        }

        // barrier
        let index = IdentityIndex::capture(entries.iter().map(|(entity, _)| entity));

        for (entity, holder) in &mut entries {
            resolve_behavior(entity, holder, &index, &ctx, &mut diagnostics)?;
        }

        let entities: Vec<Entity> = entries.into_iter().map(|(entity, _)| entity).collect();
        tracing::info!(
            entities = entities.len(),
            diagnostics = diagnostics.len(),
            "schema built"
        );

        Ok(Schema::new(entities, names, diagnostics))
    }
}

///
/// TESTS
///
