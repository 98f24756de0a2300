use crate::model::{Entity, EntityId, ResolutionStage};
use adminmeta_primitives::NativeType;
use std::collections::BTreeMap;

///
/// EntityLookup
///
/// Registry view consulted by pass 2 to resolve foreign-key targets.
///

pub trait EntityLookup {
    fn entity(&self, name: &str) -> Option<ForeignEntityInfo>;
}

///
/// ForeignEntityInfo
/// What pass 2 needs to know about a foreign-key target.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ForeignEntityInfo {
    pub id: EntityId,
    pub stage: ResolutionStage,
    pub key_type: Option<NativeType>,
}

impl ForeignEntityInfo {
    #[must_use]
    pub fn capture(id: EntityId, entity: &Entity) -> Self {
        Self {
            id,
            stage: entity.stage(),
            key_type: entity.first_key().map(|key| key.type_info.native.clone()),
        }
    }
}

///
/// IdentityIndex
///
/// Snapshot of every entity's identity taken at the pass 1 / pass 2 barrier.
/// Pass 2 reads this instead of the live entities it is mutating.
///

#[derive(Clone, Debug, Default)]
pub struct IdentityIndex {
    entries: BTreeMap<String, ForeignEntityInfo>,
}

impl IdentityIndex {
    /// Capture entities in id order; `EntityId(n)` is the n-th entity.
    pub fn capture<'a>(entities: impl IntoIterator<Item = &'a Entity>) -> Self {
        let entries = entities
            .into_iter()
            .enumerate()
            .map(|(index, entity)| {
                (
                    entity.name.clone(),
                    ForeignEntityInfo::capture(EntityId::new(index), entity),
                )
            })
            .collect();

        Self { entries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl EntityLookup for IdentityIndex {
    fn entity(&self, name: &str) -> Option<ForeignEntityInfo> {
        self.entries.get(name).cloned()
    }
}
