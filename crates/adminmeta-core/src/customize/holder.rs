use crate::{
    customize::{EntityPatch, MemberKey, PropertyCustomizer, PropertyPatch},
    reflect::TypeDescriptor,
};
use std::collections::BTreeMap;

///
/// CustomizationHolder
///
/// Accumulates user intent for one entity: one `EntityPatch` plus at most
/// one `PropertyPatch` per member. Later calls overwrite earlier ones field
/// by field; unrelated fields are never cleared.
///

#[derive(Clone, Debug, Default)]
pub struct CustomizationHolder {
    entity: String,
    entity_patch: EntityPatch,
    properties: BTreeMap<MemberKey, PropertyPatch>,
}

impl CustomizationHolder {
    #[must_use]
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn for_type(descriptor: &TypeDescriptor) -> Self {
        Self::new(descriptor.name.clone())
    }

    //
    // property-level builders
    //

    pub fn set_key_properties<I, S>(&mut self, members: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for member in members {
            self.patch_for(member.as_ref()).is_key = Some(true);
        }
        self
    }

    pub fn set_display_properties<I, S>(&mut self, members: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for member in members {
            self.patch_for(member.as_ref()).is_visible = Some(true);
        }
        self
    }

    pub fn set_search_properties<I, S>(&mut self, members: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for member in members {
            self.patch_for(member.as_ref()).is_searchable = Some(true);
        }
        self
    }

    /// Record the group's collapsed state and move each member into it.
    pub fn set_property_group<I, S>(&mut self, group: &str, collapsed: bool, members: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.entity_patch.upsert_group(group, collapsed);
        for member in members {
            self.patch_for(member.as_ref()).group = Some(group.to_string());
        }
        self
    }

    pub fn configure_property<F>(&mut self, member: &str, customize: F) -> &mut Self
    where
        F: FnOnce(&mut PropertyCustomizer<'_>),
    {
        let mut customizer = PropertyCustomizer::new(self.patch_for(member));
        customize(&mut customizer);
        self
    }

    //
    // entity-level builders
    //

    pub fn set_entity_display_format(&mut self, format: &str) -> &mut Self {
        self.entity_patch.display_format = Some(format.to_string());
        self
    }

    /// All three links are replaced on every call.
    pub fn set_entity_links(
        &mut self,
        display: Option<&str>,
        edit: Option<&str>,
        delete: Option<&str>,
    ) -> &mut Self {
        self.entity_patch.display_link = display.map(str::to_string);
        self.entity_patch.edit_link = edit.map(str::to_string);
        self.entity_patch.delete_link = delete.map(str::to_string);
        self
    }

    pub fn set_entity_group(&mut self, group: &str) -> &mut Self {
        self.entity_patch.group = Some(group.to_string());
        self
    }

    pub fn set_entity_table(&mut self, table: &str, schema: Option<&str>) -> &mut Self {
        self.entity_patch.table = Some(table.to_string());
        self.entity_patch.schema = schema.map(str::to_string);
        self
    }

    pub fn set_entity_names(&mut self, singular: &str, plural: &str) -> &mut Self {
        self.entity_patch.singular = Some(singular.to_string());
        self.entity_patch.plural = Some(plural.to_string());
        self
    }

    //
    // read side
    //

    #[must_use]
    pub fn entity_name(&self) -> &str {
        &self.entity
    }

    #[must_use]
    pub const fn entity_patch(&self) -> &EntityPatch {
        &self.entity_patch
    }

    #[must_use]
    pub fn property_patch(&self, member: &str) -> Option<&PropertyPatch> {
        self.properties.get(&self.key(member))
    }

    /// Patches in `MemberKey` order.
    pub fn property_patches(&self) -> impl Iterator<Item = (&MemberKey, &PropertyPatch)> {
        self.properties.iter()
    }

    /// Entity-wide check: has any member customized this dimension?
    pub fn any_property(&self, pred: impl Fn(&PropertyPatch) -> bool) -> bool {
        self.properties.values().any(pred)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    // Get-or-create; the only way a property patch comes into existence.
    pub(crate) fn patch_for(&mut self, member: &str) -> &mut PropertyPatch {
        let key = self.key(member);

        self.properties.entry(key).or_default()
    }

    fn key(&self, member: &str) -> MemberKey {
        MemberKey::new(&self.entity, member)
    }
}

///
/// TESTS
///
