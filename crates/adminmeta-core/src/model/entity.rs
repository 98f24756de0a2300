use crate::{
    model::{Property, PropertyId, ResolutionStage},
    naming::{humanize, pluralize},
    reflect::TypeDescriptor,
    resolve::ResolveContext,
};
use adminmeta_primitives::NativeType;
use serde::Serialize;

///
/// Entity
///

#[derive(Clone, Debug, Serialize)]
pub struct Entity {
    pub name: String,
    pub table: TableName,
    pub verbose: Verbose,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_display_format: Option<String>,

    pub links: Links,
    pub properties: Vec<Property>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<PropertyGroup>,

    pub(crate) stage: ResolutionStage,
}

impl Entity {
    /// Empty skeleton with reflection-derived labels.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();

        Self {
            table: TableName::new(pluralize(&name)),
            verbose: Verbose::derived(&name),
            name,
            record_display_format: None,
            links: Links::default(),
            properties: Vec::new(),
            groups: Vec::new(),
            stage: ResolutionStage::Unresolved,
        }
    }

    #[must_use]
    pub fn from_descriptor(descriptor: &TypeDescriptor) -> Self {
        let mut entity = Self::new(descriptor.name.clone());
        entity.properties = descriptor.members.iter().map(Property::from_member).collect();

        entity
    }

    /// Append a property to the skeleton.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, native: NativeType) -> Self {
        self.properties.push(Property::new(name, native));
        self
    }

    #[must_use]
    pub const fn stage(&self) -> ResolutionStage {
        self.stage
    }

    // get
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut Property> {
        self.properties.iter_mut().find(|p| p.name == name)
    }

    #[must_use]
    pub fn property_id(&self, name: &str) -> Option<PropertyId> {
        self.properties
            .iter()
            .position(|p| p.name == name)
            .map(PropertyId::new)
    }

    #[must_use]
    pub fn property(&self, id: PropertyId) -> Option<&Property> {
        self.properties.get(id.index())
    }

    /// Key properties in declaration order. Empty when no key was found.
    pub fn key(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter().filter(|p| p.is_key)
    }

    #[must_use]
    pub fn first_key(&self) -> Option<&Property> {
        self.key().next()
    }

    #[must_use]
    pub fn has_key(&self) -> bool {
        self.first_key().is_some()
    }

    pub fn visible_properties(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter().filter(|p| p.is_visible)
    }

    pub fn searchable_properties(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter().filter(|p| p.is_searchable)
    }

    /// Properties tagged with `group`, in declaration order.
    pub fn group_members<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a Property> {
        self.properties
            .iter()
            .filter(move |p| p.group_name.as_deref() == Some(group))
    }

    #[must_use]
    pub fn group(&self, name: &str) -> Option<&PropertyGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Members the context's display rule would show when none are chosen.
    #[must_use]
    pub fn default_display_properties(&self, ctx: &ResolveContext) -> Vec<String> {
        ctx.display_selector.select(self)
    }

    #[must_use]
    pub fn default_search_properties(&self, ctx: &ResolveContext) -> Vec<String> {
        ctx.search_selector.select(self)
    }
}

///
/// TableName
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct TableName {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
}

impl TableName {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: None,
        }
    }

    /// `schema.name` when a schema is set, otherwise just `name`.
    #[must_use]
    pub fn qualified(&self) -> String {
        match &self.schema {
            Some(schema) => format!("{schema}.{}", self.name),
            None => self.name.clone(),
        }
    }
}

///
/// Verbose
/// Human-facing labels.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Verbose {
    pub singular: String,
    pub plural: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl Verbose {
    #[must_use]
    pub fn derived(name: &str) -> Self {
        Self {
            singular: humanize(name),
            plural: humanize(&pluralize(name)),
            group: None,
        }
    }
}

///
/// Links
/// Per-record link templates; `None` means the generated default is used.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Links {
    pub display: Option<String>,
    pub edit: Option<String>,
    pub delete: Option<String>,
}

///
/// PropertyGroup
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PropertyGroup {
    pub name: String,
    pub collapsed: bool,
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skeleton_defaults_come_from_the_name() {
        let entity = Entity::new("OrderItem");

        assert_eq!(entity.table.name, "OrderItems");
        assert_eq!(entity.verbose.singular, "Order Item");
        assert_eq!(entity.verbose.plural, "Order Items");
        assert_eq!(entity.stage(), ResolutionStage::Unresolved);
    }

    #[test]
    fn descriptor_order_is_preserved() {
        let descriptor = TypeDescriptor::new("Order")
            .member("Name", NativeType::Text)
            .member("OrderId", NativeType::Int32)
            .member("Total", NativeType::Decimal);
        let entity = Entity::from_descriptor(&descriptor);

        let names: Vec<_> = entity.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Name", "OrderId", "Total"]);
        assert_eq!(entity.property_id("Total"), Some(PropertyId::new(2)));
    }

    #[test]
    fn default_sets_follow_the_context_selectors() {
        let entity = Entity::new("Order")
            .with_property("Name", NativeType::Text)
            .with_property("Photo", NativeType::Bytes)
            .with_property("Total", NativeType::Decimal);
        let ctx = ResolveContext::default();

        assert_eq!(entity.default_display_properties(&ctx), ["Name", "Total"]);
        assert_eq!(entity.default_search_properties(&ctx), ["Name"]);
    }

    #[test]
    fn qualified_table_name() {
        let mut table = TableName::new("Orders");
        assert_eq!(table.qualified(), "Orders");

        table.schema = Some("sales".to_string());
        assert_eq!(table.qualified(), "sales.Orders");
    }
}
