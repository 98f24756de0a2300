use crate::{
    model::{EntityId, PropertyId, TypeInfo},
    naming::humanize,
    reflect::MemberDescriptor,
};
use adminmeta_primitives::{DeleteOption, FileNameOption, NativeType};
use serde::Serialize;
use std::ops::Not;

///
/// Property
///

#[derive(Clone, Debug, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct Property {
    pub name: String,
    pub is_key: bool,
    pub is_visible: bool,
    pub is_searchable: bool,
    pub is_required: bool,
    pub column: String,
    pub display_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,

    pub type_info: TypeInfo,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreign_key: Option<ForeignKey>,

    pub template: Template,
    pub value: PropertyValue,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_error_message: Option<String>,

    pub delete_option: DeleteOption,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_options: Option<FileOptions>,
}

impl Property {
    /// Bare skeleton: column and label derived from the name, nothing flagged.
    #[must_use]
    pub fn new(name: impl Into<String>, native: NativeType) -> Self {
        let name = name.into();

        Self {
            column: name.clone(),
            display_name: humanize(&name),
            name,
            is_key: false,
            is_visible: false,
            is_searchable: false,
            is_required: false,
            description: None,
            group_name: None,
            type_info: TypeInfo::from_native(native),
            foreign_key: None,
            template: Template::default(),
            value: PropertyValue::default(),
            format: None,
            required_error_message: None,
            delete_option: DeleteOption::default(),
            file_options: None,
        }
    }

    #[must_use]
    pub fn from_member(member: &MemberDescriptor) -> Self {
        Self::new(member.name.clone(), member.native_type.clone())
    }

    #[must_use]
    pub const fn is_foreign_key(&self) -> bool {
        self.foreign_key.is_some()
    }

    /// Linked entity, if the foreign key resolved.
    #[must_use]
    pub fn foreign_entity(&self) -> Option<EntityId> {
        self.foreign_key.as_ref().and_then(|fk| fk.entity)
    }

    /// Sibling property on the other end of the foreign key, if linked.
    #[must_use]
    pub fn reference_property(&self) -> Option<PropertyId> {
        self.foreign_key.as_ref().and_then(|fk| fk.reference_property)
    }
}

///
/// ForeignKey
///
/// `entity_name` is attached during the identity pass; `entity` and
/// `reference_property` are filled in by the behaviour pass.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ForeignKey {
    pub entity_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<EntityId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_property_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_property: Option<PropertyId>,
}

impl ForeignKey {
    #[must_use]
    pub const fn declared(entity_name: String, reference_property_name: Option<String>) -> Self {
        Self {
            entity_name,
            entity: None,
            reference_property_name,
            reference_property: None,
        }
    }
}

///
/// Template
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Template {
    pub display: String,
    pub editor: String,
}

///
/// PropertyValue
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct PropertyValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

///
/// FileOptions
///
/// Upload handling for file and image properties.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct FileOptions {
    pub name_option: FileNameOption,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_extensions: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_file_size: Option<u64>,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub is_image: bool,
}

impl FileOptions {
    #[must_use]
    pub fn image() -> Self {
        Self {
            is_image: true,
            ..Self::default()
        }
    }
}

///
/// TESTS
///
