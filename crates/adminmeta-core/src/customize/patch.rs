use crate::model::{FileOptions, PropertyGroup};
use adminmeta_primitives::{DataType, DeleteOption};

///
/// PropertyPatch
///
/// Sparse overrides for one property. `None` means "not customized", which
/// is different from `Some(false)` or `Some(String::new())`.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PropertyPatch {
    pub is_key: Option<bool>,
    pub is_visible: Option<bool>,
    pub is_searchable: Option<bool>,
    pub column: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub data_type: Option<DataType>,
    pub source_data_type: Option<String>,
    pub enum_type: Option<String>,
    pub foreign_key: Option<ForeignKeyPatch>,
    pub display_template: Option<String>,
    pub editor_template: Option<String>,
    pub default_value: Option<String>,
    pub format: Option<String>,
    pub is_required: Option<bool>,
    pub required_error_message: Option<String>,
    pub delete_option: Option<DeleteOption>,
    pub file_options: Option<FileOptions>,
    pub group: Option<String>,
}

impl PropertyPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

///
/// ForeignKeyPatch
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ForeignKeyPatch {
    pub entity: String,
    pub reference_property: Option<String>,
}

///
/// EntityPatch
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EntityPatch {
    pub table: Option<String>,
    pub schema: Option<String>,
    pub singular: Option<String>,
    pub plural: Option<String>,
    pub group: Option<String>,
    pub display_format: Option<String>,
    pub display_link: Option<String>,
    pub edit_link: Option<String>,
    pub delete_link: Option<String>,
    pub groups: Vec<PropertyGroup>,
}

impl EntityPatch {
    /// Record a property group's collapsed state; first declaration fixes
    /// the position, later ones overwrite the state.
    pub(crate) fn upsert_group(&mut self, name: &str, collapsed: bool) {
        match self.groups.iter_mut().find(|g| g.name == name) {
            Some(group) => group.collapsed = collapsed,
            None => self.groups.push(PropertyGroup {
                name: name.to_string(),
                collapsed,
            }),
        }
    }
}
