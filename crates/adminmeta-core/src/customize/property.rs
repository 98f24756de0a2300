use crate::{
    customize::{ForeignKeyPatch, PropertyPatch},
    model::FileOptions,
};
use adminmeta_primitives::{DataType, DeleteOption};

///
/// PropertyCustomizer
///
/// Narrow, chainable mutation surface over a single `PropertyPatch`.
/// Only patch fields are reachable; no entity state is.
///

pub struct PropertyCustomizer<'a> {
    patch: &'a mut PropertyPatch,
}

impl<'a> PropertyCustomizer<'a> {
    pub(crate) const fn new(patch: &'a mut PropertyPatch) -> Self {
        Self { patch }
    }

    pub fn key(&mut self) -> &mut Self {
        self.patch.is_key = Some(true);
        self
    }

    pub fn visible(&mut self, visible: bool) -> &mut Self {
        self.patch.is_visible = Some(visible);
        self
    }

    pub fn searchable(&mut self, searchable: bool) -> &mut Self {
        self.patch.is_searchable = Some(searchable);
        self
    }

    pub fn column(&mut self, column: impl Into<String>) -> &mut Self {
        self.patch.column = Some(column.into());
        self
    }

    pub fn display(&mut self, name: impl Into<String>, description: impl Into<String>) -> &mut Self {
        self.display_name(name).description(description)
    }

    pub fn display_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.patch.display_name = Some(name.into());
        self
    }

    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        self.patch.description = Some(description.into());
        self
    }

    pub fn data_type(&mut self, data_type: DataType) -> &mut Self {
        self.patch.data_type = Some(data_type);
        self
    }

    /// Enum-backed property; implies `DataType::Enum`.
    pub fn enum_type(&mut self, enum_type: impl Into<String>) -> &mut Self {
        self.patch.data_type = Some(DataType::Enum);
        self.patch.enum_type = Some(enum_type.into());
        self
    }

    /// Free-form hint from the declaring side (`Currency`, `EmailAddress`, ...).
    pub fn source_data_type(&mut self, source: impl Into<String>) -> &mut Self {
        self.patch.source_data_type = Some(source.into());
        self
    }

    pub fn foreign_key(&mut self, entity: impl Into<String>) -> &mut Self {
        let entity = entity.into();
        match &mut self.patch.foreign_key {
            Some(fk) => fk.entity = entity,
            None => {
                self.patch.foreign_key = Some(ForeignKeyPatch {
                    entity,
                    reference_property: None,
                });
            }
        }
        self
    }

    /// Foreign key to `entity` paired with the sibling `property` that holds
    /// the key value.
    pub fn reference_to(
        &mut self,
        entity: impl Into<String>,
        property: impl Into<String>,
    ) -> &mut Self {
        self.patch.foreign_key = Some(ForeignKeyPatch {
            entity: entity.into(),
            reference_property: Some(property.into()),
        });
        self
    }

    pub fn templates(
        &mut self,
        display: impl Into<String>,
        editor: impl Into<String>,
    ) -> &mut Self {
        self.display_template(display).editor_template(editor)
    }

    pub fn display_template(&mut self, template: impl Into<String>) -> &mut Self {
        self.patch.display_template = Some(template.into());
        self
    }

    pub fn editor_template(&mut self, template: impl Into<String>) -> &mut Self {
        self.patch.editor_template = Some(template.into());
        self
    }

    pub fn default_value(&mut self, value: impl Into<String>) -> &mut Self {
        self.patch.default_value = Some(value.into());
        self
    }

    pub fn format(&mut self, format: impl Into<String>) -> &mut Self {
        self.patch.format = Some(format.into());
        self
    }

    /// Mark as required; `None` keeps the renderer's stock message.
    pub fn required(&mut self, message: Option<&str>) -> &mut Self {
        self.patch.is_required = Some(true);
        self.patch.required_error_message = message.map(str::to_string);
        self
    }

    pub fn optional(&mut self) -> &mut Self {
        self.patch.is_required = Some(false);
        self.patch.required_error_message = None;
        self
    }

    pub fn on_delete(&mut self, option: DeleteOption) -> &mut Self {
        self.patch.delete_option = Some(option);
        self
    }

    /// File upload; sets the data type to `File` or `Image`.
    pub fn file(&mut self, options: FileOptions) -> &mut Self {
        self.patch.data_type = Some(if options.is_image {
            DataType::Image
        } else {
            DataType::File
        });
        self.patch.file_options = Some(options);
        self
    }

    pub fn group(&mut self, group: impl Into<String>) -> &mut Self {
        self.patch.group = Some(group.into());
        self
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chained_calls_set_independent_fields() {
        let mut patch = PropertyPatch::default();
        PropertyCustomizer::new(&mut patch)
            .column("cust_name")
            .display("Customer", "Full legal name")
            .required(Some("Name is required"))
            .searchable(true);

        assert_eq!(patch.column.as_deref(), Some("cust_name"));
        assert_eq!(patch.display_name.as_deref(), Some("Customer"));
        assert_eq!(patch.description.as_deref(), Some("Full legal name"));
        assert_eq!(patch.is_required, Some(true));
        assert_eq!(patch.required_error_message.as_deref(), Some("Name is required"));
        assert_eq!(patch.is_searchable, Some(true));
        assert_eq!(patch.is_visible, None);
    }

    #[test]
    fn foreign_key_keeps_declared_reference() {
        let mut patch = PropertyPatch::default();
        PropertyCustomizer::new(&mut patch)
            .reference_to("Customer", "CustomerId")
            .foreign_key("Client");

        let fk = patch.foreign_key.unwrap();
        assert_eq!(fk.entity, "Client");
        assert_eq!(fk.reference_property.as_deref(), Some("CustomerId"));
    }

    #[test]
    fn image_upload_sets_data_type() {
        let mut patch = PropertyPatch::default();
        PropertyCustomizer::new(&mut patch).file(FileOptions::image());

        assert_eq!(patch.data_type, Some(DataType::Image));
        assert!(patch.file_options.is_some_and(|o| o.is_image));
    }
}
