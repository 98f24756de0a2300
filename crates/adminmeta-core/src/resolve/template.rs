use crate::{
    config::{ConfigError, TemplateConfig},
    model::TypeInfo,
};
use adminmeta_primitives::DataType;
use std::collections::BTreeMap;

const FOREIGN_KEY_DISPLAY: &str = "ForeignKey";
const FOREIGN_KEY_EDITOR: &str = "DropDownList";

///
/// TemplateLookup
///
/// Pure mapping from a final type to template names. Consulted only after
/// every type override and inference for the property is done.
///

pub trait TemplateLookup {
    fn display(&self, type_info: &TypeInfo, is_foreign_key: bool) -> String;
    fn editor(&self, type_info: &TypeInfo, is_foreign_key: bool) -> String;
}

///
/// DefaultTemplates
///
/// Built-in table with optional per-`DataType` overrides from config.
///

#[derive(Clone, Debug, Default)]
pub struct DefaultTemplates {
    display: BTreeMap<DataType, String>,
    editor: BTreeMap<DataType, String>,
    foreign_key_display: Option<String>,
    foreign_key_editor: Option<String>,
}

impl DefaultTemplates {
    pub fn from_config(config: &TemplateConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            display: config.display_overrides()?,
            editor: config.editor_overrides()?,
            foreign_key_display: config.foreign_key_display.clone(),
            foreign_key_editor: config.foreign_key_editor.clone(),
        })
    }

    #[must_use]
    pub const fn builtin_display(data_type: DataType) -> &'static str {
        match data_type {
            DataType::Binary => "Binary",
            DataType::Bool => "Boolean",
            DataType::DateTime => "DateTime",
            DataType::Enum => "Enum",
            DataType::File => "File",
            DataType::Html => "Html",
            DataType::Image => "Image",
            DataType::Markdown => "Markdown",
            DataType::Numeric => "Numeric",
            DataType::Password => "Password",
            DataType::Text | DataType::Unknown => "Text",
        }
    }

    #[must_use]
    pub const fn builtin_editor(type_info: &TypeInfo) -> &'static str {
        match type_info.data_type {
            DataType::Binary | DataType::File => "FileUpload",
            DataType::Bool => "CheckBox",
            DataType::DateTime => "DateTimePicker",
            DataType::Enum => "DropDownList",
            DataType::Html => "HtmlEditor",
            DataType::Image => "ImageUpload",
            DataType::Markdown => "MarkdownEditor",
            DataType::Numeric if type_info.native.is_int() => "Integer",
            DataType::Numeric => "Decimal",
            DataType::Password => "Password",
            DataType::Text | DataType::Unknown => "TextBox",
        }
    }
}

impl TemplateLookup for DefaultTemplates {
    fn display(&self, type_info: &TypeInfo, is_foreign_key: bool) -> String {
        if is_foreign_key {
            return self
                .foreign_key_display
                .clone()
                .unwrap_or_else(|| FOREIGN_KEY_DISPLAY.to_string());
        }

        self.display
            .get(&type_info.data_type)
            .cloned()
            .unwrap_or_else(|| Self::builtin_display(type_info.data_type).to_string())
    }

    fn editor(&self, type_info: &TypeInfo, is_foreign_key: bool) -> String {
        if is_foreign_key {
            return self
                .foreign_key_editor
                .clone()
                .unwrap_or_else(|| FOREIGN_KEY_EDITOR.to_string());
        }

        self.editor
            .get(&type_info.data_type)
            .cloned()
            .unwrap_or_else(|| Self::builtin_editor(type_info).to_string())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use adminmeta_primitives::NativeType;

    #[test]
    fn numeric_editor_depends_on_native_type() {
        let templates = DefaultTemplates::default();

        let int = TypeInfo::from_native(NativeType::Int64);
        let dec = TypeInfo::from_native(NativeType::Decimal);
        assert_eq!(templates.editor(&int, false), "Integer");
        assert_eq!(templates.editor(&dec, false), "Decimal");
        assert_eq!(templates.display(&int, false), "Numeric");
    }

    #[test]
    fn foreign_keys_use_lookup_templates() {
        let templates = DefaultTemplates::default();
        let ty = TypeInfo::from_native(NativeType::Guid);

        assert_eq!(templates.display(&ty, true), "ForeignKey");
        assert_eq!(templates.editor(&ty, true), "DropDownList");
    }

    #[test]
    fn config_overrides_take_precedence() {
        let mut config = TemplateConfig::default();
        config.display.insert("Bool".to_string(), "YesNo".to_string());
        config.foreign_key_editor = Some("Lookup".to_string());
        let templates = DefaultTemplates::from_config(&config).unwrap();

        let ty = TypeInfo::from_native(NativeType::Bool);
        assert_eq!(templates.display(&ty, false), "YesNo");
        assert_eq!(templates.editor(&ty, false), "CheckBox");
        assert_eq!(templates.editor(&ty, true), "Lookup");
    }
}
