use adminmeta_primitives::{DataType, NativeType};
use serde::Serialize;

///
/// TypeInfo
///
/// Storage and display type of a property. `native` may be replaced during
/// foreign-key resolution; `data_type` follows it unless overridden.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct TypeInfo {
    pub native: NativeType,
    pub data_type: DataType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_data_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enum_type: Option<String>,
}

impl TypeInfo {
    #[must_use]
    pub const fn from_native(native: NativeType) -> Self {
        let data_type = native.default_data_type();

        Self {
            native,
            data_type,
            source_data_type: None,
            enum_type: None,
        }
    }

    #[must_use]
    pub const fn is_system_type(&self) -> bool {
        self.native.is_system()
    }

    /// Replace the native type and re-derive the display category.
    pub fn set_native(&mut self, native: NativeType) {
        self.data_type = native.default_data_type();
        self.native = native;
    }
}
