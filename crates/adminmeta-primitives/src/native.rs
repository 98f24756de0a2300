use crate::DataType;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::{convert::Infallible, str::FromStr};

///
/// NativeType
///
/// Declared storage type of a reflected member.
/// `Custom` carries the name of any non-system type (usually another entity).
///

#[derive(Clone, Debug, Default, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[remain::sorted]
pub enum NativeType {
    Bool,
    Bytes,
    Char,
    #[display("{_0}")]
    Custom(String),
    Date,
    DateTime,
    Decimal,
    Float32,
    Float64,
    Guid,
    Int8,
    Int16,
    Int32,
    Int64,
    Nat8,
    Nat16,
    Nat32,
    Nat64,
    #[default]
    Text,
    Time,
}

impl NativeType {
    /// Build a non-system type reference.
    #[must_use]
    pub fn custom(name: impl Into<String>) -> Self {
        Self::Custom(name.into())
    }

    /// Whether the type belongs to the built-in system vocabulary.
    #[must_use]
    pub const fn is_system(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }

    #[must_use]
    pub const fn is_signed_int(&self) -> bool {
        matches!(self, Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64)
    }

    #[must_use]
    pub const fn is_unsigned_int(&self) -> bool {
        matches!(self, Self::Nat8 | Self::Nat16 | Self::Nat32 | Self::Nat64)
    }

    #[must_use]
    pub const fn is_int(&self) -> bool {
        self.is_signed_int() || self.is_unsigned_int()
    }

    /// Display category implied by the native type alone.
    #[must_use]
    pub const fn default_data_type(&self) -> DataType {
        match self {
            Self::Bool => DataType::Bool,
            Self::Bytes => DataType::Binary,
            Self::Char | Self::Guid | Self::Text => DataType::Text,
            Self::Date | Self::DateTime | Self::Time => DataType::DateTime,
            Self::Decimal
            | Self::Float32
            | Self::Float64
            | Self::Int8
            | Self::Int16
            | Self::Int32
            | Self::Int64
            | Self::Nat8
            | Self::Nat16
            | Self::Nat32
            | Self::Nat64 => DataType::Numeric,
            Self::Custom(_) => DataType::Unknown,
        }
    }
}

// Unknown names become `Custom`, so parsing never fails.
impl FromStr for NativeType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ty = match s {
            "Bool" => Self::Bool,
            "Bytes" => Self::Bytes,
            "Char" => Self::Char,
            "Date" => Self::Date,
            "DateTime" => Self::DateTime,
            "Decimal" => Self::Decimal,
            "Float32" => Self::Float32,
            "Float64" => Self::Float64,
            "Guid" => Self::Guid,
            "Int8" => Self::Int8,
            "Int16" => Self::Int16,
            "Int32" => Self::Int32,
            "Int64" => Self::Int64,
            "Nat8" => Self::Nat8,
            "Nat16" => Self::Nat16,
            "Nat32" => Self::Nat32,
            "Nat64" => Self::Nat64,
            "Text" => Self::Text,
            "Time" => Self::Time,
            other => Self::Custom(other.to_string()),
        };

        Ok(ty)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_types_are_not_system_types() {
        assert!(NativeType::Int32.is_system());
        assert!(NativeType::Guid.is_system());
        assert!(!NativeType::custom("Customer").is_system());
    }

    #[test]
    fn parse_falls_back_to_custom() {
        assert_eq!("Int64".parse::<NativeType>(), Ok(NativeType::Int64));
        assert_eq!(
            "Customer".parse::<NativeType>(),
            Ok(NativeType::custom("Customer"))
        );
    }

    #[test]
    fn display_matches_parse_input() {
        for name in ["Guid", "Int32", "DateTime", "Order"] {
            let ty: NativeType = name.parse().unwrap();
            assert_eq!(ty.to_string(), name);
        }
    }

    #[test]
    fn int_covers_signed_and_unsigned() {
        assert!(NativeType::Int32.is_int());
        assert!(NativeType::Nat8.is_int());
        assert!(!NativeType::Decimal.is_int());
        assert!(!NativeType::custom("Order").is_int());
    }

    #[test]
    fn default_data_type_buckets() {
        assert_eq!(NativeType::Nat16.default_data_type(), DataType::Numeric);
        assert_eq!(NativeType::Time.default_data_type(), DataType::DateTime);
        assert_eq!(
            NativeType::custom("Order").default_data_type(),
            DataType::Unknown
        );
    }
}
