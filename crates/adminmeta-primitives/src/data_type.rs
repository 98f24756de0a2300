use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};

///
/// DataType
///
/// Display category of a property. Drives template selection and the
/// default visible/searchable column rules.
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, FromStr, Hash, Ord, PartialEq,
    PartialOrd, Serialize,
)]
#[remain::sorted]
pub enum DataType {
    Binary,
    Bool,
    DateTime,
    Enum,
    File,
    Html,
    Image,
    Markdown,
    Numeric,
    Password,
    #[default]
    Text,
    Unknown,
}

impl DataType {
    /// Free-text categories a search box can match against.
    #[must_use]
    pub const fn is_text_searchable(self) -> bool {
        matches!(self, Self::Html | Self::Markdown | Self::Text)
    }

    /// Categories that never make sense as a list column.
    #[must_use]
    pub const fn is_hidden_by_default(self) -> bool {
        matches!(self, Self::Binary | Self::Password | Self::Unknown)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_variant_names() {
        assert_eq!("Markdown".parse::<DataType>().ok(), Some(DataType::Markdown));
        assert!("Spreadsheet".parse::<DataType>().is_err());
    }

    #[test]
    fn searchable_and_hidden_do_not_overlap() {
        for ty in [
            DataType::Binary,
            DataType::Bool,
            DataType::DateTime,
            DataType::Enum,
            DataType::File,
            DataType::Html,
            DataType::Image,
            DataType::Markdown,
            DataType::Numeric,
            DataType::Password,
            DataType::Text,
            DataType::Unknown,
        ] {
            assert!(!(ty.is_text_searchable() && ty.is_hidden_by_default()), "{ty}");
        }
    }
}
