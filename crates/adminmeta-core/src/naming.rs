//! Naming transforms used for default table names and display labels.

use convert_case::{Case, Casing};

/// English pluralization good enough for table names.
#[must_use]
pub fn pluralize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    let lower = word.to_ascii_lowercase();

    if let Some(stem) = word.strip_suffix(['y', 'Y'])
        && stem
            .chars()
            .last()
            .is_some_and(|c| c.is_ascii_alphabetic() && !is_vowel(c))
    {
        return format!("{stem}ies");
    }

    if lower.ends_with('s')
        || lower.ends_with('x')
        || lower.ends_with('z')
        || lower.ends_with("ch")
        || lower.ends_with("sh")
    {
        format!("{word}es")
    } else {
        format!("{word}s")
    }
}

/// Title-cased label for an identifier: `OrderItem` -> `Order Item`.
#[must_use]
pub fn humanize(ident: &str) -> String {
    ident.to_case(Case::Title)
}

// Case-insensitive name comparison used for key inference.
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

const fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pluralize_regular_and_sibilant_words() {
        assert_eq!(pluralize("Order"), "Orders");
        assert_eq!(pluralize("Box"), "Boxes");
        assert_eq!(pluralize("Address"), "Addresses");
        assert_eq!(pluralize("Batch"), "Batches");
    }

    #[test]
    fn pluralize_consonant_y() {
        assert_eq!(pluralize("Category"), "Categories");
        assert_eq!(pluralize("Day"), "Days");
        assert_eq!(pluralize(""), "");
    }

    #[test]
    fn humanize_splits_words() {
        assert_eq!(humanize("OrderItem"), "Order Item");
        assert_eq!(humanize("customer_id"), "Customer Id");
    }

    #[test]
    fn ignore_case_comparison() {
        assert!(eq_ignore_case("ID", "id"));
        assert!(eq_ignore_case("OrderId", "orderid"));
        assert!(!eq_ignore_case("OrderIds", "orderid"));
    }
}
