use crate::model::Entity;

///
/// PropertySelector
///
/// Picks the members that get a default flag when the user customized none.
/// Runs during pass 1, after key flags are known.
///

pub trait PropertySelector {
    fn select(&self, entity: &Entity) -> Vec<String>;
}

impl<F> PropertySelector for F
where
    F: Fn(&Entity) -> Vec<String>,
{
    fn select(&self, entity: &Entity) -> Vec<String> {
        self(entity)
    }
}

///
/// DefaultDisplaySelector
/// Every non-key column that renders as a value in a list.
///

pub struct DefaultDisplaySelector;

impl PropertySelector for DefaultDisplaySelector {
    fn select(&self, entity: &Entity) -> Vec<String> {
        entity
            .properties
            .iter()
            .filter(|p| {
                !p.is_key
                    && p.type_info.is_system_type()
                    && !p.type_info.data_type.is_hidden_by_default()
            })
            .map(|p| p.name.clone())
            .collect()
    }
}

///
/// DefaultSearchSelector
/// Every non-key text column.
///

pub struct DefaultSearchSelector;

impl PropertySelector for DefaultSearchSelector {
    fn select(&self, entity: &Entity) -> Vec<String> {
        entity
            .properties
            .iter()
            .filter(|p| {
                !p.is_key
                    && p.type_info.is_system_type()
                    && p.type_info.data_type.is_text_searchable()
            })
            .map(|p| p.name.clone())
            .collect()
    }
}

///
/// TESTS
///
