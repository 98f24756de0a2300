use adminmeta_core::prelude::*;
use proptest::prelude::*;
use std::collections::BTreeSet;

const MEMBERS: [&str; 6] = ["Id", "Name", "Email", "Total", "PlacedOn", "Notes"];

fn members() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(MEMBERS.to_vec()), 0..6)
}

fn visible(holder: &CustomizationHolder) -> BTreeSet<String> {
    holder
        .property_patches()
        .filter(|(_, patch)| patch.is_visible == Some(true))
        .map(|(key, _)| key.member.clone())
        .collect()
}

proptest! {
    #[test]
    fn display_sets_accumulate_as_union(a in members(), b in members()) {
        let mut holder = CustomizationHolder::new("Order");
        holder.set_display_properties(&a).set_display_properties(&b);

        let expected: BTreeSet<String> =
            a.iter().chain(&b).map(|m| (*m).to_string()).collect();
        prop_assert_eq!(visible(&holder), expected);
    }

    #[test]
    fn repeating_a_call_changes_nothing(a in members()) {
        let mut once = CustomizationHolder::new("Order");
        once.set_search_properties(&a);

        let mut twice = once.clone();
        twice.set_search_properties(&a);

        prop_assert_eq!(once.len(), twice.len());
        for (key, patch) in once.property_patches() {
            prop_assert_eq!(Some(patch), twice.property_patch(&key.member));
        }
    }

    #[test]
    fn unrelated_fields_survive_later_calls(a in members(), column in "[a-z_]{1,12}") {
        let mut holder = CustomizationHolder::new("Order");
        holder.configure_property("Name", |p| {
            p.column(column.clone());
        });
        holder.set_display_properties(&a).set_key_properties(&a);

        let patch = holder.property_patch("Name").unwrap();
        prop_assert_eq!(patch.column.as_deref(), Some(column.as_str()));
    }
}
