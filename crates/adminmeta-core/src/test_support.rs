//! Shared skeletons for in-crate tests.

use crate::model::Entity;
use adminmeta_primitives::NativeType;

/// `Order { Name, OrderId, Total, PlacedOn }` with no literal `Id`.
pub fn order_entity() -> Entity {
    Entity::new("Order")
        .with_property("Name", NativeType::Text)
        .with_property("OrderId", NativeType::Int32)
        .with_property("Total", NativeType::Decimal)
        .with_property("PlacedOn", NativeType::DateTime)
}

/// `Customer { Id: Guid, Name }`.
pub fn customer_entity() -> Entity {
    Entity::new("Customer")
        .with_property("Id", NativeType::Guid)
        .with_property("Name", NativeType::Text)
}
