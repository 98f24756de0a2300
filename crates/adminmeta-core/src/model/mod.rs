//! Resolved metadata model.
//!
//! `Entity` and `Property` start life as skeletons built from a reflected
//! type, are mutated by the two resolver passes, and are read-only once the
//! owning `Schema` has been built. Cross-entity links are stored as
//! [`EntityId`] / [`PropertyId`] indices, never as owning pointers.

mod entity;
mod ids;
mod property;
mod type_info;

pub use entity::{Entity, Links, PropertyGroup, TableName, Verbose};
pub use ids::{EntityId, PropertyId, ResolutionStage};
pub use property::{FileOptions, ForeignKey, Property, PropertyValue, Template};
pub use type_info::TypeInfo;
