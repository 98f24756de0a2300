//! Entity metadata customization and resolution.
//!
//! A reflected type becomes a bare [`model::Entity`]; a
//! [`customize::CustomizationHolder`] collects sparse user overrides; the
//! [`schema::SchemaBuilder`] runs the identity pass for every entity, then the
//! behaviour pass for every entity, and freezes the result into a
//! [`schema::Schema`] that is shared read-only afterwards.

pub mod config;
pub mod customize;
pub mod error;
pub mod model;
pub mod naming;
pub mod obs;
pub mod reflect;
pub mod resolve;
pub mod schema;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::Error;

///
/// Prelude
///
/// Domain vocabulary only; errors and resolver internals stay behind their
/// module paths.
///

pub mod prelude {
    pub use crate::{
        customize::{CustomizationHolder, MemberKey, PropertyCustomizer},
        model::{Entity, EntityId, FileOptions, Property, PropertyId, ResolutionStage, TypeInfo},
        reflect::{MemberDescriptor, Reflect, TypeDescriptor},
        schema::{Schema, SchemaBuilder},
    };
    pub use adminmeta_primitives::{DataType, DeleteOption, FileNameOption, NativeType};
}
